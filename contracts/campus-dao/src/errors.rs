use soroban_sdk::contracterror;

/// Rejections returned by the Campus DAO entry points.
///
/// Every variant is a synchronous, non-retryable failure. The host rolls back
/// the invocation, and the contract checks all preconditions before writing,
/// so a rejected call never leaves partial state behind.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DaoError {
    /// `initialize` has not been called yet
    NotInitialized = 1,

    /// `initialize` was already called
    AlreadyInitialized = 2,

    /// Caller is not the admin (or the pending admin)
    Unauthorized = 3,

    /// Empty or oversized description, out-of-range duration, or bad config
    InvalidArgument = 4,

    /// No proposal with the requested id
    NotFound = 5,

    /// Vote submitted at or after the proposal deadline
    VotingClosed = 6,

    /// The address already voted on this proposal
    AlreadyVoted = 7,

    /// `accept_admin` called with no rotation in progress
    NoPendingAdmin = 8,
}
