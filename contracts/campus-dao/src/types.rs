use soroban_sdk::{contracttype, Address, String};

use crate::errors::DaoError;

// ============================================================
// Votes
// ============================================================

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteChoice {
    For,
    Against,
    Abstain,
}

/// A cast ballot. Its presence under `(proposal_id, voter)` is what marks the
/// address as having voted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteRecord {
    pub choice: VoteChoice,
    pub voted_at: u64,
}

// ============================================================
// Proposals
// ============================================================

/// Derived lifecycle view, never stored.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Active,
    Ended,
    Executed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub description: String,
    pub creator: Address,
    pub created_at: u64,
    pub deadline: u64,
    pub for_votes: u64,
    pub against_votes: u64,
    pub abstain_votes: u64,
    // Reserved: no entry point sets this yet.
    pub executed: bool,
}

impl Proposal {
    pub fn new(id: u64, description: String, creator: Address, now: u64, deadline: u64) -> Self {
        Proposal {
            id,
            description,
            creator,
            created_at: now,
            deadline,
            for_votes: 0,
            against_votes: 0,
            abstain_votes: 0,
            executed: false,
        }
    }

    /// Voting is open strictly before the deadline.
    pub fn accepts_votes(&self, now: u64) -> bool {
        now < self.deadline
    }

    pub fn is_active(&self, now: u64) -> bool {
        !self.executed && self.accepts_votes(now)
    }

    pub fn status(&self, now: u64) -> ProposalStatus {
        if self.executed {
            ProposalStatus::Executed
        } else if self.accepts_votes(now) {
            ProposalStatus::Active
        } else {
            ProposalStatus::Ended
        }
    }

    /// One address, one vote: every ballot weighs exactly 1.
    pub(crate) fn tally(&mut self, choice: VoteChoice) {
        match choice {
            VoteChoice::For => self.for_votes += 1,
            VoteChoice::Against => self.against_votes += 1,
            VoteChoice::Abstain => self.abstain_votes += 1,
        }
    }
}

// ============================================================
// Configuration
// ============================================================

pub const DEFAULT_MIN_DURATION_SECS: u64 = 1;
pub const DEFAULT_MAX_DURATION_SECS: u64 = u64::MAX;
pub const DEFAULT_MAX_DESCRIPTION_LEN: u32 = u32::MAX;

/// Limits applied to new proposals. The defaults only reject an empty
/// description or a zero duration; tighter caps are opt-in via
/// `update_config`. Changing them never touches proposals that already exist.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DaoConfig {
    pub min_duration_secs: u64,
    pub max_duration_secs: u64,
    pub max_description_len: u32,
}

impl Default for DaoConfig {
    fn default() -> Self {
        DaoConfig {
            min_duration_secs: DEFAULT_MIN_DURATION_SECS,
            max_duration_secs: DEFAULT_MAX_DURATION_SECS,
            max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
        }
    }
}

impl DaoConfig {
    pub fn validate(&self) -> Result<(), DaoError> {
        if self.min_duration_secs == 0
            || self.min_duration_secs > self.max_duration_secs
            || self.max_description_len == 0
        {
            return Err(DaoError::InvalidArgument);
        }
        Ok(())
    }

    pub fn check_description(&self, description: &String) -> Result<(), DaoError> {
        let len = description.len();
        if len == 0 || len > self.max_description_len {
            return Err(DaoError::InvalidArgument);
        }
        Ok(())
    }

    /// Absolute deadline for a proposal opened at `now`.
    pub fn deadline_for(&self, now: u64, duration_secs: u64) -> Result<u64, DaoError> {
        if duration_secs == 0
            || duration_secs < self.min_duration_secs
            || duration_secs > self.max_duration_secs
        {
            return Err(DaoError::InvalidArgument);
        }
        now.checked_add(duration_secs)
            .ok_or(DaoError::InvalidArgument)
    }
}
