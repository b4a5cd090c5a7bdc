//! Campus DAO - Proposal Registry (Soroban)
//! One-address-one-vote governance for a campus community on Stellar.
//!
//! Events:
//! - ("proposal", "created"): [proposal_id: u64, creator: Address, deadline: u64]
//! - ("dao", "voted"): [proposal_id: u64, voter: Address, choice: VoteChoice]
//! - ("config", "updated"): [admin: Address]
//! - ("admin", "proposed"): [candidate: Address]
//! - ("admin", "accepted"): [new_admin: Address]

#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod admin;
mod errors;
mod events;
mod storage;
mod types;

pub use errors::DaoError;
pub use types::{DaoConfig, Proposal, ProposalStatus, VoteChoice, VoteRecord};

// ============================================================
// Contract
// ============================================================

#[contract]
pub struct CampusDaoContract;

#[contractimpl]
impl CampusDaoContract {
    /// Initialize the registry. `None` installs the default limits.
    pub fn initialize(env: Env, admin: Address, config: Option<DaoConfig>) -> Result<(), DaoError> {
        storage::bump_instance(&env);
        if storage::is_initialized(&env) {
            return Err(DaoError::AlreadyInitialized);
        }
        admin.require_auth();

        let config = config.unwrap_or_default();
        config.validate()?;

        storage::set_admin(&env, &admin);
        storage::set_config(&env, &config);
        storage::set_proposal_count(&env, 0);
        Ok(())
    }

    /// Open a new proposal; voting runs until `now + duration_secs`.
    pub fn create_proposal(
        env: Env,
        creator: Address,
        description: String,
        duration_secs: u64,
    ) -> Result<u64, DaoError> {
        storage::bump_instance(&env);
        let config = storage::get_config(&env)?;
        creator.require_auth();

        config.check_description(&description)?;
        let now = env.ledger().timestamp();
        let deadline = config.deadline_for(now, duration_secs)?;

        let proposal_id = storage::proposal_count(&env) + 1;
        let proposal = Proposal::new(proposal_id, description, creator.clone(), now, deadline);

        storage::set_proposal(&env, &proposal);
        storage::set_proposal_count(&env, proposal_id);

        events::proposal_created(&env, proposal_id, &creator, deadline);

        Ok(proposal_id)
    }

    /// Cast a single ballot. Checks, in order: the proposal exists, voting is
    /// still open, and `voter` has not voted on it before.
    pub fn vote(env: Env, voter: Address, proposal_id: u64, choice: VoteChoice) -> Result<(), DaoError> {
        storage::bump_instance(&env);
        if !storage::is_initialized(&env) {
            return Err(DaoError::NotInitialized);
        }
        voter.require_auth();

        let mut proposal = storage::get_proposal(&env, proposal_id).ok_or(DaoError::NotFound)?;

        let now = env.ledger().timestamp();
        if !proposal.accepts_votes(now) {
            return Err(DaoError::VotingClosed);
        }

        if storage::has_vote(&env, proposal_id, &voter) {
            return Err(DaoError::AlreadyVoted);
        }

        proposal.tally(choice);

        let record = VoteRecord {
            choice,
            voted_at: now,
        };
        storage::set_vote(&env, proposal_id, &voter, &record);
        storage::set_proposal(&env, &proposal);

        events::voted(&env, proposal_id, &voter, choice);

        Ok(())
    }

    // ============================================================
    // Administration
    // ============================================================

    /// Replace the limits applied to proposals created from now on.
    pub fn update_config(env: Env, admin: Address, config: DaoConfig) -> Result<(), DaoError> {
        storage::bump_instance(&env);
        admin::require_admin(&env, &admin)?;
        config.validate()?;
        storage::set_config(&env, &config);
        events::config_updated(&env, &admin);
        Ok(())
    }

    pub fn propose_admin(env: Env, current_admin: Address, new_admin: Address) -> Result<(), DaoError> {
        storage::bump_instance(&env);
        admin::propose_admin(&env, &current_admin, &new_admin)
    }

    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), DaoError> {
        storage::bump_instance(&env);
        admin::accept_admin(&env, &new_admin)
    }

    // ============================================================
    // Read-Only Functions
    // ============================================================

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, DaoError> {
        storage::bump_instance(&env);
        storage::get_proposal(&env, proposal_id).ok_or(DaoError::NotFound)
    }

    /// False for unknown ids.
    pub fn is_active(env: Env, proposal_id: u64) -> bool {
        storage::bump_instance(&env);
        let now = env.ledger().timestamp();
        storage::get_proposal(&env, proposal_id)
            .map(|p| p.is_active(now))
            .unwrap_or(false)
    }

    pub fn proposal_status(env: Env, proposal_id: u64) -> Result<ProposalStatus, DaoError> {
        storage::bump_instance(&env);
        let proposal = storage::get_proposal(&env, proposal_id).ok_or(DaoError::NotFound)?;
        Ok(proposal.status(env.ledger().timestamp()))
    }

    pub fn proposal_count(env: Env) -> u64 {
        storage::bump_instance(&env);
        storage::proposal_count(&env)
    }

    /// Every proposal, newest first.
    pub fn list_proposals(env: Env) -> Vec<Proposal> {
        storage::bump_instance(&env);
        newest_first(&env, 0, u32::MAX)
    }

    /// Newest first, skipping the `offset` most recent, at most `limit` entries.
    pub fn list_proposals_page(env: Env, offset: u32, limit: u32) -> Vec<Proposal> {
        storage::bump_instance(&env);
        newest_first(&env, offset, limit)
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        storage::bump_instance(&env);
        storage::has_vote(&env, proposal_id, &voter)
    }

    pub fn get_vote(env: Env, proposal_id: u64, voter: Address) -> Option<VoteRecord> {
        storage::bump_instance(&env);
        storage::get_vote(&env, proposal_id, &voter)
    }

    pub fn get_config(env: Env) -> Result<DaoConfig, DaoError> {
        storage::bump_instance(&env);
        storage::get_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, DaoError> {
        storage::bump_instance(&env);
        storage::get_admin(&env)
    }
}

fn newest_first(env: &Env, offset: u32, limit: u32) -> Vec<Proposal> {
    let mut out = Vec::new(env);
    let mut id = storage::proposal_count(env).saturating_sub(offset as u64);
    while id > 0 && out.len() < limit {
        if let Some(proposal) = storage::get_proposal(env, id) {
            out.push_back(proposal);
        }
        id -= 1;
    }
    out
}
