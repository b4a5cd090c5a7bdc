use soroban_sdk::{contracttype, Address, Env};

use crate::errors::DaoError;
use crate::types::{DaoConfig, Proposal, VoteRecord};

// ============================================================
// Storage Keys
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    PendingAdmin,
    Config,
    ProposalCounter,
    Proposal(u64),
    Voter(u64, Address),
}

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 34_560;
const PERSISTENT_BUMP_AMOUNT: u32 = 259_200;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ============================================================
// Admin & config (instance storage)
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, DaoError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(DaoError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PendingAdmin)
}

pub fn set_pending_admin(env: &Env, candidate: &Address) {
    env.storage().instance().set(&DataKey::PendingAdmin, candidate);
}

pub fn clear_pending_admin(env: &Env) {
    env.storage().instance().remove(&DataKey::PendingAdmin);
}

pub fn get_config(env: &Env) -> Result<DaoConfig, DaoError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(DaoError::NotInitialized)
}

pub fn set_config(env: &Env, config: &DaoConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCounter)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set(&DataKey::ProposalCounter, &count);
}

// ============================================================
// Proposals & ballots (persistent storage)
// ============================================================

pub fn get_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    let key = DataKey::Proposal(proposal_id);
    let proposal: Option<Proposal> = env.storage().persistent().get(&key);
    if proposal.is_some() {
        bump_persistent(env, &key);
    }
    proposal
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

pub fn has_vote(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    let key = DataKey::Voter(proposal_id, voter.clone());
    let voted = env.storage().persistent().has(&key);
    if voted {
        bump_persistent(env, &key);
    }
    voted
}

pub fn get_vote(env: &Env, proposal_id: u64, voter: &Address) -> Option<VoteRecord> {
    let key = DataKey::Voter(proposal_id, voter.clone());
    let record: Option<VoteRecord> = env.storage().persistent().get(&key);
    if record.is_some() {
        bump_persistent(env, &key);
    }
    record
}

pub fn set_vote(env: &Env, proposal_id: u64, voter: &Address, record: &VoteRecord) {
    let key = DataKey::Voter(proposal_id, voter.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}
