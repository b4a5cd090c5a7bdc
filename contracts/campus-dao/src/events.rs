use soroban_sdk::{symbol_short, Address, Env};

use crate::types::VoteChoice;

pub fn proposal_created(env: &Env, proposal_id: u64, creator: &Address, deadline: u64) {
    env.events().publish(
        (symbol_short!("proposal"), symbol_short!("created")),
        (proposal_id, creator.clone(), deadline),
    );
}

pub fn voted(env: &Env, proposal_id: u64, voter: &Address, choice: VoteChoice) {
    env.events().publish(
        (symbol_short!("dao"), symbol_short!("voted")),
        (proposal_id, voter.clone(), choice),
    );
}

pub fn config_updated(env: &Env, admin: &Address) {
    env.events().publish(
        (symbol_short!("config"), symbol_short!("updated")),
        admin.clone(),
    );
}

pub fn admin_proposed(env: &Env, candidate: &Address) {
    env.events().publish(
        (symbol_short!("admin"), symbol_short!("proposed")),
        candidate.clone(),
    );
}

pub fn admin_accepted(env: &Env, new_admin: &Address) {
    env.events().publish(
        (symbol_short!("admin"), symbol_short!("accepted")),
        new_admin.clone(),
    );
}
