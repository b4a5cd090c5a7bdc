use soroban_sdk::{Address, Env};

use crate::errors::DaoError;
use crate::events;
use crate::storage;

/// Authenticates `caller` and checks it against the stored admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), DaoError> {
    caller.require_auth();
    let stored = storage::get_admin(env)?;
    if *caller != stored {
        return Err(DaoError::Unauthorized);
    }
    Ok(())
}

/// First half of a two-step rotation: the current admin nominates a successor.
pub fn propose_admin(env: &Env, current_admin: &Address, new_admin: &Address) -> Result<(), DaoError> {
    require_admin(env, current_admin)?;
    storage::set_pending_admin(env, new_admin);
    events::admin_proposed(env, new_admin);
    Ok(())
}

/// Second half: the nominee accepts and becomes admin.
pub fn accept_admin(env: &Env, new_admin: &Address) -> Result<(), DaoError> {
    new_admin.require_auth();
    let pending = storage::get_pending_admin(env).ok_or(DaoError::NoPendingAdmin)?;
    if *new_admin != pending {
        return Err(DaoError::Unauthorized);
    }
    storage::set_admin(env, new_admin);
    storage::clear_pending_admin(env);
    events::admin_accepted(env, new_admin);
    Ok(())
}
