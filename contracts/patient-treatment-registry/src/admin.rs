use soroban_sdk::{log, Address, Env};

use crate::error::RegistryError;
use crate::events;
use crate::storage;
use crate::types::RegistryConfig;

/// Largest page `get_initial_patients` may be configured to return.
pub const MAX_INITIAL_BATCH_SIZE: u32 = 100;

fn validate_config(config: &RegistryConfig) -> Result<(), RegistryError> {
    if config.initial_batch_size == 0 || config.initial_batch_size > MAX_INITIAL_BATCH_SIZE {
        return Err(RegistryError::InvalidConfig);
    }
    Ok(())
}

pub fn initialize(env: &Env, admin: Address, config: RegistryConfig) -> Result<(), RegistryError> {
    if storage::has_admin(env) {
        return Err(RegistryError::AlreadyInitialized);
    }
    admin.require_auth();
    validate_config(&config)?;

    storage::set_admin(env, &admin);
    storage::set_config(env, &config);
    events::emit_config_updated(env, &config);

    Ok(())
}

pub fn set_config(env: &Env, config: RegistryConfig) -> Result<(), RegistryError> {
    let admin = storage::get_admin(env).ok_or_else(|| {
        log!(env, "Registry has no admin; call initialize first");
        RegistryError::NotInitialized
    })?;
    admin.require_auth();
    validate_config(&config)?;

    storage::set_config(env, &config);
    events::emit_config_updated(env, &config);

    Ok(())
}

pub fn get_config(env: &Env) -> RegistryConfig {
    storage::get_config(env)
}
