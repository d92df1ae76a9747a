#![no_std]

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;

/// Bumped on every release that changes the contract interface.
const VERSION: u32 = 1;

/// Allow-list of payment tokens accepted by the auction and the marketplace.
#[contract]
pub struct TokenRegistry;

#[contractimpl]
impl TokenRegistry {
    // ========== INITIALIZATION ==========

    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_initialized(&env);
        storage::set_admin(&env, &admin);
        storage::extend_instance_ttl(&env);

        Ok(())
    }

    // ========== TOKEN MANAGEMENT ==========

    /// Enable a payment token
    pub fn add(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        if storage::is_enabled(&env, &token) {
            return Err(Error::TokenAlreadyAdded);
        }

        storage::enable_token(&env, &token);
        events::emit_token_added(&env, token);
        storage::extend_instance_ttl(&env);

        Ok(())
    }

    /// Disable a payment token
    pub fn remove(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        if !storage::is_enabled(&env, &token) {
            return Err(Error::TokenNotExist);
        }

        storage::disable_token(&env, &token);
        events::emit_token_removed(&env, token);
        storage::extend_instance_ttl(&env);

        Ok(())
    }

    // ========== QUERIES ==========

    pub fn enabled(env: Env, token: Address) -> bool {
        storage::is_enabled(&env, &token)
    }

    /// All currently enabled tokens, in insertion order
    pub fn list(env: Env) -> Vec<Address> {
        storage::get_tokens(&env)
    }

    // ========== ACCESS CONTROL ==========

    pub fn set_admin(env: Env, current_admin: Address, new_admin: Address) -> Result<(), Error> {
        Self::require_admin(&env, &current_admin)?;

        storage::set_admin(&env, &new_admin);
        events::emit_admin_changed(&env, current_admin, new_admin);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotInitialized)
    }

    pub fn upgrade(env: Env, admin: Address, wasm_hash: BytesN<32>) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        env.deployer().update_current_contract_wasm(wasm_hash);
        Ok(())
    }

    pub fn version() -> u32 {
        VERSION
    }

    // ========== INTERNAL HELPERS ==========

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        admin.require_auth();
        let stored_admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        if *admin != stored_admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test;
