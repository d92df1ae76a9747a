#![no_std]

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
pub use types::Component;

const VERSION: u32 = 1;

/// Directory of the platform's sibling contracts.
///
/// Auction and marketplace resolve each other and the token registry through
/// this contract, so a redeployed component only needs one pointer update.
#[contract]
pub struct AddressRegistry;

#[contractimpl]
impl AddressRegistry {
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

    // ========== UPDATES (Admin Only) ==========

    pub fn update_auction(env: Env, admin: Address, auction: Address) -> Result<(), Error> {
        Self::update(&env, &admin, Component::Auction, auction)
    }

    pub fn update_marketplace(env: Env, admin: Address, marketplace: Address) -> Result<(), Error> {
        Self::update(&env, &admin, Component::Marketplace, marketplace)
    }

    pub fn update_token_registry(env: Env, admin: Address, token_registry: Address) -> Result<(), Error> {
        Self::update(&env, &admin, Component::TokenRegistry, token_registry)
    }

    pub fn update_factory(env: Env, admin: Address, factory: Address) -> Result<(), Error> {
        Self::update(&env, &admin, Component::Factory, factory)
    }

    // ========== QUERIES ==========

    pub fn auction(env: Env) -> Option<Address> {
        storage::get_entry(&env, Component::Auction)
    }

    pub fn marketplace(env: Env) -> Option<Address> {
        storage::get_entry(&env, Component::Marketplace)
    }

    pub fn token_registry(env: Env) -> Option<Address> {
        storage::get_entry(&env, Component::TokenRegistry)
    }

    pub fn factory(env: Env) -> Option<Address> {
        storage::get_entry(&env, Component::Factory)
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

    fn update(env: &Env, admin: &Address, component: Component, address: Address) -> Result<(), Error> {
        Self::require_admin(env, admin)?;

        storage::set_entry(env, component, &address);
        events::emit_address_updated(env, component, address);
        storage::extend_instance_ttl(env);

        Ok(())
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        admin.require_auth();
        let stored_admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        if *admin != stored_admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
