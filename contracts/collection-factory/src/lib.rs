#![no_std]

use soroban_sdk::{contract, contractimpl, token, vec, Address, BytesN, Env, IntoVal, String, Symbol, Val, Vec};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
pub use types::{CollectionKind, CollectionRecord, FactoryConfig};

const VERSION: u32 = 1;

/// Deploys `nft` and `multi-token` collections for creators.
///
/// Every collection the factory deploys starts with the factory's base URI,
/// mint fee and fee recipient, and is owned by its creator.
#[contract]
pub struct CollectionFactory;

#[contractimpl]
impl CollectionFactory {
    // ========== INITIALIZATION ==========

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        admin: Address,
        nft_wasm_hash: BytesN<32>,
        multi_token_wasm_hash: BytesN<32>,
        base_uri: String,
        mint_fee: i128,
        collection_fee: i128,
        fee_token: Address,
        fee_recipient: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        if mint_fee < 0 || collection_fee < 0 {
            return Err(Error::InvalidFee);
        }

        storage::set_initialized(&env);
        storage::set_admin(&env, &admin);
        storage::set_paused(&env, false);
        storage::set_config(
            &env,
            &FactoryConfig {
                nft_wasm_hash,
                multi_token_wasm_hash,
                base_uri,
                mint_fee,
                collection_fee,
                fee_token,
                fee_recipient,
            },
        );
        storage::extend_instance_ttl(&env);

        events::emit_factory_initialized(&env, admin);

        Ok(())
    }

    // ========== COLLECTION DEPLOYMENT ==========

    /// Deploy a new collection owned by `creator`, charging the collection fee.
    ///
    /// `symbol` is ignored for `CollectionKind::Multi`.
    pub fn create_collection(
        env: Env,
        creator: Address,
        kind: CollectionKind,
        name: String,
        symbol: String,
        salt: BytesN<32>,
    ) -> Result<Address, Error> {
        Self::require_not_paused(&env)?;

        creator.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        if config.collection_fee > 0 {
            let token_client = token::Client::new(&env, &config.fee_token);
            token_client.transfer(&creator, &config.fee_recipient, &config.collection_fee);
            events::emit_fee_collected(&env, creator.clone(), config.collection_fee);
        }

        let wasm_hash = match kind {
            CollectionKind::Single => config.nft_wasm_hash.clone(),
            CollectionKind::Multi => config.multi_token_wasm_hash.clone(),
        };
        let deployed_address = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(wasm_hash, ());

        Self::call_collection_init(&env, &deployed_address, kind, &creator, &name, &symbol, &config);

        storage::set_collection(
            &env,
            &deployed_address,
            &CollectionRecord {
                creator: Some(creator.clone()),
                kind,
                created_at: env.ledger().timestamp(),
            },
        );
        let collection_id = storage::increment_collection_counter(&env);

        events::emit_collection_created(&env, creator, deployed_address.clone(), kind, name, collection_id);
        storage::extend_instance_ttl(&env);

        Ok(deployed_address)
    }

    // ========== COLLECTION REGISTRY ==========

    /// Mark a collection deployed elsewhere as known to the platform (admin only)
    pub fn register_collection(
        env: Env,
        admin: Address,
        collection: Address,
        kind: CollectionKind,
    ) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        if storage::get_collection(&env, &collection).is_some() {
            return Err(Error::CollectionAlreadyRegistered);
        }

        storage::set_collection(
            &env,
            &collection,
            &CollectionRecord {
                creator: None,
                kind,
                created_at: env.ledger().timestamp(),
            },
        );

        events::emit_collection_registered(&env, collection, kind);

        Ok(())
    }

    /// Forget a collection (admin only)
    pub fn disable_collection(env: Env, admin: Address, collection: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        if storage::get_collection(&env, &collection).is_none() {
            return Err(Error::CollectionNotRegistered);
        }

        storage::remove_collection(&env, &collection);

        events::emit_collection_disabled(&env, collection);

        Ok(())
    }

    pub fn exists(env: Env, collection: Address) -> bool {
        storage::get_collection(&env, &collection).is_some()
    }

    pub fn get_collection(env: Env, collection: Address) -> Result<CollectionRecord, Error> {
        storage::get_collection(&env, &collection).ok_or(Error::CollectionNotRegistered)
    }

    /// Number of collections deployed through the factory
    pub fn get_collection_count(env: Env) -> u64 {
        storage::get_collection_counter(&env)
    }

    // ========== FEE MANAGEMENT ==========

    /// Update the mint fee handed to new collections (admin only)
    pub fn update_mint_fee(env: Env, admin: Address, mint_fee: i128) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        if mint_fee < 0 {
            return Err(Error::InvalidFee);
        }

        let mut config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        config.mint_fee = mint_fee;
        storage::set_config(&env, &config);

        events::emit_fee_config_updated(&env, config.mint_fee, config.collection_fee, config.fee_recipient);

        Ok(())
    }

    /// Update the deployment fee (admin only)
    pub fn update_collection_fee(env: Env, admin: Address, collection_fee: i128) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        if collection_fee < 0 {
            return Err(Error::InvalidFee);
        }

        let mut config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        config.collection_fee = collection_fee;
        storage::set_config(&env, &config);

        events::emit_fee_config_updated(&env, config.mint_fee, config.collection_fee, config.fee_recipient);

        Ok(())
    }

    pub fn update_fee_recipient(env: Env, admin: Address, fee_recipient: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        let mut config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        config.fee_recipient = fee_recipient.clone();
        storage::set_config(&env, &config);

        events::emit_fee_config_updated(&env, config.mint_fee, config.collection_fee, fee_recipient);

        Ok(())
    }

    pub fn update_base_uri(env: Env, admin: Address, base_uri: String) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        let mut config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        config.base_uri = base_uri;
        storage::set_config(&env, &config);

        Ok(())
    }

    /// Point a collection kind at new contract code; existing collections keep theirs
    pub fn update_wasm_hash(
        env: Env,
        admin: Address,
        kind: CollectionKind,
        wasm_hash: BytesN<32>,
    ) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        let mut config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        match kind {
            CollectionKind::Single => config.nft_wasm_hash = wasm_hash.clone(),
            CollectionKind::Multi => config.multi_token_wasm_hash = wasm_hash.clone(),
        }
        storage::set_config(&env, &config);

        events::emit_wasm_hash_updated(&env, kind, wasm_hash);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<FactoryConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    // ========== ACCESS CONTROL ==========

    /// Transfer admin role
    pub fn set_admin(env: Env, current_admin: Address, new_admin: Address) -> Result<(), Error> {
        Self::require_admin(&env, &current_admin)?;

        storage::set_admin(&env, &new_admin);

        events::emit_admin_changed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Pause/unpause factory (admin only)
    pub fn set_paused(env: Env, admin: Address, paused: bool) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        storage::set_paused(&env, paused);

        events::emit_factory_paused(&env, admin, paused);

        Ok(())
    }

    /// Check if factory is paused
    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
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

    fn require_not_paused(env: &Env) -> Result<(), Error> {
        if !storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        if storage::is_paused(env) {
            return Err(Error::FactoryPaused);
        }
        Ok(())
    }

    /// Call `initialize` on the freshly deployed collection
    fn call_collection_init(
        env: &Env,
        collection: &Address,
        kind: CollectionKind,
        owner: &Address,
        name: &String,
        symbol: &String,
        config: &FactoryConfig,
    ) {
        let init_fn = Symbol::new(env, "initialize");
        let args: Vec<Val> = match kind {
            CollectionKind::Single => vec![
                env,
                owner.into_val(env),
                name.into_val(env),
                symbol.into_val(env),
                config.base_uri.into_val(env),
                config.mint_fee.into_val(env),
                config.fee_token.into_val(env),
                config.fee_recipient.into_val(env),
            ],
            CollectionKind::Multi => vec![
                env,
                owner.into_val(env),
                name.into_val(env),
                config.base_uri.into_val(env),
                config.mint_fee.into_val(env),
                config.fee_token.into_val(env),
                config.fee_recipient.into_val(env),
            ],
        };
        env.invoke_contract::<()>(collection, &init_fn, args);
    }
}

#[cfg(test)]
mod test;
