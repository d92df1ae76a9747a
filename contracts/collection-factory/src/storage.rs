use soroban_sdk::{Address, Env};
use crate::types::{CollectionRecord, FactoryConfig, StorageKey};

const DAY_IN_LEDGERS: u32 = 17280; // ~5 second block time
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

// ========== Admin ==========

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

// ========== Paused State ==========

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&StorageKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&StorageKey::Paused, &paused);
}

// ========== Config ==========

pub fn get_config(env: &Env) -> Option<FactoryConfig> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &FactoryConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

// ========== Collections ==========

pub fn get_collection_counter(env: &Env) -> u64 {
    env.storage().instance().get(&StorageKey::CollectionCounter).unwrap_or(0)
}

pub fn increment_collection_counter(env: &Env) -> u64 {
    let counter = get_collection_counter(env) + 1;
    env.storage().instance().set(&StorageKey::CollectionCounter, &counter);
    counter
}

pub fn get_collection(env: &Env, address: &Address) -> Option<CollectionRecord> {
    let key = StorageKey::Collection(address.clone());
    let record = env.storage().persistent().get::<_, CollectionRecord>(&key);
    if record.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    record
}

pub fn set_collection(env: &Env, address: &Address, record: &CollectionRecord) {
    let key = StorageKey::Collection(address.clone());
    env.storage().persistent().set(&key, record);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_collection(env: &Env, address: &Address) {
    env.storage().persistent().remove(&StorageKey::Collection(address.clone()));
}
