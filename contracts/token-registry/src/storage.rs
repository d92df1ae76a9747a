use soroban_sdk::{Address, Env, Vec};
use crate::types::StorageKey;

const DAY_IN_LEDGERS: u32 = 17280;
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

// ========== Tokens ==========

pub fn is_enabled(env: &Env, token: &Address) -> bool {
    let key = StorageKey::Enabled(token.clone());
    let enabled = env.storage().persistent().get::<_, bool>(&key).unwrap_or(false);
    if enabled {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    enabled
}

pub fn get_tokens(env: &Env) -> Vec<Address> {
    env.storage().persistent().get(&StorageKey::Tokens).unwrap_or(Vec::new(env))
}

pub fn enable_token(env: &Env, token: &Address) {
    let key = StorageKey::Enabled(token.clone());
    env.storage().persistent().set(&key, &true);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);

    let mut tokens = get_tokens(env);
    tokens.push_back(token.clone());
    env.storage().persistent().set(&StorageKey::Tokens, &tokens);
    env.storage().persistent().extend_ttl(&StorageKey::Tokens, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn disable_token(env: &Env, token: &Address) {
    env.storage().persistent().remove(&StorageKey::Enabled(token.clone()));

    let tokens = get_tokens(env);
    let mut remaining = Vec::new(env);
    for addr in tokens.iter() {
        if addr != *token {
            remaining.push_back(addr);
        }
    }
    env.storage().persistent().set(&StorageKey::Tokens, &remaining);
}
