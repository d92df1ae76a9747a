use soroban_sdk::{Address, Env};
use crate::types::{Component, StorageKey};

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

// Entries share the instance TTL.
pub fn get_entry(env: &Env, component: Component) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Entry(component))
}

pub fn set_entry(env: &Env, component: Component, address: &Address) {
    env.storage().instance().set(&StorageKey::Entry(component), address);
}
