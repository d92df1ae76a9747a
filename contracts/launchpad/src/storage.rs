use crate::types::{DataKey, Sale, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD};
use soroban_sdk::Env;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

pub fn has_sale(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Sale)
}

pub fn get_sale(env: &Env) -> Option<Sale> {
    env.storage().instance().get(&DataKey::Sale)
}

pub fn set_sale(env: &Env, sale: &Sale) {
    env.storage().instance().set(&DataKey::Sale, sale);
}

pub fn get_sold(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::Sold).unwrap_or(0)
}

pub fn set_sold(env: &Env, sold: u64) {
    env.storage().instance().set(&DataKey::Sold, &sold);
}
