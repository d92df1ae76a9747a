use soroban_sdk::{Address, Env};

use crate::types::{
    CollectionConfig, DataKey, TokenInfo, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn bump(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn get_config(e: &Env) -> Option<CollectionConfig> {
    e.storage().instance().get(&DataKey::Config)
}

pub fn set_config(e: &Env, config: &CollectionConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn next_token_id(e: &Env) -> u64 {
    let last: u64 = e
        .storage()
        .instance()
        .get(&DataKey::LastTokenId)
        .unwrap_or(0);
    let id = last + 1;
    e.storage().instance().set(&DataKey::LastTokenId, &id);
    id
}

pub fn get_balance(e: &Env, token_id: u64, owner: &Address) -> u64 {
    let key = DataKey::Balance(token_id, owner.clone());
    let balance = e.storage().persistent().get::<_, u64>(&key);
    if balance.is_some() {
        bump(e, &key);
    }
    balance.unwrap_or(0)
}

pub fn set_balance(e: &Env, token_id: u64, owner: &Address, balance: u64) {
    let key = DataKey::Balance(token_id, owner.clone());
    if balance == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &balance);
        bump(e, &key);
    }
}

pub fn get_supply(e: &Env, token_id: u64) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::Supply(token_id))
        .unwrap_or(0)
}

pub fn set_supply(e: &Env, token_id: u64, supply: u64) {
    let key = DataKey::Supply(token_id);
    e.storage().persistent().set(&key, &supply);
    bump(e, &key);
}

pub fn is_operator(e: &Env, owner: &Address, operator: &Address) -> bool {
    let key = DataKey::Operator(owner.clone(), operator.clone());
    e.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_operator(e: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = DataKey::Operator(owner.clone(), operator.clone());
    if approved {
        e.storage().persistent().set(&key, &true);
        bump(e, &key);
    } else {
        e.storage().persistent().remove(&key);
    }
}

pub fn get_token_info(e: &Env, token_id: u64) -> Option<TokenInfo> {
    let key = DataKey::TokenInfo(token_id);
    let info = e.storage().persistent().get::<_, TokenInfo>(&key);
    if info.is_some() {
        bump(e, &key);
    }
    info
}

pub fn set_token_info(e: &Env, token_id: u64, info: &TokenInfo) {
    let key = DataKey::TokenInfo(token_id);
    e.storage().persistent().set(&key, info);
    bump(e, &key);
}
