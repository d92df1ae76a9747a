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

// ========== Config ==========

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn get_config(e: &Env) -> Option<CollectionConfig> {
    e.storage().instance().get(&DataKey::Config)
}

pub fn set_config(e: &Env, config: &CollectionConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

/// Sole address allowed to mint, when set.
pub fn get_minter(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Minter)
}

pub fn set_minter(e: &Env, minter: &Option<Address>) {
    match minter {
        Some(minter) => e.storage().instance().set(&DataKey::Minter, minter),
        None => e.storage().instance().remove(&DataKey::Minter),
    }
}

// ========== Supply ==========

/// Returns the id the next mint will use and advances the counter.
pub fn take_next_token_id(e: &Env) -> u64 {
    let id: u64 = e
        .storage()
        .instance()
        .get(&DataKey::NextTokenId)
        .unwrap_or(0);
    e.storage().instance().set(&DataKey::NextTokenId, &(id + 1));
    id
}

pub fn get_total_supply(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(e: &Env, supply: u64) {
    e.storage().instance().set(&DataKey::TotalSupply, &supply);
}

// ========== Ownership ==========

pub fn get_owner(e: &Env, token_id: u64) -> Option<Address> {
    let key = DataKey::Owner(token_id);
    let owner = e.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        bump(e, &key);
    }
    owner
}

pub fn set_owner(e: &Env, token_id: u64, owner: &Address) {
    let key = DataKey::Owner(token_id);
    e.storage().persistent().set(&key, owner);
    bump(e, &key);
}

pub fn remove_owner(e: &Env, token_id: u64) {
    e.storage().persistent().remove(&DataKey::Owner(token_id));
}

pub fn get_balance(e: &Env, owner: &Address) -> u64 {
    let key = DataKey::Balance(owner.clone());
    e.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(e: &Env, owner: &Address, balance: u64) {
    let key = DataKey::Balance(owner.clone());
    if balance == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &balance);
        bump(e, &key);
    }
}

// ========== Approvals ==========

pub fn get_approved(e: &Env, token_id: u64) -> Option<Address> {
    e.storage().persistent().get(&DataKey::Approved(token_id))
}

pub fn set_approved(e: &Env, token_id: u64, spender: &Address) {
    let key = DataKey::Approved(token_id);
    e.storage().persistent().set(&key, spender);
    bump(e, &key);
}

pub fn clear_approved(e: &Env, token_id: u64) {
    e.storage().persistent().remove(&DataKey::Approved(token_id));
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

// ========== Token info ==========

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

pub fn remove_token_info(e: &Env, token_id: u64) {
    e.storage().persistent().remove(&DataKey::TokenInfo(token_id));
}
