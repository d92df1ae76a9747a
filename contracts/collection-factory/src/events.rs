use soroban_sdk::{contractevent, Address, BytesN, Env, String};

use crate::types::CollectionKind;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryInitialized {
    #[topic]
    pub admin: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionCreated {
    #[topic]
    pub creator: Address,
    #[topic]
    pub collection: Address,
    pub kind: CollectionKind,
    pub name: String,
    pub collection_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionRegistered {
    #[topic]
    pub collection: Address,
    pub kind: CollectionKind,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionDisabled {
    #[topic]
    pub collection: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeCollected {
    #[topic]
    pub creator: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfigUpdated {
    pub mint_fee: i128,
    pub collection_fee: i128,
    pub fee_recipient: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WasmHashUpdated {
    #[topic]
    pub kind: CollectionKind,
    pub wasm_hash: BytesN<32>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryPaused {
    #[topic]
    pub admin: Address,
    pub is_paused: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    #[topic]
    pub old_admin: Address,
    pub new_admin: Address,
}

pub fn emit_factory_initialized(env: &Env, admin: Address) {
    FactoryInitialized { admin }.publish(env);
}

pub fn emit_collection_created(
    env: &Env,
    creator: Address,
    collection: Address,
    kind: CollectionKind,
    name: String,
    collection_id: u64,
) {
    CollectionCreated { creator, collection, kind, name, collection_id }.publish(env);
}

pub fn emit_collection_registered(env: &Env, collection: Address, kind: CollectionKind) {
    CollectionRegistered { collection, kind }.publish(env);
}

pub fn emit_collection_disabled(env: &Env, collection: Address) {
    CollectionDisabled { collection }.publish(env);
}

pub fn emit_fee_collected(env: &Env, creator: Address, amount: i128) {
    FeeCollected { creator, amount }.publish(env);
}

pub fn emit_fee_config_updated(env: &Env, mint_fee: i128, collection_fee: i128, fee_recipient: Address) {
    FeeConfigUpdated { mint_fee, collection_fee, fee_recipient }.publish(env);
}

pub fn emit_wasm_hash_updated(env: &Env, kind: CollectionKind, wasm_hash: BytesN<32>) {
    WasmHashUpdated { kind, wasm_hash }.publish(env);
}

pub fn emit_factory_paused(env: &Env, admin: Address, is_paused: bool) {
    FactoryPaused { admin, is_paused }.publish(env);
}

pub fn emit_admin_changed(env: &Env, old_admin: Address, new_admin: Address) {
    AdminChanged { old_admin, new_admin }.publish(env);
}
