use soroban_sdk::{contracttype, Address, BytesN, String};

/// Storage keys for factory contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    Initialized,
    Paused,
    Config,
    CollectionCounter,
    /// Set for collections the factory deployed or the admin registered
    Collection(Address),
}

/// Which collection contract to deploy
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CollectionKind {
    /// `nft`, one holder per token id
    Single = 0,
    /// `multi-token`, many editions per token id
    Multi = 1,
}

/// Factory configuration
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FactoryConfig {
    pub nft_wasm_hash: BytesN<32>,
    pub multi_token_wasm_hash: BytesN<32>,
    /// Base URI handed to every new collection
    pub base_uri: String,
    /// Mint fee handed to every new collection
    pub mint_fee: i128,
    /// Charged to the creator for each deployment
    pub collection_fee: i128,
    pub fee_token: Address,
    pub fee_recipient: Address,
}

/// Record of a collection known to the factory
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionRecord {
    pub creator: Option<Address>,
    pub kind: CollectionKind,
    pub created_at: u64,
}
