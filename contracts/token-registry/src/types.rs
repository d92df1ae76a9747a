use soroban_sdk::{contracttype, Address};

/// Storage keys for the token registry
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    Initialized,
    Tokens,
    Enabled(Address),
}
