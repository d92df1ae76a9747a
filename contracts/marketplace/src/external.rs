use soroban_sdk::{contractclient, Address};

/// Marketplace-facing surface shared by the `nft` and `multi-token` collections.
#[allow(dead_code)]
#[contractclient(name = "CollectionClient")]
pub trait Collection {
    fn balance_of(owner: Address, token_id: u64) -> u64;
    fn is_approved_for_all(owner: Address, operator: Address) -> bool;
    fn transfer_from(spender: Address, from: Address, to: Address, token_id: u64, amount: u64);
    fn royalty_info(token_id: u64, sale_price: i128) -> Option<(Address, i128)>;
}

#[allow(dead_code)]
#[contractclient(name = "AddressRegistryClient")]
pub trait AddressRegistry {
    fn auction() -> Option<Address>;
    fn token_registry() -> Option<Address>;
}

#[allow(dead_code)]
#[contractclient(name = "TokenRegistryClient")]
pub trait TokenRegistry {
    fn enabled(token: Address) -> bool;
}
