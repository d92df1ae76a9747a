use soroban_sdk::{contractclient, Address, String};

/// Minting entry point of the `nft` collection.
#[allow(dead_code)]
#[contractclient(name = "CollectionClient")]
pub trait Collection {
    fn mint(minter: Address, to: Address, uri: String, royalty_bps: u32) -> u64;
}
