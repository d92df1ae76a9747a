use soroban_sdk::{contracttype, Address, String};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sale {
    pub admin: Address,
    /// `nft` collection the launchpad mints from
    pub collection: Address,
    pub pay_token: Address,
    /// Receives sale proceeds
    pub treasury: Address,
    /// Price per item
    pub price: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub max_supply: u64,
    /// Metadata URI given to every minted item
    pub token_uri: String,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Sale,
    Sold,
}
