use soroban_sdk::{contracttype, Address, String};

pub const ROYALTY_DENOMINATOR: u32 = 10_000;
pub const MAX_ROYALTY_BPS: u32 = ROYALTY_DENOMINATOR;

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    /// Last issued token id; ids start at 1
    LastTokenId,
    Balance(u64, Address),
    Supply(u64),
    Operator(Address, Address),
    TokenInfo(u64),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionConfig {
    pub owner: Address,
    pub name: String,
    pub base_uri: String,
    pub mint_fee: i128,
    pub fee_token: Address,
    pub fee_recipient: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenInfo {
    pub creator: Address,
    pub royalty_bps: u32,
    pub uri: String,
}
