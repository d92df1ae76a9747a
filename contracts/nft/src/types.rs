use soroban_sdk::{contracttype, Address, String};

/// Royalties are expressed in basis points of the sale price.
pub const ROYALTY_DENOMINATOR: u32 = 10_000;
pub const MAX_ROYALTY_BPS: u32 = ROYALTY_DENOMINATOR;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    NextTokenId,
    TotalSupply,
    Owner(u64),
    Balance(Address),
    Approved(u64),
    Operator(Address, Address),
    TokenInfo(u64),
    Minter,
}

/// Collection-wide settings fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionConfig {
    pub owner: Address,
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    /// Paid by the minter for every token, in `fee_token`
    pub mint_fee: i128,
    pub fee_token: Address,
    pub fee_recipient: Address,
}

/// Per-token metadata recorded at mint time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenInfo {
    pub creator: Address,
    pub royalty_bps: u32,
    pub uri: String,
}
