use soroban_sdk::{contracttype, Address};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold before extending persistent storage (89 days)
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys for the marketplace contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Initialization flag
    Initialized,
    /// Marketplace configuration
    Config,
    /// Listing by (collection, token id, owner)
    Listing(Address, u64, Address),
    /// Offer by (collection, token id, creator)
    Offer(Address, u64, Address),
}

/// Marketplace configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketplaceConfig {
    pub admin: Address,
    pub fee_recipient: Address,
    /// Per mille of the sale price
    pub platform_fee: u32,
    pub address_registry: Option<Address>,
    pub updated_at: u64,
}

/// Fixed-price listing
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub quantity: u64,
    pub pay_token: Address,
    pub price_per_item: i128,
    /// Buying opens at this timestamp
    pub start_time: u64,
}

/// Standing offer to buy. Funds stay with the creator until acceptance,
/// when they are pulled through the allowance granted to the marketplace.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Offer {
    pub pay_token: Address,
    pub quantity: u64,
    pub price_per_item: i128,
    pub deadline: u64,
}
