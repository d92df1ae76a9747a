use soroban_sdk::{contracttype, Address, String};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Platform fee is expressed per mille (25 = 2.5%)
pub const FEE_DENOMINATOR: i128 = 1000;

/// Shortest allowed auction, in seconds
pub const MIN_AUCTION_DURATION: u64 = 300;

/// Grace period after which a started auction can no longer be rescheduled
pub const START_TIME_GRACE: u64 = 60;

/// 12 hours
pub const DEFAULT_BID_WITHDRAWAL_LOCK_TIME: u64 = 43_200;

pub const DEFAULT_MIN_BID_INCREMENT: i128 = 1;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub fee_recipient: Address,
    /// Per mille, taken from the part of the winning bid above the reserve
    pub platform_fee: u32,
    pub min_bid_increment: i128,
    pub bid_withdrawal_lock_time: u64,
    pub is_paused: bool,
    pub address_registry: Option<Address>,
    pub block_contract_bidders: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub owner: Address,
    pub category: String,
    pub pay_token: Address,
    pub reserve_price: i128,
    pub start_time: u64,
    pub end_time: u64,
    /// When set, every bid must reach the reserve price
    pub min_bid_reserve: bool,
    pub resulted: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighestBid {
    pub bidder: Address,
    pub bid: i128,
    pub last_bid_time: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Auction(Address, u64),
    HighestBid(Address, u64),
    /// Sum of bids currently held for a pay token
    EscrowTotal(Address),
}
