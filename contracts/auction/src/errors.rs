use soroban_sdk::contracterror;

/// Error codes for the auction contract (1xx range).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 100,
    /// Contract has not been initialized
    NotInitialized = 101,
    /// Caller is not the admin
    Unauthorized = 102,
    /// Contract is paused
    ContractPaused = 103,
    /// Caller does not hold the token or the auction is not an approved operator
    NotOwnerOrNotApproved = 104,
    /// End time must be more than 5 minutes after the start time
    EndTimeTooEarly = 105,
    /// Start time is zero or not in the future
    InvalidStartTime = 106,
    /// An unresulted auction already exists for this token
    AuctionAlreadyExists = 107,
    /// Pay token is not enabled in the token registry
    InvalidPayToken = 108,
    /// Contract accounts may not bid
    NoContractsPermitted = 109,
    /// No auction for this token
    AuctionNotFound = 110,
    /// Bid placed outside of the auction duration
    OutsideAuctionWindow = 111,
    /// Auction has already been resulted
    AuctionAlreadyResulted = 112,
    /// Bid is lower than the reserve price
    BidBelowReservePrice = 113,
    /// Bid does not beat the highest bid by the minimum increment
    BidTooLow = 114,
    /// Caller is not the highest bidder
    NotHighestBidder = 115,
    /// Bid can only be withdrawn once the lock time after the end has passed
    WithdrawLocked = 116,
    /// Caller is not the auction owner or no longer holds the token
    NotItemOwner = 117,
    /// Auction has not ended yet
    AuctionNotEnded = 118,
    /// Auction has no bids
    NoOpenBids = 119,
    /// Caller is not the auction owner
    NotAuctionOwner = 120,
    /// Auction has already started
    AuctionAlreadyStarted = 121,
    /// Auction has already ended
    AuctionAlreadyEnded = 122,
    /// Amount must be positive
    InvalidAmount = 123,
    /// Platform fee above 100%
    InvalidPlatformFee = 124,
    /// Arithmetic overflow on an amount
    Overflow = 125,
    /// Contract holds no free balance of the token
    NothingToReclaim = 126,
}
