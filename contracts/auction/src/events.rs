use soroban_sdk::{contractevent, Address, String};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u64,
    pub owner: Address,
    pub category: String,
    pub pay_token: Address,
    pub reserve_price: i128,
    pub start_time: u64,
    pub end_time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u64,
    pub bidder: Address,
    pub bid: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidWithdrawn {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u64,
    pub bidder: Address,
    pub bid: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRefunded {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u64,
    pub bidder: Address,
    pub bid: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionResulted {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u64,
    pub old_owner: Address,
    pub winner: Address,
    pub pay_token: Address,
    pub winning_bid: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelled {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateAuctionReservePrice {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u64,
    pub pay_token: Address,
    pub reserve_price: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateAuctionStartTime {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u64,
    pub start_time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateAuctionEndTime {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u64,
    pub end_time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdatePlatformFee {
    pub platform_fee: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdatePlatformFeeRecipient {
    pub fee_recipient: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateMinBidIncrement {
    pub min_bid_increment: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateBidWithdrawalLockTime {
    pub bid_withdrawal_lock_time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseToggled {
    pub is_paused: bool,
}
