use soroban_sdk::{contractevent, Address};

/// Event emitted when marketplace is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub platform_fee: u32,
}

/// Event emitted when an item is listed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemListed {
    #[topic]
    pub owner: Address,
    #[topic]
    pub nft: Address,
    pub token_id: u64,
    pub quantity: u64,
    pub pay_token: Address,
    pub price_per_item: i128,
    pub start_time: u64,
}

/// Event emitted when a listing's price or pay token changes
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemUpdated {
    #[topic]
    pub owner: Address,
    #[topic]
    pub nft: Address,
    pub token_id: u64,
    pub pay_token: Address,
    pub new_price: i128,
}

/// Event emitted when a listing is removed without a sale
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemCanceled {
    #[topic]
    pub owner: Address,
    #[topic]
    pub nft: Address,
    pub token_id: u64,
}

/// Event emitted on every completed sale
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemSold {
    #[topic]
    pub seller: Address,
    #[topic]
    pub buyer: Address,
    pub nft: Address,
    pub token_id: u64,
    pub quantity: u64,
    pub pay_token: Address,
    pub price_per_item: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OfferCreated {
    #[topic]
    pub creator: Address,
    #[topic]
    pub nft: Address,
    pub token_id: u64,
    pub quantity: u64,
    pub pay_token: Address,
    pub price_per_item: i128,
    pub deadline: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OfferCanceled {
    #[topic]
    pub creator: Address,
    #[topic]
    pub nft: Address,
    pub token_id: u64,
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
