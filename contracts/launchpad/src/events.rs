use soroban_sdk::{contractevent, Address, Vec};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleCreated {
    #[topic]
    pub collection: Address,
    pub price: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub max_supply: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemsBought {
    #[topic]
    pub buyer: Address,
    pub token_ids: Vec<u64>,
    pub paid: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleUpdated {
    pub price: i128,
    pub start_time: u64,
    pub end_time: u64,
}
