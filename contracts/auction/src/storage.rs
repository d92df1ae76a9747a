use crate::types::{
    Auction, Config, DataKey, HighestBid, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{Address, Env};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<Config> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_auction(env: &Env, nft: &Address, token_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(nft.clone(), token_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(env: &Env, nft: &Address, token_id: u64, auction: &Auction) {
    let key = DataKey::Auction(nft.clone(), token_id);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_auction(env: &Env, nft: &Address, token_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Auction(nft.clone(), token_id));
}

pub fn get_highest_bid(env: &Env, nft: &Address, token_id: u64) -> Option<HighestBid> {
    let key = DataKey::HighestBid(nft.clone(), token_id);
    let bid = env.storage().persistent().get::<_, HighestBid>(&key);
    if bid.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    bid
}

pub fn save_highest_bid(env: &Env, nft: &Address, token_id: u64, bid: &HighestBid) {
    let key = DataKey::HighestBid(nft.clone(), token_id);
    env.storage().persistent().set(&key, bid);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_highest_bid(env: &Env, nft: &Address, token_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::HighestBid(nft.clone(), token_id));
}

pub fn get_escrow_total(env: &Env, pay_token: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::EscrowTotal(pay_token.clone()))
        .unwrap_or(0)
}

pub fn set_escrow_total(env: &Env, pay_token: &Address, amount: i128) {
    let key = DataKey::EscrowTotal(pay_token.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
