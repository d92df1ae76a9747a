use soroban_sdk::{Address, Env};

use crate::types::{
    Listing, MarketplaceConfig, Offer, StorageKey, PERSISTENT_TTL_AMOUNT,
    PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INITIALIZATION STORAGE
// ============================================================================

/// Check if contract is initialized
pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false)
}

/// Mark contract as initialized
pub fn set_initialized(e: &Env) {
    e.storage()
        .instance()
        .set(&StorageKey::Initialized, &true);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

pub fn get_config(e: &Env) -> Option<MarketplaceConfig> {
    e.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(e: &Env, config: &MarketplaceConfig) {
    e.storage().instance().set(&StorageKey::Config, config);
}

// ============================================================================
// LISTING STORAGE
// ============================================================================

/// Get the listing of `owner` for an item
pub fn get_listing(e: &Env, nft: &Address, token_id: u64, owner: &Address) -> Option<Listing> {
    let key = StorageKey::Listing(nft.clone(), token_id, owner.clone());
    let listing = e.storage().persistent().get::<_, Listing>(&key);
    if listing.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    listing
}

pub fn set_listing(e: &Env, nft: &Address, token_id: u64, owner: &Address, listing: &Listing) {
    let key = StorageKey::Listing(nft.clone(), token_id, owner.clone());
    e.storage().persistent().set(&key, listing);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Remove a listing, returning whether one existed
pub fn remove_listing(e: &Env, nft: &Address, token_id: u64, owner: &Address) -> bool {
    let key = StorageKey::Listing(nft.clone(), token_id, owner.clone());
    let existed = e.storage().persistent().has(&key);
    e.storage().persistent().remove(&key);
    existed
}

// ============================================================================
// OFFER STORAGE
// ============================================================================

/// Get the offer of `creator` for an item
pub fn get_offer(e: &Env, nft: &Address, token_id: u64, creator: &Address) -> Option<Offer> {
    let key = StorageKey::Offer(nft.clone(), token_id, creator.clone());
    let offer = e.storage().persistent().get::<_, Offer>(&key);
    if offer.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    offer
}

pub fn set_offer(e: &Env, nft: &Address, token_id: u64, creator: &Address, offer: &Offer) {
    let key = StorageKey::Offer(nft.clone(), token_id, creator.clone());
    e.storage().persistent().set(&key, offer);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Remove an offer, returning whether one existed
pub fn remove_offer(e: &Env, nft: &Address, token_id: u64, creator: &Address) -> bool {
    let key = StorageKey::Offer(nft.clone(), token_id, creator.clone());
    let existed = e.storage().persistent().has(&key);
    e.storage().persistent().remove(&key);
    existed
}
