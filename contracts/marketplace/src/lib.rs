#![no_std]

mod errors;
mod events;
mod external;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env};

pub use crate::errors::Error;
use crate::events::*;
use crate::external::{AddressRegistryClient, CollectionClient, TokenRegistryClient};
use crate::storage::*;
pub use crate::types::{Listing, MarketplaceConfig, Offer};

// ============================================================================
// Constants
// ============================================================================

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Platform fee denominator (fees are per mille)
const FEE_DENOMINATOR: i128 = 1000;

const VERSION: u32 = 1;

// ============================================================================
// Contract
// ============================================================================

/// Fixed-price marketplace for `nft` and `multi-token` items.
///
/// Handles:
/// - Listings keyed by (collection, token id, owner), bought in full
/// - Non-custodial offers, paid through a token allowance on acceptance
/// - Platform fee and creator royalty on every sale
/// - Cleanup of stale listings and offers after an auction sale
///
/// Items never leave the seller until the sale: the marketplace moves them as
/// an approved operator of the collection.
#[contract]
pub struct MarketplaceContract;

#[contractimpl]
impl MarketplaceContract {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the marketplace.
    ///
    /// # Arguments
    /// * `admin` - Address that will have admin privileges
    /// * `fee_recipient` - Receives platform fees
    /// * `platform_fee` - Fee per mille of the sale price (25 = 2.5%)
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    /// * `Error::InvalidPlatformFee` - If `platform_fee` exceeds 1000
    pub fn initialize(
        e: &Env,
        admin: Address,
        fee_recipient: Address,
        platform_fee: u32,
    ) -> Result<(), Error> {
        admin.require_auth();

        if is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        if platform_fee as i128 > FEE_DENOMINATOR {
            return Err(Error::InvalidPlatformFee);
        }

        let config = MarketplaceConfig {
            admin: admin.clone(),
            fee_recipient,
            platform_fee,
            address_registry: None,
            updated_at: e.ledger().timestamp(),
        };

        set_config(e, &config);
        set_initialized(e);
        Self::extend_instance_ttl(e);

        InitializedEventData {
            admin,
            platform_fee,
        }
        .publish(e);

        Ok(())
    }

    // ========================================================================
    // LISTINGS
    // ========================================================================

    /// List `quantity` units of an item at a fixed price per unit.
    ///
    /// # Arguments
    /// * `owner` - Holder of the item
    /// * `start_time` - Buying opens at this timestamp
    ///
    /// # Errors
    /// * `Error::AlreadyListed` - If the owner already listed this item
    /// * `Error::InvalidQuantity` - If `quantity` is zero
    /// * `Error::NotOwningItem` - If the owner holds less than `quantity`
    /// * `Error::ItemNotApproved` - If the marketplace is not an approved operator
    /// * `Error::InvalidPayToken` - If the pay token is not enabled
    #[allow(clippy::too_many_arguments)]
    pub fn list_item(
        e: &Env,
        owner: Address,
        nft: Address,
        token_id: u64,
        quantity: u64,
        pay_token: Address,
        price_per_item: i128,
        start_time: u64,
    ) -> Result<(), Error> {
        owner.require_auth();
        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if get_listing(e, &nft, token_id, &owner).is_some() {
            return Err(Error::AlreadyListed);
        }
        if quantity == 0 {
            return Err(Error::InvalidQuantity);
        }
        if price_per_item <= 0 {
            return Err(Error::InvalidPrice);
        }
        Self::require_holding(e, &nft, token_id, &owner, quantity)?;
        Self::validate_pay_token(e, &config, &pay_token)?;

        set_listing(
            e,
            &nft,
            token_id,
            &owner,
            &Listing {
                quantity,
                pay_token: pay_token.clone(),
                price_per_item,
                start_time,
            },
        );

        ItemListed {
            owner,
            nft,
            token_id,
            quantity,
            pay_token,
            price_per_item,
            start_time,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Remove a listing
    ///
    /// # Errors
    /// * `Error::NotListed` - If the owner has no listing for this item
    /// * `Error::NotOwningItem` - If the owner no longer holds the listed quantity
    pub fn cancel_listing(e: &Env, owner: Address, nft: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();
        get_config(e).ok_or(Error::NotInitialized)?;

        let listing = get_listing(e, &nft, token_id, &owner).ok_or(Error::NotListed)?;
        let collection = CollectionClient::new(e, &nft);
        if collection.balance_of(&owner, &token_id) < listing.quantity {
            return Err(Error::NotOwningItem);
        }

        remove_listing(e, &nft, token_id, &owner);
        ItemCanceled {
            owner,
            nft,
            token_id,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Change the pay token and unit price of a listing
    ///
    /// # Errors
    /// * `Error::NotListed` - If the owner has no listing for this item
    /// * `Error::NotOwningItem` - If the owner no longer holds the listed quantity
    /// * `Error::InvalidPayToken` - If the pay token is not enabled
    pub fn update_listing(
        e: &Env,
        owner: Address,
        nft: Address,
        token_id: u64,
        pay_token: Address,
        new_price: i128,
    ) -> Result<(), Error> {
        owner.require_auth();
        let config = get_config(e).ok_or(Error::NotInitialized)?;

        let mut listing = get_listing(e, &nft, token_id, &owner).ok_or(Error::NotListed)?;
        let collection = CollectionClient::new(e, &nft);
        if collection.balance_of(&owner, &token_id) < listing.quantity {
            return Err(Error::NotOwningItem);
        }
        if new_price <= 0 {
            return Err(Error::InvalidPrice);
        }
        Self::validate_pay_token(e, &config, &pay_token)?;

        listing.pay_token = pay_token.clone();
        listing.price_per_item = new_price;
        set_listing(e, &nft, token_id, &owner, &listing);

        ItemUpdated {
            owner,
            nft,
            token_id,
            pay_token,
            new_price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Buy the whole listed quantity of `owner`'s listing.
    ///
    /// # Errors
    /// * `Error::NotListed` - If the owner has no listing for this item
    /// * `Error::NotOwningItem` - If the owner no longer holds the listed quantity
    /// * `Error::ItemNotBuyable` - If the listing has not started
    /// * `Error::InvalidPayToken` - If `pay_token` differs from the listing's
    pub fn buy_item(
        e: &Env,
        buyer: Address,
        nft: Address,
        token_id: u64,
        pay_token: Address,
        owner: Address,
    ) -> Result<(), Error> {
        buyer.require_auth();
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        if buyer == owner {
            return Err(Error::SelfPurchase);
        }

        let listing = get_listing(e, &nft, token_id, &owner).ok_or(Error::NotListed)?;
        let collection = CollectionClient::new(e, &nft);
        if collection.balance_of(&owner, &token_id) < listing.quantity {
            return Err(Error::NotOwningItem);
        }
        if e.ledger().timestamp() < listing.start_time {
            return Err(Error::ItemNotBuyable);
        }
        if listing.pay_token != pay_token {
            return Err(Error::InvalidPayToken);
        }

        let price = (listing.quantity as i128)
            .checked_mul(listing.price_per_item)
            .ok_or(Error::Overflow)?;

        remove_listing(e, &nft, token_id, &owner);
        Self::settle(e, &config, &collection, &pay_token, &buyer, false, token_id, &owner, price)?;
        collection.transfer_from(
            &e.current_contract_address(),
            &owner,
            &buyer,
            &token_id,
            &listing.quantity,
        );

        ItemSold {
            seller: owner,
            buyer,
            nft,
            token_id,
            quantity: listing.quantity,
            pay_token,
            price_per_item: listing.price_per_item,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // OFFERS
    // ========================================================================

    /// Offer to buy `quantity` units of an item before `deadline`.
    ///
    /// The creator must grant the marketplace an allowance of at least
    /// `quantity * price_per_item` on `pay_token` for the offer to be accepted.
    ///
    /// # Errors
    /// * `Error::InvalidExpiration` - If `deadline` is not in the future
    /// * `Error::OfferAlreadyCreated` - If the creator has a live offer for this item
    /// * `Error::InvalidPayToken` - If the pay token is not enabled
    #[allow(clippy::too_many_arguments)]
    pub fn create_offer(
        e: &Env,
        creator: Address,
        nft: Address,
        token_id: u64,
        pay_token: Address,
        quantity: u64,
        price_per_item: i128,
        deadline: u64,
    ) -> Result<(), Error> {
        creator.require_auth();
        let config = get_config(e).ok_or(Error::NotInitialized)?;

        let now = e.ledger().timestamp();
        if deadline <= now {
            return Err(Error::InvalidExpiration);
        }
        if let Some(existing) = get_offer(e, &nft, token_id, &creator) {
            if existing.deadline > now {
                return Err(Error::OfferAlreadyCreated);
            }
        }
        if quantity == 0 {
            return Err(Error::InvalidQuantity);
        }
        if price_per_item <= 0 {
            return Err(Error::InvalidPrice);
        }
        Self::validate_pay_token(e, &config, &pay_token)?;

        set_offer(
            e,
            &nft,
            token_id,
            &creator,
            &Offer {
                pay_token: pay_token.clone(),
                quantity,
                price_per_item,
                deadline,
            },
        );

        OfferCreated {
            creator,
            nft,
            token_id,
            quantity,
            pay_token,
            price_per_item,
            deadline,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    pub fn cancel_offer(e: &Env, creator: Address, nft: Address, token_id: u64) -> Result<(), Error> {
        creator.require_auth();
        get_config(e).ok_or(Error::NotInitialized)?;

        if !remove_offer(e, &nft, token_id, &creator) {
            return Err(Error::OfferNotExists);
        }

        OfferCanceled {
            creator,
            nft,
            token_id,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Sell to `creator`'s offer. Any listing the owner has for the item is
    /// removed.
    ///
    /// # Errors
    /// * `Error::OfferNotExists` - If the creator has no offer for this item
    /// * `Error::OfferExpired` - If the offer deadline has passed
    /// * `Error::NotOwningItem` - If the owner holds less than the offered quantity
    /// * `Error::ItemNotApproved` - If the marketplace is not an approved operator
    pub fn accept_offer(
        e: &Env,
        owner: Address,
        nft: Address,
        token_id: u64,
        creator: Address,
    ) -> Result<(), Error> {
        owner.require_auth();
        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if creator == owner {
            return Err(Error::SelfPurchase);
        }
        let offer = get_offer(e, &nft, token_id, &creator).ok_or(Error::OfferNotExists)?;
        if offer.deadline <= e.ledger().timestamp() {
            return Err(Error::OfferExpired);
        }
        Self::require_holding(e, &nft, token_id, &owner, offer.quantity)?;

        let price = (offer.quantity as i128)
            .checked_mul(offer.price_per_item)
            .ok_or(Error::Overflow)?;

        remove_offer(e, &nft, token_id, &creator);
        remove_listing(e, &nft, token_id, &owner);

        let collection = CollectionClient::new(e, &nft);
        Self::settle(e, &config, &collection, &offer.pay_token, &creator, true, token_id, &owner, price)?;
        collection.transfer_from(
            &e.current_contract_address(),
            &owner,
            &creator,
            &token_id,
            &offer.quantity,
        );

        ItemSold {
            seller: owner,
            buyer: creator.clone(),
            nft: nft.clone(),
            token_id,
            quantity: offer.quantity,
            pay_token: offer.pay_token,
            price_per_item: offer.price_per_item,
        }
        .publish(e);
        OfferCanceled {
            creator,
            nft,
            token_id,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // AUCTION HOOK
    // ========================================================================

    /// Called by the auction contract after it settled an item: drops the
    /// seller's listing and the buyer's offer for that item.
    ///
    /// # Errors
    /// * `Error::SenderMustBeAuction` - If `caller` is not the auction registered in the address registry
    pub fn validate_item_sold(
        e: &Env,
        caller: Address,
        nft: Address,
        token_id: u64,
        seller: Address,
        buyer: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        let config = get_config(e).ok_or(Error::NotInitialized)?;

        let registry = config
            .address_registry
            .ok_or(Error::SenderMustBeAuction)?;
        if AddressRegistryClient::new(e, &registry).auction() != Some(caller) {
            return Err(Error::SenderMustBeAuction);
        }

        if remove_listing(e, &nft, token_id, &seller) {
            ItemCanceled {
                owner: seller,
                nft: nft.clone(),
                token_id,
            }
            .publish(e);
        }
        if remove_offer(e, &nft, token_id, &buyer) {
            OfferCanceled {
                creator: buyer,
                nft,
                token_id,
            }
            .publish(e);
        }

        Ok(())
    }

    // ========================================================================
    // ADMIN
    // ========================================================================

    /// Update the platform fee, per mille (admin only)
    pub fn update_platform_fee(e: &Env, admin: Address, platform_fee: u32) -> Result<(), Error> {
        let mut config = Self::require_admin(e, &admin)?;

        if platform_fee as i128 > FEE_DENOMINATOR {
            return Err(Error::InvalidPlatformFee);
        }

        config.platform_fee = platform_fee;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        UpdatePlatformFee { platform_fee }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Update the fee recipient (admin only)
    pub fn update_platform_fee_recipient(
        e: &Env,
        admin: Address,
        fee_recipient: Address,
    ) -> Result<(), Error> {
        let mut config = Self::require_admin(e, &admin)?;

        config.fee_recipient = fee_recipient.clone();
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        UpdatePlatformFeeRecipient { fee_recipient }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Point the marketplace at the address registry (admin only)
    pub fn update_address_registry(
        e: &Env,
        admin: Address,
        address_registry: Address,
    ) -> Result<(), Error> {
        let mut config = Self::require_admin(e, &admin)?;

        config.address_registry = Some(address_registry);
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    pub fn upgrade(e: &Env, admin: Address, wasm_hash: BytesN<32>) -> Result<(), Error> {
        Self::require_admin(e, &admin)?;
        e.deployer().update_current_contract_wasm(wasm_hash);
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_listing(e: &Env, nft: Address, token_id: u64, owner: Address) -> Option<Listing> {
        get_listing(e, &nft, token_id, &owner)
    }

    pub fn get_offer(e: &Env, nft: Address, token_id: u64, creator: Address) -> Option<Offer> {
        get_offer(e, &nft, token_id, &creator)
    }

    /// Get marketplace configuration
    pub fn get_config(e: &Env) -> Result<MarketplaceConfig, Error> {
        get_config(e).ok_or(Error::NotInitialized)
    }

    pub fn version() -> u32 {
        VERSION
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }

    fn require_admin(e: &Env, admin: &Address) -> Result<MarketplaceConfig, Error> {
        admin.require_auth();
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        if *admin != config.admin {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }

    fn require_holding(
        e: &Env,
        nft: &Address,
        token_id: u64,
        owner: &Address,
        quantity: u64,
    ) -> Result<(), Error> {
        let collection = CollectionClient::new(e, nft);
        if collection.balance_of(owner, &token_id) < quantity {
            return Err(Error::NotOwningItem);
        }
        if !collection.is_approved_for_all(owner, &e.current_contract_address()) {
            return Err(Error::ItemNotApproved);
        }
        Ok(())
    }

    fn validate_pay_token(e: &Env, config: &MarketplaceConfig, pay_token: &Address) -> Result<(), Error> {
        let Some(registry) = &config.address_registry else {
            return Ok(());
        };
        let token_registry = AddressRegistryClient::new(e, registry)
            .token_registry()
            .ok_or(Error::InvalidPayToken)?;
        if !TokenRegistryClient::new(e, &token_registry).enabled(pay_token) {
            return Err(Error::InvalidPayToken);
        }
        Ok(())
    }

    /// Split `price` between fee recipient, royalty receiver and seller.
    ///
    /// With `pull` set the funds are drawn from `payer` through the
    /// marketplace's allowance, otherwise `payer` transfers them directly.
    #[allow(clippy::too_many_arguments)]
    fn settle(
        e: &Env,
        config: &MarketplaceConfig,
        collection: &CollectionClient,
        pay_token: &Address,
        payer: &Address,
        pull: bool,
        token_id: u64,
        seller: &Address,
        price: i128,
    ) -> Result<(), Error> {
        let client = token::TokenClient::new(e, pay_token);
        let marketplace = e.current_contract_address();
        let pay = |to: &Address, amount: i128| {
            if pull {
                client.transfer_from(&marketplace, payer, to, &amount);
            } else {
                client.transfer(payer, to, &amount);
            }
        };

        let fee = price
            .checked_mul(config.platform_fee as i128)
            .ok_or(Error::Overflow)?
            / FEE_DENOMINATOR;
        if fee > 0 {
            pay(&config.fee_recipient, fee);
        }

        let mut proceeds = price - fee;
        let mut royalty_paid = 0;
        if let Some((receiver, royalty)) = collection.royalty_info(&token_id, &proceeds) {
            if receiver != *seller && royalty > 0 {
                royalty_paid = royalty.min(proceeds);
                pay(&receiver, royalty_paid);
                proceeds -= royalty_paid;
            }
        }
        if proceeds > 0 {
            pay(seller, proceeds);
        }

        log!(
            e,
            "sale settled: price {}, fee {}, royalty {}, seller {}",
            price,
            fee,
            royalty_paid,
            proceeds
        );
        Ok(())
    }
}
