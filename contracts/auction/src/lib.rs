#![no_std]

mod errors;
mod events;
mod external;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, String};

pub use crate::errors::Error;
use crate::events::*;
use crate::external::{AddressRegistryClient, CollectionClient, MarketplaceClient, TokenRegistryClient};
pub use crate::types::{Auction, Config, HighestBid};
use crate::types::{
    DEFAULT_BID_WITHDRAWAL_LOCK_TIME, DEFAULT_MIN_BID_INCREMENT, FEE_DENOMINATOR,
    MIN_AUCTION_DURATION, START_TIME_GRACE,
};

const VERSION: u32 = 1;

/// English auctions for single items of `nft` and `multi-token` collections.
///
/// An auction is keyed by (collection, token id). Bids are escrowed in the
/// auction's pay token; an outbid bidder is refunded immediately. The item
/// stays with its owner until `result_auction` moves it to the winner.
#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the auction contract.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to change settings and upgrade
    /// * `fee_recipient` - Receives platform fees
    /// * `platform_fee` - Fee per mille (25 = 2.5%)
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    /// * `Error::InvalidPlatformFee` - If `platform_fee` exceeds 1000
    pub fn initialize(
        env: Env,
        admin: Address,
        fee_recipient: Address,
        platform_fee: u32,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if platform_fee as i128 > FEE_DENOMINATOR {
            return Err(Error::InvalidPlatformFee);
        }

        storage::set_config(
            &env,
            &Config {
                admin,
                fee_recipient,
                platform_fee,
                min_bid_increment: DEFAULT_MIN_BID_INCREMENT,
                bid_withdrawal_lock_time: DEFAULT_BID_WITHDRAWAL_LOCK_TIME,
                is_paused: false,
                address_registry: None,
                block_contract_bidders: false,
            },
        );
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // ========================================================================
    // AUCTION LIFECYCLE
    // ========================================================================

    /// Put a token up for auction.
    ///
    /// The caller must hold the token and have approved this contract as an
    /// operator of the collection.
    ///
    /// # Errors
    /// * `Error::ContractPaused` - If the contract is paused
    /// * `Error::NotOwnerOrNotApproved` - If the caller does not hold the token or the contract is not approved
    /// * `Error::EndTimeTooEarly` - If `end_time` is not more than 5 minutes after `start_time`
    /// * `Error::InvalidStartTime` - If `start_time` is not in the future
    /// * `Error::AuctionAlreadyExists` - If an unresulted auction exists for the token
    /// * `Error::InvalidPayToken` - If the pay token is not enabled
    #[allow(clippy::too_many_arguments)]
    pub fn create_auction(
        env: Env,
        owner: Address,
        nft: Address,
        token_id: u64,
        category: String,
        pay_token: Address,
        reserve_price: i128,
        start_time: u64,
        min_bid_reserve: bool,
        end_time: u64,
    ) -> Result<(), Error> {
        owner.require_auth();
        let config = Self::require_not_paused(&env)?;

        let collection = CollectionClient::new(&env, &nft);
        if collection.balance_of(&owner, &token_id) == 0
            || !collection.is_approved_for_all(&owner, &env.current_contract_address())
        {
            return Err(Error::NotOwnerOrNotApproved);
        }

        if end_time <= start_time.saturating_add(MIN_AUCTION_DURATION) {
            return Err(Error::EndTimeTooEarly);
        }
        if start_time <= env.ledger().timestamp() {
            return Err(Error::InvalidStartTime);
        }
        if reserve_price < 0 {
            return Err(Error::InvalidAmount);
        }

        if let Some(existing) = storage::get_auction(&env, &nft, token_id) {
            if !existing.resulted {
                return Err(Error::AuctionAlreadyExists);
            }
        }

        Self::validate_pay_token(&env, &config, &pay_token)?;

        storage::save_auction(
            &env,
            &nft,
            token_id,
            &Auction {
                owner: owner.clone(),
                category: category.clone(),
                pay_token: pay_token.clone(),
                reserve_price,
                start_time,
                end_time,
                min_bid_reserve,
                resulted: false,
            },
        );

        AuctionCreated {
            nft,
            token_id,
            owner,
            category,
            pay_token,
            reserve_price,
            start_time,
            end_time,
        }
        .publish(&env);

        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Place a bid of `amount` pay tokens. The amount is escrowed and the
    /// previous highest bidder is refunded in full.
    ///
    /// # Errors
    /// * `Error::ContractPaused` - If the contract is paused
    /// * `Error::NoContractsPermitted` - If contract bidders are blocked and `bidder` is a contract
    /// * `Error::AuctionNotFound` - If there is no auction for the token
    /// * `Error::OutsideAuctionWindow` - If now is outside `[start_time, end_time]`
    /// * `Error::BidBelowReservePrice` - If `min_bid_reserve` is set and `amount` is below the reserve
    /// * `Error::BidTooLow` - If `amount` does not beat the highest bid by the minimum increment
    pub fn place_bid(
        env: Env,
        bidder: Address,
        nft: Address,
        token_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();
        let config = Self::require_not_paused(&env)?;

        if config.block_contract_bidders && is_contract_address(&bidder) {
            return Err(Error::NoContractsPermitted);
        }

        let auction = storage::get_auction(&env, &nft, token_id).ok_or(Error::AuctionNotFound)?;

        let now = env.ledger().timestamp();
        if now < auction.start_time || now > auction.end_time {
            return Err(Error::OutsideAuctionWindow);
        }
        if auction.resulted {
            return Err(Error::AuctionAlreadyResulted);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if auction.min_bid_reserve && amount < auction.reserve_price {
            return Err(Error::BidBelowReservePrice);
        }

        let previous = storage::get_highest_bid(&env, &nft, token_id);
        if let Some(highest) = &previous {
            let min_bid = highest
                .bid
                .checked_add(config.min_bid_increment)
                .ok_or(Error::Overflow)?;
            if amount < min_bid {
                return Err(Error::BidTooLow);
            }
        }

        escrow_bid(&env, &auction.pay_token, &bidder, amount)?;

        if let Some(highest) = previous {
            refund_bid(&env, &auction.pay_token, &highest.bidder, highest.bid)?;
            BidRefunded {
                nft: nft.clone(),
                token_id,
                bidder: highest.bidder,
                bid: highest.bid,
            }
            .publish(&env);
        }

        storage::save_highest_bid(
            &env,
            &nft,
            token_id,
            &HighestBid {
                bidder: bidder.clone(),
                bid: amount,
                last_bid_time: now,
            },
        );

        BidPlaced {
            nft,
            token_id,
            bidder,
            bid: amount,
        }
        .publish(&env);

        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Take back the highest bid of an auction its owner never resulted.
    ///
    /// # Errors
    /// * `Error::ContractPaused` - If the contract is paused
    /// * `Error::NotHighestBidder` - If `bidder` does not hold the highest bid
    /// * `Error::WithdrawLocked` - If the lock time after the auction end has not passed
    pub fn withdraw_bid(env: Env, bidder: Address, nft: Address, token_id: u64) -> Result<(), Error> {
        bidder.require_auth();
        let config = Self::require_not_paused(&env)?;

        let highest = match storage::get_highest_bid(&env, &nft, token_id) {
            Some(highest) if highest.bidder == bidder => highest,
            _ => return Err(Error::NotHighestBidder),
        };
        let auction = storage::get_auction(&env, &nft, token_id).ok_or(Error::AuctionNotFound)?;

        let now = env.ledger().timestamp();
        if now <= auction.end_time
            || now - auction.end_time < config.bid_withdrawal_lock_time
        {
            return Err(Error::WithdrawLocked);
        }

        storage::remove_highest_bid(&env, &nft, token_id);
        refund_bid(&env, &auction.pay_token, &bidder, highest.bid)?;

        BidWithdrawn {
            nft,
            token_id,
            bidder,
            bid: highest.bid,
        }
        .publish(&env);

        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Close an ended auction: the platform fee goes to the fee recipient,
    /// the creator royalty to the creator, the rest to the owner, and the
    /// item to the highest bidder.
    ///
    /// # Errors
    /// * `Error::NotItemOwner` - If the caller is not the auction owner or no longer holds the item
    /// * `Error::AuctionNotEnded` - If the auction is still running
    /// * `Error::AuctionAlreadyResulted` - If the auction was already resulted
    /// * `Error::NoOpenBids` - If nobody bid
    /// * `Error::BidBelowReservePrice` - If the highest bid is below the reserve price
    pub fn result_auction(env: Env, owner: Address, nft: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        let mut auction = storage::get_auction(&env, &nft, token_id).ok_or(Error::AuctionNotFound)?;
        let collection = CollectionClient::new(&env, &nft);
        if auction.owner != owner || collection.balance_of(&owner, &token_id) == 0 {
            return Err(Error::NotItemOwner);
        }
        if env.ledger().timestamp() <= auction.end_time {
            return Err(Error::AuctionNotEnded);
        }
        if auction.resulted {
            return Err(Error::AuctionAlreadyResulted);
        }

        let highest = storage::get_highest_bid(&env, &nft, token_id).ok_or(Error::NoOpenBids)?;
        if highest.bid < auction.reserve_price {
            return Err(Error::BidBelowReservePrice);
        }

        auction.resulted = true;
        storage::save_auction(&env, &nft, token_id, &auction);
        storage::remove_highest_bid(&env, &nft, token_id);

        let pay_token = token::TokenClient::new(&env, &auction.pay_token);
        let contract_address = env.current_contract_address();

        let above_reserve = highest.bid - auction.reserve_price;
        let fee = above_reserve
            .checked_mul(config.platform_fee as i128)
            .ok_or(Error::Overflow)?
            / FEE_DENOMINATOR;
        if fee > 0 {
            pay_token.transfer(&contract_address, &config.fee_recipient, &fee);
        }

        let mut proceeds = highest.bid - fee;
        if let Some((receiver, royalty)) = collection.royalty_info(&token_id, &proceeds) {
            if receiver != owner && royalty > 0 {
                let royalty = royalty.min(proceeds);
                pay_token.transfer(&contract_address, &receiver, &royalty);
                proceeds -= royalty;
            }
        }
        if proceeds > 0 {
            pay_token.transfer(&contract_address, &owner, &proceeds);
        }
        release_escrow(&env, &auction.pay_token, highest.bid)?;

        log!(
            &env,
            "auction resulted: bid {}, fee {}, seller {}",
            highest.bid,
            fee,
            proceeds
        );

        collection.transfer_from(&contract_address, &owner, &highest.bidder, &token_id, &1);

        if let Some(marketplace) = Self::marketplace(&env, &config) {
            MarketplaceClient::new(&env, &marketplace).validate_item_sold(
                &contract_address,
                &nft,
                &token_id,
                &owner,
                &highest.bidder,
            );
        }

        AuctionResulted {
            nft,
            token_id,
            old_owner: owner,
            winner: highest.bidder,
            pay_token: auction.pay_token,
            winning_bid: highest.bid,
        }
        .publish(&env);

        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Cancel an unresulted auction, refunding the highest bidder if any.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - If there is no auction (or it was already cancelled)
    /// * `Error::NotAuctionOwner` - If the caller is not the auction owner
    /// * `Error::AuctionAlreadyResulted` - If the auction was already resulted
    pub fn cancel_auction(env: Env, owner: Address, nft: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();
        storage::get_config(&env).ok_or(Error::NotInitialized)?;

        let auction = storage::get_auction(&env, &nft, token_id).ok_or(Error::AuctionNotFound)?;
        if auction.owner != owner {
            return Err(Error::NotAuctionOwner);
        }
        if auction.resulted {
            return Err(Error::AuctionAlreadyResulted);
        }

        if let Some(highest) = storage::get_highest_bid(&env, &nft, token_id) {
            refund_bid(&env, &auction.pay_token, &highest.bidder, highest.bid)?;
            BidRefunded {
                nft: nft.clone(),
                token_id,
                bidder: highest.bidder,
                bid: highest.bid,
            }
            .publish(&env);
        }

        storage::remove_highest_bid(&env, &nft, token_id);
        storage::remove_auction(&env, &nft, token_id);

        AuctionCancelled { nft, token_id }.publish(&env);

        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // ========================================================================
    // OWNER UPDATES
    // ========================================================================

    pub fn update_auction_reserve_price(
        env: Env,
        owner: Address,
        nft: Address,
        token_id: u64,
        reserve_price: i128,
    ) -> Result<(), Error> {
        let mut auction = Self::require_auction_owner(&env, &owner, &nft, token_id)?;
        if reserve_price < 0 {
            return Err(Error::InvalidAmount);
        }

        auction.reserve_price = reserve_price;
        storage::save_auction(&env, &nft, token_id, &auction);

        UpdateAuctionReservePrice {
            nft,
            token_id,
            pay_token: auction.pay_token,
            reserve_price,
        }
        .publish(&env);
        Ok(())
    }

    /// Move the start of an auction that has not started yet.
    ///
    /// # Errors
    /// * `Error::InvalidStartTime` - If `start_time` is zero
    /// * `Error::AuctionAlreadyStarted` - If the current start time (plus a one minute grace) has passed
    /// * `Error::EndTimeTooEarly` - If the new start is not at least 5 minutes before the end
    pub fn update_auction_start_time(
        env: Env,
        owner: Address,
        nft: Address,
        token_id: u64,
        start_time: u64,
    ) -> Result<(), Error> {
        let mut auction = Self::require_auction_owner(&env, &owner, &nft, token_id)?;
        if start_time == 0 {
            return Err(Error::InvalidStartTime);
        }
        if auction.start_time + START_TIME_GRACE <= env.ledger().timestamp() {
            return Err(Error::AuctionAlreadyStarted);
        }
        if start_time.saturating_add(MIN_AUCTION_DURATION) >= auction.end_time {
            return Err(Error::EndTimeTooEarly);
        }

        auction.start_time = start_time;
        storage::save_auction(&env, &nft, token_id, &auction);

        UpdateAuctionStartTime {
            nft,
            token_id,
            start_time,
        }
        .publish(&env);
        Ok(())
    }

    /// Move the end of a running auction.
    ///
    /// # Errors
    /// * `Error::AuctionAlreadyEnded` - If the auction has ended
    /// * `Error::EndTimeTooEarly` - If `end_time` is not after the start or not more than 5 minutes from now
    pub fn update_auction_end_time(
        env: Env,
        owner: Address,
        nft: Address,
        token_id: u64,
        end_time: u64,
    ) -> Result<(), Error> {
        let mut auction = Self::require_auction_owner(&env, &owner, &nft, token_id)?;
        let now = env.ledger().timestamp();
        if now > auction.end_time {
            return Err(Error::AuctionAlreadyEnded);
        }
        if end_time <= auction.start_time || end_time <= now + MIN_AUCTION_DURATION {
            return Err(Error::EndTimeTooEarly);
        }

        auction.end_time = end_time;
        storage::save_auction(&env, &nft, token_id, &auction);

        UpdateAuctionEndTime {
            nft,
            token_id,
            end_time,
        }
        .publish(&env);
        Ok(())
    }

    // ========================================================================
    // ADMIN
    // ========================================================================

    pub fn toggle_is_paused(env: Env, admin: Address) -> Result<bool, Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        config.is_paused = !config.is_paused;
        storage::set_config(&env, &config);

        PauseToggled {
            is_paused: config.is_paused,
        }
        .publish(&env);

        storage::extend_instance_ttl(&env);
        Ok(config.is_paused)
    }

    pub fn update_min_bid_increment(env: Env, admin: Address, min_bid_increment: i128) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        if min_bid_increment < 0 {
            return Err(Error::InvalidAmount);
        }
        config.min_bid_increment = min_bid_increment;
        storage::set_config(&env, &config);

        UpdateMinBidIncrement { min_bid_increment }.publish(&env);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn update_bid_withdrawal_lock_time(
        env: Env,
        admin: Address,
        bid_withdrawal_lock_time: u64,
    ) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        config.bid_withdrawal_lock_time = bid_withdrawal_lock_time;
        storage::set_config(&env, &config);

        UpdateBidWithdrawalLockTime {
            bid_withdrawal_lock_time,
        }
        .publish(&env);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn update_platform_fee(env: Env, admin: Address, platform_fee: u32) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        if platform_fee as i128 > FEE_DENOMINATOR {
            return Err(Error::InvalidPlatformFee);
        }
        config.platform_fee = platform_fee;
        storage::set_config(&env, &config);

        UpdatePlatformFee { platform_fee }.publish(&env);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn update_platform_fee_recipient(env: Env, admin: Address, fee_recipient: Address) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        config.fee_recipient = fee_recipient.clone();
        storage::set_config(&env, &config);

        UpdatePlatformFeeRecipient { fee_recipient }.publish(&env);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn update_address_registry(env: Env, admin: Address, address_registry: Address) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        config.address_registry = Some(address_registry);
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Reject bids from contract accounts when `blocked` is set.
    pub fn set_block_contract_bidders(env: Env, admin: Address, blocked: bool) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        config.block_contract_bidders = blocked;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Send the contract's balance of `token` that is not backing an open
    /// bid to the admin.
    ///
    /// # Returns
    /// * The amount reclaimed
    pub fn reclaim_token(env: Env, admin: Address, token: Address) -> Result<i128, Error> {
        Self::require_admin(&env, &admin)?;

        let client = token::TokenClient::new(&env, &token);
        let contract_address = env.current_contract_address();
        let free = client.balance(&contract_address) - storage::get_escrow_total(&env, &token);
        if free <= 0 {
            return Err(Error::NothingToReclaim);
        }

        client.transfer(&contract_address, &admin, &free);
        log!(&env, "reclaimed {} of {}", free, token);
        Ok(free)
    }

    pub fn upgrade(env: Env, admin: Address, wasm_hash: BytesN<32>) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        env.deployer().update_current_contract_wasm(wasm_hash);
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_auction(env: Env, nft: Address, token_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, &nft, token_id).ok_or(Error::AuctionNotFound)
    }

    pub fn get_highest_bidder(env: Env, nft: Address, token_id: u64) -> Option<HighestBid> {
        storage::get_highest_bid(&env, &nft, token_id)
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    pub fn version() -> u32 {
        VERSION
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    fn require_admin(env: &Env, admin: &Address) -> Result<Config, Error> {
        admin.require_auth();
        let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
        if config.admin != *admin {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }

    fn require_not_paused(env: &Env) -> Result<Config, Error> {
        let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
        if config.is_paused {
            return Err(Error::ContractPaused);
        }
        Ok(config)
    }

    fn require_auction_owner(
        env: &Env,
        owner: &Address,
        nft: &Address,
        token_id: u64,
    ) -> Result<Auction, Error> {
        owner.require_auth();
        storage::get_config(env).ok_or(Error::NotInitialized)?;

        let auction = storage::get_auction(env, nft, token_id).ok_or(Error::AuctionNotFound)?;
        if auction.owner != *owner {
            return Err(Error::NotAuctionOwner);
        }
        if auction.resulted {
            return Err(Error::AuctionAlreadyResulted);
        }
        Ok(auction)
    }

    fn validate_pay_token(env: &Env, config: &Config, pay_token: &Address) -> Result<(), Error> {
        let Some(registry) = &config.address_registry else {
            return Ok(());
        };
        let token_registry = AddressRegistryClient::new(env, registry)
            .token_registry()
            .ok_or(Error::InvalidPayToken)?;
        if !TokenRegistryClient::new(env, &token_registry).enabled(pay_token) {
            return Err(Error::InvalidPayToken);
        }
        Ok(())
    }

    fn marketplace(env: &Env, config: &Config) -> Option<Address> {
        let registry = config.address_registry.as_ref()?;
        AddressRegistryClient::new(env, registry).marketplace()
    }
}

// ============================================================================
// ESCROW
// ============================================================================

fn escrow_bid(env: &Env, pay_token: &Address, bidder: &Address, amount: i128) -> Result<(), Error> {
    token::TokenClient::new(env, pay_token).transfer(bidder, &env.current_contract_address(), &amount);
    let total = storage::get_escrow_total(env, pay_token)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    storage::set_escrow_total(env, pay_token, total);
    Ok(())
}

fn refund_bid(env: &Env, pay_token: &Address, bidder: &Address, amount: i128) -> Result<(), Error> {
    token::TokenClient::new(env, pay_token).transfer(&env.current_contract_address(), bidder, &amount);
    release_escrow(env, pay_token, amount)?;
    log!(env, "refunded {} to {}", amount, bidder);
    Ok(())
}

fn release_escrow(env: &Env, pay_token: &Address, amount: i128) -> Result<(), Error> {
    let total = storage::get_escrow_total(env, pay_token)
        .checked_sub(amount)
        .ok_or(Error::Overflow)?;
    storage::set_escrow_total(env, pay_token, total.max(0));
    Ok(())
}

/// The strkey version byte is a stable part of the address encoding: contract
/// addresses render with a leading `C`, accounts with `G`.
fn is_contract_address(address: &Address) -> bool {
    let strkey = address.to_string();
    let mut buf = [0u8; 56];
    if strkey.len() as usize != buf.len() {
        return false;
    }
    strkey.copy_into_slice(&mut buf);
    buf[0] == b'C'
}

#[cfg(test)]
mod test;
