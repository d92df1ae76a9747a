#![no_std]

//! Single-edition (ERC-721 style) collection.
//!
//! Besides the usual ownership and approval calls, the contract exposes the
//! marketplace-facing surface shared with `multi-token`: `balance_of`,
//! `is_approved_for_all`, `transfer_from` and `royalty_info`, so auction and
//! marketplace can trade either kind of collection through one client.

mod errors;
mod events;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

pub use crate::errors::Error;
use crate::events::*;
pub use crate::types::{CollectionConfig, TokenInfo, MAX_ROYALTY_BPS, ROYALTY_DENOMINATOR};

#[contract]
pub struct NftCollection;

#[contractimpl]
impl NftCollection {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the collection.
    ///
    /// # Arguments
    /// * `owner` - Collection owner, allowed to change the mint fee and base URI
    /// * `mint_fee` - Amount of `fee_token` charged per mint (0 = free)
    /// * `fee_recipient` - Receives mint fees
    pub fn initialize(
        e: Env,
        owner: Address,
        name: String,
        symbol: String,
        base_uri: String,
        mint_fee: i128,
        fee_token: Address,
        fee_recipient: Address,
    ) -> Result<(), Error> {
        if storage::has_config(&e) {
            return Err(Error::AlreadyInitialized);
        }
        if mint_fee < 0 {
            return Err(Error::InvalidFee);
        }

        storage::set_config(
            &e,
            &CollectionConfig {
                owner,
                name,
                symbol,
                base_uri,
                mint_fee,
                fee_token,
                fee_recipient,
            },
        );
        storage::extend_instance_ttl(&e);
        Ok(())
    }

    // ========================================================================
    // MINT / BURN
    // ========================================================================

    /// Mint a new token to `to`, paying the collection's mint fee.
    ///
    /// # Returns
    /// * The new token id (ids start at 0)
    ///
    /// # Errors
    /// * `Error::Unauthorized` - If a minter is set and `minter` is not it
    /// * `Error::InvalidRoyalty` - If `royalty_bps` exceeds 10 000
    pub fn mint(
        e: Env,
        minter: Address,
        to: Address,
        uri: String,
        royalty_bps: u32,
    ) -> Result<u64, Error> {
        minter.require_auth();
        let config = storage::get_config(&e).ok_or(Error::NotInitialized)?;

        if let Some(allowed) = storage::get_minter(&e) {
            if allowed != minter {
                return Err(Error::Unauthorized);
            }
        }
        if royalty_bps > MAX_ROYALTY_BPS {
            return Err(Error::InvalidRoyalty);
        }

        if config.mint_fee > 0 {
            token::TokenClient::new(&e, &config.fee_token).transfer(
                &minter,
                &config.fee_recipient,
                &config.mint_fee,
            );
        }

        let token_id = storage::take_next_token_id(&e);
        storage::set_owner(&e, token_id, &to);
        storage::set_balance(&e, &to, storage::get_balance(&e, &to) + 1);
        storage::set_token_info(
            &e,
            token_id,
            &TokenInfo {
                creator: minter.clone(),
                royalty_bps,
                uri,
            },
        );
        storage::set_total_supply(&e, storage::get_total_supply(&e) + 1);

        Minted {
            to,
            token_id,
            creator: minter,
            royalty_bps,
        }
        .publish(&e);

        storage::extend_instance_ttl(&e);
        Ok(token_id)
    }

    /// Burn a token. Holder or an approved spender only.
    pub fn burn(e: Env, spender: Address, token_id: u64) -> Result<(), Error> {
        spender.require_auth();
        let owner = storage::get_owner(&e, token_id).ok_or(Error::TokenNotFound)?;

        if !Self::is_spender_allowed(&e, &owner, &spender, token_id) {
            return Err(Error::NotOwnerOrApproved);
        }

        storage::clear_approved(&e, token_id);
        storage::remove_owner(&e, token_id);
        storage::remove_token_info(&e, token_id);
        storage::set_balance(&e, &owner, storage::get_balance(&e, &owner) - 1);
        storage::set_total_supply(&e, storage::get_total_supply(&e) - 1);

        Burned { owner, token_id }.publish(&e);

        storage::extend_instance_ttl(&e);
        Ok(())
    }

    // ========================================================================
    // APPROVALS
    // ========================================================================

    /// Approve `spender` to move a single token.
    pub fn approve(e: Env, owner: Address, spender: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();
        let holder = storage::get_owner(&e, token_id).ok_or(Error::TokenNotFound)?;

        if holder == spender {
            return Err(Error::ApprovalToOwner);
        }
        if holder != owner && !storage::is_operator(&e, &holder, &owner) {
            return Err(Error::NotOwnerOrApproved);
        }

        storage::set_approved(&e, token_id, &spender);

        Approval {
            owner: holder,
            spender,
            token_id,
        }
        .publish(&e);
        Ok(())
    }

    pub fn get_approved(e: Env, token_id: u64) -> Option<Address> {
        storage::get_approved(&e, token_id)
    }

    /// Grant or revoke `operator` control over all of `owner`'s tokens.
    pub fn set_approval_for_all(e: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        storage::set_operator(&e, &owner, &operator, approved);

        ApprovalForAll {
            owner,
            operator,
            approved,
        }
        .publish(&e);
    }

    pub fn is_approved_for_all(e: Env, owner: Address, operator: Address) -> bool {
        storage::is_operator(&e, &owner, &operator)
    }

    // ========================================================================
    // TRANSFERS
    // ========================================================================

    /// Move `token_id` from `from` to `to`.
    ///
    /// `amount` exists for parity with multi-edition collections and must be 1.
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
        amount: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        if amount != 1 {
            return Err(Error::InvalidAmount);
        }

        let owner = storage::get_owner(&e, token_id).ok_or(Error::TokenNotFound)?;
        if owner != from {
            return Err(Error::IncorrectOwner);
        }
        if !Self::is_spender_allowed(&e, &owner, &spender, token_id) {
            return Err(Error::NotOwnerOrApproved);
        }

        storage::clear_approved(&e, token_id);
        storage::set_balance(&e, &from, storage::get_balance(&e, &from) - 1);
        storage::set_balance(&e, &to, storage::get_balance(&e, &to) + 1);
        storage::set_owner(&e, token_id, &to);

        Transfer { from, to, token_id }.publish(&e);
        Ok(())
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    pub fn owner_of(e: Env, token_id: u64) -> Result<Address, Error> {
        storage::get_owner(&e, token_id).ok_or(Error::TokenNotFound)
    }

    /// Number of tokens held by `owner`.
    pub fn balance(e: Env, owner: Address) -> u64 {
        storage::get_balance(&e, &owner)
    }

    /// 1 if `owner` holds `token_id`, else 0.
    pub fn balance_of(e: Env, owner: Address, token_id: u64) -> u64 {
        match storage::get_owner(&e, token_id) {
            Some(holder) if holder == owner => 1,
            _ => 0,
        }
    }

    /// Creator royalty owed on a sale of `token_id` at `sale_price`.
    ///
    /// Returns `None` when the token carries no royalty.
    pub fn royalty_info(
        e: Env,
        token_id: u64,
        sale_price: i128,
    ) -> Result<Option<(Address, i128)>, Error> {
        let info = storage::get_token_info(&e, token_id).ok_or(Error::TokenNotFound)?;
        if info.royalty_bps == 0 {
            return Ok(None);
        }
        let amount = sale_price
            .checked_mul(info.royalty_bps as i128)
            .ok_or(Error::InvalidRoyalty)?
            / ROYALTY_DENOMINATOR as i128;
        Ok(Some((info.creator, amount)))
    }

    pub fn token_info(e: Env, token_id: u64) -> Result<TokenInfo, Error> {
        storage::get_token_info(&e, token_id).ok_or(Error::TokenNotFound)
    }

    pub fn token_uri(e: Env, token_id: u64) -> Result<String, Error> {
        storage::get_token_info(&e, token_id)
            .map(|info| info.uri)
            .ok_or(Error::TokenNotFound)
    }

    pub fn total_supply(e: Env) -> u64 {
        storage::get_total_supply(&e)
    }

    pub fn name(e: Env) -> Result<String, Error> {
        storage::get_config(&e)
            .map(|config| config.name)
            .ok_or(Error::NotInitialized)
    }

    pub fn symbol(e: Env) -> Result<String, Error> {
        storage::get_config(&e)
            .map(|config| config.symbol)
            .ok_or(Error::NotInitialized)
    }

    pub fn get_config(e: Env) -> Result<CollectionConfig, Error> {
        storage::get_config(&e).ok_or(Error::NotInitialized)
    }

    // ========================================================================
    // OWNER SETTINGS
    // ========================================================================

    pub fn update_mint_fee(e: Env, owner: Address, mint_fee: i128) -> Result<(), Error> {
        let mut config = Self::require_owner(&e, &owner)?;
        if mint_fee < 0 {
            return Err(Error::InvalidFee);
        }
        config.mint_fee = mint_fee;
        storage::set_config(&e, &config);
        storage::extend_instance_ttl(&e);
        Ok(())
    }

    /// Restrict minting to `minter`, e.g. a launchpad. `None` opens minting to anyone.
    pub fn set_minter(e: Env, owner: Address, minter: Option<Address>) -> Result<(), Error> {
        Self::require_owner(&e, &owner)?;
        storage::set_minter(&e, &minter);
        MinterUpdated { minter }.publish(&e);
        storage::extend_instance_ttl(&e);
        Ok(())
    }

    pub fn minter(e: Env) -> Option<Address> {
        storage::get_minter(&e)
    }

    pub fn update_base_uri(e: Env, owner: Address, base_uri: String) -> Result<(), Error> {
        let mut config = Self::require_owner(&e, &owner)?;
        config.base_uri = base_uri;
        storage::set_config(&e, &config);
        storage::extend_instance_ttl(&e);
        Ok(())
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    fn require_owner(e: &Env, owner: &Address) -> Result<CollectionConfig, Error> {
        owner.require_auth();
        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        if config.owner != *owner {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }

    fn is_spender_allowed(e: &Env, owner: &Address, spender: &Address, token_id: u64) -> bool {
        if owner == spender || storage::is_operator(e, owner, spender) {
            return true;
        }
        storage::get_approved(e, token_id).as_ref() == Some(spender)
    }
}
