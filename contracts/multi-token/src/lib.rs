#![no_std]

//! Multi-edition (ERC-1155 style) collection with paid minting and
//! per-token creator royalties.

mod errors;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

pub use crate::errors::Error;
use crate::events::*;
pub use crate::types::{CollectionConfig, TokenInfo, MAX_ROYALTY_BPS, ROYALTY_DENOMINATOR};

#[contract]
pub struct MultiTokenCollection;

#[contractimpl]
impl MultiTokenCollection {
    pub fn initialize(
        e: Env,
        owner: Address,
        name: String,
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
                base_uri,
                mint_fee,
                fee_token,
                fee_recipient,
            },
        );
        storage::extend_instance_ttl(&e);
        Ok(())
    }

    /// Mint `amount` editions of a new token id to `to`.
    pub fn mint(
        e: Env,
        minter: Address,
        to: Address,
        amount: u64,
        uri: String,
        royalty_bps: u32,
    ) -> Result<u64, Error> {
        minter.require_auth();
        let config = storage::get_config(&e).ok_or(Error::NotInitialized)?;

        let token_id = Self::mint_one(&e, &config, &minter, &to, amount, uri, royalty_bps)?;

        storage::extend_instance_ttl(&e);
        Ok(token_id)
    }

    /// Mint one new token id per entry of `amounts`, pairing each with the
    /// uri at the same position.
    pub fn mint_batch(
        e: Env,
        minter: Address,
        to: Address,
        amounts: Vec<u64>,
        uris: Vec<String>,
        royalty_bps: u32,
    ) -> Result<Vec<u64>, Error> {
        minter.require_auth();
        let config = storage::get_config(&e).ok_or(Error::NotInitialized)?;

        if amounts.is_empty() || amounts.len() != uris.len() {
            return Err(Error::InvalidAmount);
        }

        let mut ids = Vec::new(&e);
        for (amount, uri) in amounts.iter().zip(uris.iter()) {
            let id = Self::mint_one(&e, &config, &minter, &to, amount, uri, royalty_bps)?;
            ids.push_back(id);
        }

        storage::extend_instance_ttl(&e);
        Ok(ids)
    }

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

    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
        amount: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        if amount == 0 {
            return Err(Error::InvalidAmount);
        }
        if spender != from && !storage::is_operator(&e, &from, &spender) {
            return Err(Error::NotOwnerOrApproved);
        }

        let from_balance = storage::get_balance(&e, token_id, &from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        // A self-transfer leaves balances untouched.
        if from != to {
            let to_balance = storage::get_balance(&e, token_id, &to)
                .checked_add(amount)
                .ok_or(Error::Overflow)?;
            storage::set_balance(&e, token_id, &from, from_balance - amount);
            storage::set_balance(&e, token_id, &to, to_balance);
        }

        TransferSingle {
            from,
            to,
            token_id,
            amount,
        }
        .publish(&e);
        Ok(())
    }

    pub fn balance_of(e: Env, owner: Address, token_id: u64) -> u64 {
        storage::get_balance(&e, token_id, &owner)
    }

    pub fn total_supply(e: Env, token_id: u64) -> u64 {
        storage::get_supply(&e, token_id)
    }

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
            .ok_or(Error::Overflow)?
            / ROYALTY_DENOMINATOR as i128;
        Ok(Some((info.creator, amount)))
    }

    pub fn uri(e: Env, token_id: u64) -> Result<String, Error> {
        storage::get_token_info(&e, token_id)
            .map(|info| info.uri)
            .ok_or(Error::TokenNotFound)
    }

    pub fn get_config(e: Env) -> Result<CollectionConfig, Error> {
        storage::get_config(&e).ok_or(Error::NotInitialized)
    }

    pub fn update_mint_fee(e: Env, owner: Address, mint_fee: i128) -> Result<(), Error> {
        owner.require_auth();
        let mut config = storage::get_config(&e).ok_or(Error::NotInitialized)?;
        if config.owner != owner {
            return Err(Error::Unauthorized);
        }
        if mint_fee < 0 {
            return Err(Error::InvalidFee);
        }
        config.mint_fee = mint_fee;
        storage::set_config(&e, &config);
        Ok(())
    }

    fn mint_one(
        e: &Env,
        config: &CollectionConfig,
        minter: &Address,
        to: &Address,
        amount: u64,
        uri: String,
        royalty_bps: u32,
    ) -> Result<u64, Error> {
        if amount == 0 {
            return Err(Error::InvalidAmount);
        }
        if royalty_bps > MAX_ROYALTY_BPS {
            return Err(Error::InvalidRoyalty);
        }

        if config.mint_fee > 0 {
            token::TokenClient::new(e, &config.fee_token).transfer(
                minter,
                &config.fee_recipient,
                &config.mint_fee,
            );
        }

        let token_id = storage::next_token_id(e);
        storage::set_balance(e, token_id, to, amount);
        storage::set_supply(e, token_id, amount);
        storage::set_token_info(
            e,
            token_id,
            &TokenInfo {
                creator: minter.clone(),
                royalty_bps,
                uri,
            },
        );

        Minted {
            to: to.clone(),
            token_id,
            amount,
        }
        .publish(e);

        Ok(token_id)
    }
}
