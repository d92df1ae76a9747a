#![no_std]

//! Timed primary sale of a fixed-size `nft` drop.
//!
//! Buyers pay `price` per item in the sale's pay token, inside the sale window
//! and up to `max_supply` items in total. The launchpad mints each item from
//! its collection, so the collection should charge it no mint fee and name
//! the launchpad as its only minter.

mod errors;
mod events;
mod external;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Vec};

pub use crate::errors::Error;
use crate::events::*;
use crate::external::CollectionClient;
pub use crate::types::Sale;

const VERSION: u32 = 1;

#[contract]
pub struct Launchpad;

#[contractimpl]
impl Launchpad {
    /// Configure the sale.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the sale was already configured
    /// * `Error::InvalidTimeRange` - If `end_time` is not after `start_time`
    /// * `Error::InvalidSupply` - If `max_supply` is zero
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        admin: Address,
        collection: Address,
        pay_token: Address,
        treasury: Address,
        price: i128,
        start_time: u64,
        end_time: u64,
        max_supply: u64,
        token_uri: String,
    ) -> Result<(), Error> {
        if storage::has_sale(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if end_time <= start_time {
            return Err(Error::InvalidTimeRange);
        }
        if max_supply == 0 {
            return Err(Error::InvalidSupply);
        }
        if price < 0 {
            return Err(Error::InvalidPrice);
        }

        storage::set_sale(
            &env,
            &Sale {
                admin,
                collection: collection.clone(),
                pay_token,
                treasury,
                price,
                start_time,
                end_time,
                max_supply,
                token_uri,
            },
        );

        SaleCreated {
            collection,
            price,
            start_time,
            end_time,
            max_supply,
        }
        .publish(&env);

        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Buy `count` items, paying `price * count` to the treasury.
    ///
    /// # Returns
    /// * The ids of the minted tokens
    ///
    /// # Errors
    /// * `Error::InvalidCount` - If `count` is zero
    /// * `Error::SaleNotActive` - If now is outside `[start_time, end_time]`
    /// * `Error::SoldOut` - If fewer than `count` items are left
    pub fn buy(env: Env, buyer: Address, count: u64) -> Result<Vec<u64>, Error> {
        buyer.require_auth();
        let sale = storage::get_sale(&env).ok_or(Error::NotInitialized)?;

        if count == 0 {
            return Err(Error::InvalidCount);
        }

        let now = env.ledger().timestamp();
        if now < sale.start_time || now > sale.end_time {
            return Err(Error::SaleNotActive);
        }

        let sold = storage::get_sold(&env);
        let new_sold = sold.checked_add(count).ok_or(Error::Overflow)?;
        if new_sold > sale.max_supply {
            return Err(Error::SoldOut);
        }

        let cost = sale
            .price
            .checked_mul(count as i128)
            .ok_or(Error::Overflow)?;
        if cost > 0 {
            token::TokenClient::new(&env, &sale.pay_token).transfer(&buyer, &sale.treasury, &cost);
        }
        storage::set_sold(&env, new_sold);

        let collection = CollectionClient::new(&env, &sale.collection);
        let launchpad = env.current_contract_address();
        let mut token_ids = Vec::new(&env);
        for _ in 0..count {
            token_ids.push_back(collection.mint(&launchpad, &buyer, &sale.token_uri, &0));
        }

        log!(&env, "launchpad sold {} items for {}", count, cost);

        ItemsBought {
            buyer,
            token_ids: token_ids.clone(),
            paid: cost,
        }
        .publish(&env);

        storage::extend_instance_ttl(&env);
        Ok(token_ids)
    }

    /// Change price and window of the sale (admin only)
    pub fn update_sale(
        env: Env,
        admin: Address,
        price: i128,
        start_time: u64,
        end_time: u64,
    ) -> Result<(), Error> {
        admin.require_auth();
        let mut sale = storage::get_sale(&env).ok_or(Error::NotInitialized)?;
        if sale.admin != admin {
            return Err(Error::Unauthorized);
        }
        if end_time <= start_time {
            return Err(Error::InvalidTimeRange);
        }
        if price < 0 {
            return Err(Error::InvalidPrice);
        }

        sale.price = price;
        sale.start_time = start_time;
        sale.end_time = end_time;
        storage::set_sale(&env, &sale);

        SaleUpdated {
            price,
            start_time,
            end_time,
        }
        .publish(&env);

        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn get_sale(env: Env) -> Result<Sale, Error> {
        storage::get_sale(&env).ok_or(Error::NotInitialized)
    }

    pub fn sold(env: Env) -> u64 {
        storage::get_sold(&env)
    }

    pub fn version() -> u32 {
        VERSION
    }
}
