#![cfg(test)]

use soroban_sdk::{testutils::Address as _, token, vec, Address, Env, String};

use crate::{Error, MultiTokenCollection, MultiTokenCollectionClient};

fn setup(mint_fee: i128) -> (Env, MultiTokenCollectionClient<'static>, Address, token::StellarAssetClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let fee_recipient = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let fee_token = env.register_stellar_asset_contract_v2(token_admin);
    let fee_sac = token::StellarAssetClient::new(&env, &fee_token.address());

    let contract_id = env.register(MultiTokenCollection, ());
    let client = MultiTokenCollectionClient::new(&env, &contract_id);
    client.initialize(
        &owner,
        &String::from_str(&env, "Aliveland Editions"),
        &String::from_str(&env, "ipfs://"),
        &mint_fee,
        &fee_token.address(),
        &fee_recipient,
    );

    (env, client, fee_recipient, fee_sac)
}

#[test]
fn test_mint_editions() {
    let (env, client, _, _) = setup(0);
    let owner = Address::generate(&env);

    let id = client.mint(&owner, &owner, &3, &String::from_str(&env, "a"), &0);

    assert_eq!(id, 1);
    assert_eq!(client.balance_of(&owner, &1), 3);
    assert_eq!(client.total_supply(&1), 3);
}

#[test]
fn test_mint_batch() {
    let (env, client, _, _) = setup(0);
    let owner = Address::generate(&env);

    let ids = client.mint_batch(
        &owner,
        &owner,
        &vec![&env, 3u64, 4u64],
        &vec![&env, String::from_str(&env, "a"), String::from_str(&env, "b")],
        &100,
    );

    assert_eq!(ids, vec![&env, 1u64, 2u64]);
    assert_eq!(client.balance_of(&owner, &1), 3);
    assert_eq!(client.balance_of(&owner, &2), 4);
}

#[test]
fn test_mint_batch_length_mismatch() {
    let (env, client, _, _) = setup(0);
    let owner = Address::generate(&env);

    let result = client.try_mint_batch(
        &owner,
        &owner,
        &vec![&env, 3u64, 4u64],
        &vec![&env, String::from_str(&env, "a")],
        &0,
    );
    assert_eq!(result, Err(Ok(Error::InvalidAmount)));
}

#[test]
fn test_mint_fee_per_token_id() {
    let (env, client, fee_recipient, fee_sac) = setup(50);
    let owner = Address::generate(&env);
    fee_sac.mint(&owner, &100);

    client.mint_batch(
        &owner,
        &owner,
        &vec![&env, 10u64, 20u64],
        &vec![&env, String::from_str(&env, "a"), String::from_str(&env, "b")],
        &0,
    );

    let fee_token = token::TokenClient::new(&env, &fee_sac.address);
    assert_eq!(fee_token.balance(&fee_recipient), 100);
    assert_eq!(fee_token.balance(&owner), 0);
}

#[test]
fn test_partial_transfer_by_operator() {
    let (env, client, _, _) = setup(0);
    let owner = Address::generate(&env);
    let operator = Address::generate(&env);
    let buyer = Address::generate(&env);
    let id = client.mint(&owner, &owner, &5, &String::from_str(&env, "a"), &0);

    assert_eq!(
        client.try_transfer_from(&operator, &owner, &buyer, &id, &2),
        Err(Ok(Error::NotOwnerOrApproved))
    );

    client.set_approval_for_all(&owner, &operator, &true);
    client.transfer_from(&operator, &owner, &buyer, &id, &2);

    assert_eq!(client.balance_of(&owner, &id), 3);
    assert_eq!(client.balance_of(&buyer, &id), 2);
    assert_eq!(client.total_supply(&id), 5);
}

#[test]
fn test_transfer_more_than_held() {
    let (env, client, _, _) = setup(0);
    let owner = Address::generate(&env);
    let buyer = Address::generate(&env);
    let id = client.mint(&owner, &owner, &1, &String::from_str(&env, "a"), &0);

    assert_eq!(
        client.try_transfer_from(&owner, &owner, &buyer, &id, &2),
        Err(Ok(Error::InsufficientBalance))
    );
}

#[test]
fn test_transfer_to_self_keeps_balance() {
    let (env, client, _, _) = setup(0);
    let owner = Address::generate(&env);
    let id = client.mint(&owner, &owner, &5, &String::from_str(&env, "a"), &0);

    client.transfer_from(&owner, &owner, &owner, &id, &5);
    client.transfer_from(&owner, &owner, &owner, &id, &2);

    assert_eq!(client.balance_of(&owner, &id), 5);
    assert_eq!(client.total_supply(&id), 5);
    assert_eq!(
        client.try_transfer_from(&owner, &owner, &owner, &id, &6),
        Err(Ok(Error::InsufficientBalance))
    );
}

#[test]
fn test_royalty_info() {
    let (env, client, _, _) = setup(0);
    let creator = Address::generate(&env);
    let id = client.mint(&creator, &creator, &1, &String::from_str(&env, "a"), &500);

    assert_eq!(client.royalty_info(&id, &2_000), Some((creator, 100)));
    assert_eq!(client.try_royalty_info(&77, &2_000), Err(Ok(Error::TokenNotFound)));
}
