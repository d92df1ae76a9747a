#![cfg(test)]

use soroban_sdk::{testutils::Address as _, vec, Address, Env};

use crate::{Error, TokenRegistry, TokenRegistryClient};

fn setup_test() -> (Env, Address, TokenRegistryClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(TokenRegistry, ());
    let client = TokenRegistryClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, admin, client)
}

#[test]
#[should_panic(expected = "Error(Contract, #300)")] // AlreadyInitialized
fn test_double_initialization() {
    let (_env, admin, client) = setup_test();
    client.initialize(&admin);
}

#[test]
fn test_add_and_remove_token() {
    let (env, admin, client) = setup_test();
    let token = Address::generate(&env);

    assert!(!client.enabled(&token));

    client.add(&admin, &token);
    assert!(client.enabled(&token));
    assert_eq!(client.list(), vec![&env, token.clone()]);

    client.remove(&admin, &token);
    assert!(!client.enabled(&token));
    assert_eq!(client.list().len(), 0);
}

#[test]
fn test_add_twice_fails() {
    let (env, admin, client) = setup_test();
    let token = Address::generate(&env);

    client.add(&admin, &token);
    assert_eq!(client.try_add(&admin, &token), Err(Ok(Error::TokenAlreadyAdded)));
}

#[test]
fn test_remove_unknown_token_fails() {
    let (env, admin, client) = setup_test();
    let token = Address::generate(&env);

    assert_eq!(client.try_remove(&admin, &token), Err(Ok(Error::TokenNotExist)));
}

#[test]
fn test_only_admin_manages_tokens() {
    let (env, _admin, client) = setup_test();
    let stranger = Address::generate(&env);
    let token = Address::generate(&env);

    assert_eq!(client.try_add(&stranger, &token), Err(Ok(Error::Unauthorized)));
}

#[test]
fn test_admin_handover() {
    let (env, admin, client) = setup_test();
    let new_admin = Address::generate(&env);
    let token = Address::generate(&env);

    client.set_admin(&admin, &new_admin);
    assert_eq!(client.get_admin(), new_admin);
    assert_eq!(client.try_add(&admin, &token), Err(Ok(Error::Unauthorized)));
    client.add(&new_admin, &token);
}
