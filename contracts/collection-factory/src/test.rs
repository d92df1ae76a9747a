#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, BytesN, Env, String,
};

use crate::{CollectionFactory, CollectionFactoryClient, CollectionKind, Error};

struct Setup {
    env: Env,
    admin: Address,
    fee_recipient: Address,
    client: CollectionFactoryClient<'static>,
}

fn setup_test() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1000);

    let contract_id = env.register(CollectionFactory, ());
    let client = CollectionFactoryClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let fee_recipient = Address::generate(&env);
    let fee_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    client.initialize(
        &admin,
        &generate_wasm_hash(&env, 1),
        &generate_wasm_hash(&env, 2),
        &String::from_str(&env, "ipfs://base/"),
        &100,
        &5_000,
        &fee_token,
        &fee_recipient,
    );

    Setup {
        env,
        admin,
        fee_recipient,
        client,
    }
}

fn generate_wasm_hash(env: &Env, seed: u8) -> BytesN<32> {
    let mut bytes = [0u8; 32];
    bytes[0] = seed;
    bytes[1] = seed + 1;
    bytes[2] = seed + 2;
    BytesN::from_array(env, &bytes)
}

#[test]
fn test_factory_initialization() {
    let s = setup_test();

    let config = s.client.get_config();
    assert_eq!(config.nft_wasm_hash, generate_wasm_hash(&s.env, 1));
    assert_eq!(config.multi_token_wasm_hash, generate_wasm_hash(&s.env, 2));
    assert_eq!(config.mint_fee, 100);
    assert_eq!(config.collection_fee, 5_000);
    assert_eq!(config.fee_recipient, s.fee_recipient);
    assert_eq!(s.client.get_admin(), s.admin);
    assert!(!s.client.is_paused());
    assert_eq!(s.client.get_collection_count(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #700)")] // AlreadyInitialized
fn test_double_initialization() {
    let s = setup_test();
    let config = s.client.get_config();

    s.client.initialize(
        &s.admin,
        &config.nft_wasm_hash,
        &config.multi_token_wasm_hash,
        &config.base_uri,
        &config.mint_fee,
        &config.collection_fee,
        &config.fee_token,
        &config.fee_recipient,
    );
}

#[test]
fn test_register_and_disable_collection() {
    let s = setup_test();
    let collection = Address::generate(&s.env);

    assert!(!s.client.exists(&collection));

    s.client
        .register_collection(&s.admin, &collection, &CollectionKind::Multi);
    assert!(s.client.exists(&collection));

    let record = s.client.get_collection(&collection);
    assert_eq!(record.kind, CollectionKind::Multi);
    assert_eq!(record.creator, None);
    assert_eq!(record.created_at, 1000);

    assert_eq!(
        s.client
            .try_register_collection(&s.admin, &collection, &CollectionKind::Single),
        Err(Ok(Error::CollectionAlreadyRegistered))
    );

    s.client.disable_collection(&s.admin, &collection);
    assert!(!s.client.exists(&collection));
    assert_eq!(
        s.client.try_disable_collection(&s.admin, &collection),
        Err(Ok(Error::CollectionNotRegistered))
    );
}

#[test]
fn test_only_admin_registers() {
    let s = setup_test();
    let stranger = Address::generate(&s.env);
    let collection = Address::generate(&s.env);

    assert_eq!(
        s.client
            .try_register_collection(&stranger, &collection, &CollectionKind::Single),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_fee_updates() {
    let s = setup_test();
    let new_recipient = Address::generate(&s.env);

    s.client.update_mint_fee(&s.admin, &250);
    s.client.update_collection_fee(&s.admin, &0);
    s.client.update_fee_recipient(&s.admin, &new_recipient);
    s.client
        .update_base_uri(&s.admin, &String::from_str(&s.env, "ipfs://other/"));

    let config = s.client.get_config();
    assert_eq!(config.mint_fee, 250);
    assert_eq!(config.collection_fee, 0);
    assert_eq!(config.fee_recipient, new_recipient);
    assert_eq!(config.base_uri, String::from_str(&s.env, "ipfs://other/"));

    assert_eq!(
        s.client.try_update_mint_fee(&s.admin, &-1),
        Err(Ok(Error::InvalidFee))
    );
}

#[test]
fn test_update_wasm_hash() {
    let s = setup_test();

    s.client
        .update_wasm_hash(&s.admin, &CollectionKind::Multi, &generate_wasm_hash(&s.env, 9));

    let config = s.client.get_config();
    assert_eq!(config.nft_wasm_hash, generate_wasm_hash(&s.env, 1));
    assert_eq!(config.multi_token_wasm_hash, generate_wasm_hash(&s.env, 9));
}

#[test]
fn test_create_collection_while_paused_fails() {
    let s = setup_test();
    let creator = Address::generate(&s.env);

    s.client.set_paused(&s.admin, &true);
    assert!(s.client.is_paused());

    let result = s.client.try_create_collection(
        &creator,
        &CollectionKind::Single,
        &String::from_str(&s.env, "Aliveland"),
        &String::from_str(&s.env, "ALV"),
        &generate_wasm_hash(&s.env, 7),
    );
    assert_eq!(result, Err(Ok(Error::FactoryPaused)));

    // nothing was charged
    let fee_token = token::TokenClient::new(&s.env, &s.client.get_config().fee_token);
    assert_eq!(fee_token.balance(&s.fee_recipient), 0);
}

#[test]
fn test_create_collection_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CollectionFactory, ());
    let client = CollectionFactoryClient::new(&env, &contract_id);
    let creator = Address::generate(&env);

    let result = client.try_create_collection(
        &creator,
        &CollectionKind::Multi,
        &String::from_str(&env, "Editions"),
        &String::from_str(&env, ""),
        &generate_wasm_hash(&env, 7),
    );
    assert_eq!(result, Err(Ok(Error::NotInitialized)));
}

#[test]
fn test_admin_handover() {
    let s = setup_test();
    let new_admin = Address::generate(&s.env);

    s.client.set_admin(&s.admin, &new_admin);
    assert_eq!(s.client.get_admin(), new_admin);
    assert_eq!(
        s.client.try_set_paused(&s.admin, &true),
        Err(Ok(Error::Unauthorized))
    );
}
