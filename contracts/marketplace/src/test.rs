#![cfg(test)]

use address_registry::{AddressRegistry, AddressRegistryClient};
use multi_token::{MultiTokenCollection, MultiTokenCollectionClient};
use nft::{NftCollection, NftCollectionClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};
use token_registry::{TokenRegistry, TokenRegistryClient};

use crate::{Error, MarketplaceContract, MarketplaceContractClient};

const NOW: u64 = 10_000;
const PRICE: i128 = 1_000;

struct Setup {
    env: Env,
    client: MarketplaceContractClient<'static>,
    admin: Address,
    fee_recipient: Address,
    seller: Address,
    buyer: Address,
    nft: NftCollectionClient<'static>,
    pay_token: Address,
    token: token::TokenClient<'static>,
    token_id: u64,
}

impl Setup {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(NOW);

        let contract_id = env.register(MarketplaceContract, ());
        let client = MarketplaceContractClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let fee_recipient = Address::generate(&env);
        let seller = Address::generate(&env);
        let buyer = Address::generate(&env);

        let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));
        let pay_token = sac.address();
        let token = token::TokenClient::new(&env, &pay_token);
        token::StellarAssetClient::new(&env, &pay_token).mint(&buyer, &1_000_000);

        let nft_id = env.register(NftCollection, ());
        let nft = NftCollectionClient::new(&env, &nft_id);
        nft.initialize(
            &seller,
            &String::from_str(&env, "Aliveland"),
            &String::from_str(&env, "ALV"),
            &String::from_str(&env, "ipfs://base/"),
            &0,
            &pay_token,
            &fee_recipient,
        );
        let token_id = nft.mint(&seller, &seller, &String::from_str(&env, "ipfs://item/0"), &0);
        nft.set_approval_for_all(&seller, &contract_id, &true);

        client.initialize(&admin, &fee_recipient, &25);

        Setup {
            env,
            client,
            admin,
            fee_recipient,
            seller,
            buyer,
            nft,
            pay_token,
            token,
            token_id,
        }
    }

    fn list(&self, start_time: u64) {
        self.client.list_item(
            &self.seller,
            &self.nft.address,
            &self.token_id,
            &1,
            &self.pay_token,
            &PRICE,
            &start_time,
        );
    }

    /// Address registry wired to a token registry that enables the pay token.
    fn wire_registry(&self, auction: &Address) -> Address {
        let token_registry_id = self.env.register(TokenRegistry, ());
        let token_registry = TokenRegistryClient::new(&self.env, &token_registry_id);
        token_registry.initialize(&self.admin);
        token_registry.add(&self.admin, &self.pay_token);

        let registry_id = self.env.register(AddressRegistry, ());
        let registry = AddressRegistryClient::new(&self.env, &registry_id);
        registry.initialize(&self.admin);
        registry.update_token_registry(&self.admin, &token_registry_id);
        registry.update_auction(&self.admin, auction);

        self.client.update_address_registry(&self.admin, &registry_id);
        registry_id
    }
}

// ============================================================================
// Listings
// ============================================================================

#[test]
fn test_initialize() {
    let s = Setup::new();
    let config = s.client.get_config();
    assert_eq!(config.admin, s.admin);
    assert_eq!(config.platform_fee, 25);
    assert_eq!(config.address_registry, None);

    assert_eq!(
        s.client.try_initialize(&s.admin, &s.fee_recipient, &25),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn test_list_item() {
    let s = Setup::new();
    s.list(NOW);

    let listing = s
        .client
        .get_listing(&s.nft.address, &s.token_id, &s.seller)
        .unwrap();
    assert_eq!(listing.quantity, 1);
    assert_eq!(listing.pay_token, s.pay_token);
    assert_eq!(listing.price_per_item, PRICE);
    assert_eq!(listing.start_time, NOW);
}

#[test]
fn test_list_item_twice_fails() {
    let s = Setup::new();
    s.list(NOW);

    let result = s.client.try_list_item(
        &s.seller,
        &s.nft.address,
        &s.token_id,
        &1,
        &s.pay_token,
        &PRICE,
        &NOW,
    );
    assert_eq!(result, Err(Ok(Error::AlreadyListed)));
}

#[test]
fn test_list_item_validation() {
    let s = Setup::new();

    assert_eq!(
        s.client.try_list_item(
            &s.seller,
            &s.nft.address,
            &s.token_id,
            &0,
            &s.pay_token,
            &PRICE,
            &NOW
        ),
        Err(Ok(Error::InvalidQuantity))
    );
    assert_eq!(
        s.client.try_list_item(
            &s.buyer,
            &s.nft.address,
            &s.token_id,
            &1,
            &s.pay_token,
            &PRICE,
            &NOW
        ),
        Err(Ok(Error::NotOwningItem))
    );

    s.nft.set_approval_for_all(&s.seller, &s.client.address, &false);
    assert_eq!(
        s.client.try_list_item(
            &s.seller,
            &s.nft.address,
            &s.token_id,
            &1,
            &s.pay_token,
            &PRICE,
            &NOW
        ),
        Err(Ok(Error::ItemNotApproved))
    );
}

#[test]
fn test_list_item_requires_enabled_pay_token() {
    let s = Setup::new();
    let auction = Address::generate(&s.env);
    s.wire_registry(&auction);

    let other_token = s
        .env
        .register_stellar_asset_contract_v2(Address::generate(&s.env))
        .address();
    assert_eq!(
        s.client.try_list_item(
            &s.seller,
            &s.nft.address,
            &s.token_id,
            &1,
            &other_token,
            &PRICE,
            &NOW
        ),
        Err(Ok(Error::InvalidPayToken))
    );

    s.list(NOW);
}

#[test]
fn test_cancel_listing() {
    let s = Setup::new();
    s.list(NOW);

    s.client
        .cancel_listing(&s.seller, &s.nft.address, &s.token_id);
    assert_eq!(
        s.client.get_listing(&s.nft.address, &s.token_id, &s.seller),
        None
    );
    assert_eq!(
        s.client
            .try_cancel_listing(&s.seller, &s.nft.address, &s.token_id),
        Err(Ok(Error::NotListed))
    );
}

#[test]
fn test_update_listing() {
    let s = Setup::new();
    s.list(NOW);

    s.client
        .update_listing(&s.seller, &s.nft.address, &s.token_id, &s.pay_token, &2_000);
    let listing = s
        .client
        .get_listing(&s.nft.address, &s.token_id, &s.seller)
        .unwrap();
    assert_eq!(listing.price_per_item, 2_000);

    assert_eq!(
        s.client
            .try_update_listing(&s.buyer, &s.nft.address, &s.token_id, &s.pay_token, &5),
        Err(Ok(Error::NotListed))
    );
}

// ============================================================================
// Buying
// ============================================================================

#[test]
fn test_buy_item() {
    let s = Setup::new();
    s.list(NOW);

    s.client
        .buy_item(&s.buyer, &s.nft.address, &s.token_id, &s.pay_token, &s.seller);

    // 2.5% platform fee
    assert_eq!(s.token.balance(&s.fee_recipient), 25);
    assert_eq!(s.token.balance(&s.seller), 975);
    assert_eq!(s.token.balance(&s.buyer), 1_000_000 - PRICE);
    assert_eq!(s.nft.owner_of(&s.token_id), s.buyer);
    assert_eq!(
        s.client.get_listing(&s.nft.address, &s.token_id, &s.seller),
        None
    );
}

#[test]
fn test_buy_item_before_start_fails() {
    let s = Setup::new();
    s.list(NOW + 100);

    assert_eq!(
        s.client
            .try_buy_item(&s.buyer, &s.nft.address, &s.token_id, &s.pay_token, &s.seller),
        Err(Ok(Error::ItemNotBuyable))
    );

    s.env.ledger().set_timestamp(NOW + 100);
    s.client
        .buy_item(&s.buyer, &s.nft.address, &s.token_id, &s.pay_token, &s.seller);
}

#[test]
fn test_buy_item_with_wrong_pay_token_fails() {
    let s = Setup::new();
    s.list(NOW);
    let other_token = Address::generate(&s.env);

    assert_eq!(
        s.client
            .try_buy_item(&s.buyer, &s.nft.address, &s.token_id, &other_token, &s.seller),
        Err(Ok(Error::InvalidPayToken))
    );
}

#[test]
fn test_buy_item_after_seller_moved_it_fails() {
    let s = Setup::new();
    s.list(NOW);
    let elsewhere = Address::generate(&s.env);
    s.nft
        .transfer_from(&s.seller, &s.seller, &elsewhere, &s.token_id, &1);

    assert_eq!(
        s.client
            .try_buy_item(&s.buyer, &s.nft.address, &s.token_id, &s.pay_token, &s.seller),
        Err(Ok(Error::NotOwningItem))
    );
}

#[test]
fn test_buy_item_pays_royalty() {
    let s = Setup::new();
    let creator = Address::generate(&s.env);
    let token_id = s.nft.mint(
        &creator,
        &creator,
        &String::from_str(&s.env, "ipfs://item/1"),
        &500,
    );
    s.nft.transfer_from(&creator, &creator, &s.seller, &token_id, &1);

    s.client.list_item(
        &s.seller,
        &s.nft.address,
        &token_id,
        &1,
        &s.pay_token,
        &PRICE,
        &NOW,
    );
    s.client
        .buy_item(&s.buyer, &s.nft.address, &token_id, &s.pay_token, &s.seller);

    // 5% of the 975 left after the platform fee
    assert_eq!(s.token.balance(&s.fee_recipient), 25);
    assert_eq!(s.token.balance(&creator), 48);
    assert_eq!(s.token.balance(&s.seller), 927);
}

#[test]
fn test_buy_multi_token_units() {
    let s = Setup::new();

    let collection_id = s.env.register(MultiTokenCollection, ());
    let collection = MultiTokenCollectionClient::new(&s.env, &collection_id);
    collection.initialize(
        &s.seller,
        &String::from_str(&s.env, "Editions"),
        &String::from_str(&s.env, "ipfs://editions/"),
        &0,
        &s.pay_token,
        &s.fee_recipient,
    );
    let token_id = collection.mint(
        &s.seller,
        &s.seller,
        &10,
        &String::from_str(&s.env, "ipfs://editions/1"),
        &0,
    );
    collection.set_approval_for_all(&s.seller, &s.client.address, &true);

    s.client.list_item(
        &s.seller,
        &collection_id,
        &token_id,
        &5,
        &s.pay_token,
        &100,
        &NOW,
    );
    s.client
        .buy_item(&s.buyer, &collection_id, &token_id, &s.pay_token, &s.seller);

    assert_eq!(collection.balance_of(&s.buyer, &token_id), 5);
    assert_eq!(collection.balance_of(&s.seller, &token_id), 5);
    assert_eq!(s.token.balance(&s.fee_recipient), 12);
    assert_eq!(s.token.balance(&s.seller), 488);
}

#[test]
fn test_seller_cannot_buy_own_listing() {
    let s = Setup::new();

    let collection_id = s.env.register(MultiTokenCollection, ());
    let collection = MultiTokenCollectionClient::new(&s.env, &collection_id);
    collection.initialize(
        &s.seller,
        &String::from_str(&s.env, "Editions"),
        &String::from_str(&s.env, "ipfs://editions/"),
        &0,
        &s.pay_token,
        &s.fee_recipient,
    );
    let token_id = collection.mint(
        &s.seller,
        &s.seller,
        &5,
        &String::from_str(&s.env, "ipfs://editions/1"),
        &0,
    );
    collection.set_approval_for_all(&s.seller, &s.client.address, &true);
    s.client.list_item(
        &s.seller,
        &collection_id,
        &token_id,
        &5,
        &s.pay_token,
        &100,
        &NOW,
    );

    assert_eq!(
        s.client
            .try_buy_item(&s.seller, &collection_id, &token_id, &s.pay_token, &s.seller),
        Err(Ok(Error::SelfPurchase))
    );
    assert_eq!(collection.balance_of(&s.seller, &token_id), 5);
    assert!(s
        .client
        .get_listing(&collection_id, &token_id, &s.seller)
        .is_some());
}

// ============================================================================
// Offers
// ============================================================================

#[test]
fn test_accept_offer() {
    let s = Setup::new();
    s.list(NOW);
    s.client.create_offer(
        &s.buyer,
        &s.nft.address,
        &s.token_id,
        &s.pay_token,
        &1,
        &800,
        &(NOW + 3_600),
    );
    s.token.approve(&s.buyer, &s.client.address, &800, &1_000);

    s.client
        .accept_offer(&s.seller, &s.nft.address, &s.token_id, &s.buyer);

    assert_eq!(s.token.balance(&s.fee_recipient), 20);
    assert_eq!(s.token.balance(&s.seller), 780);
    assert_eq!(s.nft.owner_of(&s.token_id), s.buyer);
    assert_eq!(
        s.client.get_offer(&s.nft.address, &s.token_id, &s.buyer),
        None
    );
    assert_eq!(
        s.client.get_listing(&s.nft.address, &s.token_id, &s.seller),
        None
    );
}

#[test]
fn test_accept_own_offer_fails() {
    let s = Setup::new();
    s.client.create_offer(
        &s.seller,
        &s.nft.address,
        &s.token_id,
        &s.pay_token,
        &1,
        &800,
        &(NOW + 3_600),
    );

    assert_eq!(
        s.client
            .try_accept_offer(&s.seller, &s.nft.address, &s.token_id, &s.seller),
        Err(Ok(Error::SelfPurchase))
    );
    assert_eq!(s.nft.owner_of(&s.token_id), s.seller);
}

#[test]
fn test_create_offer_validation() {
    let s = Setup::new();

    assert_eq!(
        s.client.try_create_offer(
            &s.buyer,
            &s.nft.address,
            &s.token_id,
            &s.pay_token,
            &1,
            &800,
            &NOW
        ),
        Err(Ok(Error::InvalidExpiration))
    );

    s.client.create_offer(
        &s.buyer,
        &s.nft.address,
        &s.token_id,
        &s.pay_token,
        &1,
        &800,
        &(NOW + 3_600),
    );
    assert_eq!(
        s.client.try_create_offer(
            &s.buyer,
            &s.nft.address,
            &s.token_id,
            &s.pay_token,
            &1,
            &900,
            &(NOW + 3_600)
        ),
        Err(Ok(Error::OfferAlreadyCreated))
    );

    // an expired offer can be replaced
    s.env.ledger().set_timestamp(NOW + 3_600);
    s.client.create_offer(
        &s.buyer,
        &s.nft.address,
        &s.token_id,
        &s.pay_token,
        &1,
        &900,
        &(NOW + 7_200),
    );
    assert_eq!(
        s.client
            .get_offer(&s.nft.address, &s.token_id, &s.buyer)
            .unwrap()
            .price_per_item,
        900
    );
}

#[test]
fn test_accept_expired_offer_fails() {
    let s = Setup::new();
    s.client.create_offer(
        &s.buyer,
        &s.nft.address,
        &s.token_id,
        &s.pay_token,
        &1,
        &800,
        &(NOW + 3_600),
    );
    s.env.ledger().set_timestamp(NOW + 3_600);

    assert_eq!(
        s.client
            .try_accept_offer(&s.seller, &s.nft.address, &s.token_id, &s.buyer),
        Err(Ok(Error::OfferExpired))
    );
}

#[test]
fn test_cancel_offer() {
    let s = Setup::new();
    s.client.create_offer(
        &s.buyer,
        &s.nft.address,
        &s.token_id,
        &s.pay_token,
        &1,
        &800,
        &(NOW + 3_600),
    );

    s.client
        .cancel_offer(&s.buyer, &s.nft.address, &s.token_id);
    assert_eq!(
        s.client
            .try_accept_offer(&s.seller, &s.nft.address, &s.token_id, &s.buyer),
        Err(Ok(Error::OfferNotExists))
    );
    assert_eq!(
        s.client
            .try_cancel_offer(&s.buyer, &s.nft.address, &s.token_id),
        Err(Ok(Error::OfferNotExists))
    );
}

// ============================================================================
// Auction hook
// ============================================================================

#[test]
fn test_validate_item_sold_only_auction() {
    let s = Setup::new();
    let auction = Address::generate(&s.env);
    s.wire_registry(&auction);
    s.list(NOW);
    s.client.create_offer(
        &s.buyer,
        &s.nft.address,
        &s.token_id,
        &s.pay_token,
        &1,
        &800,
        &(NOW + 3_600),
    );

    let impostor = Address::generate(&s.env);
    assert_eq!(
        s.client.try_validate_item_sold(
            &impostor,
            &s.nft.address,
            &s.token_id,
            &s.seller,
            &s.buyer
        ),
        Err(Ok(Error::SenderMustBeAuction))
    );

    s.client
        .validate_item_sold(&auction, &s.nft.address, &s.token_id, &s.seller, &s.buyer);
    assert_eq!(
        s.client.get_listing(&s.nft.address, &s.token_id, &s.seller),
        None
    );
    assert_eq!(
        s.client.get_offer(&s.nft.address, &s.token_id, &s.buyer),
        None
    );
}

#[test]
fn test_validate_item_sold_without_registry_fails() {
    let s = Setup::new();
    let auction = Address::generate(&s.env);

    assert_eq!(
        s.client.try_validate_item_sold(
            &auction,
            &s.nft.address,
            &s.token_id,
            &s.seller,
            &s.buyer
        ),
        Err(Ok(Error::SenderMustBeAuction))
    );
}

// ============================================================================
// Admin
// ============================================================================

#[test]
fn test_update_platform_fee() {
    let s = Setup::new();
    let stranger = Address::generate(&s.env);

    s.client.update_platform_fee(&s.admin, &50);
    assert_eq!(s.client.get_config().platform_fee, 50);

    assert_eq!(
        s.client.try_update_platform_fee(&s.admin, &1_001),
        Err(Ok(Error::InvalidPlatformFee))
    );
    assert_eq!(
        s.client.try_update_platform_fee(&stranger, &10),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_update_platform_fee_recipient() {
    let s = Setup::new();
    let new_recipient = Address::generate(&s.env);

    s.client
        .update_platform_fee_recipient(&s.admin, &new_recipient);
    s.list(NOW);
    s.client
        .buy_item(&s.buyer, &s.nft.address, &s.token_id, &s.pay_token, &s.seller);

    assert_eq!(s.token.balance(&new_recipient), 25);
    assert_eq!(s.token.balance(&s.fee_recipient), 0);
}
