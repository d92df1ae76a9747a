
use crate::{AuctionContract, AuctionContractClient};
use nft::{NftCollection, NftCollectionClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

pub const NOW: u64 = 1_000;
pub const START: u64 = 1_100;
pub const END: u64 = START + 3_600;
pub const RESERVE: i128 = 1_000;
pub const PLATFORM_FEE: u32 = 25;
pub const LOCK_TIME: u64 = 43_200;

pub struct Setup {
    pub env: Env,
    pub client: AuctionContractClient<'static>,
    pub admin: Address,
    pub fee_recipient: Address,
    pub seller: Address,
    pub bidder: Address,
    pub other_bidder: Address,
    pub nft: NftCollectionClient<'static>,
    pub pay_token: Address,
    pub token: token::TokenClient<'static>,
    pub token_id: u64,
}

impl Setup {
    /// Auction contract with one token minted to `seller`, who has approved the auction.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(NOW);

        let contract_id = env.register(AuctionContract, ());
        let client = AuctionContractClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let fee_recipient = Address::generate(&env);
        let seller = Address::generate(&env);
        let bidder = Address::generate(&env);
        let other_bidder = Address::generate(&env);

        let token_admin = Address::generate(&env);
        let sac = env.register_stellar_asset_contract_v2(token_admin);
        let pay_token = sac.address();
        let token = token::TokenClient::new(&env, &pay_token);
        let token_admin_client = token::StellarAssetClient::new(&env, &pay_token);
        token_admin_client.mint(&bidder, &1_000_000);
        token_admin_client.mint(&other_bidder, &1_000_000);

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

        client.initialize(&admin, &fee_recipient, &PLATFORM_FEE);

        Setup {
            env,
            client,
            admin,
            fee_recipient,
            seller,
            bidder,
            other_bidder,
            nft,
            pay_token,
            token,
            token_id,
        }
    }

    pub fn create_auction(&self, min_bid_reserve: bool) {
        self.client.create_auction(
            &self.seller,
            &self.nft.address,
            &self.token_id,
            &String::from_str(&self.env, "art"),
            &self.pay_token,
            &RESERVE,
            &START,
            &min_bid_reserve,
            &END,
        );
    }

    pub fn bid(&self, bidder: &Address, amount: i128) {
        self.client
            .place_bid(bidder, &self.nft.address, &self.token_id, &amount);
    }

    pub fn escrowed(&self) -> i128 {
        self.token.balance(&self.client.address)
    }
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().set_timestamp(timestamp);
}
