extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, vec, Address, Env};
use test_case::test_case;

use super::setup::{
    deploy_auction_contract, deploy_collectible_contract, deploy_token_contract, ids, setup,
    Params, UNIT,
};
use crate::{errors::AuctionError, msg::LineStatus};

#[test_case(1 ; "single line")]
#[test_case(4 ; "four lines")]
#[test_case(10 ; "ten lines")]
#[test_case(32 ; "thirty two lines")]
fn initialize_puts_every_line_at_its_first_id(num_lines: u32) {
    let fixture = setup(Params {
        num_lines,
        ..Params::default()
    });

    let expected: std::vec::Vec<u64> = (1..=num_lines as u64).collect();
    assert_eq!(
        fixture.auction.get_ids_to_auction(),
        ids(&fixture.env, &expected)
    );

    for id in 1..=num_lines as u64 {
        let state = fixture.auction.line_state(&id);
        assert_eq!(state.head, id);
        assert_eq!(state.slot, (id - 1) as u32);
        assert_eq!(state.status, LineStatus::Dormant);
    }
}

#[test]
fn initialize_stores_config_and_admin() {
    let fixture = setup(Params::default());

    let config = fixture.auction.query_config();
    assert_eq!(config.payment_token, fixture.token.address);
    assert_eq!(config.collectible, fixture.collectible.address);
    assert_eq!(config.num_lines, 10);
    assert_eq!(config.starting_price, UNIT / 10);
    assert_eq!(config.bid_increment, UNIT / 20);

    assert_eq!(fixture.auction.query_admin(), fixture.admin);
    assert_eq!(fixture.auction.query_escrowed(), 0);
    assert!(fixture.collectible.is_minter(&fixture.auction.address));
}

#[test]
fn initialize_twice_fails() {
    let fixture = setup(Params::default());

    let config = fixture.auction.query_config();
    let other_admin = Address::generate(&fixture.env);

    assert_eq!(
        fixture.auction.try_initialize(&other_admin, &config),
        Err(Ok(AuctionError::AlreadyInitialized))
    );
    assert_eq!(fixture.auction.query_admin(), fixture.admin);
}

#[test_case(Params { num_lines: 0, ..Params::default() } ; "no lines")]
#[test_case(Params { duration: 0, ..Params::default() } ; "zero duration")]
#[test_case(Params { starting_price: -1, ..Params::default() } ; "negative starting price")]
#[test_case(Params { bid_increment: -1, ..Params::default() } ; "negative increment")]
fn initialize_rejects_invalid_config(params: Params) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let (token, _) = deploy_token_contract(&env, &admin);
    let collectible = deploy_collectible_contract(&env, &admin);
    let auction = deploy_auction_contract(&env);

    assert_eq!(
        auction.try_initialize(&admin, &params.config(&token.address, &collectible.address)),
        Err(Ok(AuctionError::InvalidConfig))
    );
    assert_eq!(auction.try_query_config(), Err(Ok(AuctionError::NotInitialized)));
}

#[test]
fn operations_before_initialize_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let bidder = Address::generate(&env);
    let auction = deploy_auction_contract(&env);

    assert_eq!(
        auction.try_create_bid(&bidder, &1, &UNIT),
        Err(Ok(AuctionError::NotInitialized))
    );
    assert_eq!(
        auction.try_settle_auction(&1),
        Err(Ok(AuctionError::NotInitialized))
    );
    assert_eq!(
        auction.try_get_ids_to_auction(),
        Err(Ok(AuctionError::NotInitialized))
    );
    assert_eq!(
        auction.try_set_vip_ids(&bidder, &vec![&env, 1u64], &true),
        Err(Ok(AuctionError::NotInitialized))
    );
    assert_eq!(auction.try_query_admin(), Err(Ok(AuctionError::NotInitialized)));
}

#[test]
fn set_admin_hands_over_admin_rights() {
    let fixture = setup(Params::default());
    let env = &fixture.env;

    let new_admin = Address::generate(env);
    let stranger = Address::generate(env);

    assert_eq!(
        fixture.auction.try_set_admin(&stranger, &stranger),
        Err(Ok(AuctionError::Unauthorized))
    );

    fixture.auction.set_admin(&fixture.admin, &new_admin);
    assert_eq!(fixture.auction.query_admin(), new_admin);

    assert_eq!(
        fixture
            .auction
            .try_set_vip_ids(&fixture.admin, &vec![env, 5u64], &true),
        Err(Ok(AuctionError::Unauthorized))
    );
    fixture.auction.set_vip_ids(&new_admin, &vec![env, 5u64], &true);
    assert!(fixture.auction.is_vip_id(&5));
}

#[test]
#[should_panic]
fn set_admin_requires_sender_signature() {
    let fixture = setup(Params::default());
    let new_admin = Address::generate(&fixture.env);

    fixture.env.set_auths(&[]);
    fixture.auction.set_admin(&fixture.admin, &new_admin);
}
