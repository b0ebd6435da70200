extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address};

use super::setup::{setup, Params, START_TIME, UNIT};
use crate::{
    msg::LineStatus,
    storage::{get_line, save_line, LeadingBid, Line},
};

#[test]
fn started_line_reads_back_its_leading_bid() {
    let fixture = setup(Params::default());
    let env = &fixture.env;
    let winner = Address::generate(env);
    let bid = LeadingBid {
        winner: winner.clone(),
        price: UNIT / 4,
        deadline: START_TIME + 60,
    };

    let stored = env.as_contract(&fixture.auction.address, || {
        let mut line = Line::new(4);
        line.set_leading(&bid);
        save_line(env, 3, &line);
        get_line(env, 3)
    });

    assert_eq!(stored.head, 4);
    assert!(stored.started);
    assert_eq!(stored.current_winner, Some(winner));
    assert_eq!(stored.current_price, UNIT / 4);
    assert_eq!(stored.deadline, Some(START_TIME + 60));
    assert_eq!(stored.leading(), Some(bid));
    assert_eq!(stored.status(START_TIME), LineStatus::Live);
    assert_eq!(stored.status(START_TIME + 60), LineStatus::Expired);
}

#[test]
fn rotated_line_is_dormant_again() {
    let fixture = setup(Params::default());
    let env = &fixture.env;
    let bidder = fixture.funded_bidder(UNIT);

    fixture.auction.create_bid(&bidder, &4, &(UNIT / 10));
    let live = env.as_contract(&fixture.auction.address, || get_line(env, 3));
    assert_eq!(live.leading().map(|bid| bid.winner), Some(bidder));

    let rotated = env.as_contract(&fixture.auction.address, || {
        let mut line = get_line(env, 3);
        line.rotate(10).unwrap();
        save_line(env, 3, &line);
        get_line(env, 3)
    });

    assert_eq!(rotated, Line::new(14));
    assert_eq!(rotated.leading(), None);
    assert_eq!(rotated.status(START_TIME), LineStatus::Dormant);
}
