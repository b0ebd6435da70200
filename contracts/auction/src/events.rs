use soroban_sdk::{Address, Env, Symbol, Vec};

use crate::storage::AuctionConfig;

pub struct AuctionEvents {}

impl AuctionEvents {
    /// Emitted when the auction is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[num_lines: u32, duration: u64, extra_time: u64, starting_price: i128, bid_increment: i128]`
    pub fn initialize(env: &Env, admin: Address, config: &AuctionConfig) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(
            topics,
            (
                config.num_lines,
                config.duration,
                config.extra_time,
                config.starting_price,
                config.bid_increment,
            ),
        );
    }

    /// Emitted when a bid becomes the leading bid of its line
    ///
    /// - topics - `["bid", id: u64, bidder: Address]`
    /// - data - `[price: i128, deadline: u64]`
    pub fn bid(env: &Env, id: u64, bidder: Address, price: i128, deadline: u64) {
        let topics = (Symbol::new(env, "bid"), id, bidder);
        env.events().publish(topics, (price, deadline));
    }

    /// Emitted when an outbid bidder gets their funds back
    ///
    /// - topics - `["refund", id: u64, to: Address]`
    /// - data - `amount: i128`
    pub fn refund(env: &Env, id: u64, to: Address, amount: i128) {
        let topics = (Symbol::new(env, "refund"), id, to);
        env.events().publish(topics, amount);
    }

    /// Emitted when a round is settled and its line rotates
    ///
    /// - topics - `["settle", id: u64, winner: Address]`
    /// - data - `[price: i128, next_id: u64]`
    pub fn settle(env: &Env, id: u64, winner: Address, price: i128, next_id: u64) {
        let topics = (Symbol::new(env, "settle"), id, winner);
        env.events().publish(topics, (price, next_id));
    }

    /// - topics - `["vip_collections", admin: Address]`
    /// - data - `collections: Vec<Address>`
    pub fn vip_collections(env: &Env, admin: Address, collections: Vec<Address>) {
        let topics = (Symbol::new(env, "vip_collections"), admin);
        env.events().publish(topics, collections);
    }

    /// - topics - `["vip_ids", admin: Address]`
    /// - data - `[ids: Vec<u64>, flag: bool]`
    pub fn vip_ids(env: &Env, admin: Address, ids: Vec<u64>, flag: bool) {
        let topics = (Symbol::new(env, "vip_ids"), admin);
        env.events().publish(topics, (ids, flag));
    }

    pub fn set_admin(env: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(env, "set_admin"), admin);
        env.events().publish(topics, new_admin);
    }
}
