use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::{errors::AuctionError, msg::LineState, storage::AuctionConfig};

#[contractclient(name = "AuctionClient")]
pub trait AuctionTrait {
    fn initialize(env: Env, admin: Address, config: AuctionConfig) -> Result<(), AuctionError>;

    // ################################################################
    //                             ADMIN
    // ################################################################

    fn set_admin(env: Env, sender: Address, new_admin: Address) -> Result<(), AuctionError>;

    // Replaces the collections whose holders may bid on VIP ids
    fn set_vip_tokens(
        env: Env,
        sender: Address,
        collections: Vec<Address>,
    ) -> Result<(), AuctionError>;

    fn set_vip_ids(env: Env, sender: Address, ids: Vec<u64>, flag: bool)
        -> Result<(), AuctionError>;

    // ################################################################
    //                             USER
    // ################################################################

    fn create_bid(env: Env, bidder: Address, id: u64, amount: i128) -> Result<(), AuctionError>;

    // Permissionless, anyone can close an expired round
    fn settle_auction(env: Env, id: u64) -> Result<(), AuctionError>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn get_ids_to_auction(env: Env) -> Result<Vec<u64>, AuctionError>;

    fn get_min_price_for(env: Env, id: u64) -> Result<i128, AuctionError>;

    fn line_state(env: Env, id: u64) -> Result<LineState, AuctionError>;

    fn is_vip_id(env: Env, id: u64) -> bool;

    fn token_required_to_own_to_be_vip(env: Env) -> Option<Address>;

    fn vip_tokens(env: Env) -> Vec<Address>;

    fn is_eligible(env: Env, account: Address) -> bool;

    fn query_escrowed(env: Env) -> Result<i128, AuctionError>;

    fn query_config(env: Env) -> Result<AuctionConfig, AuctionError>;

    fn query_admin(env: Env) -> Result<Address, AuctionError>;
}
