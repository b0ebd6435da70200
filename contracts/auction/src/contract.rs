use parallel::validate;
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, Vec};

use crate::{
    auction::AuctionTrait,
    controller,
    errors::AuctionError,
    events::AuctionEvents,
    lines,
    msg::LineState,
    storage::{
        bump_instance, get_admin, get_config, is_initialized, save_admin, save_config,
        save_line, set_initialized, AuctionConfig, Line,
    },
    vip,
};

contractmeta!(
    key = "Description",
    val = "Perpetual parallel auction of sequential ids with anti-snipe extension"
);

#[contract]
pub struct ParallelAuction;

#[contractimpl]
impl AuctionTrait for ParallelAuction {
    fn initialize(env: Env, admin: Address, config: AuctionConfig) -> Result<(), AuctionError> {
        if is_initialized(&env) {
            log!(&env, "Auction: Initialize: initializing contract twice is not allowed");
            return Err(AuctionError::AlreadyInitialized);
        }

        admin.require_auth();

        validate!(
            &env,
            config.is_valid(),
            AuctionError::InvalidConfig,
            "Auction: Initialize: lines and duration must be positive, prices non-negative"
        )?;

        set_initialized(&env);
        save_admin(&env, &admin);
        save_config(&env, &config);

        for slot in 0..config.num_lines {
            save_line(&env, slot, &Line::new(slot as u64 + 1));
        }

        bump_instance(&env);

        AuctionEvents::initialize(&env, admin, &config);

        Ok(())
    }

    fn set_admin(env: Env, sender: Address, new_admin: Address) -> Result<(), AuctionError> {
        sender.require_auth();
        bump_instance(&env);

        let admin = get_admin(&env)?;
        if admin != sender {
            log!(&env, "Auction: Set admin: You are not authorized!");
            return Err(AuctionError::Unauthorized);
        }

        save_admin(&env, &new_admin);

        AuctionEvents::set_admin(&env, admin, new_admin);

        Ok(())
    }

    fn set_vip_tokens(
        env: Env,
        sender: Address,
        collections: Vec<Address>,
    ) -> Result<(), AuctionError> {
        sender.require_auth();
        bump_instance(&env);

        let admin = get_admin(&env)?;
        if admin != sender {
            log!(&env, "Auction: Set VIP tokens: You are not authorized!");
            return Err(AuctionError::Unauthorized);
        }

        let collections = vip::set_required_collections(&env, collections);

        AuctionEvents::vip_collections(&env, admin, collections);

        Ok(())
    }

    fn set_vip_ids(
        env: Env,
        sender: Address,
        ids: Vec<u64>,
        flag: bool,
    ) -> Result<(), AuctionError> {
        sender.require_auth();
        bump_instance(&env);

        let admin = get_admin(&env)?;
        if admin != sender {
            log!(&env, "Auction: Set VIP ids: You are not authorized!");
            return Err(AuctionError::Unauthorized);
        }

        vip::set_vip_flags(&env, &ids, flag);

        AuctionEvents::vip_ids(&env, admin, ids, flag);

        Ok(())
    }

    fn create_bid(env: Env, bidder: Address, id: u64, amount: i128) -> Result<(), AuctionError> {
        bidder.require_auth();
        bump_instance(&env);

        let config = get_config(&env)?;
        let now = env.ledger().timestamp();

        controller::bid::create_bid(&env, &config, &bidder, id, amount, now)?;

        Ok(())
    }

    fn settle_auction(env: Env, id: u64) -> Result<(), AuctionError> {
        bump_instance(&env);

        let config = get_config(&env)?;
        let now = env.ledger().timestamp();

        controller::settlement::settle_auction(&env, &config, id, now)?;

        Ok(())
    }

    fn get_ids_to_auction(env: Env) -> Result<Vec<u64>, AuctionError> {
        let config = get_config(&env)?;
        Ok(lines::get_all(&env, &config, env.ledger().timestamp()))
    }

    fn get_min_price_for(env: Env, id: u64) -> Result<i128, AuctionError> {
        let config = get_config(&env)?;
        lines::min_price_for(&env, &config, id)
    }

    fn line_state(env: Env, id: u64) -> Result<LineState, AuctionError> {
        let config = get_config(&env)?;
        lines::line_state(&env, &config, id, env.ledger().timestamp())
    }

    fn is_vip_id(env: Env, id: u64) -> bool {
        vip::is_vip(&env, id)
    }

    fn token_required_to_own_to_be_vip(env: Env) -> Option<Address> {
        vip::primary_required_collection(&env)
    }

    fn vip_tokens(env: Env) -> Vec<Address> {
        vip::required_collections(&env)
    }

    fn is_eligible(env: Env, account: Address) -> bool {
        vip::is_eligible(&env, &account)
    }

    fn query_escrowed(env: Env) -> Result<i128, AuctionError> {
        let config = get_config(&env)?;
        lines::escrowed(&env, &config)
    }

    fn query_config(env: Env) -> Result<AuctionConfig, AuctionError> {
        get_config(&env)
    }

    fn query_admin(env: Env) -> Result<Address, AuctionError> {
        get_admin(&env)
    }
}
