use parallel::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    interfaces::{Eligibility, Mintable},
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env, String,
};
use soroban_token_sdk::metadata::TokenMetadata;

use crate::{
    admin::{is_minter, read_administrator, write_administrator, write_minter},
    balance::{read_balance, read_owner, receive_token},
    errors::CollectibleError,
    events::CollectibleEvents,
    metadata::{read_name, read_symbol, write_metadata},
};

contractmeta!(
    key = "Description",
    val = "Collectible minted to the winners of the parallel auction"
);

#[contract]
pub struct Collectible;

#[contractimpl]
impl Collectible {
    pub fn __constructor(env: Env, admin: Address, name: String, symbol: String) {
        write_administrator(&env, &admin);
        // Whole tokens only, each id is minted once.
        write_metadata(
            &env,
            TokenMetadata {
                decimal: 0,
                name,
                symbol,
            },
        );
    }

    pub fn add_minter(env: Env, minter: Address) {
        let admin = read_administrator(&env);
        admin.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_minter(&env, &minter, true);
        CollectibleEvents::add_minter(&env, admin, minter);
    }

    pub fn remove_minter(env: Env, minter: Address) {
        let admin = read_administrator(&env);
        admin.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_minter(&env, &minter, false);
        CollectibleEvents::remove_minter(&env, admin, minter);
    }

    /// Sends `amount` of the sale proceeds held in `token` to `to`.
    pub fn withdraw(env: Env, token: Address, to: Address, amount: i128) {
        let admin = read_administrator(&env);
        admin.require_auth();

        if amount <= 0 {
            log!(&env, "Collectible: Withdraw: amount must be positive", amount);
            panic_with_error!(&env, CollectibleError::InvalidAmount);
        }

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        token::TokenClient::new(&env, &token).transfer(
            &env.current_contract_address(),
            &to,
            &amount,
        );
        CollectibleEvents::withdraw(&env, admin, to, token, amount);
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = read_administrator(&env);
        admin.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_administrator(&env, &new_admin);
        CollectibleEvents::set_admin(&env, admin, new_admin);
    }

    pub fn owner_of(env: Env, id: u64) -> Option<Address> {
        read_owner(&env, id)
    }

    pub fn query_admin(env: Env) -> Address {
        read_administrator(&env)
    }

    pub fn name(env: Env) -> String {
        read_name(&env)
    }

    pub fn symbol(env: Env) -> String {
        read_symbol(&env)
    }
}

#[contractimpl]
impl Mintable for Collectible {
    fn mint(env: Env, minter: Address, to: Address, id: u64) {
        minter.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if !is_minter(&env, &minter) {
            log!(&env, "Collectible: Mint: You are not a minter!", minter);
            panic_with_error!(&env, CollectibleError::NotMinter);
        }

        if read_owner(&env, id).is_some() {
            log!(&env, "Collectible: Mint: token already minted", id);
            panic_with_error!(&env, CollectibleError::AlreadyMinted);
        }

        receive_token(&env, to.clone(), id);
        CollectibleEvents::mint(&env, minter, to, id);
    }

    fn is_minter(env: Env, account: Address) -> bool {
        is_minter(&env, &account)
    }
}

#[contractimpl]
impl Eligibility for Collectible {
    fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_balance(&env, id)
    }
}
