extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation},
    Address, Env, IntoVal, Symbol,
};

use super::setup::{deploy_collectible_contract, deploy_token_contract};
use crate::errors::CollectibleError;

#[test]
fn add_minter_requires_admin_auth() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);
    let collectible = deploy_collectible_contract(&env, &admin);

    collectible.add_minter(&minter);

    assert_eq!(
        env.auths(),
        std::vec![(
            admin.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    collectible.address.clone(),
                    Symbol::new(&env, "add_minter"),
                    (&minter,).into_val(&env),
                )),
                sub_invocations: std::vec![],
            },
        )]
    );
}

#[test]
#[should_panic]
fn add_minter_without_admin_auth_fails() {
    let env = Env::default();

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);
    let collectible = deploy_collectible_contract(&env, &admin);

    collectible.add_minter(&minter);
}

#[test]
fn admin_withdraws_proceeds() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let treasury = Address::generate(&env);
    let collectible = deploy_collectible_contract(&env, &admin);
    let (token, token_admin) = deploy_token_contract(&env, &admin);

    token_admin.mint(&collectible.address, &1_000);

    collectible.withdraw(&token.address, &treasury, &400);

    assert_eq!(token.balance(&collectible.address), 600);
    assert_eq!(token.balance(&treasury), 400);
}

#[test]
fn withdraw_rejects_non_positive_amounts() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let treasury = Address::generate(&env);
    let collectible = deploy_collectible_contract(&env, &admin);
    let (token, _) = deploy_token_contract(&env, &admin);

    assert_eq!(
        collectible.try_withdraw(&token.address, &treasury, &0),
        Err(Ok(CollectibleError::InvalidAmount.into()))
    );
}

#[test]
fn admin_can_be_rotated() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let new_admin = Address::generate(&env);
    let collectible = deploy_collectible_contract(&env, &admin);

    collectible.set_admin(&new_admin);

    assert_eq!(collectible.query_admin(), new_admin);
}
