use parallel::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env};

use crate::storage::DataKey;

pub fn read_owner(env: &Env, id: u64) -> Option<Address> {
    let key = DataKey::Owner(id);
    let owner = env.storage().persistent().get::<DataKey, Address>(&key);
    if owner.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    owner
}

pub fn read_balance(env: &Env, addr: Address) -> i128 {
    let key = DataKey::Balance(addr);
    if let Some(balance) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, addr: Address, amount: i128) {
    let key = DataKey::Balance(addr);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Records `to` as the owner of `id` and bumps its holdings.
pub fn receive_token(env: &Env, to: Address, id: u64) {
    let key = DataKey::Owner(id);
    env.storage().persistent().set(&key, &to);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    let balance = read_balance(env, to.clone());
    write_balance(env, to, balance + 1);
}
