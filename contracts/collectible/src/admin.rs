use parallel::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env};

use crate::storage::DataKey;

pub fn read_administrator(env: &Env) -> Address {
    let key = DataKey::Admin;
    env.storage().instance().get(&key).expect("Collectible: Admin not set")
}

pub fn write_administrator(env: &Env, id: &Address) {
    let key = DataKey::Admin;
    env.storage().instance().set(&key, id);
}

pub fn is_minter(env: &Env, account: &Address) -> bool {
    let key = DataKey::Minter(account.clone());
    let minter = env.storage().persistent().get::<_, bool>(&key).unwrap_or(false);
    if minter {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    minter
}

pub fn write_minter(env: &Env, account: &Address, minter: bool) {
    let key = DataKey::Minter(account.clone());
    if minter {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    } else {
        env.storage().persistent().remove(&key);
    }
}
