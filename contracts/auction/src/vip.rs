use parallel::interfaces::EligibilityClient;
use soroban_sdk::{log, Address, Env, Vec};

use crate::storage::{get_vip_collections, is_vip_id, save_vip_collections, save_vip_id};

/// Replaces the eligibility collections, dropping repeated entries.
pub fn set_required_collections(env: &Env, collections: Vec<Address>) -> Vec<Address> {
    let mut unique = Vec::new(env);
    for collection in collections.iter() {
        if !unique.contains(&collection) {
            unique.push_back(collection);
        }
    }
    save_vip_collections(env, &unique);
    unique
}

pub fn set_vip_flags(env: &Env, ids: &Vec<u64>, flag: bool) {
    for id in ids.iter() {
        save_vip_id(env, id, flag);
    }
}

pub fn is_vip(env: &Env, id: u64) -> bool {
    is_vip_id(env, id)
}

pub fn required_collections(env: &Env) -> Vec<Address> {
    get_vip_collections(env)
}

pub fn primary_required_collection(env: &Env) -> Option<Address> {
    get_vip_collections(env).first()
}

/// An account is eligible when it holds a nonzero balance in any configured
/// collection. A collection that cannot answer counts as not held.
pub fn is_eligible(env: &Env, account: &Address) -> bool {
    get_vip_collections(env).iter().any(|collection| {
        match EligibilityClient::new(env, &collection).try_balance(account) {
            Ok(Ok(balance)) => balance > 0,
            _ => {
                log!(env, "Auction: Eligibility: collection did not answer", collection);
                false
            }
        }
    })
}
