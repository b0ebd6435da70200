use soroban_sdk::{contracttype, Address};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Minter(Address),
    Owner(u64),
    Balance(Address),
}
