use soroban_sdk::{contractclient, Address, Env};

/// Capability the auction needs from the asset it sells: minting a freshly won id
/// to its winner. Implementations gate `mint` behind a minter role.
#[contractclient(name = "MintableClient")]
pub trait Mintable {
    fn mint(env: Env, minter: Address, to: Address, id: u64);

    fn is_minter(env: Env, account: Address) -> bool;
}

/// Balance oracle consulted for VIP admission. Any SEP-41 token exposes it.
#[contractclient(name = "EligibilityClient")]
pub trait Eligibility {
    fn balance(env: Env, id: Address) -> i128;
}
