use soroban_sdk::{Address, Env, Symbol};

pub struct CollectibleEvents {}

impl CollectibleEvents {
    /// Emitted when a token is minted
    ///
    /// - topics - `["mint", minter: Address, to: Address]`
    /// - data - `id: u64`
    pub fn mint(env: &Env, minter: Address, to: Address, id: u64) {
        let topics = (Symbol::new(env, "mint"), minter, to);
        env.events().publish(topics, id);
    }

    /// Emitted when the admin grants the minter role
    ///
    /// - topics - `["add_minter", admin: Address]`
    /// - data - `minter: Address`
    pub fn add_minter(env: &Env, admin: Address, minter: Address) {
        let topics = (Symbol::new(env, "add_minter"), admin);
        env.events().publish(topics, minter);
    }

    /// Emitted when the admin revokes the minter role
    ///
    /// - topics - `["remove_minter", admin: Address]`
    /// - data - `minter: Address`
    pub fn remove_minter(env: &Env, admin: Address, minter: Address) {
        let topics = (Symbol::new(env, "remove_minter"), admin);
        env.events().publish(topics, minter);
    }

    /// Emitted when the admin withdraws accumulated sale proceeds
    ///
    /// - topics - `["withdraw", admin: Address, to: Address]`
    /// - data - `[token: Address, amount: i128]`
    pub fn withdraw(env: &Env, admin: Address, to: Address, token: Address, amount: i128) {
        let topics = (Symbol::new(env, "withdraw"), admin, to);
        env.events().publish(topics, (token, amount));
    }

    pub fn set_admin(env: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(env, "set_admin"), admin);
        env.events().publish(topics, new_admin);
    }
}
