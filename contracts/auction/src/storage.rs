use parallel::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::AuctionError;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    Initialized,
    VipCollections,
    VipId(u64),
    Line(u32),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    /// SEP-41 token bids are paid in
    pub payment_token: Address,
    /// Contract minting won ids and receiving the proceeds
    pub collectible: Address,
    /// Number of lines running at the same time (K)
    pub num_lines: u32,
    /// Seconds a round stays open after its first bid
    pub duration: u64,
    /// Anti-snipe window in seconds
    pub extra_time: u64,
    pub starting_price: i128,
    pub bid_increment: i128,
}

impl AuctionConfig {
    pub fn is_valid(&self) -> bool {
        self.num_lines > 0 && self.duration > 0 && self.starting_price >= 0 && self.bid_increment >= 0
    }
}

pub fn save_config(env: &Env, config: &AuctionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<AuctionConfig, AuctionError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(AuctionError::NotInitialized)
}

pub fn save_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, AuctionError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(AuctionError::NotInitialized)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ################################################################
//                             Lines
// ################################################################

/// High bid of a started round, as handed between the controllers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeadingBid {
    pub winner: Address,
    pub price: i128,
    pub deadline: u64,
}

/// Stored state of one line. A dormant line has `started == false`, no winner,
/// no deadline and a zero price, which is also its state right after settlement.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    pub head: u64,
    pub started: bool,
    pub current_winner: Option<Address>,
    pub current_price: i128,
    pub deadline: Option<u64>,
}

impl Line {
    pub fn new(head: u64) -> Self {
        Line {
            head,
            started: false,
            current_winner: None,
            current_price: 0,
            deadline: None,
        }
    }

    pub fn leading(&self) -> Option<LeadingBid> {
        match (self.started, &self.current_winner, self.deadline) {
            (true, Some(winner), Some(deadline)) => Some(LeadingBid {
                winner: winner.clone(),
                price: self.current_price,
                deadline,
            }),
            _ => None,
        }
    }

    pub fn set_leading(&mut self, bid: &LeadingBid) {
        self.started = true;
        self.current_winner = Some(bid.winner.clone());
        self.current_price = bid.price;
        self.deadline = Some(bid.deadline);
    }
}

pub fn get_line(env: &Env, slot: u32) -> Line {
    let key = DataKey::Line(slot);
    match env.storage().persistent().get::<_, Line>(&key) {
        Some(line) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            line
        }
        None => Line::new(slot as u64 + 1),
    }
}

pub fn save_line(env: &Env, slot: u32, line: &Line) {
    let key = DataKey::Line(slot);
    env.storage().persistent().set(&key, line);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################
//                             VIP
// ################################################################

pub fn get_vip_collections(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::VipCollections)
        .unwrap_or(Vec::new(env))
}

pub fn save_vip_collections(env: &Env, collections: &Vec<Address>) {
    env.storage()
        .instance()
        .set(&DataKey::VipCollections, collections);
}

pub fn is_vip_id(env: &Env, id: u64) -> bool {
    let key = DataKey::VipId(id);
    let vip = env.storage().persistent().get::<_, bool>(&key).unwrap_or(false);
    if vip {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    vip
}

pub fn save_vip_id(env: &Env, id: u64, flag: bool) {
    let key = DataKey::VipId(id);
    if flag {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    } else {
        env.storage().persistent().remove(&key);
    }
}
