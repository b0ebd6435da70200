use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LineStatus {
    /// No bid yet for the stored head
    Dormant = 0,
    /// Bidding open until the deadline
    Live = 1,
    /// Deadline passed, waiting for settlement
    Expired = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineState {
    pub slot: u32,
    pub head: u64,
    pub status: LineStatus,
    pub current_winner: Option<Address>,
    pub current_price: i128,
    pub deadline: Option<u64>,
    /// Id the line lists for discovery, see `get_ids_to_auction`
    pub projected_id: u64,
}
