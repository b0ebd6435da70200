//! Line registry.
//!
//! Line slot `s` auctions ids `s + 1, s + 1 + K, s + 1 + 2K, ...`. Two views of a
//! line exist and must not be mixed up: the stored head, which only settlement
//! advances and which alone decides bid acceptance, and the projected due id,
//! which already skips past a round that expired with a winner.

use soroban_sdk::{Env, Vec};

use crate::{
    errors::AuctionError,
    msg::{LineState, LineStatus},
    storage::{get_line, AuctionConfig, Line},
};

/// Slot of the line `id` belongs to. Id 0 belongs to no line.
pub fn slot_for(config: &AuctionConfig, id: u64) -> Result<u32, AuctionError> {
    if id == 0 {
        return Err(AuctionError::InvalidId);
    }
    Ok(((id - 1) % config.num_lines as u64) as u32)
}

impl Line {
    pub fn status(&self, now: u64) -> LineStatus {
        match (self.started, self.deadline) {
            (false, _) | (true, None) => LineStatus::Dormant,
            (true, Some(deadline)) if now >= deadline => LineStatus::Expired,
            (true, Some(_)) => LineStatus::Live,
        }
    }

    pub fn projected_due_id(&self, num_lines: u32, now: u64) -> u64 {
        match self.status(now) {
            LineStatus::Expired => self.head.saturating_add(num_lines as u64),
            LineStatus::Dormant | LineStatus::Live => self.head,
        }
    }

    /// Lowest amount the next bid on the stored head must carry.
    pub fn min_price(&self, config: &AuctionConfig) -> Result<i128, AuctionError> {
        if !self.started {
            return Ok(config.starting_price);
        }
        self.current_price
            .checked_add(config.bid_increment)
            .ok_or(AuctionError::MathOverflow)
    }

    /// Moves the line to its next epoch.
    pub fn rotate(&mut self, num_lines: u32) -> Result<(), AuctionError> {
        let head = self
            .head
            .checked_add(num_lines as u64)
            .ok_or(AuctionError::MathOverflow)?;
        *self = Line::new(head);
        Ok(())
    }

    pub fn to_state(&self, slot: u32, num_lines: u32, now: u64) -> LineState {
        LineState {
            slot,
            head: self.head,
            status: self.status(now),
            current_winner: self.current_winner.clone(),
            current_price: self.current_price,
            deadline: self.deadline,
            projected_id: self.projected_due_id(num_lines, now),
        }
    }
}

/// Minimum next bid on the line `id` belongs to.
pub fn min_price_for(env: &Env, config: &AuctionConfig, id: u64) -> Result<i128, AuctionError> {
    let slot = slot_for(config, id)?;
    get_line(env, slot).min_price(config)
}

/// One projected due id per line, in slot order.
pub fn get_all(env: &Env, config: &AuctionConfig, now: u64) -> Vec<u64> {
    let mut ids = Vec::new(env);
    for slot in 0..config.num_lines {
        ids.push_back(get_line(env, slot).projected_due_id(config.num_lines, now));
    }
    ids
}

pub fn line_state(
    env: &Env,
    config: &AuctionConfig,
    id: u64,
    now: u64,
) -> Result<LineState, AuctionError> {
    let slot = slot_for(config, id)?;
    Ok(get_line(env, slot).to_state(slot, config.num_lines, now))
}

/// Funds held on behalf of started, unsettled rounds.
pub fn escrowed(env: &Env, config: &AuctionConfig) -> Result<i128, AuctionError> {
    let mut total: i128 = 0;
    for slot in 0..config.num_lines {
        let line = get_line(env, slot);
        if line.started {
            total = total
                .checked_add(line.current_price)
                .ok_or(AuctionError::MathOverflow)?;
        }
    }
    Ok(total)
}
