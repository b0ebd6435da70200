#![no_std]

mod auction;
mod contract;
mod controller;
pub mod errors;
mod events;
mod lines;
pub mod msg;
pub mod storage;
mod vip;

#[cfg(test)]
mod tests;

pub use crate::auction::AuctionClient;
pub use crate::contract::{ParallelAuction, ParallelAuctionClient};
