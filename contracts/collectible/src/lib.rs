#![no_std]

mod admin;
mod balance;
mod contract;
pub mod errors;
mod events;
mod metadata;
mod storage;


pub use crate::contract::{Collectible, CollectibleClient};
