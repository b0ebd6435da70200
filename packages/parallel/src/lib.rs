#![no_std]

pub mod constants;
pub mod interfaces;
pub mod macros;
