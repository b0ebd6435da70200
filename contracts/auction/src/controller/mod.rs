pub mod bid;
pub mod refund;
pub mod settlement;
