use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    Unauthorized = 4,
    #[doc = "Id is not the stored head of its line"]
    InvalidId = 5,
    #[doc = "Line expired and waits for settlement"]
    AuctionClosed = 6,
    BidTooLow = 7,
    #[doc = "VIP id and the bidder holds none of the required collections"]
    NotEligible = 8,
    NotYetExpired = 9,
    NoBids = 10,
    AlreadySettled = 11,
    RefundFailed = 12,
    MintOrPayoutFailed = 13,
    #[doc = "Bid amount could not be collected from the bidder"]
    PaymentFailed = 14,
    MathOverflow = 15,
}
