use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CollectibleError {
    NotMinter = 1,
    AlreadyMinted = 2,
    InvalidAmount = 3,
}
