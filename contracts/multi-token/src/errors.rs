use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 600,
    NotInitialized = 601,
    Unauthorized = 602,
    TokenNotFound = 603,
    /// Spender is neither the holder nor an approved operator
    NotOwnerOrApproved = 604,
    /// Holder balance below the requested amount
    InsufficientBalance = 605,
    /// Zero amount, or batch inputs of different lengths
    InvalidAmount = 606,
    InvalidRoyalty = 607,
    InvalidFee = 608,
    Overflow = 609,
}
