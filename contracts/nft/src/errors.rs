use soroban_sdk::contracterror;

/// Error codes for the single-edition collection contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 500,
    NotInitialized = 501,
    /// Caller is not the collection owner or the authorised minter
    Unauthorized = 502,
    /// Token id was never minted or has been burned
    TokenNotFound = 503,
    /// Spender is neither the holder nor an approved operator
    NotOwnerOrApproved = 504,
    /// `from` does not hold the token
    IncorrectOwner = 505,
    /// Single-edition tokens move one at a time
    InvalidAmount = 506,
    /// Royalty above 100%
    InvalidRoyalty = 507,
    /// Approving the current holder
    ApprovalToOwner = 508,
    /// Negative mint fee
    InvalidFee = 509,
}
