use soroban_sdk::contracterror;

/// Error codes for the launchpad contract (8xx range).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 800,
    /// Contract has not been initialized
    NotInitialized = 801,
    /// Caller is not the admin
    Unauthorized = 802,
    /// End time must be after the start time
    InvalidTimeRange = 803,
    /// Max supply must be positive
    InvalidSupply = 804,
    /// Count must be positive
    InvalidCount = 805,
    /// Sale window is closed
    SaleNotActive = 806,
    /// Purchase would exceed the max supply
    SoldOut = 807,
    /// Price must not be negative
    InvalidPrice = 808,
    /// Arithmetic overflow on an amount
    Overflow = 809,
}
