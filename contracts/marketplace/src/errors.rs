use soroban_sdk::contracterror;

/// Error codes for the marketplace contract.
/// Uses error codes starting at 200 to avoid conflicts with other contracts.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 200,
    /// Contract has not been initialized
    NotInitialized = 201,
    /// Caller is not the admin
    Unauthorized = 202,
    /// Owner already has a listing for this item
    AlreadyListed = 203,
    /// No listing for this item and owner
    NotListed = 204,
    /// Quantity must be positive
    InvalidQuantity = 205,
    /// Owner does not hold the listed quantity
    NotOwningItem = 206,
    /// Marketplace is not an approved operator of the owner
    ItemNotApproved = 207,
    /// Pay token is not enabled or does not match the listing
    InvalidPayToken = 208,
    /// Listing has not started yet
    ItemNotBuyable = 209,
    /// Price must be positive
    InvalidPrice = 210,
    /// Creator already has a live offer for this item
    OfferAlreadyCreated = 211,
    /// No offer for this item and creator
    OfferNotExists = 212,
    /// Offer deadline has passed
    OfferExpired = 213,
    /// Deadline must be in the future
    InvalidExpiration = 214,
    /// Only the registered auction contract may report auction sales
    SenderMustBeAuction = 215,
    /// Platform fee above 100%
    InvalidPlatformFee = 216,
    /// Arithmetic overflow on an amount
    Overflow = 217,
    /// Seller cannot buy their own item
    SelfPurchase = 218,
}
