use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 700,
    NotInitialized = 701,
    Unauthorized = 702,
    FactoryPaused = 703,
    CollectionAlreadyRegistered = 704,
    CollectionNotRegistered = 705,
    InvalidFee = 706,
}
