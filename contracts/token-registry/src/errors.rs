use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 300,
    NotInitialized = 301,
    Unauthorized = 302,
    TokenAlreadyAdded = 303,
    TokenNotExist = 304,
}
