use soroban_sdk::contracttype;

/// Storage keys for the address registry
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    Initialized,
    Entry(Component),
}

/// Sibling contracts the registry can point at
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Component {
    Auction = 0,
    Marketplace = 1,
    TokenRegistry = 2,
    Factory = 3,
}
