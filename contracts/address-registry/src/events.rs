use soroban_sdk::{contractevent, Address, Env};

use crate::types::Component;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressUpdated {
    #[topic]
    pub component: Component,
    pub address: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    #[topic]
    pub old_admin: Address,
    pub new_admin: Address,
}

pub fn emit_address_updated(env: &Env, component: Component, address: Address) {
    AddressUpdated { component, address }.publish(env);
}

pub fn emit_admin_changed(env: &Env, old_admin: Address, new_admin: Address) {
    AdminChanged { old_admin, new_admin }.publish(env);
}
