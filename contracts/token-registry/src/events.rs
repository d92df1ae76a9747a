use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenAdded {
    #[topic]
    pub token: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenRemoved {
    #[topic]
    pub token: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    #[topic]
    pub old_admin: Address,
    pub new_admin: Address,
}

pub fn emit_token_added(env: &Env, token: Address) {
    TokenAdded { token }.publish(env);
}

pub fn emit_token_removed(env: &Env, token: Address) {
    TokenRemoved { token }.publish(env);
}

pub fn emit_admin_changed(env: &Env, old_admin: Address, new_admin: Address) {
    AdminChanged { old_admin, new_admin }.publish(env);
}
