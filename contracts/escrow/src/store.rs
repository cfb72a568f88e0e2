use crate::entities::{DataKey, EscrowConfig, Exchange};
use crate::errors::Error;
use soroban_sdk::{Address, Env, IntoVal, String, Val};

const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;

/// Writes `value` under `key` and keeps the entry alive.
pub(crate) fn persist<V>(env: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    let storage = env.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Owner)
}

pub fn owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    persist(env, &DataKey::Owner, owner);
}

pub fn token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    persist(env, &DataKey::Token, token);
}

pub fn config(env: &Env) -> Result<EscrowConfig, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &EscrowConfig) {
    persist(env, &DataKey::Config, config);
}

pub fn has_exchange(env: &Env, id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Exchange(id.clone()))
}

pub fn exchange(env: &Env, id: &String) -> Result<Exchange, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Exchange(id.clone()))
        .ok_or(Error::NotFound)
}

/// Stores a new record. Identifiers are never reused, whatever state the
/// earlier record reached.
pub fn insert_exchange(env: &Env, id: &String, exchange: &Exchange) -> Result<(), Error> {
    if has_exchange(env, id) {
        return Err(Error::DuplicateExchangeId);
    }
    persist(env, &DataKey::Exchange(id.clone()), exchange);
    if exchange.state.is_open() {
        let open = open_exchanges(env, &exchange.buyer)
            .checked_add(1)
            .ok_or(Error::InvalidAmount)?;
        set_open_exchanges(env, &exchange.buyer, open);
    }
    Ok(())
}

pub fn save_exchange(env: &Env, id: &String, exchange: &Exchange) {
    persist(env, &DataKey::Exchange(id.clone()), exchange);
}

pub fn open_exchanges(env: &Env, buyer: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::OpenExchanges(buyer.clone()))
        .unwrap_or(0)
}

/// Called once when a record leaves the open states.
pub fn release_open_slot(env: &Env, buyer: &Address) {
    let open = open_exchanges(env, buyer).saturating_sub(1);
    set_open_exchanges(env, buyer, open);
}

fn set_open_exchanges(env: &Env, buyer: &Address, open: u32) {
    let key = DataKey::OpenExchanges(buyer.clone());
    if open == 0 {
        env.storage().persistent().remove(&key);
    } else {
        persist(env, &key, &open);
    }
}
