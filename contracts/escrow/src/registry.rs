use crate::entities::DataKey;
use crate::errors::Error;
use crate::fees::MAX_PERCENT;
use crate::store;
use soroban_sdk::{Env, String};

/// Inserts or overwrites the commission percentage for `name`.
pub fn set_type(env: &Env, name: &String, commission_percent: u32) -> Result<(), Error> {
    if commission_percent > MAX_PERCENT {
        return Err(Error::InvalidPercentage);
    }
    store::persist(env, &DataKey::ExchangeType(name.clone()), &commission_percent);
    Ok(())
}

pub fn has_type(env: &Env, name: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::ExchangeType(name.clone()))
}

pub fn commission_of(env: &Env, name: &String) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::ExchangeType(name.clone()))
}
