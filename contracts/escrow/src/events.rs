use crate::entities::Settlement;
use soroban_sdk::{symbol_short, Address, Env, String};

pub fn exchange_type_updated(env: &Env, name: &String, commission_percent: u32) {
    env.events()
        .publish((symbol_short!("type_set"), name.clone()), commission_percent);
}

pub fn owner_changed(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("owner_chg"),),
        (previous.clone(), new_owner.clone()),
    );
}

pub fn config_updated(env: &Env, by: &Address) {
    env.events().publish((symbol_short!("cfg_set"),), by.clone());
}

pub fn exchange_created(env: &Env, id: &String, buyer: &Address, seller: &Address, escrow: i128) {
    env.events().publish(
        (symbol_short!("ex_new"), id.clone()),
        (buyer.clone(), seller.clone(), escrow),
    );
}

pub fn delivery_attested(env: &Env, id: &String, at: u64) {
    env.events()
        .publish((symbol_short!("ex_attest"), id.clone()), at);
}

pub fn exchange_validated(env: &Env, id: &String, caller: &Address, settlement: &Settlement) {
    env.events().publish(
        (symbol_short!("ex_valid"), id.clone()),
        (caller.clone(), settlement.clone()),
    );
}

pub fn exchange_expired(env: &Env, id: &String, buyer: &Address, refunded: i128) {
    env.events().publish(
        (symbol_short!("ex_expire"), id.clone()),
        (buyer.clone(), refunded),
    );
}
