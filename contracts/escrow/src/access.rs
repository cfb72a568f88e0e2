use crate::entities::Exchange;
use crate::errors::Error;
use crate::store;
use soroban_sdk::{Address, Env};

/// Authority that attests delivery and collects commission.
///
/// The escrow entry points only talk to this trait, so a multisig or
/// timelocked authority can replace the single stored owner without
/// touching the state machine.
pub trait Coordinator {
    fn address(&self, env: &Env) -> Result<Address, Error>;

    fn is_coordinator(&self, env: &Env, caller: &Address) -> Result<bool, Error> {
        Ok(self.address(env)? == *caller)
    }
}

/// The owner address kept in contract storage.
pub struct StoredOwner;

impl Coordinator for StoredOwner {
    fn address(&self, env: &Env) -> Result<Address, Error> {
        store::owner(env)
    }
}

pub fn require_coordinator(
    env: &Env,
    coordinator: &impl Coordinator,
    caller: &Address,
) -> Result<(), Error> {
    if !coordinator.is_coordinator(env, caller)? {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn require_party(
    env: &Env,
    coordinator: &impl Coordinator,
    caller: &Address,
    exchange: &Exchange,
) -> Result<(), Error> {
    if exchange.buyer == *caller || coordinator.is_coordinator(env, caller)? {
        return Ok(());
    }
    Err(Error::Unauthorized)
}
