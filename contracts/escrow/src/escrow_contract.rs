use crate::access::{self, Coordinator, StoredOwner};
use crate::entities::*;
use crate::errors::*;
use crate::fees::{self, MAX_PERCENT};
use crate::{events, registry, store};
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String};

#[contract]
pub struct EscrowCustodyContract;

#[contractimpl]
impl EscrowCustodyContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        config: EscrowConfig,
    ) -> Result<(), Error> {
        owner.require_auth();
        if store::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        validate_config(&config)?;

        store::set_owner(&env, &owner);
        store::set_token(&env, &token);
        store::set_config(&env, &config);
        Ok(())
    }

    /// Adds a new exchange type or changes the commission of an existing one.
    pub fn update_exchange_type(
        env: Env,
        caller: Address,
        type_name: String,
        commission_percent: u32,
    ) -> Result<(), Error> {
        caller.require_auth();
        access::require_coordinator(&env, &StoredOwner, &caller)?;

        registry::set_type(&env, &type_name, commission_percent)?;
        events::exchange_type_updated(&env, &type_name, commission_percent);
        Ok(())
    }

    /// Hands the coordinator role to `new_owner`. Pending exchanges pay their
    /// commission to whoever holds the role when they are validated.
    pub fn change_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_coordinator(&env, &StoredOwner, &caller)?;

        store::set_owner(&env, &new_owner);
        events::owner_changed(&env, &caller, &new_owner);
        Ok(())
    }

    /// Replaces the contract configuration. Records already created keep
    /// their committed amounts and deadline.
    pub fn update_config(env: Env, caller: Address, config: EscrowConfig) -> Result<(), Error> {
        caller.require_auth();
        access::require_coordinator(&env, &StoredOwner, &caller)?;
        validate_config(&config)?;

        store::set_config(&env, &config);
        events::config_updated(&env, &caller);
        Ok(())
    }

    /// Opens an exchange with `caller` as buyer and takes `attached` into
    /// custody.
    ///
    /// Fails, in this order, with `UnknownExchangeType`, `InsufficientFunds`,
    /// `DuplicateExchangeId` and, when buyers are limited to one open
    /// exchange, `OngoingExchange`.
    pub fn create(
        env: Env,
        caller: Address,
        id: String,
        seller: Address,
        exchange_type: String,
        price: i128,
        shipping: i128,
        domain_name: String,
        attached: i128,
    ) -> Result<Exchange, Error> {
        caller.require_auth();
        let config = store::config(&env)?;
        if price < 0 || shipping < 0 || attached < 0 {
            return Err(Error::InvalidAmount);
        }

        let commission_rate =
            registry::commission_of(&env, &exchange_type).ok_or(Error::UnknownExchangeType)?;
        let commission = fees::split_share(price, commission_rate)?;
        let slashing = fees::split_share(price, config.slashing_rate)?;
        let required = price
            .checked_add(commission)
            .and_then(|total| total.checked_add(slashing))
            .and_then(|total| total.checked_add(shipping))
            .ok_or(Error::InvalidAmount)?;
        if attached < required {
            return Err(Error::InsufficientFunds);
        }
        if store::has_exchange(&env, &id) {
            return Err(Error::DuplicateExchangeId);
        }
        if config.single_open_per_buyer && store::open_exchanges(&env, &caller) > 0 {
            return Err(Error::OngoingExchange);
        }

        let now = env.ledger().timestamp();
        let deadline = match config.custody_window {
            0 => None,
            window => Some(now.saturating_add(window)),
        };

        let token_client = token::Client::new(&env, &store::token(&env)?);
        let custody = env.current_contract_address();
        pay(&token_client, &caller, &custody, attached);

        let mut escrow = attached;
        if config.refund_overpayment && attached > required {
            pay(&token_client, &custody, &caller, attached - required);
            escrow = required;
        }

        let exchange = Exchange {
            seller: seller.clone(),
            buyer: caller.clone(),
            state: ExchangeState::WaitingForTransfer,
            exchange_type,
            last_update: now,
            total_escrow: EscrowAmounts {
                escrow,
                slashing,
                commission,
                asked_price: price,
                shipping,
            },
            domain_name,
            deadline,
        };
        store::insert_exchange(&env, &id, &exchange)?;

        events::exchange_created(&env, &id, &caller, &seller, escrow);
        log!(&env, "Exchange {} created, escrow {}", id, escrow);
        Ok(exchange)
    }

    /// Coordinator confirms the seller delivered the goods.
    pub fn attest_delivery(env: Env, caller: Address, id: String) -> Result<(), Error> {
        caller.require_auth();
        access::require_coordinator(&env, &StoredOwner, &caller)?;

        let mut exchange = store::exchange(&env, &id)?;
        if exchange.state != ExchangeState::WaitingForTransfer {
            return Err(Error::InvalidStateTransition);
        }

        let now = env.ledger().timestamp();
        exchange.state = ExchangeState::WaitingForValidation;
        exchange.last_update = now;
        store::save_exchange(&env, &id, &exchange);

        events::delivery_attested(&env, &id, now);
        Ok(())
    }

    /// Buyer (or coordinator) confirms reception and settles the exchange:
    /// the deposit goes to the caller, the commission to the coordinator and
    /// price plus shipping to the seller.
    pub fn validate_exchange(env: Env, caller: Address, id: String) -> Result<Settlement, Error> {
        caller.require_auth();
        let mut exchange = store::exchange(&env, &id)?;
        access::require_party(&env, &StoredOwner, &caller, &exchange)?;
        if exchange.state != ExchangeState::WaitingForValidation {
            return Err(Error::InvalidStateTransition);
        }

        let coordinator = StoredOwner.address(&env)?;
        let amounts = &exchange.total_escrow;
        let settlement = Settlement {
            to_caller: amounts.slashing,
            to_coordinator: amounts.commission,
            to_seller: amounts.seller_share().ok_or(Error::InvalidAmount)?,
        };
        let token_client = token::Client::new(&env, &store::token(&env)?);

        exchange.state = ExchangeState::Validated;
        exchange.last_update = env.ledger().timestamp();
        store::save_exchange(&env, &id, &exchange);
        store::release_open_slot(&env, &exchange.buyer);

        let custody = env.current_contract_address();
        pay(&token_client, &custody, &caller, settlement.to_caller);
        pay(&token_client, &custody, &coordinator, settlement.to_coordinator);
        pay(&token_client, &custody, &exchange.seller, settlement.to_seller);

        events::exchange_validated(&env, &id, &caller, &settlement);
        log!(
            &env,
            "Exchange {} validated, seller paid {}",
            id,
            settlement.to_seller
        );
        Ok(settlement)
    }

    /// Refunds the buyer of an exchange whose delivery was never attested
    /// before its deadline. Anyone may trigger it.
    pub fn expire_exchange(env: Env, id: String) -> Result<i128, Error> {
        let mut exchange = store::exchange(&env, &id)?;
        if exchange.state != ExchangeState::WaitingForTransfer {
            return Err(Error::InvalidStateTransition);
        }
        let now = env.ledger().timestamp();
        match exchange.deadline {
            Some(deadline) if now >= deadline => {}
            _ => return Err(Error::NotExpired),
        }

        let token_client = token::Client::new(&env, &store::token(&env)?);
        let refunded = exchange.total_escrow.escrow;

        exchange.state = ExchangeState::Cancelled;
        exchange.last_update = now;
        store::save_exchange(&env, &id, &exchange);
        store::release_open_slot(&env, &exchange.buyer);

        pay(
            &token_client,
            &env.current_contract_address(),
            &exchange.buyer,
            refunded,
        );

        events::exchange_expired(&env, &id, &exchange.buyer, refunded);
        Ok(refunded)
    }

    pub fn get_exchange(env: Env, id: String) -> Result<Exchange, Error> {
        store::exchange(&env, &id)
    }

    pub fn get_exchange_type(env: Env, type_name: String) -> Result<u32, Error> {
        registry::commission_of(&env, &type_name).ok_or(Error::UnknownExchangeType)
    }

    pub fn has_exchange_type(env: Env, type_name: String) -> bool {
        registry::has_type(&env, &type_name)
    }

    pub fn open_exchanges(env: Env, buyer: Address) -> u32 {
        store::open_exchanges(&env, &buyer)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        store::owner(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        store::token(&env)
    }

    pub fn get_config(env: Env) -> Result<EscrowConfig, Error> {
        store::config(&env)
    }
}

fn validate_config(config: &EscrowConfig) -> Result<(), Error> {
    if config.slashing_rate > MAX_PERCENT {
        return Err(Error::InvalidPercentage);
    }
    Ok(())
}

fn pay(token_client: &token::Client, from: &Address, to: &Address, amount: i128) {
    if amount > 0 {
        token_client.transfer(from, to, &amount);
    }
}
