use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExchangeState {
    WaitingForTransfer,
    WaitingForValidation,
    Validated,
    Cancelled,
}

impl ExchangeState {
    /// Whether the record still holds custodied funds.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            ExchangeState::WaitingForTransfer | ExchangeState::WaitingForValidation
        )
    }
}

/// Amounts committed when the exchange is created. Later registry or
/// config changes never rewrite them.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowAmounts {
    pub escrow: i128,
    pub slashing: i128,
    pub commission: i128,
    pub asked_price: i128,
    pub shipping: i128,
}

impl EscrowAmounts {
    /// What the seller receives on settlement.
    pub fn seller_share(&self) -> Option<i128> {
        self.asked_price.checked_add(self.shipping)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Exchange {
    pub seller: Address,
    pub buyer: Address,
    pub state: ExchangeState,
    pub exchange_type: String,
    pub last_update: u64,
    pub total_escrow: EscrowAmounts,
    pub domain_name: String,
    pub deadline: Option<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    /// Deposit withheld from the price, in percent.
    pub slashing_rate: u32,
    /// Reject `create` while the buyer already has an open exchange.
    pub single_open_per_buyer: bool,
    /// Send the amount attached above the required total back to the buyer.
    pub refund_overpayment: bool,
    /// Seconds a record may wait for delivery before anyone can expire it.
    /// Zero disables expiry.
    pub custody_window: u64,
}

/// Legs paid out by `validate_exchange`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub to_caller: i128,
    pub to_coordinator: i128,
    pub to_seller: i128,
}

impl Settlement {
    pub fn total(&self) -> Option<i128> {
        self.to_caller
            .checked_add(self.to_coordinator)?
            .checked_add(self.to_seller)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Token,
    Config,
    ExchangeType(String),
    Exchange(String),
    OpenExchanges(Address),
}
