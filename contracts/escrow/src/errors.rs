use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    UnknownExchangeType = 4,
    InsufficientFunds = 5,
    DuplicateExchangeId = 6,
    NotFound = 7,
    InvalidStateTransition = 8,
    InvalidAmount = 9,
    InvalidPercentage = 10,
    OngoingExchange = 11,
    NotExpired = 12,
}
