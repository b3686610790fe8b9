use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    NoPermissions = 2,

    VaultNotFound = 100,
    NothingToBuy = 101,

    NotUndercollateralized = 200,
    AlreadyUnderAuction = 201,

    ProportionTooHigh = 300,
    MustBeNonNegative = 301,
    InvalidAmount = 302,

    SlippageExceeded = 400,

    MathOverflowError = 500,
}
