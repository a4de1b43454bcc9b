use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,

    // Timing
    OutsideWindow = 10,
    AlreadyStarted = 11,
    AlreadyEnded = 12,
    InvalidOrdering = 13,
    NotEnded = 14,
    TooEarly = 15,
    DeadlinePassed = 16,
    InvalidDeadline = 17,

    // Accounting
    ZeroValue = 20,
    InvalidAddress = 21,
    TokenCapExceeded = 22,
    IndividualCapExceeded = 23,
    InvalidCap = 24,
    CapAlreadyReached = 25,
    InsufficientDeposit = 26,
    ThresholdNotMet = 27,
    Overflow = 28,

    // State
    Paused = 30,
    ContributionNotFound = 31,
    AlreadyAllocated = 32,
    AlreadyRefunded = 33,
    VaultNotActive = 34,
    VaultNotRefunding = 35,

    // Eligibility
    NotEligible = 40,
}
