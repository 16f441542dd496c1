use soroban_sdk::contracterror;

/// Error codes for the NFT marketplace contract.
/// Uses error codes starting at 600 to avoid conflicts with the payment token.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 600,
    /// Contract has not been initialized
    NotInitialized = 601,
    /// Caller is not the marketplace admin
    NotAuthorized = 602,
    /// No market item exists for the token ID
    NotFound = 603,
    /// Item is not held in escrow by the marketplace
    NotForSale = 604,
    /// Caller does not own the token
    NotOwner = 605,
    /// Listing price must be greater than zero
    InvalidPrice = 606,
    /// Paid fee does not equal the current listing fee
    FeeMismatch = 607,
    /// Paid amount does not equal the asking price
    PriceMismatch = 608,
    /// Listing fee cannot be negative
    InvalidFee = 609,
    /// Owned tokens cannot be sent into marketplace escrow
    InvalidRecipient = 610,
}
