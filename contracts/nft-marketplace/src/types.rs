use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the NFT marketplace contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Initialization flag
    Initialized,
    /// Marketplace configuration
    Config,
    /// Market item by token ID
    Item(u64),
    /// Number of tokens held by an address
    Balance(Address),
    /// Listing fees collected and not yet withdrawn
    RetainedFees,
}

/// One minted token and its sale state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketItem {
    /// Token identifier, assigned from 1 upwards
    pub token_id: u64,
    /// Content URI (metadata JSON on the content store)
    pub token_uri: String,
    /// Party paid when the item next sells
    pub seller: Address,
    /// Current holder; the marketplace itself while listed
    pub owner: Address,
    /// Asking price in payment token units
    pub price: i128,
    /// Purchased and not relisted
    pub sold: bool,
}

/// Marketplace configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketplaceConfig {
    /// Admin address; sets the listing fee and withdraws fees
    pub admin: Address,
    /// Token contract used for prices and fees
    pub payment_token: Address,
    /// Fee charged on every listing and relisting
    pub listing_fee: i128,
    /// Number of items ever created
    pub total_items: u64,
    /// Number of items currently sold
    pub total_sold: u64,
    /// Timestamp of last configuration update
    pub updated_at: u64,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
