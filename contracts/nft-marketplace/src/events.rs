use soroban_sdk::{contractevent, Address};

/// Event emitted when the marketplace is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub payment_token: Address,
    pub listing_fee: i128,
}

/// Event emitted when an item enters escrow, on creation and on resale
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketItemCreatedEventData {
    #[topic]
    pub token_id: u64,
    pub seller: Address,
    pub owner: Address,
    pub price: i128,
}

/// Event emitted when an item is bought
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketItemSoldEventData {
    #[topic]
    pub token_id: u64,
    pub seller: Address,
    pub buyer: Address,
    pub price: i128,
}

/// Token custody change
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEventData {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub token_id: u64,
}

/// Event emitted when the listing fee is changed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingFeeUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub listing_fee: i128,
}

/// Event emitted when retained fees are paid out
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawnEventData {
    #[topic]
    pub admin: Address,
    pub amount: i128,
}
