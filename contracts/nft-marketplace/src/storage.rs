use soroban_sdk::{Address, Env};

use crate::types::{
    MarketItem, MarketplaceConfig, StorageKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INITIALIZATION STORAGE
// ============================================================================

/// Check if contract is initialized
pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false)
}

/// Mark contract as initialized
pub fn set_initialized(e: &Env) {
    e.storage()
        .instance()
        .set(&StorageKey::Initialized, &true);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Get marketplace configuration
pub fn get_config(e: &Env) -> Option<MarketplaceConfig> {
    let key = StorageKey::Config;
    let config = e.storage().persistent().get::<_, MarketplaceConfig>(&key);
    if config.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    config
}

/// Set marketplace configuration
pub fn set_config(e: &Env, config: &MarketplaceConfig) {
    let key = StorageKey::Config;
    e.storage().persistent().set(&key, config);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// ITEM STORAGE
// ============================================================================

/// Get market item by token ID
pub fn get_item(e: &Env, token_id: u64) -> Option<MarketItem> {
    let key = StorageKey::Item(token_id);
    let item = e.storage().persistent().get::<_, MarketItem>(&key);
    if item.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    item
}

/// Set market item
pub fn set_item(e: &Env, item: &MarketItem) {
    let key = StorageKey::Item(item.token_id);
    e.storage().persistent().set(&key, item);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// BALANCE STORAGE
// ============================================================================

/// Number of tokens held by an address
pub fn get_balance(e: &Env, holder: &Address) -> u64 {
    let key = StorageKey::Balance(holder.clone());
    let balance = e.storage().persistent().get::<_, u64>(&key).unwrap_or(0);
    if balance > 0 {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    balance
}

fn set_balance(e: &Env, holder: &Address, balance: u64) {
    let key = StorageKey::Balance(holder.clone());
    if balance == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &balance);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Credit one token to `holder`
pub fn increment_balance(e: &Env, holder: &Address) {
    let balance = get_balance(e, holder);
    set_balance(e, holder, balance + 1);
}

/// Debit one token from `holder`
pub fn decrement_balance(e: &Env, holder: &Address) {
    let balance = get_balance(e, holder);
    set_balance(e, holder, balance.saturating_sub(1));
}

// ============================================================================
// FEES STORAGE
// ============================================================================

/// Get listing fees held by the contract
pub fn get_retained_fees(e: &Env) -> i128 {
    let key = StorageKey::RetainedFees;
    let fees = e.storage().persistent().get::<_, i128>(&key).unwrap_or(0);
    if fees > 0 {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    fees
}

/// Add to retained listing fees
pub fn add_retained_fees(e: &Env, amount: i128) {
    let key = StorageKey::RetainedFees;
    let fees = get_retained_fees(e) + amount;
    e.storage().persistent().set(&key, &fees);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Clear retained listing fees after a withdrawal
pub fn clear_retained_fees(e: &Env) {
    e.storage().persistent().remove(&StorageKey::RetainedFees);
}
