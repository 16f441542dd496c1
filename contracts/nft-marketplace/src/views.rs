use soroban_sdk::{Address, Env, Vec};

use crate::storage::get_item;
use crate::types::{MarketItem, MarketplaceConfig};

/// Scan every item ever created, in ascending token ID order, keeping the
/// ones accepted by `keep`.
fn collect_items<F>(e: &Env, config: &MarketplaceConfig, keep: F) -> Vec<MarketItem>
where
    F: Fn(&MarketItem) -> bool,
{
    let mut items = Vec::new(e);

    for token_id in 1..=config.total_items {
        if let Some(item) = get_item(e, token_id) {
            if keep(&item) {
                items.push_back(item);
            }
        }
    }

    items
}

/// Items held in escrow and available for purchase
pub fn available_items(e: &Env, config: &MarketplaceConfig) -> Vec<MarketItem> {
    let escrow = e.current_contract_address();
    collect_items(e, config, |item| item.owner == escrow)
}

/// Items bought (or received) by `owner` and not relisted
pub fn items_owned_by(e: &Env, config: &MarketplaceConfig, owner: &Address) -> Vec<MarketItem> {
    collect_items(e, config, |item| item.owner == *owner)
}

/// Items `seller` has in escrow awaiting a buyer
pub fn items_listed_by(e: &Env, config: &MarketplaceConfig, seller: &Address) -> Vec<MarketItem> {
    collect_items(e, config, |item| item.seller == *seller && !item.sold)
}
