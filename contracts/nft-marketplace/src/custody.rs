use soroban_sdk::{Address, Env};

use crate::events::TransferEventData;
use crate::storage::{decrement_balance, increment_balance};

/// Mint a new token on behalf of `seller` straight into marketplace escrow.
pub fn mint_into_escrow(e: &Env, seller: &Address, token_id: u64) {
    let escrow = e.current_contract_address();
    increment_balance(e, &escrow);

    TransferEventData {
        from: seller.clone(),
        to: escrow,
        token_id,
    }
    .publish(e);
}

/// Move token custody from `from` to `to`. The caller has already checked
/// that `from` is the current owner.
pub fn move_token(e: &Env, from: &Address, to: &Address, token_id: u64) {
    decrement_balance(e, from);
    increment_balance(e, to);

    TransferEventData {
        from: from.clone(),
        to: to.clone(),
        token_id,
    }
    .publish(e);
}
