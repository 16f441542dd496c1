#![no_std]

mod custody;
mod errors;
mod events;
mod storage;
mod types;
mod views;


use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Vec};

pub use crate::errors::Error;
pub use crate::types::{MarketItem, MarketplaceConfig};

use crate::events::*;
use crate::storage::*;

// ============================================================================
// Constants
// ============================================================================

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Listing fee charged until the admin changes it: 0.025 of a 7-decimal token
pub const DEFAULT_LISTING_FEE: i128 = 250_000;

const COLLECTION_NAME: &str = "NFT Afia Marketplace";
const COLLECTION_SYMBOL: &str = "NFTAM";

// ============================================================================
// Contract
// ============================================================================

/// NFT marketplace ledger.
///
/// Every token is minted by the marketplace and goes straight into escrow
/// (owned by the contract address) until someone buys it. Sellers pay the
/// listing fee on each listing; the fee is retained by the contract until the
/// admin withdraws it. Buyers pay the exact asking price, which is forwarded
/// to the seller. An owner may put a bought token back on sale with
/// [`NftMarketplace::resell_token`].
///
/// Each invocation is atomic: validation happens before any write, and a
/// failing token transfer rolls the whole call back.
#[contract]
pub struct NftMarketplace;

#[contractimpl]
impl NftMarketplace {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the marketplace.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to change the listing fee and withdraw fees
    /// * `payment_token` - Token contract prices and fees are paid in
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(e: &Env, admin: Address, payment_token: Address) -> Result<(), Error> {
        admin.require_auth();

        if is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        let config = MarketplaceConfig {
            admin: admin.clone(),
            payment_token: payment_token.clone(),
            listing_fee: DEFAULT_LISTING_FEE,
            total_items: 0,
            total_sold: 0,
            updated_at: e.ledger().timestamp(),
        };

        set_config(e, &config);
        set_initialized(e);
        Self::extend_instance_ttl(e);

        InitializedEventData {
            admin,
            payment_token,
            listing_fee: DEFAULT_LISTING_FEE,
        }
        .publish(e);

        Ok(())
    }

    /// Collection name
    pub fn name(e: &Env) -> String {
        String::from_str(e, COLLECTION_NAME)
    }

    /// Collection symbol
    pub fn symbol(e: &Env) -> String {
        String::from_str(e, COLLECTION_SYMBOL)
    }

    // ========================================================================
    // MARKETPLACE CONFIGURATION
    // ========================================================================

    /// Get marketplace configuration
    pub fn get_config(e: &Env) -> Result<MarketplaceConfig, Error> {
        get_config(e).ok_or(Error::NotInitialized)
    }

    pub fn get_admin(e: &Env) -> Result<Address, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        Ok(config.admin)
    }

    /// Fee a seller must pay to list or relist an item
    pub fn get_listing_fee(e: &Env) -> Result<i128, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        Ok(config.listing_fee)
    }

    /// Replace the listing fee (admin only).
    ///
    /// Applies to every later `create_token` and `resell_token` call. Zero is
    /// a valid fee.
    ///
    /// # Errors
    /// * `Error::NotAuthorized` - If caller is not admin
    /// * `Error::InvalidFee` - If `new_fee` is negative
    pub fn update_listing_fee(e: &Env, admin: Address, new_fee: i128) -> Result<(), Error> {
        admin.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            log!(e, "only the marketplace admin can update the listing fee");
            return Err(Error::NotAuthorized);
        }

        if new_fee < 0 {
            return Err(Error::InvalidFee);
        }

        config.listing_fee = new_fee;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        ListingFeeUpdatedEventData {
            admin,
            listing_fee: new_fee,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // LISTING & SALES
    // ========================================================================

    /// Mint a token and list it for sale.
    ///
    /// The token is created in marketplace escrow with `seller` as the party
    /// to be paid. `paid_fee` is transferred from `seller` to the contract.
    ///
    /// # Arguments
    /// * `seller` - Creator of the token
    /// * `token_uri` - Content URI of the token metadata
    /// * `price` - Asking price in payment token units
    /// * `paid_fee` - Must equal the current listing fee
    ///
    /// # Returns
    /// * The new token ID
    ///
    /// # Errors
    /// * `Error::InvalidPrice` - If `price` is not positive
    /// * `Error::FeeMismatch` - If `paid_fee` differs from the listing fee
    pub fn create_token(
        e: &Env,
        seller: Address,
        token_uri: String,
        price: i128,
        paid_fee: i128,
    ) -> Result<u64, Error> {
        seller.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if price <= 0 {
            log!(e, "price must be at least 1 unit");
            return Err(Error::InvalidPrice);
        }

        if paid_fee != config.listing_fee {
            log!(e, "paid fee must equal the listing fee");
            return Err(Error::FeeMismatch);
        }

        Self::collect_listing_fee(e, &config, &seller, paid_fee);

        let token_id = config.total_items + 1;
        let escrow = e.current_contract_address();

        let item = MarketItem {
            token_id,
            token_uri,
            seller: seller.clone(),
            owner: escrow.clone(),
            price,
            sold: false,
        };

        set_item(e, &item);
        custody::mint_into_escrow(e, &seller, token_id);

        config.total_items = token_id;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        MarketItemCreatedEventData {
            token_id,
            seller,
            owner: escrow,
            price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(token_id)
    }

    /// Buy a listed item.
    ///
    /// `paid_amount` goes from `buyer` to the item's seller and the token
    /// leaves escrow for `buyer`.
    ///
    /// # Errors
    /// * `Error::NotFound` - If no item exists for `token_id`
    /// * `Error::NotForSale` - If the item has already been sold
    /// * `Error::PriceMismatch` - If `paid_amount` differs from the asking price
    pub fn create_market_sale(
        e: &Env,
        buyer: Address,
        token_id: u64,
        paid_amount: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;
        let mut item = get_item(e, token_id).ok_or(Error::NotFound)?;
        let escrow = e.current_contract_address();

        if item.sold || item.owner != escrow {
            log!(e, "item is not held by the marketplace");
            return Err(Error::NotForSale);
        }

        if paid_amount != item.price {
            log!(e, "please submit the asking price");
            return Err(Error::PriceMismatch);
        }

        // Payment first: a rejected transfer traps and nothing below is kept.
        token::Client::new(e, &config.payment_token).transfer(&buyer, &item.seller, &paid_amount);

        custody::move_token(e, &escrow, &buyer, token_id);

        item.owner = buyer.clone();
        item.sold = true;
        set_item(e, &item);

        config.total_sold += 1;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        MarketItemSoldEventData {
            token_id,
            seller: item.seller,
            buyer,
            price: item.price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Put an owned token back on sale (owner only).
    ///
    /// The owner becomes the seller, pays the listing fee again, and the token
    /// returns to escrow at `price`.
    ///
    /// # Errors
    /// * `Error::NotFound` - If no item exists for `token_id`
    /// * `Error::NotOwner` - If `owner` does not hold the token
    /// * `Error::InvalidPrice` - If `price` is not positive
    /// * `Error::FeeMismatch` - If `paid_fee` differs from the listing fee
    pub fn resell_token(
        e: &Env,
        owner: Address,
        token_id: u64,
        price: i128,
        paid_fee: i128,
    ) -> Result<(), Error> {
        owner.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;
        let mut item = get_item(e, token_id).ok_or(Error::NotFound)?;

        if item.owner != owner {
            log!(e, "only the token owner can resell");
            return Err(Error::NotOwner);
        }

        if price <= 0 {
            log!(e, "price must be at least 1 unit");
            return Err(Error::InvalidPrice);
        }

        if paid_fee != config.listing_fee {
            log!(e, "paid fee must equal the listing fee");
            return Err(Error::FeeMismatch);
        }

        Self::collect_listing_fee(e, &config, &owner, paid_fee);

        let escrow = e.current_contract_address();
        custody::move_token(e, &owner, &escrow, token_id);

        item.seller = owner.clone();
        item.owner = escrow.clone();
        item.price = price;
        item.sold = false;
        set_item(e, &item);

        config.total_sold -= 1;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        MarketItemCreatedEventData {
            token_id,
            seller: owner,
            owner: escrow,
            price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // TOKEN OWNERSHIP
    // ========================================================================

    /// Current holder of a token; the marketplace itself while listed
    pub fn owner_of(e: &Env, token_id: u64) -> Result<Address, Error> {
        let item = get_item(e, token_id).ok_or(Error::NotFound)?;
        Ok(item.owner)
    }

    pub fn token_uri(e: &Env, token_id: u64) -> Result<String, Error> {
        let item = get_item(e, token_id).ok_or(Error::NotFound)?;
        Ok(item.token_uri)
    }

    /// Number of tokens held by `owner`
    pub fn balance_of(e: &Env, owner: Address) -> u64 {
        get_balance(e, &owner)
    }

    /// Transfer an owned token to another address.
    ///
    /// Listed tokens are held by the marketplace and cannot be moved this way,
    /// and an owned token only returns to escrow through `resell_token`.
    ///
    /// # Errors
    /// * `Error::NotFound` - If no item exists for `token_id`
    /// * `Error::NotOwner` - If `from` does not hold the token
    /// * `Error::InvalidRecipient` - If `to` is the marketplace itself
    pub fn transfer(e: &Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        get_config(e).ok_or(Error::NotInitialized)?;
        let mut item = get_item(e, token_id).ok_or(Error::NotFound)?;

        if item.owner != from {
            return Err(Error::NotOwner);
        }

        if to == e.current_contract_address() {
            log!(e, "use resell_token to list a token");
            return Err(Error::InvalidRecipient);
        }

        custody::move_token(e, &from, &to, token_id);

        item.owner = to;
        set_item(e, &item);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Get a single market item
    pub fn get_market_item(e: &Env, token_id: u64) -> Result<MarketItem, Error> {
        get_item(e, token_id).ok_or(Error::NotFound)
    }

    /// All items available for purchase, by ascending token ID
    pub fn fetch_market_items(e: &Env) -> Result<Vec<MarketItem>, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        Ok(views::available_items(e, &config))
    }

    /// Items held by `owner` (bought and not relisted)
    pub fn fetch_my_nfts(e: &Env, owner: Address) -> Result<Vec<MarketItem>, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        Ok(views::items_owned_by(e, &config, &owner))
    }

    /// Items `seller` has listed that are still awaiting a buyer
    pub fn fetch_items_listed(e: &Env, seller: Address) -> Result<Vec<MarketItem>, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        Ok(views::items_listed_by(e, &config, &seller))
    }

    // ========================================================================
    // FEE MANAGEMENT
    // ========================================================================

    /// Listing fees held by the contract and not yet withdrawn
    pub fn get_retained_fees(e: &Env) -> Result<i128, Error> {
        get_config(e).ok_or(Error::NotInitialized)?;
        Ok(get_retained_fees(e))
    }

    /// Pay all retained listing fees out to the admin (admin only).
    ///
    /// # Returns
    /// * The amount transferred; zero when nothing was retained
    ///
    /// # Errors
    /// * `Error::NotAuthorized` - If caller is not admin
    pub fn withdraw(e: &Env, admin: Address) -> Result<i128, Error> {
        admin.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            log!(e, "only the marketplace admin can withdraw");
            return Err(Error::NotAuthorized);
        }

        let amount = get_retained_fees(e);
        if amount == 0 {
            return Ok(0);
        }

        token::Client::new(e, &config.payment_token).transfer(
            &e.current_contract_address(),
            &admin,
            &amount,
        );
        clear_retained_fees(e);

        FeesWithdrawnEventData { admin, amount }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(amount)
    }

    // ========================================================================
    // STATISTICS & INFO
    // ========================================================================

    /// Get marketplace statistics: items created, items sold, retained fees
    pub fn get_stats(e: &Env) -> Result<(u64, u64, i128), Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        Ok((config.total_items, config.total_sold, get_retained_fees(e)))
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Move a validated listing fee from `payer` into the contract's retained
    /// balance. A zero fee skips the token call.
    fn collect_listing_fee(e: &Env, config: &MarketplaceConfig, payer: &Address, fee: i128) {
        if fee == 0 {
            return;
        }

        token::Client::new(e, &config.payment_token).transfer(
            payer,
            &e.current_contract_address(),
            &fee,
        );
        add_retained_fees(e, fee);
    }

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}
