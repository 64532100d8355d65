//! Guards and messages of the buy flow.

use store::{KeyValueStore, Product, SessionStore, User};

use crate::format::format_vnd;

/// Why a purchase cannot start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PurchaseBlock {
    SignInRequired,
    InsufficientBalance { balance: i64, price: i64 },
}

impl PurchaseBlock {
    pub fn message(&self) -> String {
        match self {
            PurchaseBlock::SignInRequired => "Please log in to buy this account.".to_string(),
            PurchaseBlock::InsufficientBalance { balance, price } => format!(
                "Your balance is too low.\nBalance: {}\nPrice: {}\nPlease top up first.",
                format_vnd(*balance),
                format_vnd(*price)
            ),
        }
    }
}

/// Checks run before asking for confirmation: signed in first, then funds.
pub fn check_purchase(user: Option<&User>, product: &Product) -> Result<(), PurchaseBlock> {
    let user = user.ok_or(PurchaseBlock::SignInRequired)?;
    if !user.can_afford(product.price) {
        return Err(PurchaseBlock::InsufficientBalance {
            balance: user.balance,
            price: product.price,
        });
    }
    Ok(())
}

pub fn confirmation_prompt(product: &Product) -> String {
    format!(
        "Buy \"{}\" for {}?",
        product.name,
        format_vnd(product.price)
    )
}

/// Catalog-wide buy status. One purchase runs at a time; `completed` counts
/// finished purchases so product lists know to re-fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PurchaseState {
    pub in_flight: Option<String>,
    pub completed: u32,
}

impl PurchaseState {
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_buying(&self, product_id: &str) -> bool {
        self.in_flight.as_deref() == Some(product_id)
    }

    /// Claim the slot for `product_id`. Fails while another purchase runs.
    pub fn start(&mut self, product_id: &str) -> bool {
        if self.is_busy() {
            return false;
        }
        self.in_flight = Some(product_id.to_string());
        true
    }

    pub fn finish(&mut self, bought: bool) {
        self.in_flight = None;
        if bought {
            self.completed += 1;
        }
    }
}

/// Receipt text for a bought account. Missing credentials show as `(none)`.
pub fn receipt_message(product: &Product) -> String {
    let username = product.account_username.as_deref().unwrap_or("(none)");
    let password = product.account_password.as_deref().unwrap_or("(none)");
    format!(
        "Purchase successful!\nAccount: {}\nUsername: {}\nPassword: {}",
        product.name, username, password
    )
}

/// Apply a completed purchase to the local user and the cached copy.
///
/// The balance is decremented locally by the listed price; the profile is not
/// re-fetched.
pub fn settle_purchase<S: KeyValueStore>(user: &mut User, price: i64, store: &SessionStore<S>) {
    user.debit(price);
    store.save_user(user);
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, ProductStatus};

    fn product(price: i64) -> Product {
        Product {
            id: "p1".into(),
            category: None,
            name: "Acc Kim Cuong".into(),
            description: String::new(),
            image: String::new(),
            price,
            status: ProductStatus::Available,
            account_username: None,
            account_password: None,
        }
    }

    fn customer(balance: i64) -> User {
        User {
            id: "u1".into(),
            email: "an@example.com".into(),
            balance,
            ..Default::default()
        }
    }

    #[test]
    fn test_guest_must_sign_in() {
        assert_eq!(
            check_purchase(None, &product(1)),
            Err(PurchaseBlock::SignInRequired)
        );
    }

    #[test]
    fn test_insufficient_balance_blocks() {
        let user = customer(49_999);
        let block = check_purchase(Some(&user), &product(50_000)).unwrap_err();
        assert_eq!(
            block,
            PurchaseBlock::InsufficientBalance {
                balance: 49_999,
                price: 50_000
            }
        );
        let msg = block.message();
        assert!(msg.contains(&format_vnd(49_999)));
        assert!(msg.contains(&format_vnd(50_000)));
    }

    #[test]
    fn test_exact_balance_is_enough() {
        let user = customer(50_000);
        assert!(check_purchase(Some(&user), &product(50_000)).is_ok());
    }

    #[test]
    fn test_settle_debits_exactly_the_price() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend);
        let mut user = customer(120_000);
        store.save_login("t", &user);

        settle_purchase(&mut user, 50_000, &store);
        assert_eq!(user.balance, 70_000);
        assert_eq!(store.cached_user().map(|u| u.balance), Some(70_000));
    }

    #[test]
    fn test_one_purchase_at_a_time() {
        let mut state = PurchaseState::default();
        assert!(state.start("p1"));
        assert!(!state.start("p2"));
        assert!(state.is_buying("p1"));
        assert!(!state.is_buying("p2"));

        state.finish(true);
        assert!(!state.is_busy());
        assert_eq!(state.completed, 1);

        assert!(state.start("p2"));
        state.finish(false);
        assert_eq!(state.completed, 1);
    }

    #[test]
    fn test_settle_in_place_keeps_concurrent_changes() {
        let store = SessionStore::new(MemoryStore::new());
        let mut user = customer(200_000);
        // A profile update lands while the purchase request is in flight.
        user.name = "An Nguyen".into();

        settle_purchase(&mut user, 50_000, &store);
        settle_purchase(&mut user, 30_000, &store);
        assert_eq!(user.balance, 120_000);
        assert_eq!(user.name, "An Nguyen");
        assert_eq!(
            store.cached_user().map(|u| (u.balance, u.name)),
            Some((120_000, "An Nguyen".to_string()))
        );
    }

    #[test]
    fn test_receipt_placeholders() {
        let mut p = product(10_000);
        assert!(receipt_message(&p).contains("Password: (none)"));
        p.account_username = Some("tft_user".into());
        p.account_password = Some("hunter2".into());
        let msg = receipt_message(&p);
        assert!(msg.contains("Username: tft_user"));
        assert!(msg.contains("Password: hunter2"));
    }

    #[test]
    fn test_confirmation_prompt_names_product() {
        let prompt = confirmation_prompt(&product(10_000));
        assert!(prompt.contains("Acc Kim Cuong"));
        assert!(prompt.contains(&format_vnd(10_000)));
    }
}
