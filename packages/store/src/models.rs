//! # Domain models for the storefront
//!
//! Defines the records the backend hands to the client. They are
//! `Serialize + Deserialize` so they can be decoded from API responses and
//! written back to the session cache unchanged.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The signed-in account: identity, [`Role`], balance (VND) and optional avatar. |
//! | [`Product`] | A game account listing scoped to a [`Category`], with a [`ProductStatus`]. The credential fields are only filled by the admin detail endpoint and by purchase receipts. |
//! | [`PendingDeposit`] | A user-reported bank transfer waiting for an admin to approve it. |
//! | [`AdminStats`] | Aggregate revenue figures for the admin dashboard. |
//!
//! Field names follow the backend's JSON (`_id`, `createdAt`, `accountUsername`, ...),
//! mapped onto snake_case Rust fields with serde attributes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Account role as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Anything the client does not recognise is treated as a regular customer.
    #[default]
    #[serde(other)]
    Customer,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Customer => "Customer",
        }
    }
}

/// The signed-in account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "sub", alias = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// Balance in VND.
    #[serde(default)]
    pub balance: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name, falling back to the e-mail address when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    pub fn can_afford(&self, price: i64) -> bool {
        self.balance >= price
    }

    /// Apply a local balance decrement after a successful purchase.
    pub fn debit(&mut self, amount: i64) {
        self.balance -= amount;
    }

    /// Merge a partial profile returned by `PUT /api/user/me` into this record.
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(balance) = update.balance {
            self.balance = balance;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if update.avatar.is_some() {
            self.avatar = update.avatar;
        }
    }
}

/// Partial user record as returned by the profile update endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub balance: Option<i64>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Product partition (game title).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tft,
    Lol,
    Lienquan,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Tft, Category::Lol, Category::Lienquan];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tft => "tft",
            Category::Lol => "lol",
            Category::Lienquan => "lienquan",
        }
    }

    /// Heading shown on category cards and product lists.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Tft => "TFT accounts",
            Category::Lol => "LOL accounts",
            Category::Lienquan => "Lien Quan accounts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tft" => Ok(Category::Tft),
            "lol" => Ok(Category::Lol),
            "lienquan" => Ok(Category::Lienquan),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// Sale state of a listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Available,
    /// Any status other than `available` is treated as sold.
    #[serde(other)]
    Sold,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Available => "Available",
            ProductStatus::Sold => "Sold",
        }
    }
}

/// A game account listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    /// `None` when the backend sent no category or one this client does not know.
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<Category>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: i64,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(rename = "accountUsername", default, skip_serializing_if = "Option::is_none")]
    pub account_username: Option<String>,
    #[serde(rename = "accountPassword", default, skip_serializing_if = "Option::is_none")]
    pub account_password: Option<String>,
}

impl Product {
    pub fn is_sold(&self) -> bool {
        self.status == ProductStatus::Sold
    }

    /// Category code in upper case for admin tables, `N/A` when unknown.
    pub fn category_code(&self) -> String {
        self.category
            .map(|c| c.as_str().to_uppercase())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// The user who reported a deposit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DepositRequester {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A bank transfer awaiting manual approval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingDeposit {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub user: DepositRequester,
}

/// Revenue totals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    #[serde(default)]
    pub total_revenue: i64,
    #[serde(default)]
    pub total_purchases: u64,
}

/// Figures shown on the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub summary: RevenueSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_backend_json() {
        let user: User = serde_json::from_str(
            r#"{"sub":"u1","name":"An","email":"an@example.com","role":"admin","balance":150000}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.is_admin());
        assert_eq!(user.balance, 150000);
        assert!(user.avatar.is_none());
    }

    #[test]
    fn test_user_defaults_when_fields_missing() {
        let user: User =
            serde_json::from_str(r#"{"_id":"u2","email":"b@example.com","role":"moderator"}"#)
                .unwrap();
        assert_eq!(user.id, "u2");
        assert_eq!(user.role, Role::Customer);
        assert_eq!(user.balance, 0);
        assert_eq!(user.display_name(), "b@example.com");
    }

    #[test]
    fn test_user_merge_keeps_untouched_fields() {
        let mut user = User {
            id: "u1".into(),
            name: "Old".into(),
            email: "a@example.com".into(),
            role: Role::Customer,
            balance: 5000,
            avatar: None,
        };
        user.merge(ProfileUpdate {
            name: Some("New".into()),
            avatar: Some("data:image/png;base64,AAAA".into()),
            ..Default::default()
        });
        assert_eq!(user.name, "New");
        assert_eq!(user.balance, 5000);
        assert_eq!(user.avatar.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_product_with_unknown_category() {
        let product: Product = serde_json::from_str(
            r#"{"_id":"p1","category":"dota","name":"Acc","price":1000,"status":"sold"}"#,
        )
        .unwrap();
        assert!(product.category.is_none());
        assert_eq!(product.category_code(), "N/A");
        assert!(product.is_sold());
    }

    #[test]
    fn test_unknown_status_reads_as_sold() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[{"_id":"p1","name":"A","price":1,"status":"reserved"},
                {"_id":"p2","name":"B","price":2,"status":"available"}]"#,
        )
        .unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].status, ProductStatus::Sold);
        assert!(!products[1].is_sold());
    }

    #[test]
    fn test_product_admin_fields() {
        let product: Product = serde_json::from_str(
            r#"{"_id":"p1","category":"lol","name":"Acc","description":"d","image":"i.png",
                "price":250000,"status":"available","accountUsername":"u","accountPassword":"p"}"#,
        )
        .unwrap();
        assert_eq!(product.category, Some(Category::Lol));
        assert_eq!(product.category_code(), "LOL");
        assert_eq!(product.account_username.as_deref(), Some("u"));
        assert_eq!(product.account_password.as_deref(), Some("p"));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("TFT".parse::<Category>(), Ok(Category::Tft));
        assert_eq!("lienquan".parse::<Category>(), Ok(Category::Lienquan));
        assert!("aov".parse::<Category>().is_err());
    }

    #[test]
    fn test_pending_deposit_and_stats() {
        let deposit: PendingDeposit = serde_json::from_str(
            r#"{"_id":"d1","amount":50000,"createdAt":"2024-05-01T10:00:00.000Z",
                "user":{"_id":"u1","name":"An","email":"an@example.com"}}"#,
        )
        .unwrap();
        assert_eq!(deposit.amount, 50000);
        assert_eq!(deposit.user.email, "an@example.com");

        let stats: AdminStats = serde_json::from_str(
            r#"{"totalUsers":12,"summary":{"totalRevenue":900000,"totalPurchases":7}}"#,
        )
        .unwrap();
        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.summary.total_revenue, 900000);
        assert_eq!(stats.summary.total_purchases, 7);
    }
}
