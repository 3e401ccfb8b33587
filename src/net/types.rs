#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use uuid::Uuid;

/// Account role attached to every user.
///
/// The wire value is `"admin"` or `"customer"`; older backend builds emit
/// `"user"` for non-admin accounts, accepted here as an alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[serde(alias = "user")]
    Customer,
}

/// The authenticated account as returned by the backend.
///
/// Opaque to the session context beyond read access; extra JSON fields
/// (timestamps, activity flags) are ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price_cents: i64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for product creation (`POST /api/products`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price_cents: i64,
    pub description: Option<String>,
}
