//! HTTP client and wire types for the ShopWise REST API.
//!
//! DESIGN
//! ======
//! `types` holds the typed records that cross the wire; `api` owns the
//! `reqwest` client, the endpoint methods, and the bearer-attachment
//! contract. Session state lives elsewhere (`crate::state`) so the API
//! layer stays a stateless request/response surface.

pub mod api;
pub mod types;
