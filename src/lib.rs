//! # shopwise-client
//!
//! Rust client for the ShopWise e-commerce REST backend. The core of the
//! crate is the session context ([`state::session::Session`]): a single
//! owned source of truth for "who is logged in", with token persistence
//! across process restarts and bearer-credential attachment on every
//! outgoing request.
//!
//! Consumer views (the `shopwise` CLI here, a UI elsewhere) hold only a
//! shared reference to the session plus its operation handles; nothing in
//! this crate renders anything.

pub mod net;
pub mod state;
pub mod store;
pub mod util;
