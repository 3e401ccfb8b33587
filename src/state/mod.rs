//! Client-side session state.
//!
//! DESIGN
//! ======
//! One owned `Session` per application, shared by reference into every
//! consumer. Views read the current user and call the operation handles;
//! they never touch the token store or the HTTP layer directly.

pub mod session;
