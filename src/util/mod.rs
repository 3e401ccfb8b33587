//! Display helpers shared by consumers.

pub mod price;
