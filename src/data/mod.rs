//! Document input and summary persistence.

pub mod source;
pub mod store;
