//! Session module
//!
//! Per-user conversational memory of the last provider description.

pub mod store;

pub use self::store::{Session, SessionStore};
