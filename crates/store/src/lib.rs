//! `ordergate-store` — in-memory keyed tables for orders and profiles.
//!
//! Thin plumbing around the auth core: plain create/read/update/delete over
//! `RwLock`-guarded maps, no persistence. Ownership and role checks happen in
//! the API layer before these stores are touched (or by filtering their
//! output for collection listings).

pub mod demo;
pub mod orders;
pub mod profiles;

pub use orders::{InMemoryOrderStore, NewOrder, OrderPatch, OrderRecord, OrderStatus};
pub use profiles::{InMemoryProfileStore, ProfilePatch, ProfileRecord};
