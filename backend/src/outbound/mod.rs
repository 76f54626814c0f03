//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel.
//!
//! Adapters translate between domain types and storage representations and
//! hold no business rules.

pub mod persistence;
