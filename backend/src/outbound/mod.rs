//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL asset store using Diesel, plus an in-memory
//!   store for tests.
//! - **generation**: reqwest client for the text-to-image service.
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod generation;
pub mod persistence;
