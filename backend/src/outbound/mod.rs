//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and
//! infrastructure-specific representations. They contain no business logic.
//!
//! - **persistence**: PostgreSQL-backed posting repository using Diesel ORM
//! - **memory**: in-process repository for tests and database-less runs

pub mod memory;
pub mod persistence;
