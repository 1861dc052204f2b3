//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! Diesel row structs (`models.rs`) and table definitions (`schema.rs`) are
//! internal implementation details, never exposed to the domain layer. All
//! database errors are mapped to the port's error variants.

mod diesel_job_posting_repository;
mod models;
mod pool;
mod schema;

pub use diesel_job_posting_repository::DieselJobPostingRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
