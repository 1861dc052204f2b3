//! REST API modules.

pub mod error;
pub mod health;
pub mod postings;

pub use error::{ApiError, ApiResult};
pub use postings::PostingsState;
