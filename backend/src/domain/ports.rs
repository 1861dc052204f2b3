//! Domain ports defining the edges of the hexagon.
//!
//! The job-posting repository is the only driven port: it describes how the
//! domain expects postings to be stored and listed. Adapters map their
//! failures into strongly typed error variants instead of returning
//! `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::posting::{JobPosting, PostingWithAuthor};

/// Failures surfaced by job-posting persistence adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobPostingRepositoryError {
    /// Database connectivity failures, including pool checkout.
    #[error("job posting repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("job posting repository query failed: {message}")]
    Query { message: String },
    /// No posting exists under the identifier.
    #[error("job posting {id} not found")]
    NotFound { id: Uuid },
}

impl JobPostingRepositoryError {
    /// Helper for connection-oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Helper for missing postings.
    #[must_use]
    pub const fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }
}

/// Persistence port for job postings.
///
/// Listings are ordered by creation time descending and paged with
/// offset/limit; reads that feed listing cards join the author's display
/// name. The serialised job-description document is stored and returned
/// opaquely.
#[async_trait]
pub trait JobPostingRepository: Send + Sync {
    /// Persist a new posting.
    async fn create(&self, posting: &JobPosting) -> Result<(), JobPostingRepositoryError>;

    /// Fetch a posting with its author's display name.
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<PostingWithAuthor>, JobPostingRepositoryError>;

    /// Fetch a posting without the author join, for ownership checks and
    /// edits.
    async fn find_owned(&self, id: Uuid) -> Result<Option<JobPosting>, JobPostingRepositoryError>;

    /// Page of postings, newest first.
    async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostingWithAuthor>, JobPostingRepositoryError>;

    /// All postings by one author, newest first.
    async fn list_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<JobPosting>, JobPostingRepositoryError>;

    /// Total posting count, for pagination.
    async fn count(&self) -> Result<i64, JobPostingRepositoryError>;

    /// Overwrite an existing posting in place.
    ///
    /// Fails with [`JobPostingRepositoryError::NotFound`] when the posting
    /// no longer exists.
    async fn update(&self, posting: &JobPosting) -> Result<(), JobPostingRepositoryError>;

    /// Remove a posting.
    ///
    /// Fails with [`JobPostingRepositoryError::NotFound`] when the posting
    /// no longer exists.
    async fn delete(&self, id: Uuid) -> Result<(), JobPostingRepositoryError>;
}
