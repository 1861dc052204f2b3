//! Domain model for the job board.
//!
//! Purpose: strongly typed postings, the rich-text description document,
//! validation, and presentation helpers, independent of HTTP and storage.
//! Persistence is reached only through the [`ports`] traits.
//!
//! Public surface:
//! - `posting` — the job posting aggregate, controlled vocabularies, and
//!   form validation.
//! - `document` — the rich-text document tree, HTML rendering, link
//!   sanitisation, and the editor toolbar state machine.
//! - `presentation` — listing-card formatting (relative posting age,
//!   salary ranges).
//! - `ports` — repository trait and error types implemented by adapters.

pub mod document;
pub mod ports;
pub mod posting;
pub mod presentation;

pub use self::document::{Document, DocumentError, Node};
pub use self::ports::{JobPostingRepository, JobPostingRepositoryError};
pub use self::posting::{
    ApplyChannel, AuthorName, FieldErrors, JobPosting, PostingForm, PostingWithAuthor,
};
