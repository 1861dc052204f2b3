//! Page-window calculation for paged job listings.
//!
//! Given a total item count, a fixed page size, and the requested page, the
//! window derives the ordered sequence of page markers a listing renders:
//! literal page numbers interleaved with ellipsis markers, clamped to a small
//! window of five numbers around the current page with the first and last
//! pages always present.
//!
//! The calculation is a pure function of its inputs. Out-of-range pages are
//! not an error here; callers render a "no results" state for them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum count of literal page numbers shown without any ellipsis.
pub const WINDOW: u64 = 5;

/// A single slot in the rendered pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageMarker {
    /// A literal, navigable page number (1-based).
    Page { number: u64 },
    /// Placeholder indicating skipped page numbers.
    Ellipsis,
}

impl PageMarker {
    /// Shorthand constructor for a literal page number.
    #[must_use]
    pub const fn page(number: u64) -> Self {
        Self::Page { number }
    }
}

/// Errors raised when deriving a page window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A page size of zero cannot partition any result set.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Number of pages needed to hold `total_count` items at `page_size` per page.
///
/// # Errors
///
/// Returns [`PaginationError::ZeroPageSize`] when `page_size` is zero.
///
/// # Examples
/// ```
/// assert_eq!(pagination::total_pages(47, 10), Ok(5));
/// assert_eq!(pagination::total_pages(0, 10), Ok(0));
/// ```
pub fn total_pages(total_count: u64, page_size: u64) -> Result<u64, PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::ZeroPageSize);
    }
    Ok(total_count.div_ceil(page_size))
}

/// Derive the ordered marker sequence for a listing page.
///
/// The shape depends on where `current_page` sits relative to the page count:
/// small result sets are listed in full, pages near either edge keep the edge
/// run contiguous, and interior pages show one neighbour on each side between
/// two ellipses. The first and last page numbers are always present once the
/// set spans more than [`WINDOW`] pages.
///
/// `current_page` is not validated against the page count; a request past the
/// end simply produces the trailing-edge window.
///
/// # Errors
///
/// Returns [`PaginationError::ZeroPageSize`] when `page_size` is zero.
pub fn window(
    total_count: u64,
    page_size: u64,
    current_page: u64,
) -> Result<Vec<PageMarker>, PaginationError> {
    let last = total_pages(total_count, page_size)?;

    if last <= WINDOW {
        return Ok((1..=last).map(PageMarker::page).collect());
    }

    let markers = if current_page <= 2 {
        vec![
            PageMarker::page(1),
            PageMarker::page(2),
            PageMarker::page(3),
            PageMarker::Ellipsis,
            PageMarker::page(last),
        ]
    } else if current_page == 3 {
        vec![
            PageMarker::page(1),
            PageMarker::page(2),
            PageMarker::page(3),
            PageMarker::page(4),
            PageMarker::Ellipsis,
            PageMarker::page(last),
        ]
    } else if current_page < last - 2 {
        vec![
            PageMarker::page(1),
            PageMarker::Ellipsis,
            PageMarker::page(current_page - 1),
            PageMarker::page(current_page),
            PageMarker::page(current_page + 1),
            PageMarker::Ellipsis,
            PageMarker::page(last),
        ]
    } else if current_page == last - 2 {
        vec![
            PageMarker::page(1),
            PageMarker::Ellipsis,
            PageMarker::page(last - 3),
            PageMarker::page(last - 2),
            PageMarker::page(last - 1),
            PageMarker::page(last),
        ]
    } else {
        // current_page >= last - 1, including out-of-range requests.
        vec![
            PageMarker::page(1),
            PageMarker::Ellipsis,
            PageMarker::page(last - 2),
            PageMarker::page(last - 1),
            PageMarker::page(last),
        ]
    };

    Ok(markers)
}
