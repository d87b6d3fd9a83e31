//! Pagination envelope and request normalization
//!
//! Repositories return one page of an ordered dataset at a time. The
//! `PageRequest` carries the caller's 1-based page number and page size and
//! normalizes out-of-range values; the `Page` envelope carries the items for
//! that page together with the total count of matching records.

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on page size, keeps a single response bounded
pub const MAX_PAGE_SIZE: u32 = 100;

/// A normalized pagination request
///
/// `page` is 1-based. Construction through [`PageRequest::new`] normalizes
/// non-positive pages to 1 and clamps the size into `1..=MAX_PAGE_SIZE`,
/// so a `PageRequest` value is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Creates a request, normalizing out-of-range values
    ///
    /// Pages below 1 become page 1. Sizes below 1 fall back to
    /// [`DEFAULT_PAGE_SIZE`]; sizes above [`MAX_PAGE_SIZE`] are clamped.
    pub fn new(page: i64, size: i64) -> Self {
        let page = if page < 1 { 1 } else { page.min(u32::MAX as i64) as u32 };
        let size = if size < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            (size.min(MAX_PAGE_SIZE as i64)) as u32
        };
        Self { page, size }
    }

    /// The 1-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// The page size
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Zero-based offset of the first item on this page
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.size as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of an ordered dataset
///
/// Invariants: `items.len() <= page_size`, and `items` is empty when the
/// requested page lies beyond the end of the dataset. Ordering within a page
/// follows the repository's total order and is stable across repeated calls
/// for an unchanged dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page, in repository order
    pub items: Vec<T>,
    /// The 1-based page number that was requested
    pub page: u32,
    /// The page size that was requested
    pub page_size: u32,
    /// Total number of matching items across all pages
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a page for the given request
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page(),
            page_size: request.size(),
            total,
        }
    }

    /// An empty page for the given request
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Number of pages needed to cover `total` items
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size as u64)
    }

    /// Maps the items of this page, preserving the envelope
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        }
    }
}

/// Computes the slice of an in-memory ordered dataset for a request
///
/// Shared by adapters that hold the full dataset in memory. Returns the
/// items at `request.offset()` of length up to `request.size()`.
pub fn slice_page<T: Clone>(ordered: &[T], request: PageRequest) -> Page<T> {
    let total = ordered.len() as u64;
    let offset = request.offset().min(total) as usize;
    let end = (offset + request.size() as usize).min(ordered.len());
    Page::new(ordered[offset..end].to_vec(), request, total)
}
