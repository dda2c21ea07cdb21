//! # Pagination
//!
//! Page arithmetic shared by every paged listing.
//!
//! ```text
//! total = 125, per_page = 50
//!
//!   page 1 ─► offset   0 ─► 50 items
//!   page 2 ─► offset  50 ─► 50 items
//!   page 3 ─► offset 100 ─► 25 items
//!   page 4 ─► offset 150 ─►  0 items   (total still 125, total_pages 3)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{validate_page, ValidationResult};
use crate::DEFAULT_PER_PAGE;

/// A validated page request: `page >= 1`, `per_page` in `[1, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Creates a page request, rejecting out-of-range values.
    pub fn new(page: u32, per_page: u32) -> ValidationResult<Self> {
        validate_page(page, per_page)?;
        Ok(PageRequest { page, per_page })
    }

    /// First page with the given size.
    pub fn first(per_page: u32) -> ValidationResult<Self> {
        PageRequest::new(1, per_page)
    }

    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[inline]
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Rows to skip: `(page - 1) * per_page`.
    #[inline]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// Rows to fetch.
    #[inline]
    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }

    /// `ceil(total / per_page)`, zero for an empty result.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.per_page))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

// Payloads go through the same range checks as `new`.
impl<'de> Deserialize<'de> for PageRequest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default = "first_page")]
            page: u32,
            #[serde(default = "default_per_page")]
            per_page: u32,
        }

        fn first_page() -> u32 {
            1
        }

        fn default_per_page() -> u32 {
            DEFAULT_PER_PAGE
        }

        let raw = Raw::deserialize(deserializer)?;
        PageRequest::new(raw.page, raw.per_page)
            .map_err(|e: ValidationError| serde::de::Error::custom(e))
    }
}

/// A bounded slice of a larger result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,

    /// Number of matching records, independent of paging.
    pub total: u64,

    pub page: u32,
    pub per_page: u32,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Assembles a page from the fetched slice and the total match count.
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Page {
            items,
            total,
            page: request.page(),
            per_page: request.per_page(),
            total_pages: request.total_pages(total),
        }
    }

    /// True when this page carries no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when a later page could hold records.
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 50).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(3, 50).unwrap().offset(), 100);
        assert_eq!(PageRequest::new(4, 100).unwrap().offset(), 300);
    }

    #[test]
    fn test_total_pages() {
        let request = PageRequest::new(1, 50).unwrap();
        assert_eq!(request.total_pages(0), 0);
        assert_eq!(request.total_pages(1), 1);
        assert_eq!(request.total_pages(50), 1);
        assert_eq!(request.total_pages(51), 2);
        assert_eq!(request.total_pages(125), 3);
    }

    #[test]
    fn test_first_page() {
        let request = PageRequest::first(20).unwrap();
        assert_eq!(request.page(), 1);
        assert_eq!(request.per_page(), 20);
        assert_eq!(request.offset(), 0);
        assert!(PageRequest::first(0).is_err());
    }

    #[test]
    fn test_bounds() {
        assert!(PageRequest::new(0, 50).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, 101).is_err());
        assert!(PageRequest::new(1, 100).is_ok());
        assert!(PageRequest::new(u32::MAX, 1).is_ok());
    }

    #[test]
    fn test_page_past_end_keeps_totals() {
        let page: Page<u8> = Page::new(Vec::new(), 125, PageRequest::new(4, 50).unwrap());
        assert!(page.is_empty());
        assert_eq!(page.total, 125);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next());
    }

    #[test]
    fn test_deserialize_defaults_and_bounds() {
        let request: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, PageRequest::default());

        let result: Result<PageRequest, _> = serde_json::from_str(r#"{"per_page": 500}"#);
        assert!(result.is_err());
    }
}
