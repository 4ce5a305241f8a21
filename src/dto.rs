use crate::error::HttpError;

pub type HttpResult<T> = Result<T, HttpError>;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
}

/// Integers that fail to parse count as absent.
fn lenient_int(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.parse::<i64>().ok())
}

impl Pagination {
    /// `page` below 1 becomes 1. `page_size` outside `1..=100` becomes 10,
    /// it is not clamped.
    pub fn normalize(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = lenient_int(page)
            .filter(|page| *page >= 1)
            .unwrap_or(DEFAULT_PAGE);
        let page_size = lenient_int(page_size)
            .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { page, page_size }
    }
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_one() {
        for page in [Some("0"), Some("-1"), None, Some("abc"), Some("")] {
            assert_eq!(Pagination::normalize(page, None).page, 1);
        }
        assert_eq!(Pagination::normalize(Some("7"), None).page, 7);
        assert_eq!(Pagination::normalize(Some("100000"), None).page, 100000);
    }

    #[test]
    fn page_size_outside_range_falls_back_to_ten() {
        for size in [Some("0"), Some("101"), Some("-5"), None, Some("ten")] {
            assert_eq!(Pagination::normalize(None, size).page_size, 10);
        }
    }

    #[test]
    fn page_size_inside_range_is_kept() {
        assert_eq!(Pagination::normalize(None, Some("100")).page_size, 100);
        assert_eq!(Pagination::normalize(None, Some("50")).page_size, 50);
        assert_eq!(Pagination::normalize(None, Some("1")).page_size, 1);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(Pagination::normalize(Some("1"), Some("2")).offset(), 0);
        assert_eq!(Pagination::normalize(Some("3"), Some("20")).offset(), 40);
    }
}
