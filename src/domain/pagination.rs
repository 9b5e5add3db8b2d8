// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Page window over a counted result set. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u32,
    pub offset: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl Pagination {
    /// Clamps `requested_page` into `[1, max(1, total_pages)]`.
    ///
    /// Fails only when `limit` is zero.
    pub fn paginate(requested_page: i64, total_items: u64, limit: u32) -> DomainResult<Self> {
        if limit == 0 {
            return Err(DomainError::InvalidArgument(
                "pagination limit must be at least 1".into(),
            ));
        }

        let total_pages = total_items.div_ceil(u64::from(limit));
        let requested = u64::try_from(requested_page.max(1)).unwrap_or(1);
        let page = requested.min(total_pages.max(1));

        Ok(Self {
            page,
            limit,
            offset: (page - 1) * u64::from(limit),
            total_items,
            total_pages,
        })
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Pagination with a configured fallback page size.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    default_limit: u32,
}

impl Paginator {
    pub const DEFAULT_LIMIT: u32 = 10;

    pub fn new(default_limit: u32) -> DomainResult<Self> {
        if default_limit == 0 {
            return Err(DomainError::InvalidArgument(
                "default page size must be at least 1".into(),
            ));
        }
        Ok(Self { default_limit })
    }

    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }

    pub fn paginate(
        &self,
        requested_page: i64,
        total_items: u64,
        limit: Option<u32>,
    ) -> DomainResult<Pagination> {
        Pagination::paginate(
            requested_page,
            total_items,
            limit.unwrap_or(self.default_limit),
        )
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            default_limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Reads a raw `page` query value the lenient way browsers and links send it:
/// leading sign and digits count, anything else falls back to page 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim) else {
        return 1;
    };

    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = match &digits[..end] {
        "" => 0,
        number => number.parse::<i64>().unwrap_or(i64::MAX),
    };
    let value = if negative { -value } else { value };

    value.max(1)
}
