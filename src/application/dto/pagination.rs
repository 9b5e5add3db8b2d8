use crate::domain::pagination::Pagination;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDto {
    pub page: u64,
    pub limit: u32,
    pub offset: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl From<Pagination> for PaginationDto {
    fn from(pagination: Pagination) -> Self {
        Self {
            page: pagination.page,
            limit: pagination.limit,
            offset: pagination.offset,
            total_items: pagination.total_items,
            total_pages: pagination.total_pages,
            has_previous: pagination.has_previous(),
            has_next: pagination.has_next(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PaginationDto,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self {
            items,
            pagination: pagination.into(),
        }
    }
}
