pub mod pagination;
pub mod posts;
pub mod tags;

pub use pagination::{Page, PaginationDto};
pub use posts::{PostSummaryDto, SearchResultsDto, TaggedPostsDto};
pub use tags::TagDto;
