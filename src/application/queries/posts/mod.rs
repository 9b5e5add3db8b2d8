mod by_tag;
mod list;
mod search;
mod service;

pub use by_tag::ListPostsByTagQuery;
pub use list::ListPostsQuery;
pub use search::SearchPostsQuery;
pub use service::PostQueryService;
