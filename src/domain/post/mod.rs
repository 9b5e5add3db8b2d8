pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Post;
pub use repository::{PostListing, PostReadRepository, PostScope};
pub use value_objects::{PostId, PostSlug, PostTitle};
