pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewTag, Tag, TagRef};
pub use repository::{DefaultTagFactory, TagFactory, TagLookup, TagRepository};
pub use services::{TagNormalizer, parse_tag_input};
pub use value_objects::{TagId, TagName, TagSlug};
