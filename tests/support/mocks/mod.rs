// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod post_repo;
pub mod tag_repo;
pub mod time;
pub mod util;

pub use post_repo::InMemoryPostRepo;
pub use tag_repo::{InMemoryTagRepo, RacingTagRepo};
pub use time::fixed_now;
pub use util::FixedClock;
