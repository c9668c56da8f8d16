// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod page;

pub use counts::ItemCount;
pub use page::{PageNumber, PageSize};
