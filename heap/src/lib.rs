pub mod bounded;
pub mod config;
pub mod error;
pub mod predicate;
pub mod raw;

pub use bounded::BoundedTopKHeap;
pub use config::HeapConfig;
pub use error::HeapError;
pub use predicate::{Order, Precedes, by_key_gt, by_key_lt, cmp_gt, cmp_lt};
pub use raw::RawHeap;

#[cfg(test)]
mod tests;
