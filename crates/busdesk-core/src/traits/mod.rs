//! Core traits defined in `busdesk-core` and implemented by other crates.

pub mod cache;

pub use cache::CacheProvider;
