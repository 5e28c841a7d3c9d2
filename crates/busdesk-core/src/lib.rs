//! # busdesk-core
//!
//! Core crate for Rivera BusDesk. Contains configuration schemas, the
//! cache provider trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other BusDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
