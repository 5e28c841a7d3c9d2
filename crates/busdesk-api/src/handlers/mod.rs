//! HTTP request handlers.

pub mod health;
pub mod navigation;
pub mod permission;
