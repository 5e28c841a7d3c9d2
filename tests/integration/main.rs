//! Router-level integration tests.
//!
//! The full HTTP surface is exercised through `tower::ServiceExt::oneshot`
//! against an in-memory permission store and cache, so no PostgreSQL or
//! Redis instance is needed.

mod helpers;

mod health_test;
mod navigation_test;
mod permission_test;
