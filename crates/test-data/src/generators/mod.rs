//! Entity generators for test data.
//!
//! This module provides generators for the fixture entities:
//! - [`fields`]: random primitive values drawn from fixed pools
//! - [`UserGenerator`]: users with profiles and distinct role sets
//! - [`LogGenerator`]: structured log entries with request context
//!
//! Every generator takes an explicit `rand::Rng`, so a seeded rng gives
//! reproducible output.

pub mod fields;
pub mod log;
pub mod user;

pub use log::{LogGenerator, generate_logs};
pub use user::{UserGenerator, generate_users};
