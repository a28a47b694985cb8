//! Fluent builder APIs for fixture sets.
//!
//! The [`FixtureSetBuilder`] plans which fixture files to produce, generates
//! their contents from one randomness source and writes them to disk.

mod fixtures;

pub use fixtures::{FileReport, FixtureReport, FixtureSet, FixtureSetBuilder};
