//! Test data generation for json-bench.
//!
//! This crate generates the synthetic users and log entries the codec
//! benchmarks run against, and writes them as JSON fixture files.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let builder = FixtureSetBuilder::standard().with_seed(42);
//! let report = builder.write(&mut builder.rng())?;
//! ```
//!
//! Generated files:
//! - `small.json`, `medium.json`, `large.json`: pretty-printed arrays of
//!   1, 100 and 10 000 users
//! - `logs.jsonl`: 1000 log entries, one compact object per line

pub mod builders;
pub mod config;
pub mod generators;
pub mod writer;

// Re-export the fixture model from the json-bench crate
pub use json_bench::{ContextValue, FixtureSize, LogEntry, Profile, User};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{FileReport, FixtureReport, FixtureSet, FixtureSetBuilder};
    pub use crate::config::FixtureConfig;
    pub use crate::generators::{LogGenerator, UserGenerator, generate_logs, generate_users};
    pub use crate::writer::{FixtureError, ensure_output_dir, write_json_array, write_json_lines};
    pub use crate::{ContextValue, FixtureSize, LogEntry, Profile, User};
}
