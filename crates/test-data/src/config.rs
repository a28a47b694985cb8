//! Configuration types for fixture generation.

use std::path::PathBuf;

use json_bench::FixtureSize;
use json_bench::fixture::{DEFAULT_DIR, LOG_COUNT};
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`FixtureConfig::output_dir`].
pub const ENV_OUTPUT_DIR: &str = json_bench::fixture::ENV_DIR;

/// Environment variable overriding [`FixtureConfig::seed`].
pub const ENV_SEED: &str = "FIXTURE_SEED";

/// Configuration for a fixture generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Directory the fixture files are written to.
    pub output_dir: PathBuf,

    /// Random seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Users in `small.json`.
    pub small_users: usize,

    /// Users in `medium.json`.
    pub medium_users: usize,

    /// Users in `large.json`.
    pub large_users: usize,

    /// Entries in `logs.jsonl`.
    pub log_count: usize,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_DIR),
            seed: None,
            small_users: FixtureSize::Small.user_count(),
            medium_users: FixtureSize::Medium.user_count(),
            large_users: FixtureSize::Large.user_count(),
            log_count: LOG_COUNT,
        }
    }
}

impl FixtureConfig {
    /// Number of users configured for a fixture size.
    pub fn users_for(&self, size: FixtureSize) -> usize {
        match size {
            FixtureSize::Small => self.small_users,
            FixtureSize::Medium => self.medium_users,
            FixtureSize::Large => self.large_users,
        }
    }

    /// Applies overrides from a variable lookup (normally `std::env::var`).
    ///
    /// An unparsable seed is ignored and leaves the seed unset.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|d| !d.is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(seed) = lookup(ENV_SEED) {
            match seed.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => tracing::warn!("Ignoring invalid {ENV_SEED} value {seed:?}"),
            }
        }
        self
    }

    /// Default configuration with process environment overrides.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }
}
