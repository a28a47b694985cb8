//! Fluent builder for fixture sets.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use json_bench::{FixtureSize, LOGS_FILE, LogEntry, User};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time::OffsetDateTime;
use tracing::info;

use crate::config::FixtureConfig;
use crate::generators::{LogGenerator, UserGenerator};
use crate::writer::{FixtureError, ensure_output_dir, write_json_array, write_json_lines};

/// Generated fixture data, not yet written.
#[derive(Debug)]
pub struct FixtureSet {
    /// User batches in plan order.
    pub users: Vec<(FixtureSize, Vec<User>)>,
    /// Log entries, empty if no log file was planned.
    pub logs: Vec<LogEntry>,
}

/// Outcome of writing one fixture file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    /// Number of users or log entries in the file.
    pub entities: usize,
    pub file_size_bytes: u64,
    /// Generation plus write time.
    pub duration: Duration,
}

/// Outcome of writing a fixture set.
#[derive(Debug, Clone, Default)]
pub struct FixtureReport {
    pub files: Vec<FileReport>,
    pub total_duration: Duration,
}

impl FixtureReport {
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.file_size_bytes).sum()
    }

    pub fn total_entities(&self) -> usize {
        self.files.iter().map(|f| f.entities).sum()
    }
}

/// Builder for generating and writing fixture files.
///
/// # Example
///
/// ```rust,ignore
/// let mut rng = StdRng::seed_from_u64(7);
/// let report = FixtureSetBuilder::new()
///     .with_output_dir("testdata")
///     .with_users(FixtureSize::Medium, 100)
///     .with_logs(1000)
///     .write(&mut rng)?;
/// ```
pub struct FixtureSetBuilder {
    output_dir: PathBuf,
    users: Vec<(FixtureSize, usize)>,
    log_count: Option<usize>,
    seed: Option<u64>,
    now: Option<OffsetDateTime>,
}

impl Default for FixtureSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureSetBuilder {
    /// Creates a builder with an empty plan writing to `testdata`.
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from(json_bench::fixture::DEFAULT_DIR),
            users: Vec::new(),
            log_count: None,
            seed: None,
            now: None,
        }
    }

    /// The four standard fixtures: small, medium and large users, then logs.
    pub fn standard() -> Self {
        Self::from_config(&FixtureConfig::default())
    }

    /// Plans the four standard files with the sizes from `config`.
    pub fn from_config(config: &FixtureConfig) -> Self {
        let mut builder = Self::new().with_output_dir(&config.output_dir);
        for size in FixtureSize::ALL {
            builder = builder.with_users(size, config.users_for(size));
        }
        builder.seed = config.seed;
        builder.with_logs(config.log_count)
    }

    /// Sets the directory fixture files are written to.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Plans a user array file of the given size class with `count` users.
    ///
    /// Planning the same size twice replaces the earlier count.
    pub fn with_users(mut self, size: FixtureSize, count: usize) -> Self {
        match self.users.iter_mut().find(|(s, _)| *s == size) {
            Some(entry) => entry.1 = count,
            None => self.users.push((size, count)),
        }
        self
    }

    /// Plans the JSON Lines log file with `count` entries.
    pub fn with_logs(mut self, count: usize) -> Self {
        self.log_count = Some(count);
        self
    }

    /// Sets the random seed used by [`FixtureSetBuilder::rng`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pins the generation time instead of reading the clock.
    pub fn with_now(mut self, now: OffsetDateTime) -> Self {
        self.now = Some(now);
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns an rng seeded from the configured seed, or from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn now(&self) -> OffsetDateTime {
        self.now.unwrap_or_else(OffsetDateTime::now_utc)
    }

    /// Generates every planned batch without touching the filesystem.
    pub fn build_data(&self, rng: &mut impl Rng) -> FixtureSet {
        let now = self.now();
        let user_gen = UserGenerator::at(now);

        let users = self
            .users
            .iter()
            .map(|&(size, count)| (size, user_gen.generate_batch(count, rng)))
            .collect();

        let logs = match self.log_count {
            Some(count) => LogGenerator::at(now).generate_batch(count, rng),
            None => Vec::new(),
        };

        FixtureSet { users, logs }
    }

    /// Generates and writes every planned file, in plan order.
    ///
    /// The first failure aborts the run; files already written are kept.
    pub fn write(&self, rng: &mut impl Rng) -> Result<FixtureReport, FixtureError> {
        let start = Instant::now();
        let now = self.now();
        let mut report = FixtureReport::default();

        ensure_output_dir(&self.output_dir)?;

        let user_gen = UserGenerator::at(now);
        for &(size, count) in &self.users {
            let path = size.path_in(&self.output_dir);
            info!("Generating {} ({} users)...", path.display(), count);

            let step = Instant::now();
            let users = user_gen.generate_batch(count, rng);
            let entities = write_json_array(&path, &users)?;
            report.files.push(file_report(path, entities, step.elapsed())?);
        }

        if let Some(count) = self.log_count {
            let path = self.output_dir.join(LOGS_FILE);
            info!("Generating {} ({} log entries)...", path.display(), count);

            let step = Instant::now();
            let logs = LogGenerator::at(now).generate_batch(count, rng);
            let entities = write_json_lines(&path, &logs)?;
            report.files.push(file_report(path, entities, step.elapsed())?);
        }

        report.total_duration = start.elapsed();
        Ok(report)
    }
}

fn file_report(
    path: PathBuf,
    entities: usize,
    duration: Duration,
) -> Result<FileReport, FixtureError> {
    let file_size_bytes = std::fs::metadata(&path)?.len();
    info!(
        "  {} written: {} entities, {} bytes in {:?}",
        path.display(),
        entities,
        file_size_bytes,
        duration
    );
    Ok(FileReport {
        path,
        entities,
        file_size_bytes,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_build_data() {
        let builder = FixtureSetBuilder::new()
            .with_users(FixtureSize::Small, 1)
            .with_users(FixtureSize::Medium, 5)
            .with_logs(7)
            .with_seed(3);
        let mut rng = builder.rng();

        let set = builder.build_data(&mut rng);
        assert_eq!(set.users.len(), 2);
        assert_eq!(set.users[0].0, FixtureSize::Small);
        assert_eq!(set.users[0].1.len(), 1);
        assert_eq!(set.users[1].1.len(), 5);
        assert_eq!(set.logs.len(), 7);
    }

    #[test]
    fn test_preset_standard() {
        let builder = FixtureSetBuilder::standard();
        assert_eq!(builder.output_dir(), Path::new("testdata"));
        assert_eq!(
            builder.users,
            vec![
                (FixtureSize::Small, 1),
                (FixtureSize::Medium, 100),
                (FixtureSize::Large, 10_000),
            ]
        );
        assert_eq!(builder.log_count, Some(1000));
    }

    #[test]
    fn test_with_users_replaces_count() {
        let builder = FixtureSetBuilder::new()
            .with_users(FixtureSize::Large, 10)
            .with_users(FixtureSize::Large, 20);
        assert_eq!(builder.users, vec![(FixtureSize::Large, 20)]);
    }

    #[test]
    fn test_seeded_builds_are_identical() {
        let builder = FixtureSetBuilder::new()
            .with_users(FixtureSize::Medium, 20)
            .with_logs(20)
            .with_seed(1234)
            .with_now(datetime!(2025-02-02 02:02:02 UTC));

        let a = builder.build_data(&mut builder.rng());
        let b = builder.build_data(&mut builder.rng());
        assert_eq!(a.users, b.users);
        assert_eq!(a.logs, b.logs);
    }

    #[test]
    fn test_write_reports_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("fixtures");
        let builder = FixtureSetBuilder::new()
            .with_output_dir(&out)
            .with_users(FixtureSize::Small, 2)
            .with_logs(3)
            .with_seed(9);

        let report = builder.write(&mut builder.rng()).unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.files[0].path, out.join("small.json"));
        assert_eq!(report.files[1].path, out.join("logs.jsonl"));
        assert_eq!(report.total_entities(), 5);
        assert!(report.total_bytes() > 0);
    }
}
