//! Structured log entry generation.

use json_bench::LogEntry;
use rand::Rng;
use time::OffsetDateTime;

use super::fields;

/// Generates log entries timestamped within the hour before `now`.
pub struct LogGenerator {
    now: OffsetDateTime,
}

impl LogGenerator {
    pub fn new() -> Self {
        Self::at(OffsetDateTime::now_utc())
    }

    pub fn at(now: OffsetDateTime) -> Self {
        Self { now }
    }

    /// Generates a single log entry.
    pub fn generate(&self, rng: &mut impl Rng) -> LogEntry {
        LogEntry {
            timestamp: fields::random_log_timestamp(self.now, rng),
            level: fields::random_level(rng),
            service: fields::random_service(rng),
            message: fields::random_log_message(rng),
            context: fields::random_context(rng),
            trace_id: fields::random_trace_id(rng),
        }
    }

    /// Generates `count` entries. Timestamps are not sorted.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<LogEntry> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for LogGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates `count` log entries relative to the current time.
pub fn generate_logs(count: usize, rng: &mut impl Rng) -> Vec<LogEntry> {
    LogGenerator::new().generate_batch(count, rng)
}
