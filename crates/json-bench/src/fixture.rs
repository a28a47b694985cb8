//! Fixture file catalogue and loaders.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::codec::{Codec, CodecError};
use crate::models::{LogEntry, User};

/// Default directory the fixtures are written to and read from.
pub const DEFAULT_DIR: &str = "testdata";

/// Environment variable overriding [`DEFAULT_DIR`].
pub const ENV_DIR: &str = "FIXTURE_DIR";

/// File name of the JSON Lines log fixture.
pub const LOGS_FILE: &str = "logs.jsonl";

/// Number of log entries in the standard log fixture.
pub const LOG_COUNT: usize = 1000;

/// The user fixture sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureSize {
    Small,
    Medium,
    Large,
}

impl FixtureSize {
    pub const ALL: [FixtureSize; 3] = [FixtureSize::Small, FixtureSize::Medium, FixtureSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureSize::Small => "small",
            FixtureSize::Medium => "medium",
            FixtureSize::Large => "large",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            FixtureSize::Small => "small.json",
            FixtureSize::Medium => "medium.json",
            FixtureSize::Large => "large.json",
        }
    }

    /// Number of users in the standard fixture of this size.
    pub fn user_count(&self) -> usize {
        match self {
            FixtureSize::Small => 1,
            FixtureSize::Medium => 100,
            FixtureSize::Large => 10_000,
        }
    }

    pub fn path_in(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.file_name())
    }
}

/// Fixture directory from a variable lookup, falling back to [`DEFAULT_DIR`].
///
/// An empty value counts as unset.
pub fn fixture_dir_with<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_DIR)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR))
}

/// Fixture directory from the process environment.
pub fn fixture_dir() -> PathBuf {
    fixture_dir_with(|key| std::env::var(key).ok())
}

#[derive(Debug, Error)]
pub enum FixtureLoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {} (line {line}): {source}", path.display())]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON array fixture of users.
pub fn load_users(path: impl AsRef<Path>) -> Result<Vec<User>, FixtureLoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| FixtureLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    decode_users(path, &bytes)
}

fn decode_users(path: &Path, bytes: &[u8]) -> Result<Vec<User>, FixtureLoadError> {
    let users: Vec<User> =
        serde_json::from_slice(bytes).map_err(|source| FixtureLoadError::Decode {
            path: path.to_path_buf(),
            line: source.line(),
            source,
        })?;

    debug!("Loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

/// A user fixture held in memory: the file bytes and their decoded users.
#[derive(Debug, Clone)]
pub struct UserFixture {
    pub size: FixtureSize,
    /// Pretty-printed file contents.
    pub bytes: Vec<u8>,
    pub users: Vec<User>,
}

impl UserFixture {
    /// Length of the users encoded as compact JSON, the form `marshal` produces.
    pub fn compact_len(&self) -> Result<usize, CodecError> {
        Ok(Codec::SerdeJson.marshal(&self.users)?.len())
    }
}

/// Reads the fixture of `size` in `dir`, keeping the raw bytes.
pub fn load_user_fixture(
    dir: impl AsRef<Path>,
    size: FixtureSize,
) -> Result<UserFixture, FixtureLoadError> {
    let path = size.path_in(dir);
    let bytes = std::fs::read(&path).map_err(|source| FixtureLoadError::Io {
        path: path.clone(),
        source,
    })?;
    let users = decode_users(&path, &bytes)?;
    Ok(UserFixture { size, bytes, users })
}

/// Reads a JSON Lines fixture of log entries, one object per line.
///
/// Blank lines are skipped; `line` in a decode error is 1-based.
pub fn load_logs(path: impl AsRef<Path>) -> Result<Vec<LogEntry>, FixtureLoadError> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| FixtureLoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_err)?);
    let mut logs = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        if line.trim().is_empty() {
            continue;
        }
        let entry = serde_json::from_str(&line).map_err(|source| FixtureLoadError::Decode {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        logs.push(entry);
    }

    debug!("Loaded {} log entries from {}", logs.len(), path.display());
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sizes() {
        let counts: Vec<usize> = FixtureSize::ALL.iter().map(|s| s.user_count()).collect();
        assert_eq!(counts, [1, 100, 10_000]);
        assert_eq!(
            FixtureSize::Medium.path_in("testdata"),
            Path::new("testdata/medium.json")
        );
    }

    #[test]
    fn test_fixture_dir_override() {
        let dir = fixture_dir_with(|key| (key == ENV_DIR).then(|| "/data/fixtures".to_string()));
        assert_eq!(dir, PathBuf::from("/data/fixtures"));
    }

    #[test]
    fn test_fixture_dir_defaults() {
        assert_eq!(fixture_dir_with(|_| None), PathBuf::from("testdata"));
        assert_eq!(fixture_dir_with(|_| Some(String::new())), PathBuf::from("testdata"));
    }

    #[test]
    fn test_compact_len_is_marshal_output_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = FixtureSize::Small.path_in(dir.path());
        let raw = r#"{"id":1,"username":"user1","email":"user1@example.com","first_name":"Ana",
            "last_name":"Bruno","active":true,"created_at":"2025-01-01T00:00:00Z",
            "updated_at":"2025-01-02T00:00:00Z","profile":{"bio":"Desenvolvedor apaixonado",
            "avatar":"https://avatar.example.com/1","location":"São Paulo, BR",
            "website":"https://user1.example.com","metadata":{"timezone":"UTC-3"}},"roles":["user"]}"#;
        let users: Vec<serde_json::Value> = vec![serde_json::from_str(raw).unwrap()];
        std::fs::write(&path, serde_json::to_vec_pretty(&users).unwrap()).unwrap();

        let fixture = load_user_fixture(dir.path(), FixtureSize::Small).unwrap();
        assert_eq!(fixture.users.len(), 1);
        assert_eq!(fixture.bytes, std::fs::read(&path).unwrap());

        let compact = fixture.compact_len().unwrap();
        assert_eq!(compact, serde_json::to_vec(&fixture.users).unwrap().len());
        for codec in Codec::ALL {
            assert_eq!(codec.marshal(&fixture.users).unwrap().len(), compact);
        }
        assert!(compact < fixture.bytes.len());
    }

    #[test]
    fn test_load_users_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_users(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, FixtureLoadError::Io { .. }));
    }

    #[test]
    fn test_load_logs_reports_bad_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOGS_FILE);
        let good = r#"{"timestamp":"2025-01-01T00:00:00Z","level":"INFO","service":"api","message":"ok","context":{"user_id":1},"trace_id":"trace_1"}"#;
        std::fs::write(&path, format!("{good}\n{{not json}}\n")).unwrap();

        match load_logs(&path).unwrap_err() {
            FixtureLoadError::Decode { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_logs_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOGS_FILE);
        let line = r#"{"timestamp":"2025-01-01T00:00:00Z","level":"WARN","service":"worker","message":"m","context":{"request_id":"req_3"},"trace_id":"trace_2"}"#;
        std::fs::write(&path, format!("{line}\n\n{line}\n")).unwrap();

        let logs = load_logs(&path).unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].level, "WARN");
    }
}
