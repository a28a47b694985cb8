//! JSON array and JSON Lines fixture writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Buffer size for fixture writes.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create file {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Write(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Creates `dir` and any missing parents, world-readable on unix (0755).
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> Result<(), FixtureError> {
    let dir = dir.as_ref();
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(dir).map_err(|source| FixtureError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn create(path: &Path) -> Result<BufWriter<File>, FixtureError> {
    let file = File::create(path).map_err(|source| FixtureError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))
}

/// Writes `entities` as one pretty-printed JSON array (2-space indent).
///
/// The file is created or truncated and ends with a newline. Returns the
/// number of entities written.
pub fn write_json_array<T: Serialize>(
    path: impl AsRef<Path>,
    entities: &[T],
) -> Result<usize, FixtureError> {
    let path = path.as_ref();
    let mut writer = create(path)?;

    serde_json::to_writer_pretty(&mut writer, entities)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!("Wrote {} entities to {}", entities.len(), path.display());
    Ok(entities.len())
}

/// Writes each entity as a compact JSON object on its own line.
///
/// Stops at the first failure; lines already written stay in the file.
pub fn write_json_lines<'a, T, I>(path: impl AsRef<Path>, entities: I) -> Result<usize, FixtureError>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let path = path.as_ref();
    let mut writer = create(path)?;
    let mut written = 0;

    for entity in entities {
        serde_json::to_writer(&mut writer, entity)?;
        writer.write_all(b"\n")?;
        written += 1;

        if written % 10_000 == 0 {
            debug!("Written {} lines", written);
        }
    }

    writer.flush()?;

    info!("Wrote {} lines to {}", written, path.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Error as _, Serializer};

    #[derive(Serialize)]
    struct Row {
        id: u32,
        name: &'static str,
    }

    /// Fails to serialize values of 2 and above.
    struct Faulty(u32);

    impl Serialize for Faulty {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if self.0 >= 2 {
                return Err(S::Error::custom("refusing to serialize"));
            }
            serializer.serialize_u32(self.0)
        }
    }

    #[test]
    fn test_json_array_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        let rows = [Row { id: 1, name: "a" }, Row { id: 2, name: "b" }];

        assert_eq!(write_json_array(&path, &rows).unwrap(), 2);

        let text = std::fs::read_to_string(&path).unwrap();
        let expected = "[\n  {\n    \"id\": 1,\n    \"name\": \"a\"\n  },\n  {\n    \"id\": 2,\n    \"name\": \"b\"\n  }\n]\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_array_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        let rows: Vec<Row> = Vec::new();
        write_json_array(&path, &rows).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_json_lines_one_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.jsonl");
        let rows = vec![Row { id: 1, name: "a" }, Row { id: 2, name: "b" }];

        assert_eq!(write_json_lines(&path, &rows).unwrap(), 2);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\"id\":1,\"name\":\"a\"}\n{\"id\":2,\"name\":\"b\"}\n");
    }

    #[test]
    fn test_missing_parent_is_create_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("rows.json");
        let rows: Vec<Row> = Vec::new();

        let err = write_json_array(&path, &rows).unwrap_err();
        assert!(matches!(err, FixtureError::CreateFile { .. }));

        let err = write_json_lines(&path, &rows).unwrap_err();
        assert!(matches!(err, FixtureError::CreateFile { .. }));
    }

    #[test]
    fn test_json_lines_keeps_partial_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faulty.jsonl");
        let items = [Faulty(0), Faulty(1), Faulty(2), Faulty(3)];

        let err = write_json_lines(&path, &items).unwrap_err();
        assert!(matches!(err, FixtureError::Serialize(_)));

        // BufWriter is flushed on drop, so earlier lines reach the file.
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "0\n1\n");
    }

    #[test]
    fn test_array_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faulty.json");

        let err = write_json_array(&path, &[Faulty(5)]).unwrap_err();
        assert!(matches!(err, FixtureError::Serialize(_)));
    }

    #[test]
    fn test_ensure_output_dir_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        ensure_output_dir(&nested).unwrap();
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&nested).unwrap().permissions().mode();
            // umask may clear bits but never adds any.
            assert_eq!(mode & 0o777 & !0o755, 0);
        }
    }

    #[test]
    fn test_ensure_output_dir_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain");
        std::fs::write(&file, "x").unwrap();

        let err = ensure_output_dir(&file).unwrap_err();
        assert!(matches!(err, FixtureError::CreateDir { .. }));
    }
}
