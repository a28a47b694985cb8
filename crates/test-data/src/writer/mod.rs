//! Fixture file output.
//!
//! Generated batches are written either as a single pretty-printed JSON
//! array ([`write_json_array`]) or as JSON Lines ([`write_json_lines`]).

mod json;

pub use json::{FixtureError, ensure_output_dir, write_json_array, write_json_lines};
