//! Data model and codec harness for the JSON fixture benchmarks.
//!
//! The fixtures written by the `test-data` crate deserialize into
//! [`models::User`] and [`models::LogEntry`]; the benchmarks in
//! `benches/codec.rs` round-trip them through every [`codec::Codec`].

pub mod codec;
pub mod fixture;
pub mod models;

pub use codec::{Codec, CodecError};
pub use fixture::{
    FixtureLoadError, FixtureSize, LOG_COUNT, LOGS_FILE, UserFixture, fixture_dir, load_logs,
    load_user_fixture, load_users,
};
pub use models::{ContextValue, LogEntry, Profile, User};
