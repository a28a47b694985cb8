//! The JSON codecs under measurement.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("sonic-rs error: {0}")]
    SonicRs(#[from] sonic_rs::Error),
}

/// A JSON encoder/decoder implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    SerdeJson,
    SonicRs,
}

impl Codec {
    /// Every codec, in report order.
    pub const ALL: [Codec; 2] = [Codec::SerdeJson, Codec::SonicRs];

    /// Name used for benchmark ids and report rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            Codec::SerdeJson => "serde_json",
            Codec::SonicRs => "sonic_rs",
        }
    }

    /// Encodes `value` as compact JSON.
    pub fn marshal<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        Ok(match self {
            Codec::SerdeJson => serde_json::to_vec(value)?,
            Codec::SonicRs => sonic_rs::to_vec(value)?,
        })
    }

    /// Decodes `bytes` into `T`, failing on malformed or mismatched input.
    pub fn unmarshal<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        Ok(match self {
            Codec::SerdeJson => serde_json::from_slice(bytes)?,
            Codec::SonicRs => sonic_rs::from_slice(bytes)?,
        })
    }
}
