//! JSON codec for state snapshots.
//!
//! Server-rendered state travels as a JSON string and is decoded on the
//! client side by [`crate::hydration::use_hydrate`]. There is no schema
//! versioning: any JSON that fits the target type is accepted.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to serialize state: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to deserialize state: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

pub fn serialize<S: Serialize>(state: &S) -> Result<String, CodecError> {
    serde_json::to_string(state).map_err(|source| CodecError::Encode { source })
}

pub fn deserialize<S: DeserializeOwned>(encoded: &str) -> Result<S, CodecError> {
    serde_json::from_str(encoded).map_err(|source| CodecError::Decode { source })
}
