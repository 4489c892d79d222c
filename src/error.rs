//! Defines the custom error type for the `proof-gauge` crate.

use thiserror::Error;

/// The main error type for the `proof-gauge` crate.
///
/// Everything fallible happens before or during summary construction; the
/// scorer and the presenters are total over their inputs.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown system '{0}'")]
    UnknownSystem(String),

    #[error("serialization failed: {0}")]
    SerializeError(#[from] serde_json::Error),
}
