//! Per-invocation summary records and their metadata digest.
//!
//! A [`Summary`] flattens the chosen catalog entry together with the input
//! rate, the derived quality index, and a wall-clock timestamp, then seals
//! those fields under a SHA-256 digest. The digest covers every field except
//! `hash` itself, serialized as a canonical key-sorted JSON object, so it is
//! deterministic for a given set of field values. The timestamp is part of
//! the hashed payload, which makes the digest unique per invocation even for
//! identical inputs.

use crate::catalog::ProofSystem;
use crate::error::Error;
use crate::score;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// The flat output record of one invocation. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub key: String,
    pub name: String,
    pub family: String,
    pub description: String,
    pub proving_complexity: f64,
    pub verification_cost: f64,
    pub privacy_strength: f64,
    pub soundness_guarantee: f64,
    #[serde(rename = "txRate")]
    pub tx_rate: i64,
    #[serde(rename = "qualityIndex")]
    pub quality_index: f64,
    /// Seconds since the Unix epoch at computation time.
    pub timestamp: i64,
    /// Lowercase hex SHA-256 over all other fields.
    pub hash: String,
}

impl Summary {
    /// Builds a summary for `system` at `tx_rate`, stamped with the current
    /// wall-clock time. The only side effect is the clock read.
    pub fn new(system: &ProofSystem, tx_rate: i64) -> Result<Self, Error> {
        Self::at(system, tx_rate, Utc::now().timestamp())
    }

    /// Builds a summary with an explicit timestamp.
    pub fn at(system: &ProofSystem, tx_rate: i64, timestamp: i64) -> Result<Self, Error> {
        let mut summary = Summary {
            key: system.key.clone(),
            name: system.name.clone(),
            family: system.family.clone(),
            description: system.description.clone(),
            proving_complexity: system.proving_complexity,
            verification_cost: system.verification_cost,
            privacy_strength: system.privacy_strength,
            soundness_guarantee: system.soundness_guarantee,
            tx_rate,
            quality_index: score::quality_index(system, tx_rate),
            timestamp,
            hash: String::new(),
        };
        summary.hash = summary.metadata_digest()?;
        Ok(summary)
    }

    /// Computes the digest over every field except `hash`.
    ///
    /// The payload is the summary rendered as a compact JSON object with
    /// lexicographically sorted keys (serde_json objects are backed by a
    /// `BTreeMap`), UTF-8 encoded.
    pub fn metadata_digest(&self) -> Result<String, Error> {
        let mut fields = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut fields {
            map.remove("hash");
        }
        let canonical = serde_json::to_string(&fields)?;
        Ok(hex::encode(Sha256::digest(canonical.as_bytes())))
    }
}
