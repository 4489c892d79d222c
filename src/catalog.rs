//! The builtin catalog of modeled proof systems.
//!
//! The catalog is a process-wide, read-only table fixed at three entries.
//! Each entry is a descriptive record, not executable cryptography: the four
//! numeric scores are abstract ratings on a 1–10 scale and are display/model
//! inputs only (the range is documented, not enforced).

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// A named, descriptive record of an abstract cryptographic architecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofSystem {
    /// Short identifier, unique within the catalog.
    pub key: String,
    pub name: String,
    pub family: String,
    pub description: String,
    /// Abstract score 1–10.
    pub proving_complexity: f64,
    /// Abstract score 1–10.
    pub verification_cost: f64,
    /// Abstract score 1–10.
    pub privacy_strength: f64,
    /// Abstract score 1–10.
    pub soundness_guarantee: f64,
}

/// An immutable mapping from key to [`ProofSystem`].
#[derive(Debug)]
pub struct Catalog {
    systems: BTreeMap<String, ProofSystem>,
}

impl Catalog {
    /// Returns the process-wide builtin catalog, initialized on first use.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let systems = [
                ProofSystem {
                    key: "aztec".to_string(),
                    name: "Aztec Noir-style ZK System".to_string(),
                    family: "ZK-SNARK privacy model".to_string(),
                    description: "A zk system enabling encrypted transactions and private state."
                        .to_string(),
                    proving_complexity: 7.8,
                    verification_cost: 2.1,
                    privacy_strength: 9.3,
                    soundness_guarantee: 8.4,
                },
                ProofSystem {
                    key: "zama".to_string(),
                    name: "Zama FHE Cryptosystem".to_string(),
                    family: "Fully Homomorphic Encryption".to_string(),
                    description: "FHE compute model with encrypted inputs, outputs, and logic."
                        .to_string(),
                    proving_complexity: 9.2,
                    verification_cost: 7.8,
                    privacy_strength: 8.7,
                    soundness_guarantee: 9.1,
                },
                ProofSystem {
                    key: "soundness".to_string(),
                    name: "Formal Soundness Verification Model".to_string(),
                    family: "Proof-oriented protocol engineering".to_string(),
                    description:
                        "A system built around rigorous soundness proofs and verifiable execution."
                            .to_string(),
                    proving_complexity: 6.1,
                    verification_cost: 3.2,
                    privacy_strength: 6.4,
                    soundness_guarantee: 10.0,
                },
            ];
            Catalog {
                systems: systems
                    .into_iter()
                    .map(|s| (s.key.clone(), s))
                    .collect(),
            }
        })
    }

    /// Looks up a system by key.
    pub fn lookup(&self, key: &str) -> Result<&ProofSystem, Error> {
        self.systems
            .get(key)
            .ok_or_else(|| Error::UnknownSystem(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.systems.contains_key(key)
    }

    /// The valid keys, in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.systems.keys().map(String::as_str)
    }
}
