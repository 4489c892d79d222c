//! The quality-index formula.
//!
//! Privacy and soundness count as benefits, proving complexity and
//! verification cost as penalties, and the transaction rate scales the result
//! through a clamped linear throughput factor. The formula is total over all
//! `i64` rates; the clamp is the only boundary control.

use crate::catalog::ProofSystem;

pub const PRIVACY_WEIGHT: f64 = 0.42;
pub const SOUNDNESS_WEIGHT: f64 = 0.43;
pub const PROVING_PENALTY: f64 = 0.10;
pub const VERIFICATION_PENALTY: f64 = 0.05;

/// Rate at which the throughput factor reaches its floor.
const RATE_SCALE: f64 = 20_000.0;
const FACTOR_FLOOR: f64 = 0.35;

/// Clamped linear decay term in [0.35, 1.0] modeling reduced efficiency at
/// higher transaction rates.
pub fn throughput_factor(tx_rate: i64) -> f64 {
    (1.0 - tx_rate as f64 / RATE_SCALE).clamp(FACTOR_FLOOR, 1.0)
}

/// Computes the quality index for `system` at the given transaction rate,
/// rounded half-away-from-zero to 4 decimal places.
pub fn quality_index(system: &ProofSystem, tx_rate: i64) -> f64 {
    let benefit =
        PRIVACY_WEIGHT * system.privacy_strength + SOUNDNESS_WEIGHT * system.soundness_guarantee;
    let penalty =
        PROVING_PENALTY * system.proving_complexity + VERIFICATION_PENALTY * system.verification_cost;
    round4((benefit - penalty) * throughput_factor(tx_rate))
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
