//! Presenters for a [`Summary`]: fixed human-readable text and pretty JSON.

use crate::error::Error;
use crate::summary::Summary;
use std::fmt::Write;

/// Renders the fixed multi-line human layout. The returned string ends with
/// a newline.
pub fn human(summary: &Summary) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "🔐 Cryptographic Architecture Model");
    let _ = writeln!(out, "System: {} ({})", summary.name, summary.key);
    let _ = writeln!(out, "Family: {}", summary.family);
    let _ = writeln!(out, "Description: {}", summary.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Transactions/sec: {}", summary.tx_rate);
    let _ = writeln!(out, "Privacy strength: {}", summary.privacy_strength);
    let _ = writeln!(out, "Soundness guarantee: {}", summary.soundness_guarantee);
    let _ = writeln!(out, "Proving complexity: {}", summary.proving_complexity);
    let _ = writeln!(out, "Verification cost:  {}", summary.verification_cost);
    let _ = writeln!(out);
    let _ = writeln!(out, "🏁 Quality Index: {}", summary.quality_index);
    let _ = writeln!(out, "🧬 Metadata hash: {}", summary.hash);
    out
}

/// Renders the summary as a JSON object with lexicographically sorted keys
/// and 2-space indentation.
pub fn json(summary: &Summary) -> Result<String, Error> {
    // Going through a Value sorts the keys; serializing the struct directly
    // would keep field declaration order.
    let value = serde_json::to_value(summary)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
