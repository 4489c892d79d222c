//! Command-line argument surface.
//!
//! Validation happens entirely at this boundary: once arguments parse, no
//! later stage can fail on user input. Unknown `--system` values are rejected
//! by the value parser so clap reports them as usage errors (non-zero exit,
//! usage text on stderr, nothing on stdout).

use crate::catalog::Catalog;
use clap::Parser;

/// Cryptographic architecture comparator for Web3 systems.
#[derive(Debug, Parser)]
#[command(name = "proof-gauge", version)]
pub struct Cli {
    /// Transactions per second to evaluate the system under.
    ///
    /// Negative rates are accepted; the scorer's clamp absorbs them.
    #[arg(allow_negative_numbers = true)]
    pub tx_rate: i64,

    /// Which proof system to model.
    #[arg(long, default_value = "aztec", value_parser = parse_system_key)]
    pub system: String,

    /// Output JSON instead of human text.
    #[arg(long)]
    pub json: bool,
}

fn parse_system_key(raw: &str) -> Result<String, String> {
    let catalog = Catalog::builtin();
    if catalog.contains(raw) {
        Ok(raw.to_string())
    } else {
        let choices: Vec<&str> = catalog.keys().collect();
        Err(format!("must be one of: {}", choices.join(", ")))
    }
}
