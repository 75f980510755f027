pub mod convert;
pub mod report;
pub mod stats;

use anyhow::{Context, Result};
use common::LedgerSnapshot;
use tracing::{debug, trace};

/// Reads and deserializes a snapshot file.
pub fn load_snapshot(path: &str) -> Result<LedgerSnapshot> {
    trace!("Loading snapshot from {}", path);

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot file {path}"))?;
    let snapshot: LedgerSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse snapshot file {path}"))?;

    debug!(
        "Loaded snapshot: {} accounts, {} transactions, {} categories, {} rates",
        snapshot.accounts.len(),
        snapshot.transactions.len(),
        snapshot.categories.len(),
        snapshot.rates.len()
    );

    Ok(snapshot)
}
