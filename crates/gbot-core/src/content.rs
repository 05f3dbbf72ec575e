use async_trait::async_trait;

use crate::Result;

/// One spreadsheet row. Column count varies; rendering treats missing
/// columns as blanks rather than erroring (pass-through semantics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SheetRow(pub Vec<String>);

impl SheetRow {
    pub fn col(&self, idx: usize) -> Option<&str> {
        self.0.get(idx).map(String::as_str)
    }
}

/// Read-only port to the external tabular source.
///
/// Every call is a fresh remote read: no retries, no caching.
#[async_trait]
pub trait ContentPort: Send + Sync {
    async fn fetch_range(&self, range: &str) -> Result<Vec<SheetRow>>;
}

/// Assemble the broadcast message from the reserved range: every column-A
/// cell, joined with newlines. `None` when the range is empty.
pub fn join_broadcast_rows(rows: &[SheetRow]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }
    Some(
        rows.iter()
            .map(|r| r.col(0).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
