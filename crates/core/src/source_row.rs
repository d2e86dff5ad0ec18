//! Read-only trending-topic rows fetched from the external sheet.

use serde::{Deserialize, Serialize};

use crate::row_key::RowKey;

/// One trending-topic row as presented to clients.
///
/// Not persisted: rows are fetched fresh from the sheet on demand. The `seo`
/// field names the person who posted the keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRow {
    pub id: i64,
    pub keyword: String,
    pub title: String,
    pub remarks: String,
    pub category: String,
    pub hours_ago: String,
    pub date: String,
    pub time: String,
    pub seo: String,
}

impl SourceRow {
    /// The composite identity for this row, used to key selections.
    pub fn row_key(&self) -> RowKey {
        RowKey::new(
            self.keyword.clone(),
            self.date.clone(),
            self.time.clone(),
            self.id.to_string(),
        )
    }
}
