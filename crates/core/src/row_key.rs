//! Row identity for source rows.
//!
//! Keyword display text is not unique: the same keyword can appear on several
//! sheet rows. A [`RowKey`] therefore identifies a row by four fields
//! (keyword text, date, time, source row id), joined with a separator that
//! does not occur in sheet data. Clients that predate row keys send only the
//! keyword text; such keys are kept as [`RowKey::Legacy`] so one selection
//! per keyword text keeps working for them.

use std::fmt;

/// Separator between row-key fields (U+241F SYMBOL FOR UNIT SEPARATOR).
pub const ROW_KEY_SEPARATOR: char = '\u{241F}';

/// Identity of one source row, distinct from its display text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// Full four-field identity.
    Composite {
        keyword: String,
        date: String,
        time: String,
        source_id: String,
    },
    /// Pre-row-key identity: the raw keyword text.
    Legacy(String),
}

impl RowKey {
    pub fn new(
        keyword: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        source_id: impl Into<String>,
    ) -> Self {
        RowKey::Composite {
            keyword: keyword.into(),
            date: date.into(),
            time: time.into(),
            source_id: source_id.into(),
        }
    }

    pub fn legacy(keyword: impl Into<String>) -> Self {
        RowKey::Legacy(keyword.into())
    }

    /// Parse a wire-format key. Anything that does not split into exactly
    /// four fields is treated as a legacy key.
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split(ROW_KEY_SEPARATOR).collect();
        match parts.as_slice() {
            [keyword, date, time, source_id] => RowKey::new(*keyword, *date, *time, *source_id),
            _ => RowKey::Legacy(raw.to_string()),
        }
    }

    /// The keyword display text this key belongs to.
    pub fn keyword(&self) -> &str {
        match self {
            RowKey::Composite { keyword, .. } => keyword,
            RowKey::Legacy(keyword) => keyword,
        }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Composite {
                keyword,
                date,
                time,
                source_id,
            } => write!(
                f,
                "{keyword}{sep}{date}{sep}{time}{sep}{source_id}",
                sep = ROW_KEY_SEPARATOR
            ),
            RowKey::Legacy(keyword) => f.write_str(keyword),
        }
    }
}
