//! Spreadsheet source-row provider.
//!
//! Fetches the current trending rows from a Google Sheets values endpoint.
//! Any failure -- missing credentials, network error, unexpected payload --
//! falls back to fixed sample rows so callers never see an error from this
//! client.

use serde::Deserialize;
use trendboard_core::source_row::SourceRow;

use crate::config::SheetConfig;

/// Shape of the Sheets `values.get` response: a header row followed by data
/// rows, each a list of cell strings.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error("sheet credentials not configured")]
    MissingCredentials,
    #[error("sheet has no data rows")]
    Empty,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Read-only client for the external sheet.
pub struct SheetClient {
    http: reqwest::Client,
    config: SheetConfig,
}

impl SheetClient {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Current trending rows. Never fails: on any fetch problem the fixed
    /// sample rows are returned instead.
    pub async fn fetch_rows(&self) -> Vec<SourceRow> {
        match self.try_fetch().await {
            Ok(rows) => rows,
            Err(FetchError::MissingCredentials) => {
                tracing::debug!("No sheet credentials, serving sample rows");
                Self::sample_rows()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Sheet fetch failed, serving sample rows");
                Self::sample_rows()
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<SourceRow>, FetchError> {
        let (sheet_id, api_key) = match (&self.config.sheet_id, &self.config.api_key) {
            (Some(id), Some(key)) => (id, key),
            _ => return Err(FetchError::MissingCredentials),
        };

        let url = format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{sheet_id}/values/{range}?key={api_key}",
            range = self.config.range
        );

        let response: ValuesResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let rows = parse_values(&response.values);
        if rows.is_empty() {
            return Err(FetchError::Empty);
        }
        tracing::info!(count = rows.len(), "Fetched source rows from sheet");
        Ok(rows)
    }

    /// Fixed rows served when the sheet is unreachable or unconfigured.
    pub fn sample_rows() -> Vec<SourceRow> {
        let raw: [(&str, &str, &str, &str, &str, &str, &str, &str); 5] = [
            ("Sample Keyword 1", "Breaking News Story", "Hot topic", "Tech", "2h ago", "05-01-2026", "14:30:00", "Moiz"),
            ("Sample Keyword 2", "Latest Update", "Trending", "News", "4h ago", "05-01-2026", "12:30:00", "Taha"),
            ("Sample Keyword 3", "Match Highlights", "Popular", "Sports", "1h ago", "06-01-2026", "15:30:00", "Moiz"),
            ("Sample Keyword 4", "Celebrity News", "Viral", "Entertainment", "6h ago", "06-01-2026", "10:30:00", "Salman"),
            ("Sample Keyword 5", "Market Analysis", "Rising", "Business", "3h ago", "07-01-2026", "13:30:00", "Taha"),
        ];

        raw.iter()
            .enumerate()
            .map(
                |(i, (keyword, title, remarks, category, hours_ago, date, time, seo))| SourceRow {
                    id: i as i64 + 1,
                    keyword: keyword.to_string(),
                    title: title.to_string(),
                    remarks: remarks.to_string(),
                    category: category.to_string(),
                    hours_ago: hours_ago.to_string(),
                    date: date.to_string(),
                    time: time.to_string(),
                    seo: seo.to_string(),
                },
            )
            .collect()
    }
}

/// Convert the raw value grid into source rows.
///
/// The first row is treated as headers (trimmed, lowercased). Column lookup
/// is a fixed header-name match; rows shorter than the header row are padded
/// with empty cells.
fn parse_values(values: &[Vec<String>]) -> Vec<SourceRow> {
    let Some((header, data)) = values.split_first() else {
        return Vec::new();
    };

    let headers: Vec<String> = header
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let col = |names: &[&str]| -> Option<usize> {
        names
            .iter()
            .find_map(|name| headers.iter().position(|h| h == name))
    };

    let keyword_col = col(&["keywords", "keyword"]);
    let title_col = col(&["title", "titles"]);
    let remarks_col = col(&["remarks", "remark"]);
    let category_col = col(&["category"]);
    let hours_col = col(&["hours ago", "hours_ago"]);
    let date_col = col(&["date"]);
    let time_col = col(&["time"]);
    let seo_col = col(&["seos", "seo"]);

    let cell = |row: &[String], idx: Option<usize>| -> String {
        idx.and_then(|i| row.get(i))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };

    data.iter()
        .enumerate()
        .map(|(i, row)| {
            let keyword = match cell(row, keyword_col) {
                k if k.is_empty() => format!("Keyword {}", i + 1),
                k => k,
            };
            SourceRow {
                id: i as i64 + 1,
                keyword,
                title: cell(row, title_col),
                remarks: cell(row, remarks_col),
                category: match cell(row, category_col) {
                    c if c.is_empty() => "General".to_string(),
                    c => c,
                },
                hours_ago: cell(row, hours_col),
                date: cell(row, date_col),
                time: cell(row, time_col),
                seo: cell(row, seo_col),
            }
        })
        .collect()
}
