//! Tabular vocabulary ingestion from CSV files, Excel workbooks and Google
//! Sheets.
//!
//! Produces raw `(first, second)` cell pairs; variant parsing and row
//! filtering happen in the core store.

use std::io::Cursor;
use std::time::Duration;

use calamine::{open_workbook_auto_from_rs, Reader};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use vocab_core::QuizError;

const SHEET_TIMEOUT: Duration = Duration::from_secs(10);

static SHEET_URLS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"^https://docs\.google\.com/spreadsheets/d/([a-zA-Z0-9_-]+)/edit.*")
            .expect("edit url pattern"),
        Regex::new(r"^https://docs\.google\.com/spreadsheets/d/([a-zA-Z0-9_-]+)/export\?format=csv.*")
            .expect("export url pattern"),
    ]
});

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("{table} must have at least 2 columns!")]
    TooFewColumns { table: &'static str },

    #[error("Loading error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Loading error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Loading error: workbook has no sheets")]
    EmptyWorkbook,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Unsupported file type: {0} (use .csv, .xlsx or .xls)")]
    UnsupportedFile(String),
}

impl From<IngestError> for QuizError {
    fn from(err: IngestError) -> Self {
        QuizError::Ingestion(err.to_string())
    }
}

/// Raw vocabulary rows.
pub type Rows = Vec<(String, String)>;

/// Parse CSV with a header row, keeping the first two columns.
///
/// `table` names the source in the column-count error ("File", "Sheet").
pub fn parse_csv(content: &[u8], table: &'static str) -> Result<Rows, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content);

    if reader.headers()?.len() < 2 {
        return Err(IngestError::TooFewColumns { table });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let first = record.get(0).unwrap_or_default().to_string();
        let second = record.get(1).unwrap_or_default().to_string();
        rows.push((first, second));
    }
    Ok(rows)
}

/// Read the first sheet of an `.xlsx` or `.xls` workbook.
///
/// Same rules as [`parse_csv`]: header row, first two columns.
pub fn parse_workbook(content: &[u8], table: &'static str) -> Result<Rows, IngestError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(content.to_vec()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::EmptyWorkbook)??;

    if range.width() < 2 {
        return Err(IngestError::TooFewColumns { table });
    }

    let rows = range
        .rows()
        .skip(1)
        .map(|row| {
            let cell = |i: usize| row.get(i).map(|c| c.to_string()).unwrap_or_default();
            (cell(0).trim().to_string(), cell(1).trim().to_string())
        })
        .collect();
    Ok(rows)
}

/// Parse an uploaded file by extension: CSV or an Excel workbook.
pub fn parse_upload(filename: &str, content: &[u8]) -> Result<Rows, IngestError> {
    let lower = filename.to_lowercase();
    if lower.ends_with(".csv") {
        parse_csv(content, "File")
    } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
        parse_workbook(content, "File")
    } else {
        Err(IngestError::UnsupportedFile(filename.to_string()))
    }
}

/// Rewrite a Google Sheets link to its CSV export URL.
///
/// Links that match no known shape are returned unchanged.
pub fn convert_google_sheets_url(url: &str) -> String {
    SHEET_URLS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .map(|caps| {
            format!(
                "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
                &caps[1]
            )
        })
        .unwrap_or_else(|| url.to_string())
}

/// Download a Google Sheet as CSV and parse it.
pub async fn load_google_sheet(client: &reqwest::Client, url: &str) -> Result<Rows, IngestError> {
    let csv_url = convert_google_sheets_url(url);
    tracing::info!("Downloading sheet from {}", csv_url);

    let response = client
        .get(&csv_url)
        .timeout(SHEET_TIMEOUT)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| IngestError::Connection(e.to_string()))?;

    let body = response
        .bytes()
        .await
        .map_err(|e| IngestError::Connection(e.to_string()))?;

    parse_csv(&body, "Sheet")
}
