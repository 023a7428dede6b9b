use csv::ReaderBuilder;

use super::error::DatasetError;
use super::types::Dataset;

/// Parses raw delimited text into a [`Dataset`].
///
/// Quoted fields (quotes escaped by doubling), embedded commas and newlines
/// inside quotes, and CRLF/LF endings are all handled by the reader. Rows whose
/// fields are all blank are dropped; the first remaining row becomes the header.
pub fn parse_csv(raw: &str) -> Result<Dataset, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DatasetError::Empty);
    }

    let headers = rows.remove(0);
    Dataset::new(headers, rows)
}
