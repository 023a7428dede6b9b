use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while ingesting or serializing a tabular dataset.
pub enum DatasetError {
    /// The input contained no non-blank rows at all.
    #[error("dataset is empty: no header row found")]
    Empty,

    /// The input had a header row but no data rows.
    #[error("dataset has headers but no data rows")]
    NoRows,

    /// A data row carried more fields than the header row.
    #[error("row {row} has {actual} fields, header has {expected}")]
    RowTooWide {
        /// Zero-based data row index.
        row: usize,
        /// Header field count.
        expected: usize,
        /// Row field count.
        actual: usize,
    },

    /// The requested address column does not exist.
    #[error("address column '{selector}' not found (headers: {headers:?})")]
    ColumnNotFound {
        /// Column name or index as given by the caller.
        selector: String,
        /// Available header names.
        headers: Vec<String>,
    },

    /// The underlying CSV reader or writer failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
