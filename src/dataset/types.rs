use std::fmt;
use std::sync::Arc;

use super::error::DatasetError;

/// One input row: an ordered sequence of field values.
///
/// Immutable once read; resolved records and error entries hold `Arc` references
/// back to the originating row, so a row is never copied downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    fields: Vec<String>,
}

impl SourceRecord {
    /// Wraps a row of field values.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Returns the field at `index`, or `None` if out of range.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Returns all field values in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A parsed table: header names plus rows, every row as wide as the header.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Arc<SourceRecord>>,
}

impl Dataset {
    /// Builds a dataset, padding short rows to header width.
    ///
    /// Rejects empty headers, zero data rows, and rows wider than the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, DatasetError> {
        if headers.is_empty() {
            return Err(DatasetError::Empty);
        }
        if rows.is_empty() {
            return Err(DatasetError::NoRows);
        }

        let width = headers.len();
        let mut records = Vec::with_capacity(rows.len());
        for (i, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(DatasetError::RowTooWide {
                    row: i,
                    expected: width,
                    actual: row.len(),
                });
            }
            row.resize(width, String::new());
            records.push(Arc::new(SourceRecord::new(row)));
        }

        Ok(Self { headers, records })
    }

    /// Header names in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in input order.
    pub fn records(&self) -> &[Arc<SourceRecord>] {
        &self.records
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolves a column selector to an index.
    ///
    /// Matches a header name first (case-insensitive), then falls back to a
    /// zero-based numeric index.
    pub fn column_index(&self, selector: &str) -> Result<usize, DatasetError> {
        let wanted = selector.trim();
        if let Some(i) = self
            .headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        {
            return Ok(i);
        }
        if let Ok(i) = wanted.parse::<usize>() {
            if i < self.headers.len() {
                return Ok(i);
            }
        }
        Err(DatasetError::ColumnNotFound {
            selector: selector.to_string(),
            headers: self.headers.clone(),
        })
    }
}

/// Which side of the match a dataset plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetRole {
    /// The dataset being matched (e.g. users asking for a service).
    Requester,
    /// The dataset matched against (e.g. facilities offering it).
    Provider,
}

impl fmt::Display for DatasetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Requester => write!(f, "requester"),
            Self::Provider => write!(f, "provider"),
        }
    }
}
