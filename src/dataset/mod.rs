//! Tabular input/output: the dataset model plus the CSV reader and result sink.

pub mod error;
pub mod reader;
pub mod types;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::DatasetError;
pub use reader::parse_csv;
pub use types::{Dataset, DatasetRole, SourceRecord};
pub use writer::write_csv;
