use csv::WriterBuilder;

use super::error::DatasetError;

/// Serializes a header row and row-major data to delimited text.
///
/// Fields containing the delimiter, quote character, or a newline are quoted
/// with internal quotes doubled, so output parses back losslessly through
/// [`parse_csv`](super::reader::parse_csv).
pub fn write_csv(headers: &[String], rows: &[Vec<String>]) -> Result<String, DatasetError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DatasetError::Csv(e.into_error().into()))?;
    // The writer emits valid UTF-8 for UTF-8 input.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
