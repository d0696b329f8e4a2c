//! CSV upload parsing. The header row names the fields; unknown columns are
//! ignored and missing ones default to empty.

use thiserror::Error;

use crate::models::lead::LeadRecord;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Please upload a CSV file.")]
    NotCsv,

    #[error("Uploaded file is empty.")]
    Empty,

    #[error("Could not parse CSV: {0}")]
    Malformed(String),

    #[error("CSV has no data rows.")]
    NoRows,
}

pub fn ensure_csv_filename(filename: &str) -> Result<(), IngestError> {
    if filename.to_lowercase().ends_with(".csv") {
        Ok(())
    } else {
        Err(IngestError::NotCsv)
    }
}

pub fn parse_leads(content: &[u8]) -> Result<Vec<LeadRecord>, IngestError> {
    if content.is_empty() {
        return Err(IngestError::Empty);
    }

    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let text = std::str::from_utf8(content).map_err(|e| IngestError::Malformed(e.to_string()))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(malformed)?.clone();
    let mut records = Vec::new();
    for row in reader.records() {
        let mut row = row.map_err(malformed)?;
        // Short rows read as if the trailing cells were blank.
        while row.len() < headers.len() {
            row.push_field("");
        }
        records.push(row.deserialize::<LeadRecord>(Some(&headers)).map_err(malformed)?);
    }

    if records.is_empty() {
        return Err(IngestError::NoRows);
    }
    Ok(records)
}

fn malformed(e: csv::Error) -> IngestError {
    IngestError::Malformed(e.to_string())
}
