use crate::error::{ProcessingError, Result};
use crate::models::PolicyRecord;
use crate::utils::constants::MIN_FIELD_COUNT;
use std::io::Read;

/// Parses the policy table out of decoded CSV text.
///
/// The table is plain comma-separated: quoting is disabled to match the
/// upstream export, so fields with embedded commas are not supported. The
/// first line is always treated as a header and discarded unvalidated.
pub struct PolicyReader {
    min_fields: usize,
}

impl PolicyReader {
    pub fn new() -> Self {
        Self {
            min_fields: MIN_FIELD_COUNT,
        }
    }

    pub fn with_min_fields(min_fields: usize) -> Self {
        Self { min_fields }
    }

    /// Read the full dataset into memory, failing on the first row too
    /// short to index the value columns.
    pub fn read_dataset<R: Read>(&self, input: R) -> Result<Vec<PolicyRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(input);

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            if record.len() < self.min_fields {
                let line = record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(index + 2);
                return Err(ProcessingError::ShortRow {
                    line,
                    expected: self.min_fields,
                    found: record.len(),
                });
            }
            records.push(PolicyRecord::new(
                record.iter().map(str::to_string).collect(),
            ));
        }

        Ok(records)
    }

    pub fn read_dataset_str(&self, contents: &str) -> Result<Vec<PolicyRecord>> {
        self.read_dataset(contents.as_bytes())
    }
}

impl Default for PolicyReader {
    fn default() -> Self {
        Self::new()
    }
}
