use crate::utils::constants::{
    COUNT_FILE, DATA_ARCHIVE, DATA_ENTRY, MOST_VALUABLE_FILE, TIV2012_FILE,
};
use std::path::PathBuf;

/// File locations for one pipeline run. Defaults match the historical
/// fixed names so running with no arguments reproduces the original reports.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub archive_path: PathBuf,
    pub entry_name: String,
    pub output_dir: PathBuf,
    pub count_file: String,
    pub tiv2012_file: String,
    pub most_valuable_file: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            archive_path: PathBuf::from(DATA_ARCHIVE),
            entry_name: DATA_ENTRY.to_string(),
            output_dir: PathBuf::from("."),
            count_file: COUNT_FILE.to_string(),
            tiv2012_file: TIV2012_FILE.to_string(),
            most_valuable_file: MOST_VALUABLE_FILE.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn count_path(&self) -> PathBuf {
        self.output_dir.join(&self.count_file)
    }

    pub fn tiv2012_path(&self) -> PathBuf {
        self.output_dir.join(&self.tiv2012_file)
    }

    pub fn most_valuable_path(&self) -> PathBuf {
        self.output_dir.join(&self.most_valuable_file)
    }
}
