use crate::config::ReportConfig;
use crate::error::Result;
use crate::processors::CountyGrowth;
use crate::utils::constants::RANKING_HEADER;
use std::fs;

/// Writes the three summary report files.
///
/// Files are created or truncated in place at their configured paths; a
/// failure partway through a run can leave earlier files written and later
/// ones stale.
pub struct ReportWriter {
    config: ReportConfig,
}

impl ReportWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Bare integer, no trailing newline
    pub fn write_county_count(&self, count: usize) -> Result<()> {
        fs::write(self.config.count_path(), count.to_string())?;
        Ok(())
    }

    /// Two decimal places with a `.` radix point, no trailing newline
    pub fn write_total_value(&self, total: f64) -> Result<()> {
        fs::write(self.config.tiv2012_path(), format!("{:.2}", total))?;
        Ok(())
    }

    /// Header line plus one `<county>,<growth>` line per entry
    pub fn write_growth_ranking(&self, ranking: &[CountyGrowth]) -> Result<()> {
        let mut contents = String::from(RANKING_HEADER);
        contents.push('\n');
        for entry in ranking {
            contents.push_str(&format!("{},{:.2}\n", entry.county, entry.growth));
        }
        fs::write(self.config.most_valuable_path(), contents)?;
        Ok(())
    }
}
