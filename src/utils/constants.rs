/// File names
pub const DATA_ARCHIVE: &str = "FL_insurance.csv.zip";
pub const DATA_ENTRY: &str = "FL_insurance.csv";
pub const COUNT_FILE: &str = "count.txt";
pub const TIV2012_FILE: &str = "tiv2012.txt";
pub const MOST_VALUABLE_FILE: &str = "most_valuable.txt";

/// Column positions (0-indexed)
pub const COUNTY_COLUMN: usize = 2;
pub const TIV_2011_COLUMN: usize = 7;
pub const TIV_2012_COLUMN: usize = 8;

/// Rows must be wide enough to index the 2012 value column
pub const MIN_FIELD_COUNT: usize = 9;

/// Ranking output
pub const RANKING_LIMIT: usize = 10;
// Historical header text; downstream parsers expect it verbatim.
pub const RANKING_HEADER: &str = "country,value";
