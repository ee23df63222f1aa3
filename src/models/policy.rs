use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::utils::constants::{COUNTY_COLUMN, TIV_2011_COLUMN, TIV_2012_COLUMN};
use crate::utils::money::parse_amount;

/// One data row of the policy table. Fields are positional; there is no
/// typed schema beyond the three columns the reports consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    fields: Vec<String>,
}

impl PolicyRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// County name, trimmed of surrounding whitespace
    pub fn county(&self) -> &str {
        self.field(COUNTY_COLUMN).unwrap_or("").trim()
    }

    /// Total insured value for 2011
    pub fn tiv_2011(&self) -> Result<f64> {
        parse_amount(self.field(TIV_2011_COLUMN).unwrap_or(""), TIV_2011_COLUMN)
    }

    /// Total insured value for 2012
    pub fn tiv_2012(&self) -> Result<f64> {
        parse_amount(self.field(TIV_2012_COLUMN).unwrap_or(""), TIV_2012_COLUMN)
    }

    /// Year-over-year change in total insured value
    pub fn tiv_growth(&self) -> Result<f64> {
        Ok(self.tiv_2012()? - self.tiv_2011()?)
    }
}
