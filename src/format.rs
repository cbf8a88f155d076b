//! Group-stage format configuration.
//!
//! A format bundles the policy constants the engine consults: the
//! advancement rate for each point total and the status thresholds. Swapping
//! the format changes results without touching the enumeration itself.
//!
//! Formats can be loaded from JSON. Missing sections fall back to the
//! 2026 World Cup defaults:
//!
//! ```json
//! {
//!   "rates": { "9": 1.0, "7": 1.0, "6": 1.0, "5": 1.0, "4": 0.993,
//!              "3": 0.473, "2": 0.025, "1": 0.0, "0": 0.0 },
//!   "thresholds": { "safe": 5, "likely": 4, "border": 3, "miracle": 2 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::rates::AdvancementRates;
use crate::status::{StatusCategory, StatusThresholds};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupFormat {
    pub rates: AdvancementRates,
    pub thresholds: StatusThresholds,
}

impl GroupFormat {
    pub fn new(rates: AdvancementRates, thresholds: StatusThresholds) -> Result<Self> {
        let format = GroupFormat { rates, thresholds };
        format.validate()?;
        Ok(format)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let format: GroupFormat = serde_json::from_str(json)?;
        format.validate()?;
        Ok(format)
    }

    pub fn read_from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
        let contents = fs::read_to_string(filepath.as_ref())?;
        let format = GroupFormat::from_json_str(&contents)?;
        tracing::info!(path = %filepath.as_ref().display(), "loaded group format");
        Ok(format)
    }

    /// Rates are range-checked on construction; only thresholds need a pass here.
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()
    }

    pub fn rate(&self, points: u32) -> f64 {
        self.rates.rate(points)
    }

    pub fn status(&self, points: u32) -> StatusCategory {
        self.thresholds.classify(points)
    }
}
