#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{GroupStageError, Result};

/// Coarse qualitative label for a final point total.
#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Safe,
    Likely,
    Border,
    Miracle,
    Out,
}

impl StatusCategory {
    /// Stable lowercase key, suitable for locale lookups and CSS classes
    pub fn key(self) -> &'static str {
        match self {
            StatusCategory::Safe => "safe",
            StatusCategory::Likely => "likely",
            StatusCategory::Border => "border",
            StatusCategory::Miracle => "miracle",
            StatusCategory::Out => "out",
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Minimum point total for each status; anything below `miracle` is out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusThresholds {
    pub safe: u32,
    pub likely: u32,
    pub border: u32,
    pub miracle: u32,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        StatusThresholds {
            safe: 5,
            likely: 4,
            border: 3,
            miracle: 2,
        }
    }
}

impl StatusThresholds {
    /// Thresholds must be strictly descending.
    pub fn validate(&self) -> Result<()> {
        if self.safe > self.likely && self.likely > self.border && self.border > self.miracle {
            Ok(())
        } else {
            Err(GroupStageError::InvalidThresholds {
                safe: self.safe,
                likely: self.likely,
                border: self.border,
                miracle: self.miracle,
            })
        }
    }

    pub fn classify(&self, points: u32) -> StatusCategory {
        if points >= self.safe {
            StatusCategory::Safe
        } else if points >= self.likely {
            StatusCategory::Likely
        } else if points >= self.border {
            StatusCategory::Border
        } else if points >= self.miracle {
            StatusCategory::Miracle
        } else {
            StatusCategory::Out
        }
    }
}
