use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::constants::ADVANCEMENT_RATES;
use crate::error::{GroupStageError, Result};

/// Probability of advancing given a final point total.
///
/// An empirical constant supplied from outside; nothing in this crate derives
/// it. Point totals missing from the table advance with probability 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u32, f64>", into = "BTreeMap<u32, f64>")]
pub struct AdvancementRates {
    rates: BTreeMap<u32, f64>,
}

impl Default for AdvancementRates {
    fn default() -> Self {
        AdvancementRates {
            rates: ADVANCEMENT_RATES.iter().copied().collect(),
        }
    }
}

impl AdvancementRates {
    /// Build a table from (points, rate) pairs. Later pairs win on duplicates.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        let mut rates = BTreeMap::new();
        for (points, rate) in pairs {
            check_rate(points, rate)?;
            rates.insert(points, rate);
        }
        Ok(AdvancementRates { rates })
    }

    /// Read a table from a CSV file.
    /// Format: points,rate
    pub fn read_from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
        let file = File::open(filepath.as_ref())?;
        let reader = BufReader::new(file);
        let mut pairs = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() != 2 {
                return Err(GroupStageError::ParseLine {
                    line: idx + 1,
                    reason: format!("expected 2 fields, got {}", parts.len()),
                });
            }

            let points: u32 = parts[0].trim().parse().map_err(|e| GroupStageError::ParseLine {
                line: idx + 1,
                reason: format!("invalid points: {}", e),
            })?;
            let rate: f64 = parts[1].trim().parse().map_err(|e| GroupStageError::ParseLine {
                line: idx + 1,
                reason: format!("invalid rate: {}", e),
            })?;
            pairs.push((points, rate));
        }

        let table = AdvancementRates::from_pairs(pairs)?;
        tracing::info!(
            path = %filepath.as_ref().display(),
            entries = table.len(),
            "loaded advancement rates"
        );
        Ok(table)
    }

    /// Advancement rate for a point total; 0 when the table has no entry.
    pub fn rate(&self, points: u32) -> f64 {
        self.rates.get(&points).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, points: u32) -> bool {
        self.rates.contains_key(&points)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Entries in ascending point order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u32, f64)> + '_ {
        self.rates.iter().map(|(&p, &r)| (p, r))
    }
}

fn check_rate(points: u32, rate: f64) -> Result<()> {
    if rate.is_finite() && (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(GroupStageError::InvalidRate { points, rate })
    }
}

impl TryFrom<BTreeMap<u32, f64>> for AdvancementRates {
    type Error = GroupStageError;

    fn try_from(rates: BTreeMap<u32, f64>) -> Result<Self> {
        AdvancementRates::from_pairs(rates)
    }
}

impl From<AdvancementRates> for BTreeMap<u32, f64> {
    fn from(table: AdvancementRates) -> Self {
        table.rates
    }
}
