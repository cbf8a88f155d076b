//! Monte Carlo cross-check for the exact engine.
//!
//! Samples every match outcome independently, tallies final point totals and
//! averages the advancement rate of each sampled total. Useful for checking a
//! custom format or a long match list against the enumeration; the engine
//! itself never samples.

use rand::distributions::{Distribution, WeightedIndex};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use std::collections::BTreeMap;

use crate::constants::CONFIDENCE_LEVEL;
use crate::distribution::PointsDistribution;
use crate::error::{GroupStageError, Result};
use crate::format::GroupFormat;
use crate::odds::MatchOdds;
use crate::outcome::Outcome;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub n_simulations: usize,
    /// Estimated qualification probability
    pub estimate: f64,
    pub std_error: f64,
    /// Half-width of the confidence interval around `estimate`
    pub half_width: f64,
    /// Observed frequency of each sampled total (unsampled totals are absent)
    pub distribution: PointsDistribution,
}

impl SimulationSummary {
    pub fn interval(&self) -> (f64, f64) {
        (self.estimate - self.half_width, self.estimate + self.half_width)
    }

    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = self.interval();
        (lo..=hi).contains(&value)
    }
}

/// Estimate qualification probability by simulating the group.
///
/// # Arguments
/// * `format` - Advancement rates to score each sampled total with
/// * `matches` - Outcome odds per match; weights need not sum to 1
/// * `n_simulations` - Number of simulated groups, must be positive
/// * `seed` - Fixed seed for reproducible runs, or `None` for entropy
pub fn simulate_qualification(
    format: &GroupFormat,
    matches: &[MatchOdds],
    n_simulations: usize,
    seed: Option<u64>,
) -> Result<SimulationSummary> {
    if n_simulations == 0 {
        return Err(GroupStageError::InvalidParameter(
            "n_simulations must be positive".to_string(),
        ));
    }

    let samplers = matches
        .iter()
        .enumerate()
        .map(|(i, odds)| {
            WeightedIndex::new([odds.win, odds.draw, odds.loss])
                .map_err(|e| GroupStageError::InvalidOdds(format!("match {}: {}", i + 1, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    let mut sum = 0.0;
    let mut sum_sq = 0.0;

    for _ in 0..n_simulations {
        let points: u32 = samplers
            .iter()
            .map(|sampler| Outcome::ALL[sampler.sample(&mut rng)].points())
            .sum();
        let rate = format.rate(points);
        sum += rate;
        sum_sq += rate * rate;
        *counts.entry(points).or_insert(0) += 1;
    }

    let n = n_simulations as f64;
    let estimate = sum / n;
    let variance = if n_simulations > 1 {
        ((sum_sq - n * estimate * estimate) / (n - 1.0)).max(0.0)
    } else {
        0.0
    };
    let std_error = (variance / n).sqrt();

    let normal = Normal::new(0.0, 1.0).map_err(|e| GroupStageError::InvalidParameter(e.to_string()))?;
    let z = normal.inverse_cdf(0.5 + CONFIDENCE_LEVEL / 2.0);

    tracing::debug!(n_simulations, estimate, std_error, "simulated qualification");

    Ok(SimulationSummary {
        n_simulations,
        estimate,
        std_error,
        half_width: z * std_error,
        distribution: PointsDistribution::from_counts(&counts),
    })
}
