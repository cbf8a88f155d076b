//! Qualification probability from per-match odds.
//!
//! The engine enumerates every combination of match outcomes, builds the
//! distribution of final point totals, and weights each total by the format's
//! advancement rate. It is an exact expectation: no sampling, no state, the
//! same inputs always give bit-identical results.

#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::constants::MATCHES_PER_GROUP;
use crate::distribution::{points_distribution, PointsDistribution};
use crate::format::GroupFormat;
use crate::odds::MatchOdds;
use crate::status::StatusCategory;

/// One line of the result table: a point total and what it means.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointsRow {
    pub points: u32,
    /// Probability of finishing on exactly this total
    pub probability: f64,
    /// Probability of advancing given this total
    pub advancement_rate: f64,
    pub status: StatusCategory,
}

impl PointsRow {
    /// This row's share of the total qualification probability
    pub fn contribution(&self) -> f64 {
        self.probability * self.advancement_rate
    }
}

/// Coarse summary bands over the point distribution.
///
/// Derived from the distribution for reporting; they never feed back into the
/// total. With the default thresholds the bands are 4+ points, exactly 3, and
/// 2 or fewer.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Mass at or above the "likely" threshold, treated as qualified
    pub qualified: f64,
    /// Mass in the border band (at or above "border", below "likely")
    pub border: f64,
    /// Border mass that goes through: mass x rate
    pub border_qualify: f64,
    /// Border mass that goes out: mass x (1 - rate)
    pub border_eliminate: f64,
    /// Mass below the "border" threshold, treated as eliminated
    pub eliminated: f64,
}

/// Full output of a qualification computation.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualificationResult {
    /// Probability of advancing from the group
    pub total: f64,
    /// One row per reachable point total, highest total first
    pub rows: Vec<PointsRow>,
    pub breakdown: Breakdown,
    pub distribution: PointsDistribution,
}

impl QualificationResult {
    pub fn row(&self, points: u32) -> Option<&PointsRow> {
        self.rows.iter().find(|row| row.points == points)
    }

    /// Status of the most likely point total.
    ///
    /// `None` when the distribution carries no mass, e.g. all-zero odds.
    pub fn status(&self) -> Option<StatusCategory> {
        if self.distribution.total_mass() <= 0.0 {
            return None;
        }
        let modal = self.distribution.modal_points()?;
        self.row(modal).map(|row| row.status)
    }
}

fn default_format() -> &'static GroupFormat {
    static DEFAULT_FORMAT: OnceLock<GroupFormat> = OnceLock::new();
    DEFAULT_FORMAT.get_or_init(GroupFormat::default)
}

/// Probability of advancing from a three-match group.
///
/// Uses the default format (2026 World Cup advancement rates and status
/// thresholds). Inputs are used as given: triples that do not sum to 1 or lie
/// outside [0, 1] are not rejected, they just produce meaningless numbers.
///
/// # Arguments
/// * `matches` - Win/draw/loss odds against each of the three opponents
///
/// # Returns
/// Total qualification probability, per-total rows and summary bands
pub fn compute_qualification(matches: &[MatchOdds; MATCHES_PER_GROUP]) -> QualificationResult {
    default_format().compute_qualification(matches)
}

impl GroupFormat {
    /// Qualification probability under this format.
    ///
    /// Accepts any number of matches; a standard group has three.
    pub fn compute_qualification(&self, matches: &[MatchOdds]) -> QualificationResult {
        let result = self.evaluate(points_distribution(matches));
        tracing::debug!(matches = matches.len(), total = result.total, "computed qualification");
        result
    }

    /// Map an existing point distribution to a qualification result.
    pub fn evaluate(&self, distribution: PointsDistribution) -> QualificationResult {
        let thresholds = &self.thresholds;
        let mut total = 0.0;
        let mut breakdown = Breakdown::default();
        let mut rows = Vec::with_capacity(distribution.len());

        for (points, mass) in distribution.iter_desc() {
            let rate = self.rate(points);
            total += mass * rate;

            if points >= thresholds.likely {
                breakdown.qualified += mass;
            } else if points >= thresholds.border {
                breakdown.border += mass;
                breakdown.border_qualify += mass * rate;
                breakdown.border_eliminate += mass * (1.0 - rate);
            } else {
                breakdown.eliminated += mass;
            }

            rows.push(PointsRow {
                points,
                probability: mass,
                advancement_rate: rate,
                status: self.status(points),
            });
        }

        QualificationResult {
            total,
            rows,
            breakdown,
            distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::AdvancementRates;
    use crate::status::StatusThresholds;

    fn sample_matches() -> [MatchOdds; 3] {
        [
            MatchOdds::new(0.5, 0.3, 0.2),
            MatchOdds::new(0.4, 0.3, 0.3),
            MatchOdds::new(0.3, 0.4, 0.3),
        ]
    }

    #[test]
    fn test_all_wins() {
        let result = compute_qualification(&[MatchOdds::new(1.0, 0.0, 0.0); 3]);
        assert_eq!(result.distribution.mass(9), 1.0);
        assert!((result.total - 1.0).abs() < 1e-12);
        assert_eq!(result.status(), Some(StatusCategory::Safe));
    }

    #[test]
    fn test_all_losses() {
        let result = compute_qualification(&[MatchOdds::new(0.0, 0.0, 1.0); 3]);
        assert_eq!(result.distribution.mass(0), 1.0);
        assert_eq!(result.total, 0.0);
        assert_eq!(result.status(), Some(StatusCategory::Out));
    }

    #[test]
    fn test_zero_mass_has_no_status() {
        let result = compute_qualification(&[MatchOdds::new(0.0, 0.0, 0.0); 3]);
        assert_eq!(result.distribution.total_mass(), 0.0);
        assert_eq!(result.total, 0.0);
        assert_eq!(result.status(), None);
        assert_eq!(result.rows.len(), 9, "Rows are still reported");
    }

    #[test]
    fn test_all_draws_is_border() {
        let result = compute_qualification(&[MatchOdds::new(0.0, 1.0, 0.0); 3]);
        assert!((result.total - 0.473).abs() < 1e-12);
        assert_eq!(result.status(), Some(StatusCategory::Border));
        assert!((result.breakdown.border_qualify - 0.473).abs() < 1e-12);
        assert!((result.breakdown.border_eliminate - 0.527).abs() < 1e-12);
    }

    #[test]
    fn test_rows_descending() {
        let result = compute_qualification(&sample_matches());
        let points: Vec<u32> = result.rows.iter().map(|r| r.points).collect();
        assert_eq!(points, vec![9, 7, 6, 5, 4, 3, 2, 1, 0]);

        let row = result.row(4).unwrap();
        assert_eq!(row.advancement_rate, 0.993);
        assert_eq!(row.status, StatusCategory::Likely);
        assert_eq!(result.row(2).unwrap().status, StatusCategory::Miracle);
        assert!(result.row(8).is_none());
    }

    #[test]
    fn test_total_is_sum_of_contributions() {
        let result = compute_qualification(&sample_matches());
        let sum: f64 = result.rows.iter().map(PointsRow::contribution).sum();
        assert!((result.total - sum).abs() < 1e-12);
        assert!(result.total > 0.0 && result.total < 1.0);
    }

    #[test]
    fn test_breakdown_bands() {
        let result = compute_qualification(&sample_matches());
        let dist = &result.distribution;
        let b = result.breakdown;

        assert!((b.qualified - dist.mass_at_least(4)).abs() < 1e-12);
        assert_eq!(b.border, dist.mass(3));
        assert_eq!(b.border_qualify, dist.mass(3) * 0.473);
        assert_eq!(b.border_eliminate, dist.mass(3) * (1.0 - 0.473));
        assert!((b.eliminated - dist.mass_at_most(2)).abs() < 1e-12);
        assert!((b.qualified + b.border + b.eliminated - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_format() {
        let rates = AdvancementRates::from_pairs([(9, 1.0), (7, 1.0), (6, 0.5)]).unwrap();
        let format = GroupFormat::new(rates, StatusThresholds::default()).unwrap();

        let result = format.compute_qualification(&[MatchOdds::new(0.0, 1.0, 0.0); 3]);
        assert_eq!(result.total, 0.0, "Totals missing from the table never advance");

        let result = format.compute_qualification(&[MatchOdds::new(1.0, 0.0, 0.0); 2]);
        assert_eq!(result.distribution.mass(6), 1.0);
        assert!((result.total - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_off_sum_input_still_computes() {
        let result = compute_qualification(&[MatchOdds::new(0.6, 0.3, 0.3); 3]);
        assert!(result.distribution.total_mass() > 1.0);
        assert!(result.total.is_finite());
    }

    #[test]
    fn test_idempotent() {
        let a = compute_qualification(&sample_matches());
        let b = compute_qualification(&sample_matches());
        assert_eq!(a, b);
        assert_eq!(a.total.to_bits(), b.total.to_bits());
    }
}
