#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::odds::MatchOdds;
use crate::outcome::Outcome;

/// Probability mass over final point totals.
///
/// Every reachable total is present, including those with zero mass.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointsDistribution {
    pub masses: BTreeMap<u32, f64>,
}

/// Distribution of total points over a sequence of independent matches.
///
/// Folds the Cartesian product of {Win, Draw, Loss} across the matches: each
/// path carries its running point total and joint probability, and every
/// completed path (3^n of them) is accumulated into the bucket for its total.
///
/// # Arguments
/// * `matches` - Outcome probabilities for each match, in any order
///
/// # Returns
/// Mass per reachable point total
pub fn points_distribution(matches: &[MatchOdds]) -> PointsDistribution {
    let paths = matches.iter().fold(vec![(0u32, 1.0f64)], |paths, odds| {
        paths
            .iter()
            .flat_map(|&(points, prob)| {
                Outcome::ALL
                    .into_iter()
                    .map(move |outcome| (points + outcome.points(), prob * odds.prob(outcome)))
            })
            .collect()
    });

    let mut masses = BTreeMap::new();
    for (points, prob) in paths {
        *masses.entry(points).or_insert(0.0) += prob;
    }

    PointsDistribution { masses }
}

impl PointsDistribution {
    /// Empirical distribution from observed point totals
    pub fn from_counts(counts: &BTreeMap<u32, u64>) -> Self {
        let total: u64 = counts.values().sum();
        if total == 0 {
            return PointsDistribution::default();
        }
        let masses = counts
            .iter()
            .map(|(&points, &n)| (points, n as f64 / total as f64))
            .collect();
        PointsDistribution { masses }
    }

    /// Mass at a point total; 0 for totals that cannot occur.
    pub fn mass(&self, points: u32) -> f64 {
        self.masses.get(&points).copied().unwrap_or(0.0)
    }

    pub fn total_mass(&self) -> f64 {
        self.masses.values().sum()
    }

    pub fn mass_at_least(&self, points: u32) -> f64 {
        self.masses.range(points..).map(|(_, &m)| m).sum()
    }

    pub fn mass_at_most(&self, points: u32) -> f64 {
        self.masses.range(..=points).map(|(_, &m)| m).sum()
    }

    /// (points, mass) in ascending point order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u32, f64)> + '_ {
        self.masses.iter().map(|(&p, &m)| (p, m))
    }

    /// (points, mass) from the highest total down
    pub fn iter_desc(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.iter().rev()
    }

    /// Reachable totals, highest first
    pub fn points(&self) -> Vec<u32> {
        self.masses.keys().rev().copied().collect()
    }

    /// Most likely point total. Ties go to the higher total.
    pub fn modal_points(&self) -> Option<u32> {
        self.iter_desc()
            .fold(None, |best: Option<(u32, f64)>, (points, mass)| match best {
                Some((_, best_mass)) if best_mass >= mass => best,
                _ => Some((points, mass)),
            })
            .map(|(points, _)| points)
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}
