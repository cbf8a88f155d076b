use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::constants::{MATCHES_PER_GROUP, REACHABLE_POINTS, SUM_TOLERANCE_PERCENT};
use crate::defaults::rank_bucket;
use crate::distribution::PointsDistribution;
use crate::odds::MatchOdds;
use crate::qualification::{compute_qualification, Breakdown, PointsRow, QualificationResult};
use crate::rates::AdvancementRates;
use crate::status::StatusCategory;

/// Qualification probability for three (win, draw, loss) tuples.
#[pyfunction]
#[pyo3(name = "compute_qualification")]
fn py_compute_qualification(matches: Vec<(f64, f64, f64)>) -> PyResult<QualificationResult> {
    let odds: [MatchOdds; MATCHES_PER_GROUP] = matches
        .iter()
        .map(|&(w, d, l)| MatchOdds::new(w, d, l))
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|v: Vec<MatchOdds>| {
            PyValueError::new_err(format!("expected {} matches, got {}", MATCHES_PER_GROUP, v.len()))
        })?;
    Ok(compute_qualification(&odds))
}

/// Convert user-entered percentages, returning the odds and any sum warning.
#[pyfunction]
#[pyo3(name = "odds_from_percentages")]
fn py_odds_from_percentages(win: f64, draw: f64, loss: f64) -> (MatchOdds, Option<String>) {
    let (odds, warning) = MatchOdds::from_percentages_checked(win, draw, loss);
    (odds, warning.map(|w| w.to_string()))
}

#[pyfunction]
#[pyo3(name = "rank_bucket", signature = (rank = None))]
fn py_rank_bucket(rank: Option<u32>) -> u32 {
    rank_bucket(rank)
}

/// Python module definition
#[pymodule]
fn groupstage_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<MatchOdds>()?;
    m.add_class::<PointsDistribution>()?;
    m.add_class::<PointsRow>()?;
    m.add_class::<Breakdown>()?;
    m.add_class::<QualificationResult>()?;
    m.add_class::<StatusCategory>()?;

    // Functions
    m.add_function(wrap_pyfunction!(py_compute_qualification, m)?)?;
    m.add_function(wrap_pyfunction!(py_odds_from_percentages, m)?)?;
    m.add_function(wrap_pyfunction!(py_rank_bucket, m)?)?;

    // Constants
    let rates: Vec<(u32, f64)> = AdvancementRates::default().iter().rev().collect();
    m.add("ADVANCEMENT_RATES", rates)?;
    m.add("REACHABLE_POINTS", REACHABLE_POINTS.to_vec())?;
    m.add("SUM_TOLERANCE_PERCENT", SUM_TOLERANCE_PERCENT)?;

    Ok(())
}
