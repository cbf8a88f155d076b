#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{FALLBACK_ODDS_PERCENT, SUM_TOLERANCE_PERCENT};
use crate::error::OddsError;
use crate::outcome::Outcome;

/// Win/draw/loss probabilities for one match, as fractions in [0, 1].
///
/// The three values are expected to sum to 1, but nothing here enforces it:
/// the engine computes on whatever it is given, and callers decide whether to
/// warn (see [`validate_percentages`]).
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchOdds {
    pub win: f64,
    pub draw: f64,
    pub loss: f64,
}

impl MatchOdds {
    pub fn new(win: f64, draw: f64, loss: f64) -> Self {
        MatchOdds { win, draw, loss }
    }

    /// Build from percentages, clamping each to [0, 100] first.
    pub fn from_percentages(win: f64, draw: f64, loss: f64) -> Self {
        MatchOdds {
            win: clamp_percentage(win) / 100.0,
            draw: clamp_percentage(draw) / 100.0,
            loss: clamp_percentage(loss) / 100.0,
        }
    }

    /// Build from percentages and report whether the clamped values total 100.
    ///
    /// The odds are returned either way; the warning is for display only.
    pub fn from_percentages_checked(win: f64, draw: f64, loss: f64) -> (Self, Option<OddsError>) {
        let (w, d, l) = (clamp_percentage(win), clamp_percentage(draw), clamp_percentage(loss));
        let warning = validate_percentages(w, d, l).err();
        if let Some(err) = &warning {
            tracing::warn!(win = w, draw = d, loss = l, "{}", err);
        }
        (MatchOdds::from_percentages(w, d, l), warning)
    }

    /// The neutral 30/40/30 triple used when nothing better is known
    pub fn fallback() -> Self {
        let (w, d, l) = FALLBACK_ODDS_PERCENT;
        MatchOdds::from_percentages(w, d, l)
    }

    /// Probability of the given outcome
    pub fn prob(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Win => self.win,
            Outcome::Draw => self.draw,
            Outcome::Loss => self.loss,
        }
    }

    pub fn sum(&self) -> f64 {
        self.win + self.draw + self.loss
    }

    /// Back to percentages (win, draw, loss)
    pub fn to_percentages(&self) -> (f64, f64, f64) {
        (self.win * 100.0, self.draw * 100.0, self.loss * 100.0)
    }
}

/// Clamp a user-entered percentage into [0, 100]. NaN becomes 0.
pub fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Check that a win/draw/loss triple in percent totals 100 within 0.1 points.
pub fn validate_percentages(win: f64, draw: f64, loss: f64) -> Result<(), OddsError> {
    let sum = win + draw + loss;
    if (sum - 100.0).abs() > SUM_TOLERANCE_PERCENT {
        Err(OddsError::SumMismatch { sum })
    } else {
        Ok(())
    }
}

/// Format a probability as a percentage with one decimal place, e.g. `47.3%`.
pub fn format_percent(prob: f64) -> String {
    format!("{:.1}%", prob * 100.0)
}
