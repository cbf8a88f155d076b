//! Groupstage Core - Qualification probabilities for round-robin group stages.
//!
//! Given win/draw/loss odds for each of a team's three group matches, this
//! library computes the exact distribution of final point totals and the
//! resulting probability of advancing, using an empirical advancement rate per
//! point total. Optional Python bindings are available via PyO3 with the
//! `python` feature.

pub mod batch;
pub mod constants;
pub mod defaults;
pub mod distribution;
pub mod error;
pub mod format;
pub mod odds;
pub mod outcome;
pub mod qualification;
pub mod rates;
pub mod simulation;
pub mod status;

#[cfg(feature = "python")]
mod python;

pub use batch::{evaluate_scenarios, evaluate_scenarios_detailed, scenarios_for_group, GroupScenario, GroupTeam};
pub use constants::{ADVANCEMENT_RATES, MATCHES_PER_GROUP, REACHABLE_POINTS, SUM_TOLERANCE_PERCENT};
pub use defaults::{rank_bucket, DefaultOddsTable, RankStat};
pub use distribution::{points_distribution, PointsDistribution};
pub use error::{GroupStageError, OddsError, Result};
pub use format::GroupFormat;
pub use odds::{clamp_percentage, format_percent, validate_percentages, MatchOdds};
pub use outcome::Outcome;
pub use qualification::{compute_qualification, Breakdown, PointsRow, QualificationResult};
pub use rates::AdvancementRates;
pub use simulation::{simulate_qualification, SimulationSummary};
pub use status::{StatusCategory, StatusThresholds};
