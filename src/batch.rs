use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::MATCHES_PER_GROUP;
use crate::defaults::DefaultOddsTable;
use crate::error::{GroupStageError, Result};
use crate::format::GroupFormat;
use crate::odds::MatchOdds;
use crate::qualification::QualificationResult;

/// One team's view of its group: odds against each of its three opponents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupScenario {
    pub team: String,
    pub matches: [MatchOdds; MATCHES_PER_GROUP],
}

/// A team entry in a group draw
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupTeam {
    pub code: String,
    pub rank: Option<u32>,
}

/// Build one scenario per team in a four-team group.
///
/// Each team's odds against the other three come from the default-odds
/// table, so the scenarios describe the group before any user edits.
pub fn scenarios_for_group(table: &DefaultOddsTable, teams: &[GroupTeam]) -> Result<Vec<GroupScenario>> {
    if teams.len() != MATCHES_PER_GROUP + 1 {
        return Err(GroupStageError::InvalidParameter(format!(
            "a group needs {} teams, got {}",
            MATCHES_PER_GROUP + 1,
            teams.len()
        )));
    }

    let scenarios = teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            let ranks: Vec<Option<u32>> = teams
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, opponent)| opponent.rank)
                .collect();
            GroupScenario {
                team: team.code.clone(),
                matches: table.lookup_group(team.rank, &[ranks[0], ranks[1], ranks[2]]),
            }
        })
        .collect();

    Ok(scenarios)
}

/// Calculate qualification probability for every scenario.
///
/// Uses parallel processing; each scenario is evaluated independently, so the
/// result matches a sequential pass exactly.
///
/// # Arguments
/// * `format` - Advancement rates and thresholds to evaluate against
/// * `scenarios` - One entry per team
///
/// # Returns
/// Map of team names to total qualification probability. Team names should be
/// unique; when two scenarios share a name the later one wins. Use
/// [`evaluate_scenarios_detailed`] to keep every scenario.
pub fn evaluate_scenarios(format: &GroupFormat, scenarios: &[GroupScenario]) -> HashMap<String, f64> {
    let totals: HashMap<String, f64> = evaluate_scenarios_detailed(format, scenarios)
        .into_iter()
        .map(|(team, result)| (team, result.total))
        .collect();

    if totals.len() < scenarios.len() {
        tracing::warn!(
            scenarios = scenarios.len(),
            teams = totals.len(),
            "duplicate team names, keeping the last scenario for each"
        );
    }
    totals
}

/// Like [`evaluate_scenarios`], keeping the full result and the input order.
pub fn evaluate_scenarios_detailed(
    format: &GroupFormat,
    scenarios: &[GroupScenario],
) -> Vec<(String, QualificationResult)> {
    let results: Vec<_> = scenarios
        .par_iter()
        .map(|scenario| (scenario.team.clone(), format.compute_qualification(&scenario.matches)))
        .collect();

    tracing::debug!(scenarios = results.len(), "evaluated group scenarios");
    results
}
