//! End-to-end tests of the public API: caller-side input handling through to
//! the qualification result.

use groupstage_core::{
    compute_qualification, evaluate_scenarios, format_percent, scenarios_for_group, simulate_qualification,
    DefaultOddsTable, GroupFormat, GroupTeam, MatchOdds, StatusCategory,
};

#[test]
fn test_all_wins_scenario() {
    let result = compute_qualification(&[MatchOdds::new(1.0, 0.0, 0.0); 3]);

    assert_eq!(result.distribution.mass(9), 1.0);
    for row in &result.rows[1..] {
        assert_eq!(row.probability, 0.0, "Only 9 points should carry mass");
    }
    assert_eq!(format_percent(result.total), "100.0%");
    assert_eq!(result.status(), Some(StatusCategory::Safe));
}

#[test]
fn test_all_losses_scenario() {
    let result = compute_qualification(&[MatchOdds::new(0.0, 0.0, 1.0); 3]);

    assert_eq!(result.distribution.mass(0), 1.0);
    assert_eq!(format_percent(result.total), "0.0%");
    assert_eq!(result.status(), Some(StatusCategory::Out));
}

#[test]
fn test_mixed_scenario() {
    let matches = [
        MatchOdds::new(0.5, 0.3, 0.2),
        MatchOdds::new(0.4, 0.3, 0.3),
        MatchOdds::new(0.3, 0.4, 0.3),
    ];
    let result = compute_qualification(&matches);

    assert_eq!(result.distribution.mass(9), 0.5 * 0.4 * 0.3);
    let sum: f64 = result.rows.iter().map(|row| row.probability).sum();
    assert!((sum - 1.0).abs() < 1e-9);

    let statuses: Vec<StatusCategory> = result.rows.iter().map(|row| row.status).collect();
    assert_eq!(
        statuses,
        vec![
            StatusCategory::Safe,
            StatusCategory::Safe,
            StatusCategory::Safe,
            StatusCategory::Safe,
            StatusCategory::Likely,
            StatusCategory::Border,
            StatusCategory::Miracle,
            StatusCategory::Out,
            StatusCategory::Out,
        ]
    );
}

#[test]
fn test_percentage_input_flow() {
    // A row that doesn't add up still computes; the caller only shows a warning.
    let rows = [(50.0, 30.0, 20.0), (40.0, 30.0, 40.0), (30.0, 40.0, 30.0)];
    let mut warnings = Vec::new();
    let mut matches = [MatchOdds::fallback(); 3];
    for (i, &(w, d, l)) in rows.iter().enumerate() {
        let (odds, warning) = MatchOdds::from_percentages_checked(w, d, l);
        matches[i] = odds;
        if let Some(warning) = warning {
            warnings.push((i, warning.to_string()));
        }
    }

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].0, 1);
    assert!(warnings[0].1.contains("110.0"));

    let result = compute_qualification(&matches);
    assert!(result.distribution.total_mass() > 1.0, "Bad input is reflected, not suppressed");
}

#[test]
fn test_group_draw_pipeline() {
    let table = DefaultOddsTable::from_json_str(
        r#"[
            {"my_rank": 10, "opponent_rank": 20, "win_rate": 55, "draw_rate": 25, "loss_rate": 20},
            {"my_rank": 20, "opponent_rank": 10, "win_rate": 20, "draw_rate": 25, "loss_rate": 55}
        ]"#,
    )
    .unwrap();
    let teams: Vec<GroupTeam> = [("AR", Some(1)), ("JP", Some(15)), ("XA", None), ("XB", None)]
        .into_iter()
        .map(|(code, rank)| GroupTeam {
            code: code.to_string(),
            rank,
        })
        .collect();

    let scenarios = scenarios_for_group(&table, &teams).unwrap();
    let totals = evaluate_scenarios(&GroupFormat::default(), &scenarios);

    assert_eq!(totals.len(), 4);
    assert!(totals["AR"] > totals["JP"]);
    assert!((totals["XA"] - totals["XB"]).abs() < 1e-12, "Identical fallback odds give identical results");
}

#[test]
fn test_simulation_agrees_with_engine() {
    let matches = [
        MatchOdds::new(0.45, 0.3, 0.25),
        MatchOdds::new(0.35, 0.3, 0.35),
        MatchOdds::new(0.2, 0.3, 0.5),
    ];
    let format = GroupFormat::default();
    let exact = format.compute_qualification(&matches).total;
    let sim = simulate_qualification(&format, &matches, 50_000, Some(2026)).unwrap();

    assert!((sim.estimate - exact).abs() < 0.015, "sim={} exact={}", sim.estimate, exact);
}
