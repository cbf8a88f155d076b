/// Number of matches each team plays in a group
pub const MATCHES_PER_GROUP: usize = 3;

/// Points awarded for a win, a draw and a loss
pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;
pub const LOSS_POINTS: u32 = 0;

/// Point totals reachable from three matches, highest first (8 is unreachable)
pub const REACHABLE_POINTS: [u32; 9] = [9, 7, 6, 5, 4, 3, 2, 1, 0];

/// Probability of advancing given a final point total (2026 World Cup format).
///
/// Keyed by point total; 8 has no entry because it cannot occur.
pub const ADVANCEMENT_RATES: [(u32, f64); 9] = [
    (9, 1.000),
    (7, 1.000),
    (6, 1.000),
    (5, 1.000),
    (4, 0.993),
    (3, 0.473),
    (2, 0.025),
    (1, 0.000),
    (0, 0.000),
];

/// Allowed deviation of a win/draw/loss triple from 100, in percentage points
pub const SUM_TOLERANCE_PERCENT: f64 = 0.1;

/// Neutral win/draw/loss percentages used when no default is known
pub const FALLBACK_ODDS_PERCENT: (f64, f64, f64) = (30.0, 40.0, 30.0);

/// World ranking bucket width and the bucket used for everything below it
pub const RANK_BUCKET_WIDTH: u32 = 10;
pub const RANK_BUCKET_CAP: u32 = 50;

/// Two-sided confidence level reported by the Monte Carlo cross-check
pub const CONFIDENCE_LEVEL: f64 = 0.95;
