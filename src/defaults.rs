//! Default match odds from world-ranking buckets.
//!
//! Historical win/draw/loss rates are published per pair of ranking buckets
//! (1-10 → 10, 11-20 → 20, ..., everything past 40 → 50). Looking up a pair
//! with no record yields the neutral 30/40/30 triple.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::constants::{RANK_BUCKET_CAP, RANK_BUCKET_WIDTH};
use crate::error::Result;
use crate::odds::MatchOdds;

/// Round a world ranking up to its bucket. Unranked teams land in the last bucket.
pub fn rank_bucket(rank: Option<u32>) -> u32 {
    match rank {
        None | Some(0) => RANK_BUCKET_CAP,
        // Cap the bucket index before scaling so huge ranks cannot overflow.
        Some(r) => r.div_ceil(RANK_BUCKET_WIDTH).min(RANK_BUCKET_CAP / RANK_BUCKET_WIDTH) * RANK_BUCKET_WIDTH,
    }
}

/// Historical record for one (team bucket, opponent bucket) pair, in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankStat {
    pub my_rank: u32,
    pub opponent_rank: u32,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DefaultOddsTable {
    stats: HashMap<(u32, u32), MatchOdds>,
}

impl DefaultOddsTable {
    pub fn new() -> Self {
        DefaultOddsTable {
            stats: HashMap::new(),
        }
    }

    /// Build from records. Later records win on duplicate bucket pairs.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RankStat>,
    {
        let mut table = DefaultOddsTable::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    /// Parse a JSON array of [`RankStat`] records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<RankStat> = serde_json::from_str(json)?;
        Ok(DefaultOddsTable::from_records(records))
    }

    pub fn read_from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
        let contents = fs::read_to_string(filepath.as_ref())?;
        let table = DefaultOddsTable::from_json_str(&contents)?;
        tracing::info!(
            path = %filepath.as_ref().display(),
            entries = table.len(),
            "loaded default odds"
        );
        Ok(table)
    }

    pub fn insert(&mut self, record: RankStat) {
        let odds = MatchOdds::from_percentages(record.win_rate, record.draw_rate, record.loss_rate);
        self.stats.insert((record.my_rank, record.opponent_rank), odds);
    }

    /// Default odds for a team against an opponent, by world ranking.
    ///
    /// Both rankings are bucketed first. Falls back to 30/40/30 when the
    /// bucket pair has no record.
    pub fn lookup(&self, team_rank: Option<u32>, opponent_rank: Option<u32>) -> MatchOdds {
        let key = (rank_bucket(team_rank), rank_bucket(opponent_rank));
        match self.stats.get(&key) {
            Some(&odds) => odds,
            None => {
                tracing::debug!(team = key.0, opponent = key.1, "no default odds, using fallback");
                MatchOdds::fallback()
            }
        }
    }

    /// Default odds against each opponent in turn
    pub fn lookup_group(&self, team_rank: Option<u32>, opponents: &[Option<u32>; 3]) -> [MatchOdds; 3] {
        opponents.map(|opponent| self.lookup(team_rank, opponent))
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
