//! Standings built from classified result codes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::result_code::{classify, Outcome, ResultKind};
use crate::Side;

/// A single pairing as reported by the API.
///
/// A negative id marks a missing player; that side is not tallied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white_id: i64,
    pub black_id: i64,
    pub code: i64,
}

impl GameRecord {
    pub fn new(white_id: i64, black_id: i64, code: i64) -> Self {
        Self {
            white_id,
            black_id,
            code,
        }
    }

    fn player(&self, side: Side) -> Option<i64> {
        let id = match side {
            Side::White => self.white_id,
            Side::Black => self.black_id,
        };
        (id >= 0).then_some(id)
    }
}

/// One player's line in the standings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct StandingRow {
    pub player_id: i64,
    pub points: f64,
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub byes: u32,
}

impl StandingRow {
    fn new(player_id: i64) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }
}

/// Tallies countable results into standings.
///
/// Rows are ordered by points (highest first), then by player id.
pub fn tally(games: &[GameRecord]) -> Vec<StandingRow> {
    let mut rows: BTreeMap<i64, StandingRow> = BTreeMap::new();

    for game in games {
        let classification = classify(game.code);
        let Some(kind) = classification.kind.filter(|_| classification.is_countable) else {
            continue;
        };

        for side in Side::BOTH {
            if kind == ResultKind::WhiteTouristBye && side == Side::Black {
                continue;
            }
            let Some(player_id) = game.player(side) else {
                continue;
            };

            let row = rows
                .entry(player_id)
                .or_insert_with(|| StandingRow::new(player_id));
            row.points += classification.points(side);
            row.games += 1;

            match (kind, classification.outcome) {
                (ResultKind::WhiteTouristBye, _) => row.byes += 1,
                (ResultKind::BothWin, _) => row.wins += 1,
                (_, Outcome::Draw) => row.draws += 1,
                (_, outcome) if outcome.winner() == Some(side) => row.wins += 1,
                (_, outcome) if outcome.winner() == Some(side.opposite()) => row.losses += 1,
                _ => {}
            }
        }
    }

    let mut standings: Vec<StandingRow> = rows.into_values().collect();
    standings.sort_by(|a, b| {
        b.points
            .total_cmp(&a.points)
            .then(a.player_id.cmp(&b.player_id))
    });
    standings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(standings: &[StandingRow], player_id: i64) -> StandingRow {
        *standings
            .iter()
            .find(|r| r.player_id == player_id)
            .expect("player should be in standings")
    }

    #[test]
    fn empty_tally() {
        assert!(tally(&[]).is_empty());
    }

    #[test]
    fn round_robin_of_three() {
        let games = [
            GameRecord::new(1, 2, 1),
            GameRecord::new(2, 3, 3),
            GameRecord::new(3, 1, 1),
        ];
        let standings = tally(&games);

        assert_eq!(standings.len(), 3);
        let ids: Vec<i64> = standings.iter().map(|r| r.player_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        let third = row(&standings, 3);
        assert_eq!(third.points, 1.5);
        assert_eq!((third.wins, third.draws, third.losses), (1, 1, 0));

        let first = row(&standings, 1);
        assert_eq!(first.points, 1.0);
        assert_eq!((first.wins, first.draws, first.losses), (1, 0, 1));
    }

    #[test]
    fn non_countable_games_are_ignored() {
        let games = [
            GameRecord::new(1, 2, 0),
            GameRecord::new(1, 2, 10),
            GameRecord::new(1, 2, 8),
            GameRecord::new(1, 2, 6),
            GameRecord::new(1, 2, 99),
        ];
        assert!(tally(&games).is_empty());
    }

    #[test]
    fn tourist_bye_counts_for_white_only() {
        let standings = tally(&[GameRecord::new(5, -1, 7)]);
        assert_eq!(standings.len(), 1);
        let bye = row(&standings, 5);
        assert_eq!(bye.points, 0.5);
        assert_eq!(bye.byes, 1);
        assert_eq!(bye.games, 1);
    }

    #[test]
    fn missing_player_side_is_skipped() {
        let standings = tally(&[GameRecord::new(4, -1, 4)]);
        assert_eq!(standings.len(), 1);
        assert_eq!(row(&standings, 4).points, 1.0);
        assert_eq!(row(&standings, 4).wins, 1);
    }

    #[test]
    fn both_win_is_a_win_for_both() {
        let standings = tally(&[GameRecord::new(1, 2, 29)]);
        assert_eq!(row(&standings, 1).points, 3.0);
        assert_eq!(row(&standings, 2).points, 3.0);
        assert_eq!(row(&standings, 1).wins, 1);
        assert_eq!(row(&standings, 2).wins, 1);
    }

    #[test]
    fn system_a_points_accumulate() {
        let games = [GameRecord::new(1, 2, 21), GameRecord::new(2, 1, 23)];
        let standings = tally(&games);
        assert_eq!(row(&standings, 1).points, 5.0);
        assert_eq!(row(&standings, 2).points, 3.0);
    }
}
