//! Elo rating calculation.
//!
//! This module provides expected score, per-game rating change, performance
//! rating and tournament aggregates. Rating differences are capped at
//! [`MAX_RATING_DIFFERENCE`] points before entering the expected-score
//! formula (the federation's 400-point rule).

use serde::{Deserialize, Serialize};

use crate::RatingError;

/// Largest rating difference the expected-score formula sees.
pub const MAX_RATING_DIFFERENCE: i64 = 400;

/// Offset from the average opponent rating for a perfect (or zero) score.
pub const PERFECT_SCORE_OFFSET: f64 = 800.0;

/// Rounds to one decimal place, halves away from zero.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate expected score for a player against an opponent.
///
/// Returns a value in `[0, 1]`. Differences beyond 400 points are treated as
/// exactly 400.
pub fn expected_score(rating: i32, opponent_rating: i32) -> f64 {
    let diff = (i64::from(opponent_rating) - i64::from(rating))
        .clamp(-MAX_RATING_DIFFERENCE, MAX_RATING_DIFFERENCE);
    1.0 / (1.0 + 10_f64.powf(diff as f64 / 400.0))
}

/// Calculate the rating change from a single game.
///
/// # Arguments
/// * `rating` - Current rating
/// * `opponent_rating` - Opponent's rating
/// * `actual` - Actual score (1.0 = win, 0.5 = draw, 0.0 = loss)
/// * `k_factor` - K-factor of the player being updated
///
/// The result is rounded to one decimal place.
pub fn rating_change(rating: i32, opponent_rating: i32, actual: f64, k_factor: u32) -> f64 {
    let expected = expected_score(rating, opponent_rating);
    round_tenth(f64::from(k_factor) * (actual - expected))
}

/// Calculate the performance rating of a set of results.
///
/// `total_score` is the sum of actual scores against `opponent_ratings`; it is
/// clamped to `[0, opponent_ratings.len()]`. A perfect score yields the average
/// opponent rating plus 800, a zero score the average minus 800. Returns 0
/// when there are no opponents.
pub fn performance_rating(opponent_ratings: &[i32], total_score: f64) -> i32 {
    if opponent_ratings.is_empty() {
        return 0;
    }

    let count = opponent_ratings.len() as f64;
    let average = opponent_ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / count;
    let fraction = (total_score / count).clamp(0.0, 1.0);

    let performance = if fraction >= 1.0 {
        average + PERFECT_SCORE_OFFSET
    } else if fraction <= 0.0 {
        average - PERFECT_SCORE_OFFSET
    } else {
        average - 400.0 * ((1.0 / fraction) - 1.0).log10()
    };
    performance.round() as i32
}

/// One game of a tournament, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// `None`, zero or negative when the opponent is unrated.
    #[serde(default)]
    pub opponent_rating: Option<i32>,
    /// 1.0 = win, 0.5 = draw, 0.0 = loss.
    pub actual_score: f64,
}

impl MatchResult {
    pub fn new(opponent_rating: Option<i32>, actual_score: f64) -> Self {
        Self {
            opponent_rating,
            actual_score,
        }
    }

    fn rated_opponent(&self) -> Option<i32> {
        self.opponent_rating.filter(|r| *r > 0)
    }
}

/// Aggregate rating figures for one player's tournament.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TournamentRatingStats {
    /// Sum of per-game rating changes, one decimal place.
    pub total_change: f64,
    pub performance_rating: i32,
    pub games_with_rated_opponents: usize,
}

/// Calculate a player's rating change and performance over a tournament.
///
/// Games against unrated opponents are skipped. The running total is rounded
/// to one decimal place after each game.
pub fn tournament_stats(matches: &[MatchResult], rating: i32, k_factor: u32) -> TournamentRatingStats {
    let rated: Vec<(i32, f64)> = matches
        .iter()
        .filter_map(|m| m.rated_opponent().map(|r| (r, m.actual_score)))
        .collect();

    if rated.is_empty() {
        return TournamentRatingStats::default();
    }

    let total_change = rated.iter().fold(0.0, |total, (opponent, score)| {
        round_tenth(total + rating_change(rating, *opponent, *score, k_factor))
    });
    let opponents: Vec<i32> = rated.iter().map(|(r, _)| *r).collect();
    let total_score: f64 = rated.iter().map(|(_, s)| s).sum();

    TournamentRatingStats {
        total_change,
        performance_rating: performance_rating(&opponents, total_score),
        games_with_rated_opponents: rated.len(),
    }
}

/// Parses a single game score: `1`, `0`, or a draw written as `0.5`, `½`,
/// `1/2` or `=`.
pub fn parse_score(text: &str) -> Result<f64, RatingError> {
    match text.trim() {
        "1" | "1.0" | "+" => Ok(1.0),
        "0" | "0.0" | "-" => Ok(0.0),
        "0.5" | ".5" | "½" | "1/2" | "=" => Ok(0.5),
        other => Err(RatingError::InvalidScore(other.to_string())),
    }
}
