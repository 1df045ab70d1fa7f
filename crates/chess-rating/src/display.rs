//! Canonical display strings for game results.
//!
//! A result renders as `"<white> - <black>"` with halves written as `½`,
//! followed by at most one marker:
//!
//! - [`WALKOVER_MARKER`] for walkovers, including games where one player id is
//!   the negative "missing player" sentinel,
//! - [`BYE_MARKER`] for tourist byes,
//! - [`ADJUDICATED_MARKER`] for adjudicated double wins and voided games.
//!
//! Codes with nothing to show render as [`NO_RESULT`].

use crate::result_code::{classify, DisplayKind};

pub const WALKOVER_MARKER: &str = "(wo)";
pub const BYE_MARKER: &str = "(bye)";
pub const ADJUDICATED_MARKER: &str = "(adj)";
pub const NO_RESULT: &str = "-";

/// Formats a point value, writing halves as `½` (`0.5` is `½`, `1.5` is `1½`).
///
/// Values that are not whole or half points are written with one decimal.
pub fn format_points(points: f64) -> String {
    let halves = points * 2.0;
    if halves.fract() != 0.0 || !halves.is_finite() {
        return format!("{points:.1}");
    }

    let halves = halves as i64;
    let whole = halves / 2;
    match (whole, halves % 2 != 0) {
        (0, true) if halves < 0 => "-½".to_string(),
        (0, true) => "½".to_string(),
        (w, true) => format!("{w}½"),
        (w, false) => w.to_string(),
    }
}

fn is_missing_player(id: Option<i64>) -> bool {
    id.is_some_and(|id| id < 0)
}

/// Formats a result for display.
///
/// Points are supplied by the caller, so standings overrides render as
/// given; the code only decides the marker.
pub fn format_result(
    code: i64,
    white_points: f64,
    black_points: f64,
    white_id: Option<i64>,
    black_id: Option<i64>,
) -> String {
    let classification = classify(code);

    let marker = match classification.display_kind {
        DisplayKind::None => return NO_RESULT.to_string(),
        DisplayKind::TouristBye => Some(BYE_MARKER),
        DisplayKind::Adjudicated => Some(ADJUDICATED_MARKER),
        DisplayKind::Walkover => Some(WALKOVER_MARKER),
        DisplayKind::Score
            if classification.is_countable
                && (is_missing_player(white_id) || is_missing_player(black_id)) =>
        {
            Some(WALKOVER_MARKER)
        }
        DisplayKind::Score => None,
    };

    let score = format!(
        "{} - {}",
        format_points(white_points),
        format_points(black_points)
    );
    match marker {
        Some(marker) => format!("{score} {marker}"),
        None => score,
    }
}

/// Formats a result using the points [`classify`] allocates for the code.
pub fn format_classified(code: i64, white_id: Option<i64>, black_id: Option<i64>) -> String {
    let classification = classify(code);
    format_result(
        code,
        classification.white_points,
        classification.black_points,
        white_id,
        black_id,
    )
}
