//! K-factor resolution under federation rules.
//!
//! Rules, first match wins:
//!
//! 1. No rating type or no rating: [`DEFAULT_K`].
//! 2. Juniors rated below [`JUNIOR_RATING_CEILING`]: [`JUNIOR_K`]. A player is a
//!    junior through the whole calendar year in which they turn
//!    [`JUNIOR_MAX_AGE`].
//! 3. Rapid and blitz: [`TOP_K`] from [`TOP_RATING_FLOOR`], otherwise
//!    [`DEFAULT_K`]. Stored K-factors only apply to standard play.
//! 4. Standard and national: the stored K when present and non-zero, otherwise
//!    the same rating bands as rapid and blitz.
//!
//! The as-of date is always supplied by the caller; nothing here reads the
//! clock.

use chrono::{Datelike, NaiveDate};

use crate::{RatingRecord, RatingSelection, RatingType};

pub const DEFAULT_K: u32 = 20;
pub const JUNIOR_K: u32 = 40;
pub const TOP_K: u32 = 10;

/// Juniors at or above this rating use the regular bands.
pub const JUNIOR_RATING_CEILING: i32 = 2300;
/// Ratings at or above this use [`TOP_K`].
pub const TOP_RATING_FLOOR: i32 = 2400;
pub const JUNIOR_MAX_AGE: i32 = 18;

/// Whether a player counts as a junior on `as_of`.
///
/// Age is measured at the end of the calendar year of `as_of`.
pub fn is_junior(birth_date: NaiveDate, as_of: NaiveDate) -> bool {
    as_of.year() - birth_date.year() <= JUNIOR_MAX_AGE
}

fn band(rating: i32) -> u32 {
    if rating >= TOP_RATING_FLOOR {
        TOP_K
    } else {
        DEFAULT_K
    }
}

/// Resolves the K-factor for a rating update.
///
/// # Arguments
///
/// * `rating_type` - Which rating is being updated
/// * `rating` - The player's current rating of that type; zero or negative counts as absent
/// * `stored_k` - Per-player standard K-factor override
/// * `birth_date` - Player's birth date, for the junior rule
/// * `as_of` - Date the result counts on; without it the junior rule is skipped
pub fn resolve(
    rating_type: Option<RatingType>,
    rating: Option<i32>,
    stored_k: Option<u32>,
    birth_date: Option<NaiveDate>,
    as_of: Option<NaiveDate>,
) -> u32 {
    let (Some(rating_type), Some(rating)) = (rating_type, rating.filter(|r| *r > 0)) else {
        return DEFAULT_K;
    };

    if let (Some(birth_date), Some(as_of)) = (birth_date, as_of) {
        if rating < JUNIOR_RATING_CEILING && is_junior(birth_date, as_of) {
            return JUNIOR_K;
        }
    }

    if rating_type.is_fast() {
        return band(rating);
    }
    stored_k.filter(|k| *k > 0).unwrap_or_else(|| band(rating))
}

/// Resolves the K-factor for the rating chosen from `record`.
///
/// The record's stored K is only passed on for standard play.
pub fn resolve_for_record(
    record: &RatingRecord,
    selection: &RatingSelection,
    as_of: Option<NaiveDate>,
) -> u32 {
    let stored_k = match selection.rating_type {
        Some(RatingType::Standard) => record.stored_k(),
        _ => None,
    };
    resolve(
        selection.rating_type,
        selection.rating,
        stored_k,
        record.birth_date,
        as_of,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{select, RatingAlgorithm};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn missing_inputs_use_default() {
        assert_eq!(resolve(None, Some(2000), None, None, None), DEFAULT_K);
        assert_eq!(resolve(Some(RatingType::Standard), None, Some(10), None, None), DEFAULT_K);
        assert_eq!(resolve(Some(RatingType::Standard), Some(0), None, None, None), DEFAULT_K);
    }

    #[test]
    fn standard_bands() {
        assert_eq!(resolve(Some(RatingType::Standard), Some(2399), None, None, None), 20);
        assert_eq!(resolve(Some(RatingType::Standard), Some(2400), None, None, None), 10);
    }

    #[test]
    fn stored_k_applies_to_standard() {
        assert_eq!(resolve(Some(RatingType::Standard), Some(2500), Some(40), None, None), 40);
        assert_eq!(resolve(Some(RatingType::National), Some(1800), Some(15), None, None), 15);
        assert_eq!(resolve(Some(RatingType::Standard), Some(2500), Some(0), None, None), 10);
    }

    #[test]
    fn stored_k_ignored_for_fast_play() {
        assert_eq!(resolve(Some(RatingType::Rapid), Some(2400), Some(40), None, None), 10);
        assert_eq!(resolve(Some(RatingType::Blitz), Some(2000), Some(40), None, None), 20);
    }

    #[test]
    fn junior_through_year_of_eighteenth_birthday() {
        let as_of = date(2024, 3, 1);
        // Turns 18 in December 2024.
        let birth = date(2006, 12, 31);
        assert_eq!(
            resolve(Some(RatingType::Standard), Some(2000), None, Some(birth), Some(as_of)),
            JUNIOR_K
        );
        // Turned 18 in 2023, so 19 by the end of 2024.
        let birth = date(2005, 1, 1);
        assert_eq!(
            resolve(Some(RatingType::Standard), Some(2000), None, Some(birth), Some(as_of)),
            DEFAULT_K
        );
    }

    #[test]
    fn junior_rule_beats_stored_k_and_fast_play() {
        let as_of = date(2024, 6, 1);
        let birth = date(2012, 5, 5);
        assert_eq!(
            resolve(Some(RatingType::Standard), Some(1500), Some(20), Some(birth), Some(as_of)),
            JUNIOR_K
        );
        assert_eq!(
            resolve(Some(RatingType::Blitz), Some(1500), None, Some(birth), Some(as_of)),
            JUNIOR_K
        );
    }

    #[test]
    fn strong_juniors_use_regular_bands() {
        let as_of = date(2024, 6, 1);
        let birth = date(2010, 1, 1);
        assert_eq!(
            resolve(Some(RatingType::Standard), Some(2300), None, Some(birth), Some(as_of)),
            DEFAULT_K
        );
        assert_eq!(
            resolve(Some(RatingType::Rapid), Some(2450), None, Some(birth), Some(as_of)),
            TOP_K
        );
    }

    #[test]
    fn junior_rule_needs_as_of_date() {
        let birth = date(2015, 1, 1);
        assert_eq!(
            resolve(Some(RatingType::Standard), Some(1400), None, Some(birth), None),
            DEFAULT_K
        );
    }

    #[test]
    fn is_junior_boundaries() {
        assert!(is_junior(date(2006, 1, 1), date(2024, 12, 31)));
        assert!(!is_junior(date(2005, 12, 31), date(2024, 1, 1)));
    }

    #[test]
    fn record_stored_k_only_for_standard() {
        let record = RatingRecord::standard(2450)
            .with_rating(RatingType::Rapid, 2450)
            .with_k(40);

        let standard = select(Some(&record), Some(RatingAlgorithm::Standard));
        assert_eq!(resolve_for_record(&record, &standard, None), 40);

        let rapid = select(Some(&record), Some(RatingAlgorithm::Rapid));
        assert_eq!(resolve_for_record(&record, &rapid, None), TOP_K);
    }

    #[test]
    fn record_without_selection_uses_default() {
        let record = RatingRecord::default();
        let selection = select(Some(&record), None);
        assert_eq!(resolve_for_record(&record, &selection, None), DEFAULT_K);
    }
}
