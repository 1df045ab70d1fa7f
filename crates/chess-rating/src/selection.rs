//! Choosing which rating applies to a player.
//!
//! Each tournament group is configured with a [`RatingAlgorithm`] that decides
//! which figure from a [`RatingRecord`] is used for pairing, seeding and
//! rating calculations. Fallback chains are plain data: a static, ordered
//! slice of [`RatingType`]s tried front to back.

use serde::{Deserialize, Serialize};

use crate::{RatingError, RatingRecord, RatingType};

const STANDARD_RAPID_BLITZ: &[RatingType] =
    &[RatingType::Standard, RatingType::Rapid, RatingType::Blitz];
const RAPID_STANDARD_BLITZ: &[RatingType] =
    &[RatingType::Rapid, RatingType::Standard, RatingType::Blitz];
const RAPID_BLITZ_STANDARD: &[RatingType] =
    &[RatingType::Rapid, RatingType::Blitz, RatingType::Standard];
const BLITZ_RAPID_STANDARD: &[RatingType] =
    &[RatingType::Blitz, RatingType::Rapid, RatingType::Standard];

/// Rating selection strategy configured per tournament group.
///
/// The discriminants are the integer codes used by the federation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
#[repr(u8)]
pub enum RatingAlgorithm {
    /// Standard rating only.
    #[default]
    Standard = 0,
    /// Rapid rating only.
    Rapid = 1,
    /// Blitz rating only.
    Blitz = 2,
    /// Standard rating if present, otherwise the national rating.
    EloOrNational = 3,
    /// National rating only.
    National = 4,
    /// The higher of standard and national.
    MaxEloNational = 5,
    /// Players are treated as unrated.
    NoRating = 6,
    StandardRapidBlitz = 7,
    RapidStandardBlitz = 8,
    RapidBlitzStandard = 9,
    BlitzRapidStandard = 10,
}

/// How an algorithm picks its rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Single(RatingType),
    Chain(&'static [RatingType]),
    EloOrNational,
    MaxEloNational,
    NoRating,
}

impl RatingAlgorithm {
    /// All algorithms in code order.
    pub const ALL: [RatingAlgorithm; 11] = [
        RatingAlgorithm::Standard,
        RatingAlgorithm::Rapid,
        RatingAlgorithm::Blitz,
        RatingAlgorithm::EloOrNational,
        RatingAlgorithm::National,
        RatingAlgorithm::MaxEloNational,
        RatingAlgorithm::NoRating,
        RatingAlgorithm::StandardRapidBlitz,
        RatingAlgorithm::RapidStandardBlitz,
        RatingAlgorithm::RapidBlitzStandard,
        RatingAlgorithm::BlitzRapidStandard,
    ];

    /// The integer code used by the API.
    #[inline]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Converts an optional API code, defaulting to [`RatingAlgorithm::Standard`]
    /// when the code is absent or unknown.
    pub fn from_code(code: Option<i64>) -> Self {
        match code.map(Self::try_from) {
            Some(Ok(algorithm)) => algorithm,
            Some(Err(err)) => {
                tracing::debug!(%err, "falling back to standard rating algorithm");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Returns the selection strategy for this algorithm.
    pub const fn strategy(self) -> Strategy {
        match self {
            RatingAlgorithm::Standard => Strategy::Single(RatingType::Standard),
            RatingAlgorithm::Rapid => Strategy::Single(RatingType::Rapid),
            RatingAlgorithm::Blitz => Strategy::Single(RatingType::Blitz),
            RatingAlgorithm::National => Strategy::Single(RatingType::National),
            RatingAlgorithm::EloOrNational => Strategy::EloOrNational,
            RatingAlgorithm::MaxEloNational => Strategy::MaxEloNational,
            RatingAlgorithm::NoRating => Strategy::NoRating,
            RatingAlgorithm::StandardRapidBlitz => Strategy::Chain(STANDARD_RAPID_BLITZ),
            RatingAlgorithm::RapidStandardBlitz => Strategy::Chain(RAPID_STANDARD_BLITZ),
            RatingAlgorithm::RapidBlitzStandard => Strategy::Chain(RAPID_BLITZ_STANDARD),
            RatingAlgorithm::BlitzRapidStandard => Strategy::Chain(BLITZ_RAPID_STANDARD),
        }
    }
}

impl TryFrom<i64> for RatingAlgorithm {
    type Error = RatingError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(RatingError::UnknownAlgorithm(code))
    }
}

impl From<RatingAlgorithm> for i64 {
    fn from(algorithm: RatingAlgorithm) -> Self {
        algorithm.code()
    }
}

/// The rating chosen for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RatingSelection {
    pub rating: Option<i32>,
    pub rating_type: Option<RatingType>,
    /// Set when the rating came from a later entry of a fallback chain.
    pub is_fallback: bool,
}

impl RatingSelection {
    /// No rating selected.
    pub const NONE: RatingSelection = RatingSelection {
        rating: None,
        rating_type: None,
        is_fallback: false,
    };

    fn found(rating: i32, rating_type: RatingType, is_fallback: bool) -> Self {
        Self {
            rating: Some(rating),
            rating_type: Some(rating_type),
            is_fallback,
        }
    }
}

/// Selects the rating that applies to `record` under `algorithm`.
///
/// An absent algorithm means [`RatingAlgorithm::Standard`]. An absent record,
/// or a record without the required figures, yields [`RatingSelection::NONE`].
pub fn select(record: Option<&RatingRecord>, algorithm: Option<RatingAlgorithm>) -> RatingSelection {
    let algorithm = algorithm.unwrap_or_default();
    let Some(record) = record else {
        return RatingSelection::NONE;
    };

    let selection = match algorithm.strategy() {
        Strategy::NoRating => RatingSelection::NONE,
        Strategy::Single(rating_type) => record
            .rating_for(rating_type)
            .map_or(RatingSelection::NONE, |r| {
                RatingSelection::found(r, rating_type, false)
            }),
        Strategy::Chain(chain) => chain
            .iter()
            .enumerate()
            .find_map(|(position, rating_type)| {
                record
                    .rating_for(*rating_type)
                    .map(|r| RatingSelection::found(r, *rating_type, position > 0))
            })
            .unwrap_or(RatingSelection::NONE),
        Strategy::EloOrNational => {
            match (
                record.rating_for(RatingType::Standard),
                record.rating_for(RatingType::National),
            ) {
                (Some(standard), _) => RatingSelection::found(standard, RatingType::Standard, false),
                (None, Some(national)) => RatingSelection::found(national, RatingType::National, true),
                (None, None) => RatingSelection::NONE,
            }
        }
        Strategy::MaxEloNational => {
            match (
                record.rating_for(RatingType::Standard),
                record.rating_for(RatingType::National),
            ) {
                (Some(standard), Some(national)) if national > standard => {
                    RatingSelection::found(national, RatingType::National, false)
                }
                (Some(standard), _) => RatingSelection::found(standard, RatingType::Standard, false),
                (None, Some(national)) => RatingSelection::found(national, RatingType::National, false),
                (None, None) => RatingSelection::NONE,
            }
        }
    };

    if selection.is_fallback {
        tracing::debug!(?algorithm, rating_type = ?selection.rating_type, "rating selected by fallback");
    }
    selection
}
