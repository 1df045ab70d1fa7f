//! Player rating records as supplied by the federation API.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::RatingError;

/// The kind of rating a figure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingType {
    Standard,
    Rapid,
    Blitz,
    /// The discontinued national rating, kept for historical display.
    National,
}

impl RatingType {
    /// All rating types.
    pub const ALL: [RatingType; 4] = [
        RatingType::Standard,
        RatingType::Rapid,
        RatingType::Blitz,
        RatingType::National,
    ];

    /// Returns the lowercase name used by the API.
    pub const fn as_str(self) -> &'static str {
        match self {
            RatingType::Standard => "standard",
            RatingType::Rapid => "rapid",
            RatingType::Blitz => "blitz",
            RatingType::National => "national",
        }
    }

    /// Whether the type is a faster time control than standard play.
    #[inline]
    pub const fn is_fast(self) -> bool {
        matches!(self, RatingType::Rapid | RatingType::Blitz)
    }
}

impl FromStr for RatingType {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "classic" | "elo" => Ok(RatingType::Standard),
            "rapid" => Ok(RatingType::Rapid),
            "blitz" => Ok(RatingType::Blitz),
            "national" | "legacy" => Ok(RatingType::National),
            _ => Err(RatingError::UnknownRatingType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RatingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player's ratings and the data needed to resolve their K-factor.
///
/// Field names follow the API's JSON shape. A rating of zero means the
/// player has no rating of that type; use [`RatingRecord::rating_for`] rather
/// than reading the fields directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    /// Standard (classical) rating.
    pub rating: Option<i32>,
    pub rapid_rating: Option<i32>,
    pub blitz_rating: Option<i32>,
    /// Stored K-factor for standard play.
    pub k: Option<u32>,
    pub rapid_k: Option<u32>,
    pub blitz_k: Option<u32>,
    pub title: Option<String>,
    #[serde(rename = "birthdate")]
    pub birth_date: Option<NaiveDate>,
    /// Legacy national rating, fetched separately from the other figures.
    pub national_rating: Option<i32>,
}

impl RatingRecord {
    /// Creates a record holding only a standard rating.
    #[must_use]
    pub fn standard(rating: i32) -> Self {
        Self {
            rating: Some(rating),
            ..Self::default()
        }
    }

    /// Sets the rating of the given type.
    #[must_use]
    pub fn with_rating(mut self, rating_type: RatingType, rating: i32) -> Self {
        let slot = match rating_type {
            RatingType::Standard => &mut self.rating,
            RatingType::Rapid => &mut self.rapid_rating,
            RatingType::Blitz => &mut self.blitz_rating,
            RatingType::National => &mut self.national_rating,
        };
        *slot = Some(rating);
        self
    }

    /// Sets the stored standard K-factor.
    #[must_use]
    pub fn with_k(mut self, k: u32) -> Self {
        self.k = Some(k);
        self
    }

    /// Sets the birth date.
    #[must_use]
    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Returns the rating of the given type, treating zero or negative as absent.
    pub fn rating_for(&self, rating_type: RatingType) -> Option<i32> {
        let raw = match rating_type {
            RatingType::Standard => self.rating,
            RatingType::Rapid => self.rapid_rating,
            RatingType::Blitz => self.blitz_rating,
            RatingType::National => self.national_rating,
        };
        raw.filter(|r| *r > 0)
    }

    /// Stored standard K-factor, treating zero as absent.
    pub fn stored_k(&self) -> Option<u32> {
        self.k.filter(|k| *k > 0)
    }
}
