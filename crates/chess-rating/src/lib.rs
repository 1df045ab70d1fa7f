//! Rating and result engine for a chess federation.
//!
//! This crate provides the pure computations behind tournament pages and the
//! rating calculator:
//! - [`classify`] for raw result codes across the three [`PointSystem`]s
//! - [`select`] for picking a player's rating under a [`RatingAlgorithm`]
//! - [`k_factor::resolve`] for federation K-factor rules
//! - [`elo`] for expected score, rating change and performance rating
//! - [`format_result`] for canonical result strings
//! - [`tally`] for standings over countable results
//!
//! Every function is deterministic and holds no state. Missing ratings are
//! ordinary inputs (`None`), not errors.
//!
//! # Example
//!
//! ```
//! use chess_rating::{classify, elo, k_factor, select, RatingAlgorithm, RatingRecord};
//!
//! let player = RatingRecord::standard(1850);
//! let opponent = RatingRecord::standard(1910);
//!
//! let ours = select(Some(&player), Some(RatingAlgorithm::Standard));
//! let theirs = select(Some(&opponent), Some(RatingAlgorithm::Standard));
//! let k = k_factor::resolve_for_record(&player, &ours, None);
//!
//! let result = classify(1);
//! let change = elo::rating_change(
//!     ours.rating.unwrap(),
//!     theirs.rating.unwrap(),
//!     result.white_points,
//!     k,
//! );
//! assert!(change > 10.0);
//! ```

pub mod display;
pub mod elo;
mod error;
pub mod k_factor;
mod record;
pub mod result_code;
pub mod selection;
mod side;
pub mod standings;

pub use display::{format_classified, format_result};
pub use elo::{MatchResult, TournamentRatingStats};
pub use error::RatingError;
pub use record::{RatingRecord, RatingType};
pub use result_code::{classify, Classification, DisplayKind, Outcome, PointSystem, ResultKind};
pub use selection::{select, RatingAlgorithm, RatingSelection};
pub use side::Side;
pub use standings::{tally, GameRecord, StandingRow};
