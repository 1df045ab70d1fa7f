//! Subcommand execution.
//!
//! Each command produces a JSON value; printing is left to `main`.

use chess_rating::{
    classify, elo, format_classified, format_result, k_factor, select, tally, RatingAlgorithm,
    RatingError, RatingRecord,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use thiserror::Error;

use crate::cli::{Commands, PlayerArgs};
use crate::config::{CalcConfig, ConfigError};
use crate::input::{self, InputError};

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Rating(#[from] RatingError),
    #[error("Invalid rating record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
    #[error("Missing input: {0}")]
    MissingInput(&'static str),
}

/// Settings shared by all commands.
pub struct Context<'a> {
    pub config: &'a CalcConfig,
    /// As-of date, from the command line or the config.
    pub as_of: Option<NaiveDate>,
}

impl<'a> Context<'a> {
    pub fn new(config: &'a CalcConfig, as_of: Option<NaiveDate>) -> Self {
        Self {
            config,
            as_of: as_of.or(config.as_of),
        }
    }

    /// An explicit algorithm code wins over the configured one.
    fn algorithm(&self, code: Option<i64>) -> Result<Option<RatingAlgorithm>, CommandError> {
        match code {
            Some(code) => Ok(Some(RatingAlgorithm::try_from(code)?)),
            None => Ok(self.config.algorithm),
        }
    }

    fn record(&self, player: &PlayerArgs) -> Result<RatingRecord, CommandError> {
        match (&player.player, &player.record) {
            (Some(name), _) => Ok(self.config.get_player(name)?.clone()),
            (None, Some(json)) => Ok(serde_json::from_str(json)?),
            (None, None) => Err(CommandError::MissingInput("--player or --record")),
        }
    }

    fn k_factor(&self, k: Option<u32>) -> u32 {
        k.unwrap_or(self.config.default_k_factor)
    }
}

/// Runs a single command.
pub fn run(command: &Commands, ctx: &Context<'_>) -> Result<Value, CommandError> {
    match command {
        Commands::Classify { code } => {
            let classification = classify(*code);
            Ok(json!({
                "classification": classification,
                "display": format_classified(*code, None, None),
            }))
        }
        Commands::Format {
            code,
            white_points,
            black_points,
            white_id,
            black_id,
        } => {
            let display = match (white_points, black_points) {
                (None, None) => format_classified(*code, *white_id, *black_id),
                _ => {
                    let allocated = classify(*code);
                    format_result(
                        *code,
                        white_points.unwrap_or(allocated.white_points),
                        black_points.unwrap_or(allocated.black_points),
                        *white_id,
                        *black_id,
                    )
                }
            };
            Ok(json!({ "display": display }))
        }
        Commands::Select { player, algorithm } => {
            let record = ctx.record(player)?;
            let algorithm = ctx.algorithm(*algorithm)?;
            let selection = select(Some(&record), algorithm);
            Ok(json!({
                "algorithm": algorithm.unwrap_or_default(),
                "selection": selection,
                "k_factor": k_factor::resolve_for_record(&record, &selection, ctx.as_of),
            }))
        }
        Commands::KFactor {
            player,
            algorithm,
            rating_type,
            rating,
            stored_k,
            birth_date,
        } => {
            let k = if player.is_given() {
                let record = ctx.record(player)?;
                let selection = select(Some(&record), ctx.algorithm(*algorithm)?);
                k_factor::resolve_for_record(&record, &selection, ctx.as_of)
            } else {
                k_factor::resolve(*rating_type, *rating, *stored_k, *birth_date, ctx.as_of)
            };
            Ok(json!({ "k_factor": k, "as_of": ctx.as_of }))
        }
        Commands::Expected { rating, opponent } => Ok(json!({
            "expected": elo::expected_score(*rating, *opponent),
            "opponent_expected": elo::expected_score(*opponent, *rating),
        })),
        Commands::Change {
            rating,
            opponent,
            score,
            k,
        } => {
            let actual = elo::parse_score(score)?;
            let k = ctx.k_factor(*k);
            let change = elo::rating_change(*rating, *opponent, actual, k);
            Ok(json!({
                "expected": elo::expected_score(*rating, *opponent),
                "actual": actual,
                "k_factor": k,
                "change": change,
                "new_rating": f64::from(*rating) + change,
            }))
        }
        Commands::Performance { score, opponents } => Ok(json!({
            "performance_rating": elo::performance_rating(opponents, *score),
            "games": opponents.len(),
        })),
        Commands::Tournament { file, rating, k } => {
            let matches = input::load_matches(file)?;
            let k = ctx.k_factor(*k);
            let stats = elo::tournament_stats(&matches, *rating, k);
            Ok(json!({
                "k_factor": k,
                "games": matches.len(),
                "stats": stats,
            }))
        }
        Commands::Standings { file } => {
            let games = input::load_games(file)?;
            Ok(json!({ "standings": tally(&games) }))
        }
    }
}
