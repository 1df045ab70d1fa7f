//! Command-line interface definition.

use chess_rating::RatingType;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rating-calc")]
#[command(about = "Chess federation rating calculator")]
pub struct Cli {
    /// Path to the configuration file (default: rating-calc.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Date results count on (YYYY-MM-DD), overrides the config
    #[arg(long, global = true)]
    pub as_of: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where a player's rating record comes from.
#[derive(Args, Debug, Default)]
pub struct PlayerArgs {
    /// Player name from the config file
    #[arg(long, conflicts_with = "record")]
    pub player: Option<String>,

    /// Rating record as JSON in the API's shape
    #[arg(long)]
    pub record: Option<String>,
}

impl PlayerArgs {
    pub fn is_given(&self) -> bool {
        self.player.is_some() || self.record.is_some()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interpret a raw result code
    Classify {
        #[arg(allow_hyphen_values = true)]
        code: i64,
    },
    /// Render a result code as a display string
    Format {
        #[arg(allow_hyphen_values = true)]
        code: i64,
        /// White's points (default: as allocated by the code)
        #[arg(long)]
        white_points: Option<f64>,
        /// Black's points (default: as allocated by the code)
        #[arg(long)]
        black_points: Option<f64>,
        /// White player id; negative marks a missing player
        #[arg(long, allow_hyphen_values = true)]
        white_id: Option<i64>,
        /// Black player id; negative marks a missing player
        #[arg(long, allow_hyphen_values = true)]
        black_id: Option<i64>,
    },
    /// Pick the rating that applies to a player
    Select {
        #[command(flatten)]
        player: PlayerArgs,
        /// Rating algorithm code (0-10)
        #[arg(long)]
        algorithm: Option<i64>,
    },
    /// Resolve the K-factor for a player or for explicit values
    KFactor {
        #[command(flatten)]
        player: PlayerArgs,
        /// Rating algorithm code, when resolving for a player
        #[arg(long)]
        algorithm: Option<i64>,
        /// standard, rapid, blitz or national
        #[arg(long)]
        rating_type: Option<RatingType>,
        #[arg(long)]
        rating: Option<i32>,
        /// Stored standard K-factor
        #[arg(long)]
        stored_k: Option<u32>,
        #[arg(long)]
        birth_date: Option<NaiveDate>,
    },
    /// Expected score between two ratings
    Expected { rating: i32, opponent: i32 },
    /// Rating change from a single game
    Change {
        rating: i32,
        opponent: i32,
        /// 1, 0, or a draw as 1/2, 0.5 or =
        score: String,
        #[arg(short, long)]
        k: Option<u32>,
    },
    /// Performance rating from a total score against opponents
    Performance {
        #[arg(long)]
        score: f64,
        #[arg(required = true)]
        opponents: Vec<i32>,
    },
    /// Rating change and performance over a tournament file (JSON or TOML)
    Tournament {
        file: PathBuf,
        #[arg(long)]
        rating: i32,
        #[arg(short, long)]
        k: Option<u32>,
    },
    /// Standings from a JSON list of games
    Standings { file: PathBuf },
}
