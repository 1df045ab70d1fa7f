//! Result code interpretation.
//!
//! The federation API reports every game result as a bare integer. Codes come
//! in three families, one per [`PointSystem`], each laid out the same way:
//! `family base + kind offset`, where the offset is the position of the
//! [`ResultKind`] in [`ResultKind::ALL`].
//!
//! | family | codes |
//! |--------|-------|
//! | [`PointSystem::Default`] | 0..=10 |
//! | [`PointSystem::SystemA`] | 20..=30 |
//! | [`PointSystem::SystemB`] | 40..=50 |
//!
//! [`classify`] is total: any integer outside these ranges is reported as an
//! unknown, non-countable result rather than an error.

use serde::{Deserialize, Serialize};

use crate::Side;

/// Number of result kinds in each code family.
pub const FAMILY_SIZE: usize = ResultKind::ALL.len();

/// A scoring convention, fixed by the code family a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointSystem {
    /// Win 1, draw ½, loss 0.
    Default,
    /// Win 3, draw 2, loss 1.
    SystemA,
    /// Win 3, draw 1, loss 0.
    SystemB,
}

impl PointSystem {
    /// All point systems in code order.
    pub const ALL: [PointSystem; 3] = [
        PointSystem::Default,
        PointSystem::SystemA,
        PointSystem::SystemB,
    ];

    /// First code of this system's family.
    #[inline]
    pub const fn base(self) -> i64 {
        match self {
            PointSystem::Default => 0,
            PointSystem::SystemA => 20,
            PointSystem::SystemB => 40,
        }
    }

    /// Points awarded for a win.
    #[inline]
    pub const fn win(self) -> f64 {
        match self {
            PointSystem::Default => 1.0,
            PointSystem::SystemA | PointSystem::SystemB => 3.0,
        }
    }

    /// Points awarded to each side for a draw.
    #[inline]
    pub const fn draw(self) -> f64 {
        match self {
            PointSystem::Default => 0.5,
            PointSystem::SystemA => 2.0,
            PointSystem::SystemB => 1.0,
        }
    }

    /// Points awarded for a loss.
    #[inline]
    pub const fn loss(self) -> f64 {
        match self {
            PointSystem::Default | PointSystem::SystemB => 0.0,
            PointSystem::SystemA => 1.0,
        }
    }

    /// Returns the code for `kind` within this system's family.
    #[inline]
    pub const fn code(self, kind: ResultKind) -> i64 {
        self.base() + kind.offset()
    }

    /// Locates the family a code belongs to, with the kind it denotes.
    pub fn locate(code: i64) -> Option<(PointSystem, ResultKind)> {
        PointSystem::ALL.into_iter().find_map(|system| {
            let offset = code.checked_sub(system.base())?;
            let index = usize::try_from(offset).ok()?;
            ResultKind::ALL.get(index).map(|kind| (system, *kind))
        })
    }
}

/// What a result code denotes, independent of its point system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    NotSet,
    WhiteWin,
    BlackWin,
    Draw,
    WhiteWinWalkover,
    BlackWinWalkover,
    /// Neither player showed up.
    NoWinnerWalkover,
    /// Half-point bye for white with no opponent assigned.
    WhiteTouristBye,
    /// Game voided by the arbiter.
    BothNoResult,
    /// Adjudicated as a win for both players.
    BothWin,
    Postponed,
}

impl ResultKind {
    /// All kinds, indexed by their offset within a code family.
    pub const ALL: [ResultKind; 11] = [
        ResultKind::NotSet,
        ResultKind::WhiteWin,
        ResultKind::BlackWin,
        ResultKind::Draw,
        ResultKind::WhiteWinWalkover,
        ResultKind::BlackWinWalkover,
        ResultKind::NoWinnerWalkover,
        ResultKind::WhiteTouristBye,
        ResultKind::BothNoResult,
        ResultKind::BothWin,
        ResultKind::Postponed,
    ];

    /// Offset of this kind within a code family.
    #[inline]
    pub const fn offset(self) -> i64 {
        self as i64
    }

    /// The outcome this kind reports.
    pub const fn outcome(self) -> Outcome {
        match self {
            ResultKind::WhiteWin | ResultKind::WhiteWinWalkover => Outcome::WhiteWin,
            ResultKind::BlackWin | ResultKind::BlackWinWalkover => Outcome::BlackWin,
            ResultKind::Draw => Outcome::Draw,
            ResultKind::WhiteTouristBye | ResultKind::BothWin => Outcome::Special,
            ResultKind::NotSet
            | ResultKind::Postponed
            | ResultKind::BothNoResult
            | ResultKind::NoWinnerWalkover => Outcome::NoResult,
        }
    }

    /// Whether the result was awarded without the game being played.
    pub const fn is_walkover(self) -> bool {
        matches!(
            self,
            ResultKind::WhiteWinWalkover | ResultKind::BlackWinWalkover | ResultKind::NoWinnerWalkover
        )
    }

    /// Whether the result enters standings and statistics.
    pub const fn is_countable(self) -> bool {
        !matches!(
            self,
            ResultKind::NotSet
                | ResultKind::Postponed
                | ResultKind::BothNoResult
                | ResultKind::NoWinnerWalkover
        )
    }

    /// How the result is rendered.
    pub const fn display_kind(self) -> DisplayKind {
        match self {
            ResultKind::WhiteWin | ResultKind::BlackWin | ResultKind::Draw => DisplayKind::Score,
            ResultKind::WhiteWinWalkover
            | ResultKind::BlackWinWalkover
            | ResultKind::NoWinnerWalkover => DisplayKind::Walkover,
            ResultKind::WhiteTouristBye => DisplayKind::TouristBye,
            ResultKind::BothWin | ResultKind::BothNoResult => DisplayKind::Adjudicated,
            ResultKind::NotSet | ResultKind::Postponed => DisplayKind::None,
        }
    }
}

/// The outcome of a game as it affects the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    WhiteWin,
    BlackWin,
    Draw,
    /// Tourist bye or adjudicated double win.
    Special,
    NoResult,
}

impl Outcome {
    /// The winning side of a decisive game.
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::WhiteWin => Some(Side::White),
            Outcome::BlackWin => Some(Side::Black),
            Outcome::Draw | Outcome::Special | Outcome::NoResult => None,
        }
    }
}

/// How a classified result should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayKind {
    /// Plain score line.
    Score,
    Walkover,
    TouristBye,
    Adjudicated,
    /// Nothing to show; rendered as a dash.
    None,
}

/// Everything the engine knows about a single result code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub code: i64,
    /// `None` for unknown codes.
    pub point_system: Option<PointSystem>,
    /// `None` for unknown codes.
    pub kind: Option<ResultKind>,
    pub outcome: Outcome,
    pub is_walkover: bool,
    pub is_tourist_bye: bool,
    pub is_countable: bool,
    pub white_points: f64,
    pub black_points: f64,
    pub display_kind: DisplayKind,
}

impl Classification {
    fn unknown(code: i64) -> Self {
        Self {
            code,
            point_system: None,
            kind: None,
            outcome: Outcome::NoResult,
            is_walkover: false,
            is_tourist_bye: false,
            is_countable: false,
            white_points: 0.0,
            black_points: 0.0,
            display_kind: DisplayKind::None,
        }
    }

    /// Points allocated to `side`.
    #[inline]
    pub fn points(&self, side: Side) -> f64 {
        match side {
            Side::White => self.white_points,
            Side::Black => self.black_points,
        }
    }

    /// Whether the code belongs to one of the known families.
    #[inline]
    pub fn is_known(&self) -> bool {
        self.kind.is_some()
    }
}

/// Splits points between white and black for a kind under a point system.
fn allocate(system: PointSystem, kind: ResultKind) -> (f64, f64) {
    if !kind.is_countable() {
        return (0.0, 0.0);
    }
    match kind {
        ResultKind::WhiteWin | ResultKind::WhiteWinWalkover => (system.win(), system.loss()),
        ResultKind::BlackWin | ResultKind::BlackWinWalkover => (system.loss(), system.win()),
        ResultKind::Draw => (system.draw(), system.draw()),
        ResultKind::WhiteTouristBye => (system.draw(), 0.0),
        ResultKind::BothWin => (system.win(), system.win()),
        ResultKind::NotSet
        | ResultKind::Postponed
        | ResultKind::BothNoResult
        | ResultKind::NoWinnerWalkover => (0.0, 0.0),
    }
}

/// Classifies a raw result code.
///
/// Never fails: codes outside the known families produce a non-countable
/// classification with [`Outcome::NoResult`] and [`DisplayKind::None`].
pub fn classify(code: i64) -> Classification {
    let Some((system, kind)) = PointSystem::locate(code) else {
        tracing::debug!(code, "unknown result code");
        return Classification::unknown(code);
    };

    let (white_points, black_points) = allocate(system, kind);
    Classification {
        code,
        point_system: Some(system),
        kind: Some(kind),
        outcome: kind.outcome(),
        is_walkover: kind.is_walkover(),
        is_tourist_bye: kind == ResultKind::WhiteTouristBye,
        is_countable: kind.is_countable(),
        white_points,
        black_points,
        display_kind: kind.display_kind(),
    }
}
