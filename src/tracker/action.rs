use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::core::Position;

use super::Phase;
use super::result::{CompletionType, HandResult};

/// The kinds of action a player can take. Used to describe what is legal
/// for a seat without any sizing attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Fold => write!(f, "Fold"),
            ActionKind::Check => write!(f, "Check"),
            ActionKind::Call => write!(f, "Call"),
            ActionKind::Bet => write!(f, "Bet"),
            ActionKind::Raise => write!(f, "Raise"),
        }
    }
}

/// An action as entered for a player, before it's validated and capped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum PlayerAction {
    Fold,
    Check,
    /// Match the current bet, or as much of it as the stack allows.
    Call,
    /// Open the betting for this many big blinds.
    Bet(f32),
    /// Raise so that this player's total for the street is this many
    /// big blinds. This is the target, not the increment.
    Raise(f32),
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Bet(_) => ActionKind::Bet,
            PlayerAction::Raise(_) => ActionKind::Raise,
        }
    }
}

/// What actually happened once an action was applied. Amounts are the
/// chips this action moved from the stack into the pot, after any all-in
/// capping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayedAction {
    Fold,
    Check,
    Call { amount: f32 },
    Bet { amount: f32 },
    Raise { amount: f32, to: f32 },
}

impl PlayedAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayedAction::Fold => ActionKind::Fold,
            PlayedAction::Check => ActionKind::Check,
            PlayedAction::Call { .. } => ActionKind::Call,
            PlayedAction::Bet { .. } => ActionKind::Bet,
            PlayedAction::Raise { .. } => ActionKind::Raise,
        }
    }

    /// Chips put in by this action. `None` for folds and checks.
    pub fn amount(&self) -> Option<f32> {
        match self {
            PlayedAction::Fold | PlayedAction::Check => None,
            PlayedAction::Call { amount }
            | PlayedAction::Bet { amount }
            | PlayedAction::Raise { amount, .. } => Some(*amount),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum OpponentType {
    #[default]
    Regular,
    Fish,
}

impl fmt::Display for OpponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentType::Regular => write!(f, "Regular"),
            OpponentType::Fish => write!(f, "Fish"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum OpponentStyle {
    TightAggressive,
    LooseAggressive,
    TightPassive,
    LoosePassive,
    #[default]
    Unknown,
}

impl fmt::Display for OpponentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentStyle::TightAggressive => write!(f, "Tight-Aggressive"),
            OpponentStyle::LooseAggressive => write!(f, "Loose-Aggressive"),
            OpponentStyle::TightPassive => write!(f, "Tight-Passive"),
            OpponentStyle::LoosePassive => write!(f, "Loose-Passive"),
            OpponentStyle::Unknown => write!(f, "unknown"),
        }
    }
}

/// Descriptive labels the caller attaches to an action. The state machine
/// stores them and never looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct OpponentTags {
    pub opponent_type: Option<OpponentType>,
    pub opponent_style: Option<OpponentStyle>,
}

impl OpponentTags {
    pub fn new(opponent_type: OpponentType, opponent_style: OpponentStyle) -> Self {
        OpponentTags {
            opponent_type: Some(opponent_type),
            opponent_style: Some(opponent_style),
        }
    }

    /// Fill any missing tag from `defaults`.
    pub fn or(self, defaults: OpponentTags) -> Self {
        OpponentTags {
            opponent_type: self.opponent_type.or(defaults.opponent_type),
            opponent_style: self.opponent_style.or(defaults.opponent_style),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.opponent_type.is_none() && self.opponent_style.is_none()
    }
}

/// One entry in the hand's action log. Never modified once appended.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRecord {
    pub id: Uuid,
    pub position: Position,
    pub action: PlayedAction,
    /// Pot size right after this action.
    pub pot: f32,
    /// The street that was active when the action was recorded.
    pub phase: Phase,
    /// Milliseconds since the unix epoch.
    pub timestamp: u64,
    pub tags: OpponentTags,
}

impl ActionRecord {
    pub(crate) fn new(
        position: Position,
        action: PlayedAction,
        pot: f32,
        phase: Phase,
        tags: OpponentTags,
    ) -> Self {
        ActionRecord {
            id: Uuid::now_v7(),
            position,
            action,
            pot,
            phase,
            timestamp: now_millis(),
            tags,
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.action.kind()
    }

    pub fn amount(&self) -> Option<f32> {
        self.action.amount()
    }
}

/// Renders as `[Phase] Position Action X.Xbb`, the amount being left off
/// for folds and checks.
impl fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", self.phase, self.position, self.kind())?;
        if let Some(amount) = self.amount() {
            write!(f, " {amount:.1}bb")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandStartPayload {
    pub hero: Option<Position>,
    pub stack_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlindPayload {
    pub position: Position,
    pub amount: f32,
}

/// Everything a historian can be told about a hand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandEvent {
    HandStart(HandStartPayload),
    /// Blinds are posted at construction and never appear in the action
    /// log, so they get their own event.
    BlindPosted(BlindPayload),
    PlayedAction(ActionRecord),
    /// The state machine moved on to a new street. It may still be waiting
    /// for the board before anyone can act.
    StreetAdvance(Phase),
    BoardConfirmed(Phase),
    HandComplete(CompletionType),
    ResultSet(HandResult),
}

pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
