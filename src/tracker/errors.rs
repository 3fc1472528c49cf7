use thiserror::Error;

use crate::core::{CoreError, Position};

use super::Phase;

/// Every way a command can be rejected by the hand state machine.
///
/// A rejected command never changes the state it was applied to.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum HandError {
    #[error("Preflop actions can't be recorded during the {0}")]
    NotPreflop(Phase),
    #[error("Postflop actions can't be recorded preflop")]
    NotPostflop,
    #[error("It's not {position}'s turn. Current actor: {current:?}")]
    NotPlayersTurn {
        position: Position,
        current: Option<Position>,
    },
    #[error("{0} has already folded")]
    PlayerFolded(Position),
    #[error("{0} is all in and can't act")]
    PlayerAllIn(Position),
    #[error("Can't fold when check is available")]
    FoldWhenCheckAvailable,
    #[error("Can't check when there is a bet to call")]
    CheckFacingBet,
    #[error("Nothing to call")]
    NothingToCall,
    #[error("Can't bet when there is already a bet (use Raise)")]
    BetAlreadyOpen,
    #[error("Bet and raise sizes must be positive, got {0}")]
    InvalidBetSize(f32),
    #[error("A raise to {to} doesn't exceed the current bet of {current_bet}")]
    RaiseTooSmall { to: f32, current_bet: f32 },
    #[error("The board for the {0} must be confirmed before anyone acts")]
    WaitingForBoard(Phase),
    #[error("The hand is already complete")]
    HandComplete,
    #[error("Can't set a result for an incomplete hand")]
    HandIncomplete,
    #[error("The hero is already {0}")]
    HeroAlreadyDesignated(Position),
    #[error("Board cards for the {dealt} don't match the {waiting:?} the hand is waiting on")]
    UnexpectedBoard {
        dealt: Phase,
        waiting: Option<Phase>,
    },
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Errors that can occur when building a `HandState`.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum HandStateBuilderError {
    #[error("stack_size must be finite and at least one big blind, got {0}")]
    InvalidStackSize(f32),
}
