//! The hand tracker.
//!
//! A [`HandState`] follows one 6-max no limit hold'em hand as it is
//! entered by hand: blinds, every betting action, board confirmation
//! between streets and finally the result. Every action is validated
//! before anything changes so a rejected action leaves the state as it
//! was.
//!
//! Preflop, entering an action for a seat further round the table folds
//! everyone in between. Postflop only the current actor may act.
//!
//! [`HandSession`] wraps a state with the bookkeeping an app needs: sticky
//! opponent tags, board cards, the hero's hole cards and a list of
//! [`historian::Historian`]s that are told about every event.
//!
//! # Example
//!
//! ```
//! use poker_hand_tracker::core::Position;
//! use poker_hand_tracker::tracker::{HandStateBuilder, OpponentTags, Phase, PlayerAction};
//!
//! let mut hand = HandStateBuilder::new().hero(Position::BTN).build().unwrap();
//!
//! // Folds UTG, HJ and CO on the way to the button.
//! hand.add_preflop_action(Position::BTN, PlayerAction::Raise(2.5), OpponentTags::default())
//!     .unwrap();
//! hand.add_preflop_action(Position::SB, PlayerAction::Fold, OpponentTags::default())
//!     .unwrap();
//! hand.add_preflop_action(Position::BB, PlayerAction::Call, OpponentTags::default())
//!     .unwrap();
//!
//! assert_eq!(Phase::Flop, hand.phase());
//! assert!(hand.is_waiting_for_board());
//!
//! hand.confirm_board();
//! assert_eq!(Some(Position::BB), hand.current_actor());
//! ```
mod action;
mod errors;
mod hand_state;
mod result;
mod session;

pub mod historian;

#[cfg(test)]
pub mod test_util;

pub use action::{
    ActionKind, ActionRecord, BlindPayload, HandEvent, HandStartPayload, OpponentStyle,
    OpponentTags, OpponentType, PlayedAction, PlayerAction,
};
pub use errors::{HandError, HandStateBuilderError};
pub(crate) use action::now_millis;
pub use hand_state::{
    ALL_IN_EPSILON, BIG_BLIND, Command, DEFAULT_STACK_SIZE, HandSnapshot, HandState,
    HandStateBuilder, Phase, Player, PotDetails, RaiseLabel, SMALL_BLIND, Street, apply,
};
pub use result::{CompletionType, HandResult, ShowdownHand};
pub use session::{ALL_IN_SENTINEL, HandSession, HandSessionBuilder};
