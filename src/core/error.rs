use thiserror::Error;

use super::Card;

/// Errors that can come from parsing or assembling the core value types.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum CoreError {
    #[error("Unknown position: {0}")]
    UnknownPosition(String),
    #[error("Card value char {0:?} is not one of 23456789TJQKA")]
    UnexpectedValueChar(char),
    #[error("Card suit char {0:?} is not one of shdc")]
    UnexpectedSuitChar(char),
    #[error("A card needs exactly two chars (value, suit), got {0:?}")]
    InvalidCardLength(String),
    #[error("Card {0} is already on the board or in a hand")]
    DuplicateCard(Card),
    #[error("The {street} can't be dealt before the {missing}")]
    BoardOutOfOrder {
        street: &'static str,
        missing: &'static str,
    },
    #[error("The {0} has already been dealt")]
    StreetAlreadyDealt(&'static str),
}
