//! Value types shared by the tracker and the hand history: table seats,
//! cards and the board.
mod card;
mod error;
mod position;

pub use card::{BoardState, Card, Suit, Value};
pub use error::CoreError;
pub use position::{NUM_SEATS, Position};
