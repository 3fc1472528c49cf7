use std::fmt;

use crate::core::{Card, Position};

/// How a hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CompletionType {
    /// Cards were shown after river betting closed.
    Showdown,
    /// Everyone but one player folded.
    Fold,
    /// Two or more players were still in but none could act any more.
    AllIn,
}

impl fmt::Display for CompletionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionType::Showdown => write!(f, "showdown"),
            CompletionType::Fold => write!(f, "fold"),
            CompletionType::AllIn => write!(f, "allin"),
        }
    }
}

/// What one seat showed (or didn't) at the end of the hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ShowdownHand {
    pub position: Position,
    /// Only present when the cards were seen.
    pub hand: Option<[Card; 2]>,
    pub mucked: bool,
    pub is_winner: bool,
}

/// The outcome of a hand as entered by the user.
///
/// Nothing in the tracker computes this. It's stored as given once the
/// hand is complete.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HandResult {
    pub completion_type: CompletionType,
    /// The main winner when the pot was split.
    pub winner: Position,
    pub hero_won: bool,
    /// Big blinds won (positive) or lost (negative) by the hero.
    pub pot_awarded: f32,
    pub showdown_hands: Vec<ShowdownHand>,
    /// Milliseconds since the unix epoch.
    pub timestamp: u64,
}

impl HandResult {
    pub fn new(
        completion_type: CompletionType,
        winner: Position,
        hero_won: bool,
        pot_awarded: f32,
    ) -> Self {
        HandResult {
            completion_type,
            winner,
            hero_won,
            pot_awarded,
            showdown_hands: Vec::new(),
            timestamp: super::action::now_millis(),
        }
    }

    pub fn with_showdown_hands(mut self, showdown_hands: Vec<ShowdownHand>) -> Self {
        self.showdown_hands = showdown_hands;
        self
    }
}
