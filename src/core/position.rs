use std::fmt;
use std::str::FromStr;

use super::error::CoreError;

/// Number of seats at a 6-max table.
pub const NUM_SEATS: usize = 6;

/// A seat at a 6-max table.
///
/// The declaration order is the clockwise seating order, starting from the
/// small blind. Every turn-order computation walks this order, so the
/// discriminant doubles as the seat ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Position {
    /// Small blind. First to act on every postflop street.
    SB = 0,
    /// Big blind.
    BB = 1,
    /// Under the gun. First to act preflop.
    UTG = 2,
    /// Hijack.
    HJ = 3,
    /// Cutoff.
    CO = 4,
    /// Button.
    BTN = 5,
}

impl Position {
    /// All the seats in clockwise order starting at the small blind.
    pub const ALL: [Position; NUM_SEATS] = [
        Position::SB,
        Position::BB,
        Position::UTG,
        Position::HJ,
        Position::CO,
        Position::BTN,
    ];

    /// The seat ordinal, 0 for the small blind through 5 for the button.
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Get the seat for an ordinal. Ordinals wrap around the table.
    pub const fn from_ordinal(ordinal: usize) -> Position {
        Position::ALL[ordinal % NUM_SEATS]
    }

    /// The seat directly clockwise from this one.
    pub const fn next(self) -> Position {
        Position::from_ordinal(self.ordinal() + 1)
    }

    /// Walk clockwise from this seat (exclusive) and return the first
    /// seat matching the predicate. The walk covers every seat exactly
    /// once, so this seat itself is the last one considered.
    ///
    /// # Example
    ///
    /// ```
    /// use poker_hand_tracker::core::Position;
    ///
    /// let next = Position::BTN.next_matching(|p| p != Position::SB);
    /// assert_eq!(Some(Position::BB), next);
    /// ```
    pub fn next_matching<F>(self, mut pred: F) -> Option<Position>
    where
        F: FnMut(Position) -> bool,
    {
        (1..=NUM_SEATS)
            .map(|offset| Position::from_ordinal(self.ordinal() + offset))
            .find(|p| pred(*p))
    }

    /// Iterate every seat clockwise starting with this one.
    pub fn clockwise(self) -> impl Iterator<Item = Position> {
        (0..NUM_SEATS).map(move |offset| Position::from_ordinal(self.ordinal() + offset))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Position::SB => "SB",
            Position::BB => "BB",
            Position::UTG => "UTG",
            Position::HJ => "HJ",
            Position::CO => "CO",
            Position::BTN => "BTN",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownPosition(s.to_string()))
    }
}
