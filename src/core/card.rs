use std::fmt;
use std::str::FromStr;

use super::error::CoreError;

/// Card rank. Ace is high; nothing in this crate compares hands so the
/// ordering is only used for sorting and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    pub const VALUES: [Value; 13] = [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    pub fn from_char(c: char) -> Result<Value, CoreError> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Value::Two),
            '3' => Ok(Value::Three),
            '4' => Ok(Value::Four),
            '5' => Ok(Value::Five),
            '6' => Ok(Value::Six),
            '7' => Ok(Value::Seven),
            '8' => Ok(Value::Eight),
            '9' => Ok(Value::Nine),
            'T' => Ok(Value::Ten),
            'J' => Ok(Value::Jack),
            'Q' => Ok(Value::Queen),
            'K' => Ok(Value::King),
            'A' => Ok(Value::Ace),
            _ => Err(CoreError::UnexpectedValueChar(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    pub const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    pub fn from_char(c: char) -> Result<Suit, CoreError> {
        match c.to_ascii_lowercase() {
            's' => Ok(Suit::Spade),
            'h' => Ok(Suit::Heart),
            'd' => Ok(Suit::Diamond),
            'c' => Ok(Suit::Club),
            _ => Err(CoreError::UnexpectedSuitChar(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
        }
    }
}

/// A single playing card.
///
/// The text form is the value char followed by the suit char, e.g. `As`
/// or `Td`. That is also the form stored in the hand history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    pub value: Value,
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Card { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(v), Some(su), None) => Ok(Card::new(Value::from_char(v)?, Suit::from_char(su)?)),
            _ => Err(CoreError::InvalidCardLength(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The community cards entered so far.
///
/// Streets are filled strictly in order and no card may repeat. Cards that
/// are known to be elsewhere (the hero's hole cards) can be passed as
/// `dead` so they are rejected too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub flop: Option<[Card; 3]>,
    pub turn: Option<Card>,
    pub river: Option<Card>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_flop(&mut self, flop: [Card; 3], dead: &[Card]) -> Result<(), CoreError> {
        if self.flop.is_some() {
            return Err(CoreError::StreetAlreadyDealt("flop"));
        }
        self.check_new_cards(&flop, dead)?;
        self.flop = Some(flop);
        Ok(())
    }

    pub fn set_turn(&mut self, turn: Card, dead: &[Card]) -> Result<(), CoreError> {
        if self.flop.is_none() {
            return Err(CoreError::BoardOutOfOrder {
                street: "turn",
                missing: "flop",
            });
        }
        if self.turn.is_some() {
            return Err(CoreError::StreetAlreadyDealt("turn"));
        }
        self.check_new_cards(&[turn], dead)?;
        self.turn = Some(turn);
        Ok(())
    }

    pub fn set_river(&mut self, river: Card, dead: &[Card]) -> Result<(), CoreError> {
        if self.turn.is_none() {
            return Err(CoreError::BoardOutOfOrder {
                street: "river",
                missing: "turn",
            });
        }
        if self.river.is_some() {
            return Err(CoreError::StreetAlreadyDealt("river"));
        }
        self.check_new_cards(&[river], dead)?;
        self.river = Some(river);
        Ok(())
    }

    /// All the dealt cards flattened in deal order.
    pub fn cards(&self) -> Vec<Card> {
        self.flop
            .iter()
            .flatten()
            .copied()
            .chain(self.turn)
            .chain(self.river)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.flop.is_none()
    }

    fn check_new_cards(&self, new_cards: &[Card], dead: &[Card]) -> Result<(), CoreError> {
        let mut seen = self.cards();
        seen.extend_from_slice(dead);
        for card in new_cards {
            if seen.contains(card) {
                return Err(CoreError::DuplicateCard(*card));
            }
            seen.push(*card);
        }
        Ok(())
    }
}
