//! Saved hands.
//!
//! Finished hands are kept in a single JSON file, newest first. Once saved
//! a hand's betting can't change; only the memo fields and the favorite
//! flag are editable.
//!
//! # Example
//!
//! ```no_run
//! use poker_hand_tracker::history::{HandHistoryStore, HandUpdate};
//! use poker_hand_tracker::tracker::HandSessionBuilder;
//!
//! let session = HandSessionBuilder::new().build().unwrap();
//! let mut store = HandHistoryStore::open("hands.json").unwrap();
//!
//! let id = store.save_hand(session.to_saved_hand()).unwrap();
//! store
//!     .update(
//!         id,
//!         HandUpdate {
//!             is_favorite: Some(true),
//!             ..Default::default()
//!         },
//!     )
//!     .unwrap();
//! ```
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::core::{Card, CoreError, Position};
use crate::tracker::{HandResult, HandSession, OpponentType, now_millis};

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Hand history file is not valid: {0}")]
    Json(#[from] serde_json::Error),
}

/// A finished hand as stored in the history file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedHand {
    pub id: Uuid,
    /// Milliseconds since the unix epoch when the hand was saved.
    pub timestamp: u64,
    pub hero_position: Option<Position>,
    #[serde(default)]
    pub hero_hand: Option<[String; 2]>,
    #[serde(default)]
    pub villain_type: OpponentType,
    /// Board cards in deal order, e.g. `["As", "Kd", "2h"]`.
    pub board: Vec<String>,
    /// The action log rendered one line per action.
    pub actions: Vec<String>,
    pub final_pot: f32,
    #[serde(default)]
    pub result: Option<HandResult>,
    #[serde(default)]
    pub location_memo: Option<String>,
    #[serde(default)]
    pub other_memo: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl SavedHand {
    /// Render the session's hand for saving with a new id and the current
    /// time.
    pub fn from_session(session: &HandSession) -> Self {
        let state = session.state();
        SavedHand {
            id: Uuid::now_v7(),
            timestamp: now_millis(),
            hero_position: state.hero(),
            hero_hand: session.hero_hand().map(|hand| hand.map(|c| c.to_string())),
            villain_type: session.default_tags().opponent_type.unwrap_or_default(),
            board: session
                .board()
                .cards()
                .iter()
                .map(ToString::to_string)
                .collect(),
            actions: state.actions().iter().map(ToString::to_string).collect(),
            final_pot: state.pot(),
            result: state.result().cloned(),
            location_memo: None,
            other_memo: None,
            is_favorite: false,
        }
    }

    /// Parse the stored hole cards back into cards.
    pub fn hero_cards(&self) -> Result<Option<[Card; 2]>, CoreError> {
        match &self.hero_hand {
            Some([a, b]) => Ok(Some([a.parse()?, b.parse()?])),
            None => Ok(None),
        }
    }
}

/// The fields of a saved hand that can be changed after saving. `None`
/// leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandUpdate {
    pub location_memo: Option<String>,
    pub other_memo: Option<String>,
    pub is_favorite: Option<bool>,
}

/// Hand history backed by one JSON file.
#[derive(Debug)]
pub struct HandHistoryStore {
    path: PathBuf,
    /// Always sorted newest first.
    hands: Vec<SavedHand>,
}

impl HandHistoryStore {
    /// Load the history at `path`. A file that doesn't exist yet is an
    /// empty history.
    #[instrument(level = "debug", skip_all, fields(path = ?path.as_ref()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HistoryError> {
        let path = path.as_ref().to_path_buf();
        let mut hands: Vec<SavedHand> = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                vec![]
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            vec![]
        };
        sort_newest_first(&mut hands);

        debug!(hand_count = hands.len(), "Loaded hand history");
        Ok(HandHistoryStore { path, hands })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a hand to the front of the history and write it out.
    pub fn save_hand(&mut self, hand: SavedHand) -> Result<Uuid, HistoryError> {
        let id = hand.id;
        let mut hands = Vec::with_capacity(self.hands.len() + 1);
        hands.push(hand);
        hands.extend(self.hands.iter().cloned());
        sort_newest_first(&mut hands);
        self.replace(hands)?;
        Ok(id)
    }

    /// Every saved hand, newest first.
    pub fn all_hands(&self) -> &[SavedHand] {
        &self.hands
    }

    pub fn get(&self, id: Uuid) -> Option<&SavedHand> {
        self.hands.iter().find(|h| h.id == id)
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Remove a hand. Returns false when there was no such hand.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, HistoryError> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let hands = self.hands.iter().filter(|h| h.id != id).cloned().collect();
        self.replace(hands)?;
        Ok(true)
    }

    /// Change the editable fields of a hand. Returns false when there was
    /// no such hand.
    pub fn update(&mut self, id: Uuid, update: HandUpdate) -> Result<bool, HistoryError> {
        let Some(index) = self.hands.iter().position(|h| h.id == id) else {
            return Ok(false);
        };

        let mut hands = self.hands.clone();
        let hand = &mut hands[index];
        if let Some(location_memo) = update.location_memo {
            hand.location_memo = Some(location_memo);
        }
        if let Some(other_memo) = update.other_memo {
            hand.other_memo = Some(other_memo);
        }
        if let Some(is_favorite) = update.is_favorite {
            hand.is_favorite = is_favorite;
        }
        self.replace(hands)?;
        Ok(true)
    }

    /// Forget every hand and remove the file.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        self.hands.clear();
        debug!(path = ?self.path, "Cleared hand history");
        Ok(())
    }

    /// Write `hands` out and only then make them the in-memory history, so
    /// a failed write leaves both as they were.
    fn replace(&mut self, hands: Vec<SavedHand>) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(&hands)?)?;
        debug!(path = ?self.path, hand_count = hands.len(), "Wrote hand history");
        self.hands = hands;
        Ok(())
    }
}

fn sort_newest_first(hands: &mut [SavedHand]) {
    hands.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
