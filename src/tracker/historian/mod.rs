//! Historians are told about everything that happens in a hand.
//!
//! A [`super::HandSession`] calls every historian it holds after each
//! successful command with the events that command produced. Historians
//! are free to store, forward or ignore them.
use thiserror::Error;
use uuid::Uuid;

use super::{HandEvent, HandState};

mod failing;
mod null;
mod vec;

#[cfg(feature = "serde")]
mod directory_historian;

pub use failing::FailingHistorian;
pub use null::NullHistorian;
pub use vec::{HistoryRecord, VecHistorian};

#[cfg(feature = "serde")]
pub use directory_historian::DirectoryHistorian;

#[derive(Error, Debug)]
pub enum HistorianError {
    #[error("Unable to record event")]
    UnableToRecordAction,
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("Unable to serialize event: {0}")]
    Json(#[from] serde_json::Error),
}

/// Something that wants to hear about hand events.
pub trait Historian {
    /// Record one event.
    ///
    /// `hand_id` is stable for the life of one hand attempt and changes
    /// when the session is reset. `state` is the state after the command
    /// that produced the event.
    fn record_event(
        &mut self,
        hand_id: Uuid,
        state: &HandState,
        event: HandEvent,
    ) -> Result<(), HistorianError>;
}
