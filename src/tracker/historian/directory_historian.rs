use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
};

use tracing::{debug, instrument, trace};
use uuid::Uuid;

use super::{Historian, HistorianError};
use crate::tracker::{HandEvent, HandState};

/// A historian that keeps one file of events per hand in a directory.
///
/// Nothing is held in memory between events: the hand's file is read back,
/// extended and written out again each time.
#[derive(Debug, Clone)]
pub struct DirectoryHistorian {
    base_path: PathBuf,
}

impl DirectoryHistorian {
    /// `base_path` is created on the first event if it doesn't exist.
    pub fn new(base_path: PathBuf) -> Self {
        debug!(?base_path, "Creating DirectoryHistorian");
        DirectoryHistorian { base_path }
    }

    /// Where the events of `hand_id` are written.
    pub fn hand_path(&self, hand_id: Uuid) -> PathBuf {
        self.base_path.join(format!("{hand_id}.json"))
    }

    /// Every event recorded so far for `hand_id`. A hand with no file has
    /// no events.
    pub fn load_events(&self, hand_id: Uuid) -> Result<Vec<HandEvent>, HistorianError> {
        let path = self.hand_path(hand_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(File::open(&path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Historian for DirectoryHistorian {
    #[instrument(level = "trace", skip(self, _state, event), fields(base_path = ?self.base_path))]
    fn record_event(
        &mut self,
        hand_id: Uuid,
        _state: &HandState,
        event: HandEvent,
    ) -> Result<(), HistorianError> {
        if !self.base_path.exists() {
            debug!(base_path = ?self.base_path, "Creating hand event directory");
            std::fs::create_dir_all(&self.base_path)?;
        }

        let mut events = self.load_events(hand_id)?;
        events.push(event);

        let path = self.hand_path(hand_id);
        trace!(?path, event_count = events.len(), "Writing hand events");
        let writer = BufWriter::new(File::create(&path)?);
        Ok(serde_json::to_writer_pretty(writer, &events)?)
    }
}
