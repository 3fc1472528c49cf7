use uuid::Uuid;

use super::{Historian, HistorianError};
use crate::tracker::{HandEvent, HandState};

/// A no-op historian that discards all events.
///
/// Useful when you need a historian but don't care about the history.
pub struct NullHistorian;

impl Historian for NullHistorian {
    fn record_event(
        &mut self,
        _hand_id: Uuid,
        _state: &HandState,
        _event: HandEvent,
    ) -> Result<(), HistorianError> {
        Ok(())
    }
}
