use tracing::warn;
use uuid::Uuid;

use super::{Historian, HistorianError};
use crate::tracker::{HandEvent, HandState};

/// A historian that will always fail to record an event
/// and will return an error.
///
/// This historian is useful for testing how a session copes with a
/// broken historian.
pub struct FailingHistorian;

impl Historian for FailingHistorian {
    fn record_event(
        &mut self,
        _hand_id: Uuid,
        _state: &HandState,
        _event: HandEvent,
    ) -> Result<(), HistorianError> {
        warn!("FailingHistorian intentionally returning error");
        Err(HistorianError::UnableToRecordAction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;
    use crate::tracker::{HandSessionBuilder, OpponentTags, PlayerAction};

    #[test]
    #[should_panic]
    fn test_panic_fail_historian() {
        let mut session = HandSessionBuilder::new()
            .hero(Position::BTN)
            .historians(vec![Box::new(FailingHistorian)])
            .panic_on_historian_error(true)
            .build()
            .unwrap();

        // The hand start event is already sent while building, but make
        // sure an action would fail too.
        session
            .act(Position::BTN, PlayerAction::Raise(2.5), OpponentTags::default())
            .unwrap();
    }

    #[test]
    fn test_failing_historian_is_dropped() {
        let mut session = HandSessionBuilder::new()
            .hero(Position::BTN)
            .historians(vec![Box::new(FailingHistorian)])
            .panic_on_historian_error(false)
            .build()
            .unwrap();
        assert_eq!(0, session.num_historians());

        session
            .act(Position::BTN, PlayerAction::Raise(2.5), OpponentTags::default())
            .unwrap();
        assert_eq!(4, session.state().actions().len());
    }
}
