use std::{cell::RefCell, rc::Rc};

use uuid::Uuid;

use super::{Historian, HistorianError};
use crate::tracker::{HandEvent, HandState};

/// One event as seen by a `VecHistorian`, with the state it was sent with.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub hand_id: Uuid,
    pub before: Option<HandState>,
    pub after: HandState,
    pub event: HandEvent,
}

/// A historian that keeps every event in memory.
///
/// The storage is shared so a test can hold on to it after handing the
/// historian to a session.
#[derive(Default, Debug, Clone)]
pub struct VecHistorian {
    previous: Option<HandState>,
    records: Rc<RefCell<Vec<HistoryRecord>>>,
}

impl VecHistorian {
    pub fn new(records: Rc<RefCell<Vec<HistoryRecord>>>) -> Self {
        VecHistorian {
            previous: None,
            records,
        }
    }

    pub fn get_storage(&self) -> Rc<RefCell<Vec<HistoryRecord>>> {
        self.records.clone()
    }
}

impl Historian for VecHistorian {
    fn record_event(
        &mut self,
        hand_id: Uuid,
        state: &HandState,
        event: HandEvent,
    ) -> Result<(), HistorianError> {
        let before = self.previous.replace(state.clone());
        self.records.borrow_mut().push(HistoryRecord {
            hand_id,
            before,
            after: state.clone(),
            event,
        });
        Ok(())
    }
}
