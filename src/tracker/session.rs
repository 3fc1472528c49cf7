use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::core::{BoardState, Card, CoreError, Position};

use super::action::{BlindPayload, HandEvent, HandStartPayload, OpponentTags, PlayerAction};
use super::errors::{HandError, HandStateBuilderError};
use super::hand_state::{Command, HandState, HandStateBuilder, Phase};
use super::historian::Historian;
use super::result::HandResult;

/// A bet or raise of exactly this size means "all in". It is replaced by
/// the player's real all in size before the action reaches the state.
pub const ALL_IN_SENTINEL: f32 = 999.0;

/// # HandSessionBuilder
///
/// Configures a [`HandSession`]. Every field is optional.
///
/// ## Examples
///
/// ```
/// use poker_hand_tracker::core::Position;
/// use poker_hand_tracker::tracker::HandSessionBuilder;
/// use poker_hand_tracker::tracker::historian::NullHistorian;
///
/// let session = HandSessionBuilder::new()
///     .hero(Position::CO)
///     .stack_size(60.0)
///     .historians(vec![Box::new(NullHistorian)])
///     .build()
///     .unwrap();
///
/// assert_eq!(Some(Position::CO), session.state().hero());
/// ```
pub struct HandSessionBuilder {
    hero: Option<Position>,
    stack_size: Option<f32>,
    historians: Vec<Box<dyn Historian>>,
    panic_on_historian_error: bool,
}

impl Default for HandSessionBuilder {
    fn default() -> Self {
        Self {
            hero: None,
            stack_size: None,
            historians: vec![],
            panic_on_historian_error: true,
        }
    }
}

impl HandSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hero(mut self, hero: Position) -> Self {
        self.hero = Some(hero);
        self
    }

    pub fn stack_size(mut self, stack_size: f32) -> Self {
        self.stack_size = Some(stack_size);
        self
    }

    /// Set the historians for the session created by this builder.
    pub fn historians(mut self, historians: Vec<Box<dyn Historian>>) -> Self {
        self.historians = historians;
        self
    }

    /// Should the session panic if a historian errors.
    /// Default is true. When false a failing historian is logged and
    /// removed so the hand can carry on without it.
    pub fn panic_on_historian_error(mut self, panic_on_historian_error: bool) -> Self {
        self.panic_on_historian_error = panic_on_historian_error;
        self
    }

    pub fn build(self) -> Result<HandSession, HandStateBuilderError> {
        let mut builder = HandStateBuilder::new().maybe_hero(self.hero);
        if let Some(stack_size) = self.stack_size {
            builder = builder.stack_size(stack_size);
        }
        let initial = builder.build()?;

        let mut session = HandSession {
            id: Uuid::now_v7(),
            state: initial.clone(),
            initial,
            hero_hand: None,
            board: BoardState::new(),
            default_tags: OpponentTags::default(),
            historians: self.historians,
            panic_on_historian_error: self.panic_on_historian_error,
        };
        session.emit_start();
        Ok(session)
    }
}

/// One hand being entered, plus everything around it that isn't betting:
/// the board, the hero's cards, sticky opponent tags and the historians.
pub struct HandSession {
    id: Uuid,
    /// The state every reset goes back to.
    initial: HandState,
    state: HandState,
    hero_hand: Option<[Card; 2]>,
    board: BoardState,
    default_tags: OpponentTags,
    historians: Vec<Box<dyn Historian>>,
    panic_on_historian_error: bool,
}

impl HandSession {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &HandState {
        &self.state
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn hero_hand(&self) -> Option<[Card; 2]> {
        self.hero_hand
    }

    /// The tags applied to actions that don't bring their own.
    pub fn default_tags(&self) -> OpponentTags {
        self.default_tags
    }

    pub fn num_historians(&self) -> usize {
        self.historians.len()
    }

    /// Record an action for `position` on whatever street the hand is on.
    ///
    /// Tags missing from `tags` are filled from the current defaults and
    /// the merged tags become the new defaults.
    #[instrument(level = "debug", skip(self, tags), fields(hand_id = %self.id))]
    pub fn act(
        &mut self,
        position: Position,
        action: PlayerAction,
        tags: OpponentTags,
    ) -> Result<(), HandError> {
        let tags = tags.or(self.default_tags);
        let action = self.resolve_all_in(position, action);
        let command = if self.state.phase() == Phase::Preflop {
            Command::Preflop {
                position,
                action,
                tags,
            }
        } else {
            Command::Postflop {
                position,
                action,
                tags,
            }
        };

        self.run(command)?;
        self.default_tags = tags;
        Ok(())
    }

    pub fn deal_flop(&mut self, flop: [Card; 3]) -> Result<(), HandError> {
        self.deal(Phase::Flop, |board, dead| board.set_flop(flop, dead))
    }

    pub fn deal_turn(&mut self, turn: Card) -> Result<(), HandError> {
        self.deal(Phase::Turn, |board, dead| board.set_turn(turn, dead))
    }

    pub fn deal_river(&mut self, river: Card) -> Result<(), HandError> {
        self.deal(Phase::River, |board, dead| board.set_river(river, dead))
    }

    /// Confirm the board without entering any cards.
    pub fn confirm_board(&mut self) -> Result<(), HandError> {
        self.run(Command::ConfirmBoard)
    }

    pub fn force_advance(&mut self) -> Result<(), HandError> {
        self.run(Command::ForceAdvance)
    }

    /// Record the hero's hole cards. They can be changed until the hand is
    /// saved but can't clash with the board.
    pub fn set_hero_hand(&mut self, hand: [Card; 2]) -> Result<(), HandError> {
        if hand[0] == hand[1] {
            return Err(CoreError::DuplicateCard(hand[0]).into());
        }
        let board = self.board.cards();
        if let Some(dup) = hand.iter().find(|c| board.contains(c)) {
            return Err(CoreError::DuplicateCard(*dup).into());
        }
        self.hero_hand = Some(hand);
        Ok(())
    }

    pub fn designate_hero(&mut self, position: Position) -> Result<(), HandError> {
        self.run(Command::DesignateHero(position))
    }

    pub fn set_result(&mut self, result: HandResult) -> Result<(), HandError> {
        self.run(Command::SetResult(result))
    }

    /// Throw the hand away and start again with the same configuration
    /// and a fresh id.
    pub fn reset(&mut self) {
        self.id = Uuid::now_v7();
        self.state = self.initial.clone();
        self.hero_hand = None;
        self.board = BoardState::new();
        self.default_tags = OpponentTags::default();
        debug!(hand_id = %self.id, "Reset hand");
        self.emit_start();
    }

    #[cfg(feature = "serde")]
    pub fn to_saved_hand(&self) -> crate::history::SavedHand {
        crate::history::SavedHand::from_session(self)
    }

    fn resolve_all_in(&self, position: Position, action: PlayerAction) -> PlayerAction {
        let player = self.state.player(position);
        match action {
            PlayerAction::Bet(size) if size == ALL_IN_SENTINEL => PlayerAction::Bet(player.stack),
            PlayerAction::Raise(to) if to == ALL_IN_SENTINEL => {
                let all_in = player.stack + player.contributed;
                if all_in > self.state.current_bet() {
                    PlayerAction::Raise(all_in)
                } else {
                    PlayerAction::Call
                }
            }
            other => other,
        }
    }

    fn deal<F>(&mut self, street: Phase, set: F) -> Result<(), HandError>
    where
        F: FnOnce(&mut BoardState, &[Card]) -> Result<(), CoreError>,
    {
        let waiting = self.state.waiting_for();
        if waiting != Some(street) {
            return Err(HandError::UnexpectedBoard {
                dealt: street,
                waiting,
            });
        }

        let dead: Vec<Card> = self.hero_hand.map(Vec::from).unwrap_or_default();
        let mut board = self.board.clone();
        set(&mut board, &dead)?;
        self.board = board;

        self.run(Command::ConfirmBoard)
    }

    fn run(&mut self, command: Command) -> Result<(), HandError> {
        let next = self.state.apply(command)?;
        let events = events_between(&self.state, &next);
        self.state = next;
        for event in events {
            self.record(event);
        }
        Ok(())
    }

    fn emit_start(&mut self) {
        let start = HandEvent::HandStart(HandStartPayload {
            hero: self.state.hero(),
            stack_size: self.state.stack_size(),
        });
        self.record(start);
        for position in [Position::SB, Position::BB] {
            let amount = self.state.player(position).contributed;
            self.record(HandEvent::BlindPosted(BlindPayload { position, amount }));
        }
    }

    fn record(&mut self, event: HandEvent) {
        let mut to_remove = vec![];
        for (idx, historian) in self.historians.iter_mut().enumerate() {
            if let Err(error) = historian.record_event(self.id, &self.state, event.clone()) {
                if self.panic_on_historian_error {
                    panic!("Historian failed to record event: {error}");
                }
                warn!(?error, idx, "Historian failed to record event, removing it");
                to_remove.push(idx);
            }
        }
        for idx in to_remove.into_iter().rev() {
            self.historians.remove(idx);
        }
    }
}

/// Work out what happened between two states, in the order it happened.
fn events_between(before: &HandState, after: &HandState) -> Vec<HandEvent> {
    let mut events: Vec<HandEvent> = after.actions()[before.actions().len()..]
        .iter()
        .cloned()
        .map(HandEvent::PlayedAction)
        .collect();

    if let Some(street) = before.waiting_for() {
        if after.waiting_for() != Some(street) {
            events.push(HandEvent::BoardConfirmed(street));
        }
    }
    if after.phase() != before.phase() {
        events.push(HandEvent::StreetAdvance(after.phase()));
    }
    if after.is_complete() && !before.is_complete() {
        events.push(HandEvent::HandComplete(after.completion_type()));
    }
    if let Some(result) = after.result() {
        if before.result() != Some(result) {
            events.push(HandEvent::ResultSet(result.clone()));
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::tracker::historian::{HistoryRecord, VecHistorian};
    use crate::tracker::test_util::assert_valid_hand_state;
    use crate::tracker::{ActionKind, CompletionType, OpponentStyle, OpponentType};

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn session_with_storage(hero: Position) -> (HandSession, Rc<RefCell<Vec<HistoryRecord>>>) {
        let historian = VecHistorian::default();
        let storage = historian.get_storage();
        let session = HandSessionBuilder::new()
            .hero(hero)
            .historians(vec![Box::new(historian)])
            .build()
            .unwrap();
        (session, storage)
    }

    fn events(storage: &Rc<RefCell<Vec<HistoryRecord>>>) -> Vec<HandEvent> {
        storage.borrow().iter().map(|r| r.event.clone()).collect()
    }

    #[test]
    fn test_build_emits_start_and_blinds() {
        let (session, storage) = session_with_storage(Position::UTG);
        assert_eq!(
            vec![
                HandEvent::HandStart(HandStartPayload {
                    hero: Some(Position::UTG),
                    stack_size: 100.0
                }),
                HandEvent::BlindPosted(BlindPayload {
                    position: Position::SB,
                    amount: 0.5
                }),
                HandEvent::BlindPosted(BlindPayload {
                    position: Position::BB,
                    amount: 1.0
                }),
            ],
            events(&storage)
        );
        assert!(storage.borrow().iter().all(|r| r.hand_id == session.id()));
    }

    #[test]
    fn test_builder_rejects_bad_stack() {
        assert!(matches!(
            HandSessionBuilder::new().stack_size(0.0).build(),
            Err(HandStateBuilderError::InvalidStackSize(_))
        ));
    }

    #[test]
    fn test_tags_become_defaults() {
        let (mut session, _) = session_with_storage(Position::BTN);
        let fish = OpponentTags {
            opponent_type: Some(OpponentType::Fish),
            opponent_style: None,
        };

        session
            .act(Position::UTG, PlayerAction::Call, fish)
            .unwrap();
        assert_eq!(Some(OpponentType::Fish), session.default_tags().opponent_type);

        let style = OpponentTags {
            opponent_type: None,
            opponent_style: Some(OpponentStyle::LoosePassive),
        };
        session.act(Position::HJ, PlayerAction::Call, style).unwrap();

        let last = session.state().actions().last().unwrap();
        assert_eq!(Some(OpponentType::Fish), last.tags.opponent_type);
        assert_eq!(Some(OpponentStyle::LoosePassive), last.tags.opponent_style);

        session
            .act(Position::CO, PlayerAction::Fold, OpponentTags::default())
            .unwrap();
        assert_eq!(
            OpponentTags::new(OpponentType::Fish, OpponentStyle::LoosePassive),
            session.state().actions().last().unwrap().tags
        );
    }

    #[test]
    fn test_rejected_action_keeps_defaults() {
        let (mut session, storage) = session_with_storage(Position::BTN);
        let before = events(&storage).len();
        let fish = OpponentTags::new(OpponentType::Fish, OpponentStyle::Unknown);

        let res = session.act(Position::UTG, PlayerAction::Check, fish);

        assert_eq!(Err(HandError::CheckFacingBet), res);
        assert!(session.default_tags().is_empty());
        assert_eq!(before, events(&storage).len());
    }

    #[test]
    fn test_all_in_sentinel_resolves_to_stack() {
        let (mut session, _) = session_with_storage(Position::BTN);

        session
            .act(Position::BTN, PlayerAction::Raise(ALL_IN_SENTINEL), OpponentTags::default())
            .unwrap();
        let shove = session.state().actions().last().unwrap();
        assert_eq!(Some(100.0), shove.amount());
        assert!(session.state().player(Position::BTN).is_all_in());

        session
            .act(Position::SB, PlayerAction::Raise(ALL_IN_SENTINEL), OpponentTags::default())
            .unwrap();
        let sb = session.state().actions().last().unwrap();
        // Same stacks so the shove is really just a call.
        assert_eq!(ActionKind::Call, sb.kind());
        assert_eq!(Some(99.5), sb.amount());
    }

    #[test]
    fn test_only_the_exact_sentinel_shoves() {
        let mut session = HandSessionBuilder::new().stack_size(2000.0).build().unwrap();

        session
            .act(Position::UTG, PlayerAction::Raise(1500.0), OpponentTags::default())
            .unwrap();
        let utg = session.state().player(Position::UTG);
        assert_eq!(1500.0, utg.contributed);
        assert_eq!(500.0, utg.stack);

        session
            .act(Position::HJ, PlayerAction::Raise(ALL_IN_SENTINEL), OpponentTags::default())
            .unwrap();
        let hj = session.state().player(Position::HJ);
        assert!(hj.is_all_in());
        assert_eq!(2000.0, hj.contributed);
        assert_valid_hand_state(session.state());
    }

    #[test]
    fn test_all_in_bet_postflop() {
        let (mut session, _) = session_with_storage(Position::BTN);
        session
            .act(Position::BTN, PlayerAction::Raise(3.0), OpponentTags::default())
            .unwrap();
        session
            .act(Position::SB, PlayerAction::Fold, OpponentTags::default())
            .unwrap();
        session
            .act(Position::BB, PlayerAction::Call, OpponentTags::default())
            .unwrap();
        session
            .deal_flop([card("Ah"), card("7d"), card("2c")])
            .unwrap();

        session
            .act(Position::BB, PlayerAction::Bet(ALL_IN_SENTINEL), OpponentTags::default())
            .unwrap();
        assert_eq!(Some(97.0), session.state().actions().last().unwrap().amount());
        assert_valid_hand_state(session.state());
    }

    #[test]
    fn test_deal_only_the_waited_street() {
        let (mut session, _) = session_with_storage(Position::BTN);
        assert_eq!(
            Err(HandError::UnexpectedBoard {
                dealt: Phase::Flop,
                waiting: None
            }),
            session.deal_flop([card("Ah"), card("7d"), card("2c")])
        );

        session
            .act(Position::BTN, PlayerAction::Raise(2.5), OpponentTags::default())
            .unwrap();
        session
            .act(Position::SB, PlayerAction::Fold, OpponentTags::default())
            .unwrap();
        session
            .act(Position::BB, PlayerAction::Call, OpponentTags::default())
            .unwrap();

        assert_eq!(
            Err(HandError::UnexpectedBoard {
                dealt: Phase::Turn,
                waiting: Some(Phase::Flop)
            }),
            session.deal_turn(card("Ks"))
        );
        assert!(session.board().is_empty());
    }

    #[test]
    fn test_board_cards_cant_repeat_hero_cards() {
        let (mut session, _) = session_with_storage(Position::BTN);
        session.set_hero_hand([card("As"), card("Ks")]).unwrap();
        session
            .act(Position::BTN, PlayerAction::Raise(2.5), OpponentTags::default())
            .unwrap();
        session
            .act(Position::SB, PlayerAction::Fold, OpponentTags::default())
            .unwrap();
        session
            .act(Position::BB, PlayerAction::Call, OpponentTags::default())
            .unwrap();

        let res = session.deal_flop([card("As"), card("7d"), card("2c")]);
        assert_eq!(Err(HandError::Core(CoreError::DuplicateCard(card("As")))), res);
        assert!(session.state().is_waiting_for_board());
        assert!(session.board().is_empty());

        session
            .deal_flop([card("Ah"), card("7d"), card("2c")])
            .unwrap();
        assert!(!session.state().is_waiting_for_board());
        assert_eq!(3, session.board().len());

        assert_eq!(
            Err(HandError::Core(CoreError::DuplicateCard(card("7d")))),
            session.set_hero_hand([card("7d"), card("Kd")])
        );
        assert_eq!(
            Err(HandError::Core(CoreError::DuplicateCard(card("Kd")))),
            session.set_hero_hand([card("Kd"), card("Kd")])
        );
    }

    #[test]
    fn test_all_in_cascade_events() {
        let (mut session, storage) = session_with_storage(Position::BTN);
        session
            .act(Position::BTN, PlayerAction::Raise(ALL_IN_SENTINEL), OpponentTags::default())
            .unwrap();
        session
            .act(Position::SB, PlayerAction::Fold, OpponentTags::default())
            .unwrap();
        session
            .act(Position::BB, PlayerAction::Call, OpponentTags::default())
            .unwrap();

        storage.borrow_mut().clear();
        session
            .deal_flop([card("Ah"), card("7d"), card("2c")])
            .unwrap();
        assert_eq!(
            vec![
                HandEvent::BoardConfirmed(Phase::Flop),
                HandEvent::StreetAdvance(Phase::Turn)
            ],
            events(&storage)
        );

        session.deal_turn(card("9h")).unwrap();

        storage.borrow_mut().clear();
        session.deal_river(card("3s")).unwrap();
        assert_eq!(
            vec![
                HandEvent::BoardConfirmed(Phase::River),
                HandEvent::HandComplete(CompletionType::AllIn)
            ],
            events(&storage)
        );
        assert!(session.state().is_complete());
        assert_eq!(5, session.board().len());
    }

    #[test]
    fn test_action_events_then_street_advance() {
        let (mut session, storage) = session_with_storage(Position::BB);
        session
            .act(Position::SB, PlayerAction::Call, OpponentTags::default())
            .unwrap();
        storage.borrow_mut().clear();

        session
            .act(Position::BB, PlayerAction::Check, OpponentTags::default())
            .unwrap();

        let events = events(&storage);
        assert_eq!(2, events.len());
        assert!(matches!(&events[0], HandEvent::PlayedAction(r) if r.position == Position::BB));
        assert_eq!(HandEvent::StreetAdvance(Phase::Flop), events[1]);
    }

    #[test]
    fn test_result_and_completion_events() {
        let (mut session, storage) = session_with_storage(Position::BB);
        session
            .act(Position::SB, PlayerAction::Fold, OpponentTags::default())
            .unwrap();
        assert!(matches!(
            events(&storage).last(),
            Some(HandEvent::HandComplete(CompletionType::Fold))
        ));

        let result = HandResult::new(CompletionType::Fold, Position::BB, true, 0.5);
        session.set_result(result.clone()).unwrap();
        assert_eq!(Some(&HandEvent::ResultSet(result)), events(&storage).last());
    }

    #[test]
    fn test_reset_starts_fresh() {
        let (mut session, storage) = session_with_storage(Position::CO);
        let first_id = session.id();
        session
            .act(
                Position::CO,
                PlayerAction::Raise(2.5),
                OpponentTags::new(OpponentType::Fish, OpponentStyle::Unknown),
            )
            .unwrap();
        session.set_hero_hand([card("Qs"), card("Qh")]).unwrap();

        session.reset();

        assert_ne!(first_id, session.id());
        assert!(session.state().actions().is_empty());
        assert_eq!(Some(Position::CO), session.state().hero());
        assert_eq!(None, session.hero_hand());
        assert!(session.default_tags().is_empty());
        assert_eq!(Some(Position::UTG), session.state().current_actor());

        let after_reset: Vec<HistoryRecord> = storage
            .borrow()
            .iter()
            .filter(|r| r.hand_id == session.id())
            .cloned()
            .collect();
        assert_eq!(3, after_reset.len());
    }

    #[test]
    fn test_designate_hero_through_session() {
        let mut session = HandSessionBuilder::new().build().unwrap();
        session.designate_hero(Position::HJ).unwrap();
        assert_eq!(Some(Position::HJ), session.state().hero());
        assert_eq!(
            Err(HandError::HeroAlreadyDesignated(Position::HJ)),
            session.designate_hero(Position::BTN)
        );
    }
}
