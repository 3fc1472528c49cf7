use std::fmt;
use std::fmt::Display;

use approx::abs_diff_eq;
use tracing::{debug, instrument, trace};

use crate::core::{NUM_SEATS, Position};

use super::action::{ActionKind, ActionRecord, OpponentTags, PlayedAction, PlayerAction};
use super::errors::{HandError, HandStateBuilderError};
use super::result::{CompletionType, HandResult};

/// Everything is measured in big blinds.
pub const BIG_BLIND: f32 = 1.0;
pub const SMALL_BLIND: f32 = 0.5;
pub const DEFAULT_STACK_SIZE: f32 = 100.0;

/// A stack at or below this is treated as all in. Contributions are
/// fractional big blinds so exact zero can't be relied on.
pub const ALL_IN_EPSILON: f32 = 0.01;
/// Float noise allowed when comparing a contribution against the bet.
const MATCH_EPSILON: f32 = 1e-4;

/// The betting round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Phase {
    #[default]
    Preflop,
    Flop,
    Turn,
    River,
}

impl Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Preflop => write!(f, "Preflop"),
            Phase::Flop => write!(f, "Flop"),
            Phase::Turn => write!(f, "Turn"),
            Phase::River => write!(f, "River"),
        }
    }
}

impl Phase {
    /// The street after this one, `None` after the river.
    pub fn next(&self) -> Option<Phase> {
        match *self {
            Phase::Preflop => Some(Phase::Flop),
            Phase::Flop => Some(Phase::Turn),
            Phase::Turn => Some(Phase::River),
            Phase::River => None,
        }
    }
}

/// One seat's chips and status for the hand.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub position: Position,
    /// Chips left behind.
    pub stack: f32,
    /// Put in on the current street only.
    pub contributed: f32,
    /// Put in over the whole hand.
    pub total_contributed: f32,
    pub folded: bool,
    pub is_hero: bool,
    pub has_acted_this_street: bool,
}

impl Player {
    fn new(position: Position, stack: f32, is_hero: bool) -> Self {
        Player {
            position,
            stack,
            contributed: 0.0,
            total_contributed: 0.0,
            folded: false,
            is_hero,
            has_acted_this_street: false,
        }
    }

    pub fn is_all_in(&self) -> bool {
        self.stack <= ALL_IN_EPSILON
    }

    /// Still in the hand with chips behind.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.is_all_in()
    }

    /// Has this player put in enough to meet `current_bet` on this street.
    pub fn has_matched(&self, current_bet: f32) -> bool {
        self.contributed >= current_bet
            || abs_diff_eq!(self.contributed, current_bet, epsilon = MATCH_EPSILON)
    }

    pub fn starting_stack(&self) -> f32 {
        self.stack + self.total_contributed
    }

    fn put_in(&mut self, amount: f32) {
        self.stack -= amount;
        self.contributed += amount;
        self.total_contributed += amount;
    }
}

/// The betting state of the current street. Replaced wholesale when the
/// next street starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Street {
    pub phase: Phase,
    pub pot: f32,
    /// The pot when this street started.
    pub starting_pot: f32,
    /// The per-street contribution everyone has to match.
    pub current_bet: f32,
    pub last_aggressor: Option<Position>,
    /// Voluntary bets and raises on this street. Blinds don't count.
    pub raise_count: u8,
}

impl Street {
    fn new(phase: Phase, pot: f32) -> Self {
        Street {
            phase,
            pot,
            starting_pot: pot,
            current_bet: 0.0,
            last_aggressor: None,
            raise_count: 0,
        }
    }
}

/// Breakdown of the pot for display.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotDetails {
    pub starting_pot: f32,
    pub added_this_street: f32,
    pub total_pot: f32,
}

/// The name for the next bet or raise on the current street.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RaiseLabel {
    Open,
    /// 3-bet, 4-bet and so on.
    NBet(u8),
    Bet,
    Raise,
    ReRaise,
}

impl Display for RaiseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaiseLabel::Open => write!(f, "Open"),
            RaiseLabel::NBet(n) => write!(f, "{n}-bet"),
            RaiseLabel::Bet => write!(f, "Bet"),
            RaiseLabel::Raise => write!(f, "Raise"),
            RaiseLabel::ReRaise => write!(f, "Re-raise"),
        }
    }
}

/// A copy of everything a view needs to render the hand.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandSnapshot {
    pub players: [Player; NUM_SEATS],
    pub pot: f32,
    pub phase: Phase,
    pub current_actor: Option<Position>,
    pub actions: Vec<ActionRecord>,
    pub is_complete: bool,
    pub current_bet: f32,
    pub waiting_for_board: bool,
}

/// A single request to the hand state machine.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Record a preflop action. Any live seats between the current actor
    /// and `position` are folded first.
    Preflop {
        position: Position,
        action: PlayerAction,
        tags: OpponentTags,
    },
    /// Record a postflop action. `position` must be the current actor.
    Postflop {
        position: Position,
        action: PlayerAction,
        tags: OpponentTags,
    },
    /// The board for the street being waited on has been entered.
    ConfirmBoard,
    /// Same as `ConfirmBoard` but a no-op when nothing is waiting.
    ForceAdvance,
    DesignateHero(Position),
    SetResult(HandResult),
}

/// Apply a command to a state, returning the new state.
///
/// The input state is never modified, so a rejected command leaves the
/// caller holding exactly what it had.
///
/// # Example
///
/// ```
/// use poker_hand_tracker::core::Position;
/// use poker_hand_tracker::tracker::{Command, HandStateBuilder, PlayerAction, apply};
///
/// let state = HandStateBuilder::new().hero(Position::UTG).build().unwrap();
/// let next = apply(
///     &state,
///     Command::Preflop {
///         position: Position::UTG,
///         action: PlayerAction::Raise(3.0),
///         tags: Default::default(),
///     },
/// )
/// .unwrap();
///
/// assert_eq!(Some(Position::HJ), next.current_actor());
/// assert_eq!(Some(Position::UTG), state.current_actor());
/// ```
pub fn apply(state: &HandState, command: Command) -> Result<HandState, HandError> {
    state.apply(command)
}

/// Builder for constructing a `HandState` with validation.
///
/// # Example
///
/// ```
/// use poker_hand_tracker::tracker::HandStateBuilder;
///
/// let state = HandStateBuilder::new().stack_size(40.0).build().unwrap();
///
/// assert_eq!(state.pot(), 1.5);
/// assert_eq!(state.current_bet(), 1.0);
/// ```
#[derive(Default, Clone, Debug)]
pub struct HandStateBuilder {
    hero: Option<Position>,
    stack_size: Option<f32>, // Default: DEFAULT_STACK_SIZE
}

impl HandStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The seat of the player being tracked. Defaults to nobody.
    pub fn hero(mut self, hero: Position) -> Self {
        self.hero = Some(hero);
        self
    }

    pub fn maybe_hero(mut self, hero: Option<Position>) -> Self {
        self.hero = hero;
        self
    }

    /// Starting stack for every seat, in big blinds. Defaults to 100.
    pub fn stack_size(mut self, stack_size: f32) -> Self {
        self.stack_size = Some(stack_size);
        self
    }

    pub fn build(self) -> Result<HandState, HandStateBuilderError> {
        let stack_size = self.stack_size.unwrap_or(DEFAULT_STACK_SIZE);
        if !stack_size.is_finite() || stack_size < BIG_BLIND {
            return Err(HandStateBuilderError::InvalidStackSize(stack_size));
        }

        let mut players =
            Position::ALL.map(|pos| Player::new(pos, stack_size, Some(pos) == self.hero));
        players[Position::SB.ordinal()].put_in(SMALL_BLIND);
        players[Position::BB.ordinal()].put_in(BIG_BLIND);

        let mut street = Street::new(Phase::Preflop, SMALL_BLIND + BIG_BLIND);
        street.current_bet = BIG_BLIND;

        debug!(hero = ?self.hero, stack_size, "Starting hand");

        Ok(HandState {
            stack_size,
            hero: self.hero,
            players,
            street,
            actions: Vec::new(),
            current_actor: Some(Position::UTG),
            waiting_for_board: false,
            result: None,
        })
    }
}

/// The state of one 6-max hand from the blinds to the result.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandState {
    stack_size: f32,
    hero: Option<Position>,
    players: [Player; NUM_SEATS],
    street: Street,
    actions: Vec<ActionRecord>,
    /// Who acts next once the board (if any) is confirmed.
    current_actor: Option<Position>,
    waiting_for_board: bool,
    result: Option<HandResult>,
}

impl HandState {
    /// Return the state after `command`, leaving `self` untouched.
    pub fn apply(&self, command: Command) -> Result<HandState, HandError> {
        let mut next = self.clone();
        next.execute(command)?;
        Ok(next)
    }

    /// Run a command in place. On error nothing has changed.
    pub fn execute(&mut self, command: Command) -> Result<(), HandError> {
        match command {
            Command::Preflop {
                position,
                action,
                tags,
            } => self.add_preflop_action(position, action, tags),
            Command::Postflop {
                position,
                action,
                tags,
            } => self.add_postflop_action(position, action, tags),
            Command::ConfirmBoard => {
                self.confirm_board();
                Ok(())
            }
            Command::ForceAdvance => {
                self.force_advance();
                Ok(())
            }
            Command::DesignateHero(position) => self.designate_hero(position),
            Command::SetResult(result) => self.set_result(result),
        }
    }

    /// Record a preflop action for `position`.
    ///
    /// When `position` isn't the current actor every seat from the current
    /// actor up to (not including) `position` that could still act is
    /// folded first. The requested action is validated before any of
    /// those folds happen.
    #[instrument(level = "debug", skip(self, tags))]
    pub fn add_preflop_action(
        &mut self,
        position: Position,
        action: PlayerAction,
        tags: OpponentTags,
    ) -> Result<(), HandError> {
        if self.street.phase != Phase::Preflop {
            return Err(HandError::NotPreflop(self.street.phase));
        }
        let current = self.ensure_accepting_actions()?;
        let played = self.validate_action(position, action)?;

        if position != current {
            self.fold_between(current, position);
        }
        self.commit(position, played, tags);
        self.advance_to_next_actor(position);
        Ok(())
    }

    /// Record a postflop action. Only the current actor may act.
    #[instrument(level = "debug", skip(self, tags))]
    pub fn add_postflop_action(
        &mut self,
        position: Position,
        action: PlayerAction,
        tags: OpponentTags,
    ) -> Result<(), HandError> {
        if self.street.phase == Phase::Preflop {
            return Err(HandError::NotPostflop);
        }
        let current = self.ensure_accepting_actions()?;
        if position != current {
            return Err(HandError::NotPlayersTurn {
                position,
                current: Some(current),
            });
        }
        let played = self.validate_action(position, action)?;

        self.commit(position, played, tags);
        self.advance_to_next_actor(position);
        Ok(())
    }

    /// Record an action using whichever entry point the current street
    /// calls for.
    pub fn add_action(
        &mut self,
        position: Position,
        action: PlayerAction,
        tags: OpponentTags,
    ) -> Result<(), HandError> {
        if self.street.phase == Phase::Preflop {
            self.add_preflop_action(position, action, tags)
        } else {
            self.add_postflop_action(position, action, tags)
        }
    }

    /// Called once the board cards for the street being waited on have
    /// been entered.
    ///
    /// When nobody left in the hand can act, the next street is prepared
    /// straight away and the state goes back to waiting, so an all in hand
    /// needs one confirmation per street until the river.
    #[instrument(level = "debug", skip(self), fields(phase = %self.street.phase))]
    pub fn confirm_board(&mut self) {
        if !self.waiting_for_board {
            trace!("Not waiting for a board, nothing to confirm");
            return;
        }

        self.waiting_for_board = false;
        let anyone_can_act = self.num_can_act() > 0;

        if self.street.phase == Phase::River {
            if !anyone_can_act {
                debug!("River dealt with everyone all in, hand complete");
                self.current_actor = None;
            }
            return;
        }

        if !anyone_can_act {
            debug!("Everyone is all in, moving straight to the next board");
            self.prepare_next_street();
            self.waiting_for_board = true;
        }
    }

    /// Confirm the board if one is being waited on.
    pub fn force_advance(&mut self) {
        if self.waiting_for_board {
            self.confirm_board();
        }
    }

    /// Mark `position` as the hero. The hero can only be chosen once.
    pub fn designate_hero(&mut self, position: Position) -> Result<(), HandError> {
        match self.hero {
            Some(hero) if hero != position => Err(HandError::HeroAlreadyDesignated(hero)),
            _ => {
                self.hero = Some(position);
                self.players[position.ordinal()].is_hero = true;
                Ok(())
            }
        }
    }

    pub fn set_result(&mut self, result: HandResult) -> Result<(), HandError> {
        if !self.is_complete() {
            return Err(HandError::HandIncomplete);
        }
        debug!(winner = %result.winner, hero_won = result.hero_won, "Result set");
        self.result = Some(result);
        Ok(())
    }

    /// Who has to act now. `None` when the hand is over or the board for
    /// the next street hasn't been confirmed.
    pub fn current_actor(&self) -> Option<Position> {
        if self.is_complete() || self.waiting_for_board {
            None
        } else {
            self.current_actor
        }
    }

    pub fn is_complete(&self) -> bool {
        self.num_unfolded() <= 1 || (self.current_actor.is_none() && !self.waiting_for_board)
    }

    pub fn is_waiting_for_board(&self) -> bool {
        self.waiting_for_board
    }

    /// The street whose board is needed before play can go on.
    pub fn waiting_for(&self) -> Option<Phase> {
        self.waiting_for_board.then_some(self.street.phase)
    }

    pub fn can_check(&self, position: Position) -> bool {
        let player = self.player(position);
        !player.folded && player.has_matched(self.street.current_bet)
    }

    /// How much `position` needs to put in to match the current bet.
    pub fn to_call(&self, position: Position) -> f32 {
        (self.street.current_bet - self.player(position).contributed).max(0.0)
    }

    /// The kinds of action open to `position`, ignoring whose turn it is.
    pub fn available_actions(&self, position: Position) -> Vec<ActionKind> {
        if self.player(position).folded {
            return vec![];
        }

        if self.can_check(position) {
            let open = if self.street.phase != Phase::Preflop && self.street.current_bet == 0.0 {
                ActionKind::Bet
            } else {
                ActionKind::Raise
            };
            vec![ActionKind::Check, open]
        } else {
            vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise]
        }
    }

    /// Seats an action can be entered for right now. Preflop that's every
    /// live seat from the current actor round the table, since picking a
    /// later seat folds the ones in between. Postflop it's just the
    /// current actor.
    pub fn selectable_positions(&self) -> Vec<Position> {
        let Some(current) = self.current_actor() else {
            return vec![];
        };

        if self.street.phase == Phase::Preflop {
            current
                .clockwise()
                .filter(|p| !self.player(*p).folded)
                .collect()
        } else {
            vec![current]
        }
    }

    pub fn pot(&self) -> f32 {
        self.street.pot
    }

    pub fn pot_details(&self) -> PotDetails {
        PotDetails {
            starting_pot: self.street.starting_pot,
            added_this_street: self.street.pot - self.street.starting_pot,
            total_pot: self.street.pot,
        }
    }

    pub fn phase(&self) -> Phase {
        self.street.phase
    }

    pub fn current_bet(&self) -> f32 {
        self.street.current_bet
    }

    pub fn raise_count(&self) -> u8 {
        self.street.raise_count
    }

    pub fn raise_label(&self) -> RaiseLabel {
        if self.street.phase == Phase::Preflop {
            match self.street.raise_count {
                0 => RaiseLabel::Open,
                n => RaiseLabel::NBet(n.saturating_add(2)),
            }
        } else if self.street.current_bet == 0.0 {
            RaiseLabel::Bet
        } else if self.street.raise_count == 1 {
            RaiseLabel::Raise
        } else {
            RaiseLabel::ReRaise
        }
    }

    pub fn street(&self) -> &Street {
        &self.street
    }

    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    pub fn players(&self) -> &[Player; NUM_SEATS] {
        &self.players
    }

    pub fn player(&self, position: Position) -> &Player {
        &self.players[position.ordinal()]
    }

    pub fn hero(&self) -> Option<Position> {
        self.hero
    }

    pub fn stack_size(&self) -> f32 {
        self.stack_size
    }

    pub fn num_unfolded(&self) -> usize {
        self.players.iter().filter(|p| !p.folded).count()
    }

    pub fn num_can_act(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    /// How the hand ended, or would end if it stopped now.
    pub fn completion_type(&self) -> CompletionType {
        if self.num_unfolded() == 1 {
            CompletionType::Fold
        } else if self.num_can_act() == 0 {
            CompletionType::AllIn
        } else {
            CompletionType::Showdown
        }
    }

    pub fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    pub fn is_ready_for_result(&self) -> bool {
        self.is_complete() && self.result.is_none()
    }

    pub fn snapshot(&self) -> HandSnapshot {
        HandSnapshot {
            players: self.players.clone(),
            pot: self.street.pot,
            phase: self.street.phase,
            current_actor: self.current_actor(),
            actions: self.actions.clone(),
            is_complete: self.is_complete(),
            current_bet: self.street.current_bet,
            waiting_for_board: self.waiting_for_board,
        }
    }

    fn ensure_accepting_actions(&self) -> Result<Position, HandError> {
        if self.is_complete() {
            return Err(HandError::HandComplete);
        }
        if self.waiting_for_board {
            return Err(HandError::WaitingForBoard(self.street.phase));
        }
        self.current_actor.ok_or(HandError::HandComplete)
    }

    /// Check an action against the current street and work out what it
    /// actually does, capping bets and raises at the player's stack.
    fn validate_action(
        &self,
        position: Position,
        action: PlayerAction,
    ) -> Result<PlayedAction, HandError> {
        let player = self.player(position);
        if player.folded {
            return Err(HandError::PlayerFolded(position));
        }
        if player.is_all_in() {
            return Err(HandError::PlayerAllIn(position));
        }

        let current_bet = self.street.current_bet;
        let to_call = current_bet - player.contributed;
        let facing_bet = !player.has_matched(current_bet);

        match action {
            PlayerAction::Fold if !facing_bet => Err(HandError::FoldWhenCheckAvailable),
            PlayerAction::Fold => Ok(PlayedAction::Fold),
            PlayerAction::Check if facing_bet => Err(HandError::CheckFacingBet),
            PlayerAction::Check => Ok(PlayedAction::Check),
            PlayerAction::Call if !facing_bet => Err(HandError::NothingToCall),
            PlayerAction::Call => Ok(PlayedAction::Call {
                amount: to_call.min(player.stack),
            }),
            PlayerAction::Bet(_) if current_bet > 0.0 => Err(HandError::BetAlreadyOpen),
            PlayerAction::Bet(size) => {
                validate_size(size)?;
                Ok(PlayedAction::Bet {
                    amount: size.min(player.stack),
                })
            }
            PlayerAction::Raise(to) => {
                validate_size(to)?;
                if to <= current_bet {
                    return Err(HandError::RaiseTooSmall { to, current_bet });
                }
                let capped_to = to.min(player.stack + player.contributed);
                Ok(PlayedAction::Raise {
                    amount: capped_to - player.contributed,
                    to: capped_to,
                })
            }
        }
    }

    /// Apply an already validated action and append it to the log.
    fn commit(&mut self, position: Position, played: PlayedAction, tags: OpponentTags) {
        let street = &mut self.street;
        let player = &mut self.players[position.ordinal()];

        match played {
            PlayedAction::Fold => player.folded = true,
            PlayedAction::Check => {}
            PlayedAction::Call { amount } => player.put_in(amount),
            PlayedAction::Bet { amount } => {
                player.put_in(amount);
                street.current_bet = player.contributed;
                street.last_aggressor = Some(position);
                street.raise_count = street.raise_count.saturating_add(1);
            }
            PlayedAction::Raise { amount, to } => {
                player.put_in(amount);
                player.contributed = to;
                // A short all in that doesn't reach the current bet
                // neither lowers it nor counts as aggression.
                if to > street.current_bet {
                    street.current_bet = to;
                    street.last_aggressor = Some(position);
                    street.raise_count = street.raise_count.saturating_add(1);
                }
            }
        }

        player.has_acted_this_street = true;
        street.pot += played.amount().unwrap_or(0.0);

        let record = ActionRecord::new(position, played, street.pot, street.phase, tags);
        trace!(action = %record, stack = player.stack, "Recorded action");
        self.actions.push(record);
    }

    /// Fold every seat that could still act, walking clockwise from `from`
    /// and stopping before `to`.
    fn fold_between(&mut self, from: Position, to: Position) {
        let skipped: Vec<Position> = from
            .clockwise()
            .take_while(|p| *p != to)
            .filter(|p| self.player(*p).can_act())
            .collect();

        debug!(?skipped, %to, "Skipping ahead");
        for position in skipped {
            self.commit(position, PlayedAction::Fold, OpponentTags::default());
        }
    }

    fn next_actor_after(&self, position: Position) -> Option<Position> {
        position.next_matching(|p| self.player(p).can_act())
    }

    fn advance_to_next_actor(&mut self, acted: Position) {
        if self.num_unfolded() <= 1 {
            debug!("Everyone else folded");
            self.current_actor = None;
            return;
        }

        let next = self.next_actor_after(acted);
        if !self.is_street_complete(next) {
            // No one able to act while the street is still open can't
            // really happen; treat it as the end of the hand.
            self.current_actor = next;
            return;
        }

        if self.street.phase == Phase::River {
            debug!("River betting closed");
            self.current_actor = None;
        } else {
            self.waiting_for_board = true;
            self.prepare_next_street();
        }
    }

    /// Has betting on this street closed, given `next` would act next.
    fn is_street_complete(&self, next: Option<Position>) -> bool {
        if self.num_unfolded() <= 1 {
            return true;
        }

        let mut can_act = self.players.iter().filter(|p| p.can_act()).peekable();
        if can_act.peek().is_none() {
            return true;
        }
        if can_act.any(|p| !p.has_acted_this_street) {
            return false;
        }

        let current_bet = self.street.current_bet;
        let unmatched = self
            .players
            .iter()
            .any(|p| p.can_act() && !p.has_matched(current_bet));
        if unmatched {
            return false;
        }

        // The big blind gets the option in a limped pot.
        if self.street.phase == Phase::Preflop && self.street.raise_count == 0 {
            let bb = self.player(Position::BB);
            if bb.can_act() && !bb.has_acted_this_street {
                return false;
            }
        }

        trace!(
            ?next,
            aggressor = ?self.street.last_aggressor,
            back_to_aggressor = next.is_some() && next == self.street.last_aggressor,
            "Street complete"
        );
        true
    }

    fn prepare_next_street(&mut self) {
        let Some(phase) = self.street.phase.next() else {
            return;
        };

        for player in self.players.iter_mut() {
            player.contributed = 0.0;
            player.has_acted_this_street = false;
        }
        self.street = Street::new(phase, self.street.pot);

        self.current_actor = if self.player(Position::SB).can_act() {
            Some(Position::SB)
        } else {
            self.next_actor_after(Position::SB)
        };
        if self.current_actor.is_none() {
            self.waiting_for_board = true;
        }

        debug!(%phase, first_actor = ?self.current_actor, pot = self.street.pot, "Next street");
    }
}

fn validate_size(size: f32) -> Result<(), HandError> {
    if size.is_nan() || size <= 0.0 {
        Err(HandError::InvalidBetSize(size))
    } else {
        Ok(())
    }
}
