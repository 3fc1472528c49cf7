use approx::assert_abs_diff_eq;

use crate::core::Position;

use super::action::{ActionKind, OpponentTags, PlayerAction};
use super::hand_state::{HandState, HandStateBuilder, Phase};

pub fn new_hand(hero: Option<Position>, stack_size: f32) -> HandState {
    HandStateBuilder::new()
        .maybe_hero(hero)
        .stack_size(stack_size)
        .build()
        .unwrap()
}

/// Every chip a player started with is either behind or in the pot.
pub fn assert_chips_conserved(state: &HandState) {
    for player in state.players() {
        assert_abs_diff_eq!(
            state.stack_size(),
            player.starting_stack(),
            epsilon = 0.001
        );
        assert!(
            player.stack >= -0.001,
            "{} has a negative stack: {}",
            player.position,
            player.stack
        );
    }
}

/// The pot is the blinds plus every recorded amount, and also the sum of
/// what everyone has put in.
pub fn assert_pot_conserved(state: &HandState) {
    let logged: f32 = state.actions().iter().filter_map(|a| a.amount()).sum();
    assert_abs_diff_eq!(1.5 + logged, state.pot(), epsilon = 0.001);

    let contributed: f32 = state.players().iter().map(|p| p.total_contributed).sum();
    assert_abs_diff_eq!(contributed, state.pot(), epsilon = 0.001);

    let details = state.pot_details();
    assert_abs_diff_eq!(
        details.total_pot,
        details.starting_pot + details.added_this_street,
        epsilon = 0.001
    );
}

pub fn assert_valid_hand_state(state: &HandState) {
    assert_chips_conserved(state);
    assert_pot_conserved(state);

    // Nobody still able to act has put in more than the current bet.
    for player in state.players().iter().filter(|p| !p.folded) {
        assert!(
            player.contributed <= state.current_bet() + 0.001,
            "{} contributed {} over a bet of {}",
            player.position,
            player.contributed,
            state.current_bet()
        );
    }

    if let Some(actor) = state.current_actor() {
        assert!(state.player(actor).can_act());
        assert!(!state.is_waiting_for_board());
    }
    if state.is_complete() {
        assert_eq!(None, state.current_actor());
    }

    // The log is in street order.
    let phases: Vec<Phase> = state.actions().iter().map(|a| a.phase).collect();
    assert!(phases.windows(2).all(|w| w[0] <= w[1]));
}

/// Check (or call when facing a bet) until the street changes or the hand
/// ends.
pub fn check_down_street(state: &mut HandState) {
    let phase = state.phase();
    while let Some(actor) = state.current_actor() {
        if state.phase() != phase {
            break;
        }
        let action = if state.available_actions(actor).contains(&ActionKind::Check) {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        };
        state
            .add_action(actor, action, OpponentTags::default())
            .unwrap();
        assert_valid_hand_state(state);
    }
}
