#![no_main]

extern crate approx;
extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate poker_hand_tracker;

use approx::assert_abs_diff_eq;

use poker_hand_tracker::core::Position;
use poker_hand_tracker::tracker::{
    Command, HandState, HandStateBuilder, OpponentTags, Phase, PlayerAction, apply,
};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
enum Step {
    Act(Position, PlayerAction, OpponentTags),
    ConfirmBoard,
}

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub hero: Option<Position>,
    pub stack_size: u8,
    pub steps: Vec<Step>,
}

fn assert_conserved(state: &HandState) {
    let logged: f32 = state.actions().iter().filter_map(|a| a.amount()).sum();
    assert_abs_diff_eq!(1.5 + logged, state.pot(), epsilon = 0.01);

    for player in state.players() {
        assert_abs_diff_eq!(state.stack_size(), player.starting_stack(), epsilon = 0.01);
        assert!(player.stack >= -0.01);
    }
    if state.is_complete() {
        assert_eq!(None, state.current_actor());
    }
}

fuzz_target!(|input: Input| {
    let Ok(mut state) = HandStateBuilder::new()
        .maybe_hero(input.hero)
        .stack_size(input.stack_size as f32)
        .build()
    else {
        return;
    };

    for step in input.steps {
        let command = match step {
            Step::Act(position, action, tags) if state.phase() == Phase::Preflop => {
                Command::Preflop { position, action, tags }
            }
            Step::Act(position, action, tags) => Command::Postflop { position, action, tags },
            Step::ConfirmBoard => Command::ConfirmBoard,
        };

        if let Ok(next) = apply(&state, command) {
            state = next;
        }
        assert_conserved(&state);
    }
});
