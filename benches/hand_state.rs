use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

use poker_hand_tracker::core::Position;
use poker_hand_tracker::tracker::{
    ActionKind, Command, HandState, HandStateBuilder, OpponentTags, PlayerAction, apply,
};

fn new_hand() -> HandState {
    HandStateBuilder::new()
        .hero(Position::BTN)
        .stack_size(100.0)
        .build()
        .unwrap()
}

/// Play a hand to the end with random legal actions, confirming boards as
/// they come up.
fn play_random_hand<R: Rng>(rng: &mut R) -> HandState {
    let mut state = new_hand();
    while !state.is_complete() {
        if state.is_waiting_for_board() {
            state.confirm_board();
            continue;
        }
        let Some(actor) = state.current_actor() else {
            break;
        };
        let options = state.available_actions(actor);
        let action = match options[rng.gen_range(0..options.len())] {
            ActionKind::Fold => PlayerAction::Fold,
            ActionKind::Check => PlayerAction::Check,
            ActionKind::Call => PlayerAction::Call,
            ActionKind::Bet => PlayerAction::Bet(rng.gen_range(1.0..20.0)),
            ActionKind::Raise => {
                PlayerAction::Raise(state.current_bet() * rng.gen_range(2.0..4.0))
            }
        };
        state.add_action(actor, action, OpponentTags::default()).unwrap();
    }
    state
}

fn bench_random_hands(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_hands");
    for count in [1, 100] {
        group.bench_with_input(BenchmarkId::new("in_place", count), &count, |b, &count| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                for _ in 0..count {
                    std::hint::black_box(play_random_hand(&mut rng));
                }
            });
        });
    }
    group.finish();
}

fn bench_apply_check_down(c: &mut Criterion) {
    c.bench_function("apply_check_down", |b| {
        b.iter(|| {
            let mut state = new_hand();
            let preflop = [
                (Position::BTN, PlayerAction::Raise(2.5)),
                (Position::SB, PlayerAction::Fold),
                (Position::BB, PlayerAction::Call),
            ];
            for (position, action) in preflop {
                state = apply(
                    &state,
                    Command::Preflop {
                        position,
                        action,
                        tags: OpponentTags::default(),
                    },
                )
                .unwrap();
            }
            while !state.is_complete() {
                state = apply(&state, Command::ConfirmBoard).unwrap();
                for position in [Position::BB, Position::BTN] {
                    state = apply(
                        &state,
                        Command::Postflop {
                            position,
                            action: PlayerAction::Check,
                            tags: OpponentTags::default(),
                        },
                    )
                    .unwrap();
                }
            }
            std::hint::black_box(state)
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let state = play_random_hand(&mut rng);
    c.bench_function("snapshot", |b| {
        b.iter(|| std::hint::black_box(state.snapshot()));
    });
}

criterion_group!(
    benches,
    bench_random_hands,
    bench_apply_check_down,
    bench_snapshot
);
criterion_main!(benches);
