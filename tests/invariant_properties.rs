use ballot_days::actions::ActionKind;
use ballot_days::core::config::Tuning;
use ballot_days::core::rng::SeededRandom;
use ballot_days::game::{apply_command, Command, GameState};
use ballot_days::model::{PlayerStatus, PublicOpinion};
use ballot_days::persistence::{load_snapshot, save_snapshot, MemoryStore};
use ballot_days::timeline::Filter;
use proptest::prelude::*;

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => Just(Command::PerformAction(ActionKind::Vote)),
        4 => Just(Command::PerformAction(ActionKind::Talk)),
        4 => Just(Command::PerformAction(ActionKind::Post)),
        4 => Just(Command::AdvanceDay),
        1 => Just(Command::ElectionJoin),
        1 => Just(Command::ElectionLeave),
        1 => Just(Command::ElectionOpenVotingAndCompute),
        1 => Just(Command::SetFilter(Filter::News)),
        1 => Just(Command::Reset),
    ]
}

fn score() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(100.0), 0.0..=100.0]
}

/// Fields whose change must be logged
fn scored(state: &GameState) -> (PublicOpinion, PlayerStatus, u32, Vec<PublicOpinion>) {
    (
        state.opinion,
        state.status,
        state.followers.count(),
        state.friends.iter().map(|f| *f.leaning()).collect(),
    )
}

proptest! {
    #[test]
    fn property_scores_stay_clamped(
        seed in 0_u64..5_000,
        opinion in (score(), score(), score()),
        status in (score(), score(), score()),
        commands in prop::collection::vec(any_command(), 1..120),
    ) {
        let tuning = Tuning::default();
        let mut rng = SeededRandom::new(seed);
        let mut state = GameState::new_game(&tuning, &mut rng);
        state.opinion = PublicOpinion::new(opinion.0, opinion.1, opinion.2);
        state.status = PlayerStatus::new(status.0, status.1, status.2);

        for command in &commands {
            let out = apply_command(&state, command, &tuning, &mut rng);
            prop_assert!(out.state.in_bounds());
            state = out.state;
        }
    }

    #[test]
    fn property_every_mutation_is_logged(
        seed in 0_u64..5_000,
        commands in prop::collection::vec(any_command(), 1..120),
    ) {
        let tuning = Tuning::default();
        let mut rng = SeededRandom::new(seed);
        let mut state = GameState::new_game(&tuning, &mut rng);

        for command in &commands {
            let out = apply_command(&state, command, &tuning, &mut rng);

            if !out.accepted() {
                prop_assert_eq!(&out.state, &state);
                prop_assert!(out.events.is_empty());
            } else if *command == Command::Reset {
                prop_assert_eq!(out.state.events.len(), 1);
            } else {
                prop_assert_eq!(out.state.events.len(), state.events.len() + out.events.len());
                if scored(&out.state) != scored(&state) {
                    prop_assert!(!out.events.is_empty());
                }
                // the new entries sit at the front, ahead of everything older
                let newest: Vec<_> = out.state.events.latest(out.events.len()).cloned().collect();
                prop_assert_eq!(&newest, &out.events);
                let older: Vec<_> = out.state.events.iter().skip(out.events.len()).collect();
                let before: Vec<_> = state.events.iter().collect();
                prop_assert_eq!(older, before);
            }
            state = out.state;
        }
    }

    #[test]
    fn property_action_points_accounting(
        seed in 0_u64..5_000,
        commands in prop::collection::vec(any_command(), 1..80),
    ) {
        let tuning = Tuning::default();
        let mut rng = SeededRandom::new(seed);
        let mut state = GameState::new_game(&tuning, &mut rng);

        for command in &commands {
            let out = apply_command(&state, command, &tuning, &mut rng);
            match command {
                Command::PerformAction(_) if out.accepted() => {
                    prop_assert_eq!(out.state.action_points + 1, state.action_points);
                }
                Command::PerformAction(_) => {
                    prop_assert!(state.action_points == 0 || state.is_terminal());
                }
                Command::AdvanceDay if out.accepted() => {
                    prop_assert_eq!(state.action_points, 0);
                    prop_assert_eq!(out.state.action_points, tuning.action_points_per_day);
                }
                _ => {}
            }
            state = out.state;
        }
    }

    #[test]
    fn property_terminal_flags_only_cleared_by_reset(
        seed in 0_u64..5_000,
        commands in prop::collection::vec(any_command(), 1..150),
    ) {
        let tuning = Tuning::default();
        let mut rng = SeededRandom::new(seed);
        let mut state = GameState::new_game(&tuning, &mut rng);

        for command in &commands {
            let out = apply_command(&state, command, &tuning, &mut rng);
            if *command != Command::Reset {
                prop_assert!(!state.flags.is_game_over || out.state.flags.is_game_over);
                prop_assert!(!state.flags.is_cleared || out.state.flags.is_cleared);
            }
            prop_assert!(!(out.state.flags.is_game_over && out.state.flags.is_cleared));
            state = out.state;
        }
    }

    #[test]
    fn property_save_load_round_trip(
        seed in 0_u64..5_000,
        commands in prop::collection::vec(any_command(), 0..60),
    ) {
        let tuning = Tuning::default();
        let mut rng = SeededRandom::new(seed);
        let mut state = GameState::new_game(&tuning, &mut rng);
        for command in &commands {
            state = apply_command(&state, command, &tuning, &mut rng).state;
        }

        let mut store = MemoryStore::new();
        save_snapshot(&mut store, &state).expect("save");
        let loaded = load_snapshot(&store).expect("load").expect("present");
        prop_assert_eq!(loaded, state);
    }
}
