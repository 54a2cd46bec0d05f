//! Property tests for the transition kernel.
//!
//! Random seeds drive rollouts with arbitrary legal moves; the invariants must
//! hold whatever the policy.

use proptest::prelude::*;
use tetris_lookahead::core::{GameState, UniformPieces};
use tetris_lookahead::types::{GRID_HEIGHT, GRID_WIDTH, LINE_SCORES};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn legal_steps_keep_invariants(seed in any::<u64>(), picks in prop::collection::vec(any::<usize>(), 1..60)) {
        let mut source = UniformPieces::seeded(seed);
        let mut state = GameState::new(&mut source);

        for pick in picks {
            let actions = state.legal_actions();
            prop_assert_eq!(actions.is_empty(), state.is_done());
            if actions.is_empty() {
                break;
            }

            let action = actions[pick % actions.len()];
            prop_assert!(state.is_legal(action));
            let shape_cells = state.front_shape(action.rotation).filled_count();
            let before = state.grid().occupied_count();

            let placement = state.placement(action).expect("legal action must fit");
            let cleared = placement.lines_cleared();
            prop_assert!(cleared <= 4);
            prop_assert_eq!(placement.score_delta, LINE_SCORES[cleared]);
            prop_assert_eq!(
                placement.grid.occupied_count(),
                before + shape_cells - cleared * GRID_WIDTH
            );
            for row in 0..cleared {
                prop_assert!(placement.grid.is_row_empty(row));
            }
            for row in 0..GRID_HEIGHT {
                prop_assert!(!placement.grid.is_row_full(row));
            }

            let next = state.step(action, &mut source);
            prop_assert_eq!(next.grid(), &placement.grid);
            prop_assert_eq!(next.grid().width(), GRID_WIDTH);
            prop_assert_eq!(next.grid().height(), GRID_HEIGHT);
            prop_assert_eq!(next.score(), state.score() + placement.score_delta);
            prop_assert_eq!(next.queue().len(), state.queue().len());
            prop_assert_eq!(&next.queue().as_slice()[..3], &state.queue().as_slice()[1..]);
            state = next;
        }
    }
}
