//! Reducer for the title rotator.

use crate::ui::mvi::Reducer;

use super::intent::RotatorIntent;
use super::state::{Phase, RotationState};

/// Reducer for rotator phase transitions.
///
/// Pure function: the scheduler decides when a tick happens (see
/// [`RotationTimings::delay_for`](super::RotationTimings::delay_for)),
/// this only decides what the tick does.
pub struct RotatorReducer;

impl Reducer for RotatorReducer {
    type State = RotationState;
    type Intent = RotatorIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RotatorIntent::Tick => {
                if state.reduced_motion || state.titles.is_empty() {
                    return state;
                }

                match state.phase {
                    Phase::Typing => {
                        let typed = state.typed_len();
                        let title = &state.titles[state.current_index];
                        if let Some(next) = title.chars().nth(typed) {
                            state.displayed.push(next);
                        }
                        if state.displayed.len() == title.len() {
                            state.phase = Phase::PausingAfterType;
                        }
                    }
                    Phase::PausingAfterType => {
                        state.phase = Phase::Deleting;
                    }
                    Phase::Deleting => {
                        state.displayed.pop();
                        if state.displayed.is_empty() {
                            state.phase = Phase::PausingAfterDelete;
                        }
                    }
                    Phase::PausingAfterDelete => {
                        state.current_index = (state.current_index + 1) % state.titles.len();
                        state.phase = Phase::Typing;
                    }
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(state: RotationState) -> RotationState {
        RotatorReducer::reduce(state, RotatorIntent::Tick)
    }

    fn tick_n(mut state: RotationState, n: usize) -> RotationState {
        for _ in 0..n {
            state = tick(state);
        }
        state
    }

    #[test]
    fn typing_appends_one_char() {
        let state = tick(RotationState::new(["Engineer"]).unwrap());
        assert_eq!(state.displayed(), "E");
        assert_eq!(state.phase(), Phase::Typing);
    }

    #[test]
    fn last_typed_char_enters_pause() {
        let state = tick_n(RotationState::new(["Engineer"]).unwrap(), 8);
        assert_eq!(state.displayed(), "Engineer");
        assert_eq!(state.phase(), Phase::PausingAfterType);
    }

    #[test]
    fn pause_after_type_keeps_buffer() {
        let state = tick_n(RotationState::new(["Engineer"]).unwrap(), 9);
        assert_eq!(state.displayed(), "Engineer");
        assert_eq!(state.phase(), Phase::Deleting);
    }

    #[test]
    fn deleting_removes_from_end() {
        let state = tick_n(RotationState::new(["Engineer"]).unwrap(), 10);
        assert_eq!(state.displayed(), "Enginee");
        assert_eq!(state.phase(), Phase::Deleting);
    }

    #[test]
    fn empty_buffer_enters_pause_after_delete() {
        let state = tick_n(RotationState::new(["ab", "cd"]).unwrap(), 2 + 1 + 2);
        assert_eq!(state.displayed(), "");
        assert_eq!(state.phase(), Phase::PausingAfterDelete);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn pause_after_delete_advances_index() {
        let state = tick_n(RotationState::new(["ab", "cd"]).unwrap(), 2 + 1 + 2 + 1);
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.phase(), Phase::Typing);
        assert_eq!(state.displayed(), "");
    }

    #[test]
    fn index_wraps_to_start() {
        // "a": 1 type + 1 pause + 1 delete + 1 pause = 4 ticks per title
        let state = tick_n(RotationState::new(["a", "b"]).unwrap(), 8);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.phase(), Phase::Typing);
    }

    #[test]
    fn multibyte_titles_type_by_char() {
        let state = tick_n(RotationState::new(["Développeur"]).unwrap(), 2);
        assert_eq!(state.displayed(), "Dé");
        let state = tick_n(state, 9);
        assert_eq!(state.displayed(), "Développeur");
        assert_eq!(state.phase(), Phase::PausingAfterType);
    }

    #[test]
    fn reduced_motion_ignores_ticks() {
        let pinned = RotationState::new(["Engineer", "Writer"]).unwrap().pinned();
        let state = tick_n(pinned.clone(), 50);
        assert_eq!(state, pinned);
    }

    #[test]
    fn default_state_ignores_ticks() {
        let state = tick(RotationState::default());
        assert_eq!(state, RotationState::default());
    }
}
