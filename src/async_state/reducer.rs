//! Reducer for the async state machine.

use std::marker::PhantomData;

use crate::mvi::{Reducer, State};

use super::action::AsyncAction;
use super::state::AsyncState;

/// Reducer for [`AsyncState`] transitions.
///
/// | Current | Action       | Next                                   |
/// |---------|--------------|----------------------------------------|
/// | any     | `Start`      | data unchanged, loading, no error      |
/// | any     | `Success(v)` | data = v, not loading, no error        |
/// | any     | `Error(e)`   | data unchanged, not loading, error = e |
pub struct AsyncReducer<T, E>(PhantomData<fn() -> (T, E)>);

impl<T: State, E: State> Reducer for AsyncReducer<T, E> {
    type State = AsyncState<T, E>;
    type Action = AsyncAction<T, E>;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AsyncAction::Start => AsyncState {
                data: state.data,
                loading: true,
                error: None,
            },

            AsyncAction::Success(data) => AsyncState {
                data: Some(data),
                loading: false,
                error: None,
            },

            AsyncAction::Error(error) => AsyncState {
                data: state.data,
                loading: false,
                error: Some(error),
            },
        }
    }
}
