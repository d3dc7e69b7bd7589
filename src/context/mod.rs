//! Reducer-backed context pairs.
//!
//! [`ReducerContext::new`] takes a pure reducer and an initial state and
//! yields a provider plus two independent accessors:
//!
//! - [`ReducerContext::use_state`] → [`StateHandle`] (read channel)
//! - [`ReducerContext::use_dispatch`] → [`Dispatch`] (write channel)
//!
//! A consumer that only dispatches never observes state changes, and one
//! that only reads is never coupled to the action type.
//!
//! ```ignore
//! let counter = ReducerContext::new(|n: i32, a: CounterAction| match a {
//!     CounterAction::Add(d) => n + d,
//! }, 0);
//!
//! counter.provider().render(&Scope::root(), |scope| {
//!     counter.use_dispatch(scope)?.dispatch(CounterAction::Add(1));
//!     assert_eq!(counter.use_state(scope)?.get(), 1);
//!     Ok::<_, ContextError>(())
//! })?;
//! ```

mod channel;
mod provider;

use std::sync::Arc;

pub use channel::{Dispatch, StateHandle};
pub use provider::{Provide, Provider};

use crate::mvi::{Action, Reducer, ReducerFn, State};
use crate::scope::{ContextError, ContextId, Scope};

/// Factory output: one context pair and its provider.
///
/// Each call to [`ReducerContext::new`] owns a distinct [`ContextId`];
/// there is no process-wide context shared between factories.
pub struct ReducerContext<S, A> {
    id: ContextId,
    reducer: ReducerFn<S, A>,
    initial: Arc<S>,
}

impl<S: State, A: Action> ReducerContext<S, A> {
    pub fn new<F>(reducer: F, initial_state: S) -> Self
    where
        F: Fn(S, A) -> S + Send + Sync + 'static,
    {
        Self {
            id: ContextId::new(std::any::type_name::<S>()),
            reducer: Arc::new(reducer),
            initial: Arc::new(initial_state),
        }
    }

    /// Build a context from a [`Reducer`] implementation.
    pub fn from_reducer<R>(initial_state: S) -> Self
    where
        R: Reducer<State = S, Action = A> + 'static,
    {
        Self::new(R::reduce, initial_state)
    }

    pub fn provider(&self) -> Provider<S, A> {
        Provider::new(self.id, Arc::clone(&self.reducer), Arc::clone(&self.initial))
    }

    /// Read channel of the nearest enclosing provider.
    pub fn use_state(&self, scope: &Scope) -> Result<StateHandle<S>, ContextError> {
        scope.require(self.id, "use_state")
    }

    /// Write channel of the nearest enclosing provider.
    pub fn use_dispatch(&self, scope: &Scope) -> Result<Dispatch<A>, ContextError> {
        scope.require(self.id, "use_dispatch")
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }
}

impl<S, A> Clone for ReducerContext<S, A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            reducer: Arc::clone(&self.reducer),
            initial: Arc::clone(&self.initial),
        }
    }
}
