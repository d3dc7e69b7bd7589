//! Async state machine built on a reducer context.
//!
//! Wraps one async operation and tracks it as an [`AsyncState`] triple.
//!
//! # Architecture
//!
//! - `state.rs` - `(data, loading, error)` triple
//! - `action.rs` - `Start`, `Success`, `Error`
//! - `reducer.rs` - state transitions (pure, no side effects)
//! - `trigger.rs` - runs the fetcher and dispatches around it

mod action;
mod error;
mod reducer;
mod state;
mod trigger;

use std::future::Future;
use std::sync::Arc;

use futures_core::future::BoxFuture;

pub use action::AsyncAction;
pub use error::FetchError;
pub use reducer::AsyncReducer;
pub use state::AsyncState;
pub use trigger::Trigger;

use crate::config::{AsyncStateConfig, OverlapPolicy};
use crate::context::{Provide, Provider, ReducerContext, StateHandle};
use crate::mvi::State;
use crate::scope::{ContextError, Scope};

use trigger::{Fetcher, Generation};

/// Async container: provider, read channel and trigger for one fetcher.
///
/// The fetcher takes a single input value; use a tuple or struct when a
/// request needs several parameters.
pub struct AsyncContext<I, T, E> {
    context: ReducerContext<AsyncState<T, E>, AsyncAction<T, E>>,
    fetcher: Fetcher<I, T, E>,
    overlap: OverlapPolicy,
}

impl<I, T, E> AsyncContext<I, T, E>
where
    I: Send + 'static,
    T: State,
    E: State,
{
    pub fn new<F, Fut>(fetcher: F) -> Self
    where
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let fetcher: Fetcher<I, T, E> =
            Arc::new(move |input| Box::pin(fetcher(input)) as BoxFuture<'static, Result<T, E>>);
        Self {
            context: ReducerContext::from_reducer::<AsyncReducer<T, E>>(AsyncState::default()),
            fetcher,
            overlap: OverlapPolicy::default(),
        }
    }

    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn with_config(self, config: &AsyncStateConfig) -> Self {
        self.with_overlap(config.overlap)
    }

    pub fn provider(&self) -> AsyncProvider<T, E> {
        AsyncProvider {
            inner: self.context.provider(),
        }
    }

    pub fn use_state(
        &self,
        scope: &Scope,
    ) -> Result<StateHandle<AsyncState<T, E>>, ContextError> {
        self.context.use_state(scope)
    }

    pub fn use_trigger(&self, scope: &Scope) -> Result<Trigger<I, T, E>, ContextError> {
        let dispatch = self.context.use_dispatch(scope)?;
        let generation = scope.require::<Generation>(self.context.id(), "use_trigger")?;
        Ok(Trigger::new(
            dispatch,
            Arc::clone(&self.fetcher),
            generation,
            self.overlap,
        ))
    }
}

/// Provider for an [`AsyncContext`].
///
/// Mounts the reducer state cell plus the request counter used by
/// [`OverlapPolicy::LatestOnly`].
pub struct AsyncProvider<T, E> {
    inner: Provider<AsyncState<T, E>, AsyncAction<T, E>>,
}

impl<T: State, E: State> Provide for AsyncProvider<T, E> {
    fn mount(&self, parent: &Scope) -> Scope {
        let scope = self.inner.mount(parent);
        scope.provide(self.inner.context(), Generation::default());
        scope
    }
}

impl<T, E> Clone for AsyncProvider<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
