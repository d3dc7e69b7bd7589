//! Read and write channels backed by one state cell.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

use crate::mvi::{Action, ReducerFn, State};
use crate::scope::ContextId;

/// One reducer-driven state cell owned by a mounted provider.
pub(crate) struct Store<S, A> {
    id: ContextId,
    cell: Arc<watch::Sender<S>>,
    reducer: ReducerFn<S, A>,
}

impl<S: State, A: Action> Store<S, A> {
    pub(crate) fn new(id: ContextId, initial: S, reducer: ReducerFn<S, A>) -> Self {
        let (cell, _) = watch::channel(initial);
        Self {
            id,
            cell: Arc::new(cell),
            reducer,
        }
    }

    /// Apply the reducer synchronously and notify subscribers.
    fn dispatch(&self, action: A) {
        let reducer = &self.reducer;
        self.cell.send_modify(|state| {
            let current = state.clone();
            *state = reducer(current, action);
        });
        tracing::trace!(context = %self.id, "action dispatched");
    }

    pub(crate) fn state_handle(&self) -> StateHandle<S> {
        StateHandle {
            id: self.id,
            cell: Arc::clone(&self.cell),
        }
    }

    pub(crate) fn dispatcher(self: &Arc<Self>) -> Dispatch<A> {
        let store = Arc::clone(self);
        Dispatch {
            id: self.id,
            sink: Arc::new(move |action| store.dispatch(action)),
        }
    }
}

impl<S, A> Drop for Store<S, A> {
    fn drop(&mut self) {
        tracing::debug!(context = %self.id, "state cell released");
    }
}

/// Read channel: current state of the nearest provider.
///
/// Holding a `StateHandle` never grants the ability to dispatch.
pub struct StateHandle<S> {
    id: ContextId,
    cell: Arc<watch::Sender<S>>,
}

impl<S: State> StateHandle<S> {
    /// Clone of the current state.
    pub fn get(&self) -> S {
        self.cell.borrow().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver starts with the current value marked as seen, so
    /// `changed().await` resolves on the next dispatch.
    ///
    /// A `watch::Ref` from `borrow()` holds the cell's read lock. Dispatching
    /// to the same provider while it is alive blocks forever; drop it (or
    /// clone the value out) first.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.cell.subscribe()
    }

    pub fn context(&self) -> ContextId {
        self.id
    }
}

impl<S> Clone for StateHandle<S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<S> fmt::Debug for StateHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateHandle").field("context", &self.id).finish()
    }
}

/// Write channel: submits actions to the nearest provider's reducer.
///
/// Does not expose the state, so holders are not coupled to its shape.
pub struct Dispatch<A> {
    id: ContextId,
    sink: Arc<dyn Fn(A) + Send + Sync>,
}

impl<A: Action> Dispatch<A> {
    /// Apply `action` to the provider's state.
    ///
    /// The reducer runs before this returns; subscribers are woken after.
    pub fn dispatch(&self, action: A) {
        (self.sink)(action)
    }

    /// True when both handles write to the same mounted state cell.
    pub fn same_channel(&self, other: &Dispatch<A>) -> bool {
        Arc::ptr_eq(&self.sink, &other.sink)
    }

    pub fn context(&self) -> ContextId {
        self.id
    }
}

impl<A> Clone for Dispatch<A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            sink: Arc::clone(&self.sink),
        }
    }
}

impl<A> fmt::Debug for Dispatch<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch").field("context", &self.id).finish()
    }
}
