//! Provider trait and the reducer-backed provider.

use std::sync::Arc;

use crate::mvi::{Action, ReducerFn, State};
use crate::scope::{ContextId, Scope};

use super::channel::Store;

/// Something that can be mounted above a subtree.
///
/// Mounting creates a child of `parent`, registers this provider's channels
/// in it and returns it; the subtree then runs inside the returned scope.
/// Dropping every handle to that scope unmounts the provider.
pub trait Provide: Send + Sync {
    fn mount(&self, parent: &Scope) -> Scope;

    /// Mount and run `children` inside the new scope.
    fn render<R>(&self, parent: &Scope, children: impl FnOnce(&Scope) -> R) -> R
    where
        Self: Sized,
    {
        let scope = self.mount(parent);
        children(&scope)
    }
}

/// Provider for one [`ReducerContext`](super::ReducerContext).
///
/// Every mount allocates a fresh state cell seeded with the initial state;
/// mounts never share state.
pub struct Provider<S, A> {
    id: ContextId,
    reducer: ReducerFn<S, A>,
    initial: Arc<S>,
}

impl<S: State, A: Action> Provider<S, A> {
    pub(crate) fn new(id: ContextId, reducer: ReducerFn<S, A>, initial: Arc<S>) -> Self {
        Self {
            id,
            reducer,
            initial,
        }
    }

    pub fn context(&self) -> ContextId {
        self.id
    }
}

impl<S: State, A: Action> Provide for Provider<S, A> {
    fn mount(&self, parent: &Scope) -> Scope {
        let scope = parent.child();
        let store = Arc::new(Store::new(
            self.id,
            S::clone(&self.initial),
            Arc::clone(&self.reducer),
        ));
        scope.provide(self.id, store.state_handle());
        scope.provide(self.id, store.dispatcher());
        tracing::debug!(context = %self.id, depth = scope.depth(), "provider mounted");
        scope
    }
}

impl<S, A> Clone for Provider<S, A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            reducer: Arc::clone(&self.reducer),
            initial: Arc::clone(&self.initial),
        }
    }
}
