//! Scope tree that providers mount into.
//!
//! A [`Scope`] is the stand-in for a node of a component tree. Providers
//! mount by creating a child scope and registering channel values in it;
//! consumers look values up by walking from their own scope towards the
//! root, so the nearest enclosing provider wins.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised when a channel accessor runs outside its provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// No provider for the requested context is mounted above the caller.
    #[error("{accessor} must be used within a Provider (missing provider for `{context}`)")]
    MissingProvider {
        accessor: &'static str,
        context: &'static str,
    },
}

/// Identity of one context pair.
///
/// Every factory call mints a fresh id, so two factories with identical
/// state and action types never resolve each other's providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId {
    id: Uuid,
    label: &'static str,
}

impl ContextId {
    pub fn new(label: &'static str) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
        }
    }

    /// Human-readable label used in errors and logs.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.label, self.id.simple())
    }
}

type Entries = HashMap<(ContextId, TypeId), Arc<dyn Any + Send + Sync>>;

/// Node in the scope tree.
///
/// Cloning a `Scope` clones a handle; the node lives until the last handle
/// (including those held by descendants) is dropped.
#[derive(Clone)]
pub struct Scope {
    inner: Arc<ScopeInner>,
}

struct ScopeInner {
    parent: Option<Scope>,
    depth: usize,
    entries: RwLock<Entries>,
}

impl Scope {
    /// Create a detached root scope with no providers.
    pub fn root() -> Self {
        Self {
            inner: Arc::new(ScopeInner {
                parent: None,
                depth: 0,
                entries: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Create a child scope whose lookups fall back to `self`.
    pub fn child(&self) -> Self {
        Self {
            inner: Arc::new(ScopeInner {
                parent: Some(self.clone()),
                depth: self.inner.depth + 1,
                entries: RwLock::new(HashMap::new()),
            }),
        }
    }

    pub fn parent(&self) -> Option<&Scope> {
        self.inner.parent.as_ref()
    }

    /// Distance from the root (root is 0).
    pub fn depth(&self) -> usize {
        self.inner.depth
    }

    /// Register `value` in this scope under `id`.
    ///
    /// Values are keyed by `(id, type)`, so one context can expose several
    /// channels of different types.
    pub fn provide<T>(&self, id: ContextId, value: T)
    where
        T: Any + Send + Sync,
    {
        self.inner
            .entries
            .write()
            .insert((id, TypeId::of::<T>()), Arc::new(value));
    }

    /// Find the nearest value registered under `id` with type `T`.
    pub fn lookup<T>(&self, id: ContextId) -> Option<T>
    where
        T: Any + Clone + Send + Sync,
    {
        let key = (id, TypeId::of::<T>());
        let mut current = Some(self);
        while let Some(scope) = current {
            if let Some(value) = scope.inner.entries.read().get(&key) {
                return value.downcast_ref::<T>().cloned();
            }
            current = scope.parent();
        }
        None
    }

    /// Like [`Scope::lookup`], but reports a missing provider as an error.
    pub fn require<T>(&self, id: ContextId, accessor: &'static str) -> Result<T, ContextError>
    where
        T: Any + Clone + Send + Sync,
    {
        self.lookup(id).ok_or(ContextError::MissingProvider {
            accessor,
            context: id.label(),
        })
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("depth", &self.inner.depth)
            .field("entries", &self.inner.entries.read().len())
            .finish()
    }
}
