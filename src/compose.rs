//! Composition of several providers around one subtree.

use std::sync::Arc;

use crate::context::Provide;
use crate::scope::Scope;

/// Mount `providers` in order and run `children` in the innermost scope.
///
/// `providers[0]` is outermost, so `[a, b]` behaves like `a(b(children))`.
/// With no providers, `children` runs in `parent` itself.
pub fn combine<R>(
    providers: &[&dyn Provide],
    parent: &Scope,
    children: impl FnOnce(&Scope) -> R,
) -> R {
    let scope = providers
        .iter()
        .fold(parent.clone(), |scope, provider| provider.mount(&scope));
    children(&scope)
}

/// Owned provider list that mounts as one provider.
#[derive(Clone, Default)]
pub struct CombinedProvider {
    providers: Vec<Arc<dyn Provide>>,
}

impl CombinedProvider {
    pub fn new(providers: Vec<Arc<dyn Provide>>) -> Self {
        Self { providers }
    }

    /// Append a provider inside the ones already present.
    pub fn with(mut self, provider: impl Provide + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Provide for CombinedProvider {
    /// Returns the innermost scope; an empty list returns `parent`.
    fn mount(&self, parent: &Scope) -> Scope {
        self.providers
            .iter()
            .fold(parent.clone(), |scope, provider| provider.mount(&scope))
    }
}
