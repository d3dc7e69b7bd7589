//! Form submission adapter built on a reducer context.
//!
//! A form action turns submitted data into a reducer action; the adapter
//! forwards that action to the provider and reports whether a submission
//! is in flight. Unlike [`crate::async_state`], failures are not modelled
//! as state: they go back to whoever called `submit`.

mod action;

use std::future::Future;
use std::sync::Arc;

use futures_core::future::BoxFuture;

pub use action::{FormAction, FormSubmission};

use crate::context::{Provider, ReducerContext, StateHandle};
use crate::mvi::{Action, State};
use crate::scope::{ContextError, Scope};

use action::FormActionFn;

pub struct FormContext<S, A, D, E> {
    context: ReducerContext<S, A>,
    form_action: FormActionFn<S, D, A, E>,
}

impl<S, A, D, E> FormContext<S, A, D, E>
where
    S: State,
    A: Action,
    D: Send + 'static,
    E: Send + 'static,
{
    pub fn new<R, F, Fut>(reducer: R, form_action: F, initial_state: S) -> Self
    where
        R: Fn(S, A) -> S + Send + Sync + 'static,
        F: Fn(S, D) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        let form_action: FormActionFn<S, D, A, E> = Arc::new(move |prev, data| {
            Box::pin(form_action(prev, data)) as BoxFuture<'static, Result<A, E>>
        });
        Self {
            context: ReducerContext::new(reducer, initial_state),
            form_action,
        }
    }

    pub fn provider(&self) -> Provider<S, A> {
        self.context.provider()
    }

    pub fn use_state(&self, scope: &Scope) -> Result<StateHandle<S>, ContextError> {
        self.context.use_state(scope)
    }

    /// Create a submission primitive bound to the nearest provider.
    ///
    /// Every call yields an independent primitive with its own pending
    /// status.
    pub fn use_form_action(
        &self,
        scope: &Scope,
    ) -> Result<FormSubmission<S, A, D, E>, ContextError> {
        let dispatch = self.context.use_dispatch(scope)?;
        let form_action = FormAction::new(
            dispatch,
            Arc::clone(&self.form_action),
            self.context.initial_state().clone(),
        );
        Ok(form_action.status())
    }
}
