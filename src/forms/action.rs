//! Pending-submission primitive.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures_core::future::BoxFuture;
use tokio::sync::Mutex;

use crate::context::Dispatch;
use crate::mvi::{Action, State};

pub(crate) type FormActionFn<S, D, A, E> =
    Arc<dyn Fn(S, D) -> BoxFuture<'static, Result<A, E>> + Send + Sync>;

/// Snapshot returned by `use_form_action`.
pub struct FormSubmission<S, A, D, E> {
    pub form_action: FormAction<S, A, D, E>,
    /// In-flight status when this snapshot was taken.
    pub is_pending: bool,
}

/// Submit trigger for one form.
///
/// Submissions are queued and run one at a time. The primitive tracks its
/// own value, which is handed to the form action as `prev` and is never
/// replaced: the reducer state stays the single source of truth.
pub struct FormAction<S, A, D, E> {
    inner: Arc<FormActionInner<S, A, D, E>>,
}

struct FormActionInner<S, A, D, E> {
    dispatch: Dispatch<A>,
    form_action: FormActionFn<S, D, A, E>,
    tracked: Mutex<S>,
    pending: AtomicUsize,
}

impl<S, A, D, E> FormAction<S, A, D, E>
where
    S: State,
    A: Action,
    D: Send + 'static,
    E: Send + 'static,
{
    pub(crate) fn new(
        dispatch: Dispatch<A>,
        form_action: FormActionFn<S, D, A, E>,
        initial: S,
    ) -> Self {
        Self {
            inner: Arc::new(FormActionInner {
                dispatch,
                form_action,
                tracked: Mutex::new(initial),
                pending: AtomicUsize::new(0),
            }),
        }
    }

    /// Submit `data`.
    ///
    /// Awaits the form action, dispatches the action it resolves to and
    /// returns the unchanged tracked value. A failing form action is
    /// returned as-is and dispatches nothing.
    pub async fn submit(&self, data: D) -> Result<S, E> {
        self.inner.pending.fetch_add(1, Ordering::SeqCst);
        let _pending = scopeguard::guard(&self.inner.pending, |pending| {
            pending.fetch_sub(1, Ordering::SeqCst);
        });

        let tracked = self.inner.tracked.lock().await;
        let prev = S::clone(&tracked);

        let action = match (self.inner.form_action)(prev.clone(), data).await {
            Ok(action) => action,
            Err(err) => {
                tracing::warn!(context = %self.inner.dispatch.context(), "form action failed");
                return Err(err);
            }
        };

        self.inner.dispatch.dispatch(action);
        drop(tracked);
        Ok(prev)
    }

    /// True while any submission is queued or running.
    pub fn is_pending(&self) -> bool {
        self.inner.pending.load(Ordering::SeqCst) > 0
    }

    pub fn status(&self) -> FormSubmission<S, A, D, E> {
        FormSubmission {
            form_action: self.clone(),
            is_pending: self.is_pending(),
        }
    }
}

impl<S, A, D, E> Clone for FormAction<S, A, D, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
