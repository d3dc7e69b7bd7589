//! Trigger that drives an async operation through the state machine.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_core::future::BoxFuture;
use tokio::task::JoinHandle;

use crate::config::OverlapPolicy;
use crate::context::Dispatch;
use crate::mvi::State;

use super::action::AsyncAction;

pub(crate) type Fetcher<I, T, E> = Arc<dyn Fn(I) -> BoxFuture<'static, Result<T, E>> + Send + Sync>;

/// Request counter shared by every trigger of one mounted provider.
#[derive(Clone, Default)]
pub(crate) struct Generation(Arc<AtomicU64>);

impl Generation {
    fn issue(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

/// Invocable returned by `use_trigger`.
///
/// Each call dispatches `Start`, awaits the fetcher, then dispatches
/// `Success` or `Error`. Failures are never returned to the caller; they
/// only show up in state.
pub struct Trigger<I, T, E> {
    dispatch: Dispatch<AsyncAction<T, E>>,
    fetcher: Fetcher<I, T, E>,
    generation: Generation,
    overlap: OverlapPolicy,
}

impl<I, T, E> Trigger<I, T, E>
where
    I: Send + 'static,
    T: State,
    E: State,
{
    pub(crate) fn new(
        dispatch: Dispatch<AsyncAction<T, E>>,
        fetcher: Fetcher<I, T, E>,
        generation: Generation,
        overlap: OverlapPolicy,
    ) -> Self {
        Self {
            dispatch,
            fetcher,
            generation,
            overlap,
        }
    }

    /// Run one request to completion.
    ///
    /// Overlapping calls are not cancelled. Under
    /// [`OverlapPolicy::LastWriteWins`] results land in resolution order;
    /// under [`OverlapPolicy::LatestOnly`] a result is dropped if a newer
    /// call was issued on the same provider while it was in flight.
    ///
    /// Only an `Err` from the fetcher counts as a failure. A fetcher that
    /// panics unwinds out of `call` after `Start`, leaving `loading` set
    /// until the next call settles.
    pub async fn call(&self, input: I) {
        let ticket = self.generation.issue();
        self.dispatch.dispatch(AsyncAction::Start);

        let result = (self.fetcher)(input).await;

        if self.overlap == OverlapPolicy::LatestOnly && !self.generation.is_latest(ticket) {
            tracing::debug!(
                context = %self.dispatch.context(),
                ticket,
                "dropping superseded async result"
            );
            return;
        }

        match result {
            Ok(data) => self.dispatch.dispatch(AsyncAction::Success(data)),
            Err(error) => {
                tracing::debug!(context = %self.dispatch.context(), "async operation failed");
                self.dispatch.dispatch(AsyncAction::Error(error));
            }
        }
    }

    /// Run [`Trigger::call`] on the tokio runtime.
    pub fn spawn(&self, input: I) -> JoinHandle<()> {
        let trigger = self.clone();
        tokio::spawn(async move { trigger.call(input).await })
    }

    pub fn overlap(&self) -> OverlapPolicy {
        self.overlap
    }
}

impl<I, T, E> Clone for Trigger<I, T, E> {
    fn clone(&self) -> Self {
        Self {
            dispatch: self.dispatch.clone(),
            fetcher: Arc::clone(&self.fetcher),
            generation: self.generation.clone(),
            overlap: self.overlap,
        }
    }
}
