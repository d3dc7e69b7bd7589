//! One-shot hydration of a freshly mounted provider from server state.

use serde::de::DeserializeOwned;

use crate::codec::{self, CodecError};
use crate::context::Dispatch;
use crate::mvi::Action;

/// Action type that carries a hydrate variant.
///
/// The reducer must handle that variant itself (usually by replacing the
/// state); the bridge never merges anything.
pub trait HydrateAction: Action + Sized {
    type Snapshot: DeserializeOwned;

    fn hydrate(snapshot: Self::Snapshot) -> Self;
}

/// Hydration bound to one mounted provider.
///
/// Remembers the server state it last saw so repeated activations with the
/// same value do nothing.
#[derive(Debug)]
pub struct Hydration<A> {
    dispatch: Dispatch<A>,
    last_seen: String,
    dispatched: bool,
}

/// Decode `server_state` and dispatch it as a hydrate action.
///
/// An empty `server_state` dispatches nothing. Decode failures are returned
/// as-is; there is no fallback state.
pub fn use_hydrate<A>(
    dispatch: &Dispatch<A>,
    server_state: &str,
) -> Result<Hydration<A>, CodecError>
where
    A: HydrateAction,
{
    let mut hydration = Hydration {
        dispatch: dispatch.clone(),
        last_seen: server_state.to_string(),
        dispatched: false,
    };
    hydration.dispatched = hydration.apply(server_state)?;
    Ok(hydration)
}

impl<A: HydrateAction> Hydration<A> {
    /// Re-run with a new server state.
    ///
    /// Returns `Ok(true)` if a hydrate action was dispatched. Input identical
    /// to the last successfully applied value is a no-op; a value that failed
    /// to decode is not recorded and fails again on the next call.
    pub fn update(&mut self, server_state: &str) -> Result<bool, CodecError> {
        if self.last_seen == server_state {
            return Ok(false);
        }
        let dispatched = self.apply(server_state)?;
        self.last_seen = server_state.to_string();
        self.dispatched |= dispatched;
        Ok(dispatched)
    }

    /// Whether any hydrate action has been dispatched by this bridge.
    pub fn dispatched(&self) -> bool {
        self.dispatched
    }

    fn apply(&self, server_state: &str) -> Result<bool, CodecError> {
        if server_state.is_empty() {
            return Ok(false);
        }
        let snapshot = codec::deserialize::<A::Snapshot>(server_state)?;
        self.dispatch.dispatch(A::hydrate(snapshot));
        tracing::debug!(
            context = %self.dispatch.context(),
            "state hydrated from server snapshot"
        );
        Ok(true)
    }
}
