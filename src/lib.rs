//! Scope-bound, type-safe state containers.
//!
//! - [`context`] - reducer-backed context pairs (read channel + write channel)
//! - [`async_state`] - `(data, loading, error)` state machine around a fetcher
//! - [`forms`] - form submission adapter
//! - [`hydration`] - seed a provider from a server-serialized snapshot
//! - [`compose`] - mount several providers as one

pub mod async_state;
pub mod codec;
pub mod compose;
pub mod config;
pub mod context;
pub mod forms;
pub mod hydration;
pub mod logging;
pub mod mvi;
pub mod scope;

pub use async_state::{AsyncContext, AsyncState, FetchError, Trigger};
pub use compose::{combine, CombinedProvider};
pub use context::{Dispatch, Provide, Provider, ReducerContext, StateHandle};
pub use forms::{FormAction, FormContext, FormSubmission};
pub use hydration::{use_hydrate, HydrateAction, Hydration};
pub use scope::{ContextError, Scope};
