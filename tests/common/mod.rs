//! Shared test utilities: a counter container with a hydrate variant.

#![allow(dead_code, unused_imports)]

use scopestate::config::Config;
use scopestate::hydration::HydrateAction;
use scopestate::mvi::Reducer;
use scopestate::ReducerContext;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

#[derive(Debug, Clone)]
pub enum CounterAction {
    Increment,
    Add(i64),
    Hydrate(CounterState),
    /// Not handled by the reducer; must be a no-op.
    Unknown,
}

impl HydrateAction for CounterAction {
    type Snapshot = CounterState;

    fn hydrate(snapshot: CounterState) -> Self {
        CounterAction::Hydrate(snapshot)
    }
}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CounterAction::Increment => CounterState {
                count: state.count + 1,
            },
            CounterAction::Add(n) => CounterState {
                count: state.count + n,
            },
            CounterAction::Hydrate(snapshot) => snapshot,
            _ => state,
        }
    }
}

pub fn counter_context(initial: i64) -> ReducerContext<CounterState, CounterAction> {
    ReducerContext::from_reducer::<CounterReducer>(CounterState { count: initial })
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
