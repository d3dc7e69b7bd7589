//! Model-View-Intent (MVI) primitives shared by every container.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ subscribers
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: value owned by one mounted provider
//! - **Action**: closed enum of events a reducer understands
//! - **Reducer**: pure function that transforms state based on actions

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::{Reducer, ReducerFn};
pub use state::State;
