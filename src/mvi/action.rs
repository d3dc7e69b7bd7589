//! Base trait for actions dispatched through a write channel.

/// Marker trait for action values.
///
/// Actions represent:
/// - User events (form submissions, button presses)
/// - System events (fetch results, hydration snapshots)
///
/// Each reducer owns a closed enum of actions and matches it exhaustively,
/// falling back to the unchanged state for anything it ignores.
pub trait Action: Send + 'static {}

impl<T: Send + 'static> Action for T {}
