//! State triple for async operations.

/// Result of the most recent async operation.
///
/// Invariants kept by [`AsyncReducer`](super::AsyncReducer):
/// - `loading == true` implies `error.is_none()`
/// - a success replaces `data` wholesale and clears `error`
/// - a failure never touches `data`
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncState<T, E> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<E>,
}

impl<T, E> Default for AsyncState<T, E> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T, E> AsyncState<T, E> {
    /// Nothing has been requested yet (or the last request produced no data
    /// and no error).
    pub fn is_idle(&self) -> bool {
        !self.loading && self.data.is_none() && self.error.is_none()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }
}
