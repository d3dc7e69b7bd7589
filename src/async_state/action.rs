//! Actions for the async state machine.

/// The only three transitions an async container accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncAction<T, E> {
    /// A request was issued.
    Start,

    /// The request resolved with a value.
    Success(T),

    /// The request failed.
    Error(E),
}
