use thiserror::Error;

/// Errors surfaced by [`crate::DragScroll`].
///
/// Out-of-order or late pointer events are not errors; they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragScrollError {
    /// `attach` was called on an engine that is already attached.
    #[error("drag scroll engine is already attached; detach it first")]
    AlreadyAttached,
}
