//! Drag-to-scroll for pointer-driven scroll containers.
//!
//! A [`DragScroll`] engine is attached to one [`ScrollTarget`] and fed pointer
//! events by whatever owns the window. It pans the target while a button is
//! held, coasts after release, and tells callers whether the release should
//! still count as a click.

pub mod animation;
pub mod config;
pub mod error;
pub mod scroll;

pub use config::{ClickPolicy, DragScrollConfig, Tracking};
pub use error::DragScrollError;
pub use scroll::pointer::{EventSource, PointerEvent, PointerKind, Sources};
pub use scroll::target::ScrollTarget;
pub use scroll::{DragScroll, Phase};
