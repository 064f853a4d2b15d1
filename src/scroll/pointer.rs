use std::time::Instant;

/// A pointer sample as forwarded by the host. Coordinates are in the same
/// space as the target's scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub timestamp: Instant,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32, timestamp: Instant) -> Self {
        Self { x, y, timestamp }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// The press ended without a release we can trust (focus lost, etc).
    Cancel,
}

/// Where an event was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    /// The scroll target itself.
    Target,
    /// A caller-owned stand-in for the target, e.g. a drag handle.
    Surrogate(u32),
    /// The whole window.
    Window,
}

/// The sources an engine listens on once attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sources {
    /// Receives `Down`.
    pub press: EventSource,
    /// Receives `Move`, `Up` and `Cancel`.
    pub tracking: EventSource,
}

impl Sources {
    /// Everything on the target.
    pub fn element() -> Self {
        Self { press: EventSource::Target, tracking: EventSource::Target }
    }

    /// Press on the target, track across the whole window.
    pub fn window() -> Self {
        Self { press: EventSource::Target, tracking: EventSource::Window }
    }

    pub fn with_press(mut self, press: EventSource) -> Self {
        self.press = press;
        self
    }
}

/// One registered (source, kind) pair. Removal targets exactly this pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Listener {
    pub source: EventSource,
    pub kind: PointerKind,
}

impl Listener {
    pub fn for_sources(sources: Sources) -> Vec<Listener> {
        vec![
            Listener { source: sources.press, kind: PointerKind::Down },
            Listener { source: sources.tracking, kind: PointerKind::Move },
            Listener { source: sources.tracking, kind: PointerKind::Up },
            Listener { source: sources.tracking, kind: PointerKind::Cancel },
        ]
    }
}
