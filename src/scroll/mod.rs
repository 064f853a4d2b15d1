pub mod axis;
pub mod pointer;
pub mod state;
pub mod target;

use std::time::Instant;

use crate::animation::{release_acceleration, Coast};
use crate::config::{ClickPolicy, DragScrollConfig};
use crate::error::DragScrollError;

use axis::{Axis, AxisBinding};
use pointer::{EventSource, Listener, PointerEvent, PointerKind, Sources};
use state::GateMemory;
use target::ScrollTarget;

pub use state::{Phase, Press};

/// Everything that exists only while the engine is attached.
struct Attachment<T> {
    target: T,
    axis: AxisBinding<T>,
    listeners: Vec<Listener>,
    phase: Phase,
    gate: GateMemory,
}

/// Drag-to-scroll engine for a single target.
///
/// The host forwards pointer events either through [`DragScroll::dispatch`]
/// (tagged with the source they arrived on) or straight to the `on_pointer_*`
/// handlers, and calls [`DragScroll::tick`] from its event loop so momentum
/// can run. Nothing here blocks or spawns.
pub struct DragScroll<T: ScrollTarget> {
    config: DragScrollConfig,
    attachment: Option<Attachment<T>>,
}

impl<T: ScrollTarget> DragScroll<T> {
    pub fn new(config: DragScrollConfig) -> Self {
        Self { config, attachment: None }
    }

    pub fn config(&self) -> &DragScrollConfig {
        &self.config
    }

    pub fn axis(&self) -> Axis {
        self.attachment
            .as_ref()
            .map(|a| a.axis.axis)
            .unwrap_or_else(|| Axis::from_vertical(self.config.vertical))
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    pub fn target(&self) -> Option<&T> {
        self.attachment.as_ref().map(|a| &a.target)
    }

    pub fn target_mut(&mut self) -> Option<&mut T> {
        self.attachment.as_mut().map(|a| &mut a.target)
    }

    /// Current phase; `Idle` when detached.
    pub fn phase(&self) -> Phase {
        self.attachment.as_ref().map(|a| a.phase).unwrap_or_default()
    }

    pub fn is_pressed(&self) -> bool {
        self.phase().is_pressed()
    }

    pub fn is_coasting(&self) -> bool {
        self.phase().is_coasting()
    }

    /// Offset of the target along the active axis.
    pub fn offset(&self) -> Option<f32> {
        self.attachment.as_ref().map(|a| a.axis.offset(&a.target))
    }

    pub fn max_offset(&self) -> Option<f32> {
        self.attachment.as_ref().map(|a| a.axis.max_offset(&a.target))
    }

    // ── lifecycle ───────────────────────────────────────────────────────

    /// Bind `target` and start listening on `sources`.
    pub fn attach(&mut self, target: T, sources: Sources) -> Result<(), DragScrollError> {
        if self.attachment.is_some() {
            return Err(DragScrollError::AlreadyAttached);
        }
        let axis = AxisBinding::resolve(Axis::from_vertical(self.config.vertical));
        let listeners = Listener::for_sources(sources);
        for l in &listeners {
            log::trace!("listen {:?} on {:?}", l.kind, l.source);
        }
        log::debug!("attached ({:?} axis, {:?} policy)", axis.axis, self.config.policy);
        self.attachment = Some(Attachment {
            target,
            axis,
            listeners,
            phase: Phase::Idle,
            gate: GateMemory::default(),
        });
        Ok(())
    }

    /// Remove every listener, cancel any pending coast tick and hand the
    /// target back. Does nothing on a detached engine.
    pub fn detach(&mut self) -> Option<T> {
        let mut attachment = self.attachment.take()?;
        for l in attachment.listeners.drain(..) {
            log::trace!("unlisten {:?} on {:?}", l.kind, l.source);
        }
        if let Phase::Coasting(coast) = attachment.phase {
            log::debug!("detach cancels coast (acceleration {})", coast.acceleration());
        }
        log::debug!("detached");
        Some(attachment.target)
    }

    /// Swap the target of an attached engine, returning the old one.
    ///
    /// Interaction state is reset since a press against the old target means
    /// nothing for the new one. A detached engine hands `target` back as `Err`.
    pub fn bind_target(&mut self, target: T) -> Result<T, T> {
        let Some(a) = self.attachment.as_mut() else {
            return Err(target);
        };
        a.phase = Phase::Idle;
        a.gate = GateMemory::default();
        Ok(std::mem::replace(&mut a.target, target))
    }

    // ── pointer events ──────────────────────────────────────────────────

    /// Deliver an event that arrived on `source`. Returns whether a listener
    /// registered at attach time picked it up.
    pub fn dispatch(&mut self, source: EventSource, kind: PointerKind, event: &PointerEvent) -> bool {
        let listening = self
            .attachment
            .as_ref()
            .is_some_and(|a| a.listeners.contains(&Listener { source, kind }));
        if !listening {
            return false;
        }
        match kind {
            PointerKind::Down => self.on_pointer_down(event),
            PointerKind::Move => self.on_pointer_move(event),
            PointerKind::Up => self.on_pointer_up(event),
            PointerKind::Cancel => self.on_pointer_cancel(),
        }
        true
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        let Some(a) = self.attachment.as_mut() else {
            log::trace!("pointer down ignored: not attached");
            return;
        };
        if let Phase::Coasting(coast) = a.phase {
            log::debug!("pointer down cancels coast (acceleration {})", coast.acceleration());
        }
        a.phase = Phase::Pressed(Press {
            started_at: event.timestamp,
            start_offset: a.axis.offset(&a.target),
            last_coordinate: a.axis.coordinate(event),
        });
        // `moved` survives until the gate reads it.
        a.gate.last_drag_duration = None;
    }

    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        let policy = self.config.policy;
        let Some(a) = self.attachment.as_mut() else {
            return;
        };
        let Some(press) = a.phase.press().copied() else {
            return;
        };
        let coordinate = a.axis.coordinate(event);
        // Pointer forward scrolls the content backward.
        a.axis.scroll_by(&mut a.target, press.last_coordinate - coordinate);
        a.phase = Phase::Dragging(Press { last_coordinate: coordinate, ..press });
        if policy == ClickPolicy::Movement {
            a.gate.moved = true;
        }
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent) {
        let config = self.config;
        let Some(a) = self.attachment.as_mut() else {
            return;
        };
        let Some(press) = a.phase.press().copied() else {
            log::trace!("pointer up ignored: no press");
            return;
        };
        match config.policy {
            ClickPolicy::Duration => {
                let elapsed = event
                    .timestamp
                    .saturating_duration_since(press.started_at)
                    .as_secs_f32();
                let distance = a.axis.offset(&a.target) - press.start_offset;
                let acceleration = release_acceleration(distance, elapsed);
                log::debug!(
                    "release after {:.3}s, distance {}, acceleration {}",
                    elapsed, distance, acceleration
                );
                a.gate.last_drag_duration = Some(elapsed);
                a.phase = Phase::Coasting(Coast::new(
                    acceleration,
                    event.timestamp,
                    config.coast_interval(),
                ));
            }
            ClickPolicy::Movement => {
                a.phase = Phase::Idle;
            }
        }
    }

    /// End a press without momentum or a recorded duration.
    pub fn on_pointer_cancel(&mut self) {
        let Some(a) = self.attachment.as_mut() else {
            return;
        };
        if a.phase.is_pressed() {
            log::debug!("press cancelled");
            a.phase = Phase::Idle;
        }
    }

    // ── momentum ────────────────────────────────────────────────────────

    /// Deadline of the pending coast tick, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.attachment.as_ref()?.phase {
            Phase::Coasting(coast) => Some(coast.deadline()),
            _ => None,
        }
    }

    /// Run every coast tick due at `now`. Returns whether a coast is still
    /// pending afterwards.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(a) = self.attachment.as_mut() else {
            return false;
        };
        loop {
            let Phase::Coasting(coast) = &mut a.phase else {
                return false;
            };
            if !coast.is_due(now) {
                return true;
            }
            let offset = a.axis.offset(&a.target);
            let max = a.axis.max_offset(&a.target);
            match coast.step(offset, max) {
                Some(delta) => a.axis.scroll_by(&mut a.target, delta),
                None => {
                    log::debug!("coast finished at offset {}", offset);
                    a.phase = Phase::Idle;
                    return false;
                }
            }
        }
    }

    // ── click gate ──────────────────────────────────────────────────────

    /// Whether the interaction that just ended should count as a click.
    ///
    /// Consumes the gate's memory: asking twice after one release only says
    /// yes once under the duration policy, and the movement flag is cleared.
    pub fn should_treat_as_click(&mut self) -> bool {
        let config = self.config;
        let Some(a) = self.attachment.as_mut() else {
            return false;
        };
        match config.policy {
            ClickPolicy::Duration => matches!(
                a.gate.last_drag_duration.take(),
                Some(d) if d <= config.click_threshold_seconds
            ),
            ClickPolicy::Movement => !std::mem::take(&mut a.gate.moved),
        }
    }

    /// Run `callback` only if the last interaction was a click.
    pub fn click_gate<R>(&mut self, callback: impl FnOnce() -> R) -> Option<R> {
        if self.should_treat_as_click() {
            Some(callback())
        } else {
            log::trace!("click suppressed after drag");
            None
        }
    }

    // ── programmatic scrolling ──────────────────────────────────────────

    pub fn step_forward(&mut self) {
        let step = self.config.scroll_step_distance;
        self.programmatic(|axis, target| axis.scroll_by(target, step));
    }

    pub fn step_backward(&mut self) {
        let step = self.config.scroll_step_distance;
        self.programmatic(|axis, target| axis.scroll_by(target, -step));
    }

    pub fn scroll_to(&mut self, offset: f32) {
        self.programmatic(|axis, target| axis.set_offset(target, offset));
    }

    pub fn scroll_to_end(&mut self) {
        self.programmatic(|axis, target| {
            let max = axis.max_offset(target);
            axis.set_offset(target, max);
        });
    }

    fn programmatic(&mut self, apply: impl FnOnce(&AxisBinding<T>, &mut T)) {
        let Some(a) = self.attachment.as_mut() else {
            log::trace!("programmatic scroll ignored: not attached");
            return;
        };
        a.target.set_programmatic_scroll(true);
        apply(&a.axis, &mut a.target);
        a.target.set_programmatic_scroll(false);
    }
}
