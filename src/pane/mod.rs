pub mod layout;

use std::time::Instant;

use anyhow::Result;
use drag_scroll::config::{CardsConfig, Config, Tracking};
use drag_scroll::{DragScroll, DragScrollConfig, EventSource, PointerEvent, PointerKind, ScrollTarget, Sources};
use layout::Rect;

const PANE_GAP: f32 = 8.0;

/// A strip of equally sized cards laid out along one axis. Offsets are
/// clamped to `[0, content - viewport]`, like a browser scroll container.
#[derive(Debug, Clone)]
pub struct CardStrip {
    vertical: bool,
    count: usize,
    pitch: f32,
    content: (f32, f32),
    viewport: (f32, f32),
    offset: (f32, f32),
    programmatic: bool,
}

impl CardStrip {
    pub fn new(cards: &CardsConfig, vertical: bool, viewport: Rect) -> Self {
        let along = if vertical { cards.height } else { cards.width };
        let across = if vertical { cards.width } else { cards.height };
        let pitch = (along + cards.gap).max(1.0);
        let length = (pitch * cards.count as f32 - cards.gap).max(0.0);
        let content = if vertical { (across, length) } else { (length, across) };
        Self {
            vertical,
            count: cards.count,
            pitch,
            content,
            viewport: (viewport.width, viewport.height),
            offset: (0.0, 0.0),
            programmatic: false,
        }
    }

    pub fn resize(&mut self, viewport: Rect) {
        self.viewport = (viewport.width, viewport.height);
        self.offset.0 = clamp_offset(self.offset.0, self.content.0, self.viewport.0);
        self.offset.1 = clamp_offset(self.offset.1, self.content.1, self.viewport.1);
    }

    /// Index of the card under a point given in viewport-local coordinates.
    pub fn card_at(&self, local: (f32, f32)) -> Option<usize> {
        let along = if self.vertical {
            local.1 + self.offset.1
        } else {
            local.0 + self.offset.0
        };
        if along < 0.0 {
            return None;
        }
        let index = (along / self.pitch).floor() as usize;
        (index < self.count).then_some(index)
    }
}

fn clamp_offset(value: f32, content: f32, viewport: f32) -> f32 {
    value.clamp(0.0, (content - viewport).max(0.0))
}

impl ScrollTarget for CardStrip {
    fn offset_x(&self) -> f32 { self.offset.0 }
    fn set_offset_x(&mut self, value: f32) {
        self.offset.0 = clamp_offset(value, self.content.0, self.viewport.0);
        if self.programmatic {
            log::trace!("programmatic scroll to x={}", self.offset.0);
        }
    }
    fn offset_y(&self) -> f32 { self.offset.1 }
    fn set_offset_y(&mut self, value: f32) {
        self.offset.1 = clamp_offset(value, self.content.1, self.viewport.1);
        if self.programmatic {
            log::trace!("programmatic scroll to y={}", self.offset.1);
        }
    }
    fn content_width(&self) -> f32 { self.content.0 }
    fn content_height(&self) -> f32 { self.content.1 }
    fn viewport_width(&self) -> f32 { self.viewport.0 }
    fn viewport_height(&self) -> f32 { self.viewport.1 }
    fn set_programmatic_scroll(&mut self, active: bool) {
        self.programmatic = active;
    }
}

pub struct Pane {
    pub id: usize,
    pub rect: Rect,
    pub engine: DragScroll<CardStrip>,
    /// Card under the pointer when the current press started.
    pressed_card: Option<usize>,
}

impl Pane {
    pub fn new(id: usize, rect: Rect, cards: &CardsConfig, config: DragScrollConfig) -> Result<Self> {
        let strip = CardStrip::new(cards, config.vertical, rect);
        let sources = match config.tracking {
            Tracking::Element => Sources::element(),
            Tracking::Window => Sources::window(),
        };
        let mut engine = DragScroll::new(config);
        engine.attach(strip, sources)?;
        Ok(Self { id, rect, engine, pressed_card: None })
    }

    fn card_at(&self, x: f32, y: f32) -> Option<usize> {
        let local = self.rect.local(x, y);
        self.engine.target().and_then(|strip| strip.card_at(local))
    }
}

/// A card click that survived the click gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardClick {
    pub pane: usize,
    pub card: usize,
}

/// The demo's panes, stacked top to bottom inside the window.
pub struct PaneSet {
    pub panes: Vec<Pane>,
}

impl PaneSet {
    pub fn new(config: &Config, window: Rect) -> Result<Self> {
        let rects = window.stack(config.panes.len(), PANE_GAP);
        let panes = config
            .panes
            .iter()
            .zip(rects)
            .enumerate()
            .map(|(id, (pane_cfg, rect))| Pane::new(id, rect, &config.cards, *pane_cfg))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { panes })
    }

    /// Detach every engine. Safe to call more than once.
    pub fn teardown(&mut self) {
        for pane in &mut self.panes {
            pane.engine.detach();
            pane.pressed_card = None;
        }
    }

    pub fn resize(&mut self, window: Rect) {
        let rects = window.stack(self.panes.len(), PANE_GAP);
        for (pane, rect) in self.panes.iter_mut().zip(rects) {
            pane.rect = rect;
            if let Some(strip) = pane.engine.target_mut() {
                strip.resize(rect);
            }
        }
    }

    pub fn pane_at_mut(&mut self, x: f32, y: f32) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|p| p.rect.contains(x, y))
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, now: Instant) {
        let event = PointerEvent::new(x, y, now);
        for pane in &mut self.panes {
            pane.pressed_card = None;
        }
        if let Some(pane) = self.pane_at_mut(x, y) {
            if pane.engine.dispatch(EventSource::Target, PointerKind::Down, &event) {
                pane.pressed_card = pane.card_at(x, y);
            }
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, now: Instant) {
        self.deliver(PointerKind::Move, &PointerEvent::new(x, y, now));
    }

    /// Release the pointer and run the click gate of the pane that saw the
    /// press. Returns the clicked card if the gate let the click through.
    ///
    /// An element-tracking engine never hears a release outside its pane, so
    /// any engine still pressed afterwards is cancelled on its target. The
    /// gate runs even when the release lands outside, so a drag's movement
    /// flag is used up by that release and not by the next tap.
    pub fn pointer_up(&mut self, x: f32, y: f32, now: Instant) -> Option<CardClick> {
        let event = PointerEvent::new(x, y, now);
        self.deliver(PointerKind::Up, &event);
        for pane in &mut self.panes {
            if pane.engine.is_pressed() {
                log::debug!("pane {}: release outside, cancelling press", pane.id);
                pane.engine.dispatch(EventSource::Target, PointerKind::Cancel, &event);
            }
        }
        let pane = self.panes.iter_mut().find(|p| p.pressed_card.is_some())?;
        let card = pane.pressed_card.take()?;
        let id = pane.id;
        let click = pane.engine.click_gate(|| CardClick { pane: id, card })?;
        pane.rect.contains(x, y).then_some(click)
    }

    /// Abandon any press, wherever the pointer is.
    pub fn cancel(&mut self, now: Instant) {
        let event = PointerEvent::new(0.0, 0.0, now);
        for pane in &mut self.panes {
            pane.engine.dispatch(EventSource::Target, PointerKind::Cancel, &event);
            pane.engine.dispatch(EventSource::Window, PointerKind::Cancel, &event);
            pane.pressed_card = None;
        }
    }

    /// Window-level events reach every pane; panes under the pointer also
    /// see the event on their own target. Each engine listens to only one
    /// of the two, so nothing is delivered twice.
    fn deliver(&mut self, kind: PointerKind, event: &PointerEvent) {
        for pane in &mut self.panes {
            if pane.rect.contains(event.x, event.y) {
                pane.engine.dispatch(EventSource::Target, kind, event);
            }
            pane.engine.dispatch(EventSource::Window, kind, event);
        }
    }

    /// Run due coast ticks. Returns whether any pane is still coasting.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut coasting = false;
        for pane in &mut self.panes {
            coasting |= pane.engine.tick(now);
        }
        coasting
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.panes.iter().filter_map(|p| p.engine.next_deadline()).min()
    }

    pub fn offsets(&self) -> Vec<f32> {
        self.panes.iter().map(|p| p.engine.offset().unwrap_or(0.0)).collect()
    }
}
