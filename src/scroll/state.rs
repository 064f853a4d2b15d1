use std::time::Instant;

use crate::animation::Coast;

/// A press in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    pub started_at: Instant,
    pub start_offset: f32,
    /// Pointer coordinate on the active axis at the previous event.
    pub last_coordinate: f32,
}

/// Interaction phase of an attached engine.
///
/// ```text
/// Idle --down--> Pressed --move--> Dragging
///   ^               |                 |
///   +------up-------+------up---------+--> Coasting (duration policy)
///   ^                                         |
///   +-------------- coast ends ---------------+   down --> Pressed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pressed(Press),
    Dragging(Press),
    Coasting(Coast),
}

impl Phase {
    pub fn press(&self) -> Option<&Press> {
        match self {
            Phase::Pressed(p) | Phase::Dragging(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.press().is_some()
    }

    pub fn is_coasting(&self) -> bool {
        matches!(self, Phase::Coasting(_))
    }
}

/// What the click gate remembers between a release and the click that
/// follows it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct GateMemory {
    /// Length of the last completed press, in seconds (duration policy).
    pub last_drag_duration: Option<f32>,
    /// A move arrived since the gate last ran (movement policy). Only the
    /// gate clears it.
    pub moved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn press() -> Press {
        Press { started_at: Instant::now(), start_offset: 0.0, last_coordinate: 0.0 }
    }

    #[test]
    fn only_pressed_and_dragging_carry_a_press() {
        assert!(Phase::Pressed(press()).is_pressed());
        assert!(Phase::Dragging(press()).is_pressed());
        assert!(!Phase::Idle.is_pressed());
        let coast = Coast::new(1, Instant::now(), Duration::from_millis(10));
        assert!(!Phase::Coasting(coast).is_pressed());
        assert!(Phase::Coasting(coast).is_coasting());
    }
}
