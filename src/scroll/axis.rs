use super::pointer::PointerEvent;
use super::target::ScrollTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical { Axis::Vertical } else { Axis::Horizontal }
    }
}

/// Accessors for one scroll direction, picked once per attachment.
pub struct AxisBinding<T> {
    pub axis: Axis,
    offset: fn(&T) -> f32,
    set_offset: fn(&mut T, f32),
    content: fn(&T) -> f32,
    viewport: fn(&T) -> f32,
    coordinate: fn(&PointerEvent) -> f32,
}

// Manual impls: derive would demand `T: Copy`.
impl<T> Clone for AxisBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AxisBinding<T> {}

impl<T> std::fmt::Debug for AxisBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisBinding").field("axis", &self.axis).finish()
    }
}

impl<T: ScrollTarget> AxisBinding<T> {
    pub fn resolve(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self {
                axis,
                offset: T::offset_x,
                set_offset: T::set_offset_x,
                content: T::content_width,
                viewport: T::viewport_width,
                coordinate: |e| e.x,
            },
            Axis::Vertical => Self {
                axis,
                offset: T::offset_y,
                set_offset: T::set_offset_y,
                content: T::content_height,
                viewport: T::viewport_height,
                coordinate: |e| e.y,
            },
        }
    }

    pub fn offset(&self, target: &T) -> f32 {
        (self.offset)(target)
    }

    pub fn set_offset(&self, target: &mut T, value: f32) {
        (self.set_offset)(target, value)
    }

    pub fn scroll_by(&self, target: &mut T, delta: f32) {
        let current = self.offset(target);
        self.set_offset(target, current + delta);
    }

    /// Largest reachable offset: content minus viewport, never negative.
    pub fn max_offset(&self, target: &T) -> f32 {
        ((self.content)(target) - (self.viewport)(target)).max(0.0)
    }

    pub fn coordinate(&self, event: &PointerEvent) -> f32 {
        (self.coordinate)(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::target::testing::FakeTarget;
    use std::time::Instant;

    #[test]
    fn horizontal_reads_x_fields() {
        let binding = AxisBinding::<FakeTarget>::resolve(Axis::Horizontal);
        let target = FakeTarget::new((1000.0, 300.0), (200.0, 100.0)).at(40.0, 7.0);
        assert_eq!(binding.offset(&target), 40.0);
        assert_eq!(binding.max_offset(&target), 800.0);
        let event = PointerEvent::new(12.0, 34.0, Instant::now());
        assert_eq!(binding.coordinate(&event), 12.0);
    }

    #[test]
    fn vertical_reads_y_fields() {
        let binding = AxisBinding::<FakeTarget>::resolve(Axis::from_vertical(true));
        let target = FakeTarget::new((1000.0, 300.0), (200.0, 100.0)).at(40.0, 7.0);
        assert_eq!(binding.axis, Axis::Vertical);
        assert_eq!(binding.offset(&target), 7.0);
        assert_eq!(binding.max_offset(&target), 200.0);
        let event = PointerEvent::new(12.0, 34.0, Instant::now());
        assert_eq!(binding.coordinate(&event), 34.0);
    }

    #[test]
    fn scroll_by_writes_only_active_axis() {
        let binding = AxisBinding::<FakeTarget>::resolve(Axis::Vertical);
        let mut target = FakeTarget::new((1000.0, 300.0), (200.0, 100.0)).at(40.0, 7.0);
        binding.scroll_by(&mut target, 10.0);
        assert_eq!(target.y, 17.0);
        assert_eq!(target.x, 40.0);
    }

    #[test]
    fn content_smaller_than_viewport_has_zero_max() {
        let binding = AxisBinding::<FakeTarget>::resolve(Axis::Horizontal);
        let target = FakeTarget::new((100.0, 100.0), (200.0, 200.0));
        assert_eq!(binding.max_offset(&target), 0.0);
    }
}
