/// A scroll container the engine can drive.
///
/// Offsets are in pixels from the start of the content. Implementations may
/// clamp writes the way a browser clamps `scrollLeft`; the engine reads the
/// offset back after every write rather than assuming the value stuck.
pub trait ScrollTarget {
    fn offset_x(&self) -> f32;
    fn set_offset_x(&mut self, value: f32);
    fn offset_y(&self) -> f32;
    fn set_offset_y(&mut self, value: f32);

    /// Full content size.
    fn content_width(&self) -> f32;
    fn content_height(&self) -> f32;

    /// Visible size.
    fn viewport_width(&self) -> f32;
    fn viewport_height(&self) -> f32;

    /// Toggled on around programmatic scrolls so the target can suppress
    /// drag-specific styling (snap animations and the like).
    fn set_programmatic_scroll(&mut self, _active: bool) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::ScrollTarget;

    /// In-memory target. Writes are clamped to `[0, max]` unless `unclamped`.
    #[derive(Debug, Clone, Default)]
    pub struct FakeTarget {
        pub x: f32,
        pub y: f32,
        pub content: (f32, f32),
        pub viewport: (f32, f32),
        pub unclamped: bool,
        pub programmatic: bool,
        /// Every value passed to `set_programmatic_scroll`, in order.
        pub programmatic_log: Vec<bool>,
        pub writes: usize,
    }

    impl FakeTarget {
        pub fn new(content: (f32, f32), viewport: (f32, f32)) -> Self {
            Self { content, viewport, ..Self::default() }
        }

        pub fn at(mut self, x: f32, y: f32) -> Self {
            self.x = x;
            self.y = y;
            self
        }

        pub fn unclamped(mut self) -> Self {
            self.unclamped = true;
            self
        }

        fn clamp(&self, value: f32, content: f32, viewport: f32) -> f32 {
            if self.unclamped {
                value
            } else {
                value.clamp(0.0, (content - viewport).max(0.0))
            }
        }
    }

    impl ScrollTarget for FakeTarget {
        fn offset_x(&self) -> f32 { self.x }
        fn set_offset_x(&mut self, value: f32) {
            self.writes += 1;
            self.x = self.clamp(value, self.content.0, self.viewport.0);
        }
        fn offset_y(&self) -> f32 { self.y }
        fn set_offset_y(&mut self, value: f32) {
            self.writes += 1;
            self.y = self.clamp(value, self.content.1, self.viewport.1);
        }
        fn content_width(&self) -> f32 { self.content.0 }
        fn content_height(&self) -> f32 { self.content.1 }
        fn viewport_width(&self) -> f32 { self.viewport.0 }
        fn viewport_height(&self) -> f32 { self.viewport.1 }
        fn set_programmatic_scroll(&mut self, active: bool) {
            self.programmatic = active;
            self.programmatic_log.push(active);
        }
    }
}
