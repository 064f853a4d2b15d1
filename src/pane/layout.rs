/// A rectangle in physical pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Point relative to this rect's origin.
    pub fn local(&self, px: f32, py: f32) -> (f32, f32) {
        (px - self.x, py - self.y)
    }

    /// Split into `count` equal bands stacked top to bottom, separated by
    /// `gap` pixels.
    pub fn stack(&self, count: usize, gap: f32) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let gaps = gap * (count - 1) as f32;
        let band = ((self.height - gaps) / count as f32).max(1.0);
        (0..count)
            .map(|i| {
                let y = self.y + i as f32 * (band + gap);
                Rect::new(self.x, y, self.width, band)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(109.0, 59.0));
        assert!(!r.contains(110.0, 30.0));
        assert!(!r.contains(50.0, 60.0));
        assert!(!r.contains(9.9, 30.0));
    }

    #[test]
    fn local_subtracts_origin() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.local(15.0, 25.0), (5.0, 5.0));
    }

    #[test]
    fn stack_splits_height_evenly() {
        let r = Rect::new(0.0, 0.0, 400.0, 310.0);
        let bands = r.stack(2, 10.0);
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0], Rect::new(0.0, 0.0, 400.0, 150.0));
        assert_eq!(bands[1], Rect::new(0.0, 160.0, 400.0, 150.0));
    }

    #[test]
    fn stack_of_zero_is_empty() {
        assert!(Rect::new(0.0, 0.0, 10.0, 10.0).stack(0, 0.0).is_empty());
    }
}
