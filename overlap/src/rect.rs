use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at `(x, y)`, extending `width` along X
/// and `height` along Y.
///
/// Fields are plain integers with no validation. A rectangle with zero width
/// or height has collapsed to a line or point and overlaps nothing; negative
/// extents are accepted and behave as degenerate boxes under the same
/// comparisons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    #[inline]
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The X coordinate of the rectangle's far edge.
    #[inline]
    pub fn max_x(&self) -> i64 {
        self.x + self.width
    }

    /// The Y coordinate of the rectangle's far edge.
    #[inline]
    pub fn max_y(&self) -> i64 {
        self.y + self.height
    }

    /// Tells whether this rectangle overlaps another.
    ///
    /// Two rectangles overlap unless one lies entirely to one side of the
    /// other along either axis. The comparison is strict: rectangles that
    /// only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn overlapping() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 4, 4);

        assert!(a.intersects(&b));
    }

    #[test]
    fn disjoint() {
        let a = Rect::new(0, 0, 1, 1);
        let b = Rect::new(5, 5, 1, 1);

        assert!(!a.intersects(&b));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(2, 0, 2, 2);

        assert!(!a.intersects(&b));

        // Touching along Y behaves the same way.
        let below = Rect::new(0, 2, 2, 2);
        assert!(!a.intersects(&below));
    }

    #[test]
    fn contained() {
        let outer = Rect::new(0, 0, 10, 10);
        let inner = Rect::new(3, 3, 2, 2);

        assert!(outer.intersects(&inner));
    }

    #[test]
    fn symmetric() {
        let cases = [
            (Rect::new(0, 0, 4, 4), Rect::new(2, 2, 4, 4)),
            (Rect::new(0, 0, 1, 1), Rect::new(5, 5, 1, 1)),
            (Rect::new(0, 0, 2, 2), Rect::new(2, 0, 2, 2)),
            (Rect::new(-3, -3, 6, 6), Rect::new(0, 0, 1, 1)),
        ];

        for (a, b) in &cases {
            assert_eq!(a.intersects(b), b.intersects(a));
        }
    }

    #[test]
    fn self_intersection() {
        let positive = Rect::new(1, 1, 3, 3);
        assert!(positive.intersects(&positive));

        // Zero extent collapses to a line and overlaps nothing, itself
        // included.
        let flat = Rect::new(1, 1, 3, 0);
        assert!(!flat.intersects(&flat));
    }

    #[test]
    fn zero_size_never_intersects() {
        let point = Rect::new(5, 5, 0, 0);
        let area = Rect::new(0, 0, 10, 10);

        assert!(!point.intersects(&area));
        assert!(!area.intersects(&point));
    }

    #[test]
    fn serde_field_names() {
        let rect: Rect = serde_json::from_str(r#"{"x":1,"y":2,"width":3,"height":4}"#).unwrap();

        assert_eq!(rect, Rect::new(1, 2, 3, 4));
        assert_eq!(
            serde_json::to_string(&rect).unwrap(),
            r#"{"x":1,"y":2,"width":3,"height":4}"#
        );
    }
}
