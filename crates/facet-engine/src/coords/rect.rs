use super::{Point, Size};

/// Axis-aligned integer rectangle in pixels (top-left origin).
///
/// Width and height are signed so clip arithmetic can go non-positive without
/// wrapping; such rectangles are simply empty.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IRect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.w(), size.h())
    }

    #[inline]
    pub const fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.h)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.right() && p.y < self.bottom()
    }

    #[inline]
    pub fn intersect(self, other: IRect) -> Option<IRect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0 || h <= 0 {
            None
        } else {
            Some(IRect::new(x0, y0, w, h))
        }
    }

    /// Smallest rectangle covering both. Empty inputs are ignored.
    #[inline]
    pub fn union(self, other: IRect) -> IRect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        IRect::new(x0, y0, x1 - x0, y1 - y0)
    }
}
