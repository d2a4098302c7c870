//! 2D geometry shared by the algorithms and the rendering surfaces

use serde::{Deserialize, Serialize};

/// A point in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Integer pixel position as a world point
    pub fn from_pixel((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A line segment between two points. Serialized as `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct LineSegment {
    pub p0: Point2D,
    pub p1: Point2D,
}

impl LineSegment {
    pub fn new(p0: Point2D, p1: Point2D) -> Self {
        Self { p0, p1 }
    }

    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point2D::new(x0, y0), Point2D::new(x1, y1))
    }

    /// Direction vector (dx, dy) from p0 to p1
    #[inline]
    pub fn delta(&self) -> (f64, f64) {
        (self.p1.x - self.p0.x, self.p1.y - self.p0.y)
    }

    /// Point at parameter `u` along the segment (0 = p0, 1 = p1)
    #[inline]
    pub fn point_at(&self, u: f64) -> Point2D {
        let (dx, dy) = self.delta();
        Point2D::new(self.p0.x + u * dx, self.p0.y + u * dy)
    }

    /// Same segment traversed the other way
    pub fn reversed(&self) -> Self {
        Self::new(self.p1, self.p0)
    }
}

/// Axis-aligned clip rectangle.
///
/// Always normalized: `xmin <= xmax` and `ymin <= ymax`. Serialized as
/// `[xmin, ymin, xmax, ymax]`; a reversed array is normalized on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct ClipWindow {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl ClipWindow {
    /// Build a window from two opposite corners given in any order
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin: xmin.min(xmax),
            ymin: ymin.min(ymax),
            xmax: xmin.max(xmax),
            ymax: ymin.max(ymax),
        }
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[inline]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[inline]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[inline]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Inclusive containment test
    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Outline vertices, counter-clockwise from the bottom-left corner
    pub fn corners(&self) -> [Point2D; 4] {
        [
            Point2D::new(self.xmin, self.ymin),
            Point2D::new(self.xmax, self.ymin),
            Point2D::new(self.xmax, self.ymax),
            Point2D::new(self.xmin, self.ymax),
        ]
    }

    /// Visible part of `segment`, or `None` when it lies entirely outside
    pub fn clip(&self, segment: &LineSegment) -> Option<LineSegment> {
        crate::algorithms::liang_barsky::clip_segment(segment, self)
    }
}

impl From<[f64; 4]> for LineSegment {
    fn from([x0, y0, x1, y1]: [f64; 4]) -> Self {
        Self::from_coords(x0, y0, x1, y1)
    }
}

impl From<LineSegment> for [f64; 4] {
    fn from(s: LineSegment) -> Self {
        [s.p0.x, s.p0.y, s.p1.x, s.p1.y]
    }
}

impl From<[f64; 4]> for ClipWindow {
    fn from([xmin, ymin, xmax, ymax]: [f64; 4]) -> Self {
        Self::new(xmin, ymin, xmax, ymax)
    }
}

impl From<ClipWindow> for [f64; 4] {
    fn from(w: ClipWindow) -> Self {
        [w.xmin, w.ymin, w.xmax, w.ymax]
    }
}

/// World region mapped onto the window, y pointing up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthoBounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl OrthoBounds {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// `window` grown by `margin` on every side, each axis at least
    /// `min_extent` wide so the projection never collapses.
    pub fn around(window: &ClipWindow, margin: f64, min_extent: f64) -> Self {
        let left = window.xmin() - margin;
        let bottom = window.ymin() - margin;
        let mut right = window.xmax() + margin;
        let mut top = window.ymax() + margin;
        if right - left < min_extent {
            right = left + min_extent;
        }
        if top - bottom < min_extent {
            top = bottom + min_extent;
        }
        Self::new(left, right, bottom, top)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Map a world point to the pixel grid of a `width` x `height` buffer.
    ///
    /// Row 0 is the top of the buffer; world `bottom` lands on the last row.
    pub fn to_pixel(&self, p: Point2D, width: u32, height: u32) -> (i32, i32) {
        let w = self.width();
        let h = self.height();
        if w == 0.0 || h == 0.0 {
            return (0, 0);
        }
        let sx = ((p.x - self.left) / w * f64::from(width)).floor();
        let sy = ((p.y - self.bottom) / h * f64::from(height)).floor();
        let px = clamp_to_i32(sx);
        let py = clamp_to_i32(f64::from(height) - 1.0 - sy);
        (px, py)
    }
}

/// Saturating float to pixel conversion so far-off geometry stays far off
#[inline]
fn clamp_to_i32(v: f64) -> i32 {
    if v.is_nan() {
        return i32::MIN;
    }
    v.clamp(f64::from(i32::MIN / 2), f64::from(i32::MAX / 2)) as i32
}
