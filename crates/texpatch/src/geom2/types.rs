//! Basic 2D types and tolerances used by the sweep.
//!
//! - `GeomCfg`: centralizes the determinant and edge-parameter slack plus the
//!   sweep-line cap.
//! - `Rect2`: closed axis-aligned rectangle built from two corners in any order.
//! - `Segment`: the two boundary crossings of one sweep line.

use nalgebra::Vector2;

/// Geometry configuration (tolerances and limits).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// When positive, a 2×2 crossing system with `|det| <= eps_det` counts as
    /// parallel. At 0.0 only a zero LU pivot does.
    pub eps_det: f64,
    /// Slack on the edge parameter: accepted range is `[-eps_edge, 1 + eps_edge]`.
    pub eps_edge: f64,
    /// Upper bound on the number of sweep lines a single plan may request.
    pub max_lines: usize,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 0.0,
            eps_edge: 0.0,
            max_lines: 1_000_000,
        }
    }
}

/// Closed axis-aligned rectangle. Invariant: `min <= max` componentwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Rect2 {
    /// Build from two opposite corners supplied in arbitrary order.
    #[inline]
    pub fn from_corners(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            min: Vector2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vector2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }

    /// Corners in projection order: (x_min,y_min), (x_min,y_max), (x_max,y_min), (x_max,y_max).
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            Vector2::new(self.min.x, self.min.y),
            Vector2::new(self.min.x, self.max.y),
            Vector2::new(self.max.x, self.min.y),
            Vector2::new(self.max.x, self.max.y),
        ]
    }

    /// Boundary edges as (start, end) in the order bottom, right, top, left.
    pub fn edges(&self) -> [(Vector2<f64>, Vector2<f64>); 4] {
        let (x0, y0, x1, y1) = (self.min.x, self.min.y, self.max.x, self.max.y);
        [
            (Vector2::new(x0, y0), Vector2::new(x1, y0)),
            (Vector2::new(x1, y0), Vector2::new(x1, y1)),
            (Vector2::new(x1, y1), Vector2::new(x0, y1)),
            (Vector2::new(x0, y1), Vector2::new(x0, y0)),
        ]
    }

    /// True if `p` lies on the boundary within `eps`.
    pub fn on_boundary_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let inside_x = p.x >= self.min.x - eps && p.x <= self.max.x + eps;
        let inside_y = p.y >= self.min.y - eps && p.y <= self.max.y + eps;
        if !(inside_x && inside_y) {
            return false;
        }
        (p.x - self.min.x).abs() <= eps
            || (p.x - self.max.x).abs() <= eps
            || (p.y - self.min.y).abs() <= eps
            || (p.y - self.max.y).abs() <= eps
    }
}

/// The two points where one sweep line crosses the rectangle boundary,
/// in the order the kernel found them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub pt1: Vector2<f64>,
    pub pt2: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(pt1: Vector2<f64>, pt2: Vector2<f64>) -> Self {
        Self { pt1, pt2 }
    }

    /// Endpoints ordered so that `pt1.x <= pt2.x`; ties keep the found order.
    #[inline]
    pub fn left_to_right(&self) -> Self {
        if self.pt1.x > self.pt2.x {
            Self::new(self.pt2, self.pt1)
        } else {
            *self
        }
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.pt2, self.pt1)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.pt2 - self.pt1).norm()
    }
}
