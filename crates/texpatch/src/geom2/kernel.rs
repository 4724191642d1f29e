//! Line/rectangle crossing kernel.
//!
//! For each boundary edge `e(s) = a + s (b - a)`, `s ∈ [0, 1]`, solve
//! `p0 + t dir = e(s)` as the 2×2 system `[dir | a - b] (t, s)ᵀ = a - p0`.
//! The system is solved by LU with partial pivoting. For a line through a
//! corner, that rounding decides whether `s` lands on 0/1 or just outside.
//! A sweep line is kept only when exactly two edges report a crossing: corner
//! grazes (three or four hits, since adjacent edges share the corner), lines
//! colinear with an edge, and misses are all rejected alike.

use nalgebra::{Matrix2, Vector2};

use super::types::{GeomCfg, Rect2, Segment};

/// Crossings of the infinite line `p0 + t·dir` with `rect`, using default tolerances.
#[inline]
pub fn line_rect_crossings(p0: Vector2<f64>, dir: Vector2<f64>, rect: &Rect2) -> Option<Segment> {
    line_rect_crossings_cfg(p0, dir, rect, GeomCfg::default())
}

/// Crossings of the infinite line `p0 + t·dir` with `rect`.
///
/// Returns `Some` iff exactly two edge crossings were found, in edge order
/// (bottom, right, top, left).
pub fn line_rect_crossings_cfg(
    p0: Vector2<f64>,
    dir: Vector2<f64>,
    rect: &Rect2,
    cfg: GeomCfg,
) -> Option<Segment> {
    let mut hits: Vec<Vector2<f64>> = Vec::with_capacity(4);
    for (a, b) in rect.edges() {
        let m = Matrix2::from_columns(&[dir, a - b]);
        if cfg.eps_det > 0.0 && m.determinant().abs() <= cfg.eps_det {
            continue;
        }
        // None on a zero pivot: the line is parallel to this edge
        let Some(ts) = m.lu().solve(&(a - p0)) else {
            continue;
        };
        let (t1, t2) = (ts.x, ts.y);
        if t2 >= -cfg.eps_edge && t2 <= 1.0 + cfg.eps_edge {
            hits.push(p0 + dir * t1);
        }
    }
    match hits.as_slice() {
        [pt1, pt2] => Some(Segment::new(*pt1, *pt2)),
        _ => None,
    }
}
