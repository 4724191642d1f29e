//! Coverage planner: sweep a family of parallel lines across a rectangle.
//!
//! Model
//! - Sweep direction `d = (cos θ, sin θ)`, normal `n = (-d.y, d.x)`.
//! - The rectangle corners projected on `n` give the offset range
//!   `[min_proj, max_proj]`; line `i` passes through `(min_proj + i·spacing)·n`.
//! - `num_lines = floor((max_proj - min_proj) / spacing) + 1`. Lines the kernel
//!   rejects are dropped silently (logged at trace level); callers that need
//!   full coverage check `CoverageSet::is_complete`.
//!
//! Code cross-refs: `geom2::line_rect_crossings_cfg`, `sequence::TraversalPlan`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TexError};
use crate::geom2::{line_rect_crossings_cfg, GeomCfg, Rect2, Segment};

/// Sweep parameters: line angle in degrees and pitch between lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepCfg {
    pub angle_deg: f64,
    pub spacing: f64,
}

impl SweepCfg {
    pub fn new(angle_deg: f64, spacing: f64) -> Self {
        Self { angle_deg, spacing }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.angle_deg.is_finite() {
            return Err(TexError::invalid(
                "angle",
                format!("{} is not a finite number of degrees", self.angle_deg),
            ));
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(TexError::invalid(
                "spacing",
                format!("{} must be a finite value > 0", self.spacing),
            ));
        }
        Ok(())
    }

    /// Unit sweep direction `(cos θ, sin θ)`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        let theta = self.angle_deg.to_radians();
        Vector2::new(theta.cos(), theta.sin())
    }

    /// Left normal of the sweep direction.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        let d = self.direction();
        Vector2::new(-d.y, d.x)
    }
}

/// Segments accepted by one sweep, in increasing offset order.
#[derive(Clone, Debug)]
pub struct CoverageSet {
    rect: Rect2,
    segments: Vec<Segment>,
    offsets: Vec<f64>,
    expected_lines: usize,
}

impl CoverageSet {
    #[inline]
    pub fn rect(&self) -> &Rect2 {
        &self.rect
    }
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
    /// Sweep offset of each accepted segment (parallel to `segments`).
    #[inline]
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
    /// Number of sweep lines requested before the kernel dropped any.
    #[inline]
    pub fn expected_lines(&self) -> usize {
        self.expected_lines
    }
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.segments.len() == self.expected_lines
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl std::ops::Index<usize> for CoverageSet {
    type Output = Segment;
    fn index(&self, i: usize) -> &Segment {
        &self.segments[i]
    }
}

/// Plan coverage of the rectangle spanned by `ini`/`fin` with default tolerances.
pub fn plan_coverage(ini: Vector2<f64>, fin: Vector2<f64>, sweep: SweepCfg) -> Result<CoverageSet> {
    plan_coverage_cfg(ini, fin, sweep, GeomCfg::default())
}

/// Plan coverage of the rectangle spanned by `ini`/`fin` (corners in any order).
pub fn plan_coverage_cfg(
    ini: Vector2<f64>,
    fin: Vector2<f64>,
    sweep: SweepCfg,
    cfg: GeomCfg,
) -> Result<CoverageSet> {
    sweep.validate()?;
    let rect = Rect2::from_corners(ini, fin);
    let dir = sweep.direction();
    let normal = sweep.normal();

    let mut min_proj = f64::INFINITY;
    let mut max_proj = f64::NEG_INFINITY;
    for c in rect.corners() {
        let p = c.dot(&normal);
        min_proj = min_proj.min(p);
        max_proj = max_proj.max(p);
    }
    if !(min_proj.is_finite() && max_proj.is_finite()) {
        return Err(TexError::invalid(
            "corners",
            format!("region {:?}..{:?} is not finite", rect.min, rect.max),
        ));
    }

    let steps = ((max_proj - min_proj) / sweep.spacing).floor();
    if !steps.is_finite() || steps >= cfg.max_lines as f64 {
        return Err(TexError::invalid(
            "spacing",
            format!(
                "{} yields more than {} sweep lines over a span of {}",
                sweep.spacing,
                cfg.max_lines,
                max_proj - min_proj
            ),
        ));
    }
    let num_lines = steps as usize + 1;

    let mut segments = Vec::with_capacity(num_lines);
    let mut offsets = Vec::with_capacity(num_lines);
    for i in 0..num_lines {
        let offset = min_proj + i as f64 * sweep.spacing;
        let p0 = normal * offset;
        match line_rect_crossings_cfg(p0, dir, &rect, cfg) {
            Some(seg) => {
                segments.push(seg);
                offsets.push(offset);
            }
            None => tracing::trace!(line = i, offset, "sweep line dropped"),
        }
    }
    tracing::debug!(
        angle_deg = sweep.angle_deg,
        spacing = sweep.spacing,
        expected = num_lines,
        accepted = segments.len(),
        "coverage planned"
    );

    Ok(CoverageSet {
        rect,
        segments,
        offsets,
        expected_lines: num_lines,
    })
}
