//! Planar geometry for raster toolpaths.
//!
//! Purpose
//! - Provide the axis-aligned region `Rect2`, the crossing pair `Segment`, and
//!   the line/rectangle crossing kernel used by the coverage sweep.
//! - Keep tolerances explicit in one place (`GeomCfg`); the defaults are exact
//!   so that emitted programs stay reproducible across runs and platforms.
//!
//! Code cross-refs: `coverage::plan_coverage`, `sequence::TraversalPlan`

mod kernel;
mod types;

pub use kernel::{line_rect_crossings, line_rect_crossings_cfg};
pub use types::{GeomCfg, Rect2, Segment};

#[cfg(test)]
mod tests;
