//! Raster texture-patch toolpaths for a dual-head (top/bottom) milling rig.
//!
//! Pipeline
//! - `region`: location code → patch corners on the specimen field.
//! - `coverage` (with `geom2`): parallel sweep lines clipped to the patch.
//! - `sequence`: visit order (inward/outward) and per-segment direction.
//! - `program`: motion program text (emit and read back).
//! - `pipeline`: the stages chained for one `TextureJob`.
//!
//! Every stage is a pure transform over its inputs; the only side effect is the
//! optional program file write at the end.

pub mod api;
pub mod coverage;
pub mod error;
pub mod geom2;
pub mod pipeline;
pub mod program;
pub mod region;
pub mod sequence;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Result, TexError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coverage::{plan_coverage, CoverageSet, SweepCfg};
    pub use crate::error::{Result, TexError};
    pub use crate::geom2::{GeomCfg, Rect2, Segment};
    pub use crate::pipeline::{plan_job, TextureJob, ToolPath};
    pub use crate::program::{emit_program, parse_program, MachineParams, MotionRecord};
    pub use crate::region::{FieldLayout, Location};
    pub use crate::sequence::{Direction, Mode, TraversalPlan};
    pub use nalgebra::Vector2 as Vec2;
}
