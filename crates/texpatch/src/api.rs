//! Flat re-export surface for callers that want every stage in one import.
//!
//! Stages are grouped in pipeline order. Prefer `prelude` for the common subset.

// Geometry kernel
pub use crate::geom2::{line_rect_crossings, line_rect_crossings_cfg, GeomCfg, Rect2, Segment};
// Coverage planner
pub use crate::coverage::{plan_coverage, plan_coverage_cfg, CoverageSet, SweepCfg};
// Segment sequencer
pub use crate::sequence::{flatten, sequence, Direction, Mode, TraversalPlan, Visit};
// Program emitter and reader
pub use crate::program::{
    emit_program, frame_center, parse_program, read_program_file, write_program,
    write_program_file, MachineParams, MotionRecord, ProgramSummary,
};
// Region selector
pub use crate::region::{FieldLayout, Location};
// Pipeline
pub use crate::pipeline::{plan_job, plan_job_cfg, TextureJob, ToolPath};
