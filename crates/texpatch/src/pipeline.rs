//! End-to-end planning: location → corners → coverage → waypoints → program.

use std::path::Path;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::coverage::{plan_coverage_cfg, CoverageSet, SweepCfg};
use crate::error::{Result, TexError};
use crate::geom2::GeomCfg;
use crate::program::{emit_program, write_program_file, MachineParams};
use crate::region::{FieldLayout, Location};
use crate::sequence::{Direction, Mode, TraversalPlan};

/// Everything one texture patch run needs besides the field layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextureJob {
    pub location: Location,
    /// Pitch between sweep lines (mm).
    pub spacing: f64,
    /// Sweep line angle (degrees, counterclockwise from +X).
    pub angle_deg: f64,
    #[serde(flatten)]
    pub machine: MachineParams,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub direction: Direction,
}

impl TextureJob {
    #[inline]
    pub fn sweep(&self) -> SweepCfg {
        SweepCfg::new(self.angle_deg, self.spacing)
    }

    pub fn validate(&self) -> Result<()> {
        self.sweep().validate()?;
        self.machine.validate()
    }

    /// Artifact name: `texture_patch_loc{loc}_{mode}_{direction}.txt`.
    pub fn file_name(&self) -> String {
        format!(
            "texture_patch_loc{}_{}_{}.txt",
            self.location, self.mode, self.direction
        )
    }
}

/// A planned patch: region, accepted coverage, traversal, and final waypoints.
#[derive(Clone, Debug)]
pub struct ToolPath {
    pub job: TextureJob,
    pub ini: Vector2<f64>,
    pub fin: Vector2<f64>,
    pub coverage: CoverageSet,
    pub plan: TraversalPlan,
    pub waypoints: Vec<Vector2<f64>>,
}

impl ToolPath {
    /// Motion program text.
    pub fn render(&self) -> Result<String> {
        emit_program(&self.waypoints, self.ini, self.fin, &self.job.machine)
    }

    /// Write the motion program to `path`.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_program_file(path, &self.waypoints, self.ini, self.fin, &self.job.machine)
    }

    #[inline]
    pub fn file_name(&self) -> String {
        self.job.file_name()
    }
}

/// Plan a job on `layout` with default tolerances.
pub fn plan_job(job: &TextureJob, layout: &FieldLayout) -> Result<ToolPath> {
    plan_job_cfg(job, layout, GeomCfg::default())
}

/// Plan a job on `layout`. Fails with `EmptyPath` when no sweep line survives.
pub fn plan_job_cfg(job: &TextureJob, layout: &FieldLayout, cfg: GeomCfg) -> Result<ToolPath> {
    job.validate()?;
    layout.validate()?;
    let (ini, fin) = layout.corners(job.location);
    let coverage = plan_coverage_cfg(ini, fin, job.sweep(), cfg)?;
    if coverage.is_empty() {
        return Err(TexError::EmptyPath);
    }
    if !coverage.is_complete() {
        tracing::warn!(
            expected = coverage.expected_lines(),
            accepted = coverage.len(),
            "some sweep lines were dropped"
        );
    }
    let plan = TraversalPlan::new(coverage.len(), job.mode, job.direction);
    let waypoints = plan.waypoints(&coverage);
    tracing::info!(
        location = %job.location,
        mode = %job.mode,
        direction = %job.direction,
        segments = coverage.len(),
        "toolpath planned"
    );
    Ok(ToolPath {
        job: *job,
        ini,
        fin,
        coverage,
        plan,
        waypoints,
    })
}
