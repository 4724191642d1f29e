//! `<stem>.provenance.json` sidecars next to generated motion programs.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use texpatch::prelude::*;

/// How many sweep lines were requested, kept, and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CoverageStats {
    pub expected_lines: usize,
    pub segments: usize,
    pub dropped: usize,
}

/// The program file a sidecar describes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArtifactInfo {
    pub path: String,
    pub bytes: u64,
}

/// Everything needed to regenerate (or audit) one program.
#[derive(Clone, Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub texpatch_version: &'static str,
    /// RFC 3339 local time of the run.
    pub generated_at: String,
    pub job: TextureJob,
    pub layout: FieldLayout,
    /// `[ini, fin]` as `[x, y]` pairs.
    pub corners: [[f64; 2]; 2],
    pub coverage: CoverageStats,
    pub warnings: Vec<String>,
    pub artifact: ArtifactInfo,
}

impl Sidecar {
    /// Describe `toolpath`, already written to `artifact`.
    pub fn describe(
        toolpath: &ToolPath,
        layout: &FieldLayout,
        artifact: &Path,
        generated_at: String,
    ) -> Result<Self> {
        let bytes = fs::metadata(artifact)
            .with_context(|| format!("stat {}", artifact.display()))?
            .len();
        let cov = &toolpath.coverage;
        let coverage = CoverageStats {
            expected_lines: cov.expected_lines(),
            segments: cov.len(),
            dropped: cov.expected_lines() - cov.len(),
        };
        let mut warnings = Vec::new();
        if coverage.dropped > 0 {
            warnings.push(format!(
                "{} of {} sweep lines dropped",
                coverage.dropped, coverage.expected_lines
            ));
        }
        Ok(Self {
            code_rev: current_git_rev(),
            texpatch_version: texpatch::VERSION,
            generated_at,
            job: toolpath.job,
            layout: *layout,
            corners: [
                [toolpath.ini.x, toolpath.ini.y],
                [toolpath.fin.x, toolpath.fin.y],
            ],
            coverage,
            warnings,
            artifact: ArtifactInfo {
                path: artifact.to_string_lossy().into_owned(),
                bytes,
            },
        })
    }

    /// Write next to the artifact and return the sidecar path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = sidecar_path(Path::new(&self.artifact.path));
        fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "provenance written");
        Ok(path)
    }
}

/// `dir/name.txt` → `dir/name.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy().into_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Build-time `GIT_COMMIT`, then the runtime variable, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_owned())
        .unwrap_or_else(|| "unknown".to_owned())
}
