//! Job configuration: optional JSON file, overridden by command-line flags.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use texpatch::prelude::{Direction, FieldLayout, Location, MachineParams, Mode, TextureJob};

/// Job fields as read from a config file. Every field is optional so that
/// flags can fill in the rest.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    pub location: Option<Location>,
    pub spacing: Option<f64>,
    pub angle_deg: Option<f64>,
    pub thinning_t: Option<f64>,
    pub z_hold: Option<f64>,
    pub mode: Option<Mode>,
    pub direction: Option<Direction>,
    pub layout: Option<FieldLayout>,
}

impl JobFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Overlay `flags` on top of this file; flags win.
    pub fn merge(self, flags: JobFile) -> JobFile {
        JobFile {
            location: flags.location.or(self.location),
            spacing: flags.spacing.or(self.spacing),
            angle_deg: flags.angle_deg.or(self.angle_deg),
            thinning_t: flags.thinning_t.or(self.thinning_t),
            z_hold: flags.z_hold.or(self.z_hold),
            mode: flags.mode.or(self.mode),
            direction: flags.direction.or(self.direction),
            layout: flags.layout.or(self.layout),
        }
    }

    /// Resolve into a job and layout; mode, direction and layout have defaults.
    pub fn resolve(self) -> Result<(TextureJob, FieldLayout)> {
        let job = TextureJob {
            location: self.location.ok_or_else(|| missing("location"))?,
            spacing: self.spacing.ok_or_else(|| missing("spacing"))?,
            angle_deg: self.angle_deg.ok_or_else(|| missing("angle_deg"))?,
            machine: MachineParams::new(
                self.thinning_t.ok_or_else(|| missing("thinning_t"))?,
                self.z_hold.ok_or_else(|| missing("z_hold"))?,
            ),
            mode: self.mode.unwrap_or_default(),
            direction: self.direction.unwrap_or_default(),
        };
        Ok((job, self.layout.unwrap_or_default()))
    }
}

fn missing(field: &str) -> anyhow::Error {
    anyhow!("missing `{field}`: pass it as a flag or set it in --config")
}
