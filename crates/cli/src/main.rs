use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use texpatch::prelude::*;
use texpatch::program::{read_program_file, ProgramSummary};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod provenance;

use config::JobFile;
use provenance::Sidecar;

#[derive(Parser)]
#[command(name = "texpatch-cli")]
#[command(about = "Texture patch toolpaths for the dual-head milling rig")]
struct Cmd {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Plan a texture patch and write its motion program
    Generate(GenerateArgs),
    /// Read a motion program back and print a JSON summary
    Inspect {
        #[arg(long)]
        file: PathBuf,
        /// Include every parsed record in the output
        #[arg(long)]
        records: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct GenerateArgs {
    /// JSON job file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Patch location code (1-4)
    #[arg(long)]
    location: Option<Location>,
    /// Sweep line pitch [mm]
    #[arg(long)]
    spacing: Option<f64>,
    /// Sweep line angle [deg]
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,
    /// Cut depth from the top [mm]
    #[arg(long)]
    thinning: Option<f64>,
    /// Retract height between segments [mm]
    #[arg(long, allow_negative_numbers = true)]
    z_hold: Option<f64>,
    /// one_direction or zig_zag
    #[arg(long)]
    mode: Option<Mode>,
    /// inward or outward
    #[arg(long)]
    direction: Option<Direction>,
    /// Base output directory; the program lands in texture_patch_<MMDD>/ below it
    #[arg(long, default_value = ".")]
    out: PathBuf,
    /// Print the program to stdout instead of writing files
    #[arg(long)]
    stdout: bool,
}

impl GenerateArgs {
    fn flags(&self) -> JobFile {
        JobFile {
            location: self.location,
            spacing: self.spacing,
            angle_deg: self.angle,
            thinning_t: self.thinning,
            z_hold: self.z_hold,
            mode: self.mode,
            direction: self.direction,
            layout: None,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Generate(args) => generate(args),
        Action::Inspect { file, records } => inspect(&file, records),
        Action::Report => report(),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let file = match &args.config {
        Some(path) => JobFile::load(path)?,
        None => JobFile::default(),
    };
    let (job, layout) = file.merge(args.flags()).resolve()?;
    let toolpath = plan_job(&job, &layout).context("planning texture patch")?;

    if args.stdout {
        print!("{}", toolpath.render()?);
        return Ok(());
    }

    let artifact = write_artifacts(&toolpath, &layout, &args.out, Local::now())?;
    tracing::info!(path = %artifact.display(), "program written");
    println!("{}", artifact.display());
    Ok(())
}

/// Write the program under `<base>/texture_patch_<MMDD>/` plus its provenance sidecar.
fn write_artifacts(
    toolpath: &ToolPath,
    layout: &FieldLayout,
    base: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    let folder = base.join(format!("texture_patch_{}", now.format("%m%d")));
    std::fs::create_dir_all(&folder)
        .with_context(|| format!("creating output dir {}", folder.display()))?;
    let artifact = folder.join(toolpath.file_name());
    toolpath
        .write_to(&artifact)
        .with_context(|| format!("writing {}", artifact.display()))?;
    Sidecar::describe(toolpath, layout, &artifact, now.to_rfc3339())?.write()?;
    Ok(artifact)
}

fn inspect(file: &Path, with_records: bool) -> Result<()> {
    tracing::info!(file = %file.display(), "inspect");
    let records =
        read_program_file(file).with_context(|| format!("reading {}", file.display()))?;
    let summary = ProgramSummary::from_records(&records);
    let mut doc = serde_json::json!({ "file": file.to_string_lossy(), "summary": summary });
    if with_records {
        doc["records"] = serde_json::to_value(&records)?;
    }
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "texpatch_version": texpatch::VERSION,
        "defaults": {
            "layout": FieldLayout::default(),
            "mode": Mode::default(),
            "direction": Direction::default(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn write_artifacts_lays_out_dated_folder() {
        let dir = tempdir().unwrap();
        let job = TextureJob {
            location: Location::Four,
            spacing: 5.0,
            angle_deg: 0.0,
            machine: MachineParams::new(0.1, 2.0),
            mode: Mode::ZigZag,
            direction: Direction::Outward,
        };
        let layout = FieldLayout::default();
        let toolpath = plan_job(&job, &layout).unwrap();
        let now = Local.with_ymd_and_hms(2026, 4, 25, 9, 30, 0).unwrap();
        let artifact = write_artifacts(&toolpath, &layout, dir.path(), now).unwrap();
        assert_eq!(
            artifact,
            dir.path()
                .join("texture_patch_0425")
                .join("texture_patch_loc4_zig_zag_outward.txt")
        );
        let text = std::fs::read_to_string(&artifact).unwrap();
        assert_eq!(text, toolpath.render().unwrap());
        let sidecar = artifact.with_file_name("texture_patch_loc4_zig_zag_outward.provenance.json");
        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(doc["job"]["location"], "4");
        assert_eq!(doc["coverage"]["segments"], 11);
        assert_eq!(doc["generated_at"], now.to_rfc3339());
        assert!(doc["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn cli_parses_generate_flags() {
        let cmd = Cmd::try_parse_from([
            "texpatch-cli",
            "generate",
            "--location",
            "3",
            "--spacing",
            "1.5",
            "--angle",
            "-30",
            "--thinning",
            "0.2",
            "--z-hold",
            "2",
            "--mode",
            "zig_zag",
        ])
        .unwrap();
        let Action::Generate(args) = cmd.action else {
            panic!("expected generate");
        };
        let (job, _) = args.flags().resolve().unwrap();
        assert_eq!(job.location, Location::Three);
        assert_eq!(job.angle_deg, -30.0);
        assert_eq!(job.mode, Mode::ZigZag);
        assert_eq!(job.direction, Direction::Inward);
    }

    #[test]
    fn cli_rejects_unknown_direction() {
        let res = Cmd::try_parse_from(["texpatch-cli", "generate", "--direction", "sideways"]);
        assert!(res.is_err());
    }
}
