use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TexError};

/// Park height of the top head between jobs.
pub const SAFE_Z: f64 = 80.0;
/// Park height of the bottom head between jobs.
pub const SAFE_W: f64 = -80.0;

/// Controller setup directives, emitted verbatim (trailing blanks included).
pub const PREAMBLE: [&str; 21] = [
    "DELGAT ",
    "UNDEFINE ALL ",
    "&1 ",
    "CLOSE ",
    "#1->-16000X ",
    "#2->-16000X ",
    "#3->16000Y ",
    "#4->16000Y ",
    "#5->16000Z ",
    "#6->-16000U ",
    "#7->-16000U ",
    "#8->16000V ",
    "#9->16000V ",
    "#10->-16000W ",
    "OPEN PROG 2 ",
    "CLEAR ",
    "FRAX(X,Y,Z) ",
    "ABS ",
    "TA 100.0 ",
    "TS 50 ",
    "X 0.0000 Y 0.0000 Z 80.0000 U 0.0000 V 0.0000 W -80.0000 F 5.0000 ",
];

/// Program termination directive.
pub const PROGRAM_END: &str = "CLOSE ALL";

/// Cutting setup consumed by the emitter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineParams {
    /// Cut depth from the top; emitted as `Z = -thinning_t`.
    pub thinning_t: f64,
    /// Z height for retract and jog moves between segments.
    pub z_hold: f64,
}

impl MachineParams {
    pub fn new(thinning_t: f64, z_hold: f64) -> Self {
        Self { thinning_t, z_hold }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.thinning_t.is_finite() {
            return Err(TexError::invalid(
                "thinning_t",
                format!("{} is not finite", self.thinning_t),
            ));
        }
        if !self.z_hold.is_finite() {
            return Err(TexError::invalid(
                "z_hold",
                format!("{} is not finite", self.z_hold),
            ));
        }
        Ok(())
    }
}

/// Mirror center of the bottom head: midpoint of the patch corners.
#[inline]
pub fn frame_center(ini: Vector2<f64>, fin: Vector2<f64>) -> Vector2<f64> {
    Vector2::new((ini.x + fin.x) / 2.0, (ini.y + fin.y) / 2.0)
}

struct Axes {
    x: f64,
    y: f64,
    z: f64,
    u: f64,
    v: f64,
    w: f64,
}

impl Axes {
    fn top(p: Vector2<f64>, z: f64, center: Vector2<f64>, w: f64) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z,
            u: center.x,
            v: center.y,
            w,
        }
    }

    fn home() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: SAFE_Z,
            u: 0.0,
            v: 0.0,
            w: SAFE_W,
        }
    }

    /// Park lines carry a trailing blank, cutting lines do not.
    fn write<W: Write>(&self, out: &mut W, trailing_blank: bool) -> io::Result<()> {
        write!(
            out,
            "X {:.4} Y {:.4} Z {:.4} U {:.4} V {:.4} W {:.4}",
            self.x, self.y, self.z, self.u, self.v, self.w
        )?;
        if trailing_blank {
            out.write_all(b" \n")
        } else {
            out.write_all(b"\n")
        }
    }
}

fn check_waypoints(waypoints: &[Vector2<f64>]) -> Result<()> {
    if waypoints.is_empty() {
        return Err(TexError::EmptyPath);
    }
    if waypoints.len() % 2 != 0 {
        return Err(TexError::invalid(
            "waypoints",
            format!("expected pairs, got {} points", waypoints.len()),
        ));
    }
    Ok(())
}

/// Stream the motion program for `waypoints` (pairs of segment endpoints) into `out`.
pub fn write_program<W: Write>(
    out: &mut W,
    waypoints: &[Vector2<f64>],
    ini: Vector2<f64>,
    fin: Vector2<f64>,
    machine: &MachineParams,
) -> Result<()> {
    check_waypoints(waypoints)?;
    machine.validate()?;
    let center = frame_center(ini, fin);
    let depth = -machine.thinning_t;

    for line in PREAMBLE {
        writeln!(out, "{line}")?;
    }
    Axes::top(waypoints[0], SAFE_Z, center, SAFE_W).write(out, true)?;

    for (k, pair) in waypoints.chunks_exact(2).enumerate() {
        let (pt1, pt2) = (pair[0], pair[1]);
        Axes::top(pt1, depth, center, 0.0).write(out, false)?;
        Axes::top(pt2, depth, center, 0.0).write(out, false)?;
        if let Some(next) = waypoints.get(2 * k + 2) {
            Axes::top(pt2, machine.z_hold, center, 0.0).write(out, false)?;
            Axes::top(*next, machine.z_hold, center, 0.0).write(out, false)?;
        }
    }

    Axes::home().write(out, true)?;
    writeln!(out, "{PROGRAM_END}")?;
    Ok(())
}

/// Render the motion program into memory.
pub fn emit_program(
    waypoints: &[Vector2<f64>],
    ini: Vector2<f64>,
    fin: Vector2<f64>,
    machine: &MachineParams,
) -> Result<String> {
    let mut buf: Vec<u8> = Vec::with_capacity(PREAMBLE.len() * 16 + waypoints.len() * 64);
    write_program(&mut buf, waypoints, ini, fin, machine)?;
    String::from_utf8(buf).map_err(|e| TexError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write the motion program to `path` in one sequential pass.
///
/// No temp-file/rename dance is done here; a failed write may leave a partial file.
pub fn write_program_file<P: AsRef<Path>>(
    path: P,
    waypoints: &[Vector2<f64>],
    ini: Vector2<f64>,
    fin: Vector2<f64>,
    machine: &MachineParams,
) -> Result<()> {
    check_waypoints(waypoints)?;
    machine.validate()?;
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_program(&mut out, waypoints, ini, fin, machine)?;
    out.flush()?;
    tracing::debug!(path = %path.display(), points = waypoints.len(), "program written");
    Ok(())
}
