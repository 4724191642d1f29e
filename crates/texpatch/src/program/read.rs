use std::fs;
use std::path::Path;

use nalgebra::Vector2;
use serde::Serialize;

use crate::error::{Result, TexError};

/// One motion line read back from a program. Missing axes read as 0.0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MotionRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub u: f64,
    pub v: f64,
    pub w: f64,
}

impl MotionRecord {
    #[inline]
    pub fn xy(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    #[inline]
    pub fn uv(&self) -> Vector2<f64> {
        Vector2::new(self.u, self.v)
    }
    /// Top head below the stock surface.
    #[inline]
    pub fn at_depth(&self) -> bool {
        self.z < 0.0
    }
}

/// Parse every line starting with `X` as space-separated `KEY value` pairs.
///
/// Lines lacking either X or Y are skipped; keys other than XYZUVW (e.g. `F`)
/// are accepted and ignored. A dangling key or a non-numeric value is an error.
pub fn parse_program(text: &str) -> Result<Vec<MotionRecord>> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if !line.starts_with('X') {
            continue;
        }
        let lineno = idx + 1;
        let mut rec = MotionRecord::default();
        let (mut has_x, mut has_y) = (false, false);
        let mut tokens = line.split_whitespace();
        while let Some(key) = tokens.next() {
            let Some(raw) = tokens.next() else {
                return Err(TexError::Parse {
                    line: lineno,
                    reason: format!("key `{key}` has no value"),
                });
            };
            let value: f64 = raw.parse().map_err(|_| TexError::Parse {
                line: lineno,
                reason: format!("value `{raw}` for key `{key}` is not a number"),
            })?;
            match key {
                "X" => {
                    rec.x = value;
                    has_x = true;
                }
                "Y" => {
                    rec.y = value;
                    has_y = true;
                }
                "Z" => rec.z = value,
                "U" => rec.u = value,
                "V" => rec.v = value,
                "W" => rec.w = value,
                _ => {}
            }
        }
        if has_x && has_y {
            records.push(rec);
        }
    }
    Ok(records)
}

/// Read and parse a program file.
pub fn read_program_file<P: AsRef<Path>>(path: P) -> Result<Vec<MotionRecord>> {
    let text = fs::read_to_string(path)?;
    parse_program(&text)
}

/// Aggregate figures of a parsed program.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProgramSummary {
    pub records: usize,
    /// Moves that descend from above the surface to depth.
    pub plunges: usize,
    /// Moves that start and end at depth.
    pub cuts: usize,
    /// Moves that lift from depth to above the surface.
    pub retracts: usize,
    /// XY moves that stay above the surface.
    pub jogs: usize,
    pub cut_length: f64,
    /// XY length of every move that is not a cut.
    pub travel_length: f64,
    /// Lowest Z reached, if any record is at depth.
    pub max_depth: Option<f64>,
    /// XY bounds of records at depth: `[[x_min, y_min], [x_max, y_max]]`.
    pub cut_bounds: Option<[[f64; 2]; 2]>,
}

impl ProgramSummary {
    pub fn from_records(records: &[MotionRecord]) -> Self {
        let mut s = ProgramSummary {
            records: records.len(),
            ..Default::default()
        };
        for pair in records.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let d = (b.xy() - a.xy()).norm();
            match (a.at_depth(), b.at_depth()) {
                (true, true) => {
                    s.cuts += 1;
                    s.cut_length += d;
                }
                (false, true) => {
                    s.plunges += 1;
                    s.travel_length += d;
                }
                (true, false) => {
                    s.retracts += 1;
                    s.travel_length += d;
                }
                (false, false) => {
                    if d > 0.0 {
                        s.jogs += 1;
                    }
                    s.travel_length += d;
                }
            }
        }
        for r in records.iter().filter(|r| r.at_depth()) {
            s.max_depth = Some(s.max_depth.map_or(r.z, |z: f64| z.min(r.z)));
            s.cut_bounds = Some(match s.cut_bounds {
                None => [[r.x, r.y], [r.x, r.y]],
                Some([lo, hi]) => [
                    [lo[0].min(r.x), lo[1].min(r.y)],
                    [hi[0].max(r.x), hi[1].max(r.y)],
                ],
            });
        }
        s
    }
}
