//! Region selector: patch placement on the specimen field.
//!
//! The field is a square of side `length` centered on the origin. Each
//! location code puts a `texture_w` patch centered in one quadrant:
//! 1 → (+,+), 2 → (−,+), 3 → (−,−), 4 → (+,−).

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TexError};

/// Patch location code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Location {
    One,
    Two,
    Three,
    Four,
}

impl Location {
    pub const ALL: [Location; 4] = [Location::One, Location::Two, Location::Three, Location::Four];

    pub fn code(&self) -> &'static str {
        match self {
            Location::One => "1",
            Location::Two => "2",
            Location::Three => "3",
            Location::Four => "4",
        }
    }
}

impl FromStr for Location {
    type Err = TexError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "1" => Ok(Location::One),
            "2" => Ok(Location::Two),
            "3" => Ok(Location::Three),
            "4" => Ok(Location::Four),
            other => Err(TexError::invalid(
                "location",
                format!("unknown location {other:?}; expected one of 1, 2, 3, 4"),
            )),
        }
    }
}

impl TryFrom<String> for Location {
    type Error = TexError;
    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Location> for String {
    fn from(loc: Location) -> String {
        loc.code().to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Field and patch dimensions (mm).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldLayout {
    /// Side length of the whole field.
    pub length: f64,
    /// Side length of one texture patch.
    pub texture_w: f64,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            length: 250.0,
            texture_w: 50.0,
        }
    }
}

impl FieldLayout {
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("length", self.length), ("texture_w", self.texture_w)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(TexError::invalid(name, format!("{v} must be a finite value > 0")));
            }
        }
        Ok(())
    }

    /// Offset of the patch's inner corner from both axes.
    #[inline]
    fn inset(&self) -> (f64, f64) {
        let x = self.length / 4.0 - self.texture_w / 2.0;
        let y = self.length / 4.0 - self.texture_w / 2.0;
        (x, y)
    }

    /// Opposite corners `(ini, fin)` of the patch at `loc`.
    pub fn corners(&self, loc: Location) -> (Vector2<f64>, Vector2<f64>) {
        let (x, y) = self.inset();
        let w = self.texture_w;
        match loc {
            Location::One => (Vector2::new(x, y), Vector2::new(x + w, y + w)),
            Location::Two => (Vector2::new(-x - w, y), Vector2::new(-x, y + w)),
            Location::Three => (Vector2::new(-(x + w), -(y + w)), Vector2::new(-x, -y)),
            Location::Four => (Vector2::new(x, -(y + w)), Vector2::new(x + w, -y)),
        }
    }

    /// Corners for a raw location code.
    pub fn corners_for(&self, code: &str) -> Result<(Vector2<f64>, Vector2<f64>)> {
        Ok(self.corners(code.parse()?))
    }
}
