//! Segment sequencer: visit order and per-segment direction.
//!
//! - `Direction::Inward` visits the ends first and closes in on the middle:
//!   `0, N-1, 1, N-2, ...` (a middle element of odd N is visited once).
//! - `Direction::Outward` starts at `N/2` and fans out: `mid-1, mid+1, mid-2, ...`,
//!   each side bounds-checked on its own.
//! - Every visited segment is first put in left-to-right order (`pt1.x <= pt2.x`);
//!   `Mode::ZigZag` then reverses every odd visit.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::coverage::CoverageSet;
use crate::error::TexError;
use crate::geom2::Segment;

/// Per-segment travel rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    OneDirection,
    ZigZag,
}

/// Order in which sweep lines are visited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Inward,
    Outward,
}

impl Mode {
    pub const ACCEPTED: &'static str = "one_direction, zig_zag";

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::OneDirection => "one_direction",
            Mode::ZigZag => "zig_zag",
        }
    }

    /// Whether the visit at position `k` (0-based) runs right to left.
    #[inline]
    pub fn reverses(&self, k: usize) -> bool {
        match self {
            Mode::OneDirection => false,
            Mode::ZigZag => k % 2 == 1,
        }
    }
}

impl Direction {
    pub const ACCEPTED: &'static str = "inward, outward";

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Inward => "inward",
            Direction::Outward => "outward",
        }
    }

    /// Visit order over `n` segments.
    pub fn visit_order(&self, n: usize) -> Vec<usize> {
        match self {
            Direction::Inward => inward_order(n),
            Direction::Outward => outward_order(n),
        }
    }
}

impl FromStr for Mode {
    type Err = TexError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one_direction" | "one-direction" => Ok(Mode::OneDirection),
            "zig_zag" | "zig-zag" => Ok(Mode::ZigZag),
            other => Err(TexError::invalid(
                "mode",
                format!("unknown mode {other:?}; expected one of {}", Mode::ACCEPTED),
            )),
        }
    }
}

impl FromStr for Direction {
    type Err = TexError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inward" => Ok(Direction::Inward),
            "outward" => Ok(Direction::Outward),
            other => Err(TexError::invalid(
                "direction",
                format!(
                    "unknown direction {other:?}; expected one of {}",
                    Direction::ACCEPTED
                ),
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn inward_order(n: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(n);
    for i in 0..(n + 1) / 2 {
        order.push(i);
        let j = n - 1 - i;
        if j != i {
            order.push(j);
        }
    }
    order
}

fn outward_order(n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let mid = n / 2;
    let mut order = Vec::with_capacity(n);
    order.push(mid);
    for i in 1..=mid {
        // each side is bounds-checked on its own
        if let Some(lo) = mid.checked_sub(i) {
            order.push(lo);
        }
        if mid + i < n {
            order.push(mid + i);
        }
    }
    order
}

/// One step of a traversal: which segment, and whether it runs right to left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit {
    pub index: usize,
    pub reversed: bool,
}

/// Visit order plus reversal flags for a coverage set of a given size.
///
/// The plan never mutates the coverage set; it is applied with [`TraversalPlan::waypoints`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraversalPlan {
    n: usize,
    mode: Mode,
    direction: Direction,
    visits: Vec<Visit>,
}

impl TraversalPlan {
    pub fn new(n: usize, mode: Mode, direction: Direction) -> Self {
        let visits = direction
            .visit_order(n)
            .into_iter()
            .enumerate()
            .map(|(k, index)| Visit {
                index,
                reversed: mode.reverses(k),
            })
            .collect();
        Self {
            n,
            mode,
            direction,
            visits,
        }
    }

    #[inline]
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn ordered_indices(&self) -> Vec<usize> {
        self.visits.iter().map(|v| v.index).collect()
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Oriented segments in visit order.
    ///
    /// `segments` must hold at least as many entries as the plan was built for.
    pub fn oriented(&self, segments: &[Segment]) -> Vec<Segment> {
        debug_assert!(
            segments.len() >= self.n,
            "plan for {} segments applied to {}",
            self.n,
            segments.len()
        );
        self.visits
            .iter()
            .map(|v| {
                let seg = segments[v.index].left_to_right();
                if v.reversed {
                    seg.reversed()
                } else {
                    seg
                }
            })
            .collect()
    }

    /// Flattened waypoints (two per visit).
    pub fn waypoints(&self, coverage: &CoverageSet) -> Vec<Vector2<f64>> {
        flatten(&self.oriented(coverage.segments()))
    }
}

/// Flatten oriented segments into `[pt1, pt2, pt1, pt2, ...]`.
pub fn flatten(segments: &[Segment]) -> Vec<Vector2<f64>> {
    let mut out = Vec::with_capacity(segments.len() * 2);
    for s in segments {
        out.push(s.pt1);
        out.push(s.pt2);
    }
    out
}

/// Order a coverage set into waypoints in one call.
pub fn sequence(coverage: &CoverageSet, mode: Mode, direction: Direction) -> Vec<Vector2<f64>> {
    TraversalPlan::new(coverage.len(), mode, direction).waypoints(coverage)
}
