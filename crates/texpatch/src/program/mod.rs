//! Motion program text: emission for the dual-head rig and read-back.
//!
//! Line format: `X <f> Y <f> Z <f> U <f> V <f> W <f>` with four decimals.
//! (X,Y,Z) drive the top head; (U,V) carry the mirror center of the bottom
//! head and W its height. Setup and termination directives are literal.
//!
//! Code cross-refs: `sequence::TraversalPlan::waypoints`, `pipeline::ToolPath::render`

mod emit;
mod read;

pub use emit::{
    emit_program, frame_center, write_program, write_program_file, MachineParams, PREAMBLE,
    PROGRAM_END, SAFE_W, SAFE_Z,
};
pub use read::{parse_program, read_program_file, MotionRecord, ProgramSummary};
