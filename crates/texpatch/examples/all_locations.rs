//! Plan one patch at each location and print coverage and program figures.
//!
//! Usage: cargo run -p texpatch --example all_locations -- [angle_deg] [spacing]

use texpatch::prelude::*;
use texpatch::program::ProgramSummary;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let angle_deg: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(30.0);
    let spacing: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2.0);
    let layout = FieldLayout::default();

    for location in Location::ALL {
        let job = TextureJob {
            location,
            spacing,
            angle_deg,
            machine: MachineParams::new(0.1, 2.0),
            mode: Mode::ZigZag,
            direction: Direction::Inward,
        };
        let toolpath = plan_job(&job, &layout)?;
        let summary = ProgramSummary::from_records(&parse_program(&toolpath.render()?)?);
        println!(
            "loc {location}: corners ({:.1},{:.1})..({:.1},{:.1}) lines {}/{} cut {:.1} mm travel {:.1} mm",
            toolpath.ini.x,
            toolpath.ini.y,
            toolpath.fin.x,
            toolpath.fin.y,
            toolpath.coverage.len(),
            toolpath.coverage.expected_lines(),
            summary.cut_length,
            summary.travel_length,
        );
    }
    Ok(())
}
