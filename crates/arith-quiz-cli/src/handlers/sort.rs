//! `sort`: recovery facility demonstration

use std::io::Write;

use console::style;
use mrf_sorting::{process_all, sample_intake, total_weight, Kg, Personnel};

use crate::commands::SortArgs;
use crate::error::{CliError, CliResult};

/// Processes the sample intake and runs one sorter through each task
pub fn execute_sort<W: Write>(args: &SortArgs, out: &mut W) -> CliResult<()> {
    if !args.baled_kg.is_finite() || args.baled_kg < 0.0 {
        return Err(CliError::invalid_argument(
            "--baled-kg must be a non-negative number",
        ));
    }

    let intake = sample_intake();
    writeln!(out, "{}", style("--- Processing collected waste ---").bold())?;
    for report in process_all(&intake) {
        writeln!(out, "{report}")?;
    }
    writeln!(
        out,
        "   Total intake: {:.1} kg across {} items",
        total_weight(&intake),
        intake.len()
    )?;

    writeln!(out)?;
    writeln!(out, "{}", style("--- Personnel tasks ---").bold())?;
    let sorter = Personnel::new(args.name.as_str());
    writeln!(out, "{}", sorter.sort_general())?;
    writeln!(out, "{}", sorter.sort_material(&args.material))?;
    let (baled, recorded) = sorter.record_baled(args.baled_kg);
    writeln!(out, "{baled}")?;
    writeln!(out, "   * Final Inventory Update: {} kg added.", Kg(recorded))?;
    Ok(())
}
