use pfsim::analytical::HomogeneousBar;
use pfsim::base::FILENAME_FIGURE;
use pfsim::fem::{FileIo, SummaryPlot};
use pfsim::StrError;
use std::path::Path;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pfsim_plot",
    about = "Regenerates the energies and force figure from the summary file of a run"
)]
struct Options {
    /// Path to the summary.json file
    summary: String,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load data
    let summary = FileIo::read_summary(&options.summary)?;

    // reference point (traction only)
    let critical = match HomogeneousBar::new(&summary.config) {
        Ok(reference) => reference.critical_point(),
        Err(_) => None,
    };

    // the figure goes next to the summary file
    let path_figure = Path::new(&options.summary).with_file_name(FILENAME_FIGURE);
    SummaryPlot::new(&summary.diagnostics, critical).save(&path_figure)?;

    // message
    let path = format!("{}", path_figure.display());
    let thin_line = format!("{:─^1$}", "", path.len());
    println!("\n\n{}", thin_line);
    println!("Figure generated:");
    println!("{}", path);
    println!("{}\n\n", thin_line);
    Ok(())
}
