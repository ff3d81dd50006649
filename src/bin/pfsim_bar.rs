use pfsim::analytical::{HomogeneousBar, SeriesBar};
use pfsim::base::{Config, DamageLaw, ParamLoading, Sweep, DEFAULT_OUT_DIR, FILENAME_FIGURE};
use pfsim::fem::{FileIo, Simulation, SummaryPlot};
use pfsim::StrError;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pfsim_bar",
    about = "Runs the phase-field fracture simulation of a bar made of segments in series"
)]
struct Options {
    /// Output directory (the default output directory of pfsim if omitted)
    #[structopt(long)]
    out_dir: Option<String>,

    /// JSON file with the configuration (the defaults are used otherwise)
    #[structopt(long)]
    config: Option<String>,

    /// Uses the AT2 damage law instead of AT1
    #[structopt(long)]
    at2: bool,

    /// Applies a thermal shock with the given temperature drop instead of the traction
    #[structopt(long)]
    thermal_shock: Option<f64>,

    /// Numbers of load steps, e.g., 50,100 (one run each)
    #[structopt(long, use_delimiter = true)]
    steps: Vec<usize>,

    /// Cell sizes, e.g., 0.02,0.05 (one run each)
    #[structopt(long, use_delimiter = true)]
    cell_sizes: Vec<f64>,

    /// Ratios ℓ / cell_size, e.g., 7,2 (one run each)
    #[structopt(long, use_delimiter = true)]
    ell_factors: Vec<f64>,

    /// Number of segments (default: length / cell_size)
    #[structopt(long)]
    segments: Option<usize>,

    /// Reduction factor of the Young's modulus of the middle segment (1 means no weak segment)
    #[structopt(long, default_value = "0.9")]
    weak: f64,

    /// Aborts the run if the alternate minimization or the backend does not converge
    #[structopt(long)]
    strict: bool,

    /// Prints the alternate minimization iterations
    #[structopt(long)]
    verbose: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();
    let out_dir = options.out_dir.as_deref();

    // base configuration
    let mut base = match &options.config {
        Some(path) => Config::read_json(path)?,
        None => Config::new(),
    };
    if options.at2 {
        base.set_law(DamageLaw::AT2);
    }
    if let Some(delta_t) = options.thermal_shock {
        base.set_loading(ParamLoading::ThermalShock { delta_t });
    }
    if options.strict {
        base.set_strict(true);
    }
    if options.verbose {
        base.set_verbose(true, true);
    }

    // parametric study
    let mut sweep = Sweep::new();
    sweep
        .set_n_load_steps(&options.steps)
        .set_cell_sizes(&options.cell_sizes)
        .set_ell_factors(&options.ell_factors);
    let configs = sweep.configs(&base)?;

    // runs
    let mut paths = Vec::new();
    for (i, config) in configs.iter().enumerate() {
        let run_name = sweep.run_name(config);
        println!("\nRUN {} of {}: {}", i + 1, configs.len(), run_name);

        // backend
        let mut bar = SeriesBar::new(config, options.segments)?;
        if options.weak < 1.0 {
            let middle = bar.n_segment() / 2;
            bar.set_weak_segment(middle, options.weak)?;
        }

        // output
        let mut file_io = FileIo::new_enabled(&run_name, out_dir)?;
        config.write_json(&file_io.path_file("config.json"))?;

        // run
        let mut sim = Simulation::new(config, bar)?;
        sim.run(&mut file_io)?;

        // figure
        let critical = match HomogeneousBar::new(config) {
            Ok(reference) => reference.critical_point(),
            Err(_) => None,
        };
        let path_figure = file_io.path_file(FILENAME_FIGURE);
        SummaryPlot::new(&sim.diagnostics, critical).save(&path_figure)?;

        // warning
        let capped = sim.diagnostics.capped_steps();
        if capped.len() > 0 {
            println!("\nWARNING: the alternate minimization reached the cap at load steps {:?}", capped);
        }
        paths.push(path_figure);
    }

    // message
    let width = paths.iter().map(|p| p.len()).max().unwrap_or(0);
    let thin_line = format!("{:─^1$}", "", width);
    println!("\n\n{}", thin_line);
    println!(
        "Results saved in {}; the summary figures are:",
        out_dir.unwrap_or(DEFAULT_OUT_DIR)
    );
    for path in &paths {
        println!("{}", path);
    }
    println!("{}\n\n", thin_line);
    Ok(())
}
