use pfsim::prelude::*;
use pfsim::StrError;
use russell_lab::*;
use std::path::Path;

// Parametric study of the traction test
//
// TEST GOAL
//
// This test verifies that a sweep over the number of load steps, the cell size,
// and the ratio ℓ / cell_size runs one simulation per combination and writes
// each run to its own directory with a summary holding the generated configuration.
//
// CONFIGURATION AND PARAMETERS
//
// Default material and geometry (L = 5, H = 1)
// Number of load steps: 3, 5
// Cell sizes: 0.5, 1.0
// Ratios ℓ / cell_size: 7, 2

const NAME: &str = "test_sweep";

#[test]
fn test_sweep() -> Result<(), StrError> {
    // base configuration
    let mut base = Config::new();
    base.set_verbose(false, false);

    // sweep
    let mut sweep = Sweep::new();
    sweep
        .set_n_load_steps(&[3, 5])
        .set_cell_sizes(&[0.5, 1.0])
        .set_ell_factors(&[7.0, 2.0]);
    let configs = sweep.configs(&base)?;
    assert_eq!(configs.len(), 8);

    // runs
    let out_dir = format!("{}/{}", DEFAULT_TEST_DIR, NAME);
    let mut summaries = Vec::new();
    for config in &configs {
        let run_name = sweep.run_name(config);
        let mut bar = SeriesBar::new(config, None)?;
        let middle = bar.n_segment() / 2;
        bar.set_weak_segment(middle, 0.9)?;
        let mut file_io = FileIo::new_enabled(&run_name, Some(&out_dir))?;
        let mut sim = Simulation::new(config, bar)?;
        sim.run(&mut file_io)?;
        assert_eq!(sim.diagnostics.n_recorded, config.n_load_steps);
        summaries.push(file_io.path_summary());
    }

    // one directory per run
    let mut unique = summaries.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 8);
    assert!(summaries[0].contains("AT1-bar-L5.0-H1.00-S0.5000-l3.5000-N3"));
    assert!(summaries[7].contains("AT1-bar-L5.0-H1.00-S1.0000-l2.0000-N5"));

    // each summary holds its own configuration
    for (config, path) in configs.iter().zip(&summaries) {
        assert!(Path::new(path).exists());
        let summary = FileIo::read_summary(path)?;
        assert_eq!(summary.config.law, config.law);
        assert_eq!(summary.config.n_load_steps, config.n_load_steps);
        assert_eq!(summary.diagnostics.n_recorded, config.n_load_steps);
        approx_eq(summary.config.geometry.cell_size, config.geometry.cell_size, 1e-15);
        approx_eq(summary.config.material.ell, config.material.ell, 1e-15);
    }
    let first = FileIo::read_summary(&summaries[0])?;
    approx_eq(first.config.material.ell, 7.0 * 0.5, 1e-15);
    let last = FileIo::read_summary(&summaries[7])?;
    approx_eq(last.config.material.ell, 2.0 * 1.0, 1e-15);
    Ok(())
}
