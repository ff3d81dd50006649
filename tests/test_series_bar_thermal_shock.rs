use pfsim::prelude::*;
use pfsim::base::FILENAME_FORCES;
use pfsim::StrError;
use russell_lab::*;
use std::fs;

// Thermal shock of a clamped bar
//
// TEST GOAL
//
// This test verifies the eigenstrain loading of the lumped bar backend: the
// cooled end shrinks and the clamped bar goes into tension until the weakest
// segment (next to the cooled end) breaks.
//
// LOADING
//
// ε₀(x, t) = -ΔT erfc(x / t) with ΔT = 10
// Loads t = 0.5, 0.51, ..., 1.0
//
// The Young's modulus of segment 0 is reduced by 10%.

const NAME: &str = "test_series_bar_thermal_shock";

#[test]
fn test_series_bar_thermal_shock() -> Result<(), StrError> {
    // configuration
    let mut config = Config::new();
    config.geometry.cell_size = 0.5;
    config
        .set_loading(ParamLoading::ThermalShock { delta_t: 10.0 })
        .set_load_steps(0.5, 1.0, 51)
        .set_verbose(false, false);

    // backend
    let mut bar = SeriesBar::new(&config, None)?;
    bar.set_weak_segment(0, 0.9)?;

    // run
    let mut file_io = FileIo::new_enabled(NAME, Some(DEFAULT_TEST_DIR))?;
    let mut sim = Simulation::new(&config, bar)?;
    sim.run(&mut file_io)?;

    // the bar is in tension and the force grows while undamaged
    let d = &sim.diagnostics;
    assert_eq!(d.n_recorded, 51);
    assert_eq!(d.capped_steps().len(), 0);
    let forces = d.force_column();
    assert!(forces[0] > 0.0);
    for step in 1..10 {
        assert_eq!(d.energies[step][2], 0.0);
        assert!(forces[step] > forces[step - 1]);
    }

    // the weak segment breaks; the others unload
    let alpha = &sim.fields.alpha;
    assert!(alpha[0] > 0.9);
    for i in 1..alpha.dim() {
        assert_eq!(alpha[i], 0.0);
    }
    assert!(forces[50] < 0.05 * forces[9]);

    // the displacement of the clamped end is zero
    approx_eq(sim.fields.u[alpha.dim()], 0.0, 1e-12);

    // files
    let table = fs::read_to_string(&file_io.path_file(FILENAME_FORCES)).unwrap();
    assert_eq!(table.lines().count(), 51);
    let summary = FileIo::read_summary(&file_io.path_summary())?;
    assert_eq!(summary.config.loading, ParamLoading::ThermalShock { delta_t: 10.0 });
    Ok(())
}
