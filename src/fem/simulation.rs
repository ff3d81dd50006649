use super::{AlternateMinimization, Backend, Diagnostics, Fields, FileIo, StepRecord};
use crate::base::Config;
use crate::StrError;

/// Implements the quasi-static load stepping of a phase-field fracture simulation
///
/// The simulation exclusively owns the backend, the fields, and the diagnostics. The load
/// steps are solved in strictly increasing order, each one starting from the converged
/// fields of the previous step. After each step, the damage lower bound is set to the
/// accepted damage field (irreversibility).
pub struct Simulation<'a, B: Backend> {
    /// Holds the configuration
    config: &'a Config,

    /// Holds the numerical backend
    backend: B,

    /// Holds the fields
    pub fields: Fields,

    /// Holds the recorded quantities
    pub diagnostics: Diagnostics,
}

impl<'a, B: Backend> Simulation<'a, B> {
    /// Allocates a new instance
    ///
    /// Validates the configuration and allocates the fields (before any load step).
    pub fn new(config: &'a Config, backend: B) -> Result<Self, StrError> {
        if let Some(msg) = config.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate simulation because config.validate() failed");
        }
        let fields = Fields::new(&backend)?;
        let diagnostics = Diagnostics::new(config.n_load_steps);
        Ok(Simulation {
            config,
            backend,
            fields,
            diagnostics,
        })
    }

    /// Returns an access to the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs the simulation over all load steps
    pub fn run(&mut self, file_io: &mut FileIo) -> Result<(), StrError> {
        // helper macro to save the results before returning an error
        macro_rules! run {
            ($e:expr) => {
                match $e {
                    Ok(val) => val,
                    Err(err) => {
                        match file_io.write_tables(&self.diagnostics) {
                            Ok(_) => (),
                            Err(e) => println!("ERROR-ON-ERROR: cannot write tables due to: {}", e),
                        }
                        match file_io.write_summary(self.config, &self.diagnostics) {
                            Ok(_) => (),
                            Err(e) => println!("ERROR-ON-ERROR: cannot write summary due to: {}", e),
                        }
                        return Err(err);
                    }
                }
            };
        }

        if self.diagnostics.n_recorded > 0 {
            return Err("the simulation has already been run");
        }

        // alternate minimization solver
        let mut solver = AlternateMinimization::new(self.config, self.fields.alpha.dim());
        solver.control.print_header();

        // load stepping
        for (step, t) in self.config.load_multipliers().into_iter().enumerate() {
            // solve the coupled problem
            let report = run!(solver.solve(&mut self.backend, &mut self.fields, t));

            // irreversibility
            run!(self.fields.update_lower_bound());

            // post-processing
            let elastic = self.backend.elastic_energy(&self.fields.u, &self.fields.alpha);
            let surface = self.backend.surface_energy(&self.fields.alpha);
            let force = self.backend.reaction_force(&self.fields.u, &self.fields.alpha);
            run!(self.diagnostics.record(&StepRecord {
                t,
                elastic,
                surface,
                force,
                iterations: report.iterations,
                converged: solver.control.converged(),
                backend_failures: report.backend_failures,
            }));
            solver.control.print_step(step, t, elastic, surface);

            // output
            run!(file_io.write_fields(t, &self.fields));
            run!(file_io.write_tables(&self.diagnostics));
        }
        solver.control.print_footer();

        // write the summary file
        file_io.write_summary(self.config, &self.diagnostics)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Simulation;
    use crate::base::{Config, DEFAULT_TEST_DIR};
    use crate::fem::testing::{FixedPointDouble, Oscillating};
    use crate::fem::FileIo;
    use russell_lab::approx_eq;

    fn quiet_config() -> Config {
        let mut config = Config::new();
        config.set_verbose(false, false).set_load_steps(1.0, 3.0, 3);
        config
    }

    #[test]
    fn new_captures_errors() {
        let mut config = quiet_config();
        config.set_tol(0.0);
        let double = FixedPointDouble::new(1, 1, 3);
        assert_eq!(
            Simulation::new(&config, double).err(),
            Some("cannot allocate simulation because config.validate() failed")
        );
        for tol in [f64::INFINITY, f64::NAN] {
            let mut config = quiet_config();
            config.set_tol(tol);
            let double = FixedPointDouble::new(1, 1, 3);
            assert_eq!(
                Simulation::new(&config, double).err(),
                Some("cannot allocate simulation because config.validate() failed")
            );
        }
        let config = quiet_config();
        let double = FixedPointDouble::new(0, 1, 3);
        assert_eq!(
            Simulation::new(&config, double).err(),
            Some("the number of displacement DOFs must be > 0")
        );
    }

    #[test]
    fn run_works() {
        let config = quiet_config();
        let double = FixedPointDouble::new(2, 2, 3);
        let mut sim = Simulation::new(&config, double).unwrap();
        let mut file_io = FileIo::new();
        sim.run(&mut file_io).unwrap();
        let d = &sim.diagnostics;
        assert_eq!(d.n_recorded, 3);
        assert_eq!(d.iterations, &[[1.0, 3.0], [2.0, 3.0], [3.0, 3.0]]);
        assert_eq!(d.converged, &[true, true, true]);
        approx_eq(sim.fields.lb[0], 0.3, 1e-15);
        assert_eq!(sim.backend().t, 3.0);
        assert_eq!(
            sim.run(&mut file_io).err(),
            Some("the simulation has already been run")
        );
    }

    #[test]
    fn run_writes_results_before_failing() {
        let mut config = quiet_config();
        config.set_strict(true).set_n_max_iterations(5);
        let mut file_io = FileIo::new_enabled("run_writes_results_before_failing", Some(DEFAULT_TEST_DIR)).unwrap();
        let mut sim = Simulation::new(&config, Oscillating::new(1)).unwrap();
        assert_eq!(
            sim.run(&mut file_io).err(),
            Some("alternate minimization did not converge")
        );
        let summary = FileIo::read_summary(&file_io.path_summary()).unwrap();
        assert_eq!(summary.diagnostics.n_recorded, 0);
    }
}
