/// Defines the directory where the simulation result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/pfsim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/pfsim/test";

/// Defines the smallest allowed tolerance for the damage increment
pub const CONTROL_MIN_TOL: f64 = 1e-15;

/// Defines the name of the file with the energies (one row per load step)
pub const FILENAME_ENERGIES: &str = "energies.txt";

/// Defines the name of the file with the force resultants (one row per load step)
pub const FILENAME_FORCES: &str = "forces.txt";

/// Defines the name of the file with the iteration counts (one row per load step)
pub const FILENAME_ITERATIONS: &str = "iterations.txt";

/// Defines the name of the summary figure
pub const FILENAME_FIGURE: &str = "energies_force.svg";
