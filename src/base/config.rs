use super::{DamageLaw, ParamGeometry, ParamLoading, ParamMaterial, Policy, CONTROL_MIN_TOL};
use crate::StrError;
use plotpy::linspace;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the configuration of a phase-field fracture simulation
///
/// All values are set once before the simulation starts and are not modified afterwards.
/// The defaults correspond to the classical traction test of an AT1 bar.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Damage law (regularization model)
    pub law: DamageLaw,

    /// Material parameters
    pub material: ParamMaterial,

    /// Geometry of the specimen
    pub geometry: ParamGeometry,

    /// Loading of the specimen
    pub loading: ParamLoading,

    /// Minimum (first) load multiplier
    pub load_min: f64,

    /// Maximum (last) load multiplier
    pub load_max: f64,

    /// Number of load steps
    pub n_load_steps: usize,

    /// Tolerance on the infinity norm of the damage increment
    pub tol: f64,

    /// Maximum number of alternate minimization iterations per load step
    pub n_max_iterations: usize,

    /// What to do when the alternate minimization reaches n_max_iterations
    pub on_capped: Policy,

    /// What to do when a backend solver reports non-convergence
    pub on_backend_failure: Policy,

    /// Prints one line per load step
    pub verbose_steps: bool,

    /// Prints one line per alternate minimization iteration
    pub verbose_iterations: bool,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            law: DamageLaw::AT1,
            material: ParamMaterial::sample(),
            geometry: ParamGeometry::sample(),
            loading: ParamLoading::Traction { ut: 1.3 },
            load_min: 0.0,
            load_max: 5.0,
            n_load_steps: 50,
            tol: 1e-5,
            n_max_iterations: 200,
            on_capped: Policy::Warn,
            on_backend_failure: Policy::Warn,
            verbose_steps: true,
            verbose_iterations: false,
        }
    }

    /// Sets the damage law
    pub fn set_law(&mut self, law: DamageLaw) -> &mut Self {
        self.law = law;
        self
    }

    /// Sets the material parameters
    pub fn set_material(&mut self, material: ParamMaterial) -> &mut Self {
        self.material = material;
        self
    }

    /// Sets the geometry
    pub fn set_geometry(&mut self, geometry: ParamGeometry) -> &mut Self {
        self.geometry = geometry;
        self
    }

    /// Sets the loading
    pub fn set_loading(&mut self, loading: ParamLoading) -> &mut Self {
        self.loading = loading;
        self
    }

    /// Sets the sequence of load multipliers as linspace(load_min, load_max, n_load_steps)
    pub fn set_load_steps(&mut self, load_min: f64, load_max: f64, n_load_steps: usize) -> &mut Self {
        self.load_min = load_min;
        self.load_max = load_max;
        self.n_load_steps = n_load_steps;
        self
    }

    /// Sets the tolerance on the infinity norm of the damage increment
    pub fn set_tol(&mut self, value: f64) -> &mut Self {
        self.tol = value;
        self
    }

    /// Sets the maximum number of alternate minimization iterations
    pub fn set_n_max_iterations(&mut self, value: usize) -> &mut Self {
        self.n_max_iterations = value;
        self
    }

    /// Sets the policy for alternate minimization loops reaching n_max_iterations
    pub fn set_on_capped(&mut self, policy: Policy) -> &mut Self {
        self.on_capped = policy;
        self
    }

    /// Sets the policy for non-converged backend solves
    pub fn set_on_backend_failure(&mut self, policy: Policy) -> &mut Self {
        self.on_backend_failure = policy;
        self
    }

    /// Sets (or unsets) the strict mode
    ///
    /// In strict mode, capped loops and non-converged backend solves stop the simulation.
    /// Unsetting the strict mode restores the `Warn` policy.
    pub fn set_strict(&mut self, flag: bool) -> &mut Self {
        let policy = if flag { Policy::Abort } else { Policy::Warn };
        self.on_capped = policy;
        self.on_backend_failure = policy;
        self
    }

    /// Sets the verbose mode
    pub fn set_verbose(&mut self, steps: bool, iterations: bool) -> &mut Self {
        self.verbose_steps = steps;
        self.verbose_iterations = iterations;
        self
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        let m = &self.material;
        if m.young <= 0.0 {
            return Some(format!("young = {:?} is incorrect; it must be > 0.0", m.young));
        }
        if m.poisson <= -1.0 || m.poisson >= 0.5 {
            return Some(format!(
                "poisson = {:?} is incorrect; it must be -1.0 < ν < 0.5",
                m.poisson
            ));
        }
        if m.gc <= 0.0 {
            return Some(format!("gc = {:?} is incorrect; it must be > 0.0", m.gc));
        }
        if m.ell <= 0.0 {
            return Some(format!("ell = {:?} is incorrect; it must be > 0.0", m.ell));
        }
        if m.k_ell < 0.0 {
            return Some(format!("k_ell = {:?} is incorrect; it must be ≥ 0.0", m.k_ell));
        }
        let g = &self.geometry;
        if g.length <= 0.0 {
            return Some(format!("length = {:?} is incorrect; it must be > 0.0", g.length));
        }
        if g.height <= 0.0 {
            return Some(format!("height = {:?} is incorrect; it must be > 0.0", g.height));
        }
        if g.cell_size <= 0.0 || g.cell_size > g.length {
            return Some(format!(
                "cell_size = {:?} is incorrect; it must be > 0.0 and ≤ length",
                g.cell_size
            ));
        }
        match self.loading {
            ParamLoading::Traction { ut } => {
                if !ut.is_finite() {
                    return Some(format!("ut = {:?} is incorrect; it must be finite", ut));
                }
            }
            ParamLoading::ThermalShock { delta_t } => {
                if !delta_t.is_finite() || delta_t < 0.0 {
                    return Some(format!("delta_t = {:?} is incorrect; it must be ≥ 0.0", delta_t));
                }
            }
        }
        if !self.load_min.is_finite() || !self.load_max.is_finite() {
            return Some("load_min and load_max must be finite".to_string());
        }
        if self.n_load_steps < 1 {
            return Some(format!(
                "n_load_steps = {:?} is incorrect; it must be ≥ 1",
                self.n_load_steps
            ));
        }
        if self.n_load_steps > 1 && self.load_max <= self.load_min {
            return Some(format!(
                "load_max = {:?} is incorrect; it must be > load_min = {:?}",
                self.load_max, self.load_min
            ));
        }
        if !self.tol.is_finite() || self.tol < CONTROL_MIN_TOL {
            return Some(format!(
                "tol = {:?} is incorrect; it must be finite and ≥ {:e}",
                self.tol, CONTROL_MIN_TOL
            ));
        }
        if self.n_max_iterations < 1 {
            return Some(format!(
                "n_max_iterations = {:?} is incorrect; it must be ≥ 1",
                self.n_max_iterations
            ));
        }
        None // all good
    }

    /// Returns the (strictly increasing) sequence of load multipliers
    pub fn load_multipliers(&self) -> Vec<f64> {
        linspace(self.load_min, self.load_max, self.n_load_steps)
    }

    /// Returns the name of the run, encoding the model, geometry, mesh size, and ℓ
    ///
    /// Example: `AT1-bar-L5.0-H1.00-S0.0200-l0.1000`
    pub fn run_name(&self) -> String {
        format!(
            "{}-bar-L{:?}-H{:.2}-S{:.4}-l{:.4}",
            self.law, self.geometry.length, self.geometry.height, self.geometry.cell_size, self.material.ell
        )
    }

    /// Reads a JSON file containing the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(file);
        let config = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(config)
    }

    /// Writes a JSON file with the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "law = {}\n", self.law)?;
        write!(f, "material = {:?}\n", self.material)?;
        write!(f, "geometry = {:?}\n", self.geometry)?;
        write!(f, "loading = {:?}\n", self.loading)?;
        write!(
            f,
            "loads = linspace({:?}, {:?}, {})\n",
            self.load_min, self.load_max, self.n_load_steps
        )?;
        write!(f, "tol = {:?}\n", self.tol)?;
        write!(f, "n_max_iterations = {}\n", self.n_max_iterations)?;
        write!(f, "on_capped = {:?}\n", self.on_capped)?;
        write!(f, "on_backend_failure = {:?}\n", self.on_backend_failure)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
