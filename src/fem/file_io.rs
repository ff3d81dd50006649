use super::{Diagnostics, Fields};
use crate::base::{Config, DEFAULT_OUT_DIR, FILENAME_ENERGIES, FILENAME_FIGURE, FILENAME_FORCES, FILENAME_ITERATIONS};
use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt::Write;
use std::fs::{self, File};
use std::io::{BufReader, Write as IoWrite};
use std::path::Path;

/// Holds the fields at one load step (as written to the snapshot files)
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FieldSnapshot {
    /// Load multiplier
    pub t: f64,

    /// Displacement field
    pub u: Vector,

    /// Damage field
    pub alpha: Vector,
}

/// Borrows the fields to write a snapshot without copying
#[derive(Serialize)]
struct FieldSnapshotRef<'a> {
    t: f64,
    u: &'a Vector,
    alpha: &'a Vector,
}

/// Holds everything needed to post-process a run
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Summary {
    /// Configuration of the run
    pub config: Config,

    /// Output control (indices and loads of the snapshots)
    pub file_io: FileIo,

    /// Recorded quantities
    pub diagnostics: Diagnostics,
}

/// Assists in generating output files
///
/// All files of a run go to the directory `<output_directory>/<run_name>`:
///
/// * `fields-<index>.json` -- one snapshot of (t, u, α) per load step
/// * `energies.txt`, `forces.txt`, `iterations.txt` -- tables rewritten after each load step
/// * `summary.json` -- configuration, snapshot indices, and diagnostics
/// * `energies_force.svg` -- summary figure
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FileIo {
    /// Holds a flag to enable/disable the file generation
    enabled: bool,

    /// Defines the output directory of the run
    output_dir: String,

    /// Holds the count of files written
    output_count: usize,

    /// Holds the indices of the snapshot files
    pub indices: Vec<usize>,

    /// Holds the load multipliers corresponding to each snapshot file
    pub times: Vec<f64>,
}

impl FileIo {
    /// Allocates a new instance with deactivated generation of files
    pub fn new() -> Self {
        FileIo {
            enabled: false,
            output_dir: String::new(),
            output_count: 0,
            indices: Vec::new(),
            times: Vec::new(),
        }
    }

    /// Allocates a new instance with activated generation of files
    ///
    /// **Warning:** An existing directory `<output_directory>/<run_name>` is removed.
    ///
    /// # Input
    ///
    /// * `run_name` -- the name of the run, e.g., [Config::run_name]
    /// * `output_directory` -- the directory to save the output files.
    ///   None means that the default directory will be used; see [DEFAULT_OUT_DIR]
    pub fn new_enabled(run_name: &str, output_directory: Option<&str>) -> Result<Self, StrError> {
        if run_name.is_empty() {
            return Err("the run name must not be empty");
        }
        let out_dir = match output_directory {
            Some(d) => d,
            None => DEFAULT_OUT_DIR,
        };
        let output_dir = format!("{}/{}", out_dir, run_name);
        if Path::new(&output_dir).is_dir() {
            fs::remove_dir_all(&output_dir).map_err(|_| "cannot remove existing output directory")?;
        }
        fs::create_dir_all(&output_dir).map_err(|_| "cannot create output directory")?;
        Ok(FileIo {
            enabled: true,
            output_dir,
            output_count: 0,
            indices: Vec::new(),
            times: Vec::new(),
        })
    }

    /// Returns whether the generation of files is enabled or not
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the output directory of the run
    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    /// Generates the filename path for the snapshot files
    pub fn path_fields(&self, index: usize) -> String {
        if self.enabled {
            format!("{}/fields-{:0>20}.json", self.output_dir, index)
        } else {
            "".to_string()
        }
    }

    /// Generates the filename path for a table or figure file
    pub fn path_file(&self, filename: &str) -> String {
        if self.enabled {
            format!("{}/{}", self.output_dir, filename)
        } else {
            "".to_string()
        }
    }

    /// Generates the filename path for the summary file
    pub fn path_summary(&self) -> String {
        self.path_file("summary.json")
    }

    /// Writes a snapshot of the fields
    ///
    /// **Note:** No output is generated if the file generation is disabled.
    pub fn write_fields(&mut self, t: f64, fields: &Fields) -> Result<(), StrError> {
        if self.enabled {
            let path = self.path_fields(self.output_count);
            let snapshot = FieldSnapshotRef {
                t,
                u: &fields.u,
                alpha: &fields.alpha,
            };
            let mut file = File::create(&path).map_err(|_| "cannot create file")?;
            serde_json::to_writer(&mut file, &snapshot).map_err(|_| "cannot write file")?;
            self.indices.push(self.output_count);
            self.times.push(t);
            self.output_count += 1;
        }
        Ok(())
    }

    /// Reads a snapshot of the fields
    pub fn read_fields(&self, index: usize) -> Result<FieldSnapshot, StrError> {
        if !self.enabled {
            return Err("FileIo must be enabled first");
        }
        let path = self.path_fields(index);
        let file = File::open(&path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(file);
        let snapshot = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(snapshot)
    }

    /// Writes the energies, forces, and iterations tables with the history recorded so far
    pub fn write_tables(&self, diagnostics: &Diagnostics) -> Result<(), StrError> {
        if self.enabled {
            let n = diagnostics.n_recorded;
            write_table(&self.path_file(FILENAME_ENERGIES), &diagnostics.energies[..n])?;
            write_table(&self.path_file(FILENAME_FORCES), &diagnostics.forces[..n])?;
            write_table(&self.path_file(FILENAME_ITERATIONS), &diagnostics.iterations[..n])?;
        }
        Ok(())
    }

    /// Writes the summary file
    pub fn write_summary(&self, config: &Config, diagnostics: &Diagnostics) -> Result<(), StrError> {
        if self.enabled {
            let summary = Summary {
                config: config.clone(),
                file_io: self.clone(),
                diagnostics: diagnostics.clone(),
            };
            let mut file = File::create(&self.path_summary()).map_err(|_| "cannot create file")?;
            serde_json::to_writer(&mut file, &summary).map_err(|_| "cannot write file")?;
        }
        Ok(())
    }

    /// Reads the summary file of a run
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_summary<P>(full_path: &P) -> Result<Summary, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(file);
        let summary = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(summary)
    }
}

impl Summary {
    /// Returns the path of the summary figure
    pub fn path_figure(&self) -> String {
        self.file_io.path_file(FILENAME_FIGURE)
    }
}

/// Writes a table with one row per load step
fn write_table<const N: usize>(full_path: &str, rows: &[[f64; N]]) -> Result<(), StrError> {
    let mut buffer = String::new();
    for row in rows {
        for j in 0..N {
            if j > 0 {
                write!(&mut buffer, " ").unwrap();
            }
            write!(&mut buffer, "{:.18e}", row[j]).unwrap();
        }
        write!(&mut buffer, "\n").unwrap();
    }
    let mut file = File::create(full_path).map_err(|_| "cannot create file")?;
    file.write_all(buffer.as_bytes()).map_err(|_| "cannot write file")?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
