use crate::grid::{BuildReport, ModelState};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the grid and parameter fields handed to the flow solver
///
/// Note: unfilled cells (NaN) of the real-valued grids are written as `null` and
/// read back as NaN (see [crate::util::unfilled_cells]).
#[derive(Serialize, Deserialize)]
pub struct GridOutput {
    pub name: String,        // name of the schematization
    pub report: BuildReport, // parameter-fill issues
    pub state: ModelState,   // grid and parameter fields
}

impl GridOutput {
    /// Allocates a new structure
    pub fn new(name: &str, state: ModelState, report: BuildReport) -> Self {
        GridOutput {
            name: name.to_string(),
            report,
            state,
        }
    }

    /// Reads a JSON file containing the grid
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let output = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(output)
    }

    /// Writes a JSON file with the grid
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

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
