use log::LevelFilter;
use pmgrid::prelude::*;
use pmgrid::StrError;
use std::io::Write;
use std::path::Path;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pmgrid_to_json",
    about = "Builds the grid and parameter fields of a schematization and writes them to a JSON file"
)]
struct Options {
    /// Schematization file (JSON)
    schematization: String,

    /// Output directory (default: /tmp/pmgrid/results)
    out_dir: Option<String>,

    /// Three-dimensional model
    #[structopt(long)]
    three_dim: bool,

    /// Two-dimensional (non-axisymmetric) model
    #[structopt(long, conflicts_with = "three-dim")]
    two_dim: bool,

    /// Default maximum horizontal cell size
    #[structopt(long)]
    res_hor_max: Option<f64>,

    /// Default maximum vertical cell size
    #[structopt(long)]
    res_vert_max: Option<f64>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG is used if absent
    #[structopt(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();
    init_logging(options.log_level.as_deref());

    // configuration
    let mut config = Config::new();
    if options.three_dim {
        config.set_model_type(ModelType::ThreeDim)?;
    } else if options.two_dim {
        config.set_model_type(ModelType::TwoDim)?;
    }
    if let Some(value) = options.res_hor_max {
        config.set_res_hor_max(value)?;
    }
    if let Some(value) = options.res_vert_max {
        config.set_res_vert_max(value)?;
    }

    // load data
    let schematization = Schematization::read_json(&options.schematization)?;
    let stem = Path::new(&options.schematization)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or("cannot get the file stem of the schematization")?;

    // build and write
    let (state, report) = ModelState::build(&schematization, &config)?;
    let (nlay, nrow, ncol) = state.grid.shape();
    let n_issue = report.issues.len();
    let output = GridOutput::new(stem, state, report);
    let out_dir = options.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR);
    let path = format!("{}/{}-grid.json", out_dir, stem);
    output.write_json(&path)?;

    // message
    let thin_line = format!("{:─^1$}", "", path.len());
    println!("\n\n{}", thin_line);
    println!("grid: {} layers × {} rows × {} columns", nlay, nrow, ncol);
    println!("wells: {}; fill issues: {}", output.state.wells.len(), n_issue);
    if n_issue > 0 {
        print!("{}", output.report);
    }
    println!("the JSON file is:");
    println!("{}", path);
    println!("{}\n\n", thin_line);
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Options;
    use structopt::StructOpt;

    #[test]
    fn options_work() {
        let options = Options::from_iter_safe(&["pmgrid_to_json", "data/a.json", "--two-dim"]).unwrap();
        assert!(options.two_dim);
        assert!(!options.three_dim);
        assert_eq!(options.out_dir, None);
    }

    #[test]
    fn options_capture_conflicting_model_types() {
        let result = Options::from_iter_safe(&["pmgrid_to_json", "data/a.json", "--three-dim", "--two-dim"]);
        assert!(result.is_err());
    }
}
