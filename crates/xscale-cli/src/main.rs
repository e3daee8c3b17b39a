//! Write an XSCALE input file for a set of XDS datasets.
//!
//! Usage: `make_xscale [FILE]... [-s SPGR] [-c A B C AL BE GA]`

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use xscale_core::config::{CliOverrides, XscaleConfig};
use xscale_core::errors::{PathError, PipelineError, XscaleErrorCode};
use xscale_core::tracing::init_tracing;
use xscale_core::types::{SpaceGroup, UnitCell};
use xscale_merge::discovery::discover_inputs;
use xscale_merge::{run, MergeRequest, Overrides};

#[derive(Parser, Debug)]
#[command(name = "make_xscale", version)]
#[command(about = "Program to make an input file for XSCALE.")]
struct Args {
    /// Path to a cells.yaml / XDS_ASCII.HKL files
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Space group number (default: most common one)
    #[arg(short = 's', long = "spgr", value_parser = parse_space_group)]
    spgr: Option<SpaceGroup>,

    /// Override the unit cell parameters (default: mean unit cell)
    #[arg(short = 'c', long = "cell", num_args = 6, value_names = ["A", "B", "C", "AL", "BE", "GA"])]
    cell: Option<Vec<f64>>,

    /// Config file to use instead of ./xscale.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for XSCALE.INP and XDSCONV.INP; INPUT_FILE paths are
    /// written relative to it (default: current directory)
    #[arg(long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// High-resolution limit for INCLUDE_RESOLUTION_RANGE
    #[arg(long = "dmin")]
    resolution_high: Option<f64>,

    /// Low-resolution limit for INCLUDE_RESOLUTION_RANGE
    #[arg(long = "dmax")]
    resolution_low: Option<f64>,

    /// MINIMUM_I/SIGMA
    #[arg(long = "min-isigma")]
    minimum_i_over_sigma: Option<f64>,

    /// Number of space groups reported in the frequency ranking
    #[arg(long = "ranking-size")]
    ranking_size: Option<usize>,
}

fn parse_space_group(raw: &str) -> Result<SpaceGroup, String> {
    let number: u32 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a space group number"))?;
    SpaceGroup::try_from(number)
}

fn main() {
    init_tracing();
    let args = Args::parse();

    match execute(args) {
        Ok(()) => {}
        Err(e) if e.is_nothing_to_do() => {
            info!("{e}; nothing to do");
        }
        Err(e) => {
            error!(code = e.error_code(), "make_xscale failed");
            eprintln!("{}", e.tagged());
            process::exit(1);
        }
    }
}

fn execute(args: Args) -> Result<(), PipelineError> {
    let cwd = std::env::current_dir().map_err(|source| PathError::WorkingDirUnavailable { source })?;

    let cli = CliOverrides {
        minimum_i_over_sigma: args.minimum_i_over_sigma,
        resolution_low: args.resolution_low,
        resolution_high: args.resolution_high,
        ranking_size: args.ranking_size,
    };
    let config = XscaleConfig::load(&cwd, args.config.as_deref(), Some(&cli))?;

    let artifacts = if args.files.is_empty() {
        discover_inputs(&cwd, &config.discovery)?
    } else {
        args.files
    };
    if artifacts.is_empty() {
        info!("No input files found; nothing to do");
        return Ok(());
    }

    // clap enforces exactly six values.
    let unit_cell = args.cell.as_deref().and_then(UnitCell::from_slice);

    let request = MergeRequest {
        artifacts,
        overrides: Overrides {
            unit_cell,
            space_group: args.spgr,
        },
        output_dir: args.output_dir.unwrap_or_else(|| cwd.clone()),
        working_dir: cwd,
    };

    let summary = run(&request, &config)?;
    let parameters = &summary.consensus.parameters;
    println!("SPACE_GROUP_NUMBER= {}", parameters.space_group);
    println!("UNIT_CELL_CONSTANTS= {}", parameters.unit_cell);
    println!("Wrote file {}", summary.xscale_inp.display());
    println!("Wrote file {}", summary.xdsconv_inp.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_cell_and_space_group() {
        let args = Args::try_parse_from([
            "make_xscale",
            "cells.yaml",
            "-s",
            "19",
            "-c",
            "41.2",
            "58.7",
            "61.3",
            "90",
            "90",
            "90",
        ])
        .unwrap();
        assert_eq!(args.files, vec![PathBuf::from("cells.yaml")]);
        assert_eq!(args.spgr.map(SpaceGroup::number), Some(19));
        assert_eq!(args.cell.unwrap().len(), 6);
    }

    #[test]
    fn rejects_short_cell() {
        let result = Args::try_parse_from(["make_xscale", "-c", "41.2", "58.7", "61.3"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_space_group() {
        let result = Args::try_parse_from(["make_xscale", "-s", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_files_means_discovery() {
        let args = Args::try_parse_from(["make_xscale"]).unwrap();
        assert!(args.files.is_empty());
        assert!(args.cell.is_none());
        assert!(args.spgr.is_none());
    }
}
