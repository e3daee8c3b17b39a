//! Shared constants for XSCALE input preparation.

// ---- XDS conventions ----

/// Reflection file XDS writes into each processing directory.
pub const XDS_ASCII_FILENAME: &str = "XDS_ASCII.HKL";

/// Leading character of every XDS_ASCII header line.
pub const HEADER_MARKER: char = '!';

/// Header key carrying the six unit-cell constants.
pub const UNIT_CELL_KEY: &str = "UNIT_CELL_CONSTANTS";

/// Header key carrying the space-group number.
pub const SPACE_GROUP_KEY: &str = "SPACE_GROUP_NUMBER";

// ---- Output files ----

/// Default name of the XSCALE control file.
pub const DEFAULT_XSCALE_INP: &str = "XSCALE.INP";

/// Default name of the XDSCONV control file.
pub const DEFAULT_XDSCONV_INP: &str = "XDSCONV.INP";

/// Default merged reflection file written by XSCALE.
pub const DEFAULT_MERGED_FILE: &str = "MERGED.HKL";

// ---- Scaling settings ----

/// Default MINIMUM_I/SIGMA.
pub const DEFAULT_MIN_I_OVER_SIGMA: f64 = 2.0;

/// Default low-resolution limit in Å.
pub const DEFAULT_RESOLUTION_LOW: f64 = 20.0;

/// Default high-resolution limit in Å.
pub const DEFAULT_RESOLUTION_HIGH: f64 = 0.8;

// ---- Discovery ----

/// Multi-record document picked up when no inputs are given.
pub const DEFAULT_CELLS_FILE: &str = "cells.yaml";

/// Glob for reflection files picked up when no cells document exists.
pub const DEFAULT_REFLECTION_GLOB: &str = "*XDS_ASCII.HKL";

// ---- Consensus ----

/// Number of space groups reported in the frequency ranking.
pub const DEFAULT_RANKING_SIZE: usize = 5;
