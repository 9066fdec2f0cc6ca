//! Experiment constants and runtime configuration defaults

// Dataset layout shared by the generator and the solver
/// Default directory holding the generated datasets
pub const DEFAULT_DATA_DIR: &str = "data";
/// Dataset file name prefix, followed by the site count
pub const DATASET_FILE_PREFIX: &str = "sites_";
/// Dataset file extension
pub const DATASET_FILE_EXTENSION: &str = "json";
/// Size whose file must exist before any solver mode runs
pub const SENTINEL_DATASET_SIZE: usize = 5;

/// Sizes written by the generator
pub const GENERATED_SIZES: [usize; 6] = [5, 8, 10, 12, 15, 20];

/// Sizes used by `--test-small`
pub const TEST_SMALL_SIZES: [usize; 3] = [5, 8, 10];
/// Sizes used by `--time-brute-force`
pub const BRUTE_FORCE_TIMING_SIZES: [usize; 5] = [5, 8, 10, 12, 15];
/// Sizes used by `--time-approximation`
pub const APPROXIMATION_TIMING_SIZES: [usize; 6] = [5, 8, 10, 12, 15, 20];
/// Sizes used by `--compare-all`
pub const COMPARISON_SIZES: [usize; 3] = [5, 8, 10];

// Generator settings
/// Fixed seed for reproducible datasets
pub const DEFAULT_SEED: u64 = 42;
/// Side length of the square area sites are scattered over
pub const GRID_EXTENT: f64 = 100.0;
/// Decimal places kept for coordinates and distances
pub const COORDINATE_DECIMALS: i32 = 2;

// Solver settings
/// Index of the dispatch centre every tour starts from
pub const DEFAULT_START_SITE: usize = 0;
/// Seconds before an exhaustive search gives up
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Routes evaluated between deadline checks
pub const TIMEOUT_CHECK_INTERVAL: u64 = 4096;
/// Routes evaluated between progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: u64 = 65_536;

// Report layout
/// Width of the `=` banner framing each report section
pub const BANNER_WIDTH: usize = 70;
