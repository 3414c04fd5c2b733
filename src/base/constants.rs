/// Defines the directory where the generated grid files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/pmgrid/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/pmgrid/test";

/// Category holding the geological layers (conductivity, porosity, ...)
pub const GEO_PARAMETERS: &str = "geo_parameters";

/// Category holding the recharge zones
pub const RECHARGE_PARAMETERS: &str = "recharge_parameters";

/// Category holding the constant-head and inactive zones
pub const IBOUND_PARAMETERS: &str = "ibound_parameters";

/// Category holding the well screens
pub const WELL_PARAMETERS: &str = "well_parameters";

/// Horizontal hydraulic conductivity
pub const HK: &str = "hk";

/// Vertical anisotropy ratio (horizontal over vertical conductivity)
pub const VANI: &str = "vani";

/// Effective porosity
pub const POROSITY: &str = "porosity";

/// Specific storage
pub const STORAGE: &str = "storage";

/// Recharge rate
pub const RECHARGE: &str = "recharge";

/// Prescribed (constant or starting) head
pub const HEAD: &str = "head";

/// Explicit ibound flag of a boundary zone
pub const IBOUND: &str = "ibound";

/// Flag marking a zone as unsaturated (excluded from the flow model)
pub const VADOSE: &str = "vadose";

/// Default well discharge attribute
pub const DISCHARGE: &str = "Q";

/// ibound flag of an active cell with variable head
pub const IBOUND_ACTIVE: i32 = 1;

/// ibound flag of an inactive cell
pub const IBOUND_INACTIVE: i32 = 0;

/// ibound flag of a constant-head cell
pub const IBOUND_CONSTANT_HEAD: i32 = -1;

/// Default specific storage applied where no zone overrides it
pub const DEFAULT_STORAGE: f64 = 1e-5;

/// Default vertical anisotropy ratio
pub const DEFAULT_VANI: f64 = 1.0;

/// Rounding of radial and transverse boundaries (mm scale)
pub const DECIMALS_HORIZONTAL: i32 = 3;

/// Rounding of vertical boundaries (cm scale)
pub const DECIMALS_VERTICAL: i32 = 2;

/// Maximum number of cells a single zone may contribute along one axis
pub const MAX_CELLS_PER_ZONE: usize = 100_000;

/// Tolerance used when comparing cell centers against zone bounds
pub const BOUND_TOLERANCE: f64 = 1e-9;
