//! Fixed stoichiometric constants of the PCI3 anchoring chain and the
//! operator-facing defaults of the assembly form.

/// Red blood cell stock density in million cells per mL. Reference data
/// only; no report value is derived from it.
pub const RBC_STOCK_M_PER_ML: f64 = 50.0;
/// Anchored red blood cells per construct unit (millions).
pub const RBC_ANCHORED_PER_UNIT: f64 = 4.0;
pub const ANCHOR_EFFICIENCY: f64 = 0.50;
pub const ANCHOR_RBC_YIELD: f64 = 0.60;
/// DOPE-to-barcode backbone ratio.
pub const BB_RATIO: f64 = 2.0;

pub const MIN_UNITS_NEEDED: f64 = 1.0;
pub const DEFAULT_UNITS_NEEDED: f64 = 40.0;

/// BC1 always carries this protein and it anchors BC1 scaling.
pub const BC1_REFERENCE_PROTEIN: &str = "SA-BC";
pub const DEFAULT_BC1_REFERENCE_PMOL: f64 = 2.4;
/// Amount given to the first BC2 protein when the operator names it without one.
pub const DEFAULT_BC2_REFERENCE_PMOL: f64 = 9.6;
