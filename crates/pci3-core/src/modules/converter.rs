//! Stoichiometric conversion chain from a chemistry preset to reagent amounts
//! and stock volumes.

use crate::common::constants::{
    ANCHOR_EFFICIENCY, ANCHOR_RBC_YIELD, BB_RATIO, RBC_ANCHORED_PER_UNIT,
};
use crate::domain::{
    AnchoringChain, BatchRequirement, ChemistryPreset, PerUnitYield, VolumeEstimate,
};

pub fn anchoring_chain(preset: &ChemistryPreset) -> AnchoringChain {
    let anchoring_dope = preset.dpb_per_unit * RBC_ANCHORED_PER_UNIT;
    let post_anchor = anchoring_dope * ANCHOR_EFFICIENCY;
    let post_anchor_wash = post_anchor * ANCHOR_RBC_YIELD;
    let barcode_per_unit = post_anchor_wash / BB_RATIO;

    AnchoringChain {
        anchoring_dope,
        post_anchor,
        post_anchor_wash,
        barcode_per_unit,
    }
}

/// Both barcode positions share one backbone yield.
pub fn compute_per_unit_yield(preset: &ChemistryPreset) -> PerUnitYield {
    let chain = anchoring_chain(preset);

    PerUnitYield {
        dope_pmol: chain.anchoring_dope,
        barcode1_pmol: chain.barcode_per_unit,
        bc1_protein_pmol: chain.barcode_per_unit * preset.bc1_protein_ratio,
        barcode2_pmol: chain.barcode_per_unit,
        bc2_protein_pmol: chain.barcode_per_unit * preset.bc2_protein_ratio,
    }
}

/// Scales every amount by `units_needed`. Zero or negative counts are passed
/// through unchanged; the floor is enforced by the caller.
pub fn scale_to_batch(per_unit: &PerUnitYield, units_needed: f64) -> BatchRequirement {
    BatchRequirement {
        units_needed,
        dope_pmol: per_unit.dope_pmol * units_needed,
        barcode1_pmol: per_unit.barcode1_pmol * units_needed,
        bc1_protein_pmol: per_unit.bc1_protein_pmol * units_needed,
        barcode2_pmol: per_unit.barcode2_pmol * units_needed,
        bc2_protein_pmol: per_unit.bc2_protein_pmol * units_needed,
    }
}

/// Maps a requested pmol onto the model by proportion to the reference
/// protein of the same barcode position. A zero reference request yields 0.
pub fn scale_protein_to_reference(
    reference_computed_pmol: f64,
    reference_requested_pmol: f64,
    requested_pmol: f64,
) -> f64 {
    if reference_requested_pmol == 0.0 {
        return 0.0;
    }
    reference_computed_pmol * (requested_pmol / reference_requested_pmol)
}

pub fn pmol_to_volume(pmol: f64, stock_concentration_um: f64) -> VolumeEstimate {
    if stock_concentration_um > 0.0 {
        VolumeEstimate::Available {
            microliters: pmol / stock_concentration_um,
        }
    } else {
        VolumeEstimate::Unavailable
    }
}
