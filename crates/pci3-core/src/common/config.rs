//! Chemistry preset table keyed by preset name.

use crate::domain::{ChemistryPreset, PresetName};

pub const PRESET_COUNT: usize = 2;

pub const PRESETS: [ChemistryPreset; PRESET_COUNT] = [
    ChemistryPreset {
        name: PresetName::Standard,
        dpb_per_unit: 4.0,
        bc1_protein_ratio: 4.0,
        bc2_protein_ratio: 4.0,
    },
    ChemistryPreset {
        name: PresetName::Custom,
        dpb_per_unit: 16.0,
        bc1_protein_ratio: 2.0,
        bc2_protein_ratio: 4.0,
    },
];

pub fn preset_for_name(name: PresetName) -> ChemistryPreset {
    match name {
        PresetName::Standard => PRESETS[0],
        PresetName::Custom => PRESETS[1],
    }
}

pub fn all_presets() -> &'static [ChemistryPreset; PRESET_COUNT] {
    &PRESETS
}

pub fn presets_for_names(names: &[PresetName]) -> Vec<ChemistryPreset> {
    names.iter().copied().map(preset_for_name).collect()
}
