pub mod errors;

pub use errors::{Pci3Error, Pci3ErrorCategory, Pci3Result};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetName {
    Standard,
    Custom,
}

impl PresetName {
    pub const ALL: [PresetName; 2] = [PresetName::Standard, PresetName::Custom];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Custom => "custom",
        }
    }

    pub const fn heading(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Custom => "CUSTOM",
        }
    }
}

impl Display for PresetName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for PresetName {
    type Err = Pci3Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| {
                Pci3Error::input_validation(
                    "INPUT.UNKNOWN_PRESET",
                    format!("unknown chemistry preset '{}'; expected 'standard' or 'custom'", value),
                )
            })
    }
}

/// A chemistry variant: DOPE-per-barcode loading and the protein-to-barcode
/// ratio on each barcode position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemistryPreset {
    pub name: PresetName,
    pub dpb_per_unit: f64,
    pub bc1_protein_ratio: f64,
    pub bc2_protein_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarcodePosition {
    #[serde(rename = "BC1")]
    Bc1,
    #[serde(rename = "BC2")]
    Bc2,
}

impl BarcodePosition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bc1 => "BC1",
            Self::Bc2 => "BC2",
        }
    }
}

impl Display for BarcodePosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Intermediate stages of the anchoring chain for one construct unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchoringChain {
    pub anchoring_dope: f64,
    pub post_anchor: f64,
    pub post_anchor_wash: f64,
    pub barcode_per_unit: f64,
}

/// Reagent amounts (pmol) needed for one construct unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerUnitYield {
    pub dope_pmol: f64,
    pub barcode1_pmol: f64,
    pub bc1_protein_pmol: f64,
    pub barcode2_pmol: f64,
    pub bc2_protein_pmol: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequirement {
    pub units_needed: f64,
    pub dope_pmol: f64,
    pub barcode1_pmol: f64,
    pub bc1_protein_pmol: f64,
    pub barcode2_pmol: f64,
    pub bc2_protein_pmol: f64,
}

impl BatchRequirement {
    pub const fn protein_pmol(&self, position: BarcodePosition) -> f64 {
        match position {
            BarcodePosition::Bc1 => self.bc1_protein_pmol,
            BarcodePosition::Bc2 => self.bc2_protein_pmol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinEntry {
    pub name: String,
    pub requested_pmol: f64,
}

impl ProteinEntry {
    pub fn new(name: impl Into<String>, requested_pmol: f64) -> Self {
        Self {
            name: name.into(),
            requested_pmol,
        }
    }
}

/// Dispensing volume, or the explicit "cannot calculate" state when the stock
/// concentration is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum VolumeEstimate {
    Available { microliters: f64 },
    Unavailable,
}

impl VolumeEstimate {
    pub const fn microliters(&self) -> Option<f64> {
        match self {
            Self::Available { microliters } => Some(*microliters),
            Self::Unavailable => None,
        }
    }

    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    pub fn scaled(self, factor: f64) -> Self {
        match self {
            Self::Available { microliters } => Self::Available {
                microliters: microliters * factor,
            },
            Self::Unavailable => Self::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BarcodePosition, PresetName, VolumeEstimate};

    #[test]
    fn preset_names_parse_case_insensitively() {
        assert_eq!("standard".parse::<PresetName>(), Ok(PresetName::Standard));
        assert_eq!(" Custom ".parse::<PresetName>(), Ok(PresetName::Custom));

        let error = "deluxe"
            .parse::<PresetName>()
            .expect_err("unknown preset should be rejected");
        assert_eq!(error.placeholder(), "INPUT.UNKNOWN_PRESET");
    }

    #[test]
    fn unavailable_volume_stays_unavailable_when_scaled() {
        assert_eq!(
            VolumeEstimate::Unavailable.scaled(40.0),
            VolumeEstimate::Unavailable
        );
        let scaled = VolumeEstimate::Available { microliters: 2.5 }.scaled(4.0);
        assert_eq!(scaled.microliters(), Some(10.0));
        assert!(scaled.is_available());
    }

    #[test]
    fn volume_estimate_serializes_with_status_tag() {
        let available = serde_json::to_value(VolumeEstimate::Available { microliters: 1.5 })
            .expect("volume should serialize");
        assert_eq!(available["status"], "available");
        assert_eq!(available["microliters"], 1.5);

        let unavailable =
            serde_json::to_value(VolumeEstimate::Unavailable).expect("volume should serialize");
        assert_eq!(unavailable["status"], "unavailable");
        assert!(unavailable.get("microliters").is_none());
    }

    #[test]
    fn barcode_positions_render_as_labels() {
        assert_eq!(BarcodePosition::Bc1.to_string(), "BC1");
        assert_eq!(BarcodePosition::Bc2.to_string(), "BC2");
    }
}
