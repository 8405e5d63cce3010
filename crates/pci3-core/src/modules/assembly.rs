use super::StockLookup;
use super::converter::{
    compute_per_unit_yield, pmol_to_volume, scale_protein_to_reference, scale_to_batch,
};
use crate::common::constants::{
    BC1_REFERENCE_PROTEIN, DEFAULT_BC1_REFERENCE_PMOL, DEFAULT_UNITS_NEEDED, MIN_UNITS_NEEDED,
};
use crate::domain::{
    BarcodePosition, BatchRequirement, ChemistryPreset, PerUnitYield, Pci3Error, Pci3Result,
    PresetName, ProteinEntry, VolumeEstimate,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One evaluation's inputs. BC1 always starts with the fixed SA-BC reference;
/// BC2 is included only when it has entries, the first being its reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssemblyRequest {
    pub units_needed: f64,
    pub bc1_reference_pmol: f64,
    pub bc1_additional: Vec<ProteinEntry>,
    pub bc2: Vec<ProteinEntry>,
}

impl Default for AssemblyRequest {
    fn default() -> Self {
        Self {
            units_needed: DEFAULT_UNITS_NEEDED,
            bc1_reference_pmol: DEFAULT_BC1_REFERENCE_PMOL,
            bc1_additional: Vec::new(),
            bc2: Vec::new(),
        }
    }
}

impl AssemblyRequest {
    pub fn bc1_entries(&self) -> Vec<ProteinEntry> {
        std::iter::once(ProteinEntry::new(
            BC1_REFERENCE_PROTEIN,
            self.bc1_reference_pmol,
        ))
        .chain(self.bc1_additional.iter().cloned())
        .collect()
    }

    pub fn bc2_entries(&self) -> &[ProteinEntry] {
        &self.bc2
    }

    pub fn includes_bc2(&self) -> bool {
        !self.bc2.is_empty()
    }

    pub fn entries_for(&self, position: BarcodePosition) -> Vec<ProteinEntry> {
        match position {
            BarcodePosition::Bc1 => self.bc1_entries(),
            BarcodePosition::Bc2 => self.bc2.clone(),
        }
    }

    /// Operator-facing checks. The converter itself accepts any value.
    pub fn validate(&self) -> Pci3Result<()> {
        if !self.units_needed.is_finite() || self.units_needed < MIN_UNITS_NEEDED {
            return Err(Pci3Error::input_validation(
                "INPUT.UNITS_NEEDED",
                format!(
                    "units needed must be a finite value of at least {}, got {}",
                    MIN_UNITS_NEEDED, self.units_needed
                ),
            ));
        }

        for position in [BarcodePosition::Bc1, BarcodePosition::Bc2] {
            for entry in self.entries_for(position) {
                if entry.name.trim().is_empty() {
                    return Err(Pci3Error::input_validation(
                        "INPUT.PROTEIN_NAME",
                        format!("{} protein entry has an empty name", position),
                    ));
                }
                if !entry.requested_pmol.is_finite() || entry.requested_pmol < 0.0 {
                    return Err(Pci3Error::input_validation(
                        "INPUT.NEGATIVE_PMOL",
                        format!(
                            "requested pmol for '{}' on {} must be non-negative, got {}",
                            entry.name, position, entry.requested_pmol
                        ),
                    ));
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinLine {
    pub name: String,
    pub position: BarcodePosition,
    pub requested_pmol: f64,
    pub computed_pmol: f64,
    pub stock_concentration_um: Option<f64>,
    pub computed_volume: VolumeEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetReport {
    pub preset: ChemistryPreset,
    pub per_unit: PerUnitYield,
    pub batch: BatchRequirement,
    pub bc1: Vec<ProteinLine>,
    pub bc2: Vec<ProteinLine>,
}

impl PresetReport {
    pub fn name(&self) -> PresetName {
        self.preset.name
    }
}

/// Stock volume for a protein at its requested amount, independent of preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockVolumeLine {
    pub name: String,
    pub position: BarcodePosition,
    pub requested_pmol: f64,
    pub stock_concentration_um: Option<f64>,
    pub per_unit: VolumeEstimate,
    pub total: VolumeEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyReport {
    pub units_needed: f64,
    pub include_bc2: bool,
    pub presets: Vec<PresetReport>,
    pub stock_volumes: Vec<StockVolumeLine>,
}

impl AssemblyReport {
    pub fn preset(&self, name: PresetName) -> Option<&PresetReport> {
        self.presets.iter().find(|report| report.name() == name)
    }

    pub fn stock_volumes_for(
        &self,
        position: BarcodePosition,
    ) -> impl Iterator<Item = &StockVolumeLine> {
        self.stock_volumes
            .iter()
            .filter(move |line| line.position == position)
    }
}

pub fn evaluate_assembly<S>(
    request: &AssemblyRequest,
    presets: &[ChemistryPreset],
    stocks: &S,
) -> AssemblyReport
where
    S: StockLookup + ?Sized,
{
    let bc1_entries = request.bc1_entries();
    let bc2_entries = request.bc2_entries();

    let presets = presets
        .iter()
        .map(|preset| {
            let per_unit = compute_per_unit_yield(preset);
            let batch = scale_to_batch(&per_unit, request.units_needed);
            debug!(
                preset = %preset.name,
                units_needed = request.units_needed,
                dope_pmol = batch.dope_pmol,
                barcode_pmol = batch.barcode1_pmol,
                "evaluated batch requirement"
            );

            PresetReport {
                preset: *preset,
                per_unit,
                batch,
                bc1: protein_lines(BarcodePosition::Bc1, &bc1_entries, &batch, stocks),
                bc2: protein_lines(BarcodePosition::Bc2, bc2_entries, &batch, stocks),
            }
        })
        .collect();

    let stock_volumes = bc1_entries
        .iter()
        .map(|entry| (BarcodePosition::Bc1, entry))
        .chain(bc2_entries.iter().map(|entry| (BarcodePosition::Bc2, entry)))
        .map(|(position, entry)| stock_volume_line(position, entry, request.units_needed, stocks))
        .collect();

    AssemblyReport {
        units_needed: request.units_needed,
        include_bc2: request.includes_bc2(),
        presets,
        stock_volumes,
    }
}

fn protein_lines<S>(
    position: BarcodePosition,
    entries: &[ProteinEntry],
    batch: &BatchRequirement,
    stocks: &S,
) -> Vec<ProteinLine>
where
    S: StockLookup + ?Sized,
{
    let Some(reference) = entries.first() else {
        return Vec::new();
    };
    let reference_computed = batch.protein_pmol(position);

    entries
        .iter()
        .map(|entry| {
            let computed_pmol = scale_protein_to_reference(
                reference_computed,
                reference.requested_pmol,
                entry.requested_pmol,
            );
            let stock = stocks.stock_concentration(&entry.name);
            let computed_volume = volume_for_stock(computed_pmol, stock);
            if !computed_volume.is_available() {
                debug!(protein = %entry.name, %position, "stock concentration not defined");
            }

            ProteinLine {
                name: entry.name.clone(),
                position,
                requested_pmol: entry.requested_pmol,
                computed_pmol,
                stock_concentration_um: stock,
                computed_volume,
            }
        })
        .collect()
}

fn stock_volume_line<S>(
    position: BarcodePosition,
    entry: &ProteinEntry,
    units_needed: f64,
    stocks: &S,
) -> StockVolumeLine
where
    S: StockLookup + ?Sized,
{
    let stock = stocks.stock_concentration(&entry.name);
    let per_unit = volume_for_stock(entry.requested_pmol, stock);

    StockVolumeLine {
        name: entry.name.clone(),
        position,
        requested_pmol: entry.requested_pmol,
        stock_concentration_um: stock,
        per_unit,
        total: per_unit.scaled(units_needed),
    }
}

fn volume_for_stock(pmol: f64, stock: Option<f64>) -> VolumeEstimate {
    stock.map_or(VolumeEstimate::Unavailable, |concentration| {
        pmol_to_volume(pmol, concentration)
    })
}
