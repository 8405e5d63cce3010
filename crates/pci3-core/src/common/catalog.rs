//! Reagent reference data: protein stock concentrations and the protein
//! groups offered for selection on each barcode position.
//!
//! A concentration of `0.0` marks a protein whose stock is not characterised
//! yet; volume calculations report it as unavailable.

use crate::modules::StockLookup;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub name: &'static str,
    pub concentration_um: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProteinGroup {
    pub label: &'static str,
    pub proteins: &'static [&'static str],
}

pub const STOCK_TABLE: &[StockRecord] = &[
    StockRecord { name: "SA-BC", concentration_um: 1.0 },
    StockRecord { name: "Mono Streptavidin", concentration_um: 2.0 },
    StockRecord { name: "anti-CD3", concentration_um: 3.3 },
    StockRecord { name: "anti-CD28", concentration_um: 3.3 },
    StockRecord { name: "anti-CD137", concentration_um: 0.66 },
    StockRecord { name: "CD19 Antigen", concentration_um: 5.9 },
    StockRecord { name: "ctrl IgG1", concentration_um: 3.3 },
    StockRecord { name: "OX40L", concentration_um: 3.9 },
    StockRecord { name: "anti-CD8", concentration_um: 3.3 },
    StockRecord { name: "anti-CD4", concentration_um: 3.3 },
    StockRecord { name: "IL21", concentration_um: 1.0 },
    StockRecord { name: "IL-2", concentration_um: 1.0 },
    StockRecord { name: "anti-CD81", concentration_um: 3.3 },
    StockRecord { name: "anti-CD9", concentration_um: 3.3 },
    StockRecord { name: "anti-CD53", concentration_um: 3.3 },
    StockRecord { name: "anti CD80", concentration_um: 0.0 },
    StockRecord { name: "anti CD86", concentration_um: 0.0 },
    StockRecord { name: "CD27 Ligand", concentration_um: 0.0 },
    StockRecord { name: "ICOS Ligand", concentration_um: 0.0 },
];

pub const PROTEIN_GROUPS: &[ProteinGroup] = &[
    ProteinGroup {
        label: "Streptavidin",
        proteins: &["Mono Streptavidin", "SA-BC"],
    },
    ProteinGroup {
        label: "T-cell Antibodies",
        proteins: &["anti-CD3", "anti-CD28", "anti-CD137", "anti-CD8", "anti-CD4"],
    },
    ProteinGroup {
        label: "B-cell / Other Antibodies",
        proteins: &["CD19 Antigen", "ctrl IgG1", "anti-CD81", "anti-CD9", "anti-CD53"],
    },
    ProteinGroup {
        label: "Cytokines / Ligands",
        proteins: &[
            "IL21",
            "IL-2",
            "OX40L",
            "anti CD80",
            "anti CD86",
            "CD27 Ligand",
            "ICOS Ligand",
        ],
    },
];

/// The built-in reference tables as a [`StockLookup`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StockLookup for StaticCatalog {
    fn stock_concentration(&self, protein: &str) -> Option<f64> {
        stock_concentration(protein)
    }
}

pub fn stock_concentration(protein: &str) -> Option<f64> {
    STOCK_TABLE
        .iter()
        .find(|record| record.name == protein)
        .map(|record| record.concentration_um)
}

pub fn group_for_protein(protein: &str) -> Option<&'static ProteinGroup> {
    PROTEIN_GROUPS
        .iter()
        .find(|group| group.proteins.contains(&protein))
}

pub fn is_selectable_protein(protein: &str) -> bool {
    group_for_protein(protein).is_some()
}

/// Case-insensitive lookup returning the canonical spelling.
pub fn canonical_protein_name(protein: &str) -> Option<&'static str> {
    let normalized = protein.trim();
    if normalized.is_empty() {
        return None;
    }

    PROTEIN_GROUPS
        .iter()
        .flat_map(|group| group.proteins.iter().copied())
        .find(|candidate| candidate.eq_ignore_ascii_case(normalized))
}
