use super::CliError;
use anyhow::Context;
use pci3_core::common::catalog::canonical_protein_name;
use pci3_core::domain::{BarcodePosition, Pci3Error, PresetName, ProteinEntry};
use pci3_core::modules::AssemblyRequest;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum PresetSelection {
    Standard,
    Custom,
    All,
}

impl PresetSelection {
    pub(super) fn names(self) -> &'static [PresetName] {
        match self {
            Self::Standard => &[PresetName::Standard],
            Self::Custom => &[PresetName::Custom],
            Self::All => &PresetName::ALL,
        }
    }
}

/// A `--bc1`/`--bc2` value before defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ProteinArg {
    name: String,
    requested_pmol: Option<f64>,
}

impl ProteinArg {
    fn new(name: impl Into<String>, requested_pmol: Option<f64>) -> Self {
        Self {
            name: name.into(),
            requested_pmol,
        }
    }
}

/// Parses `NAME=PMOL` or a bare `NAME`. Names may contain spaces and dashes;
/// the amount is taken after the last `=`.
pub(super) fn parse_protein_entry(raw: &str) -> Result<ProteinArg, String> {
    let (name, pmol) = match raw.rsplit_once('=') {
        Some((name, pmol)) => (name, Some(pmol.trim())),
        None => (raw, None),
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing protein name in '{}'", raw));
    }
    let requested_pmol = pmol
        .map(|pmol| {
            pmol.parse::<f64>()
                .map_err(|_| format!("invalid pmol amount '{}' for '{}'", pmol, name))
        })
        .transpose()?;
    Ok(ProteinArg::new(name, requested_pmol))
}

/// Appends command-line proteins to `entries`. Only the first entry of the
/// position may omit its amount, and only when `reference_default` is set.
pub(super) fn append_protein_args(
    entries: &mut Vec<ProteinEntry>,
    args: Vec<ProteinArg>,
    position: BarcodePosition,
    reference_default: Option<f64>,
) -> Result<(), Pci3Error> {
    for arg in args {
        let default = reference_default.filter(|_| entries.is_empty());
        let requested_pmol = arg.requested_pmol.or(default).ok_or_else(|| {
            Pci3Error::input_validation(
                "INPUT.MISSING_PMOL",
                format!(
                    "protein '{}' on {} needs an amount; use NAME=PMOL",
                    arg.name, position
                ),
            )
        })?;
        entries.push(ProteinEntry::new(arg.name, requested_pmol));
    }
    Ok(())
}

pub(super) fn load_request_file(path: &Path) -> Result<AssemblyRequest, CliError> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read request file '{}'", path.display()))?;
    serde_json::from_str(&source).map_err(|error| {
        CliError::Compute(Pci3Error::input_validation(
            "INPUT.REQUEST_PARSE",
            format!(
                "failed to parse request file '{}': {}",
                path.display(),
                error
            ),
        ))
    })
}

/// Rewrites every entry to its catalog spelling. Selection is limited to the
/// proteins offered in the catalog groups.
pub(super) fn resolve_protein_names(
    entries: Vec<ProteinEntry>,
    position: BarcodePosition,
) -> Result<Vec<ProteinEntry>, Pci3Error> {
    entries
        .into_iter()
        .map(|entry| {
            let name = canonical_protein_name(&entry.name).ok_or_else(|| {
                Pci3Error::input_validation(
                    "INPUT.UNKNOWN_PROTEIN",
                    format!(
                        "protein '{}' on {} is not in the catalog; run `pci3-calc stocks` for the list",
                        entry.name, position
                    ),
                )
            })?;
            Ok(ProteinEntry::new(name, entry.requested_pmol))
        })
        .collect()
}
