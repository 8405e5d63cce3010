use super::CliError;
use super::helpers::{
    PresetSelection, ProteinArg, append_protein_args, load_request_file, parse_protein_entry,
    resolve_protein_names,
};
use pci3_core::common::catalog::StaticCatalog;
use pci3_core::common::config::{all_presets, presets_for_names};
use pci3_core::common::constants::DEFAULT_BC2_REFERENCE_PMOL;
use pci3_core::domain::BarcodePosition;
use pci3_core::modules::serialization::{
    render_human_report, render_preset_table, render_stock_catalog, report_to_json,
    write_text_artifact,
};
use pci3_core::modules::{AssemblyRequest, evaluate_assembly};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(clap::Args)]
pub(super) struct CalcArgs {
    /// PCI3 units needed, in millions [default: 40]
    #[arg(long, allow_negative_numbers = true)]
    units: Option<f64>,

    /// Requested pmol for the fixed BC1 reference protein SA-BC [default: 2.4]
    #[arg(long = "sa-bc-pmol", allow_negative_numbers = true)]
    sa_bc_pmol: Option<f64>,

    /// Additional BC1 protein as NAME=PMOL (repeatable)
    #[arg(long = "bc1", value_name = "NAME=PMOL", value_parser = parse_protein_entry)]
    bc1: Vec<ProteinArg>,

    /// BC2 protein as NAME=PMOL; the first one is the BC2 reference and may be
    /// given as a bare NAME for 9.6 pmol (repeatable)
    #[arg(long = "bc2", value_name = "NAME[=PMOL]", value_parser = parse_protein_entry)]
    bc2: Vec<ProteinArg>,

    /// Chemistry presets to evaluate
    #[arg(long, value_enum, default_value_t = PresetSelection::All)]
    preset: PresetSelection,

    /// JSON request document; --units and --sa-bc-pmol override its values
    #[arg(long)]
    request: Option<PathBuf>,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,

    /// Write the report to this path instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl CalcArgs {
    fn into_request(self) -> Result<(AssemblyRequest, ReportTarget), CliError> {
        let mut request = match &self.request {
            Some(path) => {
                debug!(path = %path.display(), "loading request document");
                load_request_file(path)?
            }
            None => AssemblyRequest::default(),
        };

        if let Some(units) = self.units {
            request.units_needed = units;
        }
        if let Some(pmol) = self.sa_bc_pmol {
            request.bc1_reference_pmol = pmol;
        }
        append_protein_args(
            &mut request.bc1_additional,
            self.bc1,
            BarcodePosition::Bc1,
            None,
        )?;
        append_protein_args(
            &mut request.bc2,
            self.bc2,
            BarcodePosition::Bc2,
            Some(DEFAULT_BC2_REFERENCE_PMOL),
        )?;

        request.bc1_additional =
            resolve_protein_names(request.bc1_additional, BarcodePosition::Bc1)?;
        request.bc2 = resolve_protein_names(request.bc2, BarcodePosition::Bc2)?;
        request.validate()?;

        Ok((
            request,
            ReportTarget {
                preset: self.preset,
                json: self.json,
                output: self.output,
            },
        ))
    }
}

struct ReportTarget {
    preset: PresetSelection,
    json: bool,
    output: Option<PathBuf>,
}

pub(super) fn run_calc_command(args: CalcArgs) -> Result<i32, CliError> {
    let (request, target) = args.into_request()?;
    let presets = presets_for_names(target.preset.names());
    info!(
        units_needed = request.units_needed,
        bc1_proteins = request.bc1_additional.len() + 1,
        bc2_proteins = request.bc2.len(),
        presets = presets.len(),
        "evaluating PCI3 assembly"
    );

    let report = evaluate_assembly(&request, &presets, &StaticCatalog);
    let rendered = if target.json {
        report_to_json(&report)?
    } else {
        render_human_report(&report)
    };

    match target.output {
        Some(path) => {
            write_text_artifact(&path, &rendered)?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(0)
}

pub(super) fn run_presets_command() -> Result<i32, CliError> {
    print!("{}", render_preset_table(all_presets()));
    Ok(0)
}

pub(super) fn run_stocks_command() -> Result<i32, CliError> {
    print!("{}", render_stock_catalog());
    Ok(0)
}
