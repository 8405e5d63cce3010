use super::assembly::{AssemblyReport, PresetReport, ProteinLine, StockVolumeLine};
use crate::common::catalog::{PROTEIN_GROUPS, stock_concentration};
use crate::common::constants::{
    ANCHOR_EFFICIENCY, ANCHOR_RBC_YIELD, BB_RATIO, RBC_ANCHORED_PER_UNIT,
};
use crate::domain::{BarcodePosition, ChemistryPreset, Pci3Error, Pci3Result, VolumeEstimate};
use std::fs;
use std::path::Path;

const SECTION_RULE: &str = "----------------------------------------";

pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Stock concentrations keep their shortest round-trip form with at least one
/// decimal place (`1.0`, `0.66`), as on the bench sheet.
pub fn format_concentration(value: f64) -> String {
    format!("{value:?}")
}

/// Human-readable report in the order an operator pipettes: batch amounts
/// per preset, then stock volumes.
pub fn render_human_report(report: &AssemblyReport) -> String {
    let mut lines = Vec::new();
    lines.push("PCI3 Assembly Calculator".to_string());
    lines.push(format!(
        "PCI3 needed: {} million",
        format_amount(report.units_needed)
    ));

    for preset in &report.presets {
        render_preset_section(&mut lines, preset);
    }

    lines.push(SECTION_RULE.to_string());
    lines.push("Stock Volumes for Proteins (µL)".to_string());
    render_stock_volume_block(&mut lines, report, BarcodePosition::Bc1);
    if report.include_bc2 {
        render_stock_volume_block(&mut lines, report, BarcodePosition::Bc2);
    }

    join_lines(lines)
}

fn render_preset_section(lines: &mut Vec<String>, preset: &PresetReport) {
    lines.push(SECTION_RULE.to_string());
    lines.push(preset.name().heading().to_string());
    lines.push(format!(
        "DOPE pmol: {} pmol",
        format_amount(preset.batch.dope_pmol)
    ));
    lines.push(format!(
        "Barcode1 pmol: {} pmol",
        format_amount(preset.batch.barcode1_pmol)
    ));
    lines.push(format!(
        "Barcode2 pmol: {} pmol",
        format_amount(preset.batch.barcode2_pmol)
    ));

    render_protein_block(lines, BarcodePosition::Bc1, &preset.bc1);
    if !preset.bc2.is_empty() {
        render_protein_block(lines, BarcodePosition::Bc2, &preset.bc2);
    }
}

fn render_protein_block(
    lines: &mut Vec<String>,
    position: BarcodePosition,
    proteins: &[ProteinLine],
) {
    lines.push(format!("{position} Protein Calculations"));
    for protein in proteins {
        let volume = match protein.computed_volume {
            VolumeEstimate::Available { microliters } => {
                format!("{} µL stock", format_amount(microliters))
            }
            VolumeEstimate::Unavailable => "stock volume unavailable".to_string(),
        };
        lines.push(format!(
            "  {}: {} pmol (calculated from required {}) -> {}",
            protein.name,
            format_amount(protein.computed_pmol),
            format_amount(protein.requested_pmol),
            volume
        ));
    }
}

fn render_stock_volume_block(
    lines: &mut Vec<String>,
    report: &AssemblyReport,
    position: BarcodePosition,
) {
    lines.push(position.to_string());
    lines.extend(
        report
            .stock_volumes_for(position)
            .map(|line| format!("  {}", stock_volume_text(line))),
    );
}

pub fn stock_volume_text(line: &StockVolumeLine) -> String {
    match (line.stock_concentration_um, line.per_unit, line.total) {
        (
            Some(stock),
            VolumeEstimate::Available { microliters },
            VolumeEstimate::Available {
                microliters: total,
            },
        ) => format!(
            "{} (stock {} µM): Vol/unit {} µL | Total {} µL",
            line.name,
            format_concentration(stock),
            format_amount(microliters),
            format_amount(total)
        ),
        _ => format!(
            "{}: stock conc not defined, volume cannot be calculated",
            line.name
        ),
    }
}

pub fn render_preset_table(presets: &[ChemistryPreset]) -> String {
    let mut lines = Vec::with_capacity(presets.len() + 2);
    lines.push(format!(
        "Chain constants: RBC anchored/unit {}, anchor efficiency {}, anchor RBC yield {}, DOPE:barcode ratio {}",
        RBC_ANCHORED_PER_UNIT, ANCHOR_EFFICIENCY, ANCHOR_RBC_YIELD, BB_RATIO
    ));
    lines.push(format!(
        "{:<10} {:>8} {:>10} {:>10}",
        "preset", "dpb/unit", "BC1 ratio", "BC2 ratio"
    ));
    for preset in presets {
        lines.push(format!(
            "{:<10} {:>8} {:>10} {:>10}",
            preset.name.as_str(),
            preset.dpb_per_unit,
            preset.bc1_protein_ratio,
            preset.bc2_protein_ratio
        ));
    }
    join_lines(lines)
}

pub fn render_stock_catalog() -> String {
    let mut lines = Vec::new();
    for group in PROTEIN_GROUPS {
        lines.push(group.label.to_string());
        for protein in group.proteins {
            lines.push(match stock_concentration(protein) {
                Some(stock) if stock > 0.0 => {
                    format!("  {protein}: {} µM", format_concentration(stock))
                }
                _ => format!("  {protein}: stock conc not defined"),
            });
        }
    }
    join_lines(lines)
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn report_to_json(report: &AssemblyReport) -> Pci3Result<String> {
    serde_json::to_string_pretty(report).map_err(|source| {
        Pci3Error::internal(
            "SYS.REPORT_SERIALIZE",
            format!("failed to serialize assembly report: {}", source),
        )
    })
}

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

pub fn write_text_artifact(path: &Path, content: &str) -> Pci3Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| {
            Pci3Error::io_system(
                "IO.REPORT_DIRECTORY",
                format!(
                    "failed to create report directory '{}': {}",
                    parent.display(),
                    source
                ),
            )
        })?;
    }

    fs::write(path, normalize_text_artifact(content)).map_err(|source| {
        Pci3Error::io_system(
            "IO.REPORT_WRITE",
            format!("failed to write report '{}': {}", path.display(), source),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{
        format_amount, format_concentration, normalize_text_artifact, render_human_report,
        render_preset_table, render_stock_catalog, report_to_json, stock_volume_text,
        write_text_artifact,
    };
    use crate::common::catalog::StaticCatalog;
    use crate::common::config::all_presets;
    use crate::domain::ProteinEntry;
    use crate::modules::assembly::{AssemblyRequest, evaluate_assembly};
    use std::fs;
    use tempfile::TempDir;

    fn sample_report() -> crate::modules::AssemblyReport {
        let request = AssemblyRequest {
            bc2: vec![
                ProteinEntry::new("anti-CD28", 9.6),
                ProteinEntry::new("ICOS Ligand", 1.0),
            ],
            ..AssemblyRequest::default()
        };
        evaluate_assembly(&request, all_presets(), &StaticCatalog)
    }

    #[test]
    fn amounts_render_with_two_decimals() {
        assert_eq!(format_amount(640.0), "640.00");
        assert_eq!(format_amount(2.0 / 3.0), "0.67");
    }

    #[test]
    fn concentrations_keep_one_decimal_place_at_least() {
        assert_eq!(format_concentration(1.0), "1.0");
        assert_eq!(format_concentration(0.66), "0.66");
        assert_eq!(format_concentration(3.3), "3.3");
        assert_eq!(format_concentration(2.0), "2.0");
    }

    #[test]
    fn report_header_states_only_the_units_needed() {
        let report = evaluate_assembly(&AssemblyRequest::default(), all_presets(), &StaticCatalog);
        let rendered = render_human_report(&report);
        let mut lines = rendered.lines();

        assert_eq!(lines.next(), Some("PCI3 Assembly Calculator"));
        assert_eq!(lines.next(), Some("PCI3 needed: 40.00 million"));
        assert!(!rendered.contains("RBC stock"));
        assert!(rendered.ends_with("Total 96.00 µL\n"));
    }

    #[test]
    fn human_report_lists_presets_and_stock_volumes() {
        let rendered = render_human_report(&sample_report());

        assert!(rendered.contains("STANDARD\nDOPE pmol: 640.00 pmol"));
        assert!(rendered.contains("CUSTOM\nDOPE pmol: 2560.00 pmol"));
        assert!(rendered.contains("Barcode1 pmol: 96.00 pmol"));
        assert!(rendered.contains("  SA-BC: 384.00 pmol (calculated from required 2.40)"));
        assert!(rendered.contains("SA-BC (stock 1.0 µM): Vol/unit 2.40 µL | Total 96.00 µL"));
        assert!(rendered.contains("ICOS Ligand: stock conc not defined, volume cannot be calculated"));
        assert!(rendered.contains(
            "  ICOS Ligand: 40.00 pmol (calculated from required 1.00) -> stock volume unavailable"
        ));
        assert!(rendered.contains(
            "  SA-BC: 384.00 pmol (calculated from required 2.40) -> 384.00 µL stock"
        ));
    }

    #[test]
    fn bc2_sections_are_skipped_without_bc2_entries() {
        let report = evaluate_assembly(&AssemblyRequest::default(), all_presets(), &StaticCatalog);
        let rendered = render_human_report(&report);
        assert!(!rendered.contains("BC2 Protein Calculations"));
        assert!(!rendered.contains("\nBC2\n"));
    }

    #[test]
    fn stock_volume_text_matches_bench_sheet_format() {
        let report = sample_report();
        assert_eq!(
            stock_volume_text(&report.stock_volumes[0]),
            "SA-BC (stock 1.0 µM): Vol/unit 2.40 µL | Total 96.00 µL"
        );
    }

    #[test]
    fn json_report_tags_volume_status() {
        let json = report_to_json(&sample_report()).expect("report should serialize");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("json should parse");

        assert_eq!(parsed["unitsNeeded"], 40.0);
        assert!(parsed.get("rbcStockVolumeMl").is_none());
        assert_eq!(parsed["presets"][0]["preset"]["name"], "standard");
        assert_eq!(parsed["presets"][1]["preset"]["name"], "custom");
        assert_eq!(parsed["stockVolumes"][0]["perUnit"]["status"], "available");
        assert_eq!(parsed["stockVolumes"][2]["perUnit"]["status"], "unavailable");
        assert_eq!(parsed["stockVolumes"][2]["position"], "BC2");
    }

    #[test]
    fn preset_table_and_catalog_render_every_row() {
        let table = render_preset_table(all_presets());
        assert!(table.contains("standard"));
        assert!(table.contains("custom"));

        let catalog = render_stock_catalog();
        assert!(catalog.contains("T-cell Antibodies\n"));
        assert!(catalog.contains("  anti-CD137: 0.66 µM"));
        assert!(catalog.contains("  SA-BC: 1.0 µM"));
        assert!(catalog.contains("  anti CD80: stock conc not defined"));
        assert!(catalog.ends_with("stock conc not defined\n"));
    }

    #[test]
    fn normalize_text_artifact_uses_canonical_line_endings() {
        let normalized = normalize_text_artifact("alpha\r\nbeta\rgamma");
        assert_eq!(normalized, "alpha\nbeta\ngamma\n");
    }

    #[test]
    fn repeated_report_writes_produce_identical_bytes() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("reports/assembly.txt");
        let rendered = render_human_report(&sample_report());

        write_text_artifact(&path, &rendered).expect("first write should succeed");
        let first = fs::read(&path).expect("report should be readable");
        write_text_artifact(&path, &rendered).expect("second write should succeed");
        let second = fs::read(&path).expect("report should be readable");

        assert_eq!(first, second);
    }
}
