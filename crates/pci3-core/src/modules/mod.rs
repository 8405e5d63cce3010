pub mod assembly;
pub mod converter;
pub mod serialization;

mod traits;

pub use assembly::{
    AssemblyReport, AssemblyRequest, PresetReport, ProteinLine, StockVolumeLine,
    evaluate_assembly,
};
pub use converter::{
    anchoring_chain, compute_per_unit_yield, pmol_to_volume, scale_protein_to_reference,
    scale_to_batch,
};
pub use traits::StockLookup;
