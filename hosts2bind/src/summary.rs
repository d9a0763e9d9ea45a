use serde::Serialize;

use crate::aggregate::HostTables;

/// Counts of what a conversion produced, for the final report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub reverse_zones: usize,
    pub forward_zones: usize,
    pub ptr_records: usize,
    pub a_records: usize,
}

pub fn summarize(tables: &HostTables) -> ConversionSummary {
    ConversionSummary {
        reverse_zones: tables.reverse.len(),
        forward_zones: tables.forward.len(),
        ptr_records: tables.reverse.values().map(|zone| zone.len()).sum(),
        a_records: tables.forward.values().map(|zone| zone.len()).sum(),
    }
}

pub fn render(summary: ConversionSummary) -> String {
    format!(
        "convert_summary reverse_zones={} forward_zones={} ptr_records={} a_records={}",
        summary.reverse_zones, summary.forward_zones, summary.ptr_records, summary.a_records
    )
}
