//! Section-level inventory and per-section difference statistics.

use std::collections::BTreeMap;

use config_diff_core::{ConfigTree, DiffRecord};
use serde::Serialize;

/// Top-level section names grouped by which inputs carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionInventory {
    pub common: Vec<String>,
    pub left_only: Vec<String>,
    pub right_only: Vec<String>,
}

/// Difference counts for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionStats {
    pub section: String,
    pub section_missing: usize,
    pub subsection_missing: usize,
    pub key_missing: usize,
    pub value_diff: usize,
}

/// Group section names by presence on each side, lexicographically.
pub fn build_inventory(left: &ConfigTree, right: &ConfigTree) -> SectionInventory {
    let mut common = Vec::new();
    let mut left_only = Vec::new();
    let mut right_only = Vec::new();

    for name in left.section_names() {
        if right.get_section(name).is_some() {
            common.push(name.to_string());
        } else {
            left_only.push(name.to_string());
        }
    }
    for name in right.section_names() {
        if left.get_section(name).is_none() {
            right_only.push(name.to_string());
        }
    }

    SectionInventory {
        common,
        left_only,
        right_only,
    }
}

/// Count diff records per section, sorted by section name.
pub fn summarize_by_section(records: &[DiffRecord]) -> Vec<SectionStats> {
    let mut stats: BTreeMap<&str, SectionStats> = BTreeMap::new();

    for record in records {
        let section = record_section(record);
        let row = stats.entry(section).or_insert_with(|| SectionStats {
            section: section.to_string(),
            section_missing: 0,
            subsection_missing: 0,
            key_missing: 0,
            value_diff: 0,
        });
        match record {
            DiffRecord::SectionMissing { .. } => row.section_missing += 1,
            DiffRecord::SubsectionMissing { .. } => row.subsection_missing += 1,
            DiffRecord::KeyMissing { .. } => row.key_missing += 1,
            DiffRecord::ValueDiff { .. } => row.value_diff += 1,
        }
    }

    stats.into_values().collect()
}

fn record_section(record: &DiffRecord) -> &str {
    match record {
        DiffRecord::SectionMissing { section, .. }
        | DiffRecord::SubsectionMissing { section, .. }
        | DiffRecord::KeyMissing { section, .. }
        | DiffRecord::ValueDiff { section, .. } => section,
    }
}
