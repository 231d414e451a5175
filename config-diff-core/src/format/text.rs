use crate::diff::result::{DiffRecord, Side};

/// The full report text when no records were produced.
pub const NO_DIFFERENCES: &str = "No differences found between the configurations.";

/// Display identifiers for the two inputs, typically derived from filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideLabels {
    pub left: String,
    pub right: String,
}

impl SideLabels {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    fn name(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl Default for SideLabels {
    fn default() -> Self {
        Self::new("config1", "config2")
    }
}

/// Format diff records as plain text, one line per record.
pub fn format_text(records: &[DiffRecord], labels: &SideLabels) -> String {
    if records.is_empty() {
        return NO_DIFFERENCES.to_string();
    }

    records
        .iter()
        .map(|record| format_record(record, labels))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a simple summary of record counts.
pub fn format_summary(records: &[DiffRecord]) -> String {
    let mut section_missing = 0;
    let mut subsection_missing = 0;
    let mut key_missing = 0;
    let mut value_diff = 0;

    for record in records {
        match record {
            DiffRecord::SectionMissing { .. } => section_missing += 1,
            DiffRecord::SubsectionMissing { .. } => subsection_missing += 1,
            DiffRecord::KeyMissing { .. } => key_missing += 1,
            DiffRecord::ValueDiff { .. } => value_diff += 1,
        }
    }

    format!(
        "section_missing={section_missing} subsection_missing={subsection_missing} key_missing={key_missing} value_diff={value_diff}"
    )
}

fn format_record(record: &DiffRecord, labels: &SideLabels) -> String {
    match record {
        DiffRecord::SectionMissing { side, section } => {
            let here = labels.name(*side);
            let there = labels.name(side.other());
            format!(
                "[Section Missing in {here}]  Section: '{section}' is in {there} but not in {here}"
            )
        }
        DiffRecord::SubsectionMissing {
            side,
            section,
            subsection,
        } => {
            let here = labels.name(*side);
            let there = labels.name(side.other());
            format!(
                "[Subsection Missing in {here}]  Subsection: '{subsection}' in section '{section}' is in {there} but not in {here}"
            )
        }
        DiffRecord::KeyMissing {
            side,
            section,
            subsection,
            key,
        } => {
            let here = labels.name(*side);
            let there = labels.name(side.other());
            match subsection {
                Some(subsection) => format!(
                    "[Key Missing in {here}]  Key: '{key}' in subsection '{subsection}' of section '{section}' is in {there} but not in {here}"
                ),
                None => format!(
                    "[Key Missing in {here}]  Key: '{key}' in section '{section}' is in {there} but not in {here}"
                ),
            }
        }
        DiffRecord::ValueDiff {
            section,
            subsection,
            key,
            left,
            right,
        } => match subsection {
            Some(subsection) => format!(
                "[Value Difference]  Section: '{section}'  Subsection: '{subsection}'  Key: '{key}'  {}: '{left}'  {}: '{right}'",
                labels.left, labels.right
            ),
            None => format!(
                "[Value Difference]  Section: '{section}'  Key: '{key}'  {}: '{left}'  {}: '{right}'",
                labels.left, labels.right
            ),
        },
    }
}
