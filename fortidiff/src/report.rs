use colored::Colorize;
use config_diff_core::{format_summary, format_text, DiffRecord, SideLabels};

use crate::sections_report::{SectionInventory, SectionStats};

/// Render diff records for terminal output.
///
/// Lines naming a gap on the left side are red, on the right side green,
/// value differences yellow.
pub fn render_records(records: &[DiffRecord], labels: &SideLabels) -> String {
    let left_marker = format!("Missing in {}]", labels.left);
    let right_marker = format!("Missing in {}]", labels.right);

    format_text(records, labels)
        .lines()
        .map(|line| {
            if line.starts_with("[Value Difference]") {
                line.yellow().to_string()
            } else if line.contains(&left_marker) {
                line.red().to_string()
            } else if line.contains(&right_marker) {
                line.green().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render summary counts for terminal output.
pub fn render_summary(records: &[DiffRecord]) -> String {
    format_summary(records).cyan().to_string()
}

/// Render the section inventory and per-section stats.
pub fn render_inventory(inventory: &SectionInventory, stats: &[SectionStats]) -> String {
    let mut out = Vec::new();
    out.push("common".to_string());
    append_list(&mut out, &inventory.common);
    out.push(String::new());
    out.push("left_only".to_string());
    append_list(&mut out, &inventory.left_only);
    out.push(String::new());
    out.push("right_only".to_string());
    append_list(&mut out, &inventory.right_only);
    out.push(String::new());
    out.push("section_summary".to_string());
    if stats.is_empty() {
        out.push("- none".to_string());
    } else {
        for row in stats {
            out.push(format!(
                "- {}: section_missing={} subsection_missing={} key_missing={} value_diff={}",
                row.section,
                row.section_missing,
                row.subsection_missing,
                row.key_missing,
                row.value_diff
            ));
        }
    }
    out.join("\n")
}

fn append_list(out: &mut Vec<String>, items: &[String]) {
    if items.is_empty() {
        out.push("- none".to_string());
        return;
    }
    for item in items {
        out.push(format!("- {item}"));
    }
}
