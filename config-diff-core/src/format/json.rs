use crate::diff::result::DiffRecord;

/// Format diff records as JSON.
pub fn format_json(records: &[DiffRecord]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}
