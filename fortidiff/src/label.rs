use std::path::Path;

/// Derive a short display label from a configuration file path.
///
/// Device exports are usually named `<hostname>_<serial>_<date>.conf`; the
/// first two underscore-separated stem segments identify the device without
/// the timestamp noise.
pub fn display_label(path: &Path) -> String {
    let stem = match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => stem,
        _ => return "config".to_string(),
    };

    stem.split('_').take(2).collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::display_label;

    #[test]
    fn keeps_first_two_stem_segments() {
        assert_eq!(
            display_label(Path::new("/tmp/FGT60F_branch_2024-01-02_backup.conf")),
            "FGT60F_branch"
        );
        assert_eq!(display_label(Path::new("primary.conf")), "primary");
    }

    #[test]
    fn falls_back_for_unusable_paths() {
        assert_eq!(display_label(Path::new("")), "config");
    }
}
