use config_diff_core::{ConfigTree, Section};

/// Render a parsed configuration tree as an indented outline.
///
/// Depth 1 lists sections, 2 adds subsections, 3 adds key = value lines.
pub fn render_tree(tree: &ConfigTree, max_depth: usize) -> String {
    let mut out = String::new();
    for (name, section) in &tree.sections {
        out.push_str(name);
        out.push('\n');
        if max_depth < 2 {
            continue;
        }
        match section {
            Section::Flat(entries) => {
                for (key, value) in entries {
                    out.push_str(&format!("  {key} = {value}\n"));
                }
            }
            Section::Nested(children) => {
                for (sub_name, entries) in children {
                    out.push_str(&format!("  {sub_name}\n"));
                    if max_depth < 3 {
                        continue;
                    }
                    for (key, value) in entries {
                        out.push_str(&format!("    {key} = {value}\n"));
                    }
                }
            }
        }
    }
    out
}
