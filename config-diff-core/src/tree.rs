use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Key -> value entries inside one `edit` block.
pub type Subsection = BTreeMap<String, String>;

/// A named top-level `config` block.
///
/// FortiGate sections come in two shapes: table sections hold one `edit`
/// block per entry, scalar sections hold `set` lines directly. The variant is
/// fixed when the section closes, so consumers can match on structure instead
/// of probing value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Direct `set` lines, no `edit` blocks.
    Flat(BTreeMap<String, String>),
    /// One [`Subsection`] per `edit` block, keyed by entry name.
    Nested(BTreeMap<String, Subsection>),
}

impl Section {
    /// Direct key entries, if this is a flat section.
    pub fn flat_entries(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Section::Flat(entries) => Some(entries),
            Section::Nested(_) => None,
        }
    }

    /// Named subsections, if this is a nested section.
    pub fn subsections(&self) -> Option<&BTreeMap<String, Subsection>> {
        match self {
            Section::Flat(_) => None,
            Section::Nested(children) => Some(children),
        }
    }

    /// Number of direct entries or subsections.
    pub fn len(&self) -> usize {
        match self {
            Section::Flat(entries) => entries.len(),
            Section::Nested(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fully parsed configuration dump.
///
/// Built once per input text and never mutated afterwards; the differ only
/// ever borrows it. Sections iterate in lexicographic name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigTree {
    /// Sections keyed by name.
    pub sections: BTreeMap<String, Section>,
}

impl ConfigTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the section with the provided name.
    pub fn get_section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Walk section -> subsection and return the entry bucket if found.
    pub fn get_subsection(&self, section: &str, subsection: &str) -> Option<&Subsection> {
        self.get_section(section)?.subsections()?.get(subsection)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section names in lexicographic order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

impl Display for ConfigTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (name, section) in &self.sections {
            writeln!(f, "config {name}")?;
            match section {
                Section::Flat(entries) => {
                    for (key, value) in entries {
                        write_set(f, 1, key, value)?;
                    }
                }
                Section::Nested(children) => {
                    for (sub_name, entries) in children {
                        writeln!(f, "    edit \"{sub_name}\"")?;
                        for (key, value) in entries {
                            write_set(f, 2, key, value)?;
                        }
                        writeln!(f, "    next")?;
                    }
                }
            }
            writeln!(f, "end")?;
        }
        Ok(())
    }
}

fn write_set(f: &mut Formatter<'_>, level: usize, key: &str, value: &str) -> fmt::Result {
    let indent = "    ".repeat(level);
    if value.is_empty() {
        writeln!(f, "{indent}unset {key}")
    } else {
        writeln!(f, "{indent}set {key} {value}")
    }
}
