//! Depth-bounded hierarchical parser for FortiGate configuration dumps.
//!
//! The parser never fails on malformed input: lines that do not fit the
//! current state are dropped with a [`Diagnostic`] and parsing continues, so
//! a truncated or hand-edited dump still yields a comparable [`ConfigTree`].

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::classify::{classify_lines, Directive};
use crate::tree::{ConfigTree, Section, Subsection};

/// Maximum nesting depth: a section frame plus a subsection frame.
const MAX_DEPTH: usize = 2;

/// Controls parser behavior.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Key-name prefixes whose values span multiple raw lines (embedded key
    /// blobs). A matching assignment is not stored and every following line
    /// is consumed silently until the next structural directive.
    pub skip_key_prefixes: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            skip_key_prefixes: vec!["ssh-public-key".to_string()],
        }
    }
}

/// Why a line was rejected. Never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Line matched no directive shape.
    MalformedLine,
    /// `config` while a section was already open.
    MisplacedConfig,
    /// `edit` outside an open section, or inside an open subsection.
    MisplacedEdit,
    /// `set`/`unset` with no open section.
    MisplacedSet,
    /// `next` with no open subsection.
    OrphanNext,
    /// `end` with nothing open.
    OrphanEnd,
    /// Direct key in a section that also has `edit` blocks.
    MixedSectionContent,
}

impl DiagnosticKind {
    fn reason(self) -> &'static str {
        match self {
            DiagnosticKind::MalformedLine => "unrecognized directive",
            DiagnosticKind::MisplacedConfig => "config inside an open section",
            DiagnosticKind::MisplacedEdit => "edit is not valid here",
            DiagnosticKind::MisplacedSet => "set outside a section",
            DiagnosticKind::OrphanNext => "next with no open subsection",
            DiagnosticKind::OrphanEnd => "end with nothing open",
            DiagnosticKind::MixedSectionContent => "direct key in a section with subsections",
        }
    }
}

/// One recovered parse problem, pointing at its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub text: String,
    pub kind: DiagnosticKind,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind.reason(), self.text)
    }
}

/// Result of parsing one configuration dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub tree: ConfigTree,
    pub diagnostics: Vec<Diagnostic>,
}

/// Errors from the file-loading convenience wrapper. Parsing proper never
/// fails; only reading the input can.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// One open structure on the parse stack.
#[derive(Debug)]
enum Frame {
    Section {
        name: String,
        entries: BTreeMap<String, String>,
        children: BTreeMap<String, Subsection>,
    },
    Subsection {
        name: String,
        entries: Subsection,
    },
}

/// Parse a configuration dump with default options.
pub fn parse(text: &str) -> ParseOutcome {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse a configuration dump.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> ParseOutcome {
    let mut tree = ConfigTree::new();
    let mut diagnostics = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut skip_block = false;

    for (line, directive) in classify_lines(text) {
        match directive {
            Directive::SectionStart(name) => {
                skip_block = false;
                if stack.is_empty() {
                    push_frame(&mut stack, open_section(&mut tree, name));
                } else {
                    diagnostics.push(Diagnostic {
                        line,
                        text: format!("config {name}"),
                        kind: DiagnosticKind::MisplacedConfig,
                    });
                }
            }
            Directive::SubsectionStart(name) => {
                skip_block = false;
                if matches!(stack.last(), Some(Frame::Section { .. })) {
                    let bucket = {
                        let Some(Frame::Section {
                            entries, children, ..
                        }) = stack.last_mut()
                        else {
                            unreachable!("just checked for an open section");
                        };
                        if !entries.is_empty() {
                            diagnostics.push(Diagnostic {
                                line,
                                text: format!("edit {name}"),
                                kind: DiagnosticKind::MixedSectionContent,
                            });
                            entries.clear();
                        }
                        // Repeated `edit` blocks with the same name merge.
                        children.remove(&name).unwrap_or_default()
                    };
                    push_frame(
                        &mut stack,
                        Frame::Subsection {
                            name,
                            entries: bucket,
                        },
                    );
                } else {
                    diagnostics.push(Diagnostic {
                        line,
                        text: format!("edit {name}"),
                        kind: DiagnosticKind::MisplacedEdit,
                    });
                }
            }
            Directive::Assignment { key, value, unset } => {
                if skip_block {
                    continue;
                }
                if is_skip_trigger(&key, options) {
                    skip_block = true;
                    continue;
                }
                let text = render_assignment(&key, &value, unset);
                let stored = if unset { String::new() } else { value };
                match stack.last_mut() {
                    Some(Frame::Subsection { entries, .. }) => {
                        entries.insert(key, stored);
                    }
                    Some(Frame::Section {
                        entries, children, ..
                    }) => {
                        if children.is_empty() {
                            entries.insert(key, stored);
                        } else {
                            diagnostics.push(Diagnostic {
                                line,
                                text,
                                kind: DiagnosticKind::MixedSectionContent,
                            });
                        }
                    }
                    None => diagnostics.push(Diagnostic {
                        line,
                        text,
                        kind: DiagnosticKind::MisplacedSet,
                    }),
                }
            }
            Directive::SubsectionEnd => {
                skip_block = false;
                if matches!(stack.last(), Some(Frame::Subsection { .. })) {
                    close_subsection(&mut stack);
                } else {
                    diagnostics.push(Diagnostic {
                        line,
                        text: "next".to_string(),
                        kind: DiagnosticKind::OrphanNext,
                    });
                }
            }
            Directive::SectionEnd => {
                skip_block = false;
                if matches!(stack.last(), Some(Frame::Subsection { .. })) {
                    // A subsection closed by `end` instead of `next`: accept
                    // it, the enclosing section stays open.
                    close_subsection(&mut stack);
                } else if matches!(stack.last(), Some(Frame::Section { .. })) {
                    close_section(&mut stack, &mut tree);
                } else {
                    diagnostics.push(Diagnostic {
                        line,
                        text: "end".to_string(),
                        kind: DiagnosticKind::OrphanEnd,
                    });
                }
            }
            Directive::Malformed(text) => {
                // Continuation content of a multi-line blob is expected to be
                // unclassifiable; swallow it without a diagnostic.
                if !skip_block {
                    diagnostics.push(Diagnostic {
                        line,
                        text,
                        kind: DiagnosticKind::MalformedLine,
                    });
                }
            }
        }
    }

    // Truncated dump: retain whatever is still open.
    if matches!(stack.last(), Some(Frame::Subsection { .. })) {
        close_subsection(&mut stack);
    }
    if matches!(stack.last(), Some(Frame::Section { .. })) {
        close_section(&mut stack, &mut tree);
    }

    ParseOutcome { tree, diagnostics }
}

/// Read and parse a configuration file with default options.
pub fn parse_file(path: &Path) -> Result<ParseOutcome, ParseError> {
    parse_file_with_options(path, &ParseOptions::default())
}

/// Read and parse a configuration file.
pub fn parse_file_with_options(
    path: &Path,
    options: &ParseOptions,
) -> Result<ParseOutcome, ParseError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_with_options(&text, options))
}

fn push_frame(stack: &mut Vec<Frame>, frame: Frame) {
    stack.push(frame);
    debug_assert!(stack.len() <= MAX_DEPTH, "parse stack depth exceeded");
}

/// Open a section frame, rehydrating an existing bucket so repeated
/// `config` blocks with the same name merge.
fn open_section(tree: &mut ConfigTree, name: String) -> Frame {
    let (entries, children) = match tree.sections.remove(&name) {
        Some(Section::Flat(entries)) => (entries, BTreeMap::new()),
        Some(Section::Nested(children)) => (BTreeMap::new(), children),
        None => (BTreeMap::new(), BTreeMap::new()),
    };
    Frame::Section {
        name,
        entries,
        children,
    }
}

fn close_subsection(stack: &mut Vec<Frame>) {
    let Some(Frame::Subsection { name, entries }) = stack.pop() else {
        unreachable!("caller checked for an open subsection");
    };
    let Some(Frame::Section { children, .. }) = stack.last_mut() else {
        unreachable!("a subsection frame always sits on a section frame");
    };
    children.insert(name, entries);
}

fn close_section(stack: &mut Vec<Frame>, tree: &mut ConfigTree) {
    let Some(Frame::Section {
        name,
        entries,
        children,
    }) = stack.pop()
    else {
        unreachable!("caller checked for an open section");
    };

    // Sections that never gained content are dropped, not retained empty.
    let section = if !children.is_empty() {
        Section::Nested(children)
    } else if !entries.is_empty() {
        Section::Flat(entries)
    } else {
        return;
    };
    tree.sections.insert(name, section);
}

fn render_assignment(key: &str, value: &str, unset: bool) -> String {
    let keyword = if unset { "unset" } else { "set" };
    if value.is_empty() {
        format!("{keyword} {key}")
    } else {
        format!("{keyword} {key} {value}")
    }
}

fn is_skip_trigger(key: &str, options: &ParseOptions) -> bool {
    options
        .skip_key_prefixes
        .iter()
        .any(|prefix| key.starts_with(prefix.as_str()))
}
