//! Parsing and structural diffing primitives for FortiGate-style
//! configuration dumps (`config` / `edit` / `set` / `next` / `end`).

pub mod classify;
pub mod diff;
pub mod filter;
pub mod format;
pub mod parser;
pub mod tree;

pub use classify::{classify_lines, Directive};
pub use diff::{diff, diff_with_filter, DiffRecord, Side};
pub use filter::KeyFilter;
pub use format::{format_json, format_summary, format_text, SideLabels, NO_DIFFERENCES};
pub use parser::{
    parse, parse_file, parse_file_with_options, parse_with_options, Diagnostic, DiagnosticKind,
    ParseError, ParseOptions, ParseOutcome,
};
pub use tree::{ConfigTree, Section, Subsection};
