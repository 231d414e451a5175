//! FortiGate configuration comparison command-line tooling.
//!
//! The heavy lifting — line classification, hierarchical parsing, tree
//! diffing, report formatting — lives in `config-diff-core`. This crate adds
//! the operator-facing surface:
//!
//! - [`ignore_keys`] — built-in and TOML-loaded ignore-key lists
//! - [`label`] — display labels derived from export filenames
//! - [`report`] — colored terminal rendering of diff records
//! - [`sections_report`] — section inventory and per-section statistics
//! - [`inspect`] — parsed-tree outlines

pub mod ignore_keys;
pub mod inspect;
pub mod label;
pub mod report;
pub mod sections_report;
