use std::collections::{BTreeMap, BTreeSet};

use crate::diff::result::{DiffRecord, Side};
use crate::filter::KeyFilter;
use crate::tree::{ConfigTree, Section};

/// Diff two configuration trees with no caller ignore rules.
pub fn diff(left: &ConfigTree, right: &ConfigTree) -> Vec<DiffRecord> {
    diff_with_filter(left, right, &KeyFilter::default())
}

/// Diff two configuration trees.
///
/// Pure function of its inputs: neither tree is mutated and identical inputs
/// always yield the same record sequence. All name unions are visited in
/// lexicographic order. Equal values produce no record.
pub fn diff_with_filter(
    left: &ConfigTree,
    right: &ConfigTree,
    filter: &KeyFilter,
) -> Vec<DiffRecord> {
    let mut out = Vec::new();

    for name in union(left.sections.keys(), right.sections.keys()) {
        match (left.sections.get(name), right.sections.get(name)) {
            (Some(l), Some(r)) => diff_section(name, l, r, filter, &mut out),
            (Some(_), None) => out.push(DiffRecord::SectionMissing {
                side: Side::Right,
                section: name.to_string(),
            }),
            (None, Some(_)) => out.push(DiffRecord::SectionMissing {
                side: Side::Left,
                section: name.to_string(),
            }),
            (None, None) => unreachable!("name came from the union of both trees"),
        }
    }

    out
}

fn diff_section(
    section: &str,
    left: &Section,
    right: &Section,
    filter: &KeyFilter,
    out: &mut Vec<DiffRecord>,
) {
    match (left, right) {
        (Section::Nested(l), Section::Nested(r)) => {
            for name in union(l.keys(), r.keys()) {
                match (l.get(name), r.get(name)) {
                    (Some(ls), Some(rs)) => {
                        diff_keys(section, Some(name), ls, rs, filter, out);
                    }
                    (Some(_), None) => out.push(DiffRecord::SubsectionMissing {
                        side: Side::Right,
                        section: section.to_string(),
                        subsection: name.to_string(),
                    }),
                    (None, Some(_)) => out.push(DiffRecord::SubsectionMissing {
                        side: Side::Left,
                        section: section.to_string(),
                        subsection: name.to_string(),
                    }),
                    (None, None) => unreachable!("name came from the union of both sections"),
                }
            }
        }
        // Either side flat: compare direct keys as a one-level key set.
        _ => {
            let empty = BTreeMap::new();
            let l = left.flat_entries().unwrap_or(&empty);
            let r = right.flat_entries().unwrap_or(&empty);
            diff_keys(section, None, l, r, filter, out);
        }
    }
}

fn diff_keys(
    section: &str,
    subsection: Option<&str>,
    left: &BTreeMap<String, String>,
    right: &BTreeMap<String, String>,
    filter: &KeyFilter,
    out: &mut Vec<DiffRecord>,
) {
    for key in union(left.keys(), right.keys()) {
        if !filter.should_compare(key) {
            continue;
        }
        match (left.get(key), right.get(key)) {
            (Some(a), Some(b)) => {
                if a != b {
                    out.push(DiffRecord::ValueDiff {
                        section: section.to_string(),
                        subsection: subsection.map(ToString::to_string),
                        key: key.to_string(),
                        left: a.clone(),
                        right: b.clone(),
                    });
                }
            }
            (Some(_), None) => out.push(DiffRecord::KeyMissing {
                side: Side::Right,
                section: section.to_string(),
                subsection: subsection.map(ToString::to_string),
                key: key.to_string(),
            }),
            (None, Some(_)) => out.push(DiffRecord::KeyMissing {
                side: Side::Left,
                section: section.to_string(),
                subsection: subsection.map(ToString::to_string),
                key: key.to_string(),
            }),
            (None, None) => unreachable!("key came from the union of both maps"),
        }
    }
}

fn union<'a>(
    left: impl Iterator<Item = &'a String>,
    right: impl Iterator<Item = &'a String>,
) -> impl Iterator<Item = &'a String> {
    left.chain(right).collect::<BTreeSet<_>>().into_iter()
}
