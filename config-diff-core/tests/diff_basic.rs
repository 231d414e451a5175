use std::collections::BTreeMap;
use std::path::PathBuf;

use config_diff_core::{
    diff, diff_with_filter, format_json, format_summary, format_text, parse, parse_file,
    ConfigTree, DiffRecord, KeyFilter, Section, Side, SideLabels, NO_DIFFERENCES,
};
use pretty_assertions::assert_eq;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

const INTERFACE_A: &str = "config system interface\n\
                           edit \"port1\"\n\
                           set ip 10.0.0.1 255.255.255.0\n\
                           set mode static\n\
                           next\n\
                           end\n";

const INTERFACE_B: &str = "config system interface\n\
                           edit \"port1\"\n\
                           set ip 10.0.0.1 255.255.255.0\n\
                           set mode dhcp\n\
                           next\n\
                           end\n";

#[test]
fn single_changed_value_yields_exactly_one_record() {
    let left = parse(INTERFACE_A).tree;
    let right = parse(INTERFACE_B).tree;

    let records = diff(&left, &right);
    assert_eq!(
        records,
        vec![DiffRecord::ValueDiff {
            section: "system interface".to_string(),
            subsection: Some("port1".to_string()),
            key: "mode".to_string(),
            left: "static".to_string(),
            right: "dhcp".to_string(),
        }]
    );
}

#[test]
fn section_absent_on_one_side_is_reported_once() {
    let left = parse(
        "config firewall policy\n\
         edit \"1\"\n\
         set action accept\n\
         next\n\
         end\n",
    )
    .tree;
    let right = ConfigTree::new();

    let records = diff(&left, &right);
    assert_eq!(
        records,
        vec![DiffRecord::SectionMissing {
            side: Side::Right,
            section: "firewall policy".to_string(),
        }]
    );
}

#[test]
fn ignored_keys_never_appear_in_records() {
    let left = parse(
        "config system admin\n\
         edit \"admin\"\n\
         set password ENC abc123\n\
         next\n\
         end\n",
    )
    .tree;
    let right = parse(
        "config system admin\n\
         edit \"admin\"\n\
         set password ENC xyz789\n\
         next\n\
         end\n",
    )
    .tree;

    let filter = KeyFilter::new(["password"]);
    assert_eq!(diff_with_filter(&left, &right, &filter), vec![]);
}

#[test]
fn builtin_redaction_needs_no_configuration() {
    let mut left_entries = BTreeMap::new();
    left_entries.insert(
        "vpn certificate ca".to_string(),
        "cert-body-one".to_string(),
    );
    let mut right_entries = BTreeMap::new();
    right_entries.insert(
        "vpn certificate ca".to_string(),
        "cert-body-two".to_string(),
    );

    let mut left = ConfigTree::new();
    left.sections
        .insert("system global".to_string(), Section::Flat(left_entries));
    let mut right = ConfigTree::new();
    right
        .sections
        .insert("system global".to_string(), Section::Flat(right_entries));

    assert_eq!(diff(&left, &right), vec![]);
}

#[test]
fn empty_inputs_render_the_no_difference_sentence() {
    let left = parse("").tree;
    let right = parse("").tree;

    let records = diff(&left, &right);
    assert_eq!(records, vec![]);
    assert_eq!(
        format_text(&records, &SideLabels::default()),
        NO_DIFFERENCES
    );
}

#[test]
fn flat_sections_compare_as_a_one_level_key_set() {
    let left = parse(
        "config system global\n\
         set admintimeout 30\n\
         set timezone 26\n\
         end\n",
    )
    .tree;
    let right = parse(
        "config system global\n\
         set admintimeout 15\n\
         end\n",
    )
    .tree;

    let records = diff(&left, &right);
    assert_eq!(
        records,
        vec![
            DiffRecord::ValueDiff {
                section: "system global".to_string(),
                subsection: None,
                key: "admintimeout".to_string(),
                left: "30".to_string(),
                right: "15".to_string(),
            },
            DiffRecord::KeyMissing {
                side: Side::Right,
                section: "system global".to_string(),
                subsection: None,
                key: "timezone".to_string(),
            },
        ]
    );
}

#[test]
fn fixture_pair_reports_expected_differences() {
    let left = parse_file(&fixture("fixtures/fortigate_a.conf"))
        .expect("left parse")
        .tree;
    let right = parse_file(&fixture("fixtures/fortigate_b.conf"))
        .expect("right parse")
        .tree;

    let records = diff(&left, &right);

    assert!(records.contains(&DiffRecord::SectionMissing {
        side: Side::Left,
        section: "system dns".to_string(),
    }));
    assert!(records.contains(&DiffRecord::SubsectionMissing {
        side: Side::Right,
        section: "firewall address".to_string(),
        subsection: "Guest-net".to_string(),
    }));
    assert!(records.contains(&DiffRecord::KeyMissing {
        side: Side::Left,
        section: "firewall policy".to_string(),
        subsection: Some("1".to_string()),
        key: "logtraffic".to_string(),
    }));
    assert!(records.contains(&DiffRecord::ValueDiff {
        section: "firewall policy".to_string(),
        subsection: Some("1".to_string()),
        key: "service".to_string(),
        left: "\"ALL\"".to_string(),
        right: "\"HTTPS\"".to_string(),
    }));
    // The differing ssh-public-key1 blobs were consumed at parse time.
    assert!(!format_json(&records).contains("ssh-public-key1"));

    assert_eq!(
        format_summary(&records),
        "section_missing=1 subsection_missing=1 key_missing=1 value_diff=6"
    );
}

#[test]
fn report_lines_follow_the_fixed_templates() {
    let left = parse(
        "config system global\n\
         set admintimeout 30\n\
         end\n\
         config system interface\n\
         edit \"port1\"\n\
         set mode static\n\
         next\n\
         end\n",
    )
    .tree;
    let right = parse(
        "config system interface\n\
         edit \"port1\"\n\
         set mode dhcp\n\
         next\n\
         edit \"port2\"\n\
         set mode static\n\
         next\n\
         end\n",
    )
    .tree;

    let records = diff(&left, &right);
    let labels = SideLabels::new("branch_fw", "lab_fw");
    let report = format_text(&records, &labels);

    assert_eq!(
        report,
        "[Section Missing in lab_fw]  Section: 'system global' is in branch_fw but not in lab_fw\n\
         [Value Difference]  Section: 'system interface'  Subsection: 'port1'  Key: 'mode'  branch_fw: 'static'  lab_fw: 'dhcp'\n\
         [Subsection Missing in branch_fw]  Subsection: 'port2' in section 'system interface' is in lab_fw but not in branch_fw"
    );
}

#[test]
fn json_output_tags_each_record() {
    let left = parse(INTERFACE_A).tree;
    let right = parse(INTERFACE_B).tree;

    let json = format_json(&diff(&left, &right));
    assert!(json.contains("\"type\""));
    assert!(json.contains("\"ValueDiff\""));
}
