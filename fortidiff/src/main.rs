use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use config_diff_core::{
    diff_with_filter, format_json, format_text, parse_file, Diagnostic, KeyFilter, ParseOutcome,
    SideLabels,
};
use fortidiff::ignore_keys::{default_ignore_keys, load_ignore_keys};
use fortidiff::inspect::render_tree;
use fortidiff::label::display_label;
use fortidiff::report::{render_inventory, render_records, render_summary};
use fortidiff::sections_report::{build_inventory, summarize_by_section};

mod cli;

use cli::{Cli, Command, DiffArgs, InspectArgs, OutputFormat, SectionsArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Diff(args) => run_diff(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Sections(args) => run_sections(args),
    }
}

fn run_diff(args: DiffArgs) -> Result<()> {
    let left = load(&args.file1)?;
    let right = load(&args.file2)?;

    if args.show_diagnostics {
        print_diagnostics(&args.file1, &left.diagnostics);
        print_diagnostics(&args.file2, &right.diagnostics);
    }

    let filter = KeyFilter::new(resolve_ignore_keys(&args));
    let records = diff_with_filter(&left.tree, &right.tree, &filter);

    let labels = SideLabels::new(
        args.label1
            .clone()
            .unwrap_or_else(|| display_label(&args.file1)),
        args.label2
            .clone()
            .unwrap_or_else(|| display_label(&args.file2)),
    );

    if let Some(out_path) = &args.output {
        let mut report = format_text(&records, &labels);
        report.push('\n');
        fs::write(out_path, report)
            .with_context(|| format!("failed to write report to {}", out_path.display()))?;
    }

    if args.quiet || args.summary {
        println!("{}", render_summary(&records));
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => println!("{}", render_records(&records, &labels)),
        OutputFormat::Json => println!("{}", format_json(&records)),
    }

    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let outcome = load(&args.file)?;

    if args.show_diagnostics {
        print_diagnostics(&args.file, &outcome.diagnostics);
    }

    let tree = match &args.section {
        Some(section) => {
            let mut narrowed = config_diff_core::ConfigTree::new();
            let found = outcome
                .tree
                .get_section(section)
                .with_context(|| format!("section '{section}' not found"))?;
            narrowed
                .sections
                .insert(section.clone(), found.clone());
            narrowed
        }
        None => outcome.tree,
    };

    if args.canonical {
        print!("{tree}");
    } else {
        print!("{}", render_tree(&tree, args.depth));
    }
    Ok(())
}

fn run_sections(args: SectionsArgs) -> Result<()> {
    let left = load(&args.file1)?;
    let right = load(&args.file2)?;

    let inventory = build_inventory(&left.tree, &right.tree);
    let records = diff_with_filter(&left.tree, &right.tree, &KeyFilter::default());
    let stats = summarize_by_section(&records);

    match args.format {
        OutputFormat::Text => println!("{}", render_inventory(&inventory, &stats)),
        OutputFormat::Json => {
            let report = SectionsReport { inventory, stats };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<ParseOutcome> {
    parse_file(path).with_context(|| format!("failed to read {}", path.display()))
}

fn print_diagnostics(path: &Path, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("warning: {}: {diagnostic}", path.display());
    }
}

fn resolve_ignore_keys(args: &DiffArgs) -> Vec<String> {
    let mut keys = if let Some(path) = &args.ignore_file {
        match load_ignore_keys(path) {
            Ok(keys) => keys,
            Err(err) => {
                eprintln!(
                    "warning: failed to load ignore keys from {} ({err}); using built-in defaults",
                    path.display()
                );
                default_ignore_keys()
            }
        }
    } else if args.no_default_ignores {
        Vec::new()
    } else {
        default_ignore_keys()
    };

    keys.extend(args.ignore.iter().cloned());
    keys
}

#[derive(Debug, serde::Serialize)]
struct SectionsReport {
    inventory: fortidiff::sections_report::SectionInventory,
    stats: Vec<fortidiff::sections_report::SectionStats>,
}
