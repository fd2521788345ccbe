use std::path::Path;

use log::info;
use resxkit::{
    HintsDocument, LoadOptions, ResourceDocument, TargetDocument, empty_strings,
    formats::target_path_for, merge_hints, new_strings, sort_data, traits::Parser,
};

use crate::{
    config::Config,
    report::{CollectReport, CultureStatus, ReportEntry, StatusReport, print_json},
};

/// Which collector `new` / `empty` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectMode {
    New,
    Empty,
}

fn read_document(path: &Path, options: &LoadOptions) -> Result<ResourceDocument, String> {
    ResourceDocument::read_from_with_options(path, options)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))
}

fn write_document(document: &ResourceDocument, path: &Path) -> Result<(), String> {
    document
        .write_to(path)
        .map_err(|e| format!("Cannot write {}: {}", path.display(), e))
}

/// Compares the translatable strings of `source` with `target` and lists the new or
/// empty ones.
pub fn build_collect_report(
    source: &Path,
    target: &Path,
    mode: CollectMode,
    options: &LoadOptions,
) -> Result<CollectReport, String> {
    let document = read_document(source, options)?;
    let target_document = TargetDocument::load(target);

    let entries = match mode {
        CollectMode::New => new_strings(document.translatable_strings(), &target_document),
        CollectMode::Empty => empty_strings(document.translatable_strings(), &target_document),
    };

    Ok(CollectReport {
        source: source.display().to_string(),
        target: target.display().to_string(),
        target_available: target_document.is_available(),
        entries: entries.into_iter().map(ReportEntry::from).collect(),
    })
}

pub fn run_collect_command(
    source: &Path,
    target: &Path,
    mode: CollectMode,
    options: &LoadOptions,
    json: bool,
) -> Result<(), String> {
    let report = build_collect_report(source, target, mode, options)?;
    if json {
        print_json(&report)
    } else {
        report.print_text();
        Ok(())
    }
}

/// Applies `hints` to `input` and writes the result to `output` (or back to `input`).
/// Returns the number of changed entries.
pub fn run_merge_hints_command(
    input: &Path,
    hints: &Path,
    output: Option<&Path>,
    sort: bool,
    options: &LoadOptions,
) -> Result<usize, String> {
    let mut document = read_document(input, options)?;
    let hints_document = HintsDocument::read_from(hints)
        .map_err(|e| format!("Cannot read {}: {}", hints.display(), e))?;

    let changed = merge_hints(&mut document, &hints_document).map_err(|e| e.to_string())?;
    if sort {
        sort_data(&mut document).map_err(|e| e.to_string())?;
    }

    let output = output.unwrap_or(input);
    write_document(&document, output)?;
    info!("wrote {}", output.display());
    println!("{} entries updated", changed);
    Ok(changed)
}

/// Sorts `input` and writes it to `output` (or back to `input`).
pub fn run_sort_command(
    input: &Path,
    output: Option<&Path>,
    options: &LoadOptions,
) -> Result<(), String> {
    let mut document = read_document(input, options)?;
    sort_data(&mut document).map_err(|e| e.to_string())?;

    let output = output.unwrap_or(input);
    write_document(&document, output)?;
    info!("wrote {}", output.display());
    Ok(())
}

/// Counts new and empty strings for every configured culture.
pub fn build_status_report(config: &Config) -> Result<StatusReport, String> {
    let source = config.source.as_deref().ok_or_else(|| {
        "No source file given (use --source or set `source` in the config)".to_string()
    })?;
    if config.cultures.is_empty() {
        return Err(
            "No cultures given (use --culture or set `cultures` in the config)".to_string(),
        );
    }

    let document = read_document(source, &config.load_options())?;
    let translatable: Vec<_> = document.translatable_strings().collect();

    let mut cultures = Vec::new();
    for culture in &config.cultures {
        let target_path = target_path_for(source, culture).map_err(|e| e.to_string())?;
        let target = TargetDocument::load(&target_path);
        cultures.push(CultureStatus {
            culture: culture.clone(),
            target: target_path.display().to_string(),
            target_available: target.is_available(),
            new: new_strings(translatable.iter().copied(), &target).len(),
            empty: empty_strings(translatable.iter().copied(), &target).len(),
        });
    }

    Ok(StatusReport {
        source: source.display().to_string(),
        translatable: translatable.len(),
        cultures,
    })
}

pub fn run_status_command(config: &Config, json: bool) -> Result<(), String> {
    let report = build_status_report(config)?;
    if json {
        print_json(&report)
    } else {
        report.print_text();
        Ok(())
    }
}
