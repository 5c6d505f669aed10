//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow polyglot to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{Dict, SyncConfig, SyncOutcome, SyncReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of dropped messages listed per catalog in verbose mode.
const MAX_DROPPED_DISPLAY: usize = 10;

/// Print the result of a sync run: summary to stdout, dropped translations to stderr.
pub fn print_sync_report(report: &SyncReport, check: bool, verbose: bool) {
    print_sync_summary_to(report, check, &mut io::stdout().lock());
    print_dropped_to(report, verbose, &mut io::stderr().lock());
}

/// Print the per-catalog summary to a custom writer.
pub fn print_sync_summary_to<W: Write>(report: &SyncReport, check: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} source {}: {} {} from {} {}",
            report.files_scanned,
            plural(report.files_scanned, "file", "files"),
            report.message_count,
            plural(report.message_count, "message", "messages"),
            report.call_count,
            plural(report.call_count, "call", "calls"),
        )
        .green()
    );

    for outcome in &report.outcomes {
        print_outcome(outcome, check, writer);
    }
}

fn print_outcome<W: Write>(outcome: &SyncOutcome, check: bool, writer: &mut W) {
    let status = match (outcome.changed, outcome.written) {
        (false, _) => "up to date",
        (true, true) => "updated",
        (true, false) if check => "out of date",
        (true, false) => "would be updated",
    };
    let mark = if check && outcome.changed {
        FAILURE_MARK.red()
    } else {
        SUCCESS_MARK.green()
    };

    let mut counts = format!(
        "{} {}, {} translated",
        outcome.total,
        plural(outcome.total, "message", "messages"),
        outcome.translated
    );
    if outcome.carried > 0 {
        counts.push_str(&format!(", {} carried", outcome.carried));
    }
    if outcome.added > 0 {
        counts.push_str(&format!(", {} new", outcome.added));
    }
    if !outcome.dropped.is_empty() {
        counts.push_str(&format!(", {} dropped", outcome.dropped.len()));
    }

    let _ = writeln!(
        writer,
        "{} [{}] {}: {} ({})",
        mark,
        outcome.locale,
        outcome.path.display(),
        status,
        counts
    );
}

/// Print warnings for translations lost because their string is no longer extracted.
///
/// In verbose mode untranslated dropped messages are listed as well.
pub fn print_dropped_to<W: Write>(report: &SyncReport, verbose: bool, writer: &mut W) {
    for outcome in &report.outcomes {
        let verb = if outcome.written {
            "dropped"
        } else {
            "would be dropped"
        };

        for message in outcome.lost_translations() {
            let _ = writeln!(
                writer,
                "{}: translation of \"{}\" {} (no longer used in source)",
                "warning".bold().yellow(),
                message.key(),
                verb
            );
            let _ = writeln!(
                writer,
                "  {} {}",
                "-->".blue(),
                outcome.path.display()
            );
            let _ = writeln!(
                writer,
                "  {} {} \"{}\"",
                "=".blue(),
                "translation:".bold(),
                message.translation
            );
        }

        if verbose {
            let untranslated: Vec<_> = outcome
                .dropped
                .iter()
                .filter(|m| !m.is_translated())
                .collect();
            for message in untranslated.iter().take(MAX_DROPPED_DISPLAY) {
                let _ = writeln!(
                    writer,
                    "{} untranslated \"{}\" {} from {}",
                    "note:".bold(),
                    message.key(),
                    verb,
                    outcome.path.display()
                );
            }
            let remaining = untranslated.len().saturating_sub(MAX_DROPPED_DISPLAY);
            if remaining > 0 {
                let _ = writeln!(
                    writer,
                    "{} ... and {} more",
                    "note:".bold(),
                    remaining
                );
            }
        }
    }
}

/// Print the effective sync configuration (verbose mode).
pub fn print_sync_config(config: &SyncConfig, from_file: bool) {
    print_sync_config_to(config, from_file, &mut io::stderr().lock());
}

pub fn print_sync_config_to<W: Write>(config: &SyncConfig, from_file: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} scanning {} for {}(...) calls ({})",
        "info:".bold().cyan(),
        config.source_root.display(),
        config.marker,
        if from_file {
            "config file found"
        } else {
            "no config file"
        }
    );
    for locale in &config.locales {
        let _ = writeln!(
            writer,
            "{} target {}",
            "info:".bold().cyan(),
            config.catalog_path(locale).display()
        );
    }
}

/// Print which catalogs a dict was built from (verbose mode).
pub fn print_dict_info(dict: &Dict) {
    print_dict_info_to(dict, &mut io::stderr().lock());
}

pub fn print_dict_info_to<W: Write>(dict: &Dict, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} locale chain {}, {} {} from {} {}",
        "info:".bold().cyan(),
        dict.locales(),
        dict.len(),
        plural(dict.len(), "translation", "translations"),
        dict.loaded_files().len(),
        plural(dict.loaded_files().len(), "file", "files"),
    );
    for path in dict.loaded_files() {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), path.display());
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
