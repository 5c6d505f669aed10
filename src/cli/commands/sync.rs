use std::{env, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::super::args::{SyncArgs, SyncCommand};
use super::super::exit_status::ExitStatus;
use super::super::report::{print_sync_config, print_sync_report};
use crate::{
    config::{Config, load_config},
    core::{SyncConfig, file_scanner::ScanOptions, locale::normalize_locales, run_sync},
};

pub fn sync(cmd: SyncCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let current_dir = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&current_dir)?;

    let config = resolve_sync_config(loaded.config, args)?;
    if args.verbose {
        print_sync_config(&config, loaded.from_file);
    }

    let dry_run = args.dry_run || args.check;
    let report = run_sync(&config, dry_run).with_context(|| {
        format!(
            "Failed to synchronize catalogs for {}",
            config.source_root.display()
        )
    })?;
    print_sync_report(&report, args.check, args.verbose);

    if args.check && report.outcomes.iter().any(|o| o.changed) {
        return Ok(ExitStatus::Failure);
    }
    Ok(ExitStatus::Success)
}

/// Apply command-line overrides on top of the config file.
fn resolve_sync_config(mut config: Config, args: &SyncArgs) -> Result<SyncConfig> {
    if let Some(name) = &args.name {
        config.base_name = name.clone();
    }
    if let Some(dir) = &args.dir {
        config.source_root = dir.to_string_lossy().into_owned();
    }
    if let Some(locales) = &args.locales {
        config.locales = locales.split(',').map(str::to_string).collect();
    }
    if let Some(marker) = &args.marker {
        config.marker = marker.clone();
    }
    config.validate()?;

    if config.base_name.trim().is_empty() {
        bail!("Missing catalog base name: pass --name or set 'baseName' in the config file");
    }
    let locales = normalize_locales(&config.locales).context("Invalid entry in 'locales'")?;
    if locales.is_empty() {
        bail!("No target locales: pass --locales or set 'locales' in the config file");
    }

    Ok(SyncConfig {
        base_name: config.base_name,
        source_root: PathBuf::from(config.source_root),
        locales,
        marker: config.marker,
        scan: ScanOptions {
            extensions: config.extensions,
            ignores: config.ignores,
        },
    })
}
