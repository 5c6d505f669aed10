use anyhow::{Context, Result};

use super::super::args::TranslateCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_dict_info;
use crate::core::Dict;

/// Build a dict from the catalogs under `--dir` and print the translation of one string.
///
/// Strings without a translation are printed unchanged.
pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let dict = Dict::new(&cmd.dir, &cmd.locale).with_context(|| {
        format!(
            "Failed to load translations for '{}' from {}",
            cmd.locale,
            cmd.dir.display()
        )
    })?;
    if cmd.verbose {
        print_dict_info(&dict);
    }

    println!("{}", dict.translate(&cmd.source, cmd.context.as_slice()));
    Ok(ExitStatus::Success)
}
