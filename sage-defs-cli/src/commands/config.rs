use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use sage_defs_lib::settings::{Settings, resolve_tool_root, save_tool_root, settings_path};

use crate::CliError;

/// Show the settings file, the effective tool root and registry entries.
pub(crate) fn run_config_show(cli_root: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings_path();
    let settings = Settings::load_from(&path);

    log::info!(
        "{}",
        "sage-defs Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    let status = if path.exists() { "(exists)" } else { "(not found)" };
    log::info!(
        "  Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status.if_supports_color(Stdout, |t| t.dimmed()),
    );

    let source = if cli_root.is_some() {
        "--root"
    } else if settings.tools.root.is_some() {
        "settings"
    } else {
        "default"
    };
    let root = resolve_tool_root(cli_root, &settings);
    log::info!(
        "  Tool root: {} {}",
        root.display(),
        format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
    );
    crate::log_blank();

    if settings.registry.is_empty() {
        log::info!(
            "  {}",
            "No registry entries".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }
    log::info!("  Registry entries:");
    for (key, folder) in &settings.registry {
        log::info!(
            "    {} {}",
            format!("{key}:").if_supports_color(Stdout, |t| t.cyan()),
            folder
        );
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

/// Save `dir` as the tool root.
pub(crate) fn run_config_set_root(dir: &Path) -> Result<(), CliError> {
    if !dir.is_dir() {
        return Err(CliError::config(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    let dir = dir.canonicalize()?;
    save_tool_root(Some(&dir))?;
    log::info!(
        "{} Tool root set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        dir.display()
    );
    Ok(())
}

/// Remove the saved tool root.
pub(crate) fn run_config_clear_root() -> Result<(), CliError> {
    save_tool_root(None)?;
    log::info!(
        "{} Tool root cleared",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}
