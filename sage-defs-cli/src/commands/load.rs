use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use sage_defs_lib::{DefinitionContext, GameCatalog, GameDefinition};

use crate::CliError;

fn spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
        .map(|style| style.tick_chars("/-\\|"))
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Load one game (or the "None" definition) and print what was found.
pub(crate) fn run_load(
    ctx: &DefinitionContext,
    game: Option<&str>,
    quiet: bool,
) -> Result<(), CliError> {
    let catalog = GameCatalog::load(ctx)?;

    let pb = spinner(quiet);
    let mut files_parsed = 0usize;
    let result = catalog.select(game, ctx, |file_name| {
        files_parsed += 1;
        pb.set_message(format!("Parsing {file_name}"));
        true
    });
    pb.finish_and_clear();
    let definition = result?;

    print_summary(&definition, files_parsed);
    Ok(())
}

fn print_path(label: &str, path: Option<&Path>, missing: &str) {
    match path {
        Some(p) => log::info!(
            "  {} {}",
            format!("{label}:").if_supports_color(Stdout, |t| t.cyan()),
            p.display()
        ),
        None => log::info!(
            "  {} {}",
            format!("{label}:").if_supports_color(Stdout, |t| t.cyan()),
            missing.if_supports_color(Stdout, |t| t.dimmed())
        ),
    }
}

fn print_summary(definition: &GameDefinition, files_parsed: usize) {
    if definition.is_none() {
        log::info!(
            "{}",
            "No game selected: empty definition".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }

    let inherits = match definition.inherit_definitions() {
        Some(base) => format!(" (inherits {base})"),
        None => String::new(),
    };
    log::info!(
        "{} {}{}",
        "Loaded".if_supports_color(Stdout, |t| t.green()),
        definition.id().if_supports_color(Stdout, |t| t.bold()),
        inherits,
    );
    crate::log_blank();

    print_path("Definitions", definition.definition_path(), "none");
    if definition.inherit_definitions().is_some() {
        print_path("Base definitions", definition.base_definition_path(), "none");
    }
    print_path("Mods folder", definition.doc_path(), "not registered");
    crate::log_blank();

    let assets = definition.assets();
    let linked = assets
        .asset_types()
        .chain(assets.game_asset_types())
        .filter(|node| node.superclass().is_some())
        .count();
    log::info!("  Files parsed: {}", files_parsed);
    log::info!("  Asset types: {}", assets.asset_types().count());
    log::info!("  Game asset types: {}", assets.game_asset_types().count());
    log::info!("  Linked to a superclass: {}", linked);

    if !definition.streams().is_empty() {
        crate::log_blank();
        log::info!("  Streams:");
        for stream in definition.streams() {
            let required = if stream.is_name_required {
                format!(" {}", "(name required)".if_supports_color(Stdout, |t| t.yellow()))
            } else {
                String::new()
            };
            log::info!(
                "    {} {}{}",
                stream.id.if_supports_color(Stdout, |t| t.bold()),
                stream.description.if_supports_color(Stdout, |t| t.dimmed()),
                required,
            );
        }
    }
}
