use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use sage_defs_lib::{DefinitionContext, GameCatalog};

use crate::CliError;

/// List every game in the manifest with its inheritance and streams.
pub(crate) fn run_games(ctx: &DefinitionContext) -> Result<(), CliError> {
    let catalog = GameCatalog::load(ctx)?;

    if catalog.games().is_empty() {
        log::info!(
            "{}",
            format!("No games found in {}", ctx.manifest_path().display())
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        crate::log_blank();
        log::info!("Tip: point --root (or 'sage-defs config set-root') at the folder");
        log::info!("     that contains Games/GameDefinition.xml.");
        return Ok(());
    }

    log::info!(
        "Games in {}:",
        ctx.manifest_path()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    crate::log_blank();

    for game in catalog.games() {
        let inherits = match game.base_game() {
            Some(base) => format!(
                " {}",
                format!("(inherits {base})").if_supports_color(Stdout, |t| t.dimmed())
            ),
            None => String::new(),
        };
        log::info!(
            "  {} [{}]{}",
            game.id.if_supports_color(Stdout, |t| t.bold()),
            game.theme_color
                .to_hex()
                .if_supports_color(Stdout, |t| t.cyan()),
            inherits,
        );
        log::info!(
            "    Manifest version: {}, types hash: {:#010X}",
            game.manifest_version,
            game.all_types_hash
        );
        if !game.world_builder_version.is_empty() {
            log::info!("    WorldBuilder: {}", game.world_builder_version);
        }
        if !game.streams.is_empty() {
            let streams: Vec<&str> = game.streams.iter().map(|s| s.name.as_str()).collect();
            log::info!("    Streams: {}", streams.join(", "));
        }
        let derived: Vec<&str> = catalog
            .derived_from(&game.id)
            .iter()
            .map(|g| g.id.as_str())
            .collect();
        if !derived.is_empty() {
            log::info!("    Inherited by: {}", derived.join(", "));
        }
    }

    Ok(())
}
