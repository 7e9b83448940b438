use std::collections::HashSet;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use sage_defs_lib::{AssetKind, AssetTypeGraph, AssetTypeNode, DefinitionContext, GameCatalog};

use crate::CliError;

/// Print the inheritance forest of one namespace of a game's catalog.
pub(crate) fn run_tree(
    ctx: &DefinitionContext,
    game: &str,
    kind: AssetKind,
    root_type: Option<&str>,
) -> Result<(), CliError> {
    let catalog = GameCatalog::load(ctx)?;
    let definition = catalog.select(Some(game), ctx, |_| true)?;
    let assets = definition.assets();

    let roots = match root_type {
        Some(id) => {
            let node = assets
                .get(kind, id)
                .ok_or_else(|| CliError::unknown_asset_type(format!("{id} ({kind})")))?;
            let ancestors: Vec<&str> = assets.ancestors(kind, id).into_iter().map(|n| n.id()).collect();
            if !ancestors.is_empty() {
                log::info!(
                    "{} {}",
                    "Ancestors:".if_supports_color(Stdout, |t| t.cyan()),
                    ancestors.join(" <- ")
                );
                crate::log_blank();
            }
            vec![node]
        }
        None => assets.roots(kind),
    };

    log::info!(
        "{} {} asset types in {}",
        assets.count(kind),
        kind,
        definition.id().if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    let mut visited = HashSet::new();
    for root in roots {
        print_node(assets, root, 0, &mut visited);
    }

    let unreachable = assets.count(kind).saturating_sub(visited.len());
    if root_type.is_none() && unreachable > 0 {
        crate::log_blank();
        log::warn!("{unreachable} asset type(s) sit on an inheritance cycle and were not printed");
    }
    Ok(())
}

fn print_node<'a>(
    assets: &'a AssetTypeGraph,
    node: &'a AssetTypeNode,
    depth: usize,
    visited: &mut HashSet<&'a str>,
) {
    if !visited.insert(node.id()) {
        return;
    }
    let entries = node.asset().entries.len();
    let hash = match node.asset().type_hash {
        Some(hash) => format!(" {:#010X}", hash),
        None => String::new(),
    };
    log::info!(
        "{}{} {}{}",
        "  ".repeat(depth + 1),
        node.id().if_supports_color(Stdout, |t| t.bold()),
        format!("({entries} entries)").if_supports_color(Stdout, |t| t.dimmed()),
        hash.if_supports_color(Stdout, |t| t.dimmed()),
    );
    for child in assets.subclasses_of(node.kind(), node.id()) {
        print_node(assets, child, depth + 1, visited);
    }
}
