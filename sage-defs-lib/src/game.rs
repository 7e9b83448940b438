//! A fully loaded game: manifest metadata plus its linked asset catalog.

use std::path::{Path, PathBuf};

use sage_defs_core::{GameSource, RegistryEntry, StreamDescriptor, ThemeColor};

use crate::context::DefinitionContext;
use crate::error::LoadError;
use crate::graph::AssetTypeGraph;
use crate::walker::DefinitionTreeWalker;

/// Id of the definition standing for "no game selected".
pub const NONE_GAME_ID: &str = "None";

/// Folder under a game's documents directory that holds user mods.
const MODS_DIR: &str = "Mods";

/// A game's metadata and asset-type catalog.
#[derive(Debug, Clone)]
pub struct GameDefinition {
    id: String,
    inherit_definitions: Option<String>,
    manifest_version: i16,
    all_types_hash: u32,
    world_builder_version: String,
    theme_color: ThemeColor,
    doc_path: Option<PathBuf>,
    definition_path: Option<PathBuf>,
    base_definition_path: Option<PathBuf>,
    streams: Vec<StreamDescriptor>,
    assets: AssetTypeGraph,
}

impl GameDefinition {
    /// The "no game selected" definition: id `None`, nothing else.
    pub fn none() -> Self {
        Self {
            id: NONE_GAME_ID.to_string(),
            inherit_definitions: None,
            manifest_version: 0,
            all_types_hash: 0,
            world_builder_version: String::new(),
            theme_color: ThemeColor::default(),
            doc_path: None,
            definition_path: None,
            base_definition_path: None,
            streams: Vec::new(),
            assets: AssetTypeGraph::new(),
        }
    }

    /// Load a game from its manifest record.
    ///
    /// The game's own tree (`<tool-root>/Games/<id>`) is merged first, then
    /// the base game's tree minus the files the game overrides, and the
    /// merged catalog is linked once at the end. `status` is called with each
    /// file name before it is parsed; its return value is not acted on.
    ///
    /// `None` yields [`GameDefinition::none`]. A game that is not registered
    /// on this machine loads with no documents path.
    pub fn load<F>(
        source: Option<&GameSource>,
        ctx: &DefinitionContext,
        mut status: F,
    ) -> Result<Self, LoadError>
    where
        F: FnMut(&str) -> bool,
    {
        let Some(game) = source else {
            return Ok(Self::none());
        };

        let doc_path = resolve_doc_path(ctx, &game.registry_entry);
        if doc_path.is_none() {
            log::debug!("no documents folder registered for '{}'", game.id);
        }

        let streams = game.streams.iter().map(StreamDescriptor::from).collect();

        let definition_path = ctx.game_dir(&game.id);
        let mut assets = AssetTypeGraph::new();
        let mut walker = DefinitionTreeWalker::new(ctx.loader(), &mut status);
        let own = walker.walk(&definition_path, &mut assets)?;
        log::debug!(
            "'{}': {} file(s) from {}",
            game.id,
            own.files_loaded,
            definition_path.display()
        );

        let base_definition_path = match game.base_game() {
            Some(base) => {
                let base_path = ctx.game_dir(base);
                let inherited = walker.walk_inherited(&base_path, &definition_path, &mut assets)?;
                log::debug!(
                    "'{}': {} file(s) inherited from '{}', {} overridden",
                    game.id,
                    inherited.files_loaded,
                    base,
                    inherited.files_shadowed
                );
                Some(base_path)
            }
            None => None,
        };

        let links = assets.link();
        log::info!(
            "Loaded '{}': {} asset types, {} game asset types, {} inheritance links",
            game.id,
            assets.asset_types().count(),
            assets.game_asset_types().count(),
            links
        );

        Ok(Self {
            id: game.id.clone(),
            inherit_definitions: game.base_game().map(str::to_string),
            manifest_version: game.manifest_version,
            all_types_hash: game.all_types_hash,
            world_builder_version: game.world_builder_version.clone(),
            theme_color: game.theme_color,
            doc_path,
            definition_path: Some(definition_path),
            base_definition_path,
            streams,
            assets,
        })
    }

    pub fn is_none(&self) -> bool {
        self.definition_path.is_none()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the base game whose definitions this game inherits.
    pub fn inherit_definitions(&self) -> Option<&str> {
        self.inherit_definitions.as_deref()
    }

    pub fn manifest_version(&self) -> i16 {
        self.manifest_version
    }

    pub fn all_types_hash(&self) -> u32 {
        self.all_types_hash
    }

    pub fn world_builder_version(&self) -> &str {
        &self.world_builder_version
    }

    pub fn theme_color(&self) -> ThemeColor {
        self.theme_color
    }

    /// `<documents>/<registered folder>/Mods`; `None` when the game is not
    /// registered or there is no documents directory.
    pub fn doc_path(&self) -> Option<&Path> {
        self.doc_path.as_deref()
    }

    pub fn definition_path(&self) -> Option<&Path> {
        self.definition_path.as_deref()
    }

    pub fn base_definition_path(&self) -> Option<&Path> {
        self.base_definition_path.as_deref()
    }

    pub fn streams(&self) -> &[StreamDescriptor] {
        &self.streams
    }

    pub fn assets(&self) -> &AssetTypeGraph {
        &self.assets
    }
}

fn resolve_doc_path(ctx: &DefinitionContext, entry: &RegistryEntry) -> Option<PathBuf> {
    if entry.key.is_empty() {
        return None;
    }
    let folder = ctx.resolver().resolve(&entry.key, &entry.value)?;
    let documents = ctx.documents_dir()?;
    Some(documents.join(folder).join(MODS_DIR))
}
