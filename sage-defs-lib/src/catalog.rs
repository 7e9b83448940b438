//! The set of games known to the tool, read from the game manifest.

use sage_defs_core::GameSource;
use sage_defs_xml::parse_games_file;

use crate::context::DefinitionContext;
use crate::error::LoadError;
use crate::game::GameDefinition;

/// Manifest records for every known game.
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    games: Vec<GameSource>,
}

impl GameCatalog {
    pub fn from_games(games: Vec<GameSource>) -> Self {
        Self { games }
    }

    /// Read `<tool-root>/Games/GameDefinition.xml`. A missing manifest
    /// gives an empty catalog.
    pub fn load(ctx: &DefinitionContext) -> Result<Self, LoadError> {
        let path = ctx.manifest_path();
        if !path.exists() {
            log::warn!("No game manifest found at {}", path.display());
            return Ok(Self::default());
        }
        let games = parse_games_file(&path).map_err(|source| LoadError::manifest(&path, source))?;
        Ok(Self { games })
    }

    pub fn games(&self) -> &[GameSource] {
        &self.games
    }

    pub fn find(&self, id: &str) -> Option<&GameSource> {
        self.games.iter().find(|game| game.id == id)
    }

    /// Games that inherit `base`'s definitions.
    pub fn derived_from(&self, base: &str) -> Vec<&GameSource> {
        self.games
            .iter()
            .filter(|game| game.base_game() == Some(base))
            .collect()
    }

    /// Load the definition of the selected game, or the "None" definition
    /// when nothing is selected.
    pub fn select<F>(
        &self,
        id: Option<&str>,
        ctx: &DefinitionContext,
        status: F,
    ) -> Result<GameDefinition, LoadError>
    where
        F: FnMut(&str) -> bool,
    {
        let source = match id {
            Some(id) => Some(self.find(id).ok_or_else(|| LoadError::unknown_game(id))?),
            None => None,
        };
        GameDefinition::load(source, ctx, status)
    }
}
