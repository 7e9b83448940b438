//! quick-xml readers for SAGE definition documents.
//!
//! Two document types are understood: asset-definition files
//! (`<AssetDefinition>`, one per `.xml` file under a game's definition tree)
//! and the game manifest (`<GameDefinition>`, listing every known game).

mod attrs;
pub mod asset_definition;
pub mod game_manifest;

pub use asset_definition::{XmlDefinitionLoader, parse_asset_definition, parse_asset_definition_file};
pub use game_manifest::{parse_games, parse_games_file};
