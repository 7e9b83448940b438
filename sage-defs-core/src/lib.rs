//! Shared data model for SAGE asset-type definitions.
//!
//! The types here describe what a definition loader produces (asset-type
//! records and their entries) and what a game manifest provides (the source
//! record a game definition is built from). The two collaborator traits,
//! [`DefinitionLoader`] and [`PlatformPathResolver`], are the seams the
//! loading pipeline in `sage-defs-lib` is built around.

use std::path::Path;

pub mod asset;
pub mod error;
pub mod game;

pub use asset::{AssetKind, AssetKindParseError, AssetType, Entry};
pub use error::DefinitionError;
pub use game::{GameSource, RegistryEntry, StreamDescriptor, StreamSource, ThemeColor};

/// File extension (without the dot) of asset-definition files.
pub const DEFINITION_EXTENSION: &str = "xml";

/// Returns true if the path carries the definition-file extension.
///
/// The comparison is ASCII case-insensitive so `Units.XML` participates
/// the same way `units.xml` does.
pub fn is_definition_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(DEFINITION_EXTENSION))
        .unwrap_or(false)
}

/// Parses one definition file into the asset-type records it declares.
///
/// Implementors must not keep the file open after returning, including on
/// the error path.
pub trait DefinitionLoader {
    fn load(&self, path: &Path) -> Result<Vec<AssetType>, DefinitionError>;
}

impl<F> DefinitionLoader for F
where
    F: Fn(&Path) -> Result<Vec<AssetType>, DefinitionError>,
{
    fn load(&self, path: &Path) -> Result<Vec<AssetType>, DefinitionError> {
        self(path)
    }
}

/// Looks up platform registration data for a game.
///
/// `key` is the registry key path and `value` the value name from the
/// game's [`RegistryEntry`]. Returns the stored data (the name of the game's
/// folder under the user's documents directory), or `None` when the game is
/// not registered on this machine.
pub trait PlatformPathResolver {
    fn resolve(&self, key: &str, value: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_extension_is_case_insensitive() {
        assert!(is_definition_file(Path::new("Games/cnc3/units.xml")));
        assert!(is_definition_file(Path::new("Units.XML")));
        assert!(!is_definition_file(Path::new("readme.txt")));
        assert!(!is_definition_file(Path::new("xml")));
        assert!(!is_definition_file(Path::new("units.xml.bak")));
    }

    #[test]
    fn closures_are_loaders() {
        let loader = |_: &Path| -> Result<Vec<AssetType>, DefinitionError> {
            Ok(vec![AssetType::new("Infantry", AssetKind::Plain)])
        };
        let records = loader.load(Path::new("unit.xml")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "Infantry");
    }
}
