use std::path::Path;

use sage_defs_core::DefinitionError;
use thiserror::Error;

/// Errors that can occur while loading a game's definitions.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A directory in the definition tree could not be listed
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A definition file failed to load; aborts the whole load
    #[error("Failed to load definition file {path}: {source}")]
    Definition {
        path: String,
        source: DefinitionError,
    },

    /// The game manifest could not be read
    #[error("Failed to read game manifest {path}: {source}")]
    Manifest {
        path: String,
        source: DefinitionError,
    },

    /// A definition root exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// The requested game is not in the manifest
    #[error("Unknown game: {0}")]
    UnknownGame(String),
}

impl LoadError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn definition(path: &Path, source: DefinitionError) -> Self {
        Self::Definition {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn manifest(path: &Path, source: DefinitionError) -> Self {
        Self::Manifest {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn unknown_game(id: impl Into<String>) -> Self {
        Self::UnknownGame(id.into())
    }
}
