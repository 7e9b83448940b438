use thiserror::Error;

use sage_defs_lib::LoadError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Manifest or definition loading failed
    #[error("{0}")]
    Load(#[from] LoadError),

    /// Asset type id not present in the loaded game
    #[error("Unknown asset type: {0}")]
    UnknownAssetType(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn unknown_asset_type(msg: impl Into<String>) -> Self {
        Self::UnknownAssetType(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
