//! Loading and linking of SAGE asset-type definitions.
//!
//! A game's catalog is built in two phases. First its definition tree
//! (`<tool-root>/Games/<id>`) and, when it inherits, the non-overridden part
//! of its base game's tree are merged into an [`AssetTypeGraph`]. Then the
//! graph is linked: every record whose first entry declares a parent gets a
//! superclass, and the parent gets it as a subclass.

pub mod catalog;
pub mod context;
pub mod error;
pub mod game;
pub mod graph;
pub mod registry;
pub mod settings;
pub mod walker;

pub use catalog::GameCatalog;
pub use context::{DefinitionContext, GAMES_DIR, MANIFEST_FILE};
pub use error::LoadError;
pub use game::{GameDefinition, NONE_GAME_ID};
pub use graph::{AssetTypeGraph, AssetTypeNode};
pub use registry::{NoRegistry, StaticRegistry};
pub use settings::Settings;
pub use walker::{DefinitionTreeWalker, WalkStats};

// Re-export the model so frontends only need this crate.
pub use sage_defs_core::{
    AssetKind, AssetType, DefinitionError, DefinitionLoader, Entry, GameSource,
    PlatformPathResolver, StreamDescriptor, ThemeColor,
};
