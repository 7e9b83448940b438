//! Environment a game definition is loaded in.

use std::path::{Path, PathBuf};

use sage_defs_core::{DefinitionLoader, PlatformPathResolver};
use sage_defs_xml::XmlDefinitionLoader;

use crate::registry::{NoRegistry, StaticRegistry};
use crate::settings::{Settings, resolve_tool_root};

/// Directory under the tool root that holds one folder per game.
pub const GAMES_DIR: &str = "Games";

/// Game manifest file name, inside [`GAMES_DIR`].
pub const MANIFEST_FILE: &str = "GameDefinition.xml";

/// Tool root plus the collaborators used while loading.
///
/// This is the main entry point for using the library: build a context,
/// then load the manifest and game definitions through it.
pub struct DefinitionContext {
    tool_root: PathBuf,
    documents_dir: Option<PathBuf>,
    loader: Box<dyn DefinitionLoader>,
    resolver: Box<dyn PlatformPathResolver>,
}

impl DefinitionContext {
    /// A context rooted at `tool_root`, reading XML definitions, with the
    /// user's documents directory and no registered games.
    pub fn new(tool_root: impl Into<PathBuf>) -> Self {
        Self {
            tool_root: tool_root.into(),
            documents_dir: dirs::document_dir(),
            loader: Box::new(XmlDefinitionLoader),
            resolver: Box::new(NoRegistry),
        }
    }

    /// A context configured from the shared settings file.
    pub fn from_settings(cli_override: Option<PathBuf>) -> Self {
        let settings = Settings::load();
        let tool_root = resolve_tool_root(cli_override, &settings);
        Self::new(tool_root).with_resolver(StaticRegistry::from_settings(&settings))
    }

    pub fn with_loader(mut self, loader: impl DefinitionLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    pub fn with_resolver(mut self, resolver: impl PlatformPathResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_documents_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.documents_dir = dir;
        self
    }

    pub fn tool_root(&self) -> &Path {
        &self.tool_root
    }

    pub fn documents_dir(&self) -> Option<&Path> {
        self.documents_dir.as_deref()
    }

    pub fn loader(&self) -> &dyn DefinitionLoader {
        self.loader.as_ref()
    }

    pub fn resolver(&self) -> &dyn PlatformPathResolver {
        self.resolver.as_ref()
    }

    /// `<tool-root>/Games`
    pub fn games_dir(&self) -> PathBuf {
        self.tool_root.join(GAMES_DIR)
    }

    /// `<tool-root>/Games/<id>`
    pub fn game_dir(&self, id: &str) -> PathBuf {
        self.games_dir().join(id)
    }

    /// `<tool-root>/Games/GameDefinition.xml`
    pub fn manifest_path(&self) -> PathBuf {
        self.games_dir().join(MANIFEST_FILE)
    }
}
