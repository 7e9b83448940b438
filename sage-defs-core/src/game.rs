//! Game manifest records.

/// Display color for a game in the editor UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ThemeColor {
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#RRGGBBAA` hex string.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

/// Machine registry location holding the game's documents folder name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistryEntry {
    pub key: String,
    pub value: String,
}

/// A data stream declared by a game manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamSource {
    pub name: String,
    pub description: String,
    pub is_name_required: bool,
}

/// The stream as exposed by a loaded game definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDescriptor {
    pub id: String,
    pub description: String,
    pub is_name_required: bool,
}

impl From<&StreamSource> for StreamDescriptor {
    fn from(stream: &StreamSource) -> Self {
        Self {
            id: stream.name.clone(),
            description: stream.description.clone(),
            is_name_required: stream.is_name_required,
        }
    }
}

/// One `<Game>` record from the game manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSource {
    pub id: String,
    /// Id of the base game whose definitions this game inherits.
    pub inherit_definitions: Option<String>,
    pub manifest_version: i16,
    pub all_types_hash: u32,
    pub world_builder_version: String,
    pub theme_color: ThemeColor,
    pub registry_entry: RegistryEntry,
    pub streams: Vec<StreamSource>,
}

impl GameSource {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn inheriting(mut self, base: impl Into<String>) -> Self {
        self.inherit_definitions = Some(base.into());
        self
    }

    pub fn with_stream(mut self, stream: StreamSource) -> Self {
        self.streams.push(stream);
        self
    }

    pub fn with_registry_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.registry_entry = RegistryEntry {
            key: key.into(),
            value: value.into(),
        };
        self
    }

    /// The base game id, treating an empty attribute as no inheritance.
    pub fn base_game(&self) -> Option<&str> {
        self.inherit_definitions
            .as_deref()
            .filter(|base| !base.is_empty())
    }
}
