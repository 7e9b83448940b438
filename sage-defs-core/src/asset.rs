//! Asset-type records as produced by a definition loader.
//!
//! A record is a flat list of entries. Only the first entry carries meaning
//! for the catalog: when it is an [`Entry::Inheritance`], it names the
//! record's parent type in the same [`AssetKind`] namespace.

use std::fmt;
use std::str::FromStr;

/// Namespace an asset type belongs to.
///
/// Plain and game-scoped asset types live side by side in a catalog but
/// never inherit from one another, even when their ids coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    /// Declared with `<AssetType>`.
    Plain,
    /// Declared with `<GameAssetType>`.
    GameScoped,
}

impl AssetKind {
    /// Both namespaces, plain first.
    pub fn all() -> &'static [AssetKind] {
        &[AssetKind::Plain, AssetKind::GameScoped]
    }

    /// XML element name that declares a record of this kind.
    pub fn element_name(&self) -> &'static str {
        match self {
            AssetKind::Plain => "AssetType",
            AssetKind::GameScoped => "GameAssetType",
        }
    }

    /// Short lowercase name used on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            AssetKind::Plain => "plain",
            AssetKind::GameScoped => "game",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Error returned when parsing an unknown asset kind string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown asset kind: '{0}'")]
pub struct AssetKindParseError(pub String);

impl FromStr for AssetKind {
    type Err = AssetKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "asset" | "assettype" => Ok(AssetKind::Plain),
            "game" | "game-scoped" | "gameassettype" => Ok(AssetKind::GameScoped),
            _ => Err(AssetKindParseError(s.to_string())),
        }
    }
}

/// One entry of an asset-type record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// `<EntryInheritance AssetType="..."/>`: the parent type's id.
    Inheritance { asset_type: String },
    /// `<Entry>`: a scalar field.
    Field {
        id: String,
        asset_type: String,
        default: Option<String>,
    },
    /// `<EntryList>`: a bounded list of values.
    List {
        id: String,
        asset_type: String,
        min_length: Option<u32>,
        max_length: Option<u32>,
    },
    /// `<EntryReference>`: a strong reference to another asset.
    Reference { id: String, asset_type: String },
    /// `<EntryWeakReference>`: a reference resolved lazily by the game.
    WeakReference { id: String, asset_type: String },
    /// `<EntryFile>`: a path to a file on disk.
    File { id: String },
    /// Any other entry element, kept by tag name.
    Other { tag: String, id: Option<String> },
}

impl Entry {
    pub fn inheritance(parent: impl Into<String>) -> Self {
        Entry::Inheritance {
            asset_type: parent.into(),
        }
    }

    pub fn field(id: impl Into<String>, asset_type: impl Into<String>) -> Self {
        Entry::Field {
            id: id.into(),
            asset_type: asset_type.into(),
            default: None,
        }
    }

    /// The entry's own id. Inheritance declarations have none.
    pub fn id(&self) -> Option<&str> {
        match self {
            Entry::Inheritance { .. } => None,
            Entry::Field { id, .. }
            | Entry::List { id, .. }
            | Entry::Reference { id, .. }
            | Entry::WeakReference { id, .. }
            | Entry::File { id } => Some(id),
            Entry::Other { id, .. } => id.as_deref(),
        }
    }

    /// XML element name of the entry.
    pub fn tag_name(&self) -> &str {
        match self {
            Entry::Inheritance { .. } => "EntryInheritance",
            Entry::Field { .. } => "Entry",
            Entry::List { .. } => "EntryList",
            Entry::Reference { .. } => "EntryReference",
            Entry::WeakReference { .. } => "EntryWeakReference",
            Entry::File { .. } => "EntryFile",
            Entry::Other { tag, .. } => tag,
        }
    }
}

/// A single asset-type record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetType {
    pub id: String,
    pub kind: AssetKind,
    /// `TypeHash` attribute, when the definition provides one.
    pub type_hash: Option<u32>,
    pub entries: Vec<Entry>,
}

impl AssetType {
    pub fn new(id: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            id: id.into(),
            kind,
            type_hash: None,
            entries: Vec::new(),
        }
    }

    /// Make this record inherit from `parent` by placing an inheritance
    /// declaration in front of its entries.
    pub fn inheriting(mut self, parent: impl Into<String>) -> Self {
        self.entries.insert(0, Entry::inheritance(parent));
        self
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn with_type_hash(mut self, hash: u32) -> Self {
        self.type_hash = Some(hash);
        self
    }

    /// Id of the declared parent type.
    ///
    /// Only the first entry is consulted; an inheritance declaration in any
    /// other position is ordinary data.
    pub fn parent_id(&self) -> Option<&str> {
        match self.entries.first() {
            Some(Entry::Inheritance { asset_type }) => Some(asset_type),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/asset_tests.rs"]
mod tests;
