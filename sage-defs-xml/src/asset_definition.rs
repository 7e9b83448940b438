use std::io::BufRead;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use sage_defs_core::{AssetKind, AssetType, DefinitionError, DefinitionLoader, Entry};

use crate::attrs::{Attributes, local_name};

const ROOT_ELEMENT: &str = "AssetDefinition";

/// [`DefinitionLoader`] for WrathEd-style `<AssetDefinition>` XML files.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDefinitionLoader;

impl DefinitionLoader for XmlDefinitionLoader {
    fn load(&self, path: &Path) -> Result<Vec<AssetType>, DefinitionError> {
        parse_asset_definition_file(path)
    }
}

/// Parse an asset-definition file from a path.
pub fn parse_asset_definition_file(path: &Path) -> Result<Vec<AssetType>, DefinitionError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    parse_asset_definition(reader)
}

/// Parse an asset-definition document.
///
/// Expected shape:
/// ```text
/// <AssetDefinition>
///   <AssetType id="Tank" TypeHash="1234">
///     <EntryInheritance AssetType="Vehicle"/>
///     <Entry id="Speed" AssetType="Float" Default="10"/>
///   </AssetType>
///   <GameAssetType id="GameData"> ... </GameAssetType>
/// </AssetDefinition>
/// ```
///
/// Records are returned in document order. Only direct children of a record
/// element become entries; anything nested inside an entry is skipped.
pub fn parse_asset_definition<R: BufRead>(reader: R) -> Result<Vec<AssetType>, DefinitionError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut records = Vec::new();
    let mut saw_root = false;

    // Record currently open, and how far below it the reader is.
    let mut current: Option<AssetType> = None;
    let mut depth = 0usize;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => match current.as_mut() {
                Some(asset) => {
                    if depth == 0 {
                        asset.entries.push(parse_entry(e)?);
                    }
                    depth += 1;
                }
                None => {
                    let name = local_name(e);
                    if name == ROOT_ELEMENT {
                        saw_root = true;
                    } else if let Some(kind) = kind_for_element(&name) {
                        current = Some(parse_asset_header(e, kind)?);
                        depth = 0;
                    }
                }
            },
            Event::Empty(ref e) => match current.as_mut() {
                Some(asset) => {
                    if depth == 0 {
                        asset.entries.push(parse_entry(e)?);
                    }
                }
                None => {
                    let name = local_name(e);
                    if name == ROOT_ELEMENT {
                        saw_root = true;
                    } else if let Some(kind) = kind_for_element(&name) {
                        records.push(parse_asset_header(e, kind)?);
                    }
                }
            },
            Event::End(_) => {
                if depth > 0 {
                    depth -= 1;
                } else if let Some(asset) = current.take() {
                    records.push(asset);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(DefinitionError::invalid_document(format!(
            "missing <{ROOT_ELEMENT}> root element"
        )));
    }

    log::trace!("parsed {} asset type record(s)", records.len());
    Ok(records)
}

fn kind_for_element(name: &str) -> Option<AssetKind> {
    AssetKind::all()
        .iter()
        .copied()
        .find(|kind| kind.element_name() == name)
}

fn parse_asset_header(e: &BytesStart<'_>, kind: AssetKind) -> Result<AssetType, DefinitionError> {
    let attrs = Attributes::read(e)?;
    let mut asset = AssetType::new(attrs.required("id")?, kind);
    asset.type_hash = attrs.parse("TypeHash")?;
    Ok(asset)
}

fn parse_entry(e: &BytesStart<'_>) -> Result<Entry, DefinitionError> {
    let attrs = Attributes::read(e)?;
    let entry = match attrs.element() {
        "EntryInheritance" => Entry::Inheritance {
            asset_type: attrs.required("AssetType")?,
        },
        "Entry" => Entry::Field {
            id: attrs.required("id")?,
            asset_type: attrs.required("AssetType")?,
            default: attrs.optional("Default"),
        },
        "EntryList" => Entry::List {
            id: attrs.required("id")?,
            asset_type: attrs.required("AssetType")?,
            min_length: attrs.parse("MinLength")?,
            max_length: attrs.parse("MaxLength")?,
        },
        "EntryReference" => Entry::Reference {
            id: attrs.required("id")?,
            asset_type: attrs.required("AssetType")?,
        },
        "EntryWeakReference" => Entry::WeakReference {
            id: attrs.required("id")?,
            asset_type: attrs.required("AssetType")?,
        },
        "EntryFile" => Entry::File {
            id: attrs.required("id")?,
        },
        other => Entry::Other {
            tag: other.to_string(),
            id: attrs.optional("id"),
        },
    };
    Ok(entry)
}

#[cfg(test)]
#[path = "tests/asset_definition_tests.rs"]
mod tests;
