use std::io::BufRead;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use sage_defs_core::{DefinitionError, GameSource, RegistryEntry, StreamSource, ThemeColor};

use crate::attrs::{Attributes, local_name};

const ROOT_ELEMENT: &str = "GameDefinition";

/// Parse the game manifest from a file path.
pub fn parse_games_file(path: &Path) -> Result<Vec<GameSource>, DefinitionError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    parse_games(reader)
}

/// Parse a `<GameDefinition>` manifest into its game records, in document order.
///
/// ```text
/// <GameDefinition>
///   <Game id="cnc3ep1" inheritDefinitions="cnc3" ManifestVersion="5"
///         AllTypesHash="1234" WorldBuilderVersion="1.0">
///     <ThemeColor R="255" G="0" B="0" A="255"/>
///     <RegistryEntry Key="SOFTWARE\Electronic Arts\..." Value="UserDataLeafName"/>
///     <Stream Name="static" Description="Static data" IsNameRequired="false"/>
///   </Game>
/// </GameDefinition>
/// ```
pub fn parse_games<R: BufRead>(reader: R) -> Result<Vec<GameSource>, DefinitionError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut games = Vec::new();
    let mut saw_root = false;
    let mut current: Option<GameSource> = None;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => match local_name(e).as_str() {
                ROOT_ELEMENT => saw_root = true,
                "Game" => current = Some(parse_game_header(e)?),
                _ => {
                    if let Some(game) = current.as_mut() {
                        apply_game_child(game, e)?;
                    }
                }
            },
            Event::Empty(ref e) => match local_name(e).as_str() {
                ROOT_ELEMENT => saw_root = true,
                "Game" => games.push(parse_game_header(e)?),
                _ => {
                    if let Some(game) = current.as_mut() {
                        apply_game_child(game, e)?;
                    }
                }
            },
            Event::End(ref e) => {
                if e.local_name().as_ref() == b"Game" {
                    if let Some(game) = current.take() {
                        games.push(game);
                    }
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

    Ok(games)
}

fn parse_game_header(e: &BytesStart<'_>) -> Result<GameSource, DefinitionError> {
    let attrs = Attributes::read(e)?;
    Ok(GameSource {
        id: attrs.required("id")?,
        inherit_definitions: attrs
            .optional("inheritDefinitions")
            .filter(|base| !base.is_empty()),
        manifest_version: attrs.parse("ManifestVersion")?.unwrap_or_default(),
        all_types_hash: attrs.parse("AllTypesHash")?.unwrap_or_default(),
        world_builder_version: attrs.optional("WorldBuilderVersion").unwrap_or_default(),
        ..GameSource::default()
    })
}

fn apply_game_child(game: &mut GameSource, e: &BytesStart<'_>) -> Result<(), DefinitionError> {
    let attrs = Attributes::read(e)?;
    match attrs.element() {
        "ThemeColor" => {
            game.theme_color = ThemeColor {
                r: attrs.parse("R")?.unwrap_or_default(),
                g: attrs.parse("G")?.unwrap_or_default(),
                b: attrs.parse("B")?.unwrap_or_default(),
                a: attrs.parse("A")?.unwrap_or(u8::MAX),
            };
        }
        "RegistryEntry" => {
            game.registry_entry = RegistryEntry {
                key: attrs.required("Key")?,
                value: attrs.required("Value")?,
            };
        }
        "Stream" => game.streams.push(StreamSource {
            name: attrs.required("Name")?,
            description: attrs.optional("Description").unwrap_or_default(),
            is_name_required: attrs.parse_bool("IsNameRequired")?.unwrap_or(false),
        }),
        other => log::debug!("ignoring <{other}> in game '{}'", game.id),
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/game_manifest_tests.rs"]
mod tests;
