use super::*;

const SAMPLE_MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<GameDefinition xmlns="uri:thundermods.net:WrathEd">
    <Game id="cnc3" ManifestVersion="5" AllTypesHash="2863311530" WorldBuilderVersion="1.02">
        <ThemeColor R="255" G="200" B="0"/>
        <RegistryEntry Key="SOFTWARE\Electronic Arts\Command and Conquer 3" Value="UserDataLeafName"/>
        <Stream Name="static" Description="Static game data" IsNameRequired="false"/>
        <Stream Name="global" Description="Global &amp; shared data" IsNameRequired="true"/>
    </Game>
    <Game id="cnc3ep1" inheritDefinitions="cnc3" ManifestVersion="6" WorldBuilderVersion="1.05"/>
    <Game id="ra3" inheritDefinitions=""/>
</GameDefinition>"#;

#[test]
fn test_parse_games() {
    let games = parse_games(SAMPLE_MANIFEST.as_bytes()).unwrap();
    assert_eq!(games.len(), 3);

    let cnc3 = &games[0];
    assert_eq!(cnc3.id, "cnc3");
    assert_eq!(cnc3.inherit_definitions, None);
    assert_eq!(cnc3.manifest_version, 5);
    assert_eq!(cnc3.all_types_hash, 0xAAAAAAAA);
    assert_eq!(cnc3.world_builder_version, "1.02");
    assert_eq!(cnc3.theme_color, ThemeColor::rgba(255, 200, 0, 255));
    assert_eq!(
        cnc3.registry_entry.key,
        r"SOFTWARE\Electronic Arts\Command and Conquer 3"
    );
    assert_eq!(cnc3.registry_entry.value, "UserDataLeafName");
    assert_eq!(cnc3.streams.len(), 2);
    assert_eq!(cnc3.streams[0].name, "static");
    assert!(!cnc3.streams[0].is_name_required);
    assert_eq!(cnc3.streams[1].description, "Global & shared data");
    assert!(cnc3.streams[1].is_name_required);

    let ep1 = &games[1];
    assert_eq!(ep1.inherit_definitions.as_deref(), Some("cnc3"));
    assert_eq!(ep1.manifest_version, 6);
    assert!(ep1.streams.is_empty());
}

#[test]
fn test_empty_inherit_definitions_is_none() {
    let games = parse_games(SAMPLE_MANIFEST.as_bytes()).unwrap();
    assert_eq!(games[2].id, "ra3");
    assert_eq!(games[2].inherit_definitions, None);
}

#[test]
fn test_missing_root_is_rejected() {
    let xml = r#"<AssetDefinition><AssetType id="A"/></AssetDefinition>"#;
    assert!(matches!(
        parse_games(xml.as_bytes()),
        Err(DefinitionError::InvalidDocument(_))
    ));
}

#[test]
fn test_bad_manifest_version_is_rejected() {
    let xml = r#"<GameDefinition><Game id="a" ManifestVersion="99999"/></GameDefinition>"#;
    assert!(matches!(
        parse_games(xml.as_bytes()),
        Err(DefinitionError::InvalidValue { .. })
    ));
}

#[test]
fn test_bad_boolean_is_rejected() {
    let xml = r#"<GameDefinition>
        <Game id="a"><Stream Name="s" IsNameRequired="maybe"/></Game>
    </GameDefinition>"#;
    assert!(parse_games(xml.as_bytes()).is_err());
}
