//! Shared application settings (tool root, registry overrides).
//!
//! The settings file is `~/.config/sage-defs/settings.toml`:
//!
//! ```text
//! [tools]
//! root = "/opt/wrathed"
//!
//! [registry]
//! "SOFTWARE\\Electronic Arts\\Command and Conquer 3\\UserDataLeafName" = "Command & Conquer 3"
//! ```
//!
//! Registry entries are keyed `<key>\<value>` and hold the data a machine
//! registry would return for that key/value pair.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Parsed contents of the settings file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub tools: ToolSettings,
    #[serde(default)]
    pub registry: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolSettings {
    /// Directory containing the `Games/` tree.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl Settings {
    /// Load the shared settings file; missing or unreadable files give defaults.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Canonical path to the shared settings file: `~/.config/sage-defs/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("sage-defs").join("settings.toml")
}

/// Resolve the tool root using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `tools.root` in `settings.toml`
/// 3. Directory of the running executable
/// 4. Current working directory
pub fn resolve_tool_root(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = settings.tools.root.clone().filter(|p| !p.as_os_str().is_empty()) {
        return p;
    }
    if let Some(dir) = executable_dir() {
        return dir;
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn executable_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// Save (or clear) the tool root in the shared settings file.
pub fn save_tool_root(path: Option<&Path>) -> io::Result<()> {
    save_tool_root_to(&settings_path(), path)
}

/// Save (or clear) `tools.root` in the given settings file.
///
/// Uses `toml::Value` for a surgical update so the `[registry]` table and
/// any unknown fields are preserved.
pub fn save_tool_root_to(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let tools = table
        .entry("tools")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let tools_table = tools
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[tools] is not a table"))?;

    match path {
        Some(p) => {
            tools_table.insert(
                "root".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            tools_table.remove("root");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load_from(&tmp.path().join("settings.toml"));
        assert!(settings.tools.root.is_none());
        assert!(settings.registry.is_empty());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[tools\nroot = ").unwrap();
        let settings = Settings::load_from(&path);
        assert!(settings.tools.root.is_none());
    }

    #[test]
    fn reads_root_and_registry() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(
            &path,
            r#"
[tools]
root = "/opt/wrathed"

[registry]
"SOFTWARE\\EA\\cnc3\\UserDataLeafName" = "Command & Conquer 3"
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.tools.root, Some(PathBuf::from("/opt/wrathed")));
        assert_eq!(
            settings
                .registry
                .get(r"SOFTWARE\EA\cnc3\UserDataLeafName")
                .map(String::as_str),
            Some("Command & Conquer 3")
        );
    }

    #[test]
    fn cli_override_wins() {
        let settings = Settings {
            tools: ToolSettings {
                root: Some(PathBuf::from("/from/settings")),
            },
            ..Settings::default()
        };
        assert_eq!(
            resolve_tool_root(Some(PathBuf::from("/from/cli")), &settings),
            PathBuf::from("/from/cli")
        );
        assert_eq!(
            resolve_tool_root(None, &settings),
            PathBuf::from("/from/settings")
        );
    }

    #[test]
    fn save_and_clear_root_preserves_registry() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[registry]\n\"K\\\\V\" = \"Folder\"\n").unwrap();

        save_tool_root_to(&path, Some(Path::new("/opt/tools"))).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.tools.root, Some(PathBuf::from("/opt/tools")));
        assert_eq!(settings.registry.len(), 1);

        save_tool_root_to(&path, None).unwrap();
        let settings = Settings::load_from(&path);
        assert!(settings.tools.root.is_none());
        assert_eq!(settings.registry.len(), 1);
    }
}
