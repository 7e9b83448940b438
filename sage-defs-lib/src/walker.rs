//! Recursive walk over a game's definition tree.
//!
//! Every definition file under a root is parsed and merged into an
//! [`AssetTypeGraph`]. Within a directory, subdirectories are walked first
//! (fully, depth-first) and the directory's own files after them. Siblings
//! are visited in file-name order, so when two files of the same tree
//! declare the same id, the later file name wins.
//!
//! An inherited walk goes over a base game's tree but skips every base file
//! that the derived game overrides with a same-named file at the same
//! relative location. Overrides replace the whole file; nothing is merged
//! field by field.

use std::path::{Path, PathBuf};

use sage_defs_core::{DefinitionLoader, is_definition_file};

use crate::error::LoadError;
use crate::graph::AssetTypeGraph;

/// Counters for one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Definition files parsed and merged.
    pub files_loaded: usize,
    /// Base files skipped because the derived tree overrides them.
    pub files_shadowed: usize,
    /// Records merged into the graph, counting replacements.
    pub records_merged: usize,
}

/// Walks definition trees, feeding parsed records into a graph.
///
/// `status` is called with the file name (no directory) just before each
/// file is parsed. Its return value is not acted on.
pub struct DefinitionTreeWalker<'a> {
    loader: &'a dyn DefinitionLoader,
    status: &'a mut dyn FnMut(&str) -> bool,
}

impl<'a> DefinitionTreeWalker<'a> {
    pub fn new(loader: &'a dyn DefinitionLoader, status: &'a mut dyn FnMut(&str) -> bool) -> Self {
        Self { loader, status }
    }

    /// Merge every definition file under `root`.
    ///
    /// A missing root contributes nothing. The first file that fails to
    /// load aborts the walk.
    pub fn walk(&mut self, root: &Path, graph: &mut AssetTypeGraph) -> Result<WalkStats, LoadError> {
        self.walk_tree(root, None, graph)
    }

    /// Merge the definition files under `base_root` that `derived_root`
    /// does not override.
    pub fn walk_inherited(
        &mut self,
        base_root: &Path,
        derived_root: &Path,
        graph: &mut AssetTypeGraph,
    ) -> Result<WalkStats, LoadError> {
        self.walk_tree(base_root, Some(derived_root), graph)
    }

    fn walk_tree(
        &mut self,
        root: &Path,
        shadow_root: Option<&Path>,
        graph: &mut AssetTypeGraph,
    ) -> Result<WalkStats, LoadError> {
        let mut stats = WalkStats::default();
        if !root.exists() {
            log::debug!("definition root {} does not exist", root.display());
            return Ok(stats);
        }
        if !root.is_dir() {
            return Err(LoadError::NotADirectory(root.display().to_string()));
        }
        self.visit(root, Path::new(""), shadow_root, graph, &mut stats)?;
        Ok(stats)
    }

    fn visit(
        &mut self,
        dir: &Path,
        relative: &Path,
        shadow_root: Option<&Path>,
        graph: &mut AssetTypeGraph,
        stats: &mut WalkStats,
    ) -> Result<(), LoadError> {
        let (subdirs, files) = list_sorted(dir)?;

        for subdir in &subdirs {
            let Some(name) = subdir.file_name() else {
                continue;
            };
            self.visit(subdir, &relative.join(name), shadow_root, graph, stats)?;
        }

        for file in files.iter().filter(|p| is_definition_file(p)) {
            let Some(name) = file.file_name() else {
                continue;
            };

            if let Some(shadow_root) = shadow_root {
                let shadow = shadow_root.join(relative).join(name);
                if shadow.is_file() {
                    log::debug!(
                        "skipping {}: overridden by {}",
                        file.display(),
                        shadow.display()
                    );
                    stats.files_shadowed += 1;
                    continue;
                }
            }

            (self.status)(&*name.to_string_lossy());
            log::debug!("loading {}", file.display());
            let records = self
                .loader
                .load(file)
                .map_err(|source| LoadError::definition(file, source))?;
            stats.records_merged += graph.merge(records);
            stats.files_loaded += 1;
        }

        Ok(())
    }
}

/// List a directory, split into (subdirectories, files), each sorted by name.
fn list_sorted(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>), LoadError> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| LoadError::io(dir, e))?
        .flatten()
        .map(|e| e.path())
        .collect();
    entries.sort();
    Ok(entries.into_iter().partition(|p| p.is_dir()))
}

#[cfg(test)]
#[path = "tests/walker_tests.rs"]
mod tests;
