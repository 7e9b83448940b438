//! The asset-type catalog of one game.
//!
//! Records are stored in one id-keyed map per [`AssetKind`]. Inheritance is
//! reconstructed from data by [`AssetTypeGraph::link`]: the superclass and
//! subclass relations are plain ids resolved through the same map, so the
//! graph may contain cycles without any ownership cycle.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use sage_defs_core::{AssetKind, AssetType};

/// A record in the graph together with its resolved relations.
#[derive(Debug, Clone)]
pub struct AssetTypeNode {
    asset: AssetType,
    superclass: Option<String>,
    subclasses: BTreeSet<String>,
}

impl AssetTypeNode {
    fn new(asset: AssetType) -> Self {
        Self {
            asset,
            superclass: None,
            subclasses: BTreeSet::new(),
        }
    }

    pub fn asset(&self) -> &AssetType {
        &self.asset
    }

    pub fn id(&self) -> &str {
        &self.asset.id
    }

    pub fn kind(&self) -> AssetKind {
        self.asset.kind
    }

    /// Id of the linked parent, if the last link pass found one.
    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    /// Ids of the linked children, in id order.
    pub fn subclasses(&self) -> impl Iterator<Item = &str> {
        self.subclasses.iter().map(String::as_str)
    }

    pub fn has_subclass(&self, id: &str) -> bool {
        self.subclasses.contains(id)
    }
}

type Namespace = BTreeMap<String, AssetTypeNode>;

/// All asset-type records of a game, split by namespace.
#[derive(Debug, Clone, Default)]
pub struct AssetTypeGraph {
    plain: Namespace,
    game_scoped: Namespace,
}

impl AssetTypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn namespace(&self, kind: AssetKind) -> &Namespace {
        match kind {
            AssetKind::Plain => &self.plain,
            AssetKind::GameScoped => &self.game_scoped,
        }
    }

    fn namespace_mut(&mut self, kind: AssetKind) -> &mut Namespace {
        match kind {
            AssetKind::Plain => &mut self.plain,
            AssetKind::GameScoped => &mut self.game_scoped,
        }
    }

    /// Insert a record, replacing any record with the same id and kind.
    ///
    /// The replaced record is unlinked first, so relations involving that id
    /// stay empty until the next [`link`](Self::link).
    pub fn insert(&mut self, asset: AssetType) -> Option<AssetType> {
        let replaced = self.remove(asset.kind, &asset.id);
        self.namespace_mut(asset.kind)
            .insert(asset.id.clone(), AssetTypeNode::new(asset));
        replaced
    }

    /// Insert every record in order; later records win. Returns how many
    /// records were merged.
    pub fn merge(&mut self, records: impl IntoIterator<Item = AssetType>) -> usize {
        let mut merged = 0;
        for asset in records {
            if let Some(previous) = self.insert(asset) {
                log::trace!("replaced {} asset type '{}'", previous.kind, previous.id);
            }
            merged += 1;
        }
        merged
    }

    /// Remove a record and scrub it from the relations of its neighbours.
    pub fn remove(&mut self, kind: AssetKind, id: &str) -> Option<AssetType> {
        let namespace = self.namespace_mut(kind);
        let node = namespace.remove(id)?;
        if let Some(parent) = node.superclass.as_deref() {
            if let Some(parent) = namespace.get_mut(parent) {
                parent.subclasses.remove(id);
            }
        }
        for child in &node.subclasses {
            if let Some(child) = namespace.get_mut(child) {
                child.superclass = None;
            }
        }
        Some(node.asset)
    }

    /// Rebuild superclass/subclass relations from inheritance declarations.
    ///
    /// Each namespace is linked on its own. A declaration naming an id that
    /// is not in the namespace leaves the record without a superclass. Any
    /// previous relations are discarded, so running this twice gives the same
    /// result. Returns the number of links made.
    pub fn link(&mut self) -> usize {
        link_namespace(&mut self.plain) + link_namespace(&mut self.game_scoped)
    }

    pub fn get(&self, kind: AssetKind, id: &str) -> Option<&AssetTypeNode> {
        self.namespace(kind).get(id)
    }

    pub fn contains(&self, kind: AssetKind, id: &str) -> bool {
        self.namespace(kind).contains_key(id)
    }

    pub fn superclass_of(&self, kind: AssetKind, id: &str) -> Option<&AssetTypeNode> {
        let parent = self.get(kind, id)?.superclass()?;
        self.get(kind, parent)
    }

    pub fn subclasses_of(&self, kind: AssetKind, id: &str) -> Vec<&AssetTypeNode> {
        let namespace = self.namespace(kind);
        match namespace.get(id) {
            Some(node) => node
                .subclasses
                .iter()
                .filter_map(|child| namespace.get(child))
                .collect(),
            None => Vec::new(),
        }
    }

    /// The superclass chain of `id`, nearest first.
    ///
    /// Stops at the first record already visited, so a cyclic declaration
    /// yields each member once.
    pub fn ancestors(&self, kind: AssetKind, id: &str) -> Vec<&AssetTypeNode> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut next = self.superclass_of(kind, id);
        while let Some(node) = next {
            if !seen.insert(node.id()) {
                break;
            }
            chain.push(node);
            next = self.superclass_of(kind, node.id());
        }
        chain
    }

    /// Records without a superclass, in id order.
    pub fn roots(&self, kind: AssetKind) -> Vec<&AssetTypeNode> {
        self.iter(kind)
            .filter(|node| node.superclass.is_none())
            .collect()
    }

    /// Records of one namespace, in id order.
    pub fn iter(&self, kind: AssetKind) -> impl Iterator<Item = &AssetTypeNode> {
        self.namespace(kind).values()
    }

    pub fn asset_types(&self) -> impl Iterator<Item = &AssetTypeNode> {
        self.iter(AssetKind::Plain)
    }

    pub fn game_asset_types(&self) -> impl Iterator<Item = &AssetTypeNode> {
        self.iter(AssetKind::GameScoped)
    }

    pub fn count(&self, kind: AssetKind) -> usize {
        self.namespace(kind).len()
    }

    pub fn len(&self) -> usize {
        self.plain.len() + self.game_scoped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn link_namespace(namespace: &mut Namespace) -> usize {
    for node in namespace.values_mut() {
        node.superclass = None;
        node.subclasses.clear();
    }

    let declared: Vec<(String, String)> = namespace
        .values()
        .filter_map(|node| {
            node.asset
                .parent_id()
                .map(|parent| (node.id().to_string(), parent.to_string()))
        })
        .collect();

    let mut linked = 0;
    for (child, parent) in declared {
        let Some(parent_node) = namespace.get_mut(&parent) else {
            log::debug!("asset type '{child}' inherits from unknown type '{parent}'");
            continue;
        };
        if child == parent {
            log::warn!("asset type '{child}' inherits from itself");
        }
        parent_node.subclasses.insert(child.clone());
        if let Some(child_node) = namespace.get_mut(&child) {
            child_node.superclass = Some(parent);
        }
        linked += 1;
    }
    linked
}

#[cfg(test)]
#[path = "tests/graph_tests.rs"]
mod tests;
