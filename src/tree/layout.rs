// Wed Jan 14 2026 - Alex

use crate::diagnostics::Diagnostics;
use crate::tree::{NodeId, TreeError, TypeTree};
use indexmap::IndexSet;
use std::collections::HashMap;

/// (full name, generic arity, is receiver holder)
type GroupKey = (String, usize, bool);

/// One emitted declaration. Distinct generic instantiations of the same open
/// type are members of a single group.
#[derive(Debug, Clone)]
pub struct DeclGroup {
    pub primary: NodeId,
    pub members: Vec<NodeId>,
    pub children: Vec<usize>,
}

impl DeclGroup {
    fn new(primary: NodeId) -> Self {
        Self {
            primary,
            members: vec![primary],
            children: Vec::new(),
        }
    }
}

/// Placement of every emittable node: root-level declarations, nested
/// declarations and the flat list of extension holders.
#[derive(Debug, Clone, Default)]
pub struct TreeLayout {
    pub groups: Vec<DeclGroup>,
    pub roots: IndexSet<usize>,
    pub extension_holders: IndexSet<usize>,
    by_key: HashMap<GroupKey, usize>,
    by_node: HashMap<NodeId, usize>,
}

impl TreeLayout {
    pub fn build(tree: &TypeTree, diagnostics: &mut Diagnostics) -> Self {
        let mut layout = Self::default();

        let mut stack: Vec<NodeId> = tree.root().children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = tree.node(id);
            if node.full_name.is_empty() || node.is_pointer() || node.placeholder {
                continue;
            }
            layout.place(tree, id, diagnostics);
            stack.extend(node.children.iter().rev().copied());
        }

        for node in tree.nodes().filter(|n| n.receiver.is_some() && !n.is_array()) {
            layout.place(tree, node.id, diagnostics);
        }

        layout
    }

    fn place(&mut self, tree: &TypeTree, id: NodeId, diagnostics: &mut Diagnostics) {
        let node = tree.node(id);
        let key: GroupKey = (node.full_name.clone(), node.generic_arity, node.receiver.is_some() && !node.is_array());

        if let Some(index) = self.by_key.get(&key) {
            let index = *index;
            if !self.groups[index].members.contains(&id) {
                self.groups[index].members.push(id);
            }
            self.by_node.insert(id, index);
            return;
        }

        let index = self.groups.len();
        self.groups.push(DeclGroup::new(id));
        self.by_key.insert(key, index);
        self.by_node.insert(id, index);

        if node.classification.is_extension() {
            self.extension_holders.insert(index);
        } else if node.classification.is_namespace() || node.namespace_name.is_empty() {
            self.roots.insert(index);
        } else {
            match self.by_key.get(&(node.namespace_name.clone(), 0, false)) {
                Some(parent) => self.groups[*parent].children.push(index),
                None => diagnostics.report(&TreeError::ParentNotFound(node.namespace_name.clone())),
            }
        }
    }

    pub fn group(&self, index: usize) -> &DeclGroup {
        &self.groups[index]
    }

    pub fn group_of(&self, id: NodeId) -> Option<&DeclGroup> {
        self.by_node.get(&id).map(|i| &self.groups[*i])
    }

    pub fn find_group(&self, full_name: &str, arity: usize) -> Option<&DeclGroup> {
        self.by_key.get(&(full_name.to_string(), arity, false)).map(|i| &self.groups[*i])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{ManifestResolver, TypeEntry};
    use crate::tree::classify;

    fn resolver() -> ManifestResolver {
        ManifestResolver::new()
            .with_type(TypeEntry::value("System.Int32"))
            .with_type(TypeEntry::class("System.String"))
            .with_type(TypeEntry::class("System.Int32[]"))
            .with_type(TypeEntry::class("UnityEngine.Transform"))
            .with_type(TypeEntry::class("UnityEngine.ParticleSystem"))
            .with_type(TypeEntry::value("UnityEngine.ParticleSystem.MainModule"))
            .with_type(TypeEntry::class("System.Collections.Generic.List<System.Int32>"))
            .with_type(TypeEntry::class("System.Collections.Generic.List<System.String>"))
    }

    fn build(names: &[&str]) -> (TypeTree, TreeLayout) {
        let resolver = resolver();
        let mut tree = TypeTree::new();
        for name in names {
            tree.get_or_create(name, &resolver);
        }
        classify::classify_all(&mut tree, &resolver);
        let mut diagnostics = Diagnostics::new();
        let layout = TreeLayout::build(&tree, &mut diagnostics);
        assert!(!diagnostics.has_errors());
        (tree, layout)
    }

    #[test]
    fn test_namespaces_are_roots() {
        let (tree, layout) = build(&["UnityEngine.Transform", "UnityEngine.ParticleSystem.MainModule"]);
        let roots: Vec<String> = layout.roots.iter()
            .map(|i| tree.node(layout.group(*i).primary).full_name.clone())
            .collect();
        assert_eq!(roots, vec!["UnityEngine"]);

        let particle = layout.find_group("UnityEngine.ParticleSystem", 0).unwrap();
        assert_eq!(particle.children.len(), 1);
        let namespace = layout.find_group("UnityEngine", 0).unwrap();
        assert_eq!(namespace.children.len(), 2);
    }

    #[test]
    fn test_generic_instantiations_share_a_group() {
        let (_, layout) = build(&[
            "System.Collections.Generic.List<System.Int32>",
            "System.Collections.Generic.List<System.String>",
        ]);
        let list = layout.find_group("System.Collections.Generic.List", 1).unwrap();
        assert_eq!(list.members.len(), 2);
    }

    #[test]
    fn test_arrays_are_extension_holders() {
        let (tree, layout) = build(&["System.Int32[]"]);
        assert_eq!(layout.extension_holders.len(), 1);
        let holder = layout.group(layout.extension_holders[0]);
        assert_eq!(tree.node(holder.primary).full_name, "System.Int32[]");

        let system = layout.find_group("System", 0).unwrap();
        assert_eq!(system.children.len(), 1);
    }

    #[test]
    fn test_missing_parent_reported() {
        let resolver = resolver();
        let mut tree = TypeTree::new();
        let transform = tree.get_or_create("UnityEngine.Transform", &resolver);
        tree.get_or_create("UnityEngine.ParticleSystem", &resolver);
        tree.node_mut(transform).namespace_name = "UnityEngine.Missing".to_string();
        classify::classify_all(&mut tree, &resolver);

        let mut diagnostics = Diagnostics::new();
        let layout = TreeLayout::build(&tree, &mut diagnostics);

        assert_eq!(diagnostics.error_count(), 1);
        assert!(diagnostics.contains("Parent class not created UnityEngine.Missing"));
        let namespace = layout.find_group("UnityEngine", 0).unwrap();
        assert_eq!(namespace.children.len(), 1);
        assert!(layout.find_group("UnityEngine.ParticleSystem", 0).is_some());
    }

    #[test]
    fn test_pointer_nodes_skipped() {
        let (_, layout) = build(&["System.Char*"]);
        assert!(layout.find_group("System.Char*", 0).is_none());
        assert!(layout.find_group("System", 0).is_some());
    }
}
