// Wed Jan 14 2026 - Alex

use crate::diagnostics::Diagnostics;
use crate::resolver::{TypeId, TypeResolver};
use crate::tree::{NodeId, TypeTree};
use std::collections::{HashSet, VecDeque};

/// Walks the ancestry of `type_id`, starting one level above it, and returns
/// the first ancestor that can be bound by name. The universal root
/// (the ancestor without an ancestor of its own) is never returned.
pub fn find_base(resolver: &dyn TypeResolver, type_id: TypeId) -> Option<TypeId> {
    let mut current = resolver.ancestor(type_id);

    while let Some(ancestor) = current {
        let next = resolver.ancestor(ancestor);
        if next.is_none() {
            return None;
        }
        if resolver.is_bindable(ancestor) {
            return Some(ancestor);
        }
        current = next;
    }

    None
}

/// Declared interfaces that can be bound by name, in declaration order.
pub fn bindable_interfaces(resolver: &dyn TypeResolver, type_id: TypeId) -> Vec<TypeId> {
    resolver.declared_interfaces(type_id)
        .into_iter()
        .filter(|i| resolver.is_bindable(*i))
        .collect()
}

/// Fills `base_type` and `interfaces` for every bound node. Base and interface
/// types missing from the tree are created, bound and processed in turn.
pub fn recover(tree: &mut TypeTree, resolver: &dyn TypeResolver, diagnostics: &mut Diagnostics) {
    let mut visited = HashSet::new();
    let mut queue: VecDeque<NodeId> = tree.ids().collect();

    while let Some(id) = queue.pop_front() {
        if !visited.insert(id) {
            continue;
        }

        let node = tree.node(id);
        let Some(type_id) = node.binding else { continue };
        if node.is_array() || node.receiver.is_some() {
            continue;
        }
        if resolver.is_enum(type_id) {
            continue;
        }
        // Structs keep their interfaces but never name a base.
        let is_interface = resolver.is_interface(type_id);
        let is_struct = resolver.is_value_type(type_id) && !is_interface;

        if !is_interface && !is_struct {
            if let Some(base) = find_base(resolver, type_id) {
                let base_node = node_for_type(tree, resolver, base, diagnostics, &mut queue);
                tree.node_mut(id).base_type = Some(base_node);
            }
        }

        for interface in bindable_interfaces(resolver, type_id) {
            let interface_node = node_for_type(tree, resolver, interface, diagnostics, &mut queue);
            if interface_node != id {
                tree.node_mut(id).interfaces.insert(interface_node);
            }
        }
    }
}

fn node_for_type(
    tree: &mut TypeTree,
    resolver: &dyn TypeResolver,
    type_id: TypeId,
    diagnostics: &mut Diagnostics,
    queue: &mut VecDeque<NodeId>,
) -> NodeId {
    let before = tree.len();
    let id = tree.get_or_create(&resolver.full_name(type_id), resolver);
    if let Err(e) = tree.bind(id, type_id, resolver) {
        diagnostics.report(&e);
    }

    queue.extend((before..tree.len()).map(NodeId));
    queue.push_back(id);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{ManifestResolver, TypeEntry};

    fn resolver() -> ManifestResolver {
        ManifestResolver::new()
            .with_type(TypeEntry::class("System.Object"))
            .with_type(TypeEntry::class("UnityEngine.Object").with_base("System.Object"))
            .with_type(TypeEntry::class("UnityEngine.Component").with_base("UnityEngine.Object"))
            .with_type(TypeEntry::class("UnityEngine.Behaviour").with_base("UnityEngine.Component").unresolvable())
            .with_type(TypeEntry::class("UnityEngine.Camera").with_base("UnityEngine.Behaviour"))
            .with_type(TypeEntry::interface("System.Collections.IEnumerable"))
            .with_type(TypeEntry::interface("System.Collections.Generic.IEnumerable<UnityEngine.Component>")
                .with_interface("System.Collections.IEnumerable"))
            .with_type(TypeEntry::interface("System.IHidden").unresolvable())
            .with_type(TypeEntry::class("UnityEngine.Transform")
                .with_base("UnityEngine.Component")
                .with_interface("System.Collections.Generic.IEnumerable<UnityEngine.Component>")
                .with_interface("System.IHidden"))
            .with_type(TypeEntry::interface("UnityEngine.IFoo"))
            .with_type(TypeEntry::value("UnityEngine.Vector3")
                .with_base("System.ValueType")
                .with_interface("UnityEngine.IFoo"))
    }

    #[test]
    fn test_find_base_skips_unbindable_ancestors() {
        let resolver = resolver();
        let camera = resolver.find_by_full_name("UnityEngine.Camera").unwrap();
        let base = find_base(&resolver, camera).unwrap();
        assert_eq!(resolver.full_name(base), "UnityEngine.Component");
    }

    #[test]
    fn test_universal_root_is_never_a_base() {
        let resolver = resolver();
        let object = resolver.find_by_full_name("UnityEngine.Object").unwrap();
        assert!(find_base(&resolver, object).is_none());
        let root = resolver.find_by_full_name("System.Object").unwrap();
        assert!(find_base(&resolver, root).is_none());
    }

    #[test]
    fn test_recover_creates_missing_nodes() {
        let resolver = resolver();
        let mut tree = TypeTree::new();
        let mut diagnostics = Diagnostics::new();
        let transform = tree.get_or_create("UnityEngine.Transform", &resolver);
        let vector = tree.get_or_create("UnityEngine.Vector3", &resolver);

        recover(&mut tree, &resolver, &mut diagnostics);

        let base = tree.node(transform).base_type.unwrap();
        assert_eq!(tree.node(base).full_name, "UnityEngine.Component");
        assert!(tree.node(base).is_bound());

        let interfaces: Vec<String> = tree.node(transform).interfaces.iter()
            .map(|i| tree.display_name(*i))
            .collect();
        assert_eq!(interfaces, vec!["System.Collections.Generic.IEnumerable<UnityEngine.Component>"]);

        let generic = tree.node(transform).interfaces[0];
        let inner = tree.node(generic).interfaces[0];
        assert_eq!(tree.node(inner).full_name, "System.Collections.IEnumerable");
        assert!(tree.node(generic).base_type.is_none());

        assert!(tree.node(vector).base_type.is_none());
        assert_eq!(tree.node(vector).interfaces.len(), 1);
        assert_eq!(tree.display_name(tree.node(vector).interfaces[0]), "UnityEngine.IFoo");
        assert!(!diagnostics.has_errors());
    }
}
