// Wed Jan 14 2026 - Alex

use crate::resolver::TypeResolver;
use crate::tree::{Classification, ExtensionKind, NodeId, TypeNode, TypeTree};
use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const STRING_TYPE: &str = "System.String";
pub const ARRAY_TYPE: &str = "System.Array";

/// Primitive `System` types declared as structs. Their instance members
/// cannot be declared on the struct itself and move to a receiver holder.
pub static VALUE_PRIMITIVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "System.Boolean",
        "System.Char",
        "System.SByte",
        "System.Byte",
        "System.Int16",
        "System.UInt16",
        "System.Int32",
        "System.UInt32",
        "System.Int64",
        "System.UInt64",
        "System.IntPtr",
        "System.UIntPtr",
        "System.Single",
        "System.Double",
        "System.Void",
        "System.Decimal",
    ]
    .into_iter()
    .collect()
});

pub fn is_value_primitive(full_name: &str) -> bool {
    VALUE_PRIMITIVES.contains(full_name)
}

pub fn classify(node: &TypeNode, resolver: &dyn TypeResolver) -> Classification {
    if node.receiver.is_some() && !node.is_array() {
        return Classification::Extension(ExtensionKind::Receiver);
    }
    if node.is_array() {
        return Classification::Extension(ExtensionKind::Array);
    }

    let Some(type_id) = node.binding else {
        return Classification::Namespace;
    };

    match node.full_name.as_str() {
        STRING_TYPE => return Classification::SealedClass,
        ARRAY_TYPE => return Classification::AbstractClass,
        name if is_value_primitive(name) => return Classification::Struct,
        _ => {}
    }

    if resolver.is_enum(type_id) {
        Classification::Enum
    } else if resolver.is_interface(type_id) {
        Classification::Interface
    } else if resolver.is_value_type(type_id) {
        Classification::Struct
    } else {
        Classification::Class
    }
}

/// Computes the classification of every node and fills enum member lists.
pub fn classify_all(tree: &mut TypeTree, resolver: &dyn TypeResolver) {
    let ids: Vec<NodeId> = tree.ids().collect();
    for id in ids {
        if id == TypeTree::ROOT {
            continue;
        }

        let classification = classify(tree.node(id), resolver);
        let members = match (classification, tree.node(id).binding) {
            (Classification::Enum, Some(type_id)) => resolver.enum_member_names(type_id),
            _ => Vec::new(),
        };

        let node = tree.node_mut(id);
        node.classification = classification;
        node.enum_members = members;
    }
}

/// Moves methods of primitive structs and enums into receiver holders.
/// Instance methods move for both, static methods only for enums.
pub fn split_receiver_holders(tree: &mut TypeTree) -> Vec<NodeId> {
    let candidates: Vec<NodeId> = tree.nodes()
        .filter(|n| n.receiver.is_none())
        .filter(|n| match n.classification {
            Classification::Struct => is_value_primitive(&n.full_name) && !n.instance_methods.is_empty(),
            Classification::Enum => n.method_count() > 0,
            _ => false,
        })
        .map(|n| n.id)
        .collect();

    let mut holders = Vec::new();
    for id in candidates {
        let holder = tree.holder_for(id);

        let node = tree.node_mut(id);
        let instance = std::mem::take(&mut node.instance_methods);
        let statics = if node.classification == Classification::Enum {
            std::mem::take(&mut node.static_methods)
        } else {
            Vec::new()
        };

        let holder_node = tree.node_mut(holder);
        holder_node.classification = Classification::Extension(ExtensionKind::Receiver);
        holder_node.instance_methods.extend(instance);
        holder_node.static_methods.extend(statics);
        holders.push(holder);
    }

    holders
}
