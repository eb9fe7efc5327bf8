// Tue Jan 13 2026 - Alex

use crate::resolver::{TypeId, TypeResolver};
use crate::symbol::naming;
use crate::tree::generics::{split_arguments, GenericExpression};
use crate::tree::{Classification, MethodRecord, NodeId, NodeKey, TreeError, TypeNode};
use std::collections::HashMap;

/// Arena of type nodes rooted at an unnamed node.
#[derive(Debug, Clone)]
pub struct TypeTree {
    nodes: Vec<TypeNode>,
    index: HashMap<NodeKey, NodeId>,
}

impl TypeTree {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        let mut root = TypeNode::new(Self::ROOT, None, "", "");
        root.classification = Classification::Namespace;

        Self {
            nodes: vec![root],
            index: HashMap::new(),
        }
    }

    pub fn root(&self) -> &TypeNode {
        &self.nodes[Self::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> &TypeNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TypeNode {
        &mut self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&TypeNode> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TypeNode> {
        self.nodes.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn find(&self, key: &NodeKey) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    pub fn find_by_name(&self, full_name: &str) -> Option<NodeId> {
        self.find(&NodeKey::plain(full_name))
    }

    /// Returns the node for a dotted path or generic expression, creating it
    /// and every missing ancestor on the way. Repeated calls return the same node.
    pub fn get_or_create(&mut self, expression: &str, resolver: &dyn TypeResolver) -> NodeId {
        let generic = GenericExpression::parse(expression);
        let (base, signature) = match generic {
            Some(g) => (g.base, Some(g.arguments)),
            None => (expression, None),
        };

        let segments: Vec<&str> = base.split('.').collect();
        let mut current = Self::ROOT;
        for (i, segment) in segments.iter().enumerate() {
            let is_last = i == segments.len() - 1;
            current = self.child_or_create(current, segment, if is_last { signature } else { None }, resolver);
        }

        if let Some(signature) = signature {
            self.expand_generic_arguments(current, signature, resolver);
        }

        if expression.contains("[]") {
            self.get_or_create(&expression.replace("[]", ""), resolver);
        }

        current
    }

    fn child_or_create(
        &mut self,
        parent: NodeId,
        name: &str,
        signature: Option<&str>,
        resolver: &dyn TypeResolver,
    ) -> NodeId {
        let namespace_name = self.node(parent).full_name.clone();
        let mut node = TypeNode::new(NodeId(self.nodes.len()), Some(parent), &namespace_name, name);
        if let Some(signature) = signature {
            node.generic_signature = Some(signature.to_string());
            node.generic_arity = split_arguments(signature).len();
        }

        let key = node.key();
        if let Some(existing) = self.index.get(&key) {
            return *existing;
        }

        let candidate = naming::candidate_grammar_name(&self.display_key(&node));
        if let Some(type_id) = resolver.resolve(&candidate) {
            node.binding = Some(type_id);
            node.canonical_name = Some(candidate);
        }

        let id = node.id;
        self.index.insert(key, id);
        self.nodes.push(node);
        self.node_mut(parent).children.insert(id);
        id
    }

    fn display_key(&self, node: &TypeNode) -> String {
        match &node.generic_signature {
            Some(signature) => format!("{}<{}>", node.full_name, signature),
            None => node.full_name.clone(),
        }
    }

    fn expand_generic_arguments(&mut self, id: NodeId, signature: &str, resolver: &dyn TypeResolver) {
        if self.node(id).generated_arguments {
            return;
        }
        self.node_mut(id).generated_arguments = true;

        let arguments: Vec<NodeId> = split_arguments(signature)
            .into_iter()
            .map(|argument| self.get_or_create(argument, resolver))
            .collect();
        self.node_mut(id).generic_arguments = arguments;
    }

    /// Records the resolver identity for a node and checks that its grammar
    /// name resolves back to the same identity.
    pub fn bind(&mut self, id: NodeId, type_id: TypeId, resolver: &dyn TypeResolver) -> Result<(), TreeError> {
        if self.node(id).binding == Some(type_id) && self.node(id).canonical_name.is_some() {
            return Ok(());
        }

        let grammar_name = resolver.grammar_name(type_id);
        let node = self.node_mut(id);
        node.binding = Some(type_id);
        node.canonical_name = Some(grammar_name.clone());

        if resolver.resolve(&grammar_name) != Some(type_id) {
            return Err(TreeError::ImproperGrammarName {
                type_name: resolver.full_name(type_id),
                generated: grammar_name,
            });
        }
        Ok(())
    }

    pub fn attach(&mut self, owner: NodeId, method: MethodRecord) {
        self.node_mut(owner).attach(method);
    }

    /// Creates the synthetic holder for the extension methods of `receiver`.
    pub fn holder_for(&mut self, receiver: NodeId) -> NodeId {
        let source = self.node(receiver);
        let mut holder = TypeNode::new(NodeId(self.nodes.len()), source.parent, &source.namespace_name, &source.type_name);
        holder.binding = source.binding;
        holder.canonical_name = source.canonical_name.clone();
        holder.generic_signature = source.generic_signature.clone();
        holder.generic_arity = source.generic_arity;
        holder.generic_arguments = source.generic_arguments.clone();
        holder.generated_arguments = true;
        holder.receiver = Some(receiver);

        let key = holder.key();
        if let Some(existing) = self.index.get(&key) {
            return *existing;
        }

        let id = holder.id;
        self.index.insert(key, id);
        self.nodes.push(holder);
        id
    }

    /// `Full.Name<Arg, Arg>` for generic instantiations, the plain full name otherwise.
    pub fn display_name(&self, id: NodeId) -> String {
        let node = self.node(id);
        match &node.generic_signature {
            Some(signature) if node.generic_arguments.is_empty() => {
                format!("{}<{}>", node.full_name, signature)
            }
            Some(_) => {
                let arguments: Vec<String> = node.generic_arguments.iter()
                    .map(|a| self.display_name(*a))
                    .collect();
                format!("{}<{}>", node.full_name, arguments.join(", "))
            }
            None => node.full_name.clone(),
        }
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &TypeNode> {
        self.node(id).children.iter().map(move |c| self.node(*c))
    }

    pub fn method_count(&self) -> usize {
        self.nodes.iter().map(|n| n.method_count()).sum()
    }
}

impl Default for TypeTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{ManifestResolver, TypeEntry};

    fn resolver() -> ManifestResolver {
        ManifestResolver::new()
            .with_type(TypeEntry::value("System.Int32"))
            .with_type(TypeEntry::class("System.String"))
            .with_type(TypeEntry::value("System.Int32[]"))
            .with_type(TypeEntry::class("System.Collections.Generic.List<System.Int32>"))
    }

    #[test]
    fn test_get_or_create_idempotent() {
        let resolver = resolver();
        let mut tree = TypeTree::new();
        let a = tree.get_or_create("UnityEngine.Transform", &resolver);
        let b = tree.get_or_create("UnityEngine.Transform", &resolver);
        assert_eq!(a, b);
        assert_eq!(tree.node(a).type_name, "Transform");
        assert_eq!(tree.node(a).namespace_name, "UnityEngine");

        let namespace = tree.find_by_name("UnityEngine").unwrap();
        assert_eq!(tree.node(namespace).children.len(), 1);
        assert!(tree.node(namespace).binding.is_none());
    }

    #[test]
    fn test_creation_binds_known_names() {
        let resolver = resolver();
        let mut tree = TypeTree::new();
        let int = tree.get_or_create("System.Int32", &resolver);
        assert_eq!(tree.node(int).canonical_name.as_deref(), Some("SystemInt32"));
        assert!(tree.node(int).binding.is_some());
    }

    #[test]
    fn test_generic_instantiations_stay_distinct() {
        let resolver = resolver();
        let mut tree = TypeTree::new();
        let ints = tree.get_or_create("System.Collections.Generic.List<System.Int32>", &resolver);
        let strings = tree.get_or_create("System.Collections.Generic.List<System.String>", &resolver);
        let ints_again = tree.get_or_create("System.Collections.Generic.List<System.Int32>", &resolver);

        assert_ne!(ints, strings);
        assert_eq!(ints, ints_again);
        assert_eq!(tree.node(ints).generic_arguments.len(), 1);
        assert_eq!(tree.display_name(ints), "System.Collections.Generic.List<System.Int32>");
        assert!(tree.node(ints).binding.is_some());
        assert!(tree.node(strings).binding.is_none());

        let generic_ns = tree.find_by_name("System.Collections.Generic").unwrap();
        assert_eq!(tree.node(generic_ns).children.len(), 2);
        let system = tree.find_by_name("System").unwrap();
        assert_eq!(tree.root().children.iter().filter(|c| **c == system).count(), 1);
    }

    #[test]
    fn test_array_implies_element_type() {
        let resolver = resolver();
        let mut tree = TypeTree::new();
        let array = tree.get_or_create("System.Int32[]", &resolver);
        assert!(tree.node(array).is_array());
        assert!(tree.find_by_name("System.Int32").is_some());
    }

    #[test]
    fn test_nested_generic_arguments() {
        let resolver = resolver();
        let mut tree = TypeTree::new();
        let id = tree.get_or_create(
            "System.Collections.Generic.IEnumerable<System.Collections.Generic.KeyValuePair<System.String, System.Int32>>",
            &resolver,
        );
        let argument = tree.node(id).generic_arguments[0];
        assert_eq!(tree.node(argument).generic_arity, 2);
        assert_eq!(
            tree.display_name(id),
            "System.Collections.Generic.IEnumerable<System.Collections.Generic.KeyValuePair<System.String, System.Int32>>"
        );
    }

    #[test]
    fn test_bind_reports_improper_name() {
        let resolver = ManifestResolver::new()
            .with_type(TypeEntry::class("Foo.Bar"))
            .with_type(TypeEntry::class("FooBar"));
        let mut tree = TypeTree::new();
        let id = tree.get_or_create("FooBar", &resolver);
        let shadowed = resolver.find_by_full_name("FooBar").unwrap();
        assert!(matches!(tree.bind(id, shadowed, &resolver), Err(TreeError::ImproperGrammarName { .. })));
        assert_eq!(tree.node(id).binding, Some(shadowed));
    }
}
