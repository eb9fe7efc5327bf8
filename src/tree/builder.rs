// Tue Jan 13 2026 - Alex

use crate::diagnostics::Diagnostics;
use crate::resolver::{ResolverError, TypeId, TypeResolver};
use crate::symbol::{GrammarParser, NodeDefinition, SymbolFilter};
use crate::tree::{classify, inheritance, MethodRecord, NodeId, TreeError, TypeTree};
use std::fmt;
use std::sync::Arc;

/// Namespaces the declaration preamble is written into.
pub const PREAMBLE_NAMESPACES: [&str; 2] = ["System", "System.Collections"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub definitions: usize,
    pub ignored: usize,
    pub attached: usize,
    pub pointer_dropped: usize,
    pub failed: usize,
}

impl fmt::Display for BuildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} definitions: {} attached, {} ignored, {} pointer externs dropped, {} failed",
            self.definitions, self.attached, self.ignored, self.pointer_dropped, self.failed
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    Attached(NodeId),
    Ignored,
    PointerDropped,
}

/// Finished tree together with everything reported while building it.
#[derive(Debug)]
pub struct BuiltTree {
    pub tree: TypeTree,
    pub diagnostics: Diagnostics,
    pub stats: BuildStats,
}

pub struct TreeBuilder {
    tree: TypeTree,
    resolver: Arc<dyn TypeResolver>,
    parser: GrammarParser,
    filter: SymbolFilter,
    diagnostics: Diagnostics,
    stats: BuildStats,
}

impl TreeBuilder {
    pub fn new(resolver: Arc<dyn TypeResolver>) -> Self {
        Self {
            tree: TypeTree::new(),
            resolver,
            parser: GrammarParser::new(),
            filter: SymbolFilter::new(),
            diagnostics: Diagnostics::new(),
            stats: BuildStats::default(),
        }
    }

    pub fn with_parser(mut self, parser: GrammarParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_filter(mut self, filter: SymbolFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn tree(&self) -> &TypeTree {
        &self.tree
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn add_definitions(&mut self, definitions: &[NodeDefinition]) {
        for definition in definitions {
            self.add_definition(definition);
        }
    }

    /// Processes one definition, reporting failures instead of returning them.
    pub fn add_definition(&mut self, definition: &NodeDefinition) {
        self.stats.definitions += 1;
        match self.process(definition) {
            Ok(Attachment::Attached(_)) => self.stats.attached += 1,
            Ok(Attachment::Ignored) => self.stats.ignored += 1,
            Ok(Attachment::PointerDropped) => {
                log::debug!("Dropped pointer extern {}", definition.full_name);
                self.stats.pointer_dropped += 1;
            }
            Err(e) => {
                self.stats.failed += 1;
                self.diagnostics.report(&e);
            }
        }
    }

    pub fn process(&mut self, definition: &NodeDefinition) -> Result<Attachment, TreeError> {
        if !self.filter.accepts(definition) {
            return Ok(Attachment::Ignored);
        }

        let grammar = self.parser.parse(&definition.full_name)?;
        if grammar.has_pointer_token() {
            return Ok(Attachment::PointerDropped);
        }

        let is_static = self.infer_static(definition);

        let owner_type = self.resolver.resolve_strict(&grammar.namespace)?;
        let owner = self.bind_type(owner_type);

        let inputs: Vec<NodeId> = grammar.inputs.iter()
            .filter(|token| !token.is_empty())
            .map(|token| self.node_for_token(token))
            .collect();

        let output = if grammar.output.is_empty() {
            None
        } else {
            Some(self.node_for_token(&grammar.output))
        };

        let record = MethodRecord::new(&definition.full_name, grammar.kind, &grammar.name)
            .with_static(is_static)
            .with_inputs(inputs)
            .with_output(output);

        if record.referenced_types().any(|id| self.tree.node(id).is_pointer()) {
            return Ok(Attachment::PointerDropped);
        }

        self.tree.attach(owner, record);
        Ok(Attachment::Attached(owner))
    }

    /// Static when the first parameter is not named `instance`. Definitions
    /// without parameter names fall back to the runtime parameter count.
    pub fn infer_static(&self, definition: &NodeDefinition) -> bool {
        let mut is_static = definition.first_input_name()
            .map_or(false, |name| name != "instance");

        if definition.input_names.is_empty() {
            match self.resolver.extern_parameter_count(&definition.full_name) {
                Ok(count) => {
                    if count.checked_sub(definition.output_count()) == Some(0) {
                        is_static = true;
                    }
                }
                Err(e) => log::debug!("Static probe skipped for {}: {}", definition.full_name, e),
            }
        }

        is_static
    }

    /// Creates or finds the node for a resolved type and binds it.
    pub fn bind_type(&mut self, type_id: TypeId) -> NodeId {
        let full_name = self.resolver.full_name(type_id);
        let id = self.tree.get_or_create(&full_name, self.resolver.as_ref());
        if let Err(e) = self.tree.bind(id, type_id, self.resolver.as_ref()) {
            self.diagnostics.report(&e);
        }
        id
    }

    /// Node for a parameter or return token. Unknown tokens are reported and
    /// become unbound placeholder nodes named after the raw token.
    fn node_for_token(&mut self, token: &str) -> NodeId {
        match self.resolver.resolve(token) {
            Some(type_id) => self.bind_type(type_id),
            None => {
                self.diagnostics.report(&ResolverError::UnresolvedTypeName(token.to_string()));
                let before = self.tree.len();
                let id = self.tree.get_or_create(token, self.resolver.as_ref());
                if id.0 >= before {
                    self.tree.node_mut(id).placeholder = true;
                }
                id
            }
        }
    }

    /// Recovers inheritance, classifies every node and splits out receiver holders.
    pub fn finish(mut self) -> BuiltTree {
        for namespace in PREAMBLE_NAMESPACES {
            self.tree.get_or_create(namespace, self.resolver.as_ref());
        }

        inheritance::recover(&mut self.tree, self.resolver.as_ref(), &mut self.diagnostics);
        classify::classify_all(&mut self.tree, self.resolver.as_ref());
        let holders = classify::split_receiver_holders(&mut self.tree);
        log::debug!("Created {} receiver holders", holders.len());

        BuiltTree {
            tree: self.tree,
            diagnostics: self.diagnostics,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{ManifestResolver, TypeEntry};
    use crate::symbol::MethodKind;
    use crate::tree::TreeLayout;

    fn resolver() -> Arc<ManifestResolver> {
        Arc::new(
            ManifestResolver::new()
                .with_type(TypeEntry::class("System.Object"))
                .with_type(TypeEntry::value("System.Int32"))
                .with_type(TypeEntry::value("System.Void"))
                .with_type(TypeEntry::class("System.Int32[]").with_base("System.Array"))
                .with_type(TypeEntry::class("Foo").with_base("System.Object"))
                .with_extern("Foo.__ctor____Foo", 1)
                .with_extern("Foo.__get_Value__SystemInt32", 2),
        )
    }

    fn definition(symbol: &str, inputs: &[&str], output: &str) -> NodeDefinition {
        NodeDefinition::new(symbol).with_inputs(inputs).with_output(output)
    }

    #[test]
    fn test_attaches_instance_method() {
        let mut builder = TreeBuilder::new(resolver());
        builder.add_definition(&definition(
            "Foo.__Bar__SystemInt32__SystemVoid",
            &["instance", "value"],
            "System.Void",
        ));

        assert_eq!(builder.stats().attached, 1);
        let foo = builder.tree().find_by_name("Foo").unwrap();
        let node = builder.tree().node(foo);
        assert_eq!(node.instance_methods.len(), 1);
        let method = &node.instance_methods[0];
        assert_eq!(method.kind, MethodKind::Plain);
        assert_eq!(method.name, "Bar");
        assert_eq!(method.inputs.len(), 1);
        assert_eq!(builder.tree().node(method.inputs[0]).full_name, "System.Int32");
        assert_eq!(builder.tree().node(method.output.unwrap()).full_name, "System.Void");
    }

    #[test]
    fn test_static_fallback_uses_parameter_count() {
        let builder = TreeBuilder::new(resolver());
        let ctor = definition("Foo.__ctor____Foo", &[], "Foo");
        assert!(builder.infer_static(&ctor));

        let getter = definition("Foo.__get_Value__SystemInt32", &[], "System.Int32");
        assert!(!builder.infer_static(&getter));

        let unknown = definition("Foo.__Missing__SystemVoid", &[], "System.Void");
        assert!(!builder.infer_static(&unknown));

        let named = definition("Foo.__Make__SystemInt32__Foo", &["value"], "Foo");
        assert!(builder.infer_static(&named));
    }

    #[test]
    fn test_grammar_mismatch_reported() {
        let mut builder = TreeBuilder::new(resolver());
        builder.add_definition(&NodeDefinition::new("NotAnExtern"));
        builder.add_definition(&NodeDefinition::new("Variable_SystemInt32"));

        let stats = builder.stats();
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.ignored, 1);
        assert!(builder.diagnostics().contains("Unhandled definition: NotAnExtern"));
    }

    #[test]
    fn test_unresolved_owner_skips_record() {
        let mut builder = TreeBuilder::new(resolver());
        builder.add_definition(&definition("Missing.__Bar__SystemVoid", &["instance"], "System.Void"));
        assert_eq!(builder.stats().failed, 1);
        assert!(builder.tree().find_by_name("Missing").is_none());
    }

    #[test]
    fn test_unresolved_input_kept_as_synthetic_node() {
        let mut builder = TreeBuilder::new(resolver());
        builder.add_definition(&definition("Foo.__Bar__MysteryType__SystemVoid", &["instance", "x"], "System.Void"));

        assert_eq!(builder.stats().attached, 1);
        assert!(builder.diagnostics().has_errors());
        let mystery = builder.tree().find_by_name("MysteryType").unwrap();
        assert!(!builder.tree().node(mystery).is_bound());
        assert!(builder.tree().node(mystery).placeholder);
        let foo = builder.tree().find_by_name("Foo").unwrap();
        assert!(!builder.tree().node(foo).placeholder);

        let mut built = builder.finish();
        let layout = TreeLayout::build(&built.tree, &mut built.diagnostics);
        assert!(layout.find_group("MysteryType", 0).is_none());
        assert!(layout.find_group("Foo", 0).is_some());
    }

    #[test]
    fn test_pointer_externs_dropped() {
        let mut builder = TreeBuilder::new(resolver());
        builder.add_definition(&definition("Foo.__Bar__SystemChar*__SystemVoid", &["instance", "x"], "System.Void"));
        assert_eq!(builder.stats().pointer_dropped, 1);
        assert!(!builder.diagnostics().has_errors());
    }

    #[test]
    fn test_finish_creates_preamble_namespaces() {
        let builder = TreeBuilder::new(resolver());
        let built = builder.finish();
        assert!(built.tree.find_by_name("System").is_some());
        assert!(built.tree.find_by_name("System.Collections").is_some());
    }
}
