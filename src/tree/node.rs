// Tue Jan 13 2026 - Alex

use crate::resolver::TypeId;
use crate::tree::MethodRecord;
use indexmap::IndexSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Identity used for deduplication: two generic instantiations of the same
/// open type differ by `generic_signature`, receiver holders by `holder`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub full_name: String,
    pub arity: usize,
    pub generic_signature: Option<String>,
    pub holder: bool,
}

impl NodeKey {
    pub fn plain(full_name: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            arity: 0,
            generic_signature: None,
            holder: false,
        }
    }

    pub fn generic(full_name: &str, arity: usize, signature: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            arity,
            generic_signature: Some(signature.to_string()),
            holder: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionKind {
    /// Methods of an array type, the array node is its own holder.
    Array,
    /// Instance methods of a primitive or enum receiver.
    Receiver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Pending,
    Namespace,
    Class,
    SealedClass,
    AbstractClass,
    Struct,
    Interface,
    Enum,
    Extension(ExtensionKind),
}

impl Classification {
    pub fn is_namespace(&self) -> bool {
        matches!(self, Classification::Namespace)
    }

    pub fn is_extension(&self) -> bool {
        matches!(self, Classification::Extension(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Classification::Pending => "pending",
            Classification::Namespace => "namespace",
            Classification::Class => "class",
            Classification::SealedClass => "sealed class",
            Classification::AbstractClass => "abstract class",
            Classification::Struct => "struct",
            Classification::Interface => "interface",
            Classification::Enum => "enum",
            Classification::Extension(ExtensionKind::Array) => "array extensions",
            Classification::Extension(ExtensionKind::Receiver) => "receiver extensions",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypeNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    /// Example: `UnityEngine.Debug`.
    pub full_name: String,
    /// Example: `Debug`.
    pub type_name: String,
    /// Example: `UnityEngine`.
    pub namespace_name: String,
    pub binding: Option<TypeId>,
    /// Name under which the resolver knows this node.
    pub canonical_name: Option<String>,
    /// Raw argument text of a generic instantiation, e.g. `System.String, System.Int32`.
    pub generic_signature: Option<String>,
    pub generic_arity: usize,
    pub generic_arguments: Vec<NodeId>,
    pub(crate) generated_arguments: bool,
    pub children: IndexSet<NodeId>,
    pub static_methods: Vec<MethodRecord>,
    pub instance_methods: Vec<MethodRecord>,
    pub classification: Classification,
    pub base_type: Option<NodeId>,
    pub interfaces: IndexSet<NodeId>,
    pub enum_members: Vec<String>,
    /// Receiver of an extension holder.
    pub receiver: Option<NodeId>,
    /// Stands in for a token the resolver did not know. Never emitted.
    pub placeholder: bool,
}

impl TypeNode {
    pub fn new(id: NodeId, parent: Option<NodeId>, namespace_name: &str, type_name: &str) -> Self {
        let full_name = if namespace_name.is_empty() {
            type_name.to_string()
        } else {
            format!("{}.{}", namespace_name, type_name)
        };

        Self {
            id,
            parent,
            full_name,
            type_name: type_name.to_string(),
            namespace_name: namespace_name.to_string(),
            binding: None,
            canonical_name: None,
            generic_signature: None,
            generic_arity: 0,
            generic_arguments: Vec::new(),
            generated_arguments: false,
            children: IndexSet::new(),
            static_methods: Vec::new(),
            instance_methods: Vec::new(),
            classification: Classification::Pending,
            base_type: None,
            interfaces: IndexSet::new(),
            enum_members: Vec::new(),
            receiver: None,
            placeholder: false,
        }
    }

    pub fn is_generic(&self) -> bool {
        self.generic_signature.is_some()
    }

    pub fn is_array(&self) -> bool {
        self.full_name.ends_with("[]")
    }

    pub fn is_pointer(&self) -> bool {
        self.full_name.contains('*')
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some() && self.canonical_name.is_some()
    }

    pub fn key(&self) -> NodeKey {
        NodeKey {
            full_name: self.full_name.clone(),
            arity: self.generic_arity,
            generic_signature: self.generic_signature.clone(),
            holder: self.receiver.is_some() && !self.is_array(),
        }
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodRecord> {
        self.static_methods.iter().chain(self.instance_methods.iter())
    }

    pub fn method_count(&self) -> usize {
        self.static_methods.len() + self.instance_methods.len()
    }

    pub fn attach(&mut self, method: MethodRecord) {
        if method.is_static {
            self.static_methods.push(method);
        } else {
            self.instance_methods.push(method);
        }
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)?;
        if let Some(signature) = &self.generic_signature {
            write!(f, "<{}>", signature)?;
        }
        write!(f, " [{}]", self.classification.name())
    }
}
