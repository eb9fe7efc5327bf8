// Thu Jan 15 2026 - Alex

use crate::tree::{Classification, ExtensionKind};
use itertools::Itertools;
use std::fmt;

const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Namespace,
    Class,
    SealedClass,
    AbstractClass,
    StaticClass,
    Struct,
    Interface,
    Enum,
}

impl DeclKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclKind::Namespace => "namespace",
            DeclKind::Class => "class",
            DeclKind::SealedClass => "sealed class",
            DeclKind::AbstractClass => "abstract class",
            DeclKind::StaticClass => "static class",
            DeclKind::Struct => "struct",
            DeclKind::Interface => "interface",
            DeclKind::Enum => "enum",
        }
    }

    pub fn is_holder(&self) -> bool {
        *self == DeclKind::StaticClass
    }
}

impl From<Classification> for DeclKind {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Pending | Classification::Namespace => DeclKind::Namespace,
            Classification::Class => DeclKind::Class,
            Classification::SealedClass => DeclKind::SealedClass,
            Classification::AbstractClass => DeclKind::AbstractClass,
            Classification::Struct => DeclKind::Struct,
            Classification::Interface => DeclKind::Interface,
            Classification::Enum => DeclKind::Enum,
            Classification::Extension(ExtensionKind::Array | ExtensionKind::Receiver) => DeclKind::StaticClass,
        }
    }
}

/// One member line preceded by its attribute lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDecl {
    pub attributes: Vec<String>,
    pub signature: String,
}

impl MemberDecl {
    pub fn new(signature: String) -> Self {
        Self {
            attributes: Vec::new(),
            signature,
        }
    }

    pub fn with_attribute(mut self, name: &str, argument: &str) -> Self {
        self.attributes.push(format!("[{}(\"{}\")]", name, argument));
        self
    }
}

#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub kind: DeclKind,
    pub name: String,
    /// Grammar name carried by the `UdonType` attribute.
    pub binding_name: Option<String>,
    pub generic_arity: usize,
    pub bases: Vec<String>,
    pub enum_members: Vec<String>,
    pub fields: Vec<MemberDecl>,
    pub methods: Vec<MemberDecl>,
    /// Verbatim lines written after the methods.
    pub raw: Vec<String>,
    pub children: Vec<ClassDecl>,
}

impl ClassDecl {
    pub fn new(kind: DeclKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            binding_name: None,
            generic_arity: 0,
            bases: Vec::new(),
            enum_members: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            raw: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn namespace(name: &str) -> Self {
        Self::new(DeclKind::Namespace, name)
    }

    pub fn member_count(&self) -> usize {
        self.fields.len() + self.methods.len()
    }

    pub fn find_child(&self, name: &str) -> Option<&ClassDecl> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Whether a non-generic child type named `name` is declared here.
    pub fn declares(&self, name: &str) -> bool {
        self.children.iter().any(|c| c.name == name && c.generic_arity == 0)
    }

    fn header(&self) -> String {
        if self.kind == DeclKind::Namespace {
            return format!("namespace {}", self.name);
        }

        let mut header = format!("public {} {}", self.kind.keyword(), self.name);
        if self.generic_arity > 0 {
            let parameters = (0..self.generic_arity).map(|i| format!("T{}", i)).join(", ");
            header.push_str(&format!("<{}>", parameters));
        }
        if !self.bases.is_empty() {
            header.push_str(" : ");
            header.push_str(&self.bases.join(", "));
        }
        header
    }

    pub fn render(&self, depth: usize, out: &mut String) {
        let indent = INDENT.repeat(depth);
        let inner = INDENT.repeat(depth + 1);

        if self.kind != DeclKind::Namespace {
            if let Some(binding) = &self.binding_name {
                out.push_str(&format!("{}[UdonType(\"{}\")]\n", indent, binding));
            }
        }
        out.push_str(&format!("{}{}\n", indent, self.header()));
        out.push_str(&format!("{}{{\n", indent));

        if !self.enum_members.is_empty() {
            out.push_str(&format!("{}{}\n", inner, self.enum_members.join(", ")));
        }

        for member in self.fields.iter().chain(self.methods.iter()) {
            for attribute in &member.attributes {
                out.push_str(&format!("{}{}\n", inner, attribute));
            }
            out.push_str(&format!("{}{}\n", inner, member.signature));
        }

        for line in &self.raw {
            out.push_str(&format!("{}{}\n", inner, line));
        }

        for child in &self.children {
            child.render(depth + 1, out);
        }

        out.push_str(&format!("{}}}\n", indent));
    }

    pub fn to_csharp(&self) -> String {
        let mut out = String::new();
        self.render(0, &mut out);
        out
    }
}

impl fmt::Display for ClassDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}
