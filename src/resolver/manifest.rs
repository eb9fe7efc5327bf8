// Tue Jan 13 2026 - Alex

use crate::resolver::{ResolverError, TypeId, TypeResolver};
use crate::symbol::naming;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Value,
    Enum,
    Interface,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeEntry {
    pub full_name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub enum_members: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default = "default_resolvable")]
    pub resolvable: bool,
}

fn default_resolvable() -> bool {
    true
}

impl TypeEntry {
    pub fn new(full_name: &str, kind: TypeKind) -> Self {
        Self {
            full_name: full_name.to_string(),
            kind,
            base: None,
            interfaces: Vec::new(),
            enum_members: Vec::new(),
            aliases: Vec::new(),
            resolvable: true,
        }
    }

    pub fn class(full_name: &str) -> Self {
        Self::new(full_name, TypeKind::Class)
    }

    pub fn value(full_name: &str) -> Self {
        Self::new(full_name, TypeKind::Value)
    }

    pub fn interface(full_name: &str) -> Self {
        Self::new(full_name, TypeKind::Interface)
    }

    pub fn enumeration(full_name: &str, members: &[&str]) -> Self {
        let mut entry = Self::new(full_name, TypeKind::Enum);
        entry.enum_members = members.iter().map(|m| m.to_string()).collect();
        entry
    }

    pub fn with_base(mut self, base: &str) -> Self {
        self.base = Some(base.to_string());
        self
    }

    pub fn with_interface(mut self, interface: &str) -> Self {
        self.interfaces.push(interface.to_string());
        self
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    pub fn unresolvable(mut self) -> Self {
        self.resolvable = false;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeManifest {
    #[serde(default)]
    pub types: Vec<TypeEntry>,
    #[serde(default)]
    pub externs: HashMap<String, usize>,
}

/// `TypeResolver` backed by a JSON manifest of the host's bindable types.
#[derive(Debug, Clone, Default)]
pub struct ManifestResolver {
    entries: Vec<TypeEntry>,
    by_name: HashMap<String, TypeId>,
    by_full_name: HashMap<String, TypeId>,
    externs: HashMap<String, usize>,
}

impl ManifestResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_manifest(manifest: TypeManifest) -> Self {
        let mut resolver = Self::new();
        for entry in manifest.types {
            resolver.add_type(entry);
        }
        resolver.externs = manifest.externs;
        resolver
    }

    pub fn from_json(json: &str) -> Result<Self, ResolverError> {
        let manifest: TypeManifest = serde_json::from_str(json)?;
        Ok(Self::from_manifest(manifest))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResolverError> {
        let json = fs::read_to_string(path.as_ref())?;
        let resolver = Self::from_json(&json)?;
        if resolver.is_empty() {
            return Err(ResolverError::Manifest(format!(
                "{} declares no types",
                path.as_ref().display()
            )));
        }
        Ok(resolver)
    }

    pub fn add_type(&mut self, mut entry: TypeEntry) -> TypeId {
        entry.full_name = entry.full_name.replace('+', ".");
        if let Some(existing) = self.by_full_name.get(&entry.full_name) {
            return *existing;
        }

        let id = TypeId(self.entries.len());
        self.by_full_name.insert(entry.full_name.clone(), id);
        if entry.resolvable {
            self.by_name.entry(naming::grammar_name(&entry.full_name)).or_insert(id);
            for alias in &entry.aliases {
                self.by_name.entry(alias.clone()).or_insert(id);
            }
        }
        self.entries.push(entry);
        id
    }

    pub fn with_type(mut self, entry: TypeEntry) -> Self {
        self.add_type(entry);
        self
    }

    pub fn add_extern(&mut self, symbol: &str, parameter_count: usize) {
        self.externs.insert(symbol.to_string(), parameter_count);
    }

    pub fn with_extern(mut self, symbol: &str, parameter_count: usize) -> Self {
        self.add_extern(symbol, parameter_count);
        self
    }

    pub fn find_by_full_name(&self, full_name: &str) -> Option<TypeId> {
        self.by_full_name.get(full_name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: TypeId) -> Option<&TypeEntry> {
        self.entries.get(id.0)
    }

    fn kind(&self, id: TypeId) -> Option<TypeKind> {
        self.entry(id).map(|e| e.kind)
    }
}

impl TypeResolver for ManifestResolver {
    fn resolve(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    fn full_name(&self, id: TypeId) -> String {
        self.entry(id).map(|e| e.full_name.clone()).unwrap_or_default()
    }

    fn declared_interfaces(&self, id: TypeId) -> Vec<TypeId> {
        self.entry(id)
            .map(|e| {
                e.interfaces.iter()
                    .filter_map(|name| self.find_by_full_name(&name.replace('+', ".")))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn ancestor(&self, id: TypeId) -> Option<TypeId> {
        let base = self.entry(id)?.base.as_ref()?;
        self.find_by_full_name(&base.replace('+', "."))
    }

    fn is_value_type(&self, id: TypeId) -> bool {
        matches!(self.kind(id), Some(TypeKind::Value | TypeKind::Enum))
    }

    fn is_enum(&self, id: TypeId) -> bool {
        self.kind(id) == Some(TypeKind::Enum)
    }

    fn is_interface(&self, id: TypeId) -> bool {
        self.kind(id) == Some(TypeKind::Interface)
    }

    fn enum_member_names(&self, id: TypeId) -> Vec<String> {
        self.entry(id).map(|e| e.enum_members.clone()).unwrap_or_default()
    }

    fn extern_parameter_count(&self, symbol: &str) -> Result<usize, ResolverError> {
        self.externs.get(symbol)
            .copied()
            .ok_or_else(|| ResolverError::UnsupportedExtern(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ManifestResolver {
        let manifest = json!({
            "types": [
                {"fullName": "System.Object"},
                {"fullName": "UnityEngine.Object", "base": "System.Object"},
                {"fullName": "UnityEngine.Component", "base": "UnityEngine.Object"},
                {"fullName": "UnityEngine.Space", "kind": "enum", "enumMembers": ["World", "Self"]},
                {"fullName": "System.Collections.IEnumerable", "kind": "interface"},
                {"fullName": "UnityEngine.Transform", "base": "UnityEngine.Component",
                 "interfaces": ["System.Collections.IEnumerable"]},
                {"fullName": "UnityEngine.ParticleSystem+MainModule", "kind": "value"},
                {"fullName": "System.ValueType", "resolvable": false},
                {"fullName": "System.Collections.Generic.List<System.Object>"}
            ],
            "externs": {"UnityEngineTransform.__DetachChildren__SystemVoid": 1}
        });
        ManifestResolver::from_json(&manifest.to_string()).unwrap()
    }

    #[test]
    fn test_resolve_by_grammar_name() {
        let resolver = sample();
        let transform = resolver.resolve("UnityEngineTransform").unwrap();
        assert_eq!(resolver.full_name(transform), "UnityEngine.Transform");
        assert!(resolver.is_bindable(transform));
        assert!(resolver.resolve("SystemValueType").is_none());
        assert!(resolver.resolve_strict("Missing").is_err());
    }

    #[test]
    fn test_nested_names_normalised() {
        let resolver = sample();
        let module = resolver.resolve("UnityEngineParticleSystemMainModule").unwrap();
        assert_eq!(resolver.full_name(module), "UnityEngine.ParticleSystem.MainModule");
        assert!(resolver.is_value_type(module));
    }

    #[test]
    fn test_object_list_alias() {
        let resolver = sample();
        let list = resolver.resolve("ListT").unwrap();
        assert!(resolver.is_bindable(list));
    }

    #[test]
    fn test_ancestry_and_interfaces() {
        let resolver = sample();
        let transform = resolver.resolve("UnityEngineTransform").unwrap();
        let component = resolver.ancestor(transform).unwrap();
        assert_eq!(resolver.full_name(component), "UnityEngine.Component");
        let interfaces = resolver.declared_interfaces(transform);
        assert_eq!(interfaces.len(), 1);
        assert!(resolver.is_interface(interfaces[0]));
        let object = resolver.resolve("SystemObject").unwrap();
        assert!(resolver.ancestor(object).is_none());
    }

    #[test]
    fn test_enum_members() {
        let resolver = sample();
        let space = resolver.resolve("UnityEngineSpace").unwrap();
        assert!(resolver.is_enum(space));
        assert!(resolver.is_value_type(space));
        assert_eq!(resolver.enum_member_names(space), vec!["World", "Self"]);
    }

    #[test]
    fn test_extern_parameter_count() {
        let resolver = sample();
        assert_eq!(resolver.extern_parameter_count("UnityEngineTransform.__DetachChildren__SystemVoid").unwrap(), 1);
        assert!(matches!(
            resolver.extern_parameter_count("Foo.__Bar__SystemVoid"),
            Err(ResolverError::UnsupportedExtern(_))
        ));
    }
}
