// Thu Jan 15 2026 - Alex

use crate::symbol::MethodKind;
use crate::tree::{MethodRecord, NodeId};
use indexmap::IndexMap;

/// Property synthesised from a getter, a setter, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSlot {
    pub name: String,
    pub getter: Option<MethodRecord>,
    pub setter: Option<MethodRecord>,
}

impl FieldSlot {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            getter: None,
            setter: None,
        }
    }

    pub fn is_static(&self) -> bool {
        self.getter.as_ref().or(self.setter.as_ref()).map_or(false, |m| m.is_static)
    }

    /// Getter output, else the value parameter of the setter.
    pub fn field_type(&self) -> Option<NodeId> {
        match (&self.getter, &self.setter) {
            (Some(getter), _) => getter.output,
            (None, Some(setter)) => setter.inputs.last().copied(),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    slots: IndexMap<String, FieldSlot>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges an accessor into the slot named after it. Returns false for
    /// records that are not accessors.
    pub fn insert(&mut self, method: &MethodRecord) -> bool {
        if !method.kind.is_accessor() {
            return false;
        }

        let slot = self.slots
            .entry(method.name.clone())
            .or_insert_with(|| FieldSlot::new(&method.name));
        match method.kind {
            MethodKind::Getter => slot.getter = Some(method.clone()),
            _ => slot.setter = Some(method.clone()),
        }
        true
    }

    pub fn get(&self, name: &str) -> Option<&FieldSlot> {
        self.slots.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSlot> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn getter() -> MethodRecord {
        MethodRecord::new("Foo.__get_Value__SystemInt32", MethodKind::Getter, "Value").with_output(Some(NodeId(3)))
    }

    fn setter() -> MethodRecord {
        MethodRecord::new("Foo.__set_Value__SystemInt32__SystemVoid", MethodKind::Setter, "Value")
            .with_inputs(vec![NodeId(3)])
            .with_output(Some(NodeId(4)))
    }

    #[test]
    fn test_pair_merges_in_either_order() {
        for order in [[getter(), setter()], [setter(), getter()]] {
            let mut fields = FieldSet::new();
            for method in &order {
                assert!(fields.insert(method));
            }
            assert_eq!(fields.len(), 1);
            let slot = fields.get("Value").unwrap();
            assert!(slot.getter.is_some());
            assert!(slot.setter.is_some());
            assert_eq!(slot.field_type(), Some(NodeId(3)));
        }
    }

    #[test]
    fn test_lone_setter_uses_value_parameter() {
        let mut fields = FieldSet::new();
        fields.insert(&setter());
        let slot = fields.get("Value").unwrap();
        assert!(slot.getter.is_none());
        assert_eq!(slot.field_type(), Some(NodeId(3)));
        assert!(!slot.is_static());
    }

    #[test]
    fn test_non_accessors_rejected() {
        let mut fields = FieldSet::new();
        let method = MethodRecord::new("Foo.__Bar__SystemVoid", MethodKind::Plain, "Bar");
        assert!(!fields.insert(&method));
        assert!(fields.is_empty());
    }
}
