// Thu Jan 15 2026 - Alex

use crate::diagnostics::Diagnostics;
use crate::emit::class::{ClassDecl, DeclKind, MemberDecl};
use crate::emit::field::{FieldSet, FieldSlot};
use crate::emit::operators::{self, OperatorForm, SHIFT_AMOUNT_TYPE};
use crate::emit::{preamble, EmitError};
use crate::symbol::{naming, MethodKind, VOID_TYPE};
use crate::tree::{Classification, ExtensionKind, MethodRecord, NodeId, TreeLayout, TypeNode, TypeTree};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitOptions {
    pub array_ctor_prefix: String,
    pub holder_suffix: String,
    pub receiver_name: String,
    pub emit_preamble: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            array_ctor_prefix: "array_".to_string(),
            holder_suffix: "Extensions".to_string(),
            receiver_name: "__instance__".to_string(),
            emit_preamble: true,
        }
    }
}

/// Declaration being filled from the members of one group.
struct DeclContext<'a> {
    tree: &'a TypeTree,
    kind: DeclKind,
    owner: &'a TypeNode,
}

impl DeclContext<'_> {
    /// Receiver type name when `method` is written as an extension method.
    fn receiver(&self, method: &MethodRecord) -> Option<String> {
        match self.owner.classification {
            Classification::Extension(ExtensionKind::Array) => Some(self.tree.display_name(self.owner.id)),
            Classification::Extension(ExtensionKind::Receiver) if !method.is_static => {
                self.owner.receiver.map(|r| self.tree.display_name(r))
            }
            _ => None,
        }
    }
}

pub struct DeclarationEmitter {
    options: EmitOptions,
}

impl DeclarationEmitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Writes every root declaration, then the extension holders, then the
    /// attribute types.
    pub fn emit(&self, tree: &TypeTree, layout: &TreeLayout, diagnostics: &mut Diagnostics) -> String {
        let mut roots: Vec<ClassDecl> = layout.roots.iter()
            .map(|index| self.group_decl(tree, layout, *index, diagnostics))
            .collect();
        let holders: Vec<ClassDecl> = layout.extension_holders.iter()
            .map(|index| self.group_decl(tree, layout, *index, diagnostics))
            .collect();

        if self.options.emit_preamble {
            for namespace in [preamble::SYSTEM_NAMESPACE, preamble::COLLECTIONS_NAMESPACE] {
                let position = roots.iter()
                    .position(|d| d.kind == DeclKind::Namespace && d.name == namespace);
                let decl = match position {
                    Some(i) => &mut roots[i],
                    None => {
                        roots.push(ClassDecl::namespace(namespace));
                        let last = roots.len() - 1;
                        &mut roots[last]
                    }
                };
                let stubs: Vec<String> = preamble::stubs_for(namespace).iter()
                    .filter(|stub| match preamble::stub_type_name(stub) {
                        Some(name) if decl.declares(name) => {
                            log::debug!("{}.{} is bound, dropping its stub", namespace, name);
                            false
                        }
                        _ => true,
                    })
                    .map(|s| s.to_string())
                    .collect();
                decl.raw.extend(stubs);
            }
        }

        let mut out = String::new();
        for decl in roots.iter().chain(holders.iter()) {
            decl.render(0, &mut out);
            out.push('\n');
        }
        if self.options.emit_preamble {
            out.push_str(preamble::ATTRIBUTE_TYPES);
        }
        out
    }

    pub fn group_decl(&self, tree: &TypeTree, layout: &TreeLayout, index: usize, diagnostics: &mut Diagnostics) -> ClassDecl {
        let group = layout.group(index);
        let primary = tree.node(group.primary);
        let kind = DeclKind::from(primary.classification);

        let name = match primary.classification {
            Classification::Namespace | Classification::Pending => primary.full_name.clone(),
            Classification::Extension(_) => format!("{}{}", binding_name(primary), self.options.holder_suffix),
            _ => primary.type_name.clone(),
        };

        let mut decl = ClassDecl::new(kind, &name);
        if kind != DeclKind::Namespace {
            decl.binding_name = Some(binding_name(primary));
            if kind != DeclKind::StaticClass {
                decl.generic_arity = primary.generic_arity;
            }
        }

        if matches!(
            kind,
            DeclKind::Class | DeclKind::SealedClass | DeclKind::AbstractClass | DeclKind::Struct | DeclKind::Interface
        ) {
            decl.bases = primary.base_type.iter()
                .chain(primary.interfaces.iter())
                .map(|id| tree.display_name(*id))
                .collect();
        }
        decl.enum_members = primary.enum_members.clone();

        if kind != DeclKind::Namespace && kind != DeclKind::Enum {
            let mut fields = FieldSet::new();
            for member in &group.members {
                let ctx = DeclContext { tree, kind, owner: tree.node(*member) };
                for method in ctx.owner.methods() {
                    if let Some(decl_member) = self.method_decl(&ctx, method, &mut fields, diagnostics) {
                        decl.methods.push(decl_member);
                    }
                }
            }
            decl.fields = fields.iter()
                .filter_map(|slot| self.field_decl(tree, kind, slot))
                .collect();
        }

        decl.children = group.children.iter()
            .map(|child| self.group_decl(tree, layout, *child, diagnostics))
            .collect();
        decl
    }

    fn method_decl(
        &self,
        ctx: &DeclContext<'_>,
        method: &MethodRecord,
        fields: &mut FieldSet,
        diagnostics: &mut Diagnostics,
    ) -> Option<MemberDecl> {
        if let Some(unbound) = method.referenced_types().find(|id| !ctx.tree.node(*id).is_bound()) {
            log::debug!("Skipping {}: {} is not bound", method, ctx.tree.node(unbound).full_name);
            return None;
        }
        if ctx.kind == DeclKind::Interface && method.is_static {
            log::debug!("Skipping static interface member {}", method);
            return None;
        }

        let holder = ctx.kind.is_holder();
        match method.kind {
            MethodKind::Getter | MethodKind::Setter if !holder => {
                fields.insert(method);
                None
            }
            MethodKind::Getter | MethodKind::Setter | MethodKind::EventAdd | MethodKind::EventRemove => {
                let prefix = method.kind.prefix().unwrap_or_default();
                let name = format!("{}_{}", prefix, method.name);
                Some(self.plain_method(ctx, method, &name))
            }
            MethodKind::Operator if holder || ctx.kind == DeclKind::Interface => {
                log::debug!("Skipping operator {} in {}", method, ctx.owner.full_name);
                None
            }
            MethodKind::Operator => self.operator_decl(ctx, method, diagnostics),
            MethodKind::Constructor if holder => {
                let name = format!("{}{}", self.options.array_ctor_prefix, method.name);
                Some(self.plain_method(ctx, method, &name))
            }
            MethodKind::Constructor if ctx.kind == DeclKind::Interface => None,
            MethodKind::Constructor => {
                let signature = format!(
                    "public extern {}({});",
                    ctx.owner.type_name,
                    self.parameters(ctx.tree, method, None, &[])
                );
                Some(MemberDecl::new(signature).with_attribute("UdonConstructor", &method.extern_name))
            }
            MethodKind::Plain => Some(self.plain_method(ctx, method, &method.name)),
        }
    }

    fn plain_method(&self, ctx: &DeclContext<'_>, method: &MethodRecord, name: &str) -> MemberDecl {
        let receiver = ctx.receiver(method);
        let parameters = self.parameters(ctx.tree, method, receiver.as_deref(), &[]);
        let return_type = self.return_type(ctx.tree, method.output);

        let signature = if ctx.kind == DeclKind::Interface {
            format!("{} {}({});", return_type, name, parameters)
        } else {
            let modifier = if method.is_static || ctx.kind.is_holder() { "static " } else { "" };
            format!("public {}extern {} {}({});", modifier, return_type, name, parameters)
        };
        MemberDecl::new(signature).with_attribute("UdonMethod", &method.extern_name)
    }

    fn operator_decl(&self, ctx: &DeclContext<'_>, method: &MethodRecord, diagnostics: &mut Diagnostics) -> Option<MemberDecl> {
        let owner = ctx.owner.id;
        let form = operators::classify_operator(&method.name);

        match form {
            OperatorForm::Unknown => {
                diagnostics.report(&EmitError::UnhandledOperatorToken {
                    name: method.name.clone(),
                    extern_name: method.extern_name.clone(),
                });
                return None;
            }
            OperatorForm::NotOverloadable => return None,
            _ => {}
        }

        if !method.inputs.contains(&owner) && method.output != Some(owner) {
            log::debug!("Skipping operator {} not declared on {}", method, ctx.owner.full_name);
            return None;
        }

        let return_type = self.return_type(ctx.tree, method.output);
        let signature = match form {
            OperatorForm::Conversion(conversion) => {
                if method.output != Some(owner) {
                    return None;
                }
                format!(
                    "public static extern {} operator {}({});",
                    conversion.keyword(),
                    return_type,
                    self.parameters(ctx.tree, method, None, &[])
                )
            }
            OperatorForm::Symbol(token) => {
                let overrides: &[(usize, &str)] = if operators::is_shift(&method.name) {
                    &[(1, SHIFT_AMOUNT_TYPE)]
                } else {
                    &[]
                };
                format!(
                    "public static extern {} operator {}({});",
                    return_type,
                    token,
                    self.parameters(ctx.tree, method, None, overrides)
                )
            }
            OperatorForm::NotOverloadable | OperatorForm::Unknown => return None,
        };

        Some(MemberDecl::new(signature).with_attribute("UdonOperator", &method.extern_name))
    }

    fn field_decl(&self, tree: &TypeTree, kind: DeclKind, slot: &FieldSlot) -> Option<MemberDecl> {
        let Some(field_type) = slot.field_type() else {
            log::debug!("Field {} has no type", slot.name);
            return None;
        };

        let mut accessors = String::from("{ ");
        if slot.getter.is_some() {
            accessors.push_str("get; ");
        }
        if slot.setter.is_some() {
            accessors.push_str("set; ");
        }
        accessors.push('}');

        let type_name = self.type_name(tree, field_type);
        let signature = if kind == DeclKind::Interface {
            format!("{} {} {}", type_name, slot.name, accessors)
        } else {
            let modifier = if slot.is_static() { "static " } else { "" };
            format!("public {}extern {} {} {}", modifier, type_name, slot.name, accessors)
        };

        let mut decl = MemberDecl::new(signature);
        if let Some(getter) = &slot.getter {
            decl = decl.with_attribute("UdonGetMethod", &getter.extern_name);
        }
        if let Some(setter) = &slot.setter {
            decl = decl.with_attribute("UdonSetMethod", &setter.extern_name);
        }
        Some(decl)
    }

    /// `this Receiver __instance__, Type name_0, ...` with per-position type overrides.
    fn parameters(&self, tree: &TypeTree, method: &MethodRecord, receiver: Option<&str>, overrides: &[(usize, &str)]) -> String {
        let mut parameters = Vec::with_capacity(method.inputs.len() + 1);
        if let Some(receiver) = receiver {
            parameters.push(format!("this {} {}", receiver, self.options.receiver_name));
        }

        for (i, input) in method.inputs.iter().enumerate() {
            let node = tree.node(*input);
            let type_name = overrides.iter()
                .find(|(position, _)| *position == i)
                .map(|(_, name)| name.to_string())
                .unwrap_or_else(|| self.type_name(tree, *input));
            parameters.push(format!("{} {}", type_name, naming::parameter_name(&binding_name(node), i)));
        }

        parameters.join(", ")
    }

    fn return_type(&self, tree: &TypeTree, output: Option<NodeId>) -> String {
        match output {
            Some(id) => self.type_name(tree, id),
            None => "void".to_string(),
        }
    }

    fn type_name(&self, tree: &TypeTree, id: NodeId) -> String {
        if tree.node(id).full_name == VOID_TYPE {
            return "void".to_string();
        }
        tree.display_name(id)
    }
}

impl Default for DeclarationEmitter {
    fn default() -> Self {
        Self::new(EmitOptions::default())
    }
}

fn binding_name(node: &TypeNode) -> String {
    node.canonical_name.clone()
        .unwrap_or_else(|| naming::candidate_grammar_name(&node.full_name))
}
