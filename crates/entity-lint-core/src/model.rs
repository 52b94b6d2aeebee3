//! Read-only symbol model handed over by the compiler front-end.
//!
//! The model is plain data: declared types, their base-type chain, members
//! and enumeration shapes. It is deserializable so a front-end can ship it as
//! a JSON snapshot (see [`crate::snapshot`]), and it offers small builder
//! methods so tests and embedders can construct it in code.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use crate::types::Location;

/// Mapping from module identifier to its symbol model.
///
/// A `BTreeMap` keeps module iteration (and therefore report layout) stable.
pub type ModuleSet = BTreeMap<String, SymbolModel>;

/// All types declared by one compiled module.
///
/// A snapshot must carry `types`; unknown top-level fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolModel {
    /// Module identifier as reported by the front-end, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Top-level types in declaration order.
    pub types: Vec<TypeDecl>,
}

impl SymbolModel {
    /// Creates a model from top-level types.
    #[must_use]
    pub fn new(types: Vec<TypeDecl>) -> Self {
        Self {
            module: None,
            types,
        }
    }

    /// Returns every declared type, nested types included, in pre-order.
    ///
    /// Each entry pairs the type with its qualified name
    /// (`Namespace.Outer.Inner`).
    #[must_use]
    pub fn declared_types(&self) -> Vec<(String, &TypeDecl)> {
        let mut out = Vec::new();
        for ty in &self.types {
            collect_declared(ty, None, &mut out);
        }
        out
    }
}

fn collect_declared<'a>(
    ty: &'a TypeDecl,
    parent: Option<&str>,
    out: &mut Vec<(String, &'a TypeDecl)>,
) {
    let qualified = match parent {
        Some(parent) => format!("{parent}.{}", ty.name),
        None => ty.qualified_name(),
    };
    out.push((qualified.clone(), ty));
    for nested in &ty.nested_types {
        collect_declared(nested, Some(&qualified), out);
    }
}

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// A class (abstract, sealed or plain).
    Class,
    /// An interface.
    Interface,
    /// An enumeration.
    Enum,
}

/// Declared accessibility, ordered from most restrictive to most permissive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    /// Visible to the declaring type only.
    Private,
    /// Visible to derived types in the same module.
    PrivateProtected,
    /// Visible to derived types.
    Protected,
    /// Visible within the declaring module.
    Internal,
    /// Visible to derived types or within the module.
    ProtectedInternal,
    /// Visible everywhere.
    Public,
}

impl Accessibility {
    /// Returns the keyword spelling used in messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::PrivateProtected => "private protected",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::ProtectedInternal => "protected internal",
            Self::Public => "public",
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a type's base-type chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseType {
    /// Base type name without generic arguments (e.g. `Entity`).
    pub name: String,
    /// Whether the base class is abstract.
    #[serde(default)]
    pub is_abstract: bool,
    /// Whether the base is generic over the deriving type itself
    /// (`Entity<Order>` seen from `Order`).
    #[serde(default)]
    pub self_bound: bool,
}

impl BaseType {
    /// Creates a plain, non-abstract base.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            self_bound: false,
        }
    }

    /// Creates an abstract, self-bound base such as `Entity<TSelf>`.
    #[must_use]
    pub fn self_bound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: true,
            self_bound: true,
        }
    }

    /// Marks this base as abstract.
    #[must_use]
    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }
}

/// Reference to a type from a member signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Type name, simple or qualified, without generic arguments.
    pub name: String,
    /// Kind of the referenced type, when the front-end resolved it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TypeKind>,
    /// Generic type arguments in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeRef>,
}

impl TypeRef {
    /// Creates an unresolved, non-generic reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            arguments: Vec::new(),
        }
    }

    /// Creates a reference known to point at an interface.
    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            kind: Some(TypeKind::Interface),
            ..Self::named(name)
        }
    }

    /// Creates a generic reference such as `List<OrderLine>`.
    #[must_use]
    pub fn generic(name: impl Into<String>, arguments: Vec<TypeRef>) -> Self {
        Self {
            arguments,
            ..Self::named(name)
        }
    }

    /// Renders the reference with its generic arguments (`List<OrderLine>`).
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.arguments.is_empty() {
            return self.name.clone();
        }
        let args = self
            .arguments
            .iter()
            .map(TypeRef::display_name)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}<{args}>", self.name)
    }
}

/// Kind of a declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// A field.
    Field,
    /// A method.
    Method,
    /// A constructor.
    Constructor,
    /// A nested type, listed by name only.
    NestedType,
}

/// A member declared directly on a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Member kind.
    pub kind: MemberKind,
    /// Member name.
    pub name: String,
    /// Declared accessibility.
    pub accessibility: Accessibility,
    /// Whether the member is static.
    #[serde(default)]
    pub is_static: bool,
    /// Field type or method return type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<TypeRef>,
    /// Source position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Member {
    fn new(kind: MemberKind, name: impl Into<String>, accessibility: Accessibility) -> Self {
        Self {
            kind,
            name: name.into(),
            accessibility,
            is_static: false,
            declared_type: None,
            location: None,
        }
    }

    /// Creates an instance field.
    #[must_use]
    pub fn field(name: impl Into<String>, accessibility: Accessibility, ty: TypeRef) -> Self {
        Self {
            declared_type: Some(ty),
            ..Self::new(MemberKind::Field, name, accessibility)
        }
    }

    /// Creates an instance method.
    #[must_use]
    pub fn method(name: impl Into<String>, accessibility: Accessibility) -> Self {
        Self::new(MemberKind::Method, name, accessibility)
    }

    /// Creates a constructor. Constructors are named after the type by the
    /// front-end; the name only shows up in messages.
    #[must_use]
    pub fn constructor(name: impl Into<String>, accessibility: Accessibility) -> Self {
        Self::new(MemberKind::Constructor, name, accessibility)
    }

    /// Marks the member as static.
    #[must_use]
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Attaches a source position.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Returns true for methods.
    #[must_use]
    pub fn is_method(&self) -> bool {
        self.kind == MemberKind::Method
    }

    /// Returns true for fields.
    #[must_use]
    pub fn is_field(&self) -> bool {
        self.kind == MemberKind::Field
    }
}

/// Underlying integer type of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegerWidth {
    /// Unsigned 8-bit.
    Byte,
    /// Signed 8-bit.
    Sbyte,
    /// Signed 16-bit.
    Short,
    /// Unsigned 16-bit.
    Ushort,
    /// Signed 32-bit.
    Int,
    /// Unsigned 32-bit.
    Uint,
    /// Signed 64-bit.
    Long,
    /// Unsigned 64-bit.
    Ulong,
}

impl IntegerWidth {
    /// Candidates from smallest footprint upward.
    pub const BY_FOOTPRINT: [Self; 8] = [
        Self::Byte,
        Self::Sbyte,
        Self::Short,
        Self::Ushort,
        Self::Int,
        Self::Uint,
        Self::Long,
        Self::Ulong,
    ];

    /// Storage size in bits.
    #[must_use]
    pub fn bits(self) -> u32 {
        match self {
            Self::Byte | Self::Sbyte => 8,
            Self::Short | Self::Ushort => 16,
            Self::Int | Self::Uint => 32,
            Self::Long | Self::Ulong => 64,
        }
    }

    /// Inclusive value range.
    #[must_use]
    pub fn range(self) -> (i128, i128) {
        match self {
            Self::Byte => (0, i128::from(u8::MAX)),
            Self::Sbyte => (i128::from(i8::MIN), i128::from(i8::MAX)),
            Self::Short => (i128::from(i16::MIN), i128::from(i16::MAX)),
            Self::Ushort => (0, i128::from(u16::MAX)),
            Self::Int => (i128::from(i32::MIN), i128::from(i32::MAX)),
            Self::Uint => (0, i128::from(u32::MAX)),
            Self::Long => (i128::from(i64::MIN), i128::from(i64::MAX)),
            Self::Ulong => (0, i128::from(u64::MAX)),
        }
    }

    /// Returns true if `value` is representable.
    #[must_use]
    pub fn holds(self, value: i128) -> bool {
        let (min, max) = self.range();
        (min..=max).contains(&value)
    }

    /// Keyword spelling used in messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Sbyte => "sbyte",
            Self::Short => "short",
            Self::Ushort => "ushort",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Long => "long",
            Self::Ulong => "ulong",
        }
    }
}

impl fmt::Display for IntegerWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One enumeration member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// Literal value.
    pub value: i128,
}

/// Shape of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumInfo {
    /// Declared underlying type.
    pub underlying: IntegerWidth,
    /// Members in declaration order.
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

/// A declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Simple name without generic parameters.
    pub name: String,
    /// Containing namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Type kind.
    pub kind: TypeKind,
    /// Declared `abstract`.
    #[serde(default)]
    pub is_abstract: bool,
    /// Declared `sealed`.
    #[serde(default)]
    pub is_sealed: bool,
    /// Generic parameter names (`TSelf`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_parameters: Vec<String>,
    /// Base-type chain, immediate parent first.
    #[serde(default)]
    pub base_types: Vec<BaseType>,
    /// Implemented interface names.
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Declared members in order.
    #[serde(default)]
    pub members: Vec<Member>,
    /// Nested type declarations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested_types: Vec<TypeDecl>,
    /// Enumeration shape, for enums.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_info: Option<EnumInfo>,
    /// Source position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl TypeDecl {
    fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            kind,
            is_abstract: false,
            is_sealed: false,
            generic_parameters: Vec::new(),
            base_types: Vec::new(),
            interfaces: Vec::new(),
            members: Vec::new(),
            nested_types: Vec::new(),
            enum_info: None,
            location: None,
        }
    }

    /// Creates a plain class.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    /// Creates an interface.
    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    /// Creates an enumeration.
    #[must_use]
    pub fn enumeration(name: impl Into<String>, underlying: IntegerWidth) -> Self {
        Self {
            enum_info: Some(EnumInfo {
                underlying,
                members: Vec::new(),
            }),
            ..Self::new(name, TypeKind::Enum)
        }
    }

    /// Sets the namespace.
    #[must_use]
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Marks the type abstract.
    #[must_use]
    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Marks the type sealed.
    #[must_use]
    pub fn sealed(mut self) -> Self {
        self.is_sealed = true;
        self
    }

    /// Appends the next base in the chain (call parent first).
    #[must_use]
    pub fn extends(mut self, base: BaseType) -> Self {
        self.base_types.push(base);
        self
    }

    /// Adds an implemented interface.
    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Adds a member.
    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Adds a nested type.
    #[must_use]
    pub fn with_nested(mut self, nested: TypeDecl) -> Self {
        self.nested_types.push(nested);
        self
    }

    /// Adds an enumeration member. No-op for non-enum types.
    #[must_use]
    pub fn with_variant(mut self, name: impl Into<String>, value: i128) -> Self {
        if let Some(info) = self.enum_info.as_mut() {
            info.members.push(EnumMember {
                name: name.into(),
                value,
            });
        }
        self
    }

    /// Attaches a source position.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// `Namespace.Name`, or just the name without a namespace.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{ns}.{}", self.name),
            _ => self.name.clone(),
        }
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_method())
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_field())
    }

    /// Constructors in declaration order.
    pub fn constructors(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|m| m.kind == MemberKind::Constructor)
    }

    /// Returns true if a nested type with this simple name is declared,
    /// either as a nested declaration or as a nested-type member.
    #[must_use]
    pub fn declares_nested(&self, name: &str) -> bool {
        self.nested_types.iter().any(|t| t.name == name)
            || self
                .members
                .iter()
                .any(|m| m.kind == MemberKind::NestedType && m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_types_walks_nested_in_preorder() {
        let model = SymbolModel::new(vec![
            TypeDecl::class("Order")
                .in_namespace("Shop.Domain")
                .with_nested(TypeDecl::class("OrderMetadata").with_nested(TypeDecl::class("Keys"))),
            TypeDecl::class("Customer"),
        ]);

        let names: Vec<String> = model
            .declared_types()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Shop.Domain.Order",
                "Shop.Domain.Order.OrderMetadata",
                "Shop.Domain.Order.OrderMetadata.Keys",
                "Customer",
            ]
        );
    }

    #[test]
    fn accessibility_is_ordered_by_visibility() {
        assert!(Accessibility::Private < Accessibility::Protected);
        assert!(Accessibility::Protected < Accessibility::Public);
        assert_eq!(Accessibility::ProtectedInternal.to_string(), "protected internal");
    }

    #[test]
    fn integer_width_ranges() {
        assert!(IntegerWidth::Byte.holds(255));
        assert!(!IntegerWidth::Byte.holds(-1));
        assert!(IntegerWidth::Sbyte.holds(-1));
        assert_eq!(IntegerWidth::Int.bits(), 32);
    }

    #[test]
    fn type_ref_display_name_renders_arguments() {
        let ty = TypeRef::generic(
            "Dictionary",
            vec![TypeRef::named("string"), TypeRef::generic("List", vec![TypeRef::named("Line")])],
        );
        assert_eq!(ty.display_name(), "Dictionary<string, List<Line>>");
    }

    #[test]
    fn deserializes_minimal_snapshot_shape() {
        let json = r#"{
            "types": [
                {
                    "name": "Order",
                    "kind": "class",
                    "is_sealed": true,
                    "base_types": [{ "name": "Entity", "is_abstract": true, "self_bound": true }],
                    "members": [
                        { "kind": "method", "name": "Ship", "accessibility": "public" }
                    ]
                },
                {
                    "name": "Status",
                    "kind": "enum",
                    "enum_info": { "underlying": "int", "members": [{ "name": "None", "value": 0 }] }
                }
            ]
        }"#;

        let model: SymbolModel = serde_json::from_str(json).expect("snapshot should parse");
        assert_eq!(model.types.len(), 2);
        assert!(model.types[0].base_types[0].self_bound);
        assert_eq!(model.types[0].members[0].accessibility, Accessibility::Public);
        assert_eq!(
            model.types[1].enum_info.as_ref().map(|e| e.underlying),
            Some(IntegerWidth::Int)
        );
    }
}
