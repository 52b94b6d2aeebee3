//! Entity classification and symbol lookup.
//!
//! A type is a domain entity when its base-type chain contains a self-bound
//! base (`Entity<TSelf>`). The outermost self-bound base is the entity root;
//! abstract bases between the type and the root are intermediate levels.
//!
//! Classification happens once per type when the [`SymbolIndex`] is built and
//! is cached there for every rule that runs afterwards.

use crate::model::{Location, ModuleSet, TypeDecl, TypeKind, TypeRef};
use std::collections::HashMap;

/// Classification of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityShape {
    /// Not part of the entity-base lineage.
    NotEntity,
    /// A domain entity.
    Entity {
        /// Declared abstract.
        is_abstract: bool,
        /// Index of the entity root in the base-type chain.
        root_index: usize,
        /// Abstract bases strictly between the type and the root.
        intermediate_depth: usize,
    },
}

impl EntityShape {
    /// Classifies a type by walking its full base-type chain.
    #[must_use]
    pub fn classify(ty: &TypeDecl) -> Self {
        if ty.kind != TypeKind::Class {
            return Self::NotEntity;
        }

        let Some(root_index) = ty.base_types.iter().rposition(|b| b.self_bound) else {
            return Self::NotEntity;
        };

        let intermediate_depth = ty.base_types[..root_index]
            .iter()
            .filter(|b| b.is_abstract)
            .count();

        Self::Entity {
            is_abstract: ty.is_abstract,
            root_index,
            intermediate_depth,
        }
    }

    /// Returns true for any entity.
    #[must_use]
    pub fn is_entity(self) -> bool {
        matches!(self, Self::Entity { .. })
    }

    /// Returns true for abstract entities.
    #[must_use]
    pub fn is_abstract_entity(self) -> bool {
        matches!(
            self,
            Self::Entity {
                is_abstract: true,
                ..
            }
        )
    }

    /// Returns true for concrete (sealed or leaf) entities.
    #[must_use]
    pub fn is_concrete_entity(self) -> bool {
        matches!(
            self,
            Self::Entity {
                is_abstract: false,
                ..
            }
        )
    }

    /// Intermediate abstract depth, for entities.
    #[must_use]
    pub fn intermediate_depth(self) -> Option<usize> {
        match self {
            Self::Entity {
                intermediate_depth, ..
            } => Some(intermediate_depth),
            Self::NotEntity => None,
        }
    }
}

/// One indexed type.
#[derive(Debug, Clone)]
struct IndexedType<'a> {
    module: &'a str,
    qualified_name: String,
    decl: &'a TypeDecl,
    shape: EntityShape,
}

/// Cross-module lookup table with cached classifications.
#[derive(Debug, Default)]
pub struct SymbolIndex<'a> {
    types: Vec<IndexedType<'a>>,
    by_qualified: HashMap<String, usize>,
    by_simple: HashMap<&'a str, usize>,
    per_module: Vec<(&'a str, Vec<usize>)>,
}

impl<'a> SymbolIndex<'a> {
    /// Indexes every declared type of every module.
    #[must_use]
    pub fn build(modules: &'a ModuleSet) -> Self {
        let mut index = Self::default();

        for (module, model) in modules {
            let mut ids = Vec::new();
            for (qualified_name, decl) in model.declared_types() {
                let id = index.types.len();
                index.by_qualified.entry(qualified_name.clone()).or_insert(id);
                index.by_simple.entry(decl.name.as_str()).or_insert(id);
                index.types.push(IndexedType {
                    module: module.as_str(),
                    qualified_name,
                    decl,
                    shape: EntityShape::classify(decl),
                });
                ids.push(id);
            }
            index.per_module.push((module.as_str(), ids));
        }

        index
    }

    /// Number of indexed types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types were indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Module identifiers in iteration order.
    pub fn modules(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.per_module.iter().map(|(m, _)| *m)
    }

    /// Declared types of one module, in pre-order.
    #[must_use]
    pub fn module_types(&self, module: &str) -> Vec<TypeContext<'_>> {
        self.per_module
            .iter()
            .find(|(m, _)| *m == module)
            .map(|(_, ids)| ids.iter().map(|&id| self.context(id)).collect())
            .unwrap_or_default()
    }

    fn context(&self, id: usize) -> TypeContext<'_> {
        let entry = &self.types[id];
        TypeContext {
            module: entry.module,
            qualified_name: &entry.qualified_name,
            decl: entry.decl,
            shape: entry.shape,
            index: self,
        }
    }

    fn lookup(&self, name: &str) -> Option<&IndexedType<'a>> {
        self.by_qualified
            .get(name)
            .or_else(|| self.by_simple.get(crate::utils::names::last_segment(name)))
            .map(|&id| &self.types[id])
    }

    /// Resolves a type name (qualified or simple) to its declaration.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&'a TypeDecl> {
        self.lookup(name).map(|t| t.decl)
    }

    /// Cached classification for a type name. Unknown names are not entities.
    #[must_use]
    pub fn shape_of(&self, name: &str) -> EntityShape {
        self.lookup(name)
            .map_or(EntityShape::NotEntity, |t| t.shape)
    }
}

/// A declared type as seen by a rule: declaration, cached classification and
/// access to the rest of the symbol graph.
#[derive(Debug, Clone, Copy)]
pub struct TypeContext<'i> {
    /// Module the type belongs to.
    pub module: &'i str,
    /// `Namespace.Outer.Inner`.
    pub qualified_name: &'i str,
    /// The declaration.
    pub decl: &'i TypeDecl,
    /// Cached classification.
    pub shape: EntityShape,
    index: &'i SymbolIndex<'i>,
}

impl<'i> TypeContext<'i> {
    /// Simple type name.
    #[must_use]
    pub fn name(&self) -> &'i str {
        &self.decl.name
    }

    /// Abstract entity gate.
    #[must_use]
    pub fn is_abstract_entity(&self) -> bool {
        self.shape.is_abstract_entity()
    }

    /// Concrete entity gate.
    #[must_use]
    pub fn is_concrete_entity(&self) -> bool {
        self.shape.is_concrete_entity()
    }

    /// Returns true if the reference points at an interface, either as
    /// resolved by the front-end or through the index.
    #[must_use]
    pub fn is_interface(&self, ty: &TypeRef) -> bool {
        match ty.kind {
            Some(kind) => kind == TypeKind::Interface,
            None => self
                .index
                .resolve(&ty.name)
                .is_some_and(|d| d.kind == TypeKind::Interface),
        }
    }

    /// Returns true if the reference resolves to a domain entity.
    #[must_use]
    pub fn is_entity(&self, ty: &TypeRef) -> bool {
        self.index.shape_of(&ty.name).is_entity()
    }

    /// Location of the declaration, if known.
    #[must_use]
    pub fn location(&self) -> Option<&'i Location> {
        self.decl.location.as_ref()
    }
}
