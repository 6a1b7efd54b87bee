//! The symbol table: an immutable snapshot of the documented model.
//!
//! Providers hand over raw declarations; [`SymbolTable::build`] resolves
//! enclosing-type keys into [`TypeId`] back-references, drops exact
//! duplicates, and groups documented types by owning package.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::Error;
use crate::types::{Field, Method, PackageNode, TypeId, TypeKind, TypeNode};

/// Anything that can hand over a fully materialized symbol table.
pub trait SymbolProvider {
    /// Load every declaration and build the table.
    ///
    /// # Errors
    ///
    /// Returns provider-specific read or parse errors, or model
    /// consistency errors from [`SymbolTable::build`].
    fn load(&self) -> Result<SymbolTable, Error>;
}

// ── Raw declarations ──────────────────────────────────────────────────

/// Every kind a provider may declare. Only classes, interfaces and enums
/// are documented; the rest can still enclose documented types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    /// Annotation type declaration.
    Annotation,
    /// Class declaration.
    Class,
    /// Enum declaration.
    Enum,
    /// Interface declaration.
    Interface,
    /// Record declaration.
    Record,
}

impl DeclKind {
    /// The documented kind, or `None` for kinds that never get pages.
    pub const fn documented(self) -> Option<TypeKind> {
        return match self {
            Self::Annotation | Self::Record => None,
            Self::Class => Some(TypeKind::Class),
            Self::Enum => Some(TypeKind::Enum),
            Self::Interface => Some(TypeKind::Interface),
        };
    }
}

/// A symbol model as read from one provider source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Model {
    /// Package declarations carrying package doc comments.
    #[serde(default)]
    pub packages: Vec<PackageDecl>,
    /// Type declarations in enumeration order.
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl Model {
    /// Append another model's declarations after this one's.
    pub fn merge(&mut self, other: Self) {
        self.packages.extend(other.packages);
        self.types.extend(other.types);
    }
}

/// A package declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageDecl {
    /// Package doc comment.
    #[serde(default)]
    pub doc: Option<String>,
    /// Qualified package name.
    pub name: String,
}

/// A type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeDecl {
    /// Type doc comment.
    #[serde(default)]
    pub doc: Option<String>,
    /// Dotted nesting path of the immediately enclosing type in the same
    /// package (`"Map"`, `"Map.Outer"`), or `None` for a top-level type.
    #[serde(default)]
    pub enclosing: Option<String>,
    /// Declared fields.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Whether the type is part of the documentation entry set.
    #[serde(default = "included_by_default")]
    pub included: bool,
    /// Declared kind.
    pub kind: DeclKind,
    /// Declared methods.
    #[serde(default)]
    pub methods: Vec<Method>,
    /// Simple name.
    pub name: String,
    /// Qualified name of the owning package.
    #[serde(default)]
    pub package: String,
}

impl TypeDecl {
    /// Dotted nesting path of this type within its package.
    fn nesting_path(&self) -> String {
        return match &self.enclosing {
            Some(outer) => format!("{outer}.{}", self.name),
            None => self.name.clone(),
        };
    }
}

/// Serde default for [`TypeDecl::included`].
const fn included_by_default() -> bool {
    return true;
}

/// Human-readable key for diagnostics: `package.Outer.Inner`.
fn qualified_key(package: &str, nesting: &str) -> String {
    if package.is_empty() {
        return nesting.to_string();
    }
    return format!("{package}.{nesting}");
}

// ── Table ─────────────────────────────────────────────────────────────

/// Immutable, read-only view of every declared type and the packages that
/// own documented types.
#[derive(Debug, Default)]
pub struct SymbolTable {
    /// Packages in first-seen order of their documented types.
    packages: Vec<PackageNode>,
    /// Every declared type, indexed by [`TypeId`].
    types: Vec<TypeNode>,
}

impl SymbolTable {
    /// Build a table from a provider model.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateType` if two different declarations share a
    /// package and nesting path, or `Error::UnknownEnclosingType` if an
    /// `enclosing` path names a type the model does not declare.
    pub fn build(model: Model) -> Result<Self, Error> {
        let mut ids: HashMap<(String, String), TypeId> = HashMap::new();
        let mut decls: Vec<TypeDecl> = Vec::new();

        for decl in model.types {
            let key = (decl.package.clone(), decl.nesting_path());
            if let Some(existing) = ids.get(&key).and_then(|id| return decls.get(id.0)) {
                if *existing == decl {
                    continue;
                }
                return Err(Error::DuplicateType {
                    key: qualified_key(&key.0, &key.1),
                });
            }
            ids.insert(key, TypeId(decls.len()));
            decls.push(decl);
        }

        let mut types = Vec::with_capacity(decls.len());
        for decl in decls {
            let enclosing = match &decl.enclosing {
                Some(outer) => {
                    let key = (decl.package.clone(), outer.clone());
                    let Some(id) = ids.get(&key) else {
                        return Err(Error::UnknownEnclosingType {
                            enclosing: outer.clone(),
                            key: qualified_key(&decl.package, &decl.nesting_path()),
                        });
                    };
                    Some(*id)
                },
                None => None,
            };
            let kind = decl.kind.documented();
            types.push(TypeNode {
                doc: decl.doc,
                enclosing,
                fields: decl.fields,
                included: decl.included && kind.is_some(),
                kind,
                methods: decl.methods,
                name: decl.name,
                package: decl.package,
            });
        }

        let packages = group_by_package(&model.packages, &types);
        return Ok(Self { packages, types });
    }

    /// Look up a type by id.
    pub fn get(&self, id: TypeId) -> Option<&TypeNode> {
        return self.types.get(id.0);
    }

    /// Documented types in enumeration order.
    pub fn included_types(&self) -> impl Iterator<Item = (TypeId, &TypeNode)> {
        return self
            .types
            .iter()
            .enumerate()
            .filter(|(_, node)| return node.included)
            .map(|(i, node)| return (TypeId(i), node));
    }

    /// Number of declared types, documented or not.
    pub fn len(&self) -> usize {
        return self.types.len();
    }

    /// Whether the table declares no types at all.
    pub fn is_empty(&self) -> bool {
        return self.types.is_empty();
    }

    /// Look up a package by qualified name.
    pub fn package(&self, name: &str) -> Option<&PackageNode> {
        return self.packages.iter().find(|p| return p.name == name);
    }

    /// Packages that own documented types, in first-seen order.
    pub fn packages(&self) -> &[PackageNode] {
        return &self.packages;
    }
}

/// Create one package node per distinct package of a documented type, in
/// first-seen order, owning its documented top-level types.
fn group_by_package(decls: &[PackageDecl], types: &[TypeNode]) -> Vec<PackageNode> {
    let mut packages: Vec<PackageNode> = Vec::new();

    for (i, node) in types.iter().enumerate() {
        if !node.included {
            continue;
        }
        let existing = packages.iter().position(|p| return p.name == node.package);
        let at = match existing {
            Some(at) => at,
            None => {
                packages.push(PackageNode {
                    doc: package_doc(decls, &node.package),
                    name: node.package.clone(),
                    types: Vec::new(),
                });
                packages.len().saturating_sub(1)
            },
        };
        if node.enclosing.is_some() {
            continue;
        }
        if let Some(package) = packages.get_mut(at) {
            package.types.push(TypeId(i));
        }
    }

    return packages;
}

/// First doc comment declared for `name` across all package declarations.
fn package_doc(decls: &[PackageDecl], name: &str) -> Option<String> {
    return decls
        .iter()
        .filter(|d| return d.name == name)
        .find_map(|d| return d.doc.clone());
}
