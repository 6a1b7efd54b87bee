/// Core domain types for the symbol model: packages, types, members, references.
use serde::Deserialize;

/// Index of a [`TypeNode`] inside a [`crate::symbols::SymbolTable`].
/// Used for enclosing-type back-references so a type never owns its outer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub usize);

/// Documented kinds of declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// A class declaration.
    Class,
    /// An enum declaration.
    Enum,
    /// An interface declaration.
    Interface,
}

impl TypeKind {
    /// Lowercase label shown in the package index table.
    pub const fn label(self) -> &'static str {
        return match self {
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Interface => "interface",
        };
    }
}

/// Non-owning cross-reference to a type, used only for link text and link paths.
///
/// An empty `package` means the reference cannot be linked: a primitive,
/// a type variable, or a symbol the provider could not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeRef {
    /// Simple names of the referenced type's enclosing types, outermost first.
    /// Providers usually leave this empty.
    #[serde(default)]
    pub enclosing: Vec<String>,
    /// Simple name of the referenced type.
    pub name: String,
    /// Qualified name of the owning package, or empty when unresolvable.
    #[serde(default)]
    pub package: String,
}

impl TypeRef {
    /// A reference that always renders as plain text.
    pub fn plain(name: &str) -> Self {
        return Self {
            enclosing: Vec::new(),
            name: name.to_string(),
            package: String::new(),
        };
    }

    /// A reference to a top-level type in `package`.
    pub fn declared(package: &str, name: &str) -> Self {
        return Self {
            enclosing: Vec::new(),
            name: name.to_string(),
            package: package.to_string(),
        };
    }

    /// Whether this reference points at a declared type that can be linked.
    pub fn is_resolvable(&self) -> bool {
        return !self.package.is_empty();
    }
}

/// A declared field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Field {
    /// Doc comment, if the source carries one.
    #[serde(default)]
    pub doc: Option<String>,
    /// Simple name.
    pub name: String,
    /// Declared type of the field.
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// A named method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Declared parameter type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// A declared method. Overloads are separate `Method` values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Method {
    /// Doc comment, if the source carries one.
    #[serde(default)]
    pub doc: Option<String>,
    /// Simple name.
    pub name: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub params: Vec<Param>,
    /// Return type; `None` when the method returns no value.
    #[serde(default)]
    pub returns: Option<TypeRef>,
    /// Declared thrown types in declaration order.
    #[serde(default)]
    pub throws: Vec<TypeRef>,
}

/// A declared type as held by the symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNode {
    /// Doc comment, if the source carries one.
    pub doc: Option<String>,
    /// Immediately enclosing type, or `None` for a top-level type.
    pub enclosing: Option<TypeId>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Whether the type gets a page. Types of undocumented kinds stay in the
    /// table only so nested documented types can resolve their names.
    pub included: bool,
    /// Documented kind, or `None` for kinds that never get pages.
    pub kind: Option<TypeKind>,
    /// Methods in declaration order.
    pub methods: Vec<Method>,
    /// Simple name.
    pub name: String,
    /// Qualified name of the owning package.
    pub package: String,
}

/// A package and the types it directly owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    /// Package doc comment. `Some("")` and `None` are distinct states.
    pub doc: Option<String>,
    /// Dot-separated qualified name; empty for the unnamed package.
    pub name: String,
    /// Included top-level types in first-seen order.
    pub types: Vec<TypeId>,
}

impl PackageNode {
    /// Package name with `.` replaced by `/`: the package's output directory.
    pub fn path(&self) -> String {
        return package_path(&self.name);
    }
}

/// Convert a qualified package name into a `/`-separated relative path.
pub fn package_path(package: &str) -> String {
    return package.replace('.', "/");
}
