/// Crate-level error types for docmark diagnostics.
use std::path::PathBuf;

/// All errors in docmark carry enough context to produce a useful diagnostic
/// without a debugger. Each variant names the file, type key, or reason for failure.
///
/// Missing documentation and unresolvable type references are not errors:
/// they render as omitted sections and plain text respectively.
#[allow(clippy::error_impl_error, reason = "crate-level error type re-exported as docmark::Error")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file sink could not create an output directory.
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// Two declarations share a type key but disagree on their contents.
    #[error("duplicate type declaration: `{key}`")]
    DuplicateType {
        /// Package-qualified nesting key of the type.
        key: String,
    },

    /// A type's detail page would land on its package's index page.
    #[error("type `{key}` would overwrite the package index {}", path.display())]
    IndexCollision {
        /// Package-qualified key of the type.
        key: String,
        /// Page path shared by the index and the type.
        path: PathBuf,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// A symbol model path does not exist on disk.
    #[error("model not found: {}", path.display())]
    ModelNotFound {
        /// Path to the missing model file or directory.
        path: PathBuf,
    },

    /// A symbol model file exists but is not a valid model.
    #[error("model parse failed: {}: {reason}", path.display())]
    ModelParse {
        /// Model file that failed to parse.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// A symbol model file exists but could not be read.
    #[error("cannot read model {}: {source}", path.display())]
    ModelRead {
        /// Model file that could not be read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// TOML deserialization of `.docmark.toml` failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// A type names an enclosing type that the model does not declare.
    #[error("unknown enclosing type `{enclosing}` for `{key}`")]
    UnknownEnclosingType {
        /// Enclosing key as written in the model.
        enclosing: String,
        /// Package-qualified key of the nested type.
        key: String,
    },

    /// The file sink could not write a page.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// Page that could not be written.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}
