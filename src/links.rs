//! Link resolution for type references.
//!
//! Link targets are relative to the documentation root, never to the page
//! doing the linking, and references into the same package are not
//! special-cased.

use crate::names::{join_stem, page_file_name};
use crate::types::{TypeRef, package_path};

/// Root-relative path of the page a reference points to, or `None` when the
/// reference carries no owning package.
pub fn type_path(ty: &TypeRef, extension: &str) -> Option<String> {
    if !ty.is_resolvable() {
        return None;
    }
    let names = ty
        .enclosing
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(ty.name.as_str()));
    let stem = join_stem(names);
    let file = page_file_name(&stem, extension);
    return Some(format!("{}/{file}", package_path(&ty.package)));
}

/// Render a reference as `[Name](pkg/path/Name.ext)`, or as the bare simple
/// name when it cannot be linked.
pub fn type_link(ty: &TypeRef, extension: &str) -> String {
    return match type_path(ty, extension) {
        Some(path) => format!("[{}]({path})", ty.name),
        None => ty.name.clone(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolvable_reference_is_plain_text() {
        let ty = TypeRef::plain("int");
        assert_eq!(type_path(&ty, "md"), None);
        assert_eq!(type_link(&ty, "md"), "int");
    }

    #[test]
    fn type_variable_is_plain_text() {
        assert_eq!(type_link(&TypeRef::plain("T"), "md"), "T");
    }

    #[test]
    fn path_segments_follow_package() {
        let ty = TypeRef::declared("com.example.util", "Strings");
        let path = type_path(&ty, "md").unwrap();
        assert_eq!(path, "com/example/util/Strings.md");

        let segments: Vec<&str> = path.split('/').collect();
        let (file, dirs) = segments.split_last().unwrap();
        assert_eq!(dirs, "com.example.util".split('.').collect::<Vec<_>>());
        assert_eq!(*file, "Strings.md");
    }

    #[test]
    fn declared_reference_renders_markdown_link() {
        let ty = TypeRef::declared("p", "TypeB");
        assert_eq!(type_link(&ty, "md"), "[TypeB](p/TypeB.md)");
    }

    #[test]
    fn enclosing_names_join_like_file_stems() {
        let ty = TypeRef {
            enclosing: vec!["Map".to_string()],
            name: "Entry".to_string(),
            package: "java.util".to_string(),
        };
        assert_eq!(type_link(&ty, "md"), "[Entry](java/util/Map.Entry.md)");
    }

    #[test]
    fn extension_is_configurable() {
        let ty = TypeRef::declared("p", "A");
        assert_eq!(type_path(&ty, "html.md").as_deref(), Some("p/A.html.md"));
    }
}
