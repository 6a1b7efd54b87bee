//! Name resolution: display names and file stems for declared types.
//!
//! Declared page names and computed link targets both go through
//! [`join_stem`] and [`page_file_name`], so they cannot drift apart.

use crate::symbols::SymbolTable;
use crate::types::TypeId;

/// Join simple names, outermost first, into a dotted file stem.
pub fn join_stem<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    return names.into_iter().collect::<Vec<_>>().join(".");
}

/// File name of a page: the stem plus the output extension.
pub fn page_file_name(stem: &str, extension: &str) -> String {
    return format!("{stem}.{extension}");
}

/// Enclosing types of `id`, outermost first. Empty for a top-level type.
pub fn enclosing_chain(table: &SymbolTable, id: TypeId) -> Vec<TypeId> {
    let mut chain = Vec::new();
    let mut current = table.get(id).and_then(|node| return node.enclosing);

    // A chain never outgrows the table.
    while let Some(outer) = current {
        if chain.len() >= table.len() {
            break;
        }
        chain.push(outer);
        current = table.get(outer).and_then(|node| return node.enclosing);
    }

    chain.reverse();
    return chain;
}

/// On-disk base name of a type's page: `Map.Outer.Entry` for `Entry`
/// nested in `Outer` nested in `Map`, or the simple name for a top-level type.
pub fn file_stem(table: &SymbolTable, id: TypeId) -> String {
    let mut ids = enclosing_chain(table, id);
    ids.push(id);
    let names = ids
        .iter()
        .filter_map(|outer| return table.get(*outer))
        .map(|node| return node.name.as_str());
    return join_stem(names);
}

/// Heading text for a type's page. Same dotted form as the file stem.
pub fn display_name(table: &SymbolTable, id: TypeId) -> String {
    return file_stem(table, id);
}
