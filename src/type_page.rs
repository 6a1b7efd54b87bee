//! Type detail page: header, type comment, then one subsection per field
//! and per method, in declaration order.

use std::collections::HashMap;

use crate::config::Config;
use crate::links::type_link;
use crate::markdown::MarkdownDocument;
use crate::names::{display_name, join_stem};
use crate::symbols::SymbolTable;
use crate::types::{Field, Method, TypeId};

/// Compose the detail page of one type.
pub fn compose(table: &SymbolTable, id: TypeId, config: &Config) -> String {
    let mut doc = MarkdownDocument::new();
    doc.header(1, &display_name(table, id));

    let Some(node) = table.get(id) else {
        return doc.build();
    };
    push_comment(&mut doc, node.doc.as_deref());

    if !node.fields.is_empty() {
        doc.header(2, "Fields");
        for field in &node.fields {
            push_field(&mut doc, field);
        }
    }

    if !node.methods.is_empty() {
        let overloaded = overloaded_names(&node.methods);
        doc.header(2, "Methods");
        for method in &node.methods {
            let heading = if config.disambiguate_overloads && overloaded.contains(&method.name.as_str()) {
                overload_heading(method, &node.methods)
            } else {
                method.name.clone()
            };
            push_method(&mut doc, method, &heading, &config.extension);
        }
    }

    return doc.build();
}

/// Body text for a comment, followed by a blank line. Absent or blank
/// comments emit nothing.
fn push_comment(doc: &mut MarkdownDocument, comment: Option<&str>) {
    let Some(comment) = comment.filter(|c| return !c.trim().is_empty()) else {
        return;
    };
    doc.text(comment.trim_end());
    doc.new_line();
    doc.new_line();
}

/// Field subsection: name heading and comment.
fn push_field(doc: &mut MarkdownDocument, field: &Field) {
    doc.header(3, &field.name);
    push_comment(doc, field.doc.as_deref());
}

/// Method subsection: heading, comment, parameters, return type, thrown types.
fn push_method(doc: &mut MarkdownDocument, method: &Method, heading: &str, extension: &str) {
    doc.header(3, heading);
    push_comment(doc, method.doc.as_deref());

    if !method.params.is_empty() {
        doc.header(4, "Parameters");
        for param in &method.params {
            doc.item();
            doc.text(&format!("{} - {}", param.name, type_link(&param.ty, extension)));
            doc.new_line();
        }
    }

    if let Some(returns) = &method.returns {
        doc.header(4, "Returns");
        doc.text(&type_link(returns, extension));
        doc.new_line();
    }

    if !method.throws.is_empty() {
        doc.header(4, "Throws");
        for thrown in &method.throws {
            doc.item();
            doc.text(&type_link(thrown, extension));
            doc.new_line();
        }
    }
}

/// Method names declared more than once on the same type.
fn overloaded_names(methods: &[Method]) -> Vec<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for method in methods {
        let count = counts.entry(method.name.as_str()).or_default();
        *count = count.saturating_add(1);
    }
    return methods
        .iter()
        .map(|m| return m.name.as_str())
        .filter(|name| return counts.get(name).is_some_and(|n| return *n > 1))
        .collect();
}

/// Heading for one overload: `name(int, String)`. When another overload of
/// the same name would get an identical heading, linkable parameter types
/// are written package-qualified instead.
fn overload_heading(method: &Method, methods: &[Method]) -> String {
    let simple = signature_heading(method, false);
    let same = methods
        .iter()
        .filter(|other| return other.name == method.name)
        .filter(|other| return signature_heading(other, false) == simple)
        .count();
    if same > 1 {
        return signature_heading(method, true);
    }
    return simple;
}

/// `name(T1, T2)` with simple or package-qualified parameter type names.
fn signature_heading(method: &Method, qualified: bool) -> String {
    let params = method
        .params
        .iter()
        .map(|p| {
            if !qualified || !p.ty.is_resolvable() {
                return p.ty.name.clone();
            }
            let names = std::iter::once(p.ty.package.as_str())
                .chain(p.ty.enclosing.iter().map(String::as_str))
                .chain(std::iter::once(p.ty.name.as_str()));
            return join_stem(names);
        })
        .collect::<Vec<_>>()
        .join(", ");
    return format!("{}({params})", method.name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::fixtures::{decl, model};
    use crate::types::{Param, TypeRef};

    fn method(name: &str, params: Vec<Param>) -> Method {
        Method {
            doc: None,
            name: name.to_string(),
            params,
            returns: None,
            throws: Vec::new(),
        }
    }

    fn param(name: &str, ty: TypeRef) -> Param {
        Param { name: name.to_string(), ty }
    }

    #[test]
    fn bare_type_has_only_header_and_comment() {
        let mut bare = decl("p", "Empty", None);
        bare.doc = Some("<p>Nothing here.</p>".to_string());
        let table = SymbolTable::build(model(Vec::new(), vec![bare])).unwrap();
        assert_eq!(compose(&table, TypeId(0), &Config::default()), "# Empty\nNothing here.\n\n");
    }

    #[test]
    fn bare_type_without_comment_is_just_a_header() {
        let table = SymbolTable::build(model(Vec::new(), vec![decl("p", "Empty", None)])).unwrap();
        let page = compose(&table, TypeId(0), &Config::default());
        assert_eq!(page, "# Empty\n");
        assert!(!page.contains("Fields"));
        assert!(!page.contains("Methods"));
    }

    #[test]
    fn nested_type_heading_uses_display_name() {
        let table = SymbolTable::build(model(
            Vec::new(),
            vec![
                decl("java.util", "Map", None),
                decl("java.util", "Outer", Some("Map")),
                decl("java.util", "Entry", Some("Map.Outer")),
            ],
        ))
        .unwrap();
        assert_eq!(compose(&table, TypeId(2), &Config::default()), "# Map.Outer.Entry\n");
    }

    #[test]
    fn method_sections_link_resolvable_types() {
        let mut foo = method(
            "foo",
            vec![
                param("a", TypeRef::plain("TypeA")),
                param("b", TypeRef::declared("p", "TypeB")),
            ],
        );
        foo.returns = Some(TypeRef::declared("p", "TypeC"));
        foo.throws = vec![TypeRef::declared("p", "ExceptionD")];
        foo.doc = Some("Does foo.".to_string());

        let mut owner = decl("p", "Owner", None);
        owner.methods = vec![foo];
        let table = SymbolTable::build(model(Vec::new(), vec![owner])).unwrap();

        assert_eq!(
            compose(&table, TypeId(0), &Config::default()),
            "# Owner\n\
             ## Methods\n\
             ### foo\n\
             Does foo.\n\n\
             #### Parameters\n\
             * a - TypeA\n\
             * b - [TypeB](p/TypeB.md)\n\
             #### Returns\n\
             [TypeC](p/TypeC.md)\n\
             #### Throws\n\
             * [ExceptionD](p/ExceptionD.md)\n"
        );
    }

    #[test]
    fn void_method_without_params_has_no_subsections() {
        let mut owner = decl("p", "Owner", None);
        owner.methods = vec![method("run", Vec::new())];
        let table = SymbolTable::build(model(Vec::new(), vec![owner])).unwrap();
        assert_eq!(
            compose(&table, TypeId(0), &Config::default()),
            "# Owner\n## Methods\n### run\n"
        );
    }

    #[test]
    fn fields_in_declaration_order() {
        let mut owner = decl("p", "Point", None);
        owner.doc = Some("A point.".to_string());
        owner.fields = vec![
            Field {
                doc: Some("Horizontal.".to_string()),
                name: "x".to_string(),
                ty: TypeRef::plain("int"),
            },
            Field { doc: None, name: "y".to_string(), ty: TypeRef::plain("int") },
        ];
        let table = SymbolTable::build(model(Vec::new(), vec![owner])).unwrap();
        assert_eq!(
            compose(&table, TypeId(0), &Config::default()),
            "# Point\nA point.\n\n## Fields\n### x\nHorizontal.\n\n### y\n"
        );
    }

    #[test]
    fn overloads_get_signature_headings() {
        let mut owner = decl("p", "Math", None);
        owner.methods = vec![
            method("max", vec![param("a", TypeRef::plain("int")), param("b", TypeRef::plain("int"))]),
            method("max", vec![param("a", TypeRef::plain("long")), param("b", TypeRef::plain("long"))]),
            method("abs", vec![param("a", TypeRef::plain("int"))]),
        ];
        let table = SymbolTable::build(model(Vec::new(), vec![owner])).unwrap();

        let page = compose(&table, TypeId(0), &Config::default());
        assert!(page.contains("### max(int, int)\n"), "page: {page}");
        assert!(page.contains("### max(long, long)\n"), "page: {page}");
        assert!(page.contains("### abs\n"), "page: {page}");

        let parity = Config { disambiguate_overloads: false, ..Config::default() };
        let page = compose(&table, TypeId(0), &parity);
        assert_eq!(page.matches("### max\n").count(), 2);
    }

    #[test]
    fn clashing_simple_names_are_package_qualified() {
        let mut owner = decl("p", "Canvas", None);
        owner.methods = vec![
            method("draw", vec![param("l", TypeRef::declared("java.util", "List"))]),
            method("draw", vec![param("l", TypeRef::declared("java.awt", "List"))]),
            method("draw", vec![param("n", TypeRef::plain("int"))]),
        ];
        let table = SymbolTable::build(model(Vec::new(), vec![owner])).unwrap();

        let page = compose(&table, TypeId(0), &Config::default());
        assert!(page.contains("### draw(java.util.List)\n"), "page: {page}");
        assert!(page.contains("### draw(java.awt.List)\n"), "page: {page}");
        assert!(page.contains("### draw(int)\n"), "page: {page}");
    }

    #[test]
    fn empty_and_absent_comments_render_alike() {
        let mut empty = decl("p", "Empty", None);
        empty.doc = Some(String::new());
        empty.fields = vec![Field { doc: Some(String::new()), name: "x".to_string(), ty: TypeRef::plain("int") }];
        let mut absent = decl("p", "Empty", None);
        absent.fields = vec![Field { doc: None, name: "x".to_string(), ty: TypeRef::plain("int") }];

        let empty = SymbolTable::build(model(Vec::new(), vec![empty])).unwrap();
        let absent = SymbolTable::build(model(Vec::new(), vec![absent])).unwrap();
        let page = compose(&empty, TypeId(0), &Config::default());
        assert_eq!(page, "# Empty\n## Fields\n### x\n");
        assert_eq!(page, compose(&absent, TypeId(0), &Config::default()));
    }
}
