//! Package index page: package header, package comment, and a table of the
//! types the package directly owns.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::markdown::{MarkdownDocument, strip_paragraphs};
use crate::names::{display_name, file_stem, page_file_name};
use crate::symbols::SymbolTable;
use crate::types::PackageNode;

/// Heading used for the unnamed package.
const DEFAULT_PACKAGE: &str = "(default package)";

/// Runs of carriage returns and line feeds inside a comment.
static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| return Regex::new(r"[\r\n]+").expect("valid regex"));

/// First sentence of a doc comment, for summary table cells.
///
/// Paragraph tags are stripped and each line-break run becomes one space.
/// The text is cut after the first `.`, `?` or `!`; without a terminator the
/// whole comment is used. Absent or empty comments yield an empty string.
///
/// # Panics
///
/// Panics if the hardcoded line-break regex is invalid (compile-time invariant).
pub fn first_sentence(comment: Option<&str>) -> String {
    let Some(comment) = comment.filter(|c| return !c.is_empty()) else {
        return String::new();
    };
    let flattened = strip_paragraphs(comment);
    let normalized = LINE_BREAKS.replace_all(&flattened, " ");
    let text: &str = &normalized;
    let sentence = match text.find(['.', '?', '!']) {
        Some(at) => text.get(..=at).unwrap_or(text),
        None => text,
    };
    return sentence.trim().to_string();
}

/// Compose the index page of one package.
pub fn compose(table: &SymbolTable, package: &PackageNode, config: &Config) -> String {
    let mut doc = MarkdownDocument::new();

    let title = if package.name.is_empty() { DEFAULT_PACKAGE } else { package.name.as_str() };
    doc.header(1, title);
    if let Some(comment) = package.doc.as_deref().filter(|c| return !c.trim().is_empty()) {
        doc.text(comment.trim_end());
        doc.new_line();
        doc.new_line();
    }

    if package.types.is_empty() {
        return doc.build();
    }

    doc.header(2, "Types");
    doc.table_header(&["Name", "Kind", "Description"]);
    for id in &package.types {
        let Some(node) = table.get(*id) else {
            continue;
        };
        let mut name = MarkdownDocument::new();
        let target = page_file_name(&file_stem(table, *id), &config.extension);
        name.link(&display_name(table, *id), &target);
        let kind = node.kind.map_or("", |k| return k.label());
        let description = first_sentence(node.doc.as_deref());
        doc.table_row(&[name.build(), kind.to_string(), description]);
    }

    return doc.build();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::DeclKind;
    use crate::symbols::fixtures::{decl, model, package};

    #[test]
    fn first_sentence_cuts_at_terminator() {
        assert_eq!(first_sentence(Some("<p>Hello. World.</p>")), "Hello.");
        assert_eq!(first_sentence(Some("Really? Yes.")), "Really?");
        assert_eq!(first_sentence(Some("  Stop! Now.")), "Stop!");
        assert_eq!(first_sentence(Some("<</p>p>Hi")), "Hi");
    }

    #[test]
    fn first_sentence_joins_lines() {
        assert_eq!(
            first_sentence(Some("Builds the\r\n\r\nfull index. Then more.")),
            "Builds the full index."
        );
    }

    #[test]
    fn first_sentence_without_terminator_uses_whole_comment() {
        assert_eq!(first_sentence(Some(" no terminator here \n")), "no terminator here");
    }

    #[test]
    fn first_sentence_of_missing_comment_is_empty() {
        assert_eq!(first_sentence(None), "");
        assert_eq!(first_sentence(Some("")), "");
    }

    #[test]
    fn first_sentence_is_idempotent() {
        for input in ["<p>Hello. World.</p>", "One line\nsecond", "Why? Because.", "", "  x  "] {
            let once = first_sentence(Some(input));
            assert_eq!(first_sentence(Some(once.as_str())), once, "input: {input:?}");
        }
    }

    #[test]
    fn package_without_types_has_no_types_section() {
        let mut outer = decl("p", "Marker", None);
        outer.kind = DeclKind::Annotation;
        let table = SymbolTable::build(model(
            Vec::new(),
            vec![outer, decl("p", "Value", Some("Marker"))],
        ))
        .unwrap();
        let page = compose(&table, table.package("p").unwrap(), &Config::default());
        assert_eq!(page, "# p\n");
    }

    #[test]
    fn package_page_lists_owned_types() {
        let mut first = decl("com.example", "Parser", None);
        first.doc = Some("<p>Parses input.\nHandles errors.</p>".to_string());
        let mut second = decl("com.example", "Mode", None);
        second.kind = DeclKind::Enum;
        let table = SymbolTable::build(model(
            vec![package("com.example", Some("Example package."))],
            vec![first, second, decl("com.example", "Inner", Some("Parser"))],
        ))
        .unwrap();

        let page = compose(&table, table.package("com.example").unwrap(), &Config::default());
        assert_eq!(
            page,
            "# com.example\n\
             Example package.\n\n\
             ## Types\n\
             | Name | Kind | Description |\n\
             | --- | --- | --- |\n\
             | [Parser](Parser.md) | class | Parses input. |\n\
             | [Mode](Mode.md) | enum |  |\n"
        );
    }

    #[test]
    fn empty_package_comment_is_omitted() {
        let table = SymbolTable::build(model(
            vec![package("p", Some(""))],
            vec![decl("p", "A", None)],
        ))
        .unwrap();
        let page = compose(&table, table.package("p").unwrap(), &Config::default());
        assert!(page.starts_with("# p\n## Types\n"), "page: {page}");
    }

    #[test]
    fn unnamed_package_gets_placeholder_heading() {
        let table = SymbolTable::build(model(Vec::new(), vec![decl("", "Main", None)])).unwrap();
        let page = compose(&table, table.package("").unwrap(), &Config::default());
        assert!(page.starts_with("# (default package)\n"), "page: {page}");
    }
}
