//! Append-only Markdown text accumulator.
//!
//! Knows nothing about packages or types. Doc comments often arrive as HTML
//! fragments, so `<p>` and `</p>` are stripped from header and body text.

/// Bold text decoration.
const BOLD: &str = "**";

/// Inline code decoration.
const CODE: &str = "`";

/// Italic text decoration.
const ITALIC: &str = "*";

/// List item prefix.
const LIST_ITEM: &str = "* ";

/// Separator cell used under table header columns.
const TABLE_RULE: &str = "---";

/// Remove HTML paragraph wrappers so a comment flattens to inline text.
/// Repeats until no tag is left, so tags spliced together by a removal
/// (`<</p>p>`) go too.
pub fn strip_paragraphs(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = current.replace("<p>", "").replace("</p>", "");
        if next == current {
            return next;
        }
        current = next;
    }
}

/// A Markdown document under construction.
#[derive(Debug, Default)]
pub struct MarkdownDocument {
    /// Accumulated document text.
    buffer: String,
}

impl MarkdownDocument {
    /// Append `text` wrapped in bold markers.
    pub fn bold(&mut self, text: &str) {
        self.buffer.push_str(BOLD);
        self.buffer.push_str(text);
        self.buffer.push_str(BOLD);
    }

    /// Finish the document and return its text.
    pub fn build(self) -> String {
        return self.buffer;
    }

    /// Append `text` wrapped in backticks.
    pub fn code(&mut self, text: &str) {
        self.buffer.push_str(CODE);
        self.buffer.push_str(text);
        self.buffer.push_str(CODE);
    }

    /// Append a header line of the given level.
    pub fn header(&mut self, level: usize, text: &str) {
        self.buffer.push_str(&"#".repeat(level));
        self.buffer.push(' ');
        self.text(text);
        self.new_line();
    }

    /// Append `text` wrapped in italic markers.
    pub fn italic(&mut self, text: &str) {
        self.buffer.push_str(ITALIC);
        self.buffer.push_str(text);
        self.buffer.push_str(ITALIC);
    }

    /// Start a bullet list item.
    pub fn item(&mut self) {
        self.buffer.push_str(LIST_ITEM);
    }

    /// Append a Markdown link.
    pub fn link(&mut self, label: &str, url: &str) {
        self.buffer.push('[');
        self.buffer.push_str(label);
        self.buffer.push_str("](");
        self.buffer.push_str(url);
        self.buffer.push(')');
    }

    /// Append a line break.
    pub fn new_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Create an empty document.
    pub fn new() -> Self {
        return Self::default();
    }

    /// Append an HTML anchor, for targets Markdown link syntax cannot express.
    pub fn raw_link(&mut self, label: &str, url: &str) {
        self.buffer.push_str("<a href=\"");
        self.buffer.push_str(url);
        self.buffer.push_str("\">");
        self.buffer.push_str(label);
        self.buffer.push_str("</a>");
    }

    /// Append a header row and a separator row with the same column count.
    pub fn table_header(&mut self, columns: &[&str]) {
        self.table_row(columns);
        let rule = vec![TABLE_RULE; columns.len()];
        self.table_row(&rule);
    }

    /// Append a pipe-delimited table row.
    pub fn table_row<S: AsRef<str>>(&mut self, cells: &[S]) {
        self.buffer.push_str("| ");
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                self.buffer.push_str(" | ");
            }
            self.text(&cell.as_ref().replace('|', "\\|"));
        }
        self.buffer.push_str(" |");
        self.new_line();
    }

    /// Append `text` with paragraph tags stripped and no trailing line break.
    pub fn text(&mut self, text: &str) {
        self.buffer.push_str(&strip_paragraphs(text));
    }
}
