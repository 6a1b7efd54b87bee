use std::path::Path;

use crate::error::Error;

/// ANSI bold, used for headings on a terminal.
const BOLD: &str = "\x1b[1m";
/// ANSI reset.
const RESET: &str = "\x1b[0m";

/// Render an error as Markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured Markdown diagnostic: what happened and,
/// where there is one, how to fix it.
pub fn render_error(e: &Error) -> String {
    return match e {
        Error::CreateDir { path, source } => render_output_failure("Cannot Create Directory", path, source),
        Error::DuplicateType { key } => render_duplicate_type(key),
        Error::IndexCollision { key, path } => render_index_collision(key, path),
        Error::Io(e) => format!("\
# Error: I/O

{e}
"),
        Error::ModelNotFound { path } => render_model_not_found(path),
        Error::ModelParse { path, reason } => format!("\
# Error: Invalid Symbol Model

Could not parse `{}`: {reason}
", path.display()),
        Error::ModelRead { path, source } => format!("\
# Error: Cannot Read Model

`{}`: {source}
", path.display()),
        Error::TomlDe(e) => format!("\
# Error: Invalid .docmark.toml

{e}

## Fix

Allowed keys: `output`, `extension`, `index_file`, `disambiguate_overloads`.
"),
        Error::UnknownEnclosingType { enclosing, key } => render_unknown_enclosing(enclosing, key),
        Error::Write { path, source } => render_output_failure("Cannot Write Page", path, source),
    };
}

fn render_output_failure(title: &str, path: &Path, source: &std::io::Error) -> String {
    return format!("\
# Error: {title}

`{}`: {source}

Generation stopped; pages written before this one are left in place.

## Fix

Check that the output directory is writable, or pass another one:

    docmark generate <MODEL> -d <DIR>
", path.display());
}

fn render_model_not_found(path: &Path) -> String {
    return format!("\
# Error: Model Not Found

`{}` does not exist.

## Fix

Pass a symbol model file, or a directory of `.json` model files:

    docmark generate path/to/model.json
", path.display());
}

fn render_duplicate_type(key: &str) -> String {
    return format!("\
# Error: Duplicate Type

`{key}` is declared more than once with different contents.

## Fix

Remove the stale declaration, or regenerate the model from a clean build.
");
}

fn render_index_collision(key: &str, path: &Path) -> String {
    return format!("\
# Error: Page Name Collision

The page for `{key}` would be written to `{}`, the package index.

## Fix

Set a different `index_file` or `extension` in `.docmark.toml`.
", path.display());
}

fn render_unknown_enclosing(enclosing: &str, key: &str) -> String {
    return format!("\
# Error: Unknown Enclosing Type

`{key}` is nested in `{enclosing}`, which the model does not declare.

## Fix

Declare `{enclosing}` in the same package, or give `enclosing` the full
nesting path of the outer type (for example `Map.Outer`).
");
}
