//! Site driver: one index page per package, one detail page per type.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Error;
use crate::names::{file_stem, page_file_name};
use crate::observer::Observer;
use crate::package_page;
use crate::sink::FileSink;
use crate::symbols::SymbolTable;
use crate::type_page;
use crate::types::{PackageNode, TypeId};

/// What a completed run produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    /// Number of packages documented.
    pub packages: usize,
    /// Relative paths of every page written, in write order.
    pub pages: Vec<PathBuf>,
}

/// Planned output location of one type's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    /// The documented type.
    pub id: TypeId,
    /// Page path relative to the documentation root.
    pub path: PathBuf,
}

/// Relative path of a package's output directory.
pub fn package_dir(package: &PackageNode) -> PathBuf {
    return PathBuf::from(package.path());
}

/// Detail-page locations for every documented type of `package`, in
/// enumeration order. Nested types are included.
pub fn plan_package(table: &SymbolTable, package: &PackageNode, config: &Config) -> Vec<PagePlan> {
    let dir = package_dir(package);
    return table
        .included_types()
        .filter(|(_, node)| return node.package == package.name)
        .map(|(id, _)| {
            let file = page_file_name(&file_stem(table, id), &config.extension);
            return PagePlan { id, path: dir.join(file) };
        })
        .collect();
}

/// Generate the whole site into `sink`.
///
/// For each package in first-seen order: create its directory, write its
/// index page, then write a detail page for each of its documented types.
///
/// # Errors
///
/// Returns `Error::IndexCollision` if a type's page would replace its
/// package index, or the first `Error::CreateDir` or `Error::Write` from
/// the sink. No further pages are written after a failure.
pub fn generate(
    table: &SymbolTable,
    config: &Config,
    sink: &mut dyn FileSink,
    observer: &mut dyn Observer,
) -> Result<SiteSummary, Error> {
    let mut summary = SiteSummary::default();

    for package in table.packages() {
        if let Err(error) = generate_package(table, package, config, sink, observer, &mut summary) {
            observer.run_failed(&error);
            return Err(error);
        }
        summary.packages = summary.packages.saturating_add(1);
    }

    observer.run_finished(summary.packages, summary.pages.len());
    return Ok(summary);
}

/// Write one package's directory, index page, and type pages.
///
/// # Errors
///
/// Returns the first sink error.
fn generate_package(
    table: &SymbolTable,
    package: &PackageNode,
    config: &Config,
    sink: &mut dyn FileSink,
    observer: &mut dyn Observer,
    summary: &mut SiteSummary,
) -> Result<(), Error> {
    let dir = package_dir(package);
    let index = dir.join(&config.index_file);
    let plans = plan_package(table, package, config);
    if let Some(clash) = plans.iter().find(|plan| return plan.path == index) {
        return Err(Error::IndexCollision {
            key: qualified_name(table, clash.id),
            path: index,
        });
    }
    observer.package_started(&package.name, plans.len());

    sink.create_dir(&dir)?;

    sink.write(&index, &package_page::compose(table, package, config))?;
    observer.page_written(&index);
    summary.pages.push(index);

    for plan in plans {
        let page = type_page::compose(table, plan.id, config);
        sink.write(&plan.path, &page)?;
        observer.page_written(&plan.path);
        summary.pages.push(plan.path);
    }

    return Ok(());
}

/// `package.Outer.Inner` for diagnostics.
fn qualified_name(table: &SymbolTable, id: TypeId) -> String {
    let stem = file_stem(table, id);
    return match table.get(id) {
        Some(node) if !node.package.is_empty() => format!("{}.{stem}", node.package),
        _ => stem,
    };
}
