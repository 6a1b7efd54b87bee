//! Progress observation for site generation. Observers never affect output.

use std::path::Path;

/// Receives progress events while a site is generated.
/// Every method defaults to doing nothing.
pub trait Observer {
    /// A package's pages are about to be generated.
    fn package_started(&mut self, _package: &str, _types: usize) {}

    /// A page was handed to the sink successfully.
    fn page_written(&mut self, _path: &Path) {}

    /// Generation stopped on an error.
    fn run_failed(&mut self, _error: &crate::error::Error) {}

    /// Every page was written.
    fn run_finished(&mut self, _packages: usize, _pages: usize) {}
}

/// Ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl Observer for NullObserver {}

/// Forwards events to `tracing` with structured fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn package_started(&mut self, package: &str, types: usize) {
        tracing::info!(package, types, "generating package");
    }

    fn page_written(&mut self, path: &Path) {
        tracing::debug!(path = %path.display(), "page written");
    }

    fn run_failed(&mut self, error: &crate::error::Error) {
        tracing::error!(%error, "generation aborted");
    }

    fn run_finished(&mut self, packages: usize, pages: usize) {
        tracing::info!(packages, pages, "documentation generated");
    }
}
