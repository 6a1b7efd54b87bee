//! Generate a cross-linked Markdown documentation site from a symbol model.
//!
//! A [`symbols::SymbolProvider`] hands over packages, types, fields and
//! methods. The generator derives one file stem per type ([`names`]),
//! resolves type references into root-relative links ([`links`]), composes
//! package index pages ([`package_page`]) and type detail pages
//! ([`type_page`]) with a [`markdown::MarkdownDocument`], and writes them
//! through a [`sink::FileSink`] ([`site`]).

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod links;
pub mod markdown;
pub mod names;
pub mod observer;
pub mod package_page;
pub mod provider;
pub mod site;
pub mod sink;
pub mod symbols;
pub mod type_page;
pub mod types;

pub use error::Error;
