//! Symbol provider backed by JSON model files.
//!
//! A model path is either one `.json` file or a directory; directories are
//! walked recursively and every `.json` file is merged in sorted path order
//! so the enumeration is stable across runs.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Error;
use crate::symbols::{Model, SymbolProvider, SymbolTable};

/// Reads a symbol model exported by an upstream extractor.
#[derive(Debug, Clone)]
pub struct JsonModelProvider {
    /// Model file or directory of model files.
    path: PathBuf,
}

impl JsonModelProvider {
    /// Provider for the model at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        return Self { path: path.into() };
    }

    /// Model files to read, in merge order.
    ///
    /// # Errors
    ///
    /// Returns `Error::ModelNotFound` if the path does not exist.
    pub fn model_files(&self) -> Result<Vec<PathBuf>, Error> {
        if !self.path.exists() {
            return Err(Error::ModelNotFound { path: self.path.clone() });
        }
        if self.path.is_file() {
            return Ok(vec![self.path.clone()]);
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.path)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| return e.file_type().is_file())
            .filter(|e| return e.path().extension().is_some_and(|ext| return ext == "json"))
            .map(|e| return e.path().to_path_buf())
            .collect();
        files.sort();
        return Ok(files);
    }
}

impl SymbolProvider for JsonModelProvider {
    fn load(&self) -> Result<SymbolTable, Error> {
        let mut model = Model::default();
        for file in self.model_files()? {
            tracing::debug!(path = %file.display(), "reading model");
            model.merge(read_model(&file)?);
        }
        tracing::debug!(
            packages = model.packages.len(),
            types = model.types.len(),
            "model loaded"
        );
        return SymbolTable::build(model);
    }
}

/// Read and parse one model file.
///
/// # Errors
///
/// Returns `Error::ModelNotFound` if the file is missing, `Error::ModelRead`
/// for other read failures, or `Error::ModelParse` if the JSON is not a model.
fn read_model(path: &Path) -> Result<Model, Error> {
    let content = match std::fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::ModelNotFound { path: path.to_path_buf() });
        },
        Err(source) => return Err(Error::ModelRead { path: path.to_path_buf(), source }),
        Ok(c) => c,
    };
    return serde_json::from_str(&content).map_err(|e| {
        return Error::ModelParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };
    });
}
