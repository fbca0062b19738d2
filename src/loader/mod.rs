// Fri Oct 16 2026 - Alex

pub mod formats;
pub mod path;

pub use formats::{GraphqlLoader, JsonLoader, YamlLoader};
pub use path::{normalize, resolve};

use indexmap::IndexMap;
use log::debug;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot find module {0:?}")]
    NotFound(PathBuf),

    #[error("Cannot read module {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No loader for {path:?} (supported extensions: {supported})")]
    UnsupportedExtension { path: PathBuf, supported: String },

    #[error("Failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Turns the contents of an input file into the value handed to the generator.
pub trait ModuleLoader: Send + Sync {
    fn name(&self) -> &'static str;

    fn extensions(&self) -> &'static [&'static str];

    fn load(&self, path: &Path, source: &str) -> Result<Value, LoadError>;
}

#[derive(Clone)]
pub struct LoaderRegistry {
    by_extension: IndexMap<String, Arc<dyn ModuleLoader>>,
}

impl LoaderRegistry {
    pub fn empty() -> Self {
        Self {
            by_extension: IndexMap::new(),
        }
    }

    pub fn new() -> Self {
        Self::empty()
            .with_loader(JsonLoader)
            .with_loader(YamlLoader)
            .with_loader(GraphqlLoader)
    }

    pub fn with_loader<L: ModuleLoader + 'static>(mut self, loader: L) -> Self {
        self.register(loader);
        self
    }

    /// Later registrations replace earlier ones for the same extension.
    pub fn register<L: ModuleLoader + 'static>(&mut self, loader: L) {
        let loader: Arc<dyn ModuleLoader> = Arc::new(loader);
        for ext in loader.extensions() {
            self.by_extension.insert(ext.to_lowercase(), loader.clone());
        }
    }

    pub fn supported_extensions(&self) -> Vec<&str> {
        self.by_extension.keys().map(String::as_str).collect()
    }

    pub fn loader_for(&self, path: &Path) -> Option<&Arc<dyn ModuleLoader>> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        self.by_extension.get(&ext)
    }

    /// Reads and parses the file at `path`, which must already be resolved.
    pub fn load(&self, path: &Path) -> Result<Value, LoadError> {
        let loader = self
            .loader_for(path)
            .ok_or_else(|| LoadError::UnsupportedExtension {
                path: path.to_path_buf(),
                supported: self.supported_extensions().join(", "),
            })?;

        let source = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        debug!("Loading {:?} with the {} loader", path, loader.name());
        loader.load(path, &source)
    }
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
