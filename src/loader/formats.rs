// Fri Oct 16 2026 - Alex

use super::{LoadError, ModuleLoader};
use serde_json::Value;
use std::path::Path;

pub struct JsonLoader;

impl ModuleLoader for JsonLoader {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn load(&self, path: &Path, source: &str) -> Result<Value, LoadError> {
        serde_json::from_str(source).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

pub struct YamlLoader;

impl ModuleLoader for YamlLoader {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn load(&self, path: &Path, source: &str) -> Result<Value, LoadError> {
        let parse_error = |message: String| LoadError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let document: serde_yaml::Value =
            serde_yaml::from_str(source).map_err(|e| parse_error(e.to_string()))?;

        // YAML allows non-string keys and tags that JSON can't carry
        serde_json::to_value(document).map_err(|e| parse_error(e.to_string()))
    }
}

/// GraphQL SDL and query documents are handed to the generator as text.
pub struct GraphqlLoader;

impl ModuleLoader for GraphqlLoader {
    fn name(&self) -> &'static str {
        "graphql"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["graphql", "gql"]
    }

    fn load(&self, _path: &Path, source: &str) -> Result<Value, LoadError> {
        Ok(Value::String(source.to_string()))
    }
}
