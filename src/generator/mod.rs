// Fri Oct 16 2026 - Alex

pub mod process;

pub use process::ProcessGenerator;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to start generator {program:?}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while talking to generator {program:?}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Generator {program:?} failed ({status}): {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Generator {program:?} produced invalid output: {message}")]
    InvalidOutput { program: String, message: String },
}

/// Options for resolver generation. Unset fields are left out of the
/// serialized record so the generator sees them as not provided.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql_module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_result_function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_result_module: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApolloQueryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql_types_module: Option<String>,
}

/// The code generator behind the three subcommands. Inputs are passed through
/// unexamined; the returned string is written out verbatim.
pub trait Generator {
    fn generate_types(&self, input: &Value) -> Result<String, GeneratorError>;

    fn generate_resolvers(
        &self,
        input: &Value,
        options: &ResolverOptions,
    ) -> Result<String, GeneratorError>;

    fn generate_apollo_queries(
        &self,
        queries: &Value,
        schema: &Value,
        options: &ApolloQueryOptions,
    ) -> Result<String, GeneratorError>;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate_types(&self, input: &Value) -> Result<String, GeneratorError> {
        (**self).generate_types(input)
    }

    fn generate_resolvers(
        &self,
        input: &Value,
        options: &ResolverOptions,
    ) -> Result<String, GeneratorError> {
        (**self).generate_resolvers(input, options)
    }

    fn generate_apollo_queries(
        &self,
        queries: &Value,
        schema: &Value,
        options: &ApolloQueryOptions,
    ) -> Result<String, GeneratorError> {
        (**self).generate_apollo_queries(queries, schema, options)
    }
}
