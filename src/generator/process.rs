// Fri Oct 16 2026 - Alex

use super::{ApolloQueryOptions, Generator, GeneratorError, ResolverOptions};
use crate::config::GeneratorConfig;
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

#[derive(Debug, Serialize)]
struct Request<'a> {
    operation: &'static str,
    arguments: &'a [&'a Value],
}

/// Runs an external generator program once per call. The request goes to the
/// child's stdin as a single JSON document and the artifact is read back from
/// its stdout.
#[derive(Debug, Clone)]
pub struct ProcessGenerator {
    program: String,
    args: Vec<String>,
}

impl ProcessGenerator {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.program.clone()).with_args(config.args.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<Value, GeneratorError> {
        serde_json::to_value(value).map_err(|e| GeneratorError::InvalidOutput {
            program: self.program.clone(),
            message: format!("request could not be encoded: {}", e),
        })
    }

    fn run(&self, operation: &'static str, arguments: &[&Value]) -> Result<String, GeneratorError> {
        let request = Request { operation, arguments };
        let payload = serde_json::to_vec(&request).map_err(|e| GeneratorError::InvalidOutput {
            program: self.program.clone(),
            message: format!("request could not be encoded: {}", e),
        })?;

        debug!(
            "Running {} {:?} for {} ({} byte request)",
            self.program,
            self.args,
            operation,
            payload.len()
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| GeneratorError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        // Fed from a separate thread so a chatty child can't block on a full stdout pipe.
        let writer = child.stdin.take().map(|mut stdin| {
            thread::spawn(move || -> std::io::Result<()> {
                stdin.write_all(&payload)?;
                stdin.flush()
            })
        });

        let output = child.wait_with_output().map_err(|e| GeneratorError::Io {
            program: self.program.clone(),
            source: e,
        })?;

        let write_result = match writer {
            Some(handle) => handle.join().unwrap_or_else(|_| {
                Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "stdin writer panicked",
                ))
            }),
            None => Ok(()),
        };

        if !output.status.success() {
            return Err(GeneratorError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // A child that exits cleanly without reading all of stdin is still a failure.
        write_result.map_err(|e| GeneratorError::Io {
            program: self.program.clone(),
            source: e,
        })?;

        String::from_utf8(output.stdout).map_err(|e| GeneratorError::InvalidOutput {
            program: self.program.clone(),
            message: e.to_string(),
        })
    }
}

impl Generator for ProcessGenerator {
    fn generate_types(&self, input: &Value) -> Result<String, GeneratorError> {
        self.run("generateTypes", &[input])
    }

    fn generate_resolvers(
        &self,
        input: &Value,
        options: &ResolverOptions,
    ) -> Result<String, GeneratorError> {
        let options = self.encode(options)?;
        self.run("generateResolvers", &[input, &options])
    }

    fn generate_apollo_queries(
        &self,
        queries: &Value,
        schema: &Value,
        options: &ApolloQueryOptions,
    ) -> Result<String, GeneratorError> {
        let options = self.encode(options)?;
        self.run("generateApolloQueries", &[queries, schema, &options])
    }
}
