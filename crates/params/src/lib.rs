//! Startup parameter resolution.
//!
//! The store's target collection name is not baked into the code; it lives
//! in a managed parameter store under a hierarchical path and is resolved
//! once at process start. [`ParameterSource`] is the lookup seam,
//! [`resolve_collection`] the one-shot startup call. Two sources ship:
//! [`StaticSource`] for tests and embedding, [`EnvSource`] for local runs
//! backed by process environment variables.

#![warn(missing_docs)]

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

/// Failures while looking up a parameter.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParameterError {
    /// No parameter exists under the requested name.
    #[error("parameter not found: {0}")]
    NotFound(String),

    /// The source refused to disclose the parameter.
    #[error("access denied to parameter: {0}")]
    AccessDenied(String),

    /// The parameter exists but its value is unusable.
    #[error("invalid parameter {name}: {detail}")]
    Invalid {
        /// The requested parameter name.
        name: String,
        /// What made the value unusable.
        detail: String,
    },
}

/// A read-only view into a hierarchical parameter store.
///
/// Names are slash-separated paths like `/userapi/dev/collection-name`.
/// Values come back decrypted; secret handling is the source's concern.
pub trait ParameterSource {
    /// Fetch one parameter's string value.
    fn get_parameter(&self, name: &str) -> Result<String, ParameterError>;
}

/// Fixed in-memory parameters.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    parameters: HashMap<String, String>,
}

impl StaticSource {
    /// An empty source; every lookup fails with `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

impl ParameterSource for StaticSource {
    fn get_parameter(&self, name: &str) -> Result<String, ParameterError> {
        self.parameters
            .get(name)
            .cloned()
            .ok_or_else(|| ParameterError::NotFound(name.to_string()))
    }
}

/// Parameters read from process environment variables.
///
/// The path `/a/b/c-d` maps to the variable `A_B_C_D`: leading slash
/// stripped, separators and dashes become underscores, uppercased.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl EnvSource {
    /// A source over the current process environment.
    pub fn new() -> Self {
        Self
    }

    /// The environment variable a parameter path maps to.
    pub fn variable_name(name: &str) -> String {
        name.trim_start_matches('/')
            .replace(['/', '-'], "_")
            .to_uppercase()
    }
}

impl ParameterSource for EnvSource {
    fn get_parameter(&self, name: &str) -> Result<String, ParameterError> {
        let variable = Self::variable_name(name);
        match std::env::var(&variable) {
            Ok(value) => Ok(value),
            Err(std::env::VarError::NotPresent) => {
                Err(ParameterError::NotFound(name.to_string()))
            }
            Err(std::env::VarError::NotUnicode(_)) => Err(ParameterError::Invalid {
                name: name.to_string(),
                detail: format!("environment variable {} is not valid unicode", variable),
            }),
        }
    }
}

/// The conventional parameter path holding a deployment's collection name.
pub fn collection_name_parameter(project: &str, environment: &str) -> String {
    format!("/{}/{}/collection-name", project, environment)
}

/// Resolve the collection name for one deployment.
///
/// Called once at process start; the result feeds the facade configuration.
/// An empty value is rejected rather than handed to the store layer.
pub fn resolve_collection(
    source: &dyn ParameterSource,
    project: &str,
    environment: &str,
) -> Result<String, ParameterError> {
    let name = collection_name_parameter(project, environment);
    debug!("resolving collection name from {}", name);
    let value = source.get_parameter(&name)?;
    if value.is_empty() {
        return Err(ParameterError::Invalid {
            name,
            detail: "collection name is empty".to_string(),
        });
    }
    Ok(value)
}
