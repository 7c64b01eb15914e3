//! Cold-start wiring: settings, parameter lookup, handler construction.

use std::sync::Arc;

use attrstore_client::{Collection, StoreConfig, Tracer, Transport};
use attrstore_params::{resolve_collection, ParameterError, ParameterSource};
use thiserror::Error;
use tracing::info;

use crate::admin::AdminHandler;
use crate::read::ReadHandler;

/// Deployment coordinates for one running service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Project slug, first segment of every parameter path.
    pub project: String,
    /// Deployment stage (`dev`, `staging`, ...), second segment.
    pub environment: String,
}

impl Settings {
    /// Settings with explicit coordinates.
    pub fn new(project: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            environment: environment.into(),
        }
    }

    /// Read the coordinates from `PROJECT_NAME` and `ENVIRONMENT`.
    pub fn from_env() -> Result<Self, BootstrapError> {
        Ok(Self {
            project: require_env("PROJECT_NAME")?,
            environment: require_env("ENVIRONMENT")?,
        })
    }
}

fn require_env(name: &str) -> Result<String, BootstrapError> {
    std::env::var(name).map_err(|_| BootstrapError::MissingEnv(name.to_string()))
}

/// Why the service could not start.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A required environment variable is unset or not unicode.
    #[error("missing environment variable: {0}")]
    MissingEnv(String),
    /// The collection name could not be resolved.
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Both handlers, sharing one collection handle.
///
/// Built once per process and reused across invocations, like the store
/// clients it wraps.
pub struct Service<T: Transport> {
    /// The mutating handler.
    pub admin: AdminHandler<T>,
    /// The read-only handler.
    pub read: ReadHandler<T>,
}

impl<T: Transport> Service<T> {
    /// Resolve the collection name and build both handlers over `transport`.
    pub fn connect(
        settings: &Settings,
        parameters: &dyn ParameterSource,
        transport: T,
    ) -> Result<Self, BootstrapError> {
        Self::assemble(settings, parameters, transport, None)
    }

    /// Like [`Self::connect`], with operation tracing enabled.
    pub fn connect_with_tracer(
        settings: &Settings,
        parameters: &dyn ParameterSource,
        transport: T,
        tracer: Box<dyn Tracer>,
    ) -> Result<Self, BootstrapError> {
        Self::assemble(settings, parameters, transport, Some(tracer))
    }

    fn assemble(
        settings: &Settings,
        parameters: &dyn ParameterSource,
        transport: T,
        tracer: Option<Box<dyn Tracer>>,
    ) -> Result<Self, BootstrapError> {
        let collection = resolve_collection(parameters, &settings.project, &settings.environment)?;
        info!(
            "serving collection {} for {}/{}",
            collection, settings.project, settings.environment
        );

        let mut store = Collection::new(transport, StoreConfig::new(collection));
        if let Some(tracer) = tracer {
            store = store.with_tracer(tracer);
        }
        let store = Arc::new(store);

        Ok(Self {
            admin: AdminHandler::new(Arc::clone(&store)),
            read: ReadHandler::new(store),
        })
    }
}

impl<T: Transport + std::fmt::Debug> std::fmt::Debug for Service<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service").finish_non_exhaustive()
    }
}
