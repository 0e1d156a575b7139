//! Name-keyed reporter factories.

use std::collections::BTreeMap;
use std::fmt;

use attest_core::{AssertionResult, AttestError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Sink for the committed result stream.
///
/// Formatting and output are out of scope here; implementations live with
/// the test driver.
pub trait Reporter: fmt::Debug {
    /// Called for every committed assertion result.
    fn on_result(&mut self, result: &AssertionResult);

    /// Called for every free-text diagnostic.
    fn on_message(&mut self, message: &str);
}

/// Configuration handed to a reporter factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReporterConfig {
    /// Whether passing assertions should be forwarded to the reporter.
    #[serde(default)]
    pub include_successes: bool,
    /// Free-form reporter specific options.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl ReporterConfig {
    /// Parses a configuration from its JSON representation.
    pub fn from_json(text: &str) -> Result<Self, AttestError> {
        serde_json::from_str(text).map_err(|err| {
            AttestError::Config(
                ErrorInfo::new("attest_report.config_parse", err.to_string())
                    .with_hint("reporter configuration must be a json object"),
            )
        })
    }
}

/// Factory producing a reporter from a configuration.
pub type ReporterFactory = Box<dyn Fn(&ReporterConfig) -> Box<dyn Reporter>>;

/// Registry of reporter factories, looked up by name.
#[derive(Default)]
pub struct ReporterRegistry {
    factories: BTreeMap<String, ReporterFactory>,
}

impl ReporterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under `name`; a later registration under the same
    /// name replaces the earlier one.
    pub fn register(&mut self, name: impl Into<String>, factory: ReporterFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Creates the reporter registered under `name`.
    ///
    /// An unknown name is an explicit not-found error so the caller can
    /// report a configuration problem instead of silently falling back.
    pub fn create(
        &self,
        name: &str,
        config: &ReporterConfig,
    ) -> Result<Box<dyn Reporter>, AttestError> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory(config)),
            None => Err(AttestError::Reporter(
                ErrorInfo::new(
                    "attest_report.reporter_not_found",
                    "no reporter factory registered under this name",
                )
                .with_context("name", name)
                .with_hint("register the reporter before requesting it by name"),
            )),
        }
    }

    /// Names of all registered factories, sorted.
    pub fn factory_names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

impl fmt::Debug for ReporterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterRegistry")
            .field("factories", &self.factory_names())
            .finish()
    }
}
