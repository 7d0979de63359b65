//! The `ProjectConfig` aggregate root and its builder.
//!
//! A `ProjectConfig` is the fully-validated, immutable description of the
//! backend project the user wants generated. It is constructed once per run
//! (by the CLI front end) and flows unchanged into every other component;
//! nothing downstream mutates it.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    stack::{Database, Feature},
};

// ── Project name ──────────────────────────────────────────────────────────────

/// A validated project name.
///
/// Invariant: non-empty, only lowercase ASCII letters, digits, hyphen, and
/// underscore. The name doubles as the target directory name and as the
/// `name` field of the generated `package.json`-adjacent artifacts, so the
/// character set is the npm-safe subset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a project name. No trimming, no case-folding:
    /// callers that want the questionnaire's lenient behavior normalize
    /// *before* construction.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(DomainError::InvalidProjectName { name });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

// ── Aggregate root ────────────────────────────────────────────────────────────

/// The finalized set of user choices driving all generation decisions.
///
/// Guaranteed consistent on construction:
/// - `name` satisfies the [`ProjectName`] invariant
/// - `database` is one of the three supported backends (closed enum)
/// - the three feature toggles are independent; any combination is valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    name: ProjectName,
    database: Database,
    api_docs: bool,
    schema_validation: bool,
    email_transport: bool,
}

impl ProjectConfig {
    /// Start building a config for the given (not yet validated) name.
    pub fn builder(name: impl Into<String>) -> ProjectConfigBuilder {
        ProjectConfigBuilder::new(name)
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub const fn database(&self) -> Database {
        self.database
    }

    /// Whether an optional feature is enabled.
    pub const fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::ApiDocs => self.api_docs,
            Feature::SchemaValidation => self.schema_validation,
            Feature::EmailTransport => self.email_transport,
        }
    }

    /// Enabled features, in registry order.
    pub fn enabled_features(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.has(*f))
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.database)?;
        for feature in self.enabled_features() {
            write!(f, " +{feature}")?;
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`ProjectConfig`].
///
/// Unset fields fall back to the model defaults: document-store database,
/// all feature toggles off. The questionnaire's own answer defaults live in
/// the capability registry, not here.
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    name: String,
    database: Database,
    api_docs: bool,
    schema_validation: bool,
    email_transport: bool,
}

impl ProjectConfigBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database: Database::default(),
            api_docs: false,
            schema_validation: false,
            email_transport: false,
        }
    }

    pub fn database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    pub fn api_docs(mut self, enabled: bool) -> Self {
        self.api_docs = enabled;
        self
    }

    pub fn schema_validation(mut self, enabled: bool) -> Self {
        self.schema_validation = enabled;
        self
    }

    pub fn email_transport(mut self, enabled: bool) -> Self {
        self.email_transport = enabled;
        self
    }

    /// Registry-driven toggle setter, for callers that iterate
    /// [`Feature::ALL`] (the questionnaire, the config layer).
    pub fn feature(self, feature: Feature, enabled: bool) -> Self {
        match feature {
            Feature::ApiDocs => self.api_docs(enabled),
            Feature::SchemaValidation => self.schema_validation(enabled),
            Feature::EmailTransport => self.email_transport(enabled),
        }
    }

    /// Validate and freeze the configuration.
    ///
    /// The only failure mode is an invalid project name; every other field
    /// is already constrained by its type.
    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        Ok(ProjectConfig {
            name: ProjectName::new(self.name)?,
            database: self.database,
            api_docs: self.api_docs,
            schema_validation: self.schema_validation,
            email_transport: self.email_transport,
        })
    }
}
