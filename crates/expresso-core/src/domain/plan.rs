//! The artifact plan: which files a configuration produces, where, and in
//! what order.
//!
//! [`ArtifactKind`] is a typed generator reference: each variant knows its
//! logical path, its composition phase, and which catalog function renders
//! it. [`ArtifactPlan::build`] applies the conditional-inclusion rules and
//! fixes the write order. Everything here is pure; materializing the plan
//! onto a filesystem is the composer's job.

use std::fmt;
use std::path::Path;

use crate::domain::{config::ProjectConfig, error::DomainError, stack::Feature, templates};

/// The fixed folder set, independent of configuration.
///
/// The full conventional tree is always created, even for directories that
/// end up empty (services, and models under a relational choice), so every
/// generated project has the same predictable shape.
pub const FOLDERS: &[&str] = &[
    "src",
    "src/controllers",
    "src/routes",
    "src/middleware",
    "src/config",
    "src/services",
    "src/models",
    "src/utils",
];

// ── Phases ───────────────────────────────────────────────────────────────────

/// Composition phase of an artifact. Directories are realized before any
/// phase; phases then run strictly in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Config,
    Source,
    Documentation,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Self::Config, Self::Source, Self::Documentation];

    /// Progress-reporting label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Config => "configuration files",
            Self::Source => "source files",
            Self::Documentation => "documentation",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Artifact kinds ───────────────────────────────────────────────────────────

/// Every artifact the catalog can generate.
///
/// One variant per generator function; the variant is the plan's
/// "generator reference".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    EnvTemplate,
    IgnoreRules,
    DatabaseConfig,
    AppEntry,
    HealthController,
    HealthRoutes,
    ErrorMiddleware,
    AuthMiddleware,
    SwaggerConfig,
    MailerConfig,
    ValidationSchemas,
    UserModel,
    Readme,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 13] = [
        Self::EnvTemplate,
        Self::IgnoreRules,
        Self::DatabaseConfig,
        Self::AppEntry,
        Self::HealthController,
        Self::HealthRoutes,
        Self::ErrorMiddleware,
        Self::AuthMiddleware,
        Self::SwaggerConfig,
        Self::MailerConfig,
        Self::ValidationSchemas,
        Self::UserModel,
        Self::Readme,
    ];

    /// Logical path inside the generated project, always relative.
    pub const fn path(&self) -> &'static str {
        match self {
            Self::EnvTemplate => ".env.example",
            Self::IgnoreRules => ".gitignore",
            Self::DatabaseConfig => "src/config/db.js",
            Self::AppEntry => "src/app.js",
            Self::HealthController => "src/controllers/healthController.js",
            Self::HealthRoutes => "src/routes/healthRoutes.js",
            Self::ErrorMiddleware => "src/middleware/errorHandler.js",
            Self::AuthMiddleware => "src/middleware/auth.js",
            Self::SwaggerConfig => "src/config/swagger.js",
            Self::MailerConfig => "src/config/nodemailer.js",
            Self::ValidationSchemas => "src/utils/validation.js",
            Self::UserModel => "src/models/User.js",
            Self::Readme => "README.md",
        }
    }

    /// The composition phase this artifact is written in.
    ///
    /// The swagger and mailer configs live under `src/config/` but belong
    /// to the source phase: they are feature code, not project
    /// configuration.
    pub const fn phase(&self) -> Phase {
        match self {
            Self::EnvTemplate | Self::IgnoreRules | Self::DatabaseConfig => Phase::Config,
            Self::AppEntry
            | Self::HealthController
            | Self::HealthRoutes
            | Self::ErrorMiddleware
            | Self::AuthMiddleware
            | Self::SwaggerConfig
            | Self::MailerConfig
            | Self::ValidationSchemas
            | Self::UserModel => Phase::Source,
            Self::Readme => Phase::Documentation,
        }
    }

    /// Render this artifact's content for a configuration. Pure.
    pub fn render(&self, config: &ProjectConfig) -> String {
        match self {
            Self::EnvTemplate => templates::env_example(config),
            Self::IgnoreRules => templates::gitignore(),
            Self::DatabaseConfig => templates::database_config(config.database()),
            Self::AppEntry => templates::app_entry(config),
            Self::HealthController => templates::health_controller(),
            Self::HealthRoutes => templates::health_routes(),
            Self::ErrorMiddleware => templates::error_middleware(),
            Self::AuthMiddleware => templates::auth_middleware(),
            Self::SwaggerConfig => templates::swagger_config(config.name()),
            Self::MailerConfig => templates::mailer_config(),
            Self::ValidationSchemas => templates::validation_schemas(),
            Self::UserModel => templates::user_model(),
            Self::Readme => templates::readme(config),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// ── Artifacts ────────────────────────────────────────────────────────────────

/// One generated file: logical relative path plus full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: &'static str,
    pub content: String,
}

// ── The plan ─────────────────────────────────────────────────────────────────

/// The ordered set of artifacts to materialize for one configuration.
///
/// Invariants: paths are unique and relative (checked by
/// [`validate`](Self::validate)); entries are sorted by phase, guaranteed
/// by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPlan {
    entries: Vec<ArtifactKind>,
}

impl ArtifactPlan {
    /// Apply the conditional-inclusion rules for a configuration.
    ///
    /// Always: env template, ignore rules, database config, app entry,
    /// health controller, health routes, error middleware, auth middleware,
    /// readme. Conditional: swagger config iff api-docs; mailer config iff
    /// email-transport; validation schemas iff schema-validation; user
    /// model iff document store (relational choices defer models to the
    /// schema tool).
    pub fn build(config: &ProjectConfig) -> Self {
        let mut entries = vec![
            ArtifactKind::EnvTemplate,
            ArtifactKind::IgnoreRules,
            ArtifactKind::DatabaseConfig,
            ArtifactKind::AppEntry,
            ArtifactKind::HealthController,
            ArtifactKind::HealthRoutes,
            ArtifactKind::ErrorMiddleware,
            ArtifactKind::AuthMiddleware,
        ];

        if config.has(Feature::ApiDocs) {
            entries.push(ArtifactKind::SwaggerConfig);
        }
        if config.has(Feature::EmailTransport) {
            entries.push(ArtifactKind::MailerConfig);
        }
        if config.has(Feature::SchemaValidation) {
            entries.push(ArtifactKind::ValidationSchemas);
        }
        if !config.database().is_relational() {
            entries.push(ArtifactKind::UserModel);
        }

        entries.push(ArtifactKind::Readme);

        let plan = Self { entries };
        debug_assert!(plan.validate().is_ok());
        plan
    }

    /// The fixed directory set. Same for every configuration.
    pub const fn folders(&self) -> &'static [&'static str] {
        FOLDERS
    }

    /// All planned artifacts, in write order.
    pub fn artifacts(&self) -> &[ArtifactKind] {
        &self.entries
    }

    /// Planned artifacts belonging to one phase, preserving write order.
    pub fn in_phase(&self, phase: Phase) -> impl Iterator<Item = ArtifactKind> + '_ {
        self.entries.iter().copied().filter(move |k| k.phase() == phase)
    }

    pub fn contains(&self, kind: ArtifactKind) -> bool {
        self.entries.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the plan's structural invariants: unique, relative paths.
    /// Phase ordering is guaranteed by construction in [`build`](Self::build).
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = std::collections::HashSet::new();
        for kind in &self.entries {
            let path = kind.path();
            if Path::new(path).is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path.into() });
            }
            if !seen.insert(path) {
                return Err(DomainError::DuplicateArtifactPath { path: path.into() });
            }
        }
        Ok(())
    }

    /// Render every planned artifact. Pure; the full generation output as
    /// an in-memory value, used by dry runs and the property tests.
    pub fn materialize(&self, config: &ProjectConfig) -> Vec<Artifact> {
        self.entries
            .iter()
            .map(|kind| Artifact {
                path: kind.path(),
                content: kind.render(config),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stack::Database;

    fn config(database: Database, docs: bool, validation: bool, email: bool) -> ProjectConfig {
        ProjectConfig::builder("demo-api")
            .database(database)
            .api_docs(docs)
            .schema_validation(validation)
            .email_transport(email)
            .build()
            .unwrap()
    }

    // ── Fixed shape ──────────────────────────────────────────────────────

    #[test]
    fn folder_set_is_configuration_independent() {
        let a = ArtifactPlan::build(&config(Database::MongoDb, true, true, true));
        let b = ArtifactPlan::build(&config(Database::PostgreSql, false, false, false));
        assert_eq!(a.folders(), b.folders());
        assert_eq!(a.folders().len(), 8);
        assert!(a.folders().contains(&"src/services"));
    }

    #[test]
    fn every_plan_carries_the_fixed_artifacts() {
        for database in Database::ALL {
            let plan = ArtifactPlan::build(&config(database, false, false, false));
            for kind in [
                ArtifactKind::EnvTemplate,
                ArtifactKind::IgnoreRules,
                ArtifactKind::DatabaseConfig,
                ArtifactKind::AppEntry,
                ArtifactKind::HealthController,
                ArtifactKind::HealthRoutes,
                ArtifactKind::ErrorMiddleware,
                ArtifactKind::AuthMiddleware,
                ArtifactKind::Readme,
            ] {
                assert!(plan.contains(kind), "{database}: missing {kind:?}");
            }
        }
    }

    #[test]
    fn readme_is_written_last() {
        let plan = ArtifactPlan::build(&config(Database::MongoDb, true, true, true));
        assert_eq!(*plan.artifacts().last().unwrap(), ArtifactKind::Readme);
    }

    // ── Conditional inclusion ────────────────────────────────────────────

    #[test]
    fn toggles_gate_their_artifacts() {
        let none = ArtifactPlan::build(&config(Database::MongoDb, false, false, false));
        assert!(!none.contains(ArtifactKind::SwaggerConfig));
        assert!(!none.contains(ArtifactKind::MailerConfig));
        assert!(!none.contains(ArtifactKind::ValidationSchemas));

        let all = ArtifactPlan::build(&config(Database::MongoDb, true, true, true));
        assert!(all.contains(ArtifactKind::SwaggerConfig));
        assert!(all.contains(ArtifactKind::MailerConfig));
        assert!(all.contains(ArtifactKind::ValidationSchemas));
    }

    #[test]
    fn model_only_for_the_document_store() {
        assert!(
            ArtifactPlan::build(&config(Database::MongoDb, false, false, false))
                .contains(ArtifactKind::UserModel)
        );
        for db in [Database::PostgreSql, Database::MySql] {
            assert!(
                !ArtifactPlan::build(&config(db, true, true, true))
                    .contains(ArtifactKind::UserModel),
                "{db} must not receive a hand-written model"
            );
        }
    }

    // ── Invariants ───────────────────────────────────────────────────────

    #[test]
    fn built_plans_validate() {
        for database in Database::ALL {
            for bits in 0..8u8 {
                let plan = ArtifactPlan::build(&config(
                    database,
                    bits & 1 != 0,
                    bits & 2 != 0,
                    bits & 4 != 0,
                ));
                assert!(plan.validate().is_ok());
            }
        }
    }

    #[test]
    fn validate_rejects_duplicate_paths() {
        let plan = ArtifactPlan {
            entries: vec![ArtifactKind::EnvTemplate, ArtifactKind::EnvTemplate],
        };
        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicateArtifactPath { .. })
        ));
    }

    #[test]
    fn kind_paths_are_distinct_and_relative() {
        let mut seen = std::collections::HashSet::new();
        for kind in ArtifactKind::ALL {
            assert!(!Path::new(kind.path()).is_absolute());
            assert!(seen.insert(kind.path()), "{} duplicated", kind.path());
        }
    }

    #[test]
    fn artifact_paths_sit_inside_planned_folders() {
        for kind in ArtifactKind::ALL {
            if let Some(parent) = Path::new(kind.path()).parent() {
                if parent.as_os_str().is_empty() {
                    continue; // top-level file
                }
                assert!(
                    FOLDERS.contains(&parent.to_str().unwrap()),
                    "{} has no planned parent folder",
                    kind.path()
                );
            }
        }
    }

    // ── Phases ───────────────────────────────────────────────────────────

    #[test]
    fn phases_partition_the_plan_in_order() {
        let plan = ArtifactPlan::build(&config(Database::MongoDb, true, true, true));

        let config_phase: Vec<_> = plan.in_phase(Phase::Config).collect();
        assert_eq!(
            config_phase,
            vec![
                ArtifactKind::EnvTemplate,
                ArtifactKind::IgnoreRules,
                ArtifactKind::DatabaseConfig
            ]
        );

        let docs_phase: Vec<_> = plan.in_phase(Phase::Documentation).collect();
        assert_eq!(docs_phase, vec![ArtifactKind::Readme]);

        let rebuilt: Vec<_> = Phase::ALL
            .into_iter()
            .flat_map(|p| plan.in_phase(p).collect::<Vec<_>>())
            .collect();
        assert_eq!(rebuilt.as_slice(), plan.artifacts());
    }

    // ── Materialization ──────────────────────────────────────────────────

    #[test]
    fn materialize_renders_every_entry_once() {
        let cfg = config(Database::PostgreSql, true, false, false);
        let plan = ArtifactPlan::build(&cfg);
        let artifacts = plan.materialize(&cfg);

        assert_eq!(artifacts.len(), plan.len());
        assert!(artifacts.iter().all(|a| !a.content.is_empty()));
        assert_eq!(artifacts[0].path, ".env.example");
    }
}
