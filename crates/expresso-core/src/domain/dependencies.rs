//! The dependency resolver: configuration → partitioned npm package lists.
//!
//! Package names are opaque identifiers; version selection belongs to the
//! package manager, never to this crate. Database and feature partitions are
//! read from the capability registry in `stack`, so the resolver cannot
//! drift from what the template catalog emits.

use serde::Serialize;

use crate::domain::{config::ProjectConfig, stack::Feature};

/// Baseline production packages every generated project imports.
///
/// Each entry is exercised by an unconditional source artifact: express,
/// cors, dotenv, helmet, cookie-parser, and express-rate-limit by the app
/// entry; jsonwebtoken and bcryptjs by the auth middleware; chalk by the
/// database config's connection logging.
pub const BASELINE_RUNTIME: &[&str] = &[
    "express",
    "cors",
    "dotenv",
    "helmet",
    "cookie-parser",
    "bcryptjs",
    "jsonwebtoken",
    "express-rate-limit",
    "chalk",
];

/// Baseline development-time packages.
pub const BASELINE_DEV: &[&str] = &["nodemon"];

/// The resolved dependency partition for one configuration.
///
/// Invariants:
/// - a package name appears in at most one partition
/// - the union matches exactly the external capabilities referenced by the
///   generated artifacts for the same configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencySet {
    runtime: Vec<&'static str>,
    dev: Vec<&'static str>,
    database: Vec<&'static str>,
    feature: Vec<&'static str>,
}

impl DependencySet {
    /// Resolve the partition for a configuration. Pure; same input, same
    /// output, always.
    pub fn resolve(config: &ProjectConfig) -> Self {
        let feature = config
            .enabled_features()
            .flat_map(|f| f.packages().iter().copied())
            .collect();

        let set = Self {
            runtime: BASELINE_RUNTIME.to_vec(),
            dev: BASELINE_DEV.to_vec(),
            database: config.database().packages().to_vec(),
            feature,
        };
        debug_assert!(set.is_disjoint(), "package listed in two partitions");
        set
    }

    pub fn runtime(&self) -> &[&'static str] {
        &self.runtime
    }

    pub fn dev(&self) -> &[&'static str] {
        &self.dev
    }

    pub fn database(&self) -> &[&'static str] {
        &self.database
    }

    pub fn feature(&self) -> &[&'static str] {
        &self.feature
    }

    /// Everything installed with the production `npm install`, in install
    /// order: baseline, then database, then features.
    pub fn production_install(&self) -> Vec<&'static str> {
        let mut packages =
            Vec::with_capacity(self.runtime.len() + self.database.len() + self.feature.len());
        packages.extend_from_slice(&self.runtime);
        packages.extend_from_slice(&self.database);
        packages.extend_from_slice(&self.feature);
        packages
    }

    /// Everything installed with `npm install --save-dev`.
    pub fn dev_install(&self) -> &[&'static str] {
        &self.dev
    }

    /// Whether any partition contains the package.
    pub fn contains(&self, package: &str) -> bool {
        self.runtime.contains(&package)
            || self.dev.contains(&package)
            || self.database.contains(&package)
            || self.feature.contains(&package)
    }

    /// Partition labels and contents, for plan summaries.
    pub fn partitions(&self) -> [(&'static str, &[&'static str]); 4] {
        [
            ("runtime", self.runtime()),
            ("dev", self.dev()),
            ("database", self.database()),
            ("feature", self.feature()),
        ]
    }

    fn is_disjoint(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.runtime
            .iter()
            .chain(&self.dev)
            .chain(&self.database)
            .chain(&self.feature)
            .all(|pkg| seen.insert(*pkg))
    }
}
