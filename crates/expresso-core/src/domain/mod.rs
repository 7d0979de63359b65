// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Expresso.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (filesystem writes, process execution) is handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: The config is built once and never mutated
//! - **Rich domain model**: Behavior lives in the types, not services
//!
// Public API - what the world sees
pub mod config;
pub mod dependencies;
pub mod error;
pub mod plan;
pub mod stack;
pub mod templates;

// Re-exports for convenience
pub use config::{ProjectConfig, ProjectConfigBuilder, ProjectName};
pub use dependencies::{BASELINE_DEV, BASELINE_RUNTIME, DependencySet};
pub use error::{DomainError, ErrorCategory};
pub use plan::{Artifact, ArtifactKind, ArtifactPlan, FOLDERS, Phase};
pub use stack::{DATABASE_REGISTRY, Database, DatabaseDef, FEATURE_REGISTRY, Feature, FeatureDef};
