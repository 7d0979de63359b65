//! Expresso Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Expresso
//! backend scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          expresso-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ProjectComposer, SetupOrchestrator)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: Filesystem, CommandRunner)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    expresso-adapters (Infrastructure)   │
//! │  (LocalFilesystem, ShellRunner, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectConfig, ArtifactPlan, Catalog)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use expresso_core::{
//!     application::ProjectComposer,
//!     domain::{Database, ProjectConfig},
//! };
//! # let filesystem: Box<dyn expresso_core::application::ports::Filesystem> = unimplemented!();
//!
//! // 1. Build the configuration (normally collected by the CLI front end)
//! let config = ProjectConfig::builder("demo-api")
//!     .database(Database::MongoDb)
//!     .api_docs(true)
//!     .build()
//!     .unwrap();
//!
//! // 2. Compose the project through an injected filesystem adapter
//! let composer = ProjectComposer::new(filesystem);
//! composer.compose("./demo-api".as_ref(), &config).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ProjectComposer, SetupOrchestrator,
        ports::{CommandRunner, Filesystem},
    };
    pub use crate::domain::{
        Artifact, ArtifactKind, ArtifactPlan, Database, DependencySet, Feature, ProjectConfig,
        ProjectConfigBuilder, ProjectName,
    };
    pub use crate::error::{ExpressoError, ExpressoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
