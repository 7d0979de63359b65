//! The template catalog: pure artifact-content generators.
//!
//! One function per artifact kind. Every function is a pure mapping from the
//! configuration (or the subset it needs) to a content string: no I/O, no
//! clock, no randomness. Same configuration, same bytes.
//!
//! Contract strings must stay aligned across generators: environment
//! variable names emitted into the env template are the names the generated
//! sources read; import specifiers match the dependency resolver's package
//! names; the readme describes exactly the stack the other generators
//! produce. The database and feature specifics come from the capability
//! registry in [`crate::domain::stack`], never from lists of their own.

mod config_files;
mod database;
mod readme;
mod source;

pub use config_files::{env_example, gitignore, mailer_config, swagger_config};
pub use database::database_config;
pub use readme::readme;
pub use source::{
    app_entry, auth_middleware, error_middleware, health_controller, health_routes, user_model,
    validation_schemas,
};
