//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! high-level use cases: "compose a project" and "run its setup".

pub mod composer;
pub mod setup;

pub use composer::ProjectComposer;
pub use setup::{SetupCommand, SetupOrchestrator, SetupPlan, SetupStep};
