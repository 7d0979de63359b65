//! Project composer - the generation orchestrator.
//!
//! This service coordinates the entire composition workflow:
//! 1. Build and validate the artifact plan for the configuration
//! 2. Realize the directory tree
//! 3. Render and write every planned artifact, phase by phase
//!
//! It implements the driving port (incoming) and uses the `Filesystem`
//! driven port (outgoing).

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{ArtifactPlan, Phase, ProjectConfig},
    error::ExpressoResult,
};

/// Main composition service.
///
/// Orchestrates planning, rendering, and writing. Rendering is pure domain
/// logic; the only side effects flow through the injected filesystem.
pub struct ProjectComposer {
    filesystem: Box<dyn Filesystem>,
}

impl ProjectComposer {
    /// Create a new composer with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Compose a project at `project_dir`.
    ///
    /// Equivalent to [`compose_with`](Self::compose_with) without progress
    /// reporting.
    pub fn compose(&self, project_dir: &Path, config: &ProjectConfig) -> ExpressoResult<()> {
        self.compose_with(project_dir, config, |_| {})
    }

    /// Compose a project, invoking `on_phase` after each completed phase.
    ///
    /// Workflow:
    /// 1. Build the artifact plan and check its invariants
    /// 2. Create the project root and the fixed folder tree
    /// 3. Write configuration artifacts, then source artifacts, then
    ///    documentation
    ///
    /// The first failed write aborts the run and propagates. Partial output
    /// stays on disk; rerunning with the same configuration overwrites it
    /// deterministically. There is no rollback.
    #[instrument(
        skip_all,
        fields(project = %config.name(), path = %project_dir.display())
    )]
    pub fn compose_with(
        &self,
        project_dir: &Path,
        config: &ProjectConfig,
        mut on_phase: impl FnMut(Phase),
    ) -> ExpressoResult<()> {
        // 1. Plan
        let plan = ArtifactPlan::build(config);
        plan.validate()?;
        info!(artifacts = plan.len(), "Artifact plan built");

        // 2. Directories: root first, then the fixed folder set
        self.filesystem.create_dir_all(project_dir)?;
        for folder in plan.folders() {
            self.filesystem.create_dir_all(&project_dir.join(folder))?;
        }
        debug!(folders = plan.folders().len(), "Directory tree realized");

        // 3. Artifacts, in fixed phase order
        for phase in Phase::ALL {
            for kind in plan.in_phase(phase) {
                let path = project_dir.join(kind.path());
                let content = kind.render(config);
                self.filesystem.write_file(&path, &content)?;
                debug!(artifact = %kind, bytes = content.len(), "Artifact written");
            }
            info!(%phase, "Phase complete");
            on_phase(phase);
        }

        info!("Composition completed successfully");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
