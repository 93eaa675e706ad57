use anyhow::Result;
use tracing::debug;

use super::super::args::CommonArgs;
use crate::config::{load_config, load_config_file};
use crate::core::context::ProjectContext;

/// Build the project context from `--config`, or by searching upward from `--root`.
pub fn load_context(common: &CommonArgs) -> Result<ProjectContext> {
    let loaded = match &common.config {
        Some(path) => load_config_file(path)?,
        None => load_config(&common.root)?,
    };
    debug!(config = %loaded.path.display(), root = %loaded.root.display(), "loaded config");
    Ok(ProjectContext::new(&loaded.root, loaded.config)?)
}
