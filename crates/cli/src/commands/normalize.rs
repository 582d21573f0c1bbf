use appdir_config::{load_app, AppWriter, CollisionPolicy};
use appdir_core::Result;
use std::path::Path;
use tracing::info;

pub fn execute(dir: &Path, staged: bool, policy: CollisionPolicy) -> Result<()> {
    let model = load_app(dir)?;
    AppWriter::new(dir)
        .on_collision(policy)
        .staged(staged)
        .write(&model)?;

    info!(dir = %dir.display(), staged, "normalized app");
    Ok(())
}
