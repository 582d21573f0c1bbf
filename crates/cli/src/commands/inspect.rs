use appdir_config::load_app;
use appdir_core::Result;
use appdir_utils::render_document;
use std::path::Path;

/// Render the app at `dir` as pretty JSON
pub fn execute(dir: &Path) -> Result<String> {
    let model = load_app(dir)?;
    render_document(&model)
}
