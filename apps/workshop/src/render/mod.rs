//! Document writers. Both take finished pages of marks; neither does layout.
pub mod pdf;
pub mod pptx;

use std::path::Path;

use tracing::info;

use crate::errors::EmitError;

pub use pdf::{fold_to_winansi, render_pdf};
pub use pptx::render_pptx;

/// Writes `bytes` to `path`, creating parent directories first.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), EmitError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slides").join("deck.pdf");
        write_output(&path, b"%PDF-1.3").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.3");
    }
}
