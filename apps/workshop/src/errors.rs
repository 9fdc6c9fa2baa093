use thiserror::Error;

use crate::board::client::MiroError;

/// Failure while emitting regions onto a surface.
///
/// Every variant is fatal to the run: the emitter stops at the first error and
/// nothing already written (remote items, partial files) is cleaned up.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Board API error: {0}")]
    Board(#[from] MiroError),

    #[error("PDF rendering error: {0}")]
    Pdf(String),

    #[error("PPTX packaging error: {0}")]
    Package(#[from] zip::result::ZipError),

    #[error("XML generation error: {0}")]
    Xml(#[from] std::fmt::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Layout error: {0}")]
    Layout(String),
}

impl EmitError {
    /// HTTP status of a rejected board call, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            EmitError::Board(MiroError::Api { status, .. }) => Some(*status),
            _ => None,
        }
    }
}
