//! Facilitation assets for the "Designing Learning as a Cross-Functional
//! Activity System" workshop: a Miro board, a participant workbook and a slide
//! deck in PDF and PPTX.
//!
//! Every artifact is a table of regions streamed through one `Emitter` onto a
//! format-specific `Surface`.

pub mod board;
pub mod canvas;
pub mod config;
pub mod deck;
pub mod emit;
pub mod errors;
pub mod handout;
pub mod layout;
pub mod render;
pub mod telemetry;
pub mod theme;

pub use emit::{Artifact, EmitReport, Emitter, Region, Surface};
pub use errors::EmitError;
pub use theme::Theme;
