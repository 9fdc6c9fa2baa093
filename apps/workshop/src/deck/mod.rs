/// Facilitation slide deck rendered to PDF and PPTX from one set of marks.
pub mod canvas;
pub mod slides;
pub mod surface;

pub use slides::{deck_regions, DECK_TITLE, TOTAL_SLIDES};
pub use surface::{DeckFormat, DeckSurface};
