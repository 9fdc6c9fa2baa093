//! Text measurement and line breaking for the document surfaces.

pub mod font_metrics;
pub mod wrap;

pub use font_metrics::{get_metrics, Face, FontMetricTable};
pub use wrap::wrap_text;
