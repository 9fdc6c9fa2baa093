/// Participant workbook: flow blocks, pagination, surface and copy.
pub mod blocks;
pub mod content;
pub mod paginate;
pub mod surface;

pub use blocks::{Block, ParagraphStyle, Table};
pub use content::{handout_regions, FOOTER, WORKBOOK_TITLE};
pub use surface::HandoutSurface;
