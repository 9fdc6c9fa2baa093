/// Miro board generation: REST client, element model, surface and zone table.
pub mod client;
pub mod elements;
pub mod surface;
pub mod zones;

pub use client::{BoardApi, MiroClient, MiroError};
pub use elements::{BoardElement, StickyColor};
pub use surface::BoardSurface;
pub use zones::{board_zones, BoardLayout, BOARD_NAME, NEXT_STEPS};
