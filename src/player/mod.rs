// Player registry
//
// Owns the ordered player collection, hands out ids and palette colors,
// and derives the ranked view the scoreboard renders.

// Public API - what other modules can use
pub use models::{Player, PlayerId, RankedPlayer};
pub use palette::{Palette, PALETTE};
pub use registry::PlayerRegistry;

// Internal modules
mod models;
mod palette;
mod registry;
