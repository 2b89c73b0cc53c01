pub mod cli;
pub mod core;
pub mod scene;

pub use crate::core::{PackedColor, PixelSurface};
pub use crate::scene::Scene;
