// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::core::PackedColor;
use crate::scene::Scene;

#[derive(Parser, Debug, Clone)]
#[command(name = "framepaint")]
#[command(about = "Minimal framebuffer compositing demo", long_about = None)]
pub struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Side length of the centered square
    #[arg(long = "square-side", default_value_t = 500)]
    pub square_side: u32,

    /// Radius of the centered circle
    #[arg(long = "circle-radius", default_value_t = 200)]
    pub circle_radius: u32,

    /// Backdrop color as `R,G,B`
    #[arg(long, default_value = "15,20,25")]
    pub background: PackedColor,

    /// Square color as `R,G,B`
    #[arg(long = "square-color", default_value = "255,255,255")]
    pub square_color: PackedColor,

    /// Circle color as `R,G,B`
    #[arg(long = "circle-color", default_value = "64,128,196")]
    pub circle_color: PackedColor,
}

impl Cli {
    /// Scene described by the parsed flags
    pub fn scene(&self) -> Scene {
        Scene {
            background: self.background,
            square_side: self.square_side,
            square_color: self.square_color,
            circle_radius: self.circle_radius,
            circle_color: self.circle_color,
        }
    }
}
