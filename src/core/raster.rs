//! Rasterization routines over a [`PixelSurface`]
//!
//! Each operation is an unconditional overwrite; painting order is the
//! z-order. Geometry that does not fit the surface is rejected before any
//! pixel is touched.

use thiserror::Error;

use super::color::PackedColor;
use super::surface::{PixelSurface, SurfaceError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    /// The shape extends past the surface edge
    #[error("{shape} with extent {extent} does not fit a {width}x{height} surface")]
    OutOfBounds {
        shape: &'static str,
        extent: u32,
        width: u32,
        height: u32,
    },

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Paint every pixel of the surface with one color
pub fn fill(surface: &mut PixelSurface, color: PackedColor) -> Result<(), RasterError> {
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            surface.set(x, y, color)?;
        }
    }
    Ok(())
}

/// Paint a `side` x `side` square centered on the surface
pub fn draw_square(
    surface: &mut PixelSurface,
    side: u32,
    color: PackedColor,
) -> Result<(), RasterError> {
    let (width, height) = (surface.width(), surface.height());
    if side > width || side > height {
        return Err(RasterError::OutOfBounds {
            shape: "square",
            extent: side,
            width,
            height,
        });
    }

    // `width - side` and `width + side` share parity, so these half-open
    // ranges cover exactly `side` pixels per axis.
    let x0 = (width - side) / 2;
    let y0 = (height - side) / 2;
    let x1 = (width + side) / 2;
    let y1 = (height + side) / 2;

    for y in y0..y1 {
        for x in x0..x1 {
            surface.set(x, y, color)?;
        }
    }
    Ok(())
}

/// Paint a filled circle of the given radius centered on the surface
///
/// A pixel belongs to the circle iff `dx*dx + dy*dy <= radius*radius`
/// relative to the integer-divided center; boundary ties are included.
pub fn draw_circle(
    surface: &mut PixelSurface,
    radius: u32,
    color: PackedColor,
) -> Result<(), RasterError> {
    let (width, height) = (surface.width(), surface.height());
    let cx = (width / 2) as i64;
    let cy = (height / 2) as i64;
    let r = radius as i64;

    if cx - r < 0 || cy - r < 0 || cx + r >= width as i64 || cy + r >= height as i64 {
        return Err(RasterError::OutOfBounds {
            shape: "circle",
            extent: radius,
            width,
            height,
        });
    }

    let r_squared = r * r;
    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= r_squared {
                surface.set(x as u32, y as u32, color)?;
            }
        }
    }
    Ok(())
}
