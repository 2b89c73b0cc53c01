use crate::core::raster;
use crate::core::{PackedColor, PixelSurface, RasterError};

/// The composition painted at startup: a dark backdrop, a centered white
/// square, and a centered circle painted over both.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub background: PackedColor,
    pub square_side: u32,
    pub square_color: PackedColor,
    pub circle_radius: u32,
    pub circle_color: PackedColor,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            background: PackedColor::pack(15, 20, 25),
            square_side: 500,
            square_color: PackedColor::pack(255, 255, 255),
            circle_radius: 200,
            circle_color: PackedColor::pack(64, 128, 196),
        }
    }
}

impl Scene {
    /// Paint the scene back-to-front; later shapes overwrite earlier ones
    pub fn paint(&self, surface: &mut PixelSurface) -> Result<(), RasterError> {
        raster::fill(surface, self.background)?;
        raster::draw_square(surface, self.square_side, self.square_color)?;
        raster::draw_circle(surface, self.circle_radius, self.circle_color)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_constants() {
        let scene = Scene::default();
        assert_eq!(scene.background, PackedColor::pack(15, 20, 25));
        assert_eq!(scene.square_side, 500);
        assert_eq!(scene.square_color, PackedColor::pack(255, 255, 255));
        assert_eq!(scene.circle_radius, 200);
        assert_eq!(scene.circle_color, PackedColor::pack(64, 128, 196));
    }

    #[test]
    fn paint_layers_shapes_in_call_order() {
        let scene = Scene {
            background: PackedColor::pack(1, 1, 1),
            square_side: 20,
            square_color: PackedColor::pack(2, 2, 2),
            circle_radius: 5,
            circle_color: PackedColor::pack(3, 3, 3),
        };

        let mut surface = PixelSurface::new(40, 30).expect("surface");
        scene.paint(&mut surface).expect("paint");

        // center belongs to the circle, the topmost shape
        assert_eq!(surface.get(20, 15).expect("pixel"), scene.circle_color);
        // inside the square but outside the circle
        assert_eq!(surface.get(12, 6).expect("pixel"), scene.square_color);
        // outside both shapes
        assert_eq!(surface.get(0, 0).expect("pixel"), scene.background);
    }

    #[test]
    fn paint_propagates_geometry_errors() {
        let scene = Scene {
            square_side: 100,
            ..Scene::default()
        };
        let mut surface = PixelSurface::new(40, 30).expect("surface");
        assert!(scene.paint(&mut surface).is_err());
    }
}
