use super::Demo;
use crate::algorithms::ConcentricCircles;
use crate::color::Rgb;
use crate::display::{RenderSurface, WindowConfig};
use crate::geometry::OrthoBounds;

/// Concentric rings growing outward in radius and stroke width,
/// shading from blue to red
#[derive(Debug, Clone, Default)]
pub struct CirclesDemo {
    circles: ConcentricCircles,
}

impl CirclesDemo {
    pub fn new(circles: ConcentricCircles) -> Self {
        Self { circles }
    }
}

impl Demo for CirclesDemo {
    fn name(&self) -> &str {
        "circles"
    }

    fn window(&self) -> WindowConfig {
        WindowConfig {
            title: "Concentric Circles with Color Gradient & Thickness".to_string(),
            width: 700,
            height: 700,
            position: (100, 100),
            ortho: OrthoBounds::new(-1.0, 1.0, -1.0, 1.0),
            background: Rgb::gray(0.05),
        }
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        for ring in self.circles.rings() {
            surface.draw_closed_polyline(&ring.vertices, ring.spec.color, ring.spec.thickness);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DrawCommand, DrawList};

    #[test]
    fn test_draws_one_loop_per_ring() {
        let mut list = DrawList::new();
        CirclesDemo::default().draw(&mut list);
        assert_eq!(list.len(), 20);
        let thicknesses: Vec<f64> = list
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::ClosedPolyline { points, thickness, .. } => {
                    assert_eq!(points.len(), 360);
                    *thickness
                },
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert!(thicknesses.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_innermost_ring_visible_on_canvas() {
        let demo = CirclesDemo::default();
        let config = demo.window();
        let mut canvas = config.canvas();
        crate::demos::render(&demo, &config, &mut canvas);
        // Ring 0: radius 0.1 -> 35px right of center, pure blue-ish
        let (r, _, b) = canvas.buffer().get_pixel(385, 349).unwrap();
        assert_eq!(r, 0);
        assert_eq!(b, 255);
    }
}
