//! Concentric circle generation with a radius, thickness and color gradient

use crate::color::Rgb;
use crate::geometry::Point2D;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::debug;

/// One ring to render
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub center: Point2D,
    pub radius: f64,
    pub thickness: f64,
    pub color: Rgb,
}

/// A ring together with its closed polygonal outline.
/// The edge from the last vertex back to the first is implied.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub spec: CircleSpec,
    pub vertices: Vec<Point2D>,
}

/// Parameters of a family of concentric rings.
///
/// Ring `i` of `count` gets radius `min_radius + i * (max_radius - min_radius) / count`,
/// thickness `base_thickness + i * thickness_step` and color
/// `(i/count, 0.2 + 0.02*i, 1 - i/count)`. `max_radius` itself is never reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcentricCircles {
    pub center: Point2D,
    pub count: u32,
    pub min_radius: f64,
    pub max_radius: f64,
    pub base_thickness: f64,
    pub thickness_step: f64,
    /// Vertices per ring outline
    pub segments: u32,
}

impl Default for ConcentricCircles {
    fn default() -> Self {
        Self {
            center: Point2D::ORIGIN,
            count: 20,
            min_radius: 0.1,
            max_radius: 0.9,
            base_thickness: 1.5,
            thickness_step: 0.35,
            segments: 360,
        }
    }
}

impl ConcentricCircles {
    /// Radius, thickness and color of ring `index` (not bounds checked against `count`)
    pub fn spec(&self, index: u32) -> CircleSpec {
        let n = f64::from(self.count.max(1));
        let i = f64::from(index);
        let t = (i / n) as f32;
        CircleSpec {
            center: self.center,
            radius: self.min_radius + i * (self.max_radius - self.min_radius) / n,
            thickness: self.base_thickness + i * self.thickness_step,
            color: Rgb::new(t, 0.2 + 0.02 * index as f32, 1.0 - t),
        }
    }

    /// All ring specs, innermost first
    pub fn specs(&self) -> impl Iterator<Item = CircleSpec> + '_ {
        (0..self.count).map(move |i| self.spec(i))
    }

    /// All rings with their outlines, innermost first
    pub fn rings(&self) -> Vec<Ring> {
        let rings: Vec<Ring> = self
            .specs()
            .map(|spec| Ring {
                vertices: circle_vertices(spec.center, spec.radius, self.segments),
                spec,
            })
            .collect();
        debug!(
            rings = rings.len(),
            segments = self.segments,
            "generated concentric circles"
        );
        rings
    }
}

/// `segments` equally spaced points on the circle, starting at angle 0
/// and running counter-clockwise.
pub fn circle_vertices(center: Point2D, radius: f64, segments: u32) -> Vec<Point2D> {
    let n = f64::from(segments);
    (0..segments)
        .map(|k| {
            let angle = TAU * f64::from(k) / n;
            Point2D::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
