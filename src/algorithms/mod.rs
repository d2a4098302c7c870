//! The three raster algorithms. Pure functions, no rendering.

pub mod bresenham;
pub mod circles;
pub mod liang_barsky;

pub use bresenham::{bresenham, rasterize_thick_line, BresenhamSteps, ThickLinePixels};
pub use circles::{circle_vertices, CircleSpec, ConcentricCircles, Ring};
pub use liang_barsky::{clip_interval, clip_segment};
