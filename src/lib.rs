//! Classic raster algorithm demos.
//!
//! Three self-contained programs share this library:
//! - `thick-line`: Bresenham stepping with a perpendicular brush
//! - `circles`: concentric rings with a color and thickness gradient
//! - `clipping`: Liang-Barsky clipping against a rectangular window
//!
//! The algorithms in [`algorithms`] are pure functions. Everything that
//! touches a window lives in [`display`], behind the [`RenderSurface`] trait.

pub mod algorithms;
pub mod color;
pub mod config;
pub mod demos;
pub mod display;
pub mod error;
pub mod geometry;
pub mod input;
pub mod util;

pub use color::{Rgb, Rgb8};
pub use display::{Canvas, DrawCommand, DrawList, RenderSurface, WindowConfig};
pub use error::{Error, Result};
pub use geometry::{ClipWindow, LineSegment, OrthoBounds, Point2D};
