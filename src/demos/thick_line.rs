use super::Demo;
use crate::algorithms::{rasterize_thick_line, ThickLinePixels};
use crate::color::Rgb;
use crate::display::{RenderSurface, WindowConfig};
use crate::error::{Error, Result};
use crate::geometry::{OrthoBounds, Point2D};
use crate::input::TokenReader;
use std::io::{BufRead, Write};

/// Widest brush accepted from input
pub const MAX_WIDTH: i64 = 1000;
/// Largest endpoint coordinate magnitude accepted from input
pub const MAX_COORD: i32 = 5000;

const SIZE: u32 = 500;

/// A single thick line plotted pixel by pixel on a 500x500 grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThickLineDemo {
    start: (i32, i32),
    end: (i32, i32),
    width: u32,
}

impl ThickLineDemo {
    pub fn new(start: (i32, i32), end: (i32, i32), width: i64) -> Result<Self> {
        if !(1..=MAX_WIDTH).contains(&width) {
            return Err(Error::InvalidWidth(width));
        }
        for c in [start.0, start.1, end.0, end.1] {
            if !(-MAX_COORD..=MAX_COORD).contains(&c) {
                return Err(Error::CoordinateOutOfRange(c));
            }
        }
        Ok(Self {
            start,
            end,
            width: width as u32,
        })
    }

    /// Prompt on `out` and read `x1 y1 x2 y2` then `width`
    pub fn read<R: BufRead>(input: &mut TokenReader<R>, out: &mut dyn Write) -> Result<Self> {
        writeln!(out, "Enter (x1, y1, x2, y2):")?;
        out.flush()?;
        let x1 = input.parse("x1")?;
        let y1 = input.parse("y1")?;
        let x2 = input.parse("x2")?;
        let y2 = input.parse("y2")?;

        write!(out, "Enter line width: ")?;
        out.flush()?;
        let width = input.parse("line width")?;

        Self::new((x1, y1), (x2, y2), width)
    }

    pub fn pixels(&self) -> ThickLinePixels {
        rasterize_thick_line(self.start, self.end, self.width)
    }
}

impl Demo for ThickLineDemo {
    fn name(&self) -> &str {
        "thick-line"
    }

    fn window(&self) -> WindowConfig {
        WindowConfig {
            title: "Bresenham (Thick Line)".to_string(),
            width: SIZE,
            height: SIZE,
            position: (0, 0),
            ortho: OrthoBounds::new(0.0, f64::from(SIZE), 0.0, f64::from(SIZE)),
            background: Rgb::BLACK,
        }
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        for pixel in self.pixels() {
            surface.plot_point(Point2D::from_pixel(pixel), Rgb::WHITE);
        }
    }
}
