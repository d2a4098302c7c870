//! Immediate-mode 2D drawing in world coordinates

use super::PixelBuffer;
use crate::color::Rgb;
use crate::geometry::{LineSegment, OrthoBounds, Point2D};
use serde::Serialize;
use tracing::trace;

/// Where the demos draw. World coordinates; the surface owns the projection.
pub trait RenderSurface {
    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Rgb);

    /// Plot a single 1px point
    fn plot_point(&mut self, point: Point2D, color: Rgb);

    /// Stroke a segment `thickness` pixels wide
    fn draw_segment(&mut self, segment: &LineSegment, color: Rgb, thickness: f64);

    /// Stroke a closed loop through `points` (last vertex joins the first)
    fn draw_closed_polyline(&mut self, points: &[Point2D], color: Rgb, thickness: f64);

    /// Mark the frame complete
    fn flush(&mut self);
}

/// Stroke width in whole pixels, never below one
#[inline]
fn stroke_width(thickness: f64) -> i32 {
    if thickness.is_nan() {
        return 1;
    }
    thickness.round().clamp(1.0, 1024.0) as i32
}

// ============================================================================
// Canvas
// ============================================================================

/// Software surface: projects world coordinates through an ortho mapping
/// into a [`PixelBuffer`].
pub struct Canvas {
    buffer: PixelBuffer,
    ortho: OrthoBounds,
    frames: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32, ortho: OrthoBounds) -> Self {
        Self {
            buffer: PixelBuffer::with_size(width, height),
            ortho,
            frames: 0,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn ortho(&self) -> OrthoBounds {
        self.ortho
    }

    /// Frames flushed so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    #[inline]
    fn to_pixel(&self, p: Point2D) -> (i32, i32) {
        self.ortho
            .to_pixel(p, self.buffer.width(), self.buffer.height())
    }
}

impl RenderSurface for Canvas {
    fn clear(&mut self, color: Rgb) {
        self.buffer.clear(color.to_rgb8());
    }

    fn plot_point(&mut self, point: Point2D, color: Rgb) {
        let (x, y) = self.to_pixel(point);
        self.buffer.set_pixel(x, y, color.to_rgb8());
    }

    fn draw_segment(&mut self, segment: &LineSegment, color: Rgb, thickness: f64) {
        let (x0, y0) = self.to_pixel(segment.p0);
        let (x1, y1) = self.to_pixel(segment.p1);
        self.buffer
            .line_thick(x0, y0, x1, y1, stroke_width(thickness), color.to_rgb8());
    }

    fn draw_closed_polyline(&mut self, points: &[Point2D], color: Rgb, thickness: f64) {
        let width = stroke_width(thickness);
        let color = color.to_rgb8();
        match points {
            [] => {},
            [only] => {
                let (x, y) = self.to_pixel(*only);
                self.buffer.fill_circle(x, y, width / 2, color);
            },
            _ => {
                let pixels: Vec<(i32, i32)> = points.iter().map(|&p| self.to_pixel(p)).collect();
                let next = pixels.iter().cycle().skip(1);
                for (&(x0, y0), &(x1, y1)) in pixels.iter().zip(next) {
                    self.buffer.line_thick_rounded(x0, y0, x1, y1, width, color);
                }
            },
        }
    }

    fn flush(&mut self) {
        self.frames += 1;
        trace!(frame = self.frames, "canvas flushed");
    }
}

// ============================================================================
// DrawList
// ============================================================================

/// One recorded surface call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        color: Rgb,
    },
    Point {
        at: Point2D,
        color: Rgb,
    },
    Segment {
        segment: LineSegment,
        color: Rgb,
        thickness: f64,
    },
    ClosedPolyline {
        points: Vec<Point2D>,
        color: Rgb,
        thickness: f64,
    },
    Flush,
}

/// Headless surface that records every call in order
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded points, in plotting order
    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Point { at, .. } => Some(*at),
            _ => None,
        })
    }

    /// Recorded segments with their colors, in drawing order
    pub fn segments(&self) -> impl Iterator<Item = (&LineSegment, Rgb)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Segment { segment, color, .. } => Some((segment, *color)),
            _ => None,
        })
    }
}

impl RenderSurface for DrawList {
    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn plot_point(&mut self, point: Point2D, color: Rgb) {
        self.commands.push(DrawCommand::Point { at: point, color });
    }

    fn draw_segment(&mut self, segment: &LineSegment, color: Rgb, thickness: f64) {
        self.commands.push(DrawCommand::Segment {
            segment: *segment,
            color,
            thickness,
        });
    }

    fn draw_closed_polyline(&mut self, points: &[Point2D], color: Rgb, thickness: f64) {
        self.commands.push(DrawCommand::ClosedPolyline {
            points: points.to_vec(),
            color,
            thickness,
        });
    }

    fn flush(&mut self) {
        self.commands.push(DrawCommand::Flush);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_500() -> Canvas {
        Canvas::new(500, 500, OrthoBounds::new(0.0, 500.0, 0.0, 500.0))
    }

    #[test]
    fn test_stroke_width_rounds_and_floors_at_one() {
        assert_eq!(stroke_width(0.2), 1);
        assert_eq!(stroke_width(1.5), 2);
        assert_eq!(stroke_width(8.15), 8);
        assert_eq!(stroke_width(f64::NAN), 1);
    }

    #[test]
    fn test_canvas_plot_point_flips_y() {
        let mut canvas = canvas_500();
        canvas.clear(Rgb::BLACK);
        canvas.plot_point(Point2D::new(10.0, 0.0), Rgb::WHITE);
        assert_eq!(canvas.buffer().get_pixel(10, 499), Some((255, 255, 255)));
        assert_eq!(canvas.buffer().count_color((255, 255, 255)), 1);
    }

    #[test]
    fn test_canvas_clear_fills_background() {
        let mut canvas = Canvas::new(8, 8, OrthoBounds::new(-1.0, 1.0, -1.0, 1.0));
        canvas.clear(Rgb::gray(0.1));
        assert_eq!(canvas.buffer().count_color((26, 26, 26)), 64);
    }

    #[test]
    fn test_canvas_segment_thickness() {
        let mut canvas = canvas_500();
        let red = Rgb::new(1.0, 0.0, 0.0);
        canvas.draw_segment(&LineSegment::from_coords(100.0, 250.0, 200.0, 250.0), red, 3.0);
        let buf = canvas.buffer();
        for y in 248..=250 {
            assert_eq!(buf.get_pixel(150, y), Some((255, 0, 0)));
        }
        assert_eq!(buf.get_pixel(150, 245), Some((0, 0, 0)));
    }

    #[test]
    fn test_canvas_closed_polyline_joins_last_to_first() {
        let mut canvas = Canvas::new(20, 20, OrthoBounds::new(0.0, 20.0, 0.0, 20.0));
        let square = [
            Point2D::new(2.0, 2.0),
            Point2D::new(17.0, 2.0),
            Point2D::new(17.0, 17.0),
            Point2D::new(2.0, 17.0),
        ];
        canvas.draw_closed_polyline(&square, Rgb::WHITE, 1.0);
        // Left edge only exists through the closing segment
        let buf = canvas.buffer();
        assert_eq!(buf.get_pixel(2, 10), Some((255, 255, 255)));
    }

    #[test]
    fn test_canvas_flush_counts_frames() {
        let mut canvas = canvas_500();
        canvas.flush();
        assert_eq!(canvas.frames(), 1);
    }

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.clear(Rgb::BLACK);
        list.plot_point(Point2D::new(1.0, 2.0), Rgb::WHITE);
        list.flush();
        assert_eq!(list.len(), 3);
        assert_eq!(list.points().collect::<Vec<_>>(), vec![Point2D::new(1.0, 2.0)]);
        assert_eq!(list.commands()[2], DrawCommand::Flush);
    }

    #[test]
    fn test_draw_command_json_shape() {
        let mut list = DrawList::new();
        list.flush();
        list.plot_point(Point2D::new(1.0, 2.0), Rgb::WHITE);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json[0]["op"], "flush");
        assert_eq!(json[1]["op"], "point");
        assert_eq!(json[1]["at"]["x"], 1.0);
    }
}
