use super::Demo;
use crate::color::Rgb;
use crate::config::ClipScene;
use crate::display::{RenderSurface, WindowConfig};
use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, LineSegment, OrthoBounds};
use crate::input::TokenReader;
use std::io::{BufRead, Write};
use tracing::debug;

/// World units shown around the clip window
pub const MARGIN: f64 = 20.0;
/// Smallest ortho extent on either axis
pub const MIN_EXTENT: f64 = 1.0;

const ORIGINAL_COLOR: Rgb = Rgb { r: 1.0, g: 0.0, b: 0.0 };
const WINDOW_COLOR: Rgb = Rgb { r: 0.0, g: 0.4, b: 1.0 };
const CLIPPED_COLOR: Rgb = Rgb { r: 0.0, g: 0.8, b: 0.0 };

/// Keep I/O failures, replace parse failures with the step's diagnostic
fn or_report(replacement: Error) -> impl FnOnce(Error) -> Error {
    move |err| match err {
        Error::Io(_) => err,
        _ => replacement,
    }
}

/// Lines drawn in red, the clip window in blue, visible parts in green
#[derive(Debug, Clone, PartialEq)]
pub struct ClippingDemo {
    scene: ClipScene,
}

impl ClippingDemo {
    pub fn new(scene: ClipScene) -> Self {
        Self { scene }
    }

    /// Prompt on `out` and read the clip window, the line count, then
    /// each line's endpoints
    pub fn read<R: BufRead>(input: &mut TokenReader<R>, out: &mut dyn Write) -> Result<Self> {
        writeln!(out, "=== Liang-Barsky Line Clipping ===")?;
        writeln!(out, "Enter clipping window (xmin ymin xmax ymax):")?;
        out.flush()?;
        let mut bounds = [0.0; 4];
        for b in &mut bounds {
            *b = input
                .parse_finite("clip window")
                .map_err(or_report(Error::InvalidClipWindow))?;
        }
        let window = ClipWindow::from(bounds);

        write!(out, "Enter number of lines: ")?;
        out.flush()?;
        let count: i64 = input
            .parse("number of lines")
            .map_err(or_report(Error::InvalidLineCount))?;
        if count <= 0 {
            return Err(Error::InvalidLineCount);
        }
        let count = usize::try_from(count).map_err(|_| Error::Allocation)?;

        let mut lines = Vec::new();
        lines
            .try_reserve_exact(count)
            .map_err(|_| Error::Allocation)?;

        for n in 1..=count {
            writeln!(out, "Enter line {n} endpoints (x0 y0 x1 y1):")?;
            out.flush()?;
            let mut coords = [0.0; 4];
            for c in &mut coords {
                *c = input
                    .parse_finite("line endpoint")
                    .map_err(or_report(Error::InvalidLine(n)))?;
            }
            lines.push(LineSegment::from(coords));
        }

        Ok(Self::new(ClipScene::new(window, lines)))
    }

    pub fn scene(&self) -> &ClipScene {
        &self.scene
    }

    /// Visible parts of every line, skipping the invisible ones
    pub fn clipped(&self) -> Vec<LineSegment> {
        self.scene
            .lines
            .iter()
            .filter_map(|line| self.scene.window.clip(line))
            .collect()
    }
}

impl Demo for ClippingDemo {
    fn name(&self) -> &str {
        "clipping"
    }

    fn window(&self) -> WindowConfig {
        WindowConfig {
            title: "Liang-Barsky Clipping".to_string(),
            width: 800,
            height: 600,
            position: (100, 100),
            ortho: OrthoBounds::around(&self.scene.window, MARGIN, MIN_EXTENT),
            background: Rgb::gray(0.1),
        }
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        for line in &self.scene.lines {
            surface.draw_segment(line, ORIGINAL_COLOR, 1.0);
        }

        surface.draw_closed_polyline(&self.scene.window.corners(), WINDOW_COLOR, 2.0);

        let clipped = self.clipped();
        debug!(
            lines = self.scene.lines.len(),
            visible = clipped.len(),
            "clipped lines"
        );
        for segment in &clipped {
            surface.draw_segment(segment, CLIPPED_COLOR, 3.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DrawCommand, DrawList};
    use std::io::Cursor;

    fn read(text: &str) -> (Result<ClippingDemo>, String) {
        let mut input = TokenReader::new(Cursor::new(text.as_bytes()));
        let mut out = Vec::new();
        let demo = ClippingDemo::read(&mut input, &mut out);
        (demo, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_read_full_session() {
        let (demo, prompts) = read("0 0 10 10\n2\n0 0 10 10\n-5 5 -1 5\n");
        let demo = demo.unwrap();
        assert_eq!(demo.scene().lines.len(), 2);
        assert!(prompts.contains("Enter clipping window (xmin ymin xmax ymax):"));
        assert!(prompts.contains("Enter number of lines: "));
        assert!(prompts.contains("Enter line 2 endpoints (x0 y0 x1 y1):"));
    }

    #[test]
    fn test_read_normalizes_reversed_window() {
        let (demo, _) = read("10 10 0 0 1 1 1 2 2");
        assert_eq!(demo.unwrap().scene().window, ClipWindow::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_bad_window_reported() {
        let (demo, _) = read("0 0 ten 10");
        assert!(matches!(demo, Err(Error::InvalidClipWindow)));
        let (demo, _) = read("0 0 10");
        assert!(matches!(demo, Err(Error::InvalidClipWindow)));
    }

    #[test]
    fn test_bad_line_count_reported() {
        for text in ["0 0 1 1 0", "0 0 1 1 -4", "0 0 1 1 x", "0 0 1 1"] {
            let (demo, _) = read(text);
            assert!(matches!(demo, Err(Error::InvalidLineCount)), "{text}");
        }
    }

    #[test]
    fn test_bad_line_names_index() {
        let (demo, _) = read("0 0 1 1 3\n0 0 1 1\n0 0 1 oops\n");
        assert!(matches!(demo, Err(Error::InvalidLine(2))));
    }

    #[test]
    fn test_huge_line_count_fails_allocation() {
        let (demo, _) = read(&format!("0 0 1 1 {}", i64::MAX));
        assert!(matches!(demo, Err(Error::Allocation)));
    }

    #[test]
    fn test_window_ortho_has_margin() {
        let demo = ClippingDemo::new(ClipScene::new(ClipWindow::new(0.0, 0.0, 100.0, 80.0), vec![]));
        let config = demo.window();
        assert_eq!(config.ortho, OrthoBounds::new(-20.0, 120.0, -20.0, 100.0));
        assert_eq!((config.width, config.height), (800, 600));
    }

    #[test]
    fn test_draw_order_and_colors() {
        let demo = ClippingDemo::new(ClipScene::new(
            ClipWindow::new(2.0, 2.0, 8.0, 8.0),
            vec![
                LineSegment::from_coords(0.0, 0.0, 10.0, 10.0),
                LineSegment::from_coords(-5.0, 5.0, -1.0, 5.0),
            ],
        ));
        let mut list = DrawList::new();
        demo.draw(&mut list);

        let commands = list.commands();
        assert_eq!(commands.len(), 2 + 1 + 1);
        assert!(matches!(
            commands[2],
            DrawCommand::ClosedPolyline { color, thickness, .. }
                if color == WINDOW_COLOR && thickness == 2.0
        ));
        let segments: Vec<_> = list.segments().collect();
        assert_eq!(segments[0].1, ORIGINAL_COLOR);
        assert_eq!(segments[1].1, ORIGINAL_COLOR);
        assert_eq!(segments[2].1, CLIPPED_COLOR);
        assert_eq!(*segments[2].0, LineSegment::from_coords(2.0, 2.0, 8.0, 8.0));
    }
}
