//! Thick-line rasterization: Bresenham stepping plus a perpendicular brush

use tracing::debug;

/// Integer Bresenham walk from `start` to `end`, both endpoints included.
///
/// Yields `max(|dx|, |dy|) + 1` pixels and always ends on `end`.
#[derive(Debug, Clone)]
pub struct BresenhamSteps {
    x: i32,
    y: i32,
    end: (i32, i32),
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl BresenhamSteps {
    pub fn new(start: (i32, i32), end: (i32, i32)) -> Self {
        let dx = (i64::from(end.0) - i64::from(start.0)).abs();
        let dy = (i64::from(end.1) - i64::from(start.1)).abs();
        Self {
            x: start.0,
            y: start.1,
            end,
            dx,
            dy,
            sx: if start.0 < end.0 { 1 } else { -1 },
            sy: if start.1 < end.1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamSteps {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let current = (self.x, self.y);
        if current == self.end {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

impl std::iter::FusedIterator for BresenhamSteps {}

/// Shorthand for [`BresenhamSteps::new`]
pub fn bresenham(start: (i32, i32), end: (i32, i32)) -> BresenhamSteps {
    BresenhamSteps::new(start, end)
}

/// Pixels of a thick line, produced one Bresenham step at a time.
///
/// Nothing is buffered, so arbitrarily long lines cost constant memory.
#[derive(Debug, Clone)]
pub struct ThickLinePixels {
    steps: BresenhamSteps,
    /// Unit perpendicular of the whole segment
    perp: (f64, f64),
    half: i32,
    current: Option<(i32, i32)>,
    offset: i32,
}

impl Iterator for ThickLinePixels {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.current.is_none() || self.offset > self.half {
            self.current = Some(self.steps.next()?);
            self.offset = -self.half;
        }
        let (x, y) = self.current?;
        let offset = f64::from(self.offset);
        self.offset += 1;
        // Saturate so points next to the i32 range edge stay on it
        Some((
            x.saturating_add((self.perp.0 * offset).round() as i32),
            y.saturating_add((self.perp.1 * offset).round() as i32),
        ))
    }
}

impl std::iter::FusedIterator for ThickLinePixels {}

/// Pixels approximating a line of `width` pixels from `start` to `end`.
///
/// Every Bresenham step stamps a brush of offsets `-width/2 ..= width/2`
/// along the unit perpendicular of the whole segment. The perpendicular is
/// computed once from the full segment vector, not from the local tangent.
/// A zero-length segment yields its single pixel. Duplicates are kept.
pub fn rasterize_thick_line(start: (i32, i32), end: (i32, i32), width: u32) -> ThickLinePixels {
    let dx = (i64::from(end.0) - i64::from(start.0)) as f64;
    let dy = (i64::from(end.1) - i64::from(start.1)) as f64;
    let len = dx.hypot(dy);

    let (perp, half) = if len == 0.0 {
        debug!(?start, "degenerate line, single pixel");
        ((0.0, 0.0), 0)
    } else {
        // Direction rotated by 90 degrees
        ((-dy / len, dx / len), (width / 2) as i32)
    };

    debug!(?start, ?end, width, "rasterizing thick line");
    ThickLinePixels {
        steps: bresenham(start, end),
        perp,
        half,
        current: None,
        offset: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_horizontal_steps() {
        let steps: Vec<_> = bresenham((0, 0), (4, 0)).collect();
        assert_eq!(steps, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    }

    #[test]
    fn test_diagonal_steps() {
        let steps: Vec<_> = bresenham((3, 3), (0, 0)).collect();
        assert_eq!(steps, vec![(3, 3), (2, 2), (1, 1), (0, 0)]);
    }

    #[test]
    fn test_shallow_slope_steps() {
        let steps: Vec<_> = bresenham((0, 0), (6, 2)).collect();
        assert_eq!(steps.len(), 7);
        assert_eq!(steps.first(), Some(&(0, 0)));
        assert_eq!(steps.last(), Some(&(6, 2)));
        // x advances every step on a shallow line
        for (i, &(x, _)) in steps.iter().enumerate() {
            assert_eq!(x, i as i32);
        }
    }

    #[test]
    fn test_single_point_walk() {
        let steps: Vec<_> = bresenham((7, -2), (7, -2)).collect();
        assert_eq!(steps, vec![(7, -2)]);
    }

    #[test]
    fn test_width_one_is_plain_bresenham() {
        let thick: Vec<_> = rasterize_thick_line((10, 10), (40, 25), 1).collect();
        let plain: Vec<_> = bresenham((10, 10), (40, 25)).collect();
        assert_eq!(thick, plain);
    }

    #[test]
    fn test_horizontal_brush_is_vertical() {
        // Perpendicular of (1, 0) is (0, 1)
        let pixels: Vec<_> = rasterize_thick_line((0, 0), (2, 0), 3).collect();
        assert_eq!(
            pixels,
            vec![(0, -1), (0, 0), (0, 1), (1, -1), (1, 0), (1, 1), (2, -1), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn test_even_width_spans_both_sides() {
        // width 4 -> offsets -2..=2
        let pixels: Vec<_> = rasterize_thick_line((5, 0), (5, 3), 4).collect();
        assert_eq!(pixels.len(), 4 * 5);
        let xs: Vec<i32> = pixels.iter().take(5).map(|p| p.0).collect();
        assert_eq!(xs, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_diagonal_brush_rounds_offsets() {
        // Perpendicular of (1, 1) is (-0.707, 0.707)
        let pixels: Vec<_> = rasterize_thick_line((0, 0), (1, 1), 3).collect();
        assert_eq!(&pixels[..3], &[(1, -1), (0, 0), (-1, 1)]);
    }

    #[test]
    fn test_degenerate_line_single_pixel() {
        let pixels: Vec<_> = rasterize_thick_line((3, 4), (3, 4), 9).collect();
        assert_eq!(pixels, vec![(3, 4)]);
    }

    #[test]
    fn test_brush_saturates_at_i32_edge() {
        let pixels: Vec<_> = rasterize_thick_line((i32::MAX, 0), (i32::MAX - 10, 10), 3).collect();
        assert_eq!(pixels.len(), 11 * 3);
        assert!(pixels.iter().all(|&(x, _)| x > i32::MAX - 20));
        assert!(pixels.contains(&(i32::MAX, 0)));

        let pixels: Vec<_> = rasterize_thick_line((i32::MIN, 5), (i32::MIN, -5), 5).collect();
        assert!(pixels.iter().all(|&(x, _)| x < i32::MIN + 10));
    }

    #[test]
    fn test_long_line_streams_lazily() {
        let mut pixels = rasterize_thick_line((-2_000_000_000, 0), (2_000_000_000, 0), 1000);
        assert_eq!(pixels.next(), Some((-2_000_000_000, -500)));
        assert_eq!(pixels.nth(1000), Some((-1_999_999_999, -500)));
    }

    proptest! {
        #[test]
        fn prop_walk_terminates_on_endpoint(
            x0 in -500i32..500, y0 in -500i32..500,
            x1 in -500i32..500, y1 in -500i32..500,
        ) {
            let steps: Vec<_> = bresenham((x0, y0), (x1, y1)).collect();
            let bound = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            prop_assert!(steps.len() <= bound);
            prop_assert_eq!(steps.last().copied(), Some((x1, y1)));
            prop_assert_eq!(steps.iter().filter(|&&p| p == (x1, y1)).count(), 1);
        }

        #[test]
        fn prop_steps_are_8_connected(
            x0 in -200i32..200, y0 in -200i32..200,
            x1 in -200i32..200, y1 in -200i32..200,
        ) {
            let steps: Vec<_> = bresenham((x0, y0), (x1, y1)).collect();
            for pair in steps.windows(2) {
                prop_assert!((pair[1].0 - pair[0].0).abs() <= 1);
                prop_assert!((pair[1].1 - pair[0].1).abs() <= 1);
                prop_assert!(pair[0] != pair[1]);
            }
        }

        #[test]
        fn prop_brush_size_matches_width(
            x0 in -100i32..100, y0 in -100i32..100,
            x1 in -100i32..100, y1 in -100i32..100,
            width in 1u32..12,
        ) {
            prop_assume!((x0, y0) != (x1, y1));
            let steps = bresenham((x0, y0), (x1, y1)).count();
            let brush = 2 * (width / 2) as usize + 1;
            prop_assert_eq!(rasterize_thick_line((x0, y0), (x1, y1), width).count(), steps * brush);
        }
    }
}
