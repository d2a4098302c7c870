use crate::color::Rgb8;

/// Write ABGR pixel to slice (RGBA8888 little-endian byte order)
#[inline]
fn write_pixel(dest: &mut [u8], (r, g, b): Rgb8) {
    dest[0] = 255; // A
    dest[1] = b; // B
    dest[2] = g; // G
    dest[3] = r; // R
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// RGBA8888 pixel buffer for software rendering.
/// Uploaded as-is into an SDL streaming texture.
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width as usize) * (height as usize) * 4],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * 4
    }

    /// Clear to a solid color
    pub fn clear(&mut self, color: Rgb8) {
        for px in self.pixels.chunks_exact_mut(4) {
            write_pixel(px, color);
        }
    }

    /// Set a single pixel (bounds checked)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb8) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            write_pixel(&mut self.pixels[idx..idx + 4], color);
        }
    }

    /// Fast unchecked pixel set - use when you've already bounds-checked
    ///
    /// # Safety
    /// `x < width` and `y < height` must hold.
    #[inline]
    pub unsafe fn set_pixel_unchecked(&mut self, x: u32, y: u32, (r, g, b): Rgb8) {
        let idx = self.pixel_index(x, y);
        *self.pixels.get_unchecked_mut(idx) = 255;
        *self.pixels.get_unchecked_mut(idx + 1) = b;
        *self.pixels.get_unchecked_mut(idx + 2) = g;
        *self.pixels.get_unchecked_mut(idx + 3) = r;
    }

    /// Read a pixel (bounds checked)
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb8> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some((
                self.pixels[idx + 3], // R
                self.pixels[idx + 2], // G
                self.pixels[idx + 1], // B
            ))
        } else {
            None
        }
    }

    /// Number of pixels currently holding `color`
    pub fn count_color(&self, (r, g, b): Rgb8) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|px| px[3] == r && px[2] == g && px[1] == b)
            .count()
    }

    /// Horizontal span, clipped to the buffer
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Rgb8) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0);
        let end = x2.min(self.width as i32 - 1);
        if start > end {
            return;
        }

        let mut idx = self.pixel_index(start as u32, y as u32);
        for _ in start..=end {
            write_pixel(&mut self.pixels[idx..idx + 4], color);
            idx += 4;
        }
    }

    /// 1px line using Bresenham's algorithm with Cohen-Sutherland clipping
    ///
    /// Clips to screen bounds first, then draws without per-pixel bounds checks.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb8) {
        let Some((cx0, cy0, cx1, cy1)) = self.clip_line(x0, y0, x1, y1) else {
            return;
        };

        let dx = (cx1 - cx0).abs();
        let dy = -((cy1 - cy0).abs());
        let sx = if cx0 < cx1 { 1i32 } else { -1i32 };
        let sy = if cy0 < cy1 { 1i32 } else { -1i32 };
        let mut err = dx + dy;
        let mut x = cx0;
        let mut y = cy0;

        loop {
            // Safety: coordinates are clipped to valid range
            unsafe {
                self.set_pixel_unchecked(x as u32, y as u32, color);
            }
            if x == cx1 && y == cy1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Cohen-Sutherland clip of an integer line to the buffer bounds.
    /// Returns the clipped endpoints, or None when nothing is on screen.
    fn clip_line(
        &self,
        mut x0: i32,
        mut y0: i32,
        mut x1: i32,
        mut y1: i32,
    ) -> Option<(i32, i32, i32, i32)> {
        const INSIDE: u8 = 0;
        const LEFT: u8 = 1;
        const RIGHT: u8 = 2;
        const BOTTOM: u8 = 4;
        const TOP: u8 = 8;
        // Converges in at most 4 rounds for valid input
        const MAX_ITERATIONS: u32 = 16;

        let w = self.width as i32;
        let h = self.height as i32;

        let outcode = |x: i32, y: i32| -> u8 {
            let mut code = INSIDE;
            if x < 0 {
                code |= LEFT;
            } else if x >= w {
                code |= RIGHT;
            }
            if y < 0 {
                code |= TOP;
            } else if y >= h {
                code |= BOTTOM;
            }
            code
        };

        let mut code0 = outcode(x0, y0);
        let mut code1 = outcode(x1, y1);

        for _ in 0..MAX_ITERATIONS {
            if (code0 | code1) == 0 {
                return Some((x0, y0, x1, y1));
            }
            if (code0 & code1) != 0 {
                return None;
            }

            let code_out = if code0 != 0 { code0 } else { code1 };
            // i64 so long off-screen lines cannot overflow the products
            let dx = i64::from(x1) - i64::from(x0);
            let dy = i64::from(y1) - i64::from(y0);
            let (x, y);

            if (code_out & BOTTOM) != 0 {
                if dy == 0 {
                    return None;
                }
                x = i64::from(x0) + dx * (i64::from(h - 1) - i64::from(y0)) / dy;
                y = i64::from(h - 1);
            } else if (code_out & TOP) != 0 {
                if dy == 0 {
                    return None;
                }
                x = i64::from(x0) + dx * -i64::from(y0) / dy;
                y = 0;
            } else if (code_out & RIGHT) != 0 {
                if dx == 0 {
                    return None;
                }
                y = i64::from(y0) + dy * (i64::from(w - 1) - i64::from(x0)) / dx;
                x = i64::from(w - 1);
            } else {
                if dx == 0 {
                    return None;
                }
                y = i64::from(y0) + dy * -i64::from(x0) / dx;
                x = 0;
            }

            let (x, y) = (saturate(x), saturate(y));
            if code_out == code0 {
                x0 = x;
                y0 = y;
                code0 = outcode(x0, y0);
            } else {
                x1 = x;
                y1 = y;
                code1 = outcode(x1, y1);
            }
        }

        None
    }

    /// Line with variable thickness, drawn as parallel 1px lines
    pub fn line_thick(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, thickness: i32, color: Rgb8) {
        if thickness <= 1 {
            self.line(x0, y0, x1, y1, color);
            return;
        }

        let dx = (i64::from(x1) - i64::from(x0)) as f32;
        let dy = (i64::from(y1) - i64::from(y0)) as f32;
        let len = (dx * dx + dy * dy).sqrt();

        if len < 0.001 {
            // Single point: a dot as wide as the stroke
            self.fill_circle(x0, y0, thickness / 2, color);
            return;
        }

        // Perpendicular unit vector
        let px = -dy / len;
        let py = dx / len;

        let half = (thickness - 1) as f32 / 2.0;
        for i in 0..thickness {
            let offset = (i as f32) - half;
            let ox = (px * offset).round() as i32;
            let oy = (py * offset).round() as i32;
            self.line(x0 + ox, y0 + oy, x1 + ox, y1 + oy, color);
        }
    }

    /// Thick line with round caps, so consecutive polyline edges join cleanly
    pub fn line_thick_rounded(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: i32,
        color: Rgb8,
    ) {
        self.line_thick(x0, y0, x1, y1, thickness, color);
        if thickness > 2 {
            let radius = thickness / 2;
            self.fill_circle(x0, y0, radius, color);
            self.fill_circle(x1, y1, radius, color);
        }
    }

    /// Filled circle using horizontal spans
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb8) {
        if radius <= 0 {
            if radius == 0 {
                self.set_pixel(cx, cy, color);
            }
            return;
        }

        // Midpoint circle algorithm with span filling
        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;

        while x >= y {
            self.hline(cx - x, cx + x, cy + y, color);
            if y != 0 {
                self.hline(cx - x, cx + x, cy - y, color);
            }
            if x != y {
                self.hline(cx - y, cx + y, cy + x, color);
                if y != 0 {
                    self.hline(cx - y, cx + y, cy - x, color);
                }
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Raw bytes for SDL texture upload
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
