//=========================================================================
// Pixel Canvas
//=========================================================================
//
// Software `Canvas` over an RGBA8 frame buffer (one canvas unit = one
// pixel). Used with the `pixels` crate's frame, but works on any slice.
//
// Rectangles are snapped to whole pixels and clipped to the buffer.
// Text uses a built-in 3×5 bitmap font for the HUD glyph set
// (digits, '.', '-', ' '); other characters advance without drawing.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Canvas, Color, Font};

//=== Bitmap Font =========================================================

const GLYPH_COLUMNS: u32 = 3;
const GLYPH_ROWS: u32 = 5;

/// Fraction of the font size occupied by a digit.
const CAP_HEIGHT_RATIO: f64 = 0.7;

/// Row bitmaps, top to bottom; bit 2 is the leftmost column.
fn glyph(c: char) -> Option<[u8; GLYPH_ROWS as usize]> {
    let rows = match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        _ => return None,
    };
    Some(rows)
}

//=== PixelCanvas =========================================================

/// Rasterizes canvas commands into a borrowed RGBA8 buffer.
pub struct PixelCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    fill: Color,
    font: Font,
}

impl<'a> PixelCanvas<'a> {
    /// Wraps `frame`, which must hold `width * height` RGBA8 pixels.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length does not match the dimensions.
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        assert_eq!(
            frame.len(),
            width as usize * height as usize * 4,
            "Frame buffer does not match {}x{} RGBA8",
            width,
            height
        );

        Self {
            frame,
            width,
            height,
            fill: Color::rgb(0, 0, 0),
            font: Font::new(10.0),
        }
    }

    /// Reads back the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0; 4];
        px.copy_from_slice(&self.frame[i..i + 4]);
        Some(px)
    }

    /// Size of one font cell in pixels for the current font.
    fn glyph_scale(&self) -> u32 {
        let scale = (self.font.size_px * CAP_HEIGHT_RATIO / GLYPH_ROWS as f64).round();
        if scale >= 1.0 {
            scale as u32
        } else {
            1
        }
    }

    /// Snaps `[start, start + len)` to pixel bounds within `[0, limit]`.
    fn span(start: f64, len: f64, limit: u32) -> Option<(u32, u32)> {
        let lo = start.round().max(0.0).min(limit as f64);
        let hi = (start + len).round().max(0.0).min(limit as f64);
        if hi > lo {
            Some((lo as u32, hi as u32))
        } else {
            None
        }
    }

    fn fill_pixels(&mut self, x0: u32, y0: u32, x1: u32, y1: u32) {
        let rgba = self.fill.to_rgba();
        let stride = self.width as usize * 4;

        for y in y0..y1 {
            let row = y as usize * stride;
            let start = row + x0 as usize * 4;
            let end = row + x1 as usize * 4;
            for px in self.frame[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }
}

impl Canvas for PixelCanvas<'_> {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn fill(&mut self) {
        let rgba = self.fill.to_rgba();
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let Some((x0, x1)) = Self::span(x, width, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::span(y, height, self.height) else {
            return;
        };
        self.fill_pixels(x0, y0, x1, y1);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let scale = self.glyph_scale() as f64;
        let advance = (GLYPH_COLUMNS + 1) as f64 * scale;
        let top = y - GLYPH_ROWS as f64 * scale;

        let mut pen_x = x;
        for c in text.chars() {
            if let Some(rows) = glyph(c) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..GLYPH_COLUMNS {
                        if bits & (1 << (GLYPH_COLUMNS - 1 - col)) != 0 {
                            self.fill_rect(
                                pen_x + col as f64 * scale,
                                top + row as f64 * scale,
                                scale,
                                scale,
                            );
                        }
                    }
                }
            }
            pen_x += advance;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
