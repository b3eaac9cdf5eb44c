//=========================================================================
// Render Step
//
// Paints one frame: background, the block, and the FPS readout.
//
// Responsibilities:
// - Define the drawing capability the core depends on (`Canvas`)
// - Hold the fixed palette and HUD layout
// - Format the instantaneous FPS, including the zero-elapsed edge case
//
// The render step only reads `MotionState`; it never mutates it.
//
//=========================================================================

//=== Submodules ==========================================================

mod pixel_canvas;

pub use pixel_canvas::PixelCanvas;

//=== Internal Dependencies ===============================================

use crate::core::motion::MotionState;

//=== Color ===============================================================

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// RGBA8 bytes with full alpha.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xFF]
    }
}

//=== Font ================================================================

/// Text style. Only the pixel size is honored by the built-in rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size_px: f64,
}

impl Font {
    pub const fn new(size_px: f64) -> Self {
        Self { size_px }
    }
}

//=== Palette & Layout ====================================================

/// Background fill (whitesmoke).
pub const BACKGROUND_COLOR: Color = Color::rgb(0xF5, 0xF5, 0xF5);

/// Block fill (orangered).
pub const ENTITY_COLOR: Color = Color::rgb(0xFF, 0x45, 0x00);

/// FPS readout (slategrey).
pub const HUD_COLOR: Color = Color::rgb(0x70, 0x80, 0x90);

pub const HUD_FONT: Font = Font::new(20.0);

/// Left edge and baseline of the FPS readout.
pub const HUD_ORIGIN: (f64, f64) = (0.0, 20.0);

/// Shown instead of a number when no time has elapsed.
pub const FPS_SENTINEL: &str = "--";

//=== Canvas Trait ========================================================

/// 2D drawing surface with a current fill color and font.
///
/// Coordinates are in canvas units, origin top-left. Text is positioned by
/// its left edge and baseline.
pub trait Canvas {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn set_fill_color(&mut self, color: Color);
    fn set_font(&mut self, font: Font);

    /// Fills the entire surface with the current fill color.
    fn fill(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(0.0, 0.0, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

//=== format_fps() ========================================================

/// Formats `1000 / elapsed_ms` with two decimals, rounding exact ties up.
///
/// Returns [`FPS_SENTINEL`] when the rate is not a finite number, which
/// happens on the first frame or when the clock stalls.
pub fn format_fps(elapsed_ms: f64) -> String {
    if elapsed_ms.is_nan() || elapsed_ms <= 0.0 {
        return FPS_SENTINEL.to_string();
    }

    let fps = 1000.0 / elapsed_ms;
    if fps.is_finite() {
        fixed_2(fps)
    } else {
        FPS_SENTINEL.to_string()
    }
}

/// Two-decimal formatting of a non-negative value, ties away from zero.
///
/// `{:.2}` is exact but breaks ties to even, so a value lying exactly
/// halfway between two hundredths (an odd multiple of 1/200) is bumped to
/// the upper neighbour first.
fn fixed_2(value: f64) -> String {
    let halves = (value * 200.0).round();
    let exact_tie = halves % 2.0 != 0.0 && value.mul_add(200.0, -halves) == 0.0;

    if exact_tie {
        format!("{:.2}", (halves + 1.0) / 200.0)
    } else {
        format!("{:.2}", value)
    }
}

//=== draw() ==============================================================

/// Renders `state` onto `canvas`.
pub fn draw<C: Canvas + ?Sized>(state: &MotionState, elapsed_ms: f64, canvas: &mut C) {
    let cfg = state.config();

    //--- 1. Background ----------------------------------------------------
    canvas.set_fill_color(BACKGROUND_COLOR);
    canvas.fill();

    //--- 2. Block ---------------------------------------------------------
    canvas.set_fill_color(ENTITY_COLOR);
    canvas.fill_rect(
        state.position.x - cfg.entity_width / 2.0,
        state.position.y - cfg.entity_height / 2.0,
        cfg.entity_width,
        cfg.entity_height,
    );

    //--- 3. FPS readout ---------------------------------------------------
    canvas.set_fill_color(HUD_COLOR);
    canvas.set_font(HUD_FONT);
    canvas.fill_text(&format_fps(elapsed_ms), HUD_ORIGIN.0, HUD_ORIGIN.1);
}

//=========================================================================
// Unit Tests
//=========================================================================
