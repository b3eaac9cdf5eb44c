//=========================================================================
// Math Helpers
//=========================================================================
//
// Scalar clamping plus the 2D vector type used by the motion model.
//
// All simulation math is double precision. `Vec2` is glam's `DVec2`; the
// component-wise clamp lives here so both helpers share one bound rule.
//
//=========================================================================

//=== Vec2 ================================================================

/// A 2D vector of `f64` components in canvas units.
///
/// Screen space: origin top-left, `y` grows downward.
pub type Vec2 = glam::DVec2;

//=== clamp() =============================================================

/// Constrains `value` to the inclusive range `[min, max]`.
///
/// Returns `value` unchanged when it already lies in range, otherwise the
/// nearest bound. Callers guarantee `min <= max`; if they don't, `min` wins.
///
/// ```
/// use glidebox::core::math::clamp;
///
/// assert_eq!(clamp(0.0, 10.0, 5.0), 5.0);
/// assert_eq!(clamp(0.0, 10.0, -3.0), 0.0);
/// assert_eq!(clamp(0.0, 10.0, 42.0), 10.0);
/// ```
#[inline]
pub fn clamp(min: f64, max: f64, value: f64) -> f64 {
    min.max(max.min(value))
}

/// Applies [`clamp`] to each component independently.
///
/// Unlike `DVec2::clamp`, an inverted range resolves to `min` instead of
/// asserting.
#[inline]
pub fn clamp_vec2(min: Vec2, max: Vec2, value: Vec2) -> Vec2 {
    Vec2::new(clamp(min.x, max.x, value.x), clamp(min.y, max.y, value.y))
}

//=========================================================================
// Unit Tests
//=========================================================================
