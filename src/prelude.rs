//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use glidebox::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Application
pub use crate::engine::{App, AppBuilder};
pub use crate::platform::PlatformError;

// Simulation
pub use crate::core::math::{clamp, clamp_vec2, Vec2};
pub use crate::core::motion::{InputFlags, MotionConfig, MotionState};

// Input
pub use crate::core::input::{
    Action, ActionSink, ChannelEventSource, EventSource, KeyCode, KeyEvent, KeyMapper,
    MotionAction, PumpStatus,
};

// Rendering & frame loop
pub use crate::core::frame::{FrameDriver, FrameScheduler, TickReport};
pub use crate::core::render::{draw, format_fps, Canvas, Color, Font, PixelCanvas};
