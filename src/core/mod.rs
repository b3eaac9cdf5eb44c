//=========================================================================
// Core
//
// Platform-independent simulation and rendering logic.
//
// Responsibilities:
// - Keyboard input → logical actions (`input`)
// - Block physics (`motion`)
// - Frame painting against an abstract surface (`render`)
// - The per-tick update/draw cycle (`frame`)
//
// Notes:
// Nothing in `core` touches Winit or the GPU. The platform layer feeds it
// key events, timestamps, and a frame buffer; tests feed it the same
// things synthetically.
//
//=========================================================================

pub mod frame;
pub mod input;
pub mod math;
pub mod motion;
pub mod render;

//=== Re-exports ==========================================================

pub use frame::{FrameDriver, FrameScheduler, TickReport};
pub use input::{Action, ActionSink, KeyCode, KeyEvent, KeyMapper, MotionAction};
pub use motion::{InputFlags, MotionConfig, MotionState};
pub use render::{Canvas, Color, Font, PixelCanvas};
