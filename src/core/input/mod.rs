//=========================================================================
// Input
//
// Keyboard input from the platform boundary up to logical actions.
//
// Responsibilities:
// - Represent key press/release events independently of Winit
// - Queue events until the next frame boundary (`EventSource`)
// - Translate keys into on/off action updates (`KeyMapper`)
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub mod action_mapper;
pub mod event;
pub mod event_source;

//=== Re-exports ==========================================================

pub use action::{Action, ActionSink, MotionAction};
pub use action_mapper::KeyMapper;
pub use event::{KeyCode, KeyEvent};
pub use event_source::{ChannelEventSource, EventSource, PumpStatus};
