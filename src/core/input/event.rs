//=========================================================================
// Key Event Types
//
// Defines the internal representation of keyboard input.
//
// This module abstracts away platform-specific input (e.g. Winit) into a
// small, engine-friendly format consumed by the key mapper.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    KeyEvent (this module)
//         ↓
//    EventSource (channel)
//         ↓
//    KeyMapper → MotionAction flags
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Only the keys the application can bind are listed; everything else the
/// platform reports becomes [`KeyCode::Unidentified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Arrow Keys -------------------------------------------------------

    /// Directional navigation keys
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

//=== KeyEvent ============================================================

/// Press/release notification for a single key.
///
/// Auto-repeat is not filtered: holding a key produces a stream of
/// `KeyDown` events for the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// Key pressed (or auto-repeated).
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),
}

impl KeyEvent {
    /// The key this event refers to.
    pub fn key(&self) -> KeyCode {
        match *self {
            KeyEvent::KeyDown(key) | KeyEvent::KeyUp(key) => key,
        }
    }

    /// `true` for presses, `false` for releases.
    pub fn is_pressed(&self) -> bool {
        matches!(self, KeyEvent::KeyDown(_))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
