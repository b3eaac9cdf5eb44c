//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit keyboard events into engine KeyEvents.
//
// Architecture:
//   Winit KeyEvent → process_key_event() → KeyEvent (engine type) → channel
//
// Keys outside the engine's `KeyCode` set (F-keys, numpad, media keys) and
// keys without a physical code are filtered (returns None). OS auto-repeat
// presses pass through as additional `KeyDown` events.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent as WinitKeyEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{KeyCode, KeyEvent};

//=== Event Processing ====================================================

/// Converts a Winit key event to a [`KeyEvent`] (filters unmapped keys).
pub(crate) fn process_key_event(key_event: &WinitKeyEvent) -> Option<KeyEvent> {
    let key_code = match key_event.physical_key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        _ => return None,
    };

    create_key_event(key_code, key_event.state)
}

/// Pairs a key with its press state; `Unidentified` keys yield `None`.
fn create_key_event(key: KeyCode, state: ElementState) -> Option<KeyEvent> {
    if key == KeyCode::Unidentified {
        return None;
    }

    Some(match state {
        ElementState::Pressed => KeyEvent::KeyDown(key),
        ElementState::Released => KeyEvent::KeyUp(key),
    })
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to engine key codes.
///
/// Maps the four arrow keys. Everything else returns
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        match code {
            //--- Arrows -------------------------------------------------------

            WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
            WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
            WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
            WinitKeyCode::ArrowRight => KeyCode::ArrowRight,

            //--- Unmapped (return Unidentified) -------------------------------

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_becomes_key_down() {
        assert_eq!(
            create_key_event(KeyCode::ArrowUp, ElementState::Pressed),
            Some(KeyEvent::KeyDown(KeyCode::ArrowUp))
        );
    }

    #[test]
    fn released_becomes_key_up() {
        assert_eq!(
            create_key_event(KeyCode::ArrowLeft, ElementState::Released),
            Some(KeyEvent::KeyUp(KeyCode::ArrowLeft))
        );
    }

    #[test]
    fn unidentified_key_is_filtered() {
        assert_eq!(create_key_event(KeyCode::Unidentified, ElementState::Pressed), None);
        assert_eq!(create_key_event(KeyCode::Unidentified, ElementState::Released), None);
    }

    #[test]
    fn keycode_conversion_arrows() {
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowUp), KeyCode::ArrowUp);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowDown), KeyCode::ArrowDown);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowRight), KeyCode::ArrowRight);
    }

    #[test]
    fn keycode_conversion_filters_unmapped() {
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyQ), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyW), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Unidentified);
    }
}
