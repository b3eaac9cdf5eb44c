//=========================================================================
// Key Mapper
//=========================================================================
//
// Maps key press/release events to on/off action updates.
//
// Architecture:
//   KeyEvent → HashMap<KeyCode, A> → ActionSink::set_active(A, bool)
//
// Unbound keys are dropped silently. Repeated presses are forwarded as-is.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::trace;

//=== Internal Dependencies ===============================================

use super::{
    action::{Action, ActionSink, MotionAction},
    event::{KeyCode, KeyEvent},
    event_source::{EventSource, PumpStatus},
};

//=== KeyMapper ===========================================================

/// Enum-keyed binding table from physical keys to logical actions.
pub struct KeyMapper<A: Action> {
    bindings: HashMap<KeyCode, A>,
}

impl<A: Action> KeyMapper<A> {
    /// Creates a mapper with no bindings.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Creates a mapper from `(key, action)` pairs. Later pairs win.
    pub fn from_bindings<I>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (KeyCode, A)>,
    {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action, replacing any previous binding.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        self.bindings.insert(key, action);
    }

    /// Removes the binding for `key`, if any.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Returns the action bound to `key`.
    pub fn action_for(&self, key: KeyCode) -> Option<A> {
        self.bindings.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    //--- Dispatch ---------------------------------------------------------

    /// Routes a single event to `sink`.
    ///
    /// `KeyDown` → `set_active(action, true)`, `KeyUp` → `set_active(action, false)`.
    /// Returns the action that was updated, or `None` for unbound keys.
    pub fn dispatch<S>(&self, event: KeyEvent, sink: &mut S) -> Option<A>
    where
        S: ActionSink<A> + ?Sized,
    {
        let Some(action) = self.action_for(event.key()) else {
            trace!(target: "core::input", "Unbound key ignored: {:?}", event);
            return None;
        };

        sink.set_active(action, event.is_pressed());
        Some(action)
    }

    /// Drains `source`, dispatching every pending event to `sink` in order.
    pub fn pump<E, S>(&self, source: &mut E, sink: &mut S) -> PumpStatus
    where
        E: EventSource + ?Sized,
        S: ActionSink<A> + ?Sized,
    {
        source.poll(&mut |event| {
            self.dispatch(event, sink);
        })
    }
}

impl<A: Action> Default for KeyMapper<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Default Bindings ====================================================

impl KeyMapper<MotionAction> {
    /// Arrow-key bindings for the controllable block.
    ///
    /// Vertical arrows are cross-wired onto the y-up action names:
    /// `ArrowUp → Down` and `ArrowDown → Up`, so the arrows move the block
    /// in the direction they point on screen.
    pub fn arrow_keys() -> Self {
        Self::from_bindings([
            (KeyCode::ArrowUp, MotionAction::Down),
            (KeyCode::ArrowDown, MotionAction::Up),
            (KeyCode::ArrowLeft, MotionAction::Left),
            (KeyCode::ArrowRight, MotionAction::Right),
        ])
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event_source::ChannelEventSource;

    //--- Test Helpers -----------------------------------------------------

    fn recorder() -> (Vec<(MotionAction, bool)>, KeyMapper<MotionAction>) {
        (Vec::new(), KeyMapper::arrow_keys())
    }

    //=====================================================================
    // Binding Tests
    //=====================================================================

    #[test]
    fn new_mapper_is_empty() {
        let mapper = KeyMapper::<MotionAction>::new();
        assert!(mapper.is_empty());
        assert_eq!(mapper.action_for(KeyCode::ArrowUp), None);
    }

    #[test]
    fn arrow_keys_preserve_vertical_cross_wiring() {
        let mapper = KeyMapper::arrow_keys();

        assert_eq!(mapper.len(), 4);
        assert_eq!(mapper.action_for(KeyCode::ArrowUp), Some(MotionAction::Down));
        assert_eq!(mapper.action_for(KeyCode::ArrowDown), Some(MotionAction::Up));
        assert_eq!(mapper.action_for(KeyCode::ArrowLeft), Some(MotionAction::Left));
        assert_eq!(mapper.action_for(KeyCode::ArrowRight), Some(MotionAction::Right));
    }

    #[test]
    fn bind_key_overwrites_previous_binding() {
        let mut mapper = KeyMapper::new();
        mapper.bind_key(KeyCode::ArrowUp, MotionAction::Up);
        mapper.bind_key(KeyCode::ArrowUp, MotionAction::Left);

        assert_eq!(mapper.len(), 1);
        assert_eq!(mapper.action_for(KeyCode::ArrowUp), Some(MotionAction::Left));
    }

    #[test]
    fn unbind_key_removes_binding() {
        let mut mapper = KeyMapper::arrow_keys();
        mapper.unbind_key(KeyCode::ArrowLeft);

        assert_eq!(mapper.action_for(KeyCode::ArrowLeft), None);
        assert_eq!(mapper.len(), 3);
    }

    //=====================================================================
    // Dispatch Tests
    //=====================================================================

    #[test]
    fn key_down_sets_action_active() {
        let (mut seen, mapper) = recorder();
        let mut sink = |a, on| seen.push((a, on));

        let routed = mapper.dispatch(KeyEvent::KeyDown(KeyCode::ArrowRight), &mut sink);

        assert_eq!(routed, Some(MotionAction::Right));
        assert_eq!(seen, vec![(MotionAction::Right, true)]);
    }

    #[test]
    fn key_up_sets_action_inactive() {
        let (mut seen, mapper) = recorder();
        let mut sink = |a, on| seen.push((a, on));

        mapper.dispatch(KeyEvent::KeyUp(KeyCode::ArrowLeft), &mut sink);

        assert_eq!(seen, vec![(MotionAction::Left, false)]);
    }

    #[test]
    fn repeated_key_down_reasserts_active() {
        let (mut seen, mapper) = recorder();
        let mut sink = |a, on| seen.push((a, on));

        mapper.dispatch(KeyEvent::KeyDown(KeyCode::ArrowUp), &mut sink);
        mapper.dispatch(KeyEvent::KeyDown(KeyCode::ArrowUp), &mut sink);

        assert_eq!(
            seen,
            vec![(MotionAction::Down, true), (MotionAction::Down, true)]
        );
    }

    #[test]
    fn unbound_key_is_noop() {
        let (mut seen, mapper) = recorder();
        let mut sink = |a, on| seen.push((a, on));

        assert_eq!(mapper.dispatch(KeyEvent::KeyUp(KeyCode::Unidentified), &mut sink), None);
        assert_eq!(mapper.dispatch(KeyEvent::KeyDown(KeyCode::Unidentified), &mut sink), None);
        assert!(seen.is_empty());
    }

    //=====================================================================
    // Pump Tests
    //=====================================================================

    #[test]
    fn pump_dispatches_in_arrival_order() {
        let (mut source, tx) = ChannelEventSource::bounded(8);
        tx.send(KeyEvent::KeyDown(KeyCode::ArrowDown)).unwrap();
        tx.send(KeyEvent::KeyDown(KeyCode::Unidentified)).unwrap();
        tx.send(KeyEvent::KeyUp(KeyCode::ArrowDown)).unwrap();

        let (mut seen, mapper) = recorder();
        let mut sink = |a, on| seen.push((a, on));
        let status = mapper.pump(&mut source, &mut sink);

        assert_eq!(status, PumpStatus::Open { delivered: 3 });
        assert_eq!(
            seen,
            vec![(MotionAction::Up, true), (MotionAction::Up, false)]
        );
    }

    #[test]
    fn pump_on_empty_source_delivers_nothing() {
        let (mut source, _tx) = ChannelEventSource::bounded(4);
        let (mut seen, mapper) = recorder();
        let mut sink = |a, on| seen.push((a, on));

        assert_eq!(mapper.pump(&mut source, &mut sink), PumpStatus::Open { delivered: 0 });
        assert!(seen.is_empty());
    }
}
