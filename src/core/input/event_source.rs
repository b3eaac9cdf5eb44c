//=========================================================================
// Event Source
//=========================================================================
//
// Key event delivery with bounded draining and disconnect detection.
//
// Architecture:
//   Sender<KeyEvent> (platform) → Receiver → poll(handler) → PumpStatus
//
// Producer and consumer live on the same thread; the channel only
// decouples the moment an OS event arrives from the next frame boundary.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::event::KeyEvent;

//=== PumpStatus ==========================================================

/// Outcome of draining an [`EventSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpStatus {
    /// Source still connected; `delivered` events were handed out.
    Open { delivered: usize },

    /// All producers are gone. Events drained before the disconnect
    /// were still delivered.
    Disconnected { delivered: usize },
}

impl PumpStatus {
    pub fn delivered(&self) -> usize {
        match *self {
            PumpStatus::Open { delivered } | PumpStatus::Disconnected { delivered } => delivered,
        }
    }
}

//=== EventSource Trait ===================================================

/// A queue of key events that can be drained once per frame.
pub trait EventSource {
    /// Delivers every pending event to `handler`, oldest first.
    fn poll(&mut self, handler: &mut dyn FnMut(KeyEvent)) -> PumpStatus;
}

//=== ChannelEventSource ==================================================

/// [`EventSource`] backed by a bounded crossbeam channel.
pub struct ChannelEventSource {
    receiver: Receiver<KeyEvent>,
}

impl ChannelEventSource {
    /// Upper bound on events handed out per poll, so a flooded queue can't
    /// stall a frame.
    const MAX_EVENTS_PER_POLL: usize = 256;

    pub fn new(receiver: Receiver<KeyEvent>) -> Self {
        Self { receiver }
    }

    /// Creates a source together with the sender the platform feeds.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn bounded(capacity: usize) -> (Self, Sender<KeyEvent>) {
        assert!(capacity > 0, "Channel capacity must be positive");
        let (tx, rx) = bounded(capacity);
        (Self::new(rx), tx)
    }

    /// Number of events waiting to be polled.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl EventSource for ChannelEventSource {
    fn poll(&mut self, handler: &mut dyn FnMut(KeyEvent)) -> PumpStatus {
        let mut delivered = 0;

        while delivered < Self::MAX_EVENTS_PER_POLL {
            match self.receiver.try_recv() {
                Ok(event) => {
                    handler(event);
                    delivered += 1;
                }
                Err(TryRecvError::Empty) => return PumpStatus::Open { delivered },
                Err(TryRecvError::Disconnected) => {
                    return PumpStatus::Disconnected { delivered }
                }
            }
        }

        warn!(
            target: "core::input",
            "Input backlog: delivered {} events this frame, {} still queued",
            delivered,
            self.receiver.len()
        );
        PumpStatus::Open { delivered }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
