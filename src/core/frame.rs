//=========================================================================
// Frame Driver
//
// Owns the block's state and runs one update/draw cycle per tick.
//
// Tick Pipeline:
// ```text
//  EventSource ──pump──> KeyMapper ──set_active──> MotionState.input
//        ↓
//  elapsed = current - previous
//        ↓
//  MotionState::update(elapsed)
//        ↓
//  render::draw(state, elapsed, canvas)
//        ↓
//  previous = current, scheduler.request_frame()
// ```
//
// Time is injected as a millisecond timestamp and the next frame is
// requested through `FrameScheduler`, so the driver runs the same under
// Winit and under tests with synthetic clocks.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::input::{EventSource, KeyMapper, MotionAction, PumpStatus};
use crate::core::motion::MotionState;
use crate::core::render::{self, Canvas};

//=== FrameScheduler ======================================================

/// Requests that the host invoke the driver again on its next frame.
pub trait FrameScheduler {
    fn request_frame(&self);
}

//=== TickReport ==========================================================

/// Summary of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Milliseconds since the previous tick (never negative).
    pub elapsed_ms: f64,

    /// Input events drained from the source this tick.
    pub input_events: usize,

    /// `false` once the input source has lost its producer.
    pub input_connected: bool,
}

//=== FrameDriver =========================================================

/// Single-threaded frame loop body.
///
/// The driver is the exclusive owner of [`MotionState`]; the update and
/// render steps only borrow it for the duration of a call.
pub struct FrameDriver<E: EventSource> {
    state: MotionState,
    key_mapper: KeyMapper<MotionAction>,
    source: E,
    previous_ms: f64,
    frames: u64,
    input_connected: bool,
}

impl<E: EventSource> FrameDriver<E> {
    /// Creates a driver whose first tick measures time from `start_ms`.
    pub fn new(
        state: MotionState,
        key_mapper: KeyMapper<MotionAction>,
        source: E,
        start_ms: f64,
    ) -> Self {
        Self {
            state,
            key_mapper,
            source,
            previous_ms: start_ms,
            frames: 0,
            input_connected: true,
        }
    }

    //--- tick() -----------------------------------------------------------

    /// Runs one frame at timestamp `current_ms`.
    ///
    /// A timestamp older than the previous one is treated as zero elapsed.
    pub fn tick<C, S>(&mut self, current_ms: f64, canvas: &mut C, scheduler: &S) -> TickReport
    where
        C: Canvas + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        //--- 1. Apply pending input ---------------------------------------
        let status = self.key_mapper.pump(&mut self.source, &mut self.state.input);
        if let PumpStatus::Disconnected { .. } = status {
            if self.input_connected {
                warn!(target: "core::frame", "Input source disconnected; holding last input state");
            }
            self.input_connected = false;
        }

        //--- 2. Measure elapsed time --------------------------------------
        let mut elapsed_ms = current_ms - self.previous_ms;
        if elapsed_ms < 0.0 {
            warn!(
                target: "core::frame",
                "Clock went backwards by {:.3} ms; treating as zero elapsed",
                -elapsed_ms
            );
            elapsed_ms = 0.0;
        }

        //--- 3. Update, then draw -----------------------------------------
        self.state.update(elapsed_ms);
        render::draw(&self.state, elapsed_ms, canvas);

        //--- 4. Advance and reschedule ------------------------------------
        self.previous_ms = current_ms.max(self.previous_ms);
        self.frames += 1;
        scheduler.request_frame();

        trace!(
            target: "core::frame",
            "Frame {} ({:.2} ms): pos=({:.1}, {:.1}) vel=({:.2}, {:.2})",
            self.frames,
            elapsed_ms,
            self.state.position.x,
            self.state.position.y,
            self.state.velocity.x,
            self.state.velocity.y
        );

        TickReport {
            elapsed_ms,
            input_events: status.delivered(),
            input_connected: self.input_connected,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Number of completed ticks.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn previous_ms(&self) -> f64 {
        self.previous_ms
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
