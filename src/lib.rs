//=========================================================================
// Glidebox — Library Root
//
// A single block on an 800×800 canvas, steered with the arrow keys under
// damped acceleration, with a live FPS readout.
//
// Responsibilities:
// - Expose the application facade (`AppBuilder`, `App`)
// - Expose the platform-independent core (physics, input mapping,
//   rendering, frame driver) for embedding and testing
// - Keep the Winit/pixels host private
//
// Typical usage:
// ```no_run
// use glidebox::AppBuilder;
//
// fn main() -> Result<(), glidebox::PlatformError> {
//     AppBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the simulation, input mapping and rendering logic.
// It never touches the OS and is fully testable with synthetic input.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window, the frame buffer and the event loop.
// `engine` wires core and platform together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{App, AppBuilder};
pub use platform::PlatformError;
