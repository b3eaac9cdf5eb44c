//=========================================================================
// Glidebox App
//
// Main entry point: wires the block, its key bindings, the input channel
// and the platform together.
//
// Architecture:
// ```text
//     AppBuilder  ──build()──>  App  ──run()──>  [Event Loop]
//         │                      │
//         ├─ with_title()        ├─ creates input channel
//         └─ with_channel_       ├─ builds FrameDriver (block at center,
//            capacity()          │   arrow-key bindings)
//                                └─ runs Platform until window closes
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::frame::FrameDriver;
use crate::core::input::{ChannelEventSource, KeyMapper};
use crate::core::motion::{MotionConfig, MotionState};
use crate::platform::{Platform, PlatformConfig, PlatformError};

//=== AppBuilder ==========================================================

/// Builder for configuring and constructing an [`App`].
///
/// # Default Values
///
/// - **Title**: "Glidebox"
/// - **Channel capacity**: 128 key events
///
/// The block's physics constants are fixed ([`MotionConfig::DEFAULT`]).
///
/// # Examples
///
/// ```no_run
/// use glidebox::AppBuilder;
///
/// AppBuilder::new()
///     .with_title("Block")
///     .with_channel_capacity(256)
///     .build()
///     .run()
///     .expect("platform failure");
/// ```
pub struct AppBuilder {
    title: String,
    channel_capacity: usize,
}

impl AppBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Glidebox".to_string(),
            channel_capacity: 128,
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets how many key events may queue between two frames.
    ///
    /// Events beyond this are dropped (with a warning) rather than
    /// blocking the event loop.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds the app instance.
    pub fn build(self) -> App {
        info!(
            "Building app (title: {:?}, channel: {})",
            self.title, self.channel_capacity
        );

        App {
            title: self.title,
            channel_capacity: self.channel_capacity,
            motion: MotionConfig::DEFAULT,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== App =================================================================

/// The runnable application. Create via [`AppBuilder`].
pub struct App {
    title: String,
    channel_capacity: usize,
    motion: MotionConfig,
}

impl App {
    /// Opens the window and blocks until it is closed.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded key-event channel
    /// 2. Builds the frame driver (block at rest in the center)
    /// 3. Runs the platform event loop (blocks here)
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`PlatformError`] (event loop, window or
    /// surface failure).
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting app");

        //--- 1. Create input channel --------------------------------------
        let (source, key_sender) = ChannelEventSource::bounded(self.channel_capacity);

        //--- 2. Build the frame driver ------------------------------------
        // The platform's clock starts at construction, so frame time zero
        // is "now".
        let driver = FrameDriver::new(
            MotionState::new(self.motion),
            KeyMapper::arrow_keys(),
            source,
            0.0,
        );

        //--- 3. Launch the platform ---------------------------------------
        let platform = Platform::new(self.platform_config(), driver, key_sender);
        let result = platform.run();

        match &result {
            Ok(()) => info!("App shutdown complete"),
            Err(e) => log::error!("App stopped with error: {}", e),
        }
        result
    }

    fn platform_config(&self) -> PlatformConfig {
        PlatformConfig {
            title: self.title.clone(),
            buffer_width: self.motion.canvas_width as u32,
            buffer_height: self.motion.canvas_height as u32,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // AppBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = AppBuilder::new();
        assert_eq!(builder.title, "Glidebox");
        assert_eq!(builder.channel_capacity, 128);
    }

    #[test]
    fn builder_with_title() {
        let builder = AppBuilder::new().with_title("Block");
        assert_eq!(builder.title, "Block");
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = AppBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        AppBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let app = AppBuilder::new()
            .with_title("Chained")
            .with_channel_capacity(8)
            .build();

        assert_eq!(app.title, "Chained");
        assert_eq!(app.channel_capacity, 8);
        assert_eq!(app.motion, MotionConfig::DEFAULT);
    }

    //=====================================================================
    // App Tests
    //=====================================================================

    #[test]
    fn platform_config_matches_canvas() {
        let app = AppBuilder::new().build();
        let config = app.platform_config();

        assert_eq!(config.title, "Glidebox");
        assert_eq!(config.buffer_width, 800);
        assert_eq!(config.buffer_height, 800);
    }
}
