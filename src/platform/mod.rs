//=========================================================================
// Platform Subsystem
//
// Hosts the frame driver inside a Winit window backed by a `pixels`
// frame buffer.
//
// Architecture:
// ```text
//  Main Thread (everything runs here):
//  ┌────────────────────────────────────────────────┐
//  │  Winit Event Loop                              │
//  │   ├─ KeyboardInput → input_processor           │
//  │   │      ↓ try_send                            │
//  │   │   Channel<KeyEvent> ─────────┐             │
//  │   │                              ↓             │
//  │   └─ RedrawRequested ──> FrameDriver::tick     │
//  │          ├─ pump input → update → draw         │
//  │          ├─ pixels.render()                    │
//  │          └─ window.request_redraw() (next)     │
//  └────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: Input queued since the last
//   frame is applied atomically at the start of the tick
// - **Non-blocking sends**: Producer and consumer share a thread, so a full
//   channel drops the event instead of waiting
// - **Fixed logical buffer**: The frame buffer stays 800×800; `pixels`
//   scales it to whatever the window surface is
// - **Errors stop the loop**: Surface failures are logged, the loop exits,
//   and the first error is returned from `run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::frame::{FrameDriver, FrameScheduler};
use crate::core::input::{ChannelEventSource, KeyEvent};
use crate::core::render::PixelCanvas;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// All of these are fatal: the event loop stops and the error is returned
/// from [`App::run`](crate::App::run).
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),

    /// The OS refused to create the window.
    WindowCreation(winit::error::OsError),

    /// Frame buffer creation or presentation failed.
    Surface(pixels::Error),

    /// The surface could not follow a window resize.
    SurfaceResize(pixels::TextureError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::Surface(e) => write!(f, "Surface error: {}", e),
            Self::SurfaceResize(e) => write!(f, "Surface resize failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Window Scheduling ===================================================

impl FrameScheduler for Window {
    fn request_frame(&self) {
        self.request_redraw();
    }
}

//=== Surface Sizing ======================================================

/// Returns the size to give the surface, or `None` while the window has no
/// drawable area (minimized windows report 0×0 on Windows).
fn presentable_size(size: PhysicalSize<u32>) -> Option<(u32, u32)> {
    if size.width > 0 && size.height > 0 {
        Some((size.width, size.height))
    } else {
        None
    }
}

//=== PlatformConfig ======================================================

/// Window parameters chosen by the application builder.
#[derive(Debug, Clone)]
pub(crate) struct PlatformConfig {
    pub title: String,

    /// Frame buffer size in pixels (also the window's logical size).
    pub buffer_width: u32,
    pub buffer_height: u32,
}

//=== Platform ============================================================

/// Window manager, input forwarder and frame host.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` - no window yet
/// 2. **Execution**: `platform.run()` - creates the event loop and blocks
/// 3. **Resume**: window and frame buffer created lazily
/// 4. **Shutdown**: window closed or fatal error → loop exits
///
/// # Thread Safety
///
/// This type is NOT Send/Sync in practice - it must remain on the main
/// thread (Winit requirement on macOS/iOS).
pub(crate) struct Platform {
    config: PlatformConfig,

    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// Frame buffer bound to `window`.
    pixels: Option<Pixels<'static>>,

    /// Feeds key events to the driver's event source.
    key_sender: Sender<KeyEvent>,

    driver: FrameDriver<ChannelEventSource>,

    /// Zero point for frame timestamps.
    clock: Instant,

    /// First fatal error raised inside the event loop.
    error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a platform around `driver`, whose timestamps are measured
    /// from now.
    pub fn new(
        config: PlatformConfig,
        driver: FrameDriver<ChannelEventSource>,
        key_sender: Sender<KeyEvent>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            config,
            window: None,
            pixels: None,
            key_sender,
            driver,
            clock: Instant::now(),
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or a fatal error occurs.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails, or the first window/surface error raised while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        info!(
            target: "platform",
            "Event loop exited after {} frames",
            self.driver.frames()
        );

        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Queues a key event for the next frame.
    ///
    /// Never blocks: the consumer runs on this same thread, so a full
    /// channel drops the event with a warning.
    fn forward_key(&self, event: KeyEvent) {
        match self.key_sender.try_send(event) {
            Ok(()) => trace!(target: "platform::input", "Queued {:?}", event),
            Err(TrySendError::Full(event)) => {
                warn!(target: "platform::input", "Input channel full, dropping {:?}", event);
            }
            Err(TrySendError::Disconnected(event)) => {
                warn!(target: "platform::input", "Input channel disconnected, dropping {:?}", event);
            }
        }
    }

    /// Records a fatal error (first one wins) and stops the event loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PlatformError) {
        error!(target: "platform", "{}", err);
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    /// Creates the window and its frame buffer.
    fn create_surface(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(Arc<Window>, Pixels<'static>), PlatformError> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.buffer_width,
                self.config.buffer_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(PlatformError::WindowCreation)?,
        );

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(
            self.config.buffer_width,
            self.config.buffer_height,
            surface_texture,
        )
        .map_err(PlatformError::Surface)?;

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI (buffer {}x{})",
            size.width,
            size.height,
            window.scale_factor(),
            self.config.buffer_width,
            self.config.buffer_height
        );

        Ok((window, pixels))
    }

    /// Runs one frame and presents it.
    fn redraw(&mut self) -> Result<(), PlatformError> {
        let (Some(window), Some(pixels)) = (self.window.as_ref(), self.pixels.as_mut()) else {
            return Ok(());
        };

        let now_ms = self.clock.elapsed().as_secs_f64() * 1000.0;
        let mut canvas = PixelCanvas::new(
            pixels.frame_mut(),
            self.config.buffer_width,
            self.config.buffer_height,
        );

        self.driver.tick(now_ms, &mut canvas, &**window);

        if presentable_size(window.inner_size()).is_none() {
            trace!(target: "platform", "Window has no drawable area; skipping present");
            return Ok(());
        }

        pixels.render().map_err(PlatformError::Surface)
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_deref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        match self.create_surface(event_loop) {
            Ok((window, pixels)) => {
                window.request_redraw();
                self.window = Some(window);
                self.pixels = Some(pixels);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match input_processor::process_key_event(&key_event) {
                    Some(event) => self.forward_key(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::Resized(size) => {
                let Some(pixels) = self.pixels.as_mut() else {
                    return;
                };
                debug!(target: "platform", "Resized to {}x{}", size.width, size.height);

                let Some((width, height)) = presentable_size(size) else {
                    debug!(target: "platform", "Zero-sized window, keeping current surface");
                    return;
                };

                if let Err(e) = pixels.resize_surface(width, height) {
                    self.fail(event_loop, PlatformError::SurfaceResize(e));
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                }
            }

            _ => {
                // Ignore: Focused, CursorMoved, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{EventSource, KeyCode, KeyMapper};
    use crate::core::motion::MotionState;

    //--- Test Helpers -----------------------------------------------------

    fn config() -> PlatformConfig {
        PlatformConfig {
            title: "test".to_string(),
            buffer_width: 800,
            buffer_height: 800,
        }
    }

    fn platform_with_capacity(capacity: usize) -> (Platform, ChannelEventSource) {
        let (receiver, tx) = ChannelEventSource::bounded(capacity);
        let (driver_source, _unused_tx) = ChannelEventSource::bounded(1);
        let driver = FrameDriver::new(
            MotionState::default(),
            KeyMapper::arrow_keys(),
            driver_source,
            0.0,
        );
        (Platform::new(config(), driver, tx), receiver)
    }

    fn drain(source: &mut ChannelEventSource) -> Vec<KeyEvent> {
        let mut events = Vec::new();
        source.poll(&mut |e| events.push(e));
        events
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn platform_creation() {
        let (platform, _receiver) = platform_with_capacity(4);
        assert!(platform.window().is_none(), "Window should be created lazily");
        assert!(platform.pixels.is_none());
        assert!(platform.error.is_none());
    }

    #[test]
    fn forward_key_queues_event() {
        let (platform, mut receiver) = platform_with_capacity(4);

        platform.forward_key(KeyEvent::KeyDown(KeyCode::ArrowUp));
        platform.forward_key(KeyEvent::KeyDown(KeyCode::ArrowUp));

        assert_eq!(
            drain(&mut receiver),
            vec![
                KeyEvent::KeyDown(KeyCode::ArrowUp),
                KeyEvent::KeyDown(KeyCode::ArrowUp)
            ]
        );
    }

    #[test]
    fn forward_key_drops_when_full() {
        let (platform, mut receiver) = platform_with_capacity(1);

        platform.forward_key(KeyEvent::KeyDown(KeyCode::ArrowLeft));
        platform.forward_key(KeyEvent::KeyUp(KeyCode::ArrowLeft)); // dropped, must not block

        assert_eq!(drain(&mut receiver), vec![KeyEvent::KeyDown(KeyCode::ArrowLeft)]);
    }

    #[test]
    fn forward_key_handles_disconnected_channel() {
        let (platform, receiver) = platform_with_capacity(4);
        drop(receiver);

        // Should not panic, just log warning
        platform.forward_key(KeyEvent::KeyDown(KeyCode::ArrowRight));
    }

    #[test]
    fn redraw_without_surface_is_noop() {
        let (mut platform, _receiver) = platform_with_capacity(4);

        assert!(platform.redraw().is_ok());
        assert_eq!(platform.driver.frames(), 0);
    }

    //=====================================================================
    // Surface Sizing Tests
    //=====================================================================

    #[test]
    fn minimized_window_is_not_presentable() {
        assert_eq!(presentable_size(PhysicalSize::new(0, 0)), None);
        assert_eq!(presentable_size(PhysicalSize::new(0, 600)), None);
        assert_eq!(presentable_size(PhysicalSize::new(800, 0)), None);
    }

    #[test]
    fn non_empty_window_is_presentable() {
        assert_eq!(presentable_size(PhysicalSize::new(800, 800)), Some((800, 800)));
        assert_eq!(presentable_size(PhysicalSize::new(1, 1)), Some((1, 1)));
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn platform_error_display_format() {
        // Hard to construct real winit/pixels errors without a window;
        // this validates the trait bounds exist.
        fn assert_display<T: std::fmt::Display>() {}
        assert_display::<PlatformError>();
    }
}
