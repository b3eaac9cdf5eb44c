//=========================================================================
// Motion Model
//
// The single controllable block: its constants, mutable state, and the
// per-frame physics step.
//
// Update Pipeline (order is significant):
// ```text
//  acceleration = 0
//        ↓  + force per held direction  (force = elapsed_ms * accel / 1000)
//  velocity += acceleration
//        ↓  - velocity * damping
//  velocity = clamp(±max_velocity)
//        ↓
//  position += velocity
//        ↓
//  position = clamp(half extent .. canvas - half extent)
// ```
//
// Velocity and position integration are per-frame, not per-second, so top
// speed and damping strength depend on the frame rate.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{ActionSink, MotionAction};
use crate::core::math::{clamp, clamp_vec2, Vec2};

//=== MotionConfig ========================================================

/// Fixed tuning constants for the block and its playfield.
///
/// # Default Values
///
/// - **Canvas**: 800 × 800
/// - **Entity**: 30 × 30
/// - **Max velocity**: 100 units/frame per axis
/// - **Damping**: 0.1 (10% of velocity removed per frame)
/// - **Acceleration force**: 30 units per second of held input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub entity_width: f64,
    pub entity_height: f64,
    pub max_velocity: f64,
    pub damping: f64,
    pub acceleration_force: f64,
}

impl MotionConfig {
    pub const DEFAULT: MotionConfig = MotionConfig {
        canvas_width: 800.0,
        canvas_height: 800.0,
        entity_width: 30.0,
        entity_height: 30.0,
        max_velocity: 100.0,
        damping: 0.1,
        acceleration_force: 30.0,
    };

    /// Center of the canvas.
    pub fn canvas_center(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// Smallest position that keeps the block fully on-canvas.
    pub fn min_position(&self) -> Vec2 {
        Vec2::new(self.entity_width / 2.0, self.entity_height / 2.0)
    }

    /// Largest position that keeps the block fully on-canvas.
    pub fn max_position(&self) -> Vec2 {
        Vec2::new(
            self.canvas_width - self.entity_width / 2.0,
            self.canvas_height - self.entity_height / 2.0,
        )
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

//=== InputFlags ==========================================================

/// Which directional actions are currently held.
///
/// Flags are independent; opposing flags may both be set and cancel out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputFlags {
    pub fn is_active(&self, action: MotionAction) -> bool {
        match action {
            MotionAction::Up => self.up,
            MotionAction::Down => self.down,
            MotionAction::Left => self.left,
            MotionAction::Right => self.right,
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

impl ActionSink<MotionAction> for InputFlags {
    fn set_active(&mut self, action: MotionAction, active: bool) {
        let flag = match action {
            MotionAction::Up => &mut self.up,
            MotionAction::Down => &mut self.down,
            MotionAction::Left => &mut self.left,
            MotionAction::Right => &mut self.right,
        };
        *flag = active;
    }
}

//=== MotionState =========================================================

/// Complete mutable state of the block.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub input: InputFlags,
    config: MotionConfig,
}

impl MotionState {
    /// Creates a block at rest in the center of the canvas.
    pub fn new(config: MotionConfig) -> Self {
        Self {
            position: config.canvas_center(),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            input: InputFlags::default(),
            config,
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Advances the block by one frame.
    ///
    /// `elapsed_ms` only scales the input force; see the module notes.
    pub fn update(&mut self, elapsed_ms: f64) {
        let cfg = self.config;

        //--- 1. Reset acceleration ----------------------------------------
        self.acceleration = Vec2::ZERO;

        //--- 2. Accumulate input force ------------------------------------
        let force = elapsed_ms * cfg.acceleration_force / 1000.0;
        if self.input.up {
            self.acceleration.y += force;
        }
        if self.input.down {
            self.acceleration.y -= force;
        }
        if self.input.left {
            self.acceleration.x -= force;
        }
        if self.input.right {
            self.acceleration.x += force;
        }

        //--- 3. Integrate acceleration ------------------------------------
        self.velocity += self.acceleration;

        //--- 4. Damping ---------------------------------------------------
        self.velocity += -self.velocity * cfg.damping;

        //--- 5. Velocity limit --------------------------------------------
        self.velocity.x = clamp(-cfg.max_velocity, cfg.max_velocity, self.velocity.x);
        self.velocity.y = clamp(-cfg.max_velocity, cfg.max_velocity, self.velocity.y);

        //--- 6. Integrate velocity ----------------------------------------
        self.position += self.velocity;

        //--- 7. Keep on canvas --------------------------------------------
        self.position = clamp_vec2(cfg.min_position(), cfg.max_position(), self.position);
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new(MotionConfig::DEFAULT)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
