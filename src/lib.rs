//! Classic Pong - a two-player canvas arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (platform/ball integration, collisions)
//! - `input`: Level-triggered keyboard control state
//! - `renderer`: Canvas 2D rendering (wasm only)
//! - `tuning`: Data-driven game balance

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use input::Controls;
pub use tuning::Tuning;

/// Fixed game geometry (logical units)
pub mod consts {
    /// Left edge of the left platform
    pub const LEFT_PLATFORM_X: f32 = 100.0;
    /// Distance of the right platform's left edge from the right viewport edge
    pub const RIGHT_PLATFORM_INSET: f32 = 110.0;
    /// Platform width
    pub const PLATFORM_WIDTH: f32 = 10.0;
    /// Corner radius of the platform rounded rect
    pub const PLATFORM_CORNER_RADIUS: f64 = 6.0;

    /// Ball radius
    pub const BALL_RADIUS: f32 = 10.0;
    /// Launch angle is drawn uniformly from [-SPREAD, SPREAD] off horizontal
    pub const LAUNCH_ANGLE_SPREAD: f32 = std::f32::consts::PI / 8.0;

    /// Platforms never move above this top-edge position
    pub const PLATFORM_MIN_Y: f32 = 1.0;

    /// Collision line of the left paddle: the ball's left edge crossing
    /// `LEFT_PLATFORM_X + PLATFORM_WIDTH` counts as contact
    pub const LEFT_PADDLE_REACH: f32 = LEFT_PLATFORM_X + PLATFORM_WIDTH;
    /// Mirror line for the right paddle, measured from the right viewport edge
    pub const RIGHT_PADDLE_REACH: f32 = RIGHT_PLATFORM_INSET;
}
