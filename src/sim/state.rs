//! Game state and core simulation types
//!
//! Everything the tick mutates lives here, owned by [`GameState`] and passed
//! by reference to update and render. The viewport is written only by resize
//! handling and is read-only to the tick.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Logical (device-independent) viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A vertical platform, tracked by its top edge
///
/// Horizontal placement is fixed (see [`crate::consts`]); only `y` moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub y: f32,
}

impl Platform {
    /// Place the platform so `height` is vertically centered in the viewport
    pub fn centered(view: &Viewport, height: f32) -> Self {
        Self {
            y: view.height / 2.0 - height / 2.0,
        }
    }

    /// Clamp the top edge so the platform stays fully inside `[0, view_height]`
    ///
    /// min-then-max, so a viewport shorter than the platform degrades to
    /// `y = PLATFORM_MIN_Y` instead of panicking on an inverted range.
    pub fn clamp_to(&mut self, view_height: f32, height: f32) {
        self.y = self.y.min(view_height - height).max(PLATFORM_MIN_Y);
    }

    /// Vertical center of the platform face
    #[inline]
    pub fn center_y(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn at the viewport center with zero velocity
    pub fn centered(view: &Viewport) -> Self {
        Self {
            pos: view.center(),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }

    /// Set velocity from a launch angle off the horizontal axis
    ///
    /// `cos` of a shallow angle is positive, so the ball always heads
    /// rightward with a small vertical component.
    pub fn launch(&mut self, speed: f32, angle: f32) {
        self.vel = Vec2::new(speed * angle.cos(), speed * angle.sin());
    }
}

/// Complete mutable physics state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub viewport: Viewport,
    pub tuning: Tuning,
    pub left: Platform,
    pub right: Platform,
    pub ball: Ball,
}

impl GameState {
    /// Build the initial state from the first observed viewport
    ///
    /// Both platforms and the ball are positioned here, once. The launch
    /// angle is drawn from a seeded RNG, uniform over
    /// `[-LAUNCH_ANGLE_SPREAD, LAUNCH_ANGLE_SPREAD]`.
    pub fn new(view: Viewport, tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let angle = rng.random_range(-LAUNCH_ANGLE_SPREAD..=LAUNCH_ANGLE_SPREAD);

        let mut ball = Ball::centered(&view);
        ball.launch(tuning.ball_speed, angle);

        Self {
            viewport: view,
            tuning,
            left: Platform::centered(&view, tuning.platform_height),
            right: Platform::centered(&view, tuning.platform_height),
            ball,
        }
    }

    /// Adopt a new viewport size and pull both platforms back on screen
    pub fn resize(&mut self, view: Viewport) {
        self.viewport = view;
        let h = self.tuning.platform_height;
        self.left.clamp_to(view.height, h);
        self.right.clamp_to(view.height, h);
    }
}
