//! Data-driven game balance
//!
//! The three knobs that differ between observed builds of the game. Defaults
//! match the full-physics variant.

use serde::{Deserialize, Serialize};

/// Tunable balance values, in logical units per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Platform height
    pub platform_height: f32,
    /// Platform travel per tick while a key is held
    pub platform_speed: f32,
    /// Ball speed: launch velocity magnitude and the scale of the paddle
    /// deflection law
    pub ball_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            platform_height: 170.0,
            platform_speed: 10.0,
            ball_speed: 12.0,
        }
    }
}

impl Tuning {
    /// Check that the values are finite and positive
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("platform_height", self.platform_height),
            ("platform_speed", self.platform_speed),
            ("ball_speed", self.ball_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("tuning: {name} must be finite and positive, got {value}"));
            }
        }
        Ok(())
    }
}
