//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per display frame, no wall-clock reads
//! - Seeded RNG only (launch angle)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{PaddleSide, deflection_offset, paddle_contact};
pub use state::{Ball, GameState, Platform, Viewport};
pub use tick::tick;
