//! Per-frame simulation step
//!
//! One tick per display frame: platform integration, explicit Euler ball
//! step, wall reflection, then both paddle checks. No sub-stepping, so the
//! ball can tunnel through a paddle face at extreme speeds; that limitation
//! is part of the contract, as is the tick rate being tied to the display
//! refresh rate.

use crate::input::Controls;
use crate::sim::collision::{self, PaddleSide, apply_paddle_bounce, paddle_contact};
use crate::sim::state::GameState;
use crate::tuning::Tuning;

/// Advance the game state by one frame
///
/// Paddle checks run unconditionally after the wall checks; a ball can
/// satisfy both in the same tick, and the paddle's assignment wins for the
/// components it writes.
pub fn tick(state: &mut GameState, controls: &Controls) {
    let Tuning {
        platform_height,
        platform_speed,
        ball_speed,
    } = state.tuning;

    state.left.y += controls.left_dir() * platform_speed;
    state.right.y += controls.right_dir() * platform_speed;
    state.left.clamp_to(state.viewport.height, platform_height);
    state.right.clamp_to(state.viewport.height, platform_height);

    state.ball.pos += state.ball.vel;

    collision::reflect_walls(&mut state.ball, &state.viewport);

    if paddle_contact(
        &state.ball,
        PaddleSide::Left,
        &state.left,
        platform_height,
        &state.viewport,
    ) {
        apply_paddle_bounce(
            &mut state.ball,
            PaddleSide::Left,
            &state.left,
            platform_height,
            ball_speed,
        );
    }

    if paddle_contact(
        &state.ball,
        PaddleSide::Right,
        &state.right,
        platform_height,
        &state.viewport,
    ) {
        apply_paddle_bounce(
            &mut state.ball,
            PaddleSide::Right,
            &state.right,
            platform_height,
            ball_speed,
        );
    }
}
