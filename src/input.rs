//! Level-triggered keyboard control state
//!
//! Four independent held-key flags, one per (platform, direction) pair. Flags
//! are raised on keydown and cleared on keyup, then sampled once per tick; no
//! debouncing or key-repeat handling is needed since the state reflects "is
//! held" rather than "was pressed".

/// Held-key state for both platforms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl Controls {
    /// Apply a key transition by `KeyboardEvent.code`
    ///
    /// Unrecognized codes are ignored. W/S drive the left platform, the
    /// arrow keys the right one.
    pub fn apply(&mut self, code: &str, pressed: bool) {
        match code {
            "KeyW" => self.left_up = pressed,
            "KeyS" => self.left_down = pressed,
            "ArrowUp" => self.right_up = pressed,
            "ArrowDown" => self.right_down = pressed,
            _ => {}
        }
    }

    /// Signed direction for the left platform: -1 up, +1 down, 0 idle.
    /// Up wins when both keys are held.
    pub fn left_dir(&self) -> f32 {
        if self.left_up {
            -1.0
        } else if self.left_down {
            1.0
        } else {
            0.0
        }
    }

    /// Signed direction for the right platform, same priority rule
    pub fn right_dir(&self) -> f32 {
        if self.right_up {
            -1.0
        } else if self.right_down {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_bound_keys() {
        let mut c = Controls::default();
        c.apply("KeyW", true);
        assert!(c.left_up);
        c.apply("KeyW", false);
        assert!(!c.left_up);

        c.apply("KeyS", true);
        c.apply("ArrowUp", true);
        c.apply("ArrowDown", true);
        assert!(c.left_down && c.right_up && c.right_down);
    }

    #[test]
    fn ignores_unbound_keys() {
        let mut c = Controls::default();
        c.apply("Space", true);
        c.apply("KeyA", true);
        c.apply("Escape", true);
        assert_eq!(c, Controls::default());
    }

    #[test]
    fn up_wins_over_down_on_both_platforms() {
        let c = Controls {
            left_up: true,
            left_down: true,
            right_up: true,
            right_down: true,
        };
        assert_eq!(c.left_dir(), -1.0);
        assert_eq!(c.right_dir(), -1.0);
    }

    #[test]
    fn idle_when_nothing_held() {
        let c = Controls::default();
        assert_eq!(c.left_dir(), 0.0);
        assert_eq!(c.right_dir(), 0.0);
    }
}
