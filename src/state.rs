//! Per-frame render state and the keyboard step function that mutates it.
//!
//! The step function is pure: it never touches the GL context, so the whole
//! input state machine is testable without a window. Applying the resulting
//! fill mode is the renderer's job.

use crate::input::{Input, KeyCode};

/// Offset change per frame while a movement key is held. Continuous and
/// frame-rate dependent, like the lecture demos it reproduces.
pub const MOVE_SPEED: f32 = 0.001;

/// How primitives are rasterized. Exactly one mode is active each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillMode {
    #[default]
    Fill,
    Line,
    Point,
}

/// The mutable record the frame loop carries: a 2D offset for shapes that
/// track movement, and the polygon fill mode. Updated once per frame by
/// [`step`], read by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderState {
    pub offset: [f32; 2],
    pub fill_mode: FillMode,
}

/// Held-state snapshot of the keys the demos react to, taken once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keys {
    pub escape: bool,
    pub enter: bool,
    pub space: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Keys {
    pub fn poll(input: &Input) -> Self {
        Self {
            escape: input.key_held(KeyCode::Escape),
            enter: input.key_held(KeyCode::Enter),
            space: input.key_held(KeyCode::Space),
            left: input.key_held(KeyCode::ArrowLeft),
            right: input.key_held(KeyCode::ArrowRight),
            up: input.key_held(KeyCode::ArrowUp),
            down: input.key_held(KeyCode::ArrowDown),
        }
    }
}

/// Which key groups a scene responds to. Escape always terminates the loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct Controls {
    pub movement: bool,
    pub fill_modes: bool,
}

impl Controls {
    pub const ALL: Self = Self {
        movement: true,
        fill_modes: true,
    };
    pub const NONE: Self = Self {
        movement: false,
        fill_modes: false,
    };
}

/// Result of one input-mapping step. `exit` is a loop-termination signal,
/// deliberately kept out of [`RenderState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub state: RenderState,
    pub exit: bool,
}

/// Advances the render state by one frame of held-key input.
///
/// Fill mode is recomputed from scratch every frame, Enter taking priority
/// over Space and falling back to [`FillMode::Fill`]. Movement keys nudge
/// the offset by [`MOVE_SPEED`] for every frame they stay held; this is not
/// edge-triggered.
pub fn step(state: RenderState, keys: Keys, controls: Controls) -> Step {
    let mut next = state;

    if controls.fill_modes {
        next.fill_mode = if keys.enter {
            FillMode::Line
        } else if keys.space {
            FillMode::Point
        } else {
            FillMode::Fill
        };
    }

    if controls.movement {
        if keys.left {
            next.offset[0] -= MOVE_SPEED;
        }
        if keys.right {
            next.offset[0] += MOVE_SPEED;
        }
        if keys.up {
            next.offset[1] += MOVE_SPEED;
        }
        if keys.down {
            next.offset[1] -= MOVE_SPEED;
        }
    }

    Step {
        state: next,
        exit: keys.escape,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frames(mut state: RenderState, keys: Keys, frames: u32) -> RenderState {
        for _ in 0..frames {
            let outcome = step(state, keys, Controls::ALL);
            assert!(!outcome.exit);
            state = outcome.state;
        }
        state
    }

    #[test]
    fn fill_mode_priority() {
        // enter beats space, space beats default; re-evaluated every frame
        let state = RenderState::default();

        let both = Keys {
            enter: true,
            space: true,
            ..Default::default()
        };
        assert_eq!(step(state, both, Controls::ALL).state.fill_mode, FillMode::Line);

        let space_only = Keys {
            space: true,
            ..Default::default()
        };
        assert_eq!(
            step(state, space_only, Controls::ALL).state.fill_mode,
            FillMode::Point
        );

        // releasing both falls back to fill even if a previous frame set line
        let line_state = step(state, both, Controls::ALL).state;
        assert_eq!(
            step(line_state, Keys::default(), Controls::ALL).state.fill_mode,
            FillMode::Fill
        );
    }

    #[test]
    fn held_movement_is_linear_in_frames() {
        // N frames of a held key change the offset by exactly N * MOVE_SPEED
        let keys = Keys {
            left: true,
            ..Default::default()
        };
        let state = run_frames(RenderState::default(), keys, 25);
        assert!((state.offset[0] + 25.0 * MOVE_SPEED).abs() < 1e-6);
        assert_eq!(state.offset[1], 0.0);
    }

    #[test]
    fn right_held_for_100_frames() {
        // scenario from the demos: 100 frames of Right lands near x = 0.1
        let keys = Keys {
            right: true,
            ..Default::default()
        };
        let state = run_frames(RenderState::default(), keys, 100);
        assert!((state.offset[0] - 0.1).abs() < 1e-5);
        assert_eq!(state.fill_mode, FillMode::Fill);
    }

    #[test]
    fn opposing_keys_cancel() {
        let keys = Keys {
            up: true,
            down: true,
            ..Default::default()
        };
        let state = run_frames(RenderState::default(), keys, 10);
        assert_eq!(state.offset, [0.0, 0.0]);
    }

    #[test]
    fn escape_raises_exit_signal() {
        let keys = Keys {
            escape: true,
            ..Default::default()
        };
        let outcome = step(RenderState::default(), keys, Controls::ALL);
        assert!(outcome.exit);
        // state itself is untouched by escape
        assert_eq!(outcome.state, RenderState::default());
    }

    #[test]
    fn disabled_controls_ignore_everything_but_escape() {
        // the static demo honors escape but not movement or fill-mode keys
        let keys = Keys {
            escape: true,
            enter: true,
            left: true,
            up: true,
            ..Default::default()
        };
        let outcome = step(RenderState::default(), keys, Controls::NONE);
        assert!(outcome.exit);
        assert_eq!(outcome.state, RenderState::default());
    }
}
