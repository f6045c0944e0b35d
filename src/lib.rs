//! Bouncing Ball - a click-to-spawn canvas physics toy
//!
//! Core modules:
//! - `sim`: Ball kinematics and the per-tick scene redraw pass
//! - `surface`: Drawing-surface abstraction (Canvas2D on wasm, headless elsewhere)
//! - `settings`: User preferences (radius, tick period, colors)

pub mod settings;
pub mod sim;
pub mod surface;

pub use settings::Settings;
pub use surface::{DrawColor, DrawSurface, NullSurface};

/// Motion constants
pub mod consts {
    /// Horizontal and base vertical distance covered per tick
    pub const MOVE_STEP: f32 = 5.0;
    /// Added to the vertical energy accumulator each falling tick
    pub const ACCELERATION_INTERVAL: f32 = 2.0;
    /// Subtracted from the accumulator each decelerating tick
    pub const DECELERATION_INTERVAL: f32 = 3.0;
    /// Divisor applied to negative energy on a floor hit; shortens each
    /// successive bounce
    pub const ACCELERATION_BOOST: f32 = 1.4;

    /// Ball radius used for spawned balls unless configured otherwise
    pub const DEFAULT_BALL_RADIUS: f32 = 5.0;
    /// Redraw loop period in milliseconds
    pub const REDRAW_INTERVAL_MS: u32 = 50;
}
