//! Bouncing ball kinematics
//!
//! One ball = one little state machine. Each tick it takes a fixed
//! horizontal step, feeds a signed energy accumulator (fast gain while
//! falling, slower drain while decelerating), and applies the result
//! vertically. Floor hits flip the phase and soften the rebound; the right
//! wall flips the horizontal direction. Once the rebound energy drops below
//! a radius-scaled threshold the ball latches inactive and freezes where it
//! is.

use glam::Vec2;

use crate::consts::*;
use crate::sim::shape::MovingShape;
use crate::surface::{DrawColor, DrawSurface};

/// A ball that falls, bounces, and eventually settles
#[derive(Debug, Clone)]
pub struct BouncingBall {
    /// Center position, mutated every tick while active
    pub pos: Vec2,
    /// Fixed at spawn
    pub radius: f32,
    /// Fill color, used only when rendering
    pub color: DrawColor,
    /// Surface bounds captured at spawn; the reflective boundary
    pub bounds: Vec2,
    /// Signed vertical energy accumulator
    pub accel: f32,
    /// True while the accumulator is growing (ball gaining downward speed)
    pub falling: bool,
    /// Horizontal direction flag, flipped on wall contact
    pub moving_right: bool,
    /// One-way latch; false once motion is judged negligible
    pub active: bool,
}

impl BouncingBall {
    /// Create a ball at `pos` bouncing inside `bounds`
    ///
    /// Geometry is trusted: the caller is responsible for a positive radius
    /// and finite coordinates inside the surface.
    pub fn new(pos: Vec2, radius: f32, color: DrawColor, bounds: Vec2) -> Self {
        Self {
            pos,
            radius,
            color,
            bounds,
            accel: 0.0,
            falling: true,
            moving_right: true,
            active: true,
        }
    }

    /// Advance one tick: step, update energy, move vertically, clamp
    fn step_position(&mut self) {
        if self.moving_right {
            self.pos.x += MOVE_STEP;
        } else {
            self.pos.x -= MOVE_STEP;
        }

        if self.falling {
            self.accel += ACCELERATION_INTERVAL;
        } else {
            self.accel -= DECELERATION_INTERVAL;
        }

        // The decelerating branch subtracts (MOVE_STEP + accel) even after
        // the accumulator has gone negative, so the ball can dip again just
        // before the peak. Do not simplify into a monotonic rise.
        if self.falling {
            self.pos.y += MOVE_STEP + self.accel;
        } else {
            self.pos.y -= MOVE_STEP + self.accel;
        }

        if self.pos.y + self.radius > self.bounds.y {
            self.pos.y = self.bounds.y - self.radius;
        }
        if self.pos.x + self.radius > self.bounds.x {
            self.pos.x = self.bounds.x - self.radius;
        }
    }

    /// Floor contact: flip phase, soften the rebound, maybe settle
    fn floor_hit(&mut self) {
        self.falling = !self.falling;

        if self.accel < 0.0 {
            self.accel /= ACCELERATION_BOOST;
        }

        if self.accel.abs() < (self.radius / 2.0).floor() {
            self.active = false;
        }
    }

    /// Wall contact: reverse horizontal travel
    fn wall_hit(&mut self) {
        self.moving_right = !self.moving_right;
    }
}

impl MovingShape for BouncingBall {
    fn draw(&mut self, surface: &mut dyn DrawSurface) {
        // Always render at the current position first, so the very first
        // frame shows the ball exactly where it spawned.
        surface.begin_path();
        surface.arc(self.pos, self.radius);
        surface.stroke();
        surface.set_fill_color(self.color);
        surface.fill();

        if self.active {
            self.step_position();
            if self.bounds.y <= self.pos.y + self.radius {
                self.floor_hit();
            }
            if self.bounds.x <= self.pos.x + self.radius {
                self.wall_hit();
            }
        }
    }

    fn needs_redraw(&self) -> bool {
        self.active
    }
}
