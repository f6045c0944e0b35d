//! Simulation module
//!
//! All motion logic lives here. This module must stay platform-free:
//! - Fixed tick only (one call = one frame)
//! - No DOM or timer dependencies; drawing goes through `DrawSurface`
//! - Shape order is insertion order, so rendering is stable

pub mod ball;
pub mod scene;
pub mod shape;

pub use ball::BouncingBall;
pub use scene::Scene;
pub use shape::MovingShape;
