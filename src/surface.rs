//! Drawing-surface abstraction
//!
//! The simulation renders through this seam so it never touches the DOM:
//! - `DrawSurface`: the Canvas2D-shaped primitive set shapes draw with
//! - `DrawColor`: fill colors, stored per ball at spawn time
//! - `NullSurface`: bounds-only implementation for headless runs
//!
//! The wasm front-end provides the real implementation over
//! `CanvasRenderingContext2d`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fill colors available to shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DrawColor {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Orange,
    Purple,
}

impl DrawColor {
    /// Colors the palette picker may hand out
    pub const PALETTE: [DrawColor; 6] = [
        DrawColor::Black,
        DrawColor::Red,
        DrawColor::Green,
        DrawColor::Blue,
        DrawColor::Orange,
        DrawColor::Purple,
    ];

    /// CSS color keyword for canvas fill styles
    pub fn as_css(&self) -> &'static str {
        match self {
            DrawColor::Black => "black",
            DrawColor::Red => "red",
            DrawColor::Green => "green",
            DrawColor::Blue => "blue",
            DrawColor::Orange => "orange",
            DrawColor::Purple => "purple",
        }
    }

    /// Pick a palette color with the given RNG
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::PALETTE[rng.random_range(0..Self::PALETTE.len())]
    }
}

/// Primitive drawing operations a shape needs to render itself
///
/// Deliberately mirrors the Canvas2D subset this toy uses: clear the whole
/// surface, trace a circle, stroke it, fill it. Bounds are exposed so newly
/// spawned shapes can size their world against the surface.
pub trait DrawSurface {
    /// Surface width in surface units
    fn width(&self) -> f32;
    /// Surface height in surface units
    fn height(&self) -> f32;
    /// Erase the entire surface
    fn clear(&mut self);
    /// Start a new path
    fn begin_path(&mut self);
    /// Trace a full circle at `center`
    fn arc(&mut self, center: Vec2, radius: f32);
    /// Stroke the current path
    fn stroke(&mut self);
    /// Set the fill style for subsequent fills
    fn set_fill_color(&mut self, color: DrawColor);
    /// Fill the current path
    fn fill(&mut self);

    /// Width/height as a vector
    fn bounds(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }
}

/// A surface with bounds but no output, for headless runs
#[derive(Debug, Clone, Copy)]
pub struct NullSurface {
    size: Vec2,
}

impl NullSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }
}

impl DrawSurface for NullSurface {
    fn width(&self) -> f32 {
        self.size.x
    }

    fn height(&self) -> f32 {
        self.size.y
    }

    fn clear(&mut self) {}
    fn begin_path(&mut self) {}
    fn arc(&mut self, _center: Vec2, _radius: f32) {}
    fn stroke(&mut self) {}
    fn set_fill_color(&mut self, _color: DrawColor) {}
    fn fill(&mut self) {}
}
