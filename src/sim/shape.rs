//! Shape capability the scene depends on

use crate::surface::DrawSurface;

/// Anything the scene can animate
///
/// The scene only ever talks to this trait, so new shape kinds slot in
/// without scheduler changes. `draw` renders the shape at its current
/// position and then advances its state by one tick; `needs_redraw` reports
/// whether the shape is still in motion.
pub trait MovingShape {
    /// Render at the current position, then advance one tick if still moving
    fn draw(&mut self, surface: &mut dyn DrawSurface);

    /// Whether this shape wants further frames
    fn needs_redraw(&self) -> bool;
}
