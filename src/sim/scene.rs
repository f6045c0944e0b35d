//! Scene: the ordered set of live shapes and the per-tick redraw pass
//!
//! The scene owns every shape ever spawned. Insertion order is render
//! order, so later spawns paint on top of earlier ones. Shapes are never
//! removed; settled balls just stop asking for frames and keep getting
//! rendered statically. The list therefore grows for the whole session.

use glam::Vec2;

use crate::sim::ball::BouncingBall;
use crate::sim::shape::MovingShape;
use crate::surface::{DrawColor, DrawSurface};

/// Ordered collection of moving shapes
#[derive(Default)]
pub struct Scene {
    shapes: Vec<Box<dyn MovingShape>>,
}

impl Scene {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a bouncing ball at `point`, bounded by `bounds`
    pub fn spawn(&mut self, point: Vec2, radius: f32, color: DrawColor, bounds: Vec2) {
        self.shapes
            .push(Box::new(BouncingBall::new(point, radius, color, bounds)));
    }

    /// Whether any shape still wants frames
    pub fn needs_redraw(&self) -> bool {
        self.shapes.iter().any(|s| s.needs_redraw())
    }

    /// Render one frame: clear, then draw every shape in spawn order
    ///
    /// Returns the needs-more-frames answer sampled *before* this frame's
    /// updates ran. A caller driving a timer off the return value therefore
    /// stops one frame after the last shape goes inactive, and that final
    /// frame still renders. Callers depend on that exact frame count.
    pub fn redraw(&mut self, surface: &mut dyn DrawSurface) -> bool {
        let keep_running = self.needs_redraw();

        surface.clear();
        for shape in &mut self.shapes {
            shape.draw(surface);
        }

        keep_running
    }

    /// Number of shapes ever spawned (nothing is removed)
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_BALL_RADIUS;

    /// Surface that records every draw call for order assertions
    struct RecordingSurface {
        size: Vec2,
        ops: Vec<Op>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        BeginPath,
        Arc(Vec2, f32),
        Stroke,
        FillColor(DrawColor),
        Fill,
    }

    impl RecordingSurface {
        fn new(width: f32, height: f32) -> Self {
            Self {
                size: Vec2::new(width, height),
                ops: Vec::new(),
            }
        }

        fn arcs(&self) -> Vec<(Vec2, f32)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Arc(center, radius) => Some((*center, *radius)),
                    _ => None,
                })
                .collect()
        }

        fn clears(&self) -> usize {
            self.ops.iter().filter(|op| **op == Op::Clear).count()
        }
    }

    impl DrawSurface for RecordingSurface {
        fn width(&self) -> f32 {
            self.size.x
        }
        fn height(&self) -> f32 {
            self.size.y
        }
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn begin_path(&mut self) {
            self.ops.push(Op::BeginPath);
        }
        fn arc(&mut self, center: Vec2, radius: f32) {
            self.ops.push(Op::Arc(center, radius));
        }
        fn stroke(&mut self) {
            self.ops.push(Op::Stroke);
        }
        fn set_fill_color(&mut self, color: DrawColor) {
            self.ops.push(Op::FillColor(color));
        }
        fn fill(&mut self) {
            self.ops.push(Op::Fill);
        }
    }

    fn spawn_default(scene: &mut Scene, surface: &RecordingSurface, x: f32, y: f32) {
        scene.spawn(
            Vec2::new(x, y),
            DEFAULT_BALL_RADIUS,
            DrawColor::Black,
            surface.bounds(),
        );
    }

    #[test]
    fn test_empty_scene_reports_idle() {
        let mut scene = Scene::new();
        let mut surface = RecordingSurface::new(300.0, 300.0);
        assert!(!scene.redraw(&mut surface));
        // An idle pass still clears
        assert_eq!(surface.clears(), 1);
    }

    #[test]
    fn test_first_frame_draws_at_spawn_point() {
        let mut scene = Scene::new();
        let mut surface = RecordingSurface::new(300.0, 300.0);
        spawn_default(&mut scene, &surface, 50.0, 50.0);

        assert!(scene.redraw(&mut surface));
        let arcs = surface.arcs();
        assert_eq!(arcs, vec![(Vec2::new(50.0, 50.0), DEFAULT_BALL_RADIUS)]);
        assert_eq!(surface.ops[0], Op::Clear);
    }

    #[test]
    fn test_shapes_render_in_spawn_order() {
        let mut scene = Scene::new();
        let mut surface = RecordingSurface::new(300.0, 300.0);
        spawn_default(&mut scene, &surface, 50.0, 50.0);
        spawn_default(&mut scene, &surface, 120.0, 40.0);

        scene.redraw(&mut surface);
        let arcs = surface.arcs();
        assert_eq!(arcs.len(), 2);
        // Second spawn paints after (on top of) the first
        assert_eq!(arcs[0].0, Vec2::new(50.0, 50.0));
        assert_eq!(arcs[1].0, Vec2::new(120.0, 40.0));

        // Every frame re-renders both, even once one settles
        surface.ops.clear();
        scene.redraw(&mut surface);
        assert_eq!(surface.arcs().len(), 2);
    }

    #[test]
    fn test_idle_reported_one_frame_after_settle() {
        let mut scene = Scene::new();
        let mut surface = RecordingSurface::new(120.0, 120.0);
        spawn_default(&mut scene, &surface, 20.0, 20.0);

        // Drive frames until the scene reports idle
        let mut settle_frame = None;
        let mut frame = 0usize;
        loop {
            let keep_running = scene.redraw(&mut surface);
            if settle_frame.is_none() && !scene.needs_redraw() {
                settle_frame = Some(frame);
            }
            if !keep_running {
                break;
            }
            frame += 1;
            assert!(frame < 5000, "scene never went idle");
        }

        // The frame where the ball latched inactive still returned
        // keep-running (the check ran against pre-frame flags), so exactly
        // one more frame rendered after the settle frame.
        let settle_frame = settle_frame.expect("ball never settled");
        assert_eq!(frame, settle_frame + 1);
        // ...and that last frame still cleared and drew the ball
        assert_eq!(surface.clears(), frame + 1);
    }

    #[test]
    fn test_settled_shapes_are_retained() {
        let mut scene = Scene::new();
        let mut surface = RecordingSurface::new(120.0, 120.0);
        spawn_default(&mut scene, &surface, 20.0, 20.0);
        spawn_default(&mut scene, &surface, 40.0, 10.0);

        while scene.redraw(&mut surface) {}
        assert_eq!(scene.len(), 2);
        assert!(!scene.needs_redraw());
    }

    #[test]
    fn test_spawn_revives_idle_scene() {
        let mut scene = Scene::new();
        let mut surface = RecordingSurface::new(120.0, 120.0);
        spawn_default(&mut scene, &surface, 20.0, 20.0);
        while scene.redraw(&mut surface) {}

        spawn_default(&mut scene, &surface, 60.0, 30.0);
        assert!(scene.needs_redraw());
        assert!(scene.redraw(&mut surface));
        assert_eq!(scene.len(), 2);
    }
}
