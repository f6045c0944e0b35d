//! Bouncing Ball entry point
//!
//! Wires the playground to a browser canvas: click (or tap) to drop a ball,
//! a 50 ms interval redraws the scene until every ball has settled. The
//! native build runs a headless settle demo instead.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

    use bouncing_ball::Settings;
    use bouncing_ball::sim::Scene;
    use bouncing_ball::surface::{DrawColor, DrawSurface};

    /// Drawing surface backed by a Canvas2D context
    pub struct CanvasSurface {
        canvas: HtmlCanvasElement,
        context: CanvasRenderingContext2d,
    }

    impl CanvasSurface {
        fn new(canvas: HtmlCanvasElement, context: CanvasRenderingContext2d) -> Self {
            Self { canvas, context }
        }
    }

    impl DrawSurface for CanvasSurface {
        fn width(&self) -> f32 {
            self.canvas.width() as f32
        }

        fn height(&self) -> f32 {
            self.canvas.height() as f32
        }

        fn clear(&mut self) {
            self.context
                .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
        }

        fn begin_path(&mut self) {
            self.context.begin_path();
        }

        fn arc(&mut self, center: Vec2, radius: f32) {
            let _ = self.context.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
        }

        fn stroke(&mut self) {
            self.context.stroke();
        }

        fn set_fill_color(&mut self, color: DrawColor) {
            self.context.set_fill_style_str(color.as_css());
        }

        fn fill(&mut self) {
            self.context.fill();
        }
    }

    /// Playground instance: the scene, its surface, and the loop handle
    struct Playground {
        scene: Scene,
        surface: CanvasSurface,
        settings: Settings,
        rng: Pcg32,
        /// `setInterval` handle while the redraw loop runs
        redraw_interval: Option<i32>,
    }

    impl Playground {
        fn new(surface: CanvasSurface, settings: Settings, seed: u64) -> Self {
            Self {
                scene: Scene::new(),
                surface,
                settings,
                rng: Pcg32::seed_from_u64(seed),
                redraw_interval: None,
            }
        }

        /// Drop a new ball at a surface-relative point
        fn spawn_at(&mut self, point: Vec2) {
            let color = if self.settings.random_colors {
                DrawColor::sample(&mut self.rng)
            } else {
                self.settings.ball_color
            };
            let bounds = self.surface.bounds();
            self.scene
                .spawn(point, self.settings.ball_radius, color, bounds);
            log::info!(
                "Spawned ball {} at ({:.0}, {:.0})",
                self.scene.len(),
                point.x,
                point.y
            );
        }

        /// Render one frame; returns whether the loop should keep running
        fn redraw(&mut self) -> bool {
            self.scene.redraw(&mut self.surface)
        }

        /// Cancel the interval timer, if one is live
        fn stop_redraw_loop(&mut self) {
            if let Some(id) = self.redraw_interval.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
                log::info!("Scene settled, redraw loop stopped");
            }
        }
    }

    /// Start the redraw interval unless it is already running
    fn ensure_redraw_loop(playground: &Rc<RefCell<Playground>>) {
        if playground.borrow().redraw_interval.is_some() {
            return;
        }

        let interval_ms = playground.borrow().settings.redraw_interval_ms as i32;
        let tick_target = playground.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut p = tick_target.borrow_mut();
            let keep_running = p.redraw();
            if !keep_running {
                p.stop_redraw_loop();
            }
        });

        let window = web_sys::window().expect("no window");
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval_ms,
            )
            .expect("failed to start redraw interval");
        playground.borrow_mut().redraw_interval = Some(id);
        closure.forget();
        log::info!("Redraw loop started ({interval_ms} ms)");
    }

    /// Translate a client-space position into surface coordinates
    fn surface_point(canvas: &HtmlCanvasElement, client_x: f32, client_y: f32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(client_x - rect.left() as f32, client_y - rect.top() as f32)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, playground: Rc<RefCell<Playground>>) {
        // Click to spawn
        {
            let playground = playground.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = surface_point(
                    &canvas_clone,
                    event.client_x() as f32,
                    event.client_y() as f32,
                );
                playground.borrow_mut().spawn_at(point);
                ensure_redraw_loop(&playground);
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tap to spawn
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let point = surface_point(
                        &canvas_clone,
                        touch.client_x() as f32,
                        touch.client_y() as f32,
                    );
                    playground.borrow_mut().spawn_at(point);
                    ensure_redraw_loop(&playground);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bouncing Ball starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Match the backing store to the displayed size so click coordinates
        // map 1:1 onto surface units
        canvas.set_width(canvas.client_width() as u32);
        canvas.set_height(canvas.client_height() as u32);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("2d context unavailable")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let surface = CanvasSurface::new(canvas.clone(), context);
        let playground = Rc::new(RefCell::new(Playground::new(surface, settings, seed)));

        setup_input_handlers(&canvas, playground);

        log::info!("Playground ready - click the canvas to drop a ball");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bouncing_ball::consts::DEFAULT_BALL_RADIUS;
    use bouncing_ball::sim::Scene;
    use bouncing_ball::surface::DrawSurface;
    use bouncing_ball::{DrawColor, NullSurface};
    use glam::Vec2;

    env_logger::init();
    log::info!("Bouncing Ball (native) starting...");
    log::info!("No window on native - running a headless settle demo");

    let mut surface = NullSurface::new(300.0, 300.0);
    let mut scene = Scene::new();
    scene.spawn(
        Vec2::new(50.0, 50.0),
        DEFAULT_BALL_RADIUS,
        DrawColor::Black,
        surface.bounds(),
    );

    let mut frames = 0u32;
    while scene.redraw(&mut surface) {
        frames += 1;
        if frames > 10_000 {
            log::error!("Ball failed to settle within 10000 frames");
            return;
        }
    }

    log::info!("Ball settled after {frames} frames");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
