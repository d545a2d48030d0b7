//! Circle Chase entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use circle_chase::Settings;
    use circle_chase::platform::{CancellationToken, run_animation_frames};
    use circle_chase::renderer::{RenderInitError, RenderState, scene};
    use circle_chase::sim::{GameState, WorldConfig};

    /// Everything the event handlers and the frame callback share
    struct App {
        state: GameState,
        settings: Settings,
        render_state: Option<RenderState>,
    }

    impl App {
        /// Draw the current state, then advance it
        fn frame(&mut self) {
            self.render();
            self.state.update();
        }

        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = scene::build(&self.state, &self.settings);
            match render_state.render(&vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = render_state.size;
                    render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    /// Mouse position in surface pixels, undoing any CSS scaling of the canvas
    fn event_position(event: &MouseEvent, canvas: &HtmlCanvasElement, world: Vec2) -> Vec2 {
        let client = Vec2::new(
            canvas.client_width().max(1) as f32,
            canvas.client_height().max(1) as f32,
        );
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32) * world / client
    }

    async fn init_renderer(
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
        world: Vec2,
    ) -> Result<RenderState, RenderInitError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height, world).await
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Circle Chase starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas1")
            .ok_or("no #canvas1 element")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("#canvas1 is not a canvas"))?;

        let mut settings = Settings::load();
        let query = window.location().search()?;
        if !query.is_empty() {
            settings.apply_query(&query);
            settings.save();
        }

        let config = WorldConfig::default();
        let world = config.size();

        // Backing store at device resolution, scene laid out in world pixels
        let dpr = window.device_pixel_ratio();
        let width = (world.x as f64 * dpr) as u32;
        let height = (world.y as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let mut state = GameState::new(config, settings.variant, seed);
        state.init();
        log::info!(
            "World initialized: variant {}, seed {}",
            settings.variant.as_str(),
            seed
        );

        let render_state = match init_renderer(&canvas, width, height, world).await {
            Ok(render_state) => Some(render_state),
            Err(e) => {
                log::error!("Renderer unavailable: {}", e);
                None
            }
        };

        let app = Rc::new(RefCell::new(App {
            state,
            settings,
            render_state,
        }));

        let token = CancellationToken::new();
        setup_input_handlers(&canvas, app.clone(), world);
        setup_teardown(token.clone());

        run_animation_frames(token, move |_time| app.borrow_mut().frame());

        log::info!("Circle Chase running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>, world: Vec2) {
        // Mouse down - start steering
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = event_position(&event, &canvas_clone, world);
                app.borrow_mut().state.pointer.press(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - set final target
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = event_position(&event, &canvas_clone, world);
                app.borrow_mut().state.pointer.release(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - only tracked while pressed
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = event_position(&event, &canvas_clone, world);
                app.borrow_mut().state.pointer.move_to(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Stop the frame loop when the page goes away
    fn setup_teardown(token: CancellationToken) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            log::info!("Page hidden, stopping frame loop");
            token.cancel();
        });
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames simulated by the headless native run (4 seconds at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAMES: u64 = 240;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use circle_chase::platform::{CancellationToken, FrameLoop};
    use circle_chase::renderer::scene;
    use circle_chase::{GameState, Settings, WorldConfig};
    use glam::Vec2;

    env_logger::init();
    log::info!("Circle Chase (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the web version");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or(1);
    let mut state = GameState::new(WorldConfig::default(), settings.variant, seed);
    let placed = state.init();

    // Steer toward the top-left corner, then let go
    state.pointer.press(Vec2::new(100.0, 150.0));
    state.pointer.release(Vec2::new(100.0, 150.0));

    let token = CancellationToken::new();
    let mut frame_loop = FrameLoop::new(token.clone());
    let mut vertex_count = 0;
    let frames = frame_loop.run(|frame| {
        vertex_count = scene::build(&state, &settings).len();
        state.update();
        if frame + 1 >= HEADLESS_FRAMES {
            token.cancel();
        }
    });

    log::info!(
        "Ran {} frames with {} obstacles: player at ({:.1}, {:.1}), {} vertices in last frame",
        frames,
        placed,
        state.player.center().x,
        state.player.center().y,
        vertex_count
    );
}
