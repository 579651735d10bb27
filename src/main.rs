//! Lane Runner entry point
//!
//! On the web this wires the canvas, DOM HUD and keyboard into a
//! `requestAnimationFrame` loop. Natively it runs a headless session on a
//! simulated clock with the autopilot at the wheel.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use lane_runner::hud::DomHud;
    use lane_runner::renderer::MeshRenderer;
    use lane_runner::scene::StandardFactory;
    use lane_runner::sim::{Game, InputEvent};
    use lane_runner::{FrameOutcome, LoopDriver, Settings, Tuning};

    type Driver = LoopDriver<StandardFactory, DomHud, MeshRenderer>;

    fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    /// Tuning overrides embedded as `<script type="application/json" id="tuning">`
    fn load_tuning(document: &web_sys::Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            log::info!("Using default tuning");
            return Tuning::default();
        };

        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from page");
                tuning
            }
            Err(e) => {
                log::warn!("Rejected page tuning ({}), using defaults", e);
                Tuning::default()
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Lane Runner starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::from_query(&window.location().search().unwrap_or_default());
        let tuning = load_tuning(&document);
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| e.to_string())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| e.to_string())?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let renderer = MeshRenderer::new(
            surface,
            &adapter,
            width,
            height,
            tuning.road_length,
            tuning.lane_width,
        )
        .await
        .map_err(|e| e.to_string())?;

        let game = Game::new(
            StandardFactory,
            DomHud::new(document.clone()),
            tuning,
            settings.easing,
            seed,
        );
        let mut driver = LoopDriver::new(game, renderer, settings);
        driver.resize(width, height);
        driver.start(now());

        let driver = Rc::new(RefCell::new(driver));

        setup_keyboard(driver.clone());
        setup_restart_button(driver.clone());
        setup_resize(canvas, driver.clone());

        request_animation_frame(driver);
        Ok(())
    }

    /// Route an input to the driver and revive the loop if it had stopped
    fn dispatch(driver: &Rc<RefCell<Driver>>, event: InputEvent) {
        let wake = driver.borrow_mut().handle_input(event, now());
        if wake {
            request_animation_frame(driver.clone());
        }
    }

    fn setup_keyboard(driver: Rc<RefCell<Driver>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if let Some(input) = InputEvent::from_key(&event.key()) {
                if matches!(input, InputEvent::Steer(_)) {
                    event.prevent_default();
                }
                dispatch(&driver, input);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(driver: Rc<RefCell<Driver>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(btn) = document.get_element_by_id("restart-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                dispatch(&driver, InputEvent::Restart);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: HtmlCanvasElement, driver: Rc<RefCell<Driver>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::UiEvent| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let dpr = window.device_pixel_ratio();
            let width = (canvas.client_width() as f64 * dpr) as u32;
            let height = (canvas.client_height() as f64 * dpr) as u32;
            if width == 0 || height == 0 {
                return;
            }
            canvas.set_width(width);
            canvas.set_height(height);
            driver.borrow_mut().resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(driver: Rc<RefCell<Driver>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(driver, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(driver: Rc<RefCell<Driver>>, time: f64) {
        let outcome = driver.borrow_mut().frame(time);
        if outcome == FrameOutcome::Continue {
            request_animation_frame(driver);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lane Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot session - use `trunk serve` to play");

    let tuning = match std::env::args().nth(1) {
        Some(path) => load_tuning(&path),
        None => lane_runner::Tuning::default(),
    };
    headless::run(tuning);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> lane_runner::Tuning {
    let loaded = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| lane_runner::Tuning::from_json(&json).map_err(|e| e.to_string()));

    match loaded {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Rejected tuning file {} ({}), using defaults", path, e);
            lane_runner::Tuning::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use lane_runner::hud::LogHud;
    use lane_runner::renderer::Headless;
    use lane_runner::scene::StandardFactory;
    use lane_runner::sim::Game;
    use lane_runner::{FrameOutcome, LoopDriver, Settings, Tuning};

    /// Simulated display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Session length cap (ten minutes of game time)
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    pub fn run(tuning: Tuning) {
        let settings = Settings::default();
        let seed = settings.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        let game = Game::new(StandardFactory, LogHud::default(), tuning, settings.easing, seed);
        let mut driver = LoopDriver::new(game, Headless::default(), settings);
        driver.set_autopilot(true);
        driver.resize(1280, 720);

        let mut now = 0.0;
        driver.start(now);
        while driver.backend.frames < MAX_FRAMES {
            now += FRAME_MS;
            if driver.frame(now) == FrameOutcome::Stopped {
                break;
            }
        }

        let state = &driver.game.state;
        log::info!(
            "Session finished after {:.1}s: score {}, {} enemies passed, speed {}{}",
            now / 1000.0,
            state.display_score(),
            state.passed,
            state.display_speed(),
            if state.is_game_over() { "" } else { " (time limit)" }
        );
    }
}
