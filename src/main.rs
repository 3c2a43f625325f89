//! Classic Pong entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

    use classic_pong::renderer::CanvasRenderer;
    use classic_pong::sim::{GameState, Viewport, tick};
    use classic_pong::{Controls, Tuning};

    /// App instance holding all mutable state
    struct App {
        state: GameState,
        controls: Controls,
        renderer: Option<CanvasRenderer>,
    }

    /// Event closures, retained so teardown removes the exact callbacks that
    /// were registered
    struct Listeners {
        resize: Closure<dyn FnMut()>,
        keydown: Closure<dyn FnMut(KeyboardEvent)>,
        keyup: Closure<dyn FnMut(KeyboardEvent)>,
    }

    impl Listeners {
        fn detach(&self, window: &Window) {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.resize.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "keydown",
                self.keydown.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "keyup",
                self.keyup.as_ref().unchecked_ref(),
            );
        }
    }

    struct Runtime {
        alive: Rc<Cell<bool>>,
        listeners: Listeners,
    }

    thread_local! {
        static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
    }

    fn window_viewport(window: &Window) -> Viewport {
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Viewport::new(w as f32, h as f32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Classic Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let Some(element) = document.get_element_by_id("canvas") else {
            log::warn!("Mount target #canvas missing; nothing to do");
            return;
        };
        let canvas: HtmlCanvasElement = element.dyn_into().expect("not a canvas");

        // Read once; not refreshed on resize, so a cross-display move keeps
        // the startup ratio
        let dpr = window.device_pixel_ratio();
        let view = window_viewport(&window);

        let renderer = CanvasRenderer::new(canvas, dpr);
        if renderer.is_none() {
            log::warn!("2D context unavailable; rendering disabled");
        }

        let tuning = Tuning::default();
        tuning.validate().expect("invalid tuning");

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(view, tuning, seed);
        log::info!(
            "Game initialized with seed {} at {}x{} (dpr {})",
            seed,
            view.width,
            view.height,
            dpr
        );

        let app = Rc::new(RefCell::new(App {
            state,
            controls: Controls::default(),
            renderer,
        }));

        // Initial surface sizing + first paint
        {
            let a = app.borrow();
            if let Some(r) = &a.renderer {
                r.resize(f64::from(view.width), f64::from(view.height));
                r.render(&a.state);
            }
        }

        let listeners = attach_listeners(&window, app.clone());
        let alive = Rc::new(Cell::new(true));

        RUNTIME.with(|rt| {
            *rt.borrow_mut() = Some(Runtime {
                alive: alive.clone(),
                listeners,
            });
        });

        request_frame(app, alive);

        log::info!("Classic Pong running!");
    }

    /// Stop the frame loop and detach all event listeners
    pub fn shutdown() {
        RUNTIME.with(|rt| {
            if let Some(runtime) = rt.borrow_mut().take() {
                runtime.alive.set(false);
                if let Some(window) = web_sys::window() {
                    runtime.listeners.detach(&window);
                }
                log::info!("Classic Pong stopped");
            }
        });
    }

    fn attach_listeners(window: &Window, app: Rc<RefCell<App>>) -> Listeners {
        // Resize: adopt the new viewport and repaint immediately
        let resize = {
            let app = app.clone();
            Closure::<dyn FnMut()>::new(move || {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let view = window_viewport(&window);
                let mut a = app.borrow_mut();
                a.state.resize(view);
                if let Some(r) = &a.renderer {
                    r.resize(f64::from(view.width), f64::from(view.height));
                    r.render(&a.state);
                }
            })
        };
        let _ = window
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

        let keydown = {
            let app = app.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().controls.apply(&event.code(), true);
            })
        };
        let _ = window
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());

        let keyup = {
            let app = app.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().controls.apply(&event.code(), false);
            })
        };
        let _ = window
            .add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());

        Listeners {
            resize,
            keydown,
            keyup,
        }
    }

    fn request_frame(app: Rc<RefCell<App>>, alive: Rc<Cell<bool>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| frame(app, alive));
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, alive: Rc<Cell<bool>>) {
        // Checked before every reschedule so shutdown ends the chain
        if !alive.get() {
            return;
        }

        {
            let mut a = app.borrow_mut();
            let controls = a.controls;
            tick(&mut a.state, &controls);
            if let Some(r) = &a.renderer {
                r.render(&a.state);
            }
        }

        request_frame(app, alive);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

/// Deterministic teardown: stops the frame loop and removes listeners
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn shutdown() {
    wasm_app::shutdown();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use classic_pong::Controls;
    use classic_pong::Tuning;
    use classic_pong::sim::{GameState, Viewport, tick};

    env_logger::init();
    log::info!("Classic Pong (native) starting...");
    log::info!("Headless mode; serve the wasm build for the playable version");

    // Short headless run to exercise the simulation
    let tuning = Tuning::default();
    tuning.validate().expect("invalid tuning");
    let mut state = GameState::new(Viewport::new(800.0, 600.0), tuning, 42);
    let controls = Controls::default();
    for n in 1..=300u32 {
        tick(&mut state, &controls);
        if n % 60 == 0 {
            log::info!(
                "tick {:3}: ball ({:6.1}, {:6.1}) vel ({:5.1}, {:5.1})",
                n,
                state.ball.pos.x,
                state.ball.pos.y,
                state.ball.vel.x,
                state.ball.vel.y
            );
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
