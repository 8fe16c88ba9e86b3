//! Interactive trackball demo.
//!
//! Opens a window and drives a camera orbiting the origin from mouse, wheel,
//! and touch input, logging the camera pose whenever it moves. Pass a TOML
//! options preset as the first argument to override the defaults.
//!
//! Run with `RUST_LOG=info cargo run --features binary`.

use std::path::Path;
use std::sync::Arc;

use glam::Vec3;
use trackball::camera::Camera;
use trackball::controls::{ControlEvent, TrackballController};
use trackball::input::winit::WinitInput;
use trackball::options::Options;
use trackball::scene::SceneObject;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

struct TrackballApp {
    window: Option<Arc<Window>>,
    input: WinitInput,
    camera: Camera,
    object: SceneObject,
    controls: TrackballController,
}

impl TrackballApp {
    fn new(options: Options) -> Self {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 600.0), Vec3::Y);
        let object = SceneObject::default();
        let mut controls =
            TrackballController::new(&mut camera, &object, Vec3::ZERO).with_options(options);
        let _id = controls.subscribe(|event| match event {
            ControlEvent::Start => log::debug!("gesture started"),
            ControlEvent::End => log::debug!("gesture ended"),
            ControlEvent::Change => {}
        });

        Self {
            window: None,
            input: WinitInput::new(),
            camera,
            object,
            controls,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.controls.handle_resize(width as f32, height as f32);
    }
}

impl ApplicationHandler for TrackballApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Trackball")
            .with_inner_size(winit::dpi::LogicalSize::new(800.0, 600.0));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.resize(size.width, size.height);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => self.resize(size.width, size.height),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                use winit::keyboard::{KeyCode, PhysicalKey};
                if event.state.is_pressed()
                    && event.physical_key == PhysicalKey::Code(KeyCode::KeyR)
                {
                    self.controls.reset(&mut self.camera, &mut self.object);
                }
            }

            WindowEvent::RedrawRequested => {
                if self.controls.update(&mut self.camera, &mut self.object) {
                    log::info!(
                        "camera at {:.2} (distance {:.2}), target {:.2}",
                        self.camera.position,
                        self.camera.position.distance(self.controls.target()),
                        self.controls.target()
                    );
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            other => {
                if let Some(input) = self.input.translate(&other) {
                    let _ = self.controls.handle_event(&input, &self.camera);
                }
            }
        }
    }
}

fn load_options() -> Options {
    let Some(arg) = std::env::args().nth(1) else {
        return Options::default();
    };
    let path = Path::new(&arg);

    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let presets = Options::list_presets(dir);
    if !presets.is_empty() {
        log::info!("presets in {}: {}", dir.display(), presets.join(", "));
    }

    match Options::load(path) {
        Ok(options) => {
            log::info!("loaded options from {}", path.display());
            options
        }
        Err(e) => {
            log::error!("{e}; using defaults");
            Options::default()
        }
    }
}

fn main() {
    env_logger::init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = TrackballApp::new(load_options());
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {e}");
        std::process::exit(1);
    }
}
