use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use vantage::{Camera, CameraControls, CameraController, CameraMode, Input, Vector3};

struct App {
    window: Option<Arc<Window>>,
    input: Input,
    camera: Camera,
    controller: CameraController,
    mode: CameraMode,
    last_frame: Instant,
}

impl App {
    fn new(controls: CameraControls, mode: CameraMode) -> Self {
        Self {
            window: None,
            input: Input::new(),
            camera: Camera::new()
                .at(Vector3::new(0.0, 2.0, 10.0))
                .looking_at(Vector3::ZERO),
            controller: CameraController::new(controls),
            mode,
            last_frame: Instant::now(),
        }
    }

    fn select_mode(&mut self, key: KeyCode) {
        let mode = match key {
            KeyCode::Digit1 => CameraMode::Free,
            KeyCode::Digit2 => CameraMode::Orbital,
            KeyCode::Digit3 => CameraMode::FirstPerson,
            KeyCode::Digit4 => CameraMode::ThirdPerson,
            KeyCode::Digit0 => CameraMode::Custom,
            _ => return,
        };
        if mode != self.mode {
            log::info!("Camera mode: {:?}", mode);
            self.mode = mode;
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.controller.update(&mut self.camera, self.mode, &self.input, dt);
        self.input.begin_frame();

        if let Some(window) = &self.window {
            let p = self.camera.position;
            window.set_title(&format!(
                "vantage | {:?} | position ({:.2}, {:.2}, {:.2}) | distance {:.2}",
                self.mode,
                p.x,
                p.y,
                p.z,
                self.camera.target_distance()
            ));
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        match event_loop.create_window(Window::default_attributes().with_title("vantage")) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(err) => {
                log::error!("Failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        if key == KeyCode::Escape {
                            event_loop.exit();
                        }
                        self.select_mode(key);
                    }
                }
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }
}

/// Interactive demo for the camera controller.
#[derive(Parser)]
#[command(name = "vantage-demo")]
#[command(about = "Fly a camera around the origin with the vantage controller")]
#[command(version)]
struct Args {
    /// Starting camera mode; keys 0-4 switch modes at runtime
    #[arg(value_enum, default_value_t = ModeArg::Orbital)]
    mode: ModeArg,

    /// TOML file overriding the default step sizes
    #[arg(short, long)]
    controls: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Custom,
    Free,
    Orbital,
    FirstPerson,
    ThirdPerson,
}

impl From<ModeArg> for CameraMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Custom => CameraMode::Custom,
            ModeArg::Free => CameraMode::Free,
            ModeArg::Orbital => CameraMode::Orbital,
            ModeArg::FirstPerson => CameraMode::FirstPerson,
            ModeArg::ThirdPerson => CameraMode::ThirdPerson,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mode = CameraMode::from(args.mode);
    let controls = match args.controls {
        Some(path) => match CameraControls::load(&path) {
            Ok(controls) => controls,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        },
        None => CameraControls::default(),
    };

    log::info!("Starting in {:?} mode; keys 0-4 switch modes", mode);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("Failed to create event loop: {err}");
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(controls, mode);
    if let Err(err) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {err}");
    }
}
