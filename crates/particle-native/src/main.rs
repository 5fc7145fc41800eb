use clap::Parser;
use std::time::{SystemTime, UNIX_EPOCH};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Fullscreen, WindowBuilder},
};

use particle_core::render::{clear_color, PointRenderer};
use particle_core::{
    GestureInput, Latest, ParticleParams, ParticleSystem, PointStyle, Rgb, SceneView, ShapeKind,
    DEFAULT_PARTICLE_COUNT,
};

mod emulation;

/// Gesture-driven particle shapes on the desktop. Hold the left mouse button
/// and move across the window to pinch.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of particles
    #[arg(long, default_value_t = DEFAULT_PARTICLE_COUNT)]
    particles: usize,
    /// Initial shape: heart, flower, saturn, fireworks or default
    #[arg(long, default_value = "heart")]
    shape: String,
    /// Point color as #rrggbb
    #[arg(long, default_value = "#00f2ff")]
    color: Rgb,
    /// RNG seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points: PointRenderer,
    clear_color: wgpu::Color,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, capacity: usize) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] {} {}x{} format={:?}",
            adapter.get_info().name,
            size.width,
            size.height,
            format
        );

        let points = PointRenderer::new(&device, format, capacity);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            points,
            clear_color: clear_color(Rgb::BACKGROUND),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(
        &mut self,
        system: &mut ParticleSystem,
        view: &SceneView,
        style: &PointStyle,
    ) -> Result<(), wgpu::SurfaceError> {
        if system.take_dirty() {
            self.points.write_positions(&self.queue, system.positions());
        }
        self.points.write_uniforms(&self.queue, view, style);

        let frame = self.surface.get_current_texture()?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.points.draw(&mut encoder, &target, self.clear_color);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Wall-clock milliseconds, matching the browser's `Date.now()`.
fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or_default()
}

/// Everything the event loop mutates besides the GPU.
struct Session {
    system: ParticleSystem,
    style: PointStyle,
    view: SceneView,
    gesture: Latest<GestureInput>,
    cursor_x: f64,
    pinching: bool,
}

impl Session {
    fn handle_key(&mut self, key: &str, window: &winit::window::Window) {
        if let Some(shape) = ShapeKind::from_key(key) {
            self.system.switch_shape(shape);
            return;
        }
        match key {
            "f" | "F" => {
                if window.fullscreen().is_some() {
                    window.set_fullscreen(None);
                } else {
                    window.set_fullscreen(Some(Fullscreen::Borderless(None)));
                }
            }
            "c" | "C" => {
                self.style.color = emulation::next_color(self.style.color);
                log::info!("[native] color {}", self.style.color);
            }
            _ => {}
        }
    }

    fn publish_pinch(&self, width: u32) {
        if self.pinching {
            self.gesture
                .publish(emulation::gesture_for_cursor(self.cursor_x, width));
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let args = Args::parse();

    let params = ParticleParams {
        count: args.particles,
        initial_shape: ShapeKind::from_id(&args.shape),
        style: PointStyle {
            color: args.color,
            ..PointStyle::default()
        },
        ..ParticleParams::default()
    };
    let style = params.style;
    let seed = args.seed.unwrap_or_else(|| now_ms() as u64);
    let system = ParticleSystem::new(params, seed)?;
    let capacity = system.len();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Gesture Particles (native)")
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window, capacity))?;
    let size = window.inner_size();
    let mut session = Session {
        system,
        style,
        view: SceneView::new(size.width, size.height),
        gesture: Latest::new(),
        cursor_x: 0.0,
        pinching: false,
    };
    log::info!("[native] hold the left mouse button and move horizontally to pinch");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                gpu.resize(size);
                session.view.set_aspect(size.width, size.height);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                session.cursor_x = position.x;
                session.publish_pinch(gpu.window.inner_size().width);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                session.pinching = state == ElementState::Pressed;
                if session.pinching {
                    session.publish_pinch(gpu.window.inner_size().width);
                } else {
                    session.gesture.publish(GestureInput::Lost);
                }
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match event.logical_key.as_ref() {
                    Key::Named(NamedKey::Escape) => elwt.exit(),
                    Key::Character(key) => session.handle_key(key, gpu.window),
                    _ => {}
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let input = session.gesture.take();
            session.system.update(now_ms(), input);
            session.view.advance();
            match gpu.render(&mut session.system, &session.view, &session.style) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
