use std::sync::Arc;
use std::time::Instant;

use tonemap_core::HdrPattern;
use tonemap_gpu::{HdrSource, TonemapPass};
use winit::window::Window;

use crate::input::{InputAction, InputState, Key};

// ---------------------------------------------------------------------------
// Simple FPS counter — logs to console once per second
// ---------------------------------------------------------------------------

struct FpsCounter {
    frames: u32,
    last_report: Instant,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frames: 0,
            last_report: Instant::now(),
        }
    }

    /// Increment the frame count.  Returns the FPS value if a full second has
    /// elapsed since the last report (so the caller can log it).
    fn tick(&mut self) -> Option<f32> {
        self.frames += 1;
        let elapsed = self.last_report.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frames as f32 / elapsed;
            self.frames = 0;
            self.last_report = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// App — surface, HDR source, and the tone-map pass
// ---------------------------------------------------------------------------

pub struct App {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,

    // HDR source texture (size-dependent, rebuilt on resize)
    hdr: HdrSource,
    // Tone-map pass (format-dependent only; survives resizes)
    tonemap: TonemapPass,

    // Pattern tracking
    current_pattern_idx: usize,

    // Input
    input: InputState,

    // Frame timing
    fps: FpsCounter,
}

impl App {
    /// Initialise wgpu for a given window.  The window is wrapped in `Arc` so
    /// that the surface can safely hold a `'static` reference to it.
    pub fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        // ---- Instance -------------------------------------------------------
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // ---- Surface --------------------------------------------------------
        let surface = instance
            .create_surface(Arc::clone(&window))
            .expect("failed to create wgpu surface");

        // ---- Adapter --------------------------------------------------------
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("no suitable GPU adapter found");

        log::info!("GPU adapter: {}", adapter.get_info().name);

        // ---- Device & Queue -------------------------------------------------
        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("tonemap-app device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("failed to create GPU device");

        // ---- Surface configuration ------------------------------------------
        let surface_caps = surface.get_capabilities(&adapter);

        // The filmic curve already produces display-referred values; an sRGB
        // surface view would encode them a second time.
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &surface_config);
        log::info!(
            "Surface configured: {}×{} {:?} Fifo",
            surface_config.width,
            surface_config.height,
            format
        );

        // ---- HDR source + tone-map pass --------------------------------------
        let hdr = HdrSource::new(&device, width, height);
        let tonemap = TonemapPass::new(&device, format);

        let mut app = Self {
            surface,
            device,
            queue,
            surface_config,
            hdr,
            tonemap,
            current_pattern_idx: 0,
            input: InputState::new(),
            fps: FpsCounter::new(),
        };
        app.upload_current_pattern();
        app
    }

    fn current_pattern(&self) -> HdrPattern {
        HdrPattern::ALL[self.current_pattern_idx]
    }

    /// Regenerate the active pattern at the current resolution and upload it.
    fn upload_current_pattern(&mut self) {
        let pattern = self.current_pattern();
        let texels = pattern.generate(self.hdr.width, self.hdr.height);
        self.hdr.upload(&self.queue, &texels);
        log::info!(
            "HDR source: {} at {}×{}",
            pattern.name(),
            self.hdr.width,
            self.hdr.height
        );
    }

    // -------------------------------------------------------------------------
    // Resize
    // -------------------------------------------------------------------------

    /// Reconfigure the surface and rebuild the resolution-tied HDR source.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width == 0 || new_height == 0 {
            return;
        }
        self.surface_config.width = new_width;
        self.surface_config.height = new_height;
        self.surface.configure(&self.device, &self.surface_config);

        self.hdr = HdrSource::new(&self.device, new_width, new_height);
        self.upload_current_pattern();

        log::debug!("Surface resized to {}×{}", new_width, new_height);
    }

    // -------------------------------------------------------------------------
    // Input — called by main.rs window_event handler
    // -------------------------------------------------------------------------

    /// Translate a key press and return the resulting action, if any.
    pub fn on_key_pressed(&self, key: Key) -> Option<InputAction> {
        self.input.on_key(key)
    }

    /// Apply an action to the app state.
    ///
    /// Returns `true` if the app should exit (i.e. action was `Quit`).
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::LoadPattern(pattern) => {
                if let Some(idx) = HdrPattern::ALL.iter().position(|&p| p == pattern) {
                    self.current_pattern_idx = idx;
                }
                self.upload_current_pattern();
            }

            InputAction::CycleNextPattern => {
                self.current_pattern_idx = (self.current_pattern_idx + 1) % HdrPattern::ALL.len();
                self.upload_current_pattern();
            }

            InputAction::Quit => return true,
        }
        false
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    /// Run one frame: tone-map the bound HDR source straight to the surface.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if let Some(fps) = self.fps.tick() {
            log::debug!("FPS: {:.1}  pattern: {}", fps, self.current_pattern().name());
        }

        let output = self.surface.get_current_texture()?;
        let surface_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        self.tonemap
            .record(&self.device, &mut encoder, &self.hdr.view, &surface_view);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
