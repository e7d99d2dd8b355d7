use wgpu::{Adapter, Device, Instance, Queue};

/// Headless GPU context (no surface) for offscreen tone-mapping and the
/// readback tests. The windowed path in `tonemap-app` builds its own
/// surface-compatible device instead.
pub struct GpuContext {
    pub instance: Instance,
    pub adapter: Adapter,
    pub device: Device,
    pub queue: Queue,
}

impl GpuContext {
    pub async fn new_headless() -> Self {
        let instance = Instance::default();

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .expect("No suitable GPU adapter found");

        log::info!("Headless GPU adapter: {}", adapter.get_info().name);

        // The pass needs nothing beyond the base feature set: rgba32float
        // sources are sampled without filtering.
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("tonemap-gpu device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .expect("Failed to create GPU device");

        Self {
            instance,
            adapter,
            device,
            queue,
        }
    }
}
