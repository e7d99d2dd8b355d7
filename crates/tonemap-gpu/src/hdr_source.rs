use wgpu::{Device, Queue, Texture, TextureView};

/// The HDR source image the tone-map pass reads from.
///
/// Rgba32Float keeps the full linear radiance range; wgpu treats that
/// format as non-filterable by default, so the pass samples it with a
/// nearest-neighbour sampler — exact for the 1:1 screen mapping used here.
pub struct HdrSource {
    pub texture: Texture,
    pub view: TextureView,
    pub width: u32,
    pub height: u32,
}

impl HdrSource {
    pub fn new(device: &Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("hdr_source"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba32Float,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&Default::default());
        Self {
            texture,
            view,
            width,
            height,
        }
    }

    /// Upload tightly-packed rgba32float texels (row-major, 4 floats per
    /// texel) covering the whole image.
    pub fn upload(&self, queue: &Queue, texels: &[f32]) {
        assert_eq!(
            texels.len(),
            (self.width * self.height * 4) as usize,
            "texel slice does not match {}×{} rgba image",
            self.width,
            self.height,
        );
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytemuck::cast_slice(texels),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(self.width * 16),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
        log::debug!("Uploaded {}×{} HDR source", self.width, self.height);
    }
}
