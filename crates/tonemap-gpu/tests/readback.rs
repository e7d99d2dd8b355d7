//! End-to-end check of the tone-map pass: render a tiny HDR image through
//! the real pipeline and compare every output pixel against the CPU
//! reference curve in `tonemap-core`.
//!
//! Needs a live adapter, so it is ignored by default:
//!
//! ```text
//! cargo test -p tonemap-gpu -- --ignored
//! ```

use glam::Vec4;
use tonemap_core::curve::tonemap;
use tonemap_gpu::{GpuContext, HdrSource, TonemapPass};

const WIDTH: u32 = 4;
const HEIGHT: u32 = 4;
// Rgba8Unorm rows padded to wgpu's copy alignment.
const PADDED_ROW: u32 = 256;

fn test_texel(x: u32, y: u32) -> Vec4 {
    // Mix of shadows, mid-tones and well-above-white radiance, plus a
    // non-trivial alpha the pass must discard.
    Vec4::new(
        x as f32 * 0.5,
        y as f32 * 1.5,
        (x + y) as f32 * 4.0,
        0.25,
    )
}

#[test]
#[ignore = "requires a GPU adapter"]
fn gpu_output_matches_cpu_reference() {
    let ctx = pollster::block_on(GpuContext::new_headless());

    // --- HDR source -------------------------------------------------------
    let source = HdrSource::new(&ctx.device, WIDTH, HEIGHT);
    let mut texels = Vec::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let v = test_texel(x, y);
            texels.extend_from_slice(&[v.x, v.y, v.z, v.w]);
        }
    }
    source.upload(&ctx.queue, &texels);

    // --- LDR target + readback buffer ------------------------------------
    let target = ctx.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("readback_target"),
        size: wgpu::Extent3d {
            width: WIDTH,
            height: HEIGHT,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let target_view = target.create_view(&Default::default());

    let readback = ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("readback_buffer"),
        size: (PADDED_ROW * HEIGHT) as u64,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    // --- Render + copy out ------------------------------------------------
    let pass = TonemapPass::new(&ctx.device, wgpu::TextureFormat::Rgba8Unorm);
    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("readback_encoder"),
        });
    pass.record(&ctx.device, &mut encoder, &source.view, &target_view);
    encoder.copy_texture_to_buffer(
        target.as_image_copy(),
        wgpu::ImageCopyBuffer {
            buffer: &readback,
            layout: wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(PADDED_ROW),
                rows_per_image: Some(HEIGHT),
            },
        },
        wgpu::Extent3d {
            width: WIDTH,
            height: HEIGHT,
            depth_or_array_layers: 1,
        },
    );
    ctx.queue.submit(std::iter::once(encoder.finish()));

    let slice = readback.slice(..);
    let (tx, rx) = std::sync::mpsc::channel();
    slice.map_async(wgpu::MapMode::Read, move |result| {
        tx.send(result).unwrap();
    });
    ctx.device.poll(wgpu::Maintain::Wait);
    rx.recv().unwrap().expect("readback map failed");
    let data = slice.get_mapped_range();

    // --- Compare against the reference curve ------------------------------
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let offset = (y * PADDED_ROW + x * 4) as usize;
            let got = &data[offset..offset + 4];
            let expected = tonemap(test_texel(x, y));
            for (i, e) in expected.to_array().into_iter().enumerate() {
                let expected_u8 = (e * 255.0).round() as i32;
                let got_u8 = got[i] as i32;
                assert!(
                    (got_u8 - expected_u8).abs() <= 2,
                    "pixel ({x},{y}) channel {i}: gpu {got_u8} vs cpu {expected_u8}"
                );
            }
        }
    }
}
