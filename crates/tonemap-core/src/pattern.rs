use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

/// Synthetic HDR source images for exercising the tone-map pass without a
/// scene renderer. Radiance values deliberately exceed 1.0 so the curve's
/// shoulder and the final clamp are both visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HdrPattern {
    SunAndSky,
    NoiseClouds,
    ExposureRamp,
}

impl HdrPattern {
    pub const ALL: [HdrPattern; 3] = [
        HdrPattern::SunAndSky,
        HdrPattern::NoiseClouds,
        HdrPattern::ExposureRamp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HdrPattern::SunAndSky => "Sun and Sky",
            HdrPattern::NoiseClouds => "Noise Clouds",
            HdrPattern::ExposureRamp => "Exposure Ramp",
        }
    }

    /// Generate tightly-packed rgba32float texels, row-major, alpha = 1.
    /// Output length is `width * height * 4`.
    pub fn generate(self, width: u32, height: u32) -> Vec<f32> {
        let mut texels = Vec::with_capacity((width * height * 4) as usize);
        let noise = make_cloud_noise();

        for y in 0..height {
            for x in 0..width {
                // Normalised coordinates, top-left origin like texture space.
                let u = x as f32 / (width.max(2) - 1) as f32;
                let v = y as f32 / (height.max(2) - 1) as f32;
                let rgb = match self {
                    HdrPattern::SunAndSky => sun_and_sky(u, v),
                    HdrPattern::NoiseClouds => noise_clouds(&noise, u, v),
                    HdrPattern::ExposureRamp => exposure_ramp(u, v),
                };
                texels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 1.0]);
            }
        }
        texels
    }
}

// ---------------------------------------------------------------------------
// Pattern implementations
// ---------------------------------------------------------------------------

/// Gradient sky with a small sun disc at ~60× display white.
fn sun_and_sky(u: f32, v: f32) -> [f32; 3] {
    let horizon = 0.68;
    let mut rgb = if v < horizon {
        // Zenith blue brightening toward a warm horizon glow.
        let t = (v / horizon).clamp(0.0, 1.0);
        let t2 = t * t;
        [
            0.18 + (3.6 - 0.18) * t2,
            0.32 + (2.9 - 0.32) * t2,
            0.90 + (2.1 - 0.90) * t2,
        ]
    } else {
        // Ground: dim, slightly warm, fading with distance from the horizon.
        let fade = 1.0 - (v - horizon) / (1.0 - horizon) * 0.6;
        [0.14 * fade, 0.11 * fade, 0.08 * fade]
    };

    // Sun disc plus a soft halo.
    let (du, dv) = (u - 0.72, v - 0.24);
    let d2 = du * du + dv * dv;
    if d2 < 0.05 * 0.05 {
        rgb = [64.0, 58.0, 46.0];
    } else {
        let halo = (-d2 * 180.0).exp() * 9.0;
        rgb[0] += halo;
        rgb[1] += halo * 0.9;
        rgb[2] += halo * 0.7;
    }
    rgb
}

fn make_cloud_noise() -> FastNoiseLite {
    let mut noise = FastNoiseLite::with_seed(1337);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_fractal_type(Some(FractalType::FBm));
    noise.set_fractal_octaves(Some(5));
    noise
}

/// FBm cloud deck over a mid-blue sky; cloud tops reach ~14× display white.
fn noise_clouds(noise: &FastNoiseLite, u: f32, v: f32) -> [f32; 3] {
    // Default noise frequency is 0.01, so scale uv into a few noise periods.
    let n = noise.get_noise_2d(u * 480.0, v * 480.0); // [-1, 1]
    let density = (n * 0.5 + 0.5).powi(2);
    let lit = density * 14.0;
    [0.25 + lit, 0.38 + lit * 0.96, 0.75 + lit * 0.88]
}

/// Radiance sweep from 0 to 16 (left to right), split into four strips:
/// red, green, blue, then neutral grey. Lays the curve's shoulder out flat
/// for visual inspection.
fn exposure_ramp(u: f32, v: f32) -> [f32; 3] {
    let radiance = (u * 17.0f32.log2()).exp2() - 1.0;
    match (v * 4.0) as u32 {
        0 => [radiance, 0.0, 0.0],
        1 => [0.0, radiance, 0.0],
        2 => [0.0, 0.0, radiance],
        _ => [radiance, radiance, radiance],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
