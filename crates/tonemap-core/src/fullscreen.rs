use glam::{Vec2, Vec4};

/// One vertex of the screen-covering triangle: a clip-space position and
/// the texture coordinate that rasterization interpolates from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullscreenVertex {
    pub position: Vec4,
    pub uv: Vec2,
}

/// Generate the screen-covering triangle from the vertex index alone.
///
/// No vertex buffer is involved: a non-indexed draw of 3 vertices feeds
/// indices 0, 1, 2 through this function. The uv triangle spans
/// (0,0)–(2,0)–(0,2), deliberately overshooting the unit square so that
/// after clipping the interpolated coordinates cover exactly [0,1]².
/// Positions follow as `uv * (2,-2) + (-1,1)` — the Y flip reconciles
/// texture space (Y down) with clip space (Y up):
///
/// ```text
///  (-1, 1)        (3, 1)
///     +--------+- - -+
///     |        |   /
///     | screen | /
///     +--------+
///     |      /
///     |    /
///     +- /
///  (-1,-3)
/// ```
///
/// `index` must be 0, 1 or 2; the caller owns that contract and other
/// values are out of domain (no bounds check is performed).
pub fn fullscreen_vertex(index: u32) -> FullscreenVertex {
    let uv = Vec2::new(
        if index == 1 { 2.0 } else { 0.0 },
        if index == 2 { 2.0 } else { 0.0 },
    );
    let xy = uv * Vec2::new(2.0, -2.0) + Vec2::new(-1.0, 1.0);
    FullscreenVertex {
        position: Vec4::new(xy.x, xy.y, 0.0, 1.0),
        uv,
    }
}
