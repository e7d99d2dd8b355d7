pub mod context;
pub mod hdr_source;
pub mod tonemap_pass;

pub use context::GpuContext;
pub use hdr_source::HdrSource;
pub use tonemap_pass::{TonemapPass, TONEMAP_WGSL};
