pub mod curve;
pub mod fullscreen;
pub mod pattern;

pub use curve::{filmic_channel, tonemap};
pub use fullscreen::{fullscreen_vertex, FullscreenVertex};
pub use pattern::HdrPattern;
