pub mod interpolate;
pub mod mix;
pub mod warp;
