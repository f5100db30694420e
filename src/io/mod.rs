pub mod naming;
pub mod raster;
pub mod resize;
