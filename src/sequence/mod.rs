pub mod builder;
pub mod keyframes;
