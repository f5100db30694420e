pub mod builder;
pub mod distance;
pub mod field;
pub mod mask;
