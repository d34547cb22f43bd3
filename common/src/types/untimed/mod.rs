pub mod rotation;
pub mod xyz;

pub use rotation::RotationSample;
pub use xyz::XYZ;
