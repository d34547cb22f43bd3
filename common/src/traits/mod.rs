pub mod publisher;
pub mod sample;

pub use crate::traits::publisher::Notifiable;
pub use crate::traits::sample::TimedSample;
