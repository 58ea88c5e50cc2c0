pub mod constants;
pub mod layout;
pub mod noise;
pub mod sliders;

pub use layout::*;
pub use noise::*;
pub use sliders::*;
