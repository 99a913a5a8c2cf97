pub mod phase;
pub mod psr;
pub mod spectrum;
pub mod subpixel;
pub mod window;

pub use phase::{phase_correlate, phase_correlate_pictures};
