mod dft;
pub use dft::*;
mod fft;
pub use fft::*;
mod signal;
pub use signal::*;
mod spectrum;
pub use spectrum::*;
