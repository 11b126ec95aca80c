//! Recursive radix-2 Cooley-Tukey FFT over a synthesized two-tone signal,
//! with text dumps of the input and the spectrum.

pub mod cli;
pub mod command_handlers;
pub mod dsp;
pub mod output;
pub mod utils;
