//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::dsp::{check_size, FftError, TwoToneSignal};
use crate::output::ComplexFormat;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "radix2-fft")]
#[command(about = "Two-tone signal through a recursive radix-2 FFT, dumped to text files", long_about = None)]
pub struct Args {
    /// Number of samples; must be a power of two
    #[arg(short = 'n', long, value_name = "N", default_value_t = 512)]
    pub samples: usize,

    /// Frequency of the first tone, in cycles per frame
    #[arg(long, value_name = "CYCLES", default_value_t = 40.0)]
    pub f1: f64,

    /// Frequency of the second tone, in cycles per frame
    #[arg(long, value_name = "CYCLES", default_value_t = 90.0)]
    pub f2: f64,

    /// Amplitude of the first tone
    #[arg(long, value_name = "AMP", default_value_t = 1.0)]
    pub a1: f64,

    /// Amplitude of the second tone
    #[arg(long, value_name = "AMP", default_value_t = 0.5)]
    pub a2: f64,

    /// Sample rate used to label peak frequencies (defaults to N)
    #[arg(long, value_name = "HZ", value_parser = parse_positive)]
    pub sample_rate: Option<f64>,

    /// File receiving the real input samples
    #[arg(long, value_name = "PATH", default_value = "fft_input.txt")]
    pub input_file: PathBuf,

    /// Skip writing the input samples
    #[arg(long)]
    pub no_input_dump: bool,

    /// File receiving the spectrum
    #[arg(long, value_name = "PATH", default_value = "fft_output.txt")]
    pub output_file: PathBuf,

    /// Line format of the spectrum file
    #[arg(long, value_enum, default_value_t = ComplexFormat::J)]
    pub format: ComplexFormat,

    /// Number of spectral peaks to report
    #[arg(long, value_name = "K", default_value_t = 2)]
    pub peaks: usize,

    /// Cross-check the FFT against a direct DFT
    #[arg(long)]
    pub verify: bool,

    /// Write a JSON run report to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub samples: usize,
    pub signal: TwoToneSignal,
    pub sample_rate: f64,
    pub input_file: Option<PathBuf>,
    pub output_file: PathBuf,
    pub format: ComplexFormat,
    pub peaks: usize,
    pub verify: bool,
    pub report: Option<PathBuf>,
}

impl Args {
    /// Checks the transform size up front so a bad size fails before any work
    /// is done or any file is touched.
    pub fn into_config(self) -> Result<RunConfig, FftError> {
        check_size(self.samples)?;

        Ok(RunConfig {
            samples: self.samples,
            signal: TwoToneSignal::new(self.f1, self.f2, self.a1, self.a2),
            sample_rate: self.sample_rate.unwrap_or(self.samples as f64),
            input_file: (!self.no_input_dump).then_some(self.input_file),
            output_file: self.output_file,
            format: self.format,
            peaks: self.peaks,
            verify: self.verify,
            report: self.report,
        })
    }
}

fn parse_positive(value: &str) -> Result<f64, String> {
    let parsed: f64 = value.parse().map_err(|e| format!("{}", e))?;
    if parsed.is_finite() && parsed > 0.0 {
        Ok(parsed)
    } else {
        Err(format!("must be a positive number, got {}", value))
    }
}
