use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use slog::{debug, info, warn, Logger};

use crate::cli::RunConfig;
use crate::dsp::{dft, fft, find_peaks, max_abs_error, FftError, Peak, TwoToneSignal};
use crate::output::{self, ComplexFormat, SinkError};
use crate::utils;

/// Largest acceptable FFT/direct-DFT deviation per sample.
const VERIFY_TOLERANCE_PER_SAMPLE: f64 = 1e-6;

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_INVALID_SIZE: i32 = 2;
pub const EXIT_ALLOCATION: i32 = 3;
pub const EXIT_IO: i32 = 4;

/// Summary of one run, also written as the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub samples: usize,
    pub sample_rate: f64,
    pub signal: TwoToneSignal,
    pub format: ComplexFormat,
    pub input_file: Option<PathBuf>,
    pub output_file: PathBuf,
    pub peaks: Vec<Peak>,
    pub max_error: Option<f64>,
    pub elapsed_us: u128,
}

/// Generates the signal, transforms it and writes the dumps.
///
/// The transform runs before anything is written, so a failed transform
/// leaves no files behind.
pub fn run(config: &RunConfig, logger: &Logger) -> Result<RunReport> {
    let n = config.samples;
    let input = config.signal.generate_complex(n);
    debug!(logger, "signal generated"; "n" => n, "f1" => config.signal.f1, "f2" => config.signal.f2);

    let start = Instant::now();
    let spectrum = fft(&input).context("fft failed")?;
    let elapsed_us = start.elapsed().as_micros();
    info!(logger, "transform complete"; "n" => n, "elapsed_us" => elapsed_us as u64);

    let max_error = if config.verify {
        let reference = dft(&input);
        let err = max_abs_error(&spectrum, &reference).unwrap_or(f64::INFINITY);
        if err > VERIFY_TOLERANCE_PER_SAMPLE * n as f64 {
            warn!(logger, "fft deviates from direct dft"; "max_error" => err);
        } else {
            info!(logger, "fft matches direct dft"; "max_error" => err);
        }
        Some(err)
    } else {
        None
    };

    let peaks = find_peaks(&spectrum, config.peaks, config.sample_rate);
    for peak in &peaks {
        debug!(logger, "peak"; "bin" => peak.bin, "magnitude" => peak.magnitude, "frequency" => peak.frequency);
    }

    if let Some(path) = &config.input_file {
        prepare_parent(path)?;
        output::write_input(path, &input)?;
        info!(logger, "input written"; "path" => path.display().to_string());
    }

    prepare_parent(&config.output_file)?;
    output::write_spectrum(&config.output_file, &spectrum, config.format)?;
    info!(logger, "spectrum written"; "path" => config.output_file.display().to_string());

    let report = RunReport {
        samples: n,
        sample_rate: config.sample_rate,
        signal: config.signal,
        format: config.format,
        input_file: config.input_file.clone(),
        output_file: config.output_file.clone(),
        peaks,
        max_error,
        elapsed_us,
    };

    if let Some(path) = &config.report {
        prepare_parent(path)?;
        output::write_json(path, &report)?;
        info!(logger, "report written"; "path" => path.display().to_string());
    }

    Ok(report)
}

fn prepare_parent(path: &Path) -> Result<()> {
    utils::create_parent_folder(path)
        .map_err(|source| SinkError::Io { path: path.to_path_buf(), source })
        .context("could not create output directory")
}

/// Maps a failure to the process exit status.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(fft_err) = err.downcast_ref::<FftError>() {
        return match fft_err {
            FftError::InvalidSize { .. } => EXIT_INVALID_SIZE,
            FftError::AllocationFailure { .. } => EXIT_ALLOCATION,
        };
    }
    if err.downcast_ref::<SinkError>().is_some() {
        return EXIT_IO;
    }
    EXIT_FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use slog::o;
    use std::fs;

    fn config_in(dir: &Path, samples: usize) -> RunConfig {
        RunConfig {
            samples,
            signal: TwoToneSignal::default(),
            sample_rate: samples as f64,
            input_file: Some(dir.join("fft_input.txt")),
            output_file: dir.join("fft_output.txt"),
            format: ComplexFormat::J,
            peaks: 2,
            verify: true,
            report: Some(dir.join("reports").join("run.json")),
        }
    }

    fn quiet_logger() -> Logger {
        Logger::root(slog::Discard, o!())
    }

    #[test]
    fn test_run_writes_all_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), 512);
        let report = run(&config, &quiet_logger()).unwrap();

        assert_eq!(report.samples, 512);
        let bins: Vec<usize> = report.peaks.iter().map(|p| p.bin).collect();
        assert_eq!(bins, vec![40, 90]);
        assert!(report.max_error.unwrap() < 1e-6);

        let input = fs::read_to_string(dir.path().join("fft_input.txt")).unwrap();
        assert_eq!(input.lines().count(), 512);
        assert_eq!(input.lines().next(), Some("0.000000"));

        let spectrum = fs::read_to_string(dir.path().join("fft_output.txt")).unwrap();
        assert_eq!(spectrum.lines().count(), 512);
        assert!(spectrum.lines().all(|line| line.ends_with('j')));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("reports").join("run.json")).unwrap())
                .unwrap();
        assert_eq!(json["samples"], 512);
        assert_eq!(json["peaks"][0]["bin"], 40);
        assert_eq!(json["signal"]["f2"], 90.0);
    }

    #[test]
    fn test_run_without_input_dump() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path(), 64);
        config.input_file = None;
        config.report = None;
        config.verify = false;

        let report = run(&config, &quiet_logger()).unwrap();
        assert_eq!(report.max_error, None);
        assert!(!dir.path().join("fft_input.txt").exists());
        assert!(dir.path().join("fft_output.txt").exists());
    }

    #[test]
    fn test_invalid_size_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), 500);

        let err = run(&config, &quiet_logger()).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_INVALID_SIZE);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_exit_codes() {
        let alloc = anyhow::Error::new(FftError::AllocationFailure { len: 8 }).context("fft failed");
        assert_eq!(exit_code(&alloc), EXIT_ALLOCATION);

        let io = anyhow::Error::new(SinkError::Io {
            path: "fft_output.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(exit_code(&io), EXIT_IO);

        assert_eq!(exit_code(&anyhow::anyhow!("something else")), EXIT_FAILURE);
    }
}
