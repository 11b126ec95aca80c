use std::process;

use clap::Parser;
use colored::Colorize;

use radix2_fft::cli::Args;
use radix2_fft::command_handlers::{self, RunReport};
use radix2_fft::utils;

fn main() {
    let args = Args::parse();
    let logger = utils::get_logger();

    let result = args
        .into_config()
        .map_err(anyhow::Error::from)
        .and_then(|config| command_handlers::run(&config, &logger));

    match result {
        Ok(report) => print_summary(&report),
        Err(e) => {
            utils::error_context(&logger, "run failed", &*e);
            eprintln!("{}", format!("Error: {:#}", e).yellow());
            process::exit(command_handlers::exit_code(&e));
        }
    }
}

fn print_summary(report: &RunReport) {
    println!(
        "Transformed {} samples in {} us",
        report.samples, report.elapsed_us
    );
    if let Some(path) = &report.input_file {
        println!("Input:    {}", path.display());
    }
    println!("Spectrum: {}", report.output_file.display());
    if let Some(err) = report.max_error {
        println!("Max deviation from direct DFT: {:.3e}", err);
    }
    for peak in &report.peaks {
        println!(
            "\t- bin {:>5}  {:>10.3} Hz  magnitude {:.3}",
            peak.bin, peak.frequency, peak.magnitude
        );
    }
}
