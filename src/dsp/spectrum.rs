use num_complex::Complex;
use serde::Serialize;

/// A local maximum of the magnitude spectrum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Peak {
    pub bin: usize,
    pub magnitude: f64,
    /// Centre frequency of the bin in the units of the sample rate.
    pub frequency: f64,
}

/// Magnitude of every bin.
pub fn magnitudes(spectrum: &[Complex<f64>]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}

/// Finds up to `count` local maxima in bins `1..n/2`, strongest first.
/// The DC bin and the mirrored upper half are not searched.
pub fn find_peaks(spectrum: &[Complex<f64>], count: usize, sample_rate: f64) -> Vec<Peak> {
    let n = spectrum.len();
    if n < 3 || count == 0 {
        return vec![];
    }

    let mags = magnitudes(spectrum);
    let bin_width = sample_rate / n as f64;
    let mut peaks: Vec<Peak> = (1..n / 2)
        .filter(|&k| mags[k] > mags[k - 1] && mags[k] >= mags[k + 1])
        .map(|k| Peak {
            bin: k,
            magnitude: mags[k],
            frequency: k as f64 * bin_width,
        })
        .collect();

    peaks.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude).then(a.bin.cmp(&b.bin)));
    peaks.truncate(count);
    peaks
}

/// Largest elementwise distance between two spectra, or `None` if their
/// lengths differ.
pub fn max_abs_error(a: &[Complex<f64>], b: &[Complex<f64>]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    Some(a.iter().zip(b).map(|(x, y)| (x - y).norm()).fold(0.0, f64::max))
}
