use num_complex::Complex;
use serde::Serialize;
use std::f64::consts::PI;

const DEFAULT_F1: f64 = 40.0;
const DEFAULT_F2: f64 = 90.0;
const DEFAULT_A1: f64 = 1.0;
const DEFAULT_A2: f64 = 0.5;

/// Sum of two sine tones. Frequencies are in cycles per frame, so a tone of
/// frequency `f` lands in bin `f` of an `n`-point transform of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TwoToneSignal {
    pub f1: f64,
    pub f2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl Default for TwoToneSignal {
    fn default() -> Self {
        TwoToneSignal {
            f1: DEFAULT_F1,
            f2: DEFAULT_F2,
            a1: DEFAULT_A1,
            a2: DEFAULT_A2,
        }
    }
}

impl TwoToneSignal {
    pub fn new(f1: f64, f2: f64, a1: f64, a2: f64) -> Self {
        TwoToneSignal { f1, f2, a1, a2 }
    }

    /// Sample `i` of an `n`-sample frame.
    pub fn sample(&self, i: usize, n: usize) -> f64 {
        let t = i as f64 / n as f64;
        self.a1 * (2.0 * PI * self.f1 * t).sin() + self.a2 * (2.0 * PI * self.f2 * t).sin()
    }

    /// Generates `n` real samples.
    pub fn generate(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.sample(i, n)).collect()
    }

    /// Generates `n` samples promoted to complex values with a zero imaginary part.
    pub fn generate_complex(&self, n: usize) -> Vec<Complex<f64>> {
        (0..n).map(|i| Complex::new(self.sample(i, n), 0.0)).collect()
    }
}
