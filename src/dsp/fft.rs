use num_complex::Complex;
use std::f64::consts::PI;
use thiserror::Error;

/// Errors reported by the FFT engine before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FftError {
    #[error("invalid transform size {len}: length must be a non-zero power of two")]
    InvalidSize { len: usize },
    #[error("could not allocate an output buffer of {len} samples")]
    AllocationFailure { len: usize },
}

/// Returns true when `n` is a length the radix-2 engine accepts.
pub fn is_power_of_two_len(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Rejects lengths that are zero or not a power of two.
pub fn check_size(n: usize) -> Result<(), FftError> {
    if is_power_of_two_len(n) {
        Ok(())
    } else {
        Err(FftError::InvalidSize { len: n })
    }
}

/// Performs the Fast Fourier Transform on a real-valued signal.
pub fn fft_real(input: &[f64]) -> Result<Vec<Complex<f64>>, FftError> {
    check_size(input.len())?;
    let complex_array: Vec<Complex<f64>> = input.iter().map(|&v| Complex::new(v, 0.0)).collect();
    fft(&complex_array)
}

/// Computes the discrete Fourier transform of `input` with the recursive
/// radix-2 decimation-in-time Cooley-Tukey algorithm.
///
/// The input is left untouched. The only allocation is the returned buffer;
/// every recursion level reads its even/odd halves through a strided view of
/// `input` and writes into its own disjoint slice of the output.
///
/// # Errors
///
/// `FftError::InvalidSize` when the length is zero or not a power of two,
/// `FftError::AllocationFailure` when the output buffer cannot be reserved.
pub fn fft(input: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, FftError> {
    let n = input.len();
    check_size(n)?;

    let mut output: Vec<Complex<f64>> = Vec::new();
    output
        .try_reserve_exact(n)
        .map_err(|_| FftError::AllocationFailure { len: n })?;
    output.resize(n, Complex::new(0.0, 0.0));

    recursive_fft(input, 0, 1, &mut output);
    Ok(output)
}

/// Transforms the samples `input[offset], input[offset + stride], ...` into `out`.
/// `out.len()` is the length of this sub-transform.
fn recursive_fft(input: &[Complex<f64>], offset: usize, stride: usize, out: &mut [Complex<f64>]) {
    let n = out.len();
    if n == 1 {
        out[0] = input[offset];
        return;
    }

    let half = n / 2;
    {
        // Even-indexed samples land in the lower half, odd-indexed in the upper.
        let (even_out, odd_out) = out.split_at_mut(half);
        recursive_fft(input, offset, stride * 2, even_out);
        recursive_fft(input, offset + stride, stride * 2, odd_out);
    }

    for k in 0..half {
        let twiddle = Complex::new(0.0, -2.0 * PI * k as f64 / n as f64).exp();
        let t = twiddle * out[k + half];
        let e = out[k];
        out[k] = e + t;
        out[k + half] = e - t;
    }
}
