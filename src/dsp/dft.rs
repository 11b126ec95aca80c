use num_complex::Complex;
use std::f64::consts::PI;

/// Direct O(n²) discrete Fourier transform. Works for any length, including
/// sizes the radix-2 engine rejects, and serves as the reference the fast
/// transform is checked against.
pub fn dft(input: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(j, &x)| {
                    // Reduce k·j mod n first so the angle stays small for large n.
                    let phase = ((k * j) % n) as f64 / n as f64;
                    x * Complex::new(0.0, -2.0 * PI * phase).exp()
                })
                .sum::<Complex<f64>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dft_empty() {
        assert!(dft(&[]).is_empty());
    }

    #[test]
    fn test_dft_constant_signal() {
        // A constant concentrates all energy in the DC bin, for odd lengths too.
        let input = vec![Complex::new(1.0, 0.0); 5];
        let result = dft(&input);
        assert!((result[0] - Complex::new(5.0, 0.0)).norm() < 1e-9);
        for bin in &result[1..] {
            assert!(bin.norm() < 1e-9, "leakage {}", bin);
        }
    }

    #[test]
    fn test_dft_single_tone() {
        let n = 12;
        let input: Vec<Complex<f64>> = (0..n)
            .map(|i| Complex::new(0.0, 2.0 * PI * 3.0 * i as f64 / n as f64).exp())
            .collect();
        let result = dft(&input);
        for (k, bin) in result.iter().enumerate() {
            let expected = if k == 3 { n as f64 } else { 0.0 };
            assert!((bin.norm() - expected).abs() < 1e-9, "bin {}: {}", k, bin);
        }
    }
}
