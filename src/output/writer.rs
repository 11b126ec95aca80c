use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use num_complex::Complex;
use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Text layout of one spectrum line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexFormat {
    /// `re + imi`, spaces around the sign.
    I,
    /// `re+imj`, parseable as a Python complex literal.
    #[default]
    J,
}

/// Formats one complex value as a line body (no trailing newline).
pub fn format_complex(value: Complex<f64>, format: ComplexFormat) -> String {
    match format {
        ComplexFormat::I => format!("{:.6} + {:.6}i", value.re, value.im),
        ComplexFormat::J => {
            if value.im.is_sign_negative() {
                format!("{:.6}-{:.6}j", value.re, -value.im)
            } else {
                format!("{:.6}+{:.6}j", value.re, value.im)
            }
        }
    }
}

/// Writes the real part of every sample, one fixed-point value per line.
pub fn write_input(path: &Path, samples: &[Complex<f64>]) -> Result<(), SinkError> {
    write_atomic(path, |w| {
        for sample in samples {
            writeln!(w, "{:.6}", sample.re)?;
        }
        Ok(())
    })
    .map_err(|source| SinkError::Io { path: path.to_path_buf(), source })
}

/// Writes every bin of a spectrum, one complex value per line.
pub fn write_spectrum(path: &Path, spectrum: &[Complex<f64>], format: ComplexFormat) -> Result<(), SinkError> {
    write_atomic(path, |w| {
        for &bin in spectrum {
            writeln!(w, "{}", format_complex(bin, format))?;
        }
        Ok(())
    })
    .map_err(|source| SinkError::Io { path: path.to_path_buf(), source })
}

/// Serializes `value` as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), SinkError> {
    let encoded = serde_json::to_vec_pretty(value)
        .map_err(|source| SinkError::Encode { path: path.to_path_buf(), source })?;

    write_atomic(path, |w| {
        w.write_all(&encoded)?;
        writeln!(w)
    })
    .map_err(|source| SinkError::Io { path: path.to_path_buf(), source })
}

/// Writes to a temporary file next to `path` and renames it over `path` once
/// `body` succeeds. On failure the temporary file is removed and `path` is
/// left as it was.
fn write_atomic<F>(path: &Path, body: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        body(&mut writer)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
