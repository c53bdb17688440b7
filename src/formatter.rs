//! Source formatting applied to generated Go files.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Trait for source formatters.
pub trait Formatter {
    /// Formats source bytes, failing if they are not valid source.
    fn format(&self, source: &[u8]) -> io::Result<Vec<u8>>;
}

/// Formatter that pipes source through `gofmt`.
#[derive(Debug, Clone)]
pub struct GoFormatter {
    gofmt: PathBuf,
}

impl GoFormatter {
    /// Uses `gofmt` from `PATH`.
    pub fn new() -> Self {
        Self::with_binary("gofmt")
    }

    /// Uses the `gofmt` binary at the given path.
    pub fn with_binary<P: Into<PathBuf>>(gofmt: P) -> Self {
        Self { gofmt: gofmt.into() }
    }
}

impl Default for GoFormatter {
    fn default() -> Self {
        GoFormatter::new()
    }
}

impl Formatter for GoFormatter {
    fn format(&self, source: &[u8]) -> io::Result<Vec<u8>> {
        let mut child = Command::new(&self.gofmt)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Dropping stdin closes the pipe so gofmt sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(source) {
                drop(stdin);
                // Reap the child before reporting the write failure.
                let _ = child.kill();
                let _ = child.wait();
                return Err(e);
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(output.stdout)
    }
}

/// Formatter that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFormatter;

impl Formatter for NoopFormatter {
    fn format(&self, source: &[u8]) -> io::Result<Vec<u8>> {
        Ok(source.to_vec())
    }
}
