//! Banner output
//!
//! Writes rendered banners to stdout, or any other writer in tests.

use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::banner::Banner;

/// Output handler for the greeting banner
pub struct Output<W: Write> {
    writer: W,
}

impl Output<io::Stdout> {
    /// Create an output handler on process stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Output<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the banner in one go and flush
    pub fn banner(&mut self, banner: &Banner<'_>) -> Result<()> {
        let text = banner.to_string();
        self.writer
            .write_all(text.as_bytes())
            .context("Failed to write banner")?;
        self.writer.flush().context("Failed to flush banner")?;

        tracing::trace!("Wrote {} bytes", text.len());
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
