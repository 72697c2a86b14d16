//! JSON-lines writer for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::metrics::GameMetrics;

pub struct OutputWriter {
    writer: Box<dyn Write + Send>,
    path: Option<PathBuf>,
}

impl OutputWriter {
    /// Write to `path`, creating parent directories, or to stdout when `None`.
    pub fn new(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let Some(path) = path else {
            return Ok(Self::from_writer(Box::new(BufWriter::new(io::stdout()))));
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let file: File = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn from_writer(writer: Box<dyn Write + Send>) -> Self {
        Self { writer, path: None }
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(metrics)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}
