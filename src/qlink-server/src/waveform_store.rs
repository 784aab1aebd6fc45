// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! File-backed storage for intermediate waveforms.
//!
//! Each buffer is written as raw native-endian f64 samples and read back
//! before the next stage consumes it.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::debug;

use qlink_core::wire::{read_waveform, write_waveform};

use crate::config::WaveformConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveformKind {
    Modulated,
    Noisy,
}

#[derive(Debug, Clone)]
pub struct WaveformStore {
    modulated: PathBuf,
    noisy: PathBuf,
}

impl WaveformStore {
    pub fn from_config(cfg: &WaveformConfig) -> Self {
        Self {
            modulated: cfg.dir.join(&cfg.modulated_file),
            noisy: cfg.dir.join(&cfg.noisy_file),
        }
    }

    pub fn path(&self, kind: WaveformKind) -> &Path {
        match kind {
            WaveformKind::Modulated => &self.modulated,
            WaveformKind::Noisy => &self.noisy,
        }
    }

    /// Create or truncate the file for `kind` and write `samples` to it.
    pub fn save(&self, kind: WaveformKind, samples: &[f64]) -> io::Result<()> {
        let path = self.path(kind);
        let file = File::create(path)?;
        write_waveform(BufWriter::new(file), samples)?;
        debug!("Wrote {} sample(s) to {}", samples.len(), path.display());
        Ok(())
    }

    pub fn load(&self, kind: WaveformKind) -> io::Result<Vec<f64>> {
        let path = self.path(kind);
        let samples = read_waveform(BufReader::new(File::open(path)?))?;
        debug!("Read {} sample(s) from {}", samples.len(), path.display());
        Ok(samples)
    }

    /// Save then reload, so downstream stages see exactly what is on disk.
    pub fn round_trip(&self, kind: WaveformKind, samples: &[f64]) -> io::Result<Vec<f64>> {
        self.save(kind, samples)?;
        self.load(kind)
    }
}
