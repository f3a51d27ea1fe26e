//! Seal Pipeline - Single Entry Point
//!
//! validate -> lay out -> render -> write. Rendering always validates first.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::SealConfig;
use crate::hashing::{compute_layout_hash, sha256_hex};
use crate::layout::{layout_seal, PrimitiveCounts, SealLayout};
use crate::render::render_document;
use crate::validation::{ValidationResult, Validator};

#[derive(Debug, Error)]
pub enum SealError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A rendered seal, ready to be written
#[derive(Debug, Clone)]
pub struct RenderedSeal {
    pub config: SealConfig,
    pub layout: SealLayout,
    pub document: String,
    pub document_sha256: String,
    pub layout_sha256: String,
}

/// What gets reported after a seal is written
#[derive(Debug, Clone, Serialize)]
pub struct SealSummary {
    pub path: PathBuf,
    pub width_mm: f64,
    pub config: SealConfig,
    pub primitives: PrimitiveCounts,
    pub document_sha256: String,
    pub layout_sha256: String,
}

impl RenderedSeal {
    pub fn summary(&self, path: &Path) -> SealSummary {
        SealSummary {
            path: path.to_path_buf(),
            width_mm: self.layout.width(),
            config: self.config.clone(),
            primitives: self.layout.counts(),
            document_sha256: self.document_sha256.clone(),
            layout_sha256: self.layout_sha256.clone(),
        }
    }
}

pub struct SealPipeline {
    validator: Validator,
}

impl SealPipeline {
    pub fn new() -> Self {
        Self {
            validator: Validator::new(),
        }
    }

    pub fn validate(&self, config: &SealConfig) -> ValidationResult {
        self.validator.validate(config)
    }

    /// Validate and lay out. Warnings are logged, errors reject the config.
    pub fn layout(&self, config: &SealConfig) -> Result<SealLayout, SealError> {
        let validation = self.validate(config);

        for w in validation.warnings() {
            warn!(rule = %w.rule, expected = ?w.expected, actual = ?w.actual, "{}", w.message);
        }

        if !validation.valid {
            return Err(SealError::InvalidConfig(validation.error_summary()));
        }

        Ok(layout_seal(config))
    }

    pub fn render(&self, config: &SealConfig) -> Result<RenderedSeal, SealError> {
        let layout = self.layout(config)?;
        let document = render_document(&layout);
        let document_sha256 = sha256_hex(document.as_bytes());
        let layout_sha256 = compute_layout_hash(&layout)?;

        Ok(RenderedSeal {
            config: config.clone(),
            layout,
            document,
            document_sha256,
            layout_sha256,
        })
    }

    /// Render and write the SVG document to `path`
    pub fn write(&self, config: &SealConfig, path: &Path) -> Result<RenderedSeal, SealError> {
        let seal = self.render(config)?;

        fs::write(path, seal.document.as_bytes()).map_err(|source| SealError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), sha256 = %seal.document_sha256, "seal written");
        Ok(seal)
    }
}

impl Default for SealPipeline {
    fn default() -> Self {
        Self::new()
    }
}
