//! Seal Configuration
//!
//! The parameters a seal is drawn from. Built by the CLI, checked by
//! [`crate::validation::Validator`] before any layout happens.

use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTER_RADIUS: f64 = 30.0;
pub const DEFAULT_INNER_RADIUS: f64 = 20.0;
pub const DEFAULT_START_YEAR: i64 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SealConfig {
    /// Outer ring radius in mm
    #[serde(default = "default_outer_radius")]
    pub outer_radius: f64,
    /// Inner ring radius in mm
    #[serde(default = "default_inner_radius")]
    pub inner_radius: f64,
    /// Value printed in the last year sector; the other five count up from it
    #[serde(default = "default_start_year")]
    pub start_year: i64,
    #[serde(default)]
    pub year_inverse: bool,
    #[serde(default)]
    pub center_text: Option<String>,
}

fn default_outer_radius() -> f64 { DEFAULT_OUTER_RADIUS }
fn default_inner_radius() -> f64 { DEFAULT_INNER_RADIUS }
fn default_start_year() -> i64 { DEFAULT_START_YEAR }

impl Default for SealConfig {
    fn default() -> Self {
        Self {
            outer_radius: DEFAULT_OUTER_RADIUS,
            inner_radius: DEFAULT_INNER_RADIUS,
            start_year: DEFAULT_START_YEAR,
            year_inverse: false,
            center_text: None,
        }
    }
}

impl SealConfig {
    pub fn with_radii(outer_radius: f64, inner_radius: f64) -> Self {
        Self {
            outer_radius,
            inner_radius,
            ..Self::default()
        }
    }

    pub fn with_start_year(self, start_year: i64) -> Self {
        Self { start_year, ..self }
    }

    pub fn with_year_inverse(self, year_inverse: bool) -> Self {
        Self { year_inverse, ..self }
    }

    pub fn with_center_text(self, center_text: impl Into<String>) -> Self {
        Self {
            center_text: Some(center_text.into()),
            ..self
        }
    }

    /// Center text if present and not empty
    pub fn center_label(&self) -> Option<&str> {
        self.center_text.as_deref().filter(|t| !t.is_empty())
    }

    /// Width of the ring between inner and outer radius
    pub fn ring_width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}
