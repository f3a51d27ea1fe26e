//! Pruefsiegel - inspection seal generator
//!
//! A round seal: the ring is cut into 18 sectors, twelve carry the months
//! and six at the bottom carry consecutive years. Optionally the year band
//! is printed light on dark and a text sits in the middle.
//!
//! Layout ([`layout::layout_seal`]) is pure; [`pipeline::SealPipeline`]
//! adds validation, SVG rendering and the file write.

pub mod geometry;
pub mod config;
pub mod validation;
pub mod primitives;
pub mod layout;
pub mod render;
pub mod hashing;
pub mod pipeline;

pub use geometry::{point_on_circle, Point2D};
pub use config::SealConfig;
pub use validation::{SealRule, ValidationResult, ValidationViolation, Validator, ViolationSeverity};
pub use primitives::{ArcBand, Color, DrawPrimitive, FontWeight, Label, Placement, Stroke};
pub use layout::{layout_seal, PrimitiveCounts, SealLayout, Sector, SectorKind};
pub use render::{build_document, render_document};
pub use hashing::{canonical_json, compute_layout_hash, sha256_hex};
pub use pipeline::{RenderedSeal, SealError, SealPipeline, SealSummary};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
