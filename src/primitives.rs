//! Draw primitives emitted by the layout engine
//!
//! Order in a [`crate::layout::SealLayout`] is paint order: later primitives
//! render on top of earlier ones.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn as_rgb(&self) -> &'static str {
        match self {
            Color::Black => "rgb(0,0,0)",
            Color::White => "rgb(255,255,255)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// Translate to `translate`, then rotate about that point by `rotate` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub translate: Point2D,
    pub rotate: f64,
}

/// Ring segment between two radii, bounded by two radial edges.
///
/// Outline: inner_start -> outer_start, outer arc clockwise to outer_end,
/// -> inner_end, inner arc counter-clockwise back to inner_start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcBand {
    pub inner_start: Point2D,
    pub outer_start: Point2D,
    pub outer_end: Point2D,
    pub inner_end: Point2D,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    /// None draws the label at the origin, untransformed
    pub placement: Option<Placement>,
    pub weight: FontWeight,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawPrimitive {
    Circle {
        center: Point2D,
        radius: f64,
        stroke: Stroke,
    },
    Line {
        start: Point2D,
        end: Point2D,
        stroke: Stroke,
    },
    ArcBand(ArcBand),
    Label(Label),
}

impl DrawPrimitive {
    pub fn as_label(&self) -> Option<&Label> {
        match self {
            DrawPrimitive::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, DrawPrimitive::Line { .. })
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, DrawPrimitive::Circle { .. })
    }

    pub fn is_arc_band(&self) -> bool {
        matches!(self, DrawPrimitive::ArcBand(_))
    }
}
