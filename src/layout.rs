//! Seal Layout Engine
//!
//! Turns a [`SealConfig`] into the ordered list of primitives that make up
//! the seal. Pure computation: no rendering, no I/O.
//!
//! The ring is split into [`SECTOR_COUNT`] sectors of 20°. Sector 0 starts
//! at 12 o'clock and sectors advance clockwise. Sectors 6..=11 (120°..240°,
//! the bottom of the seal) hold years, all others hold months.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SealConfig;
use crate::geometry::{point_on_circle, Point2D};
use crate::primitives::{ArcBand, Color, DrawPrimitive, FontWeight, Label, Placement, Stroke};

pub const SECTOR_COUNT: usize = 18;
/// Space around the outer circle so the stroke is not clipped
pub const MARGIN_MM: f64 = 5.0;
pub const STROKE_WIDTH_MM: f64 = 0.15;
/// Label font size in user units (mm)
pub const FONT_SIZE: f64 = 5.0;

const FIRST_YEAR_SECTOR: usize = 6;
const LAST_YEAR_SECTOR: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectorKind {
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sector {
    index: usize,
}

impl Sector {
    /// None for indices outside 0..SECTOR_COUNT
    pub fn new(index: usize) -> Option<Self> {
        (index < SECTOR_COUNT).then_some(Self { index })
    }

    pub fn all() -> impl Iterator<Item = Sector> {
        (0..SECTOR_COUNT).map(|index| Sector { index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> SectorKind {
        if (FIRST_YEAR_SECTOR..=LAST_YEAR_SECTOR).contains(&self.index) {
            SectorKind::Year
        } else {
            SectorKind::Month
        }
    }

    /// Angle of the spoke at the start of this sector
    pub fn boundary_angle(&self) -> f64 {
        360.0 * self.index as f64 / SECTOR_COUNT as f64
    }

    /// Angle through the middle of this sector
    pub fn label_angle(&self) -> f64 {
        360.0 * (2 * self.index + 1) as f64 / (2 * SECTOR_COUNT) as f64
    }

    /// Month number (1..=12) for month sectors.
    ///
    /// Sectors 0..=5 carry July..December, 12..=17 carry January..June.
    pub fn month(&self) -> Option<u8> {
        match self.kind() {
            SectorKind::Month => Some(self.month_number()),
            SectorKind::Year => None,
        }
    }

    fn month_number(&self) -> u8 {
        if self.index < FIRST_YEAR_SECTOR {
            self.index as u8 + 7
        } else {
            self.index as u8 - 11
        }
    }

    fn year_offset(&self) -> i64 {
        (LAST_YEAR_SECTOR - self.index) as i64
    }

    /// Year value for year sectors; sector 11 holds `start_year`, sector 6 `start_year + 5`.
    ///
    /// None for month sectors and when the year does not fit an i64.
    pub fn year(&self, start_year: i64) -> Option<i64> {
        match self.kind() {
            SectorKind::Year => start_year.checked_add(self.year_offset()),
            SectorKind::Month => None,
        }
    }

    pub fn label_text(&self, start_year: i64) -> String {
        match self.kind() {
            SectorKind::Month => self.month_number().to_string(),
            SectorKind::Year => (i128::from(start_year) + i128::from(self.year_offset())).to_string(),
        }
    }

    /// Label radius as a blend of the ring radii; years sit nearer the outer edge.
    pub fn label_radius(&self, config: &SealConfig) -> f64 {
        match self.kind() {
            SectorKind::Month => 0.6 * config.inner_radius + 0.4 * config.outer_radius,
            SectorKind::Year => 0.3 * config.inner_radius + 0.7 * config.outer_radius,
        }
    }

    /// Label rotation in [0, 360). Years are flipped so they read upright at the bottom.
    pub fn label_rotation(&self) -> f64 {
        let angle = self.label_angle();
        match self.kind() {
            SectorKind::Month => angle,
            SectorKind::Year => {
                let flipped = angle + 180.0;
                if flipped >= 360.0 {
                    flipped - 360.0
                } else {
                    flipped
                }
            }
        }
    }

    /// Stroke for the spoke at this sector's start, or None when the spoke is not drawn.
    ///
    /// In inverse mode the band edges (6 and 12) are left to the band outline
    /// and the spokes inside the band turn white.
    pub fn spoke_stroke(&self, year_inverse: bool) -> Option<Stroke> {
        let color = match (year_inverse, self.index) {
            (true, 6) | (true, 12) => return None,
            (true, 7..=11) => Color::White,
            _ => Color::Black,
        };
        Some(Stroke { color, width: STROKE_WIDTH_MM })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrimitiveCounts {
    pub circles: usize,
    pub lines: usize,
    pub arc_bands: usize,
    pub labels: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SealLayout {
    /// Half the canvas edge in mm
    pub half_width: f64,
    pub primitives: Vec<DrawPrimitive>,
}

impl SealLayout {
    /// Canvas edge length in mm
    pub fn width(&self) -> f64 {
        self.half_width * 2.0
    }

    /// min-x, min-y, width, height
    pub fn view_box(&self) -> [f64; 4] {
        let w = self.width();
        [-self.half_width, -self.half_width, w, w]
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.primitives.iter().filter_map(DrawPrimitive::as_label)
    }

    pub fn counts(&self) -> PrimitiveCounts {
        self.primitives.iter().fold(PrimitiveCounts::default(), |mut c, p| {
            match p {
                DrawPrimitive::Circle { .. } => c.circles += 1,
                DrawPrimitive::Line { .. } => c.lines += 1,
                DrawPrimitive::ArcBand(_) => c.arc_bands += 1,
                DrawPrimitive::Label(_) => c.labels += 1,
            }
            c
        })
    }
}

/// Lay out the whole seal.
///
/// Paint order: outer circle, year band (inverse mode), then per sector its
/// spoke followed by its label, and finally the center text.
pub fn layout_seal(config: &SealConfig) -> SealLayout {
    let mut primitives = Vec::with_capacity(2 * SECTOR_COUNT + 3);

    primitives.push(DrawPrimitive::Circle {
        center: Point2D::ORIGIN,
        radius: config.outer_radius,
        stroke: Stroke { color: Color::Black, width: STROKE_WIDTH_MM },
    });

    if config.year_inverse {
        primitives.push(DrawPrimitive::ArcBand(year_band(config)));
    }

    for sector in Sector::all() {
        if let Some(stroke) = sector.spoke_stroke(config.year_inverse) {
            let angle = sector.boundary_angle();
            primitives.push(DrawPrimitive::Line {
                start: point_on_circle(angle, config.inner_radius),
                end: point_on_circle(angle, config.outer_radius),
                stroke,
            });
        }
        primitives.push(DrawPrimitive::Label(sector_label(sector, config)));
    }

    if let Some(text) = config.center_label() {
        primitives.push(DrawPrimitive::Label(Label {
            text: text.to_string(),
            placement: None,
            weight: FontWeight::Bold,
            fill: Color::Black,
        }));
    }

    let layout = SealLayout {
        half_width: config.outer_radius + MARGIN_MM,
        primitives,
    };
    debug!(counts = ?layout.counts(), year_inverse = config.year_inverse, "seal laid out");
    layout
}

/// Solid band under the year sectors
fn year_band(config: &SealConfig) -> ArcBand {
    let start = 360.0 * FIRST_YEAR_SECTOR as f64 / SECTOR_COUNT as f64;
    let end = 360.0 * (LAST_YEAR_SECTOR + 1) as f64 / SECTOR_COUNT as f64;

    ArcBand {
        inner_start: point_on_circle(start, config.inner_radius),
        outer_start: point_on_circle(start, config.outer_radius),
        outer_end: point_on_circle(end, config.outer_radius),
        inner_end: point_on_circle(end, config.inner_radius),
        outer_radius: config.outer_radius,
        inner_radius: config.inner_radius,
        fill: Color::Black,
    }
}

fn sector_label(sector: Sector, config: &SealConfig) -> Label {
    let (weight, fill) = match sector.kind() {
        SectorKind::Month => (FontWeight::Normal, Color::Black),
        SectorKind::Year if config.year_inverse => (FontWeight::Bold, Color::White),
        SectorKind::Year => (FontWeight::Bold, Color::Black),
    };

    Label {
        text: sector.label_text(config.start_year),
        placement: Some(Placement {
            translate: point_on_circle(sector.label_angle(), sector.label_radius(config)),
            rotate: sector.label_rotation(),
        }),
        weight,
        fill,
    }
}
