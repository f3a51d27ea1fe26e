//! SVG rendering of a [`SealLayout`]
//!
//! Primitives map one to one onto `svg` elements. Numbers pass through
//! [`num`] / [`coord`] so the same layout always yields the same bytes.

use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path, Text};
use svg::Document;

use crate::layout::{SealLayout, FONT_SIZE};
use crate::primitives::{ArcBand, DrawPrimitive, FontWeight, Label, Stroke};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const FONT_FAMILY: &str = "sans-serif";

pub fn build_document(layout: &SealLayout) -> Document {
    let size = format!("{}mm", num(layout.width()));
    let view_box = layout.view_box().map(num).join(" ");

    let document = Document::new()
        .set("xmlns", SVG_NS)
        .set("xmlns:xlink", XLINK_NS)
        .set("version", "1.1")
        .set("baseProfile", "full")
        .set("width", size.clone())
        .set("height", size)
        .set("viewBox", view_box);

    layout.primitives.iter().fold(document, add_primitive)
}

/// Render a full standalone SVG document.
pub fn render_document(layout: &SealLayout) -> String {
    build_document(layout).to_string()
}

fn add_primitive(document: Document, primitive: &DrawPrimitive) -> Document {
    match primitive {
        DrawPrimitive::Circle { center, radius, stroke } => document.add(with_stroke(
            Circle::new()
                .set("cx", num(center.x))
                .set("cy", num(center.y))
                .set("r", num(*radius))
                .set("fill", "none"),
            stroke,
        )),
        DrawPrimitive::Line { start, end, stroke } => document.add(with_stroke(
            Line::new()
                .set("x1", num(start.x))
                .set("y1", num(start.y))
                .set("x2", num(end.x))
                .set("y2", num(end.y))
                .set("fill", "none"),
            stroke,
        )),
        DrawPrimitive::ArcBand(band) => document.add(
            Path::new()
                .set("d", band_data(band))
                .set("fill", band.fill.as_rgb())
                .set("stroke", "none"),
        ),
        DrawPrimitive::Label(label) => document.add(label_text(label)),
    }
}

fn with_stroke<N: svg::Node>(mut node: N, stroke: &Stroke) -> N {
    node.assign("stroke", stroke.color.as_rgb());
    node.assign("stroke-width", num(stroke.width));
    node
}

/// Band outline; the outer arc sweeps clockwise, the inner arc back counter-clockwise.
pub fn band_data(band: &ArcBand) -> Data {
    let (ro, ri) = (coord(band.outer_radius), coord(band.inner_radius));
    Data::new()
        .move_to((coord(band.inner_start.x), coord(band.inner_start.y)))
        .line_to((coord(band.outer_start.x), coord(band.outer_start.y)))
        .elliptical_arc_to((ro, ro, 0.0, 0.0, 1.0, coord(band.outer_end.x), coord(band.outer_end.y)))
        .line_to((coord(band.inner_end.x), coord(band.inner_end.y)))
        .elliptical_arc_to((ri, ri, 0.0, 0.0, 0.0, coord(band.inner_start.x), coord(band.inner_start.y)))
        .close()
}

fn label_text(label: &Label) -> Text {
    let mut style = format!("font-size:{}px; font-family:{FONT_FAMILY}", num(FONT_SIZE));
    if label.weight == FontWeight::Bold {
        style.push_str("; font-weight:bold");
    }

    let text = Text::new(label.text.as_str())
        .set("fill", label.fill.as_rgb())
        .set("style", style)
        .set("text-anchor", "middle");

    match label.placement {
        Some(p) => text.set(
            "transform",
            format!(
                "translate({},{}) rotate({})",
                num(p.translate.x),
                num(p.translate.y),
                num(p.rotate)
            ),
        ),
        None => text,
    }
}

fn round4(v: f64) -> f64 {
    // beyond this the scaled value loses the fraction anyway and may overflow
    if !(v.abs() < 1e11) {
        return v;
    }
    let rounded = (v * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// At most four decimals, trailing zeros dropped, no negative zero.
pub fn num(v: f64) -> String {
    let rounded = round4(v);
    if !rounded.is_finite() || rounded.abs() >= 1e11 {
        return format!("{rounded}");
    }
    let s = format!("{rounded:.4}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Path data coordinate, rounded like [`num`]
pub fn coord(v: f64) -> f32 {
    round4(v) as f32
}
