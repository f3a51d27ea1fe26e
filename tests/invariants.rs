//! Seal Invariant Tests
//!
//! End-to-end guarantees of layout and pipeline.

use pruefsiegel::{
    layout_seal, Color, DrawPrimitive, FontWeight, SealConfig, SealError, SealPipeline,
};

fn label_texts(cfg: &SealConfig) -> Vec<String> {
    layout_seal(cfg).labels().map(|l| l.text.clone()).collect()
}

#[test]
fn invariant_default_scenario() {
    let layout = layout_seal(&SealConfig::default());
    let counts = layout.counts();

    assert_eq!(counts.circles, 1);
    assert_eq!(counts.lines, 18);
    assert_eq!(counts.arc_bands, 0);
    assert_eq!(counts.labels, 18);

    for p in &layout.primitives {
        match p {
            DrawPrimitive::Line { stroke, .. } => assert_eq!(stroke.color, Color::Black),
            DrawPrimitive::Label(l) => {
                assert_eq!(l.fill, Color::Black);
                assert!(l.placement.is_some());
            }
            _ => {}
        }
    }

    let mut texts = label_texts(&SealConfig::default());
    texts.sort_by_key(|t| t.parse::<i64>().unwrap());
    let expected: Vec<String> = (1..=12).chain(20..=25).map(|n| n.to_string()).collect();
    assert_eq!(texts, expected);
}

#[test]
fn invariant_labels_in_sector_order() {
    let texts = label_texts(&SealConfig::default().with_start_year(7));
    let expected = [
        "7", "8", "9", "10", "11", "12", // sectors 0..=5
        "12", "11", "10", "9", "8", "7", // years 6..=11
        "1", "2", "3", "4", "5", "6", // sectors 12..=17
    ];
    assert_eq!(texts, expected);
}

#[test]
fn invariant_inverse_scenario() {
    let cfg = SealConfig::default().with_year_inverse(true);
    let layout = layout_seal(&cfg);
    let counts = layout.counts();

    assert_eq!(counts.arc_bands, 1);
    assert_eq!(counts.lines, 16);
    assert_eq!(counts.labels, 18);

    // band sits right above the circle, under every spoke and label
    assert!(layout.primitives[0].is_circle());
    assert!(layout.primitives[1].is_arc_band());
    assert!(layout.primitives[2..].iter().all(|p| !p.is_arc_band()));

    let white_lines = layout
        .primitives
        .iter()
        .filter(|p| matches!(p, DrawPrimitive::Line { stroke, .. } if stroke.color == Color::White))
        .count();
    assert_eq!(white_lines, 5);

    for label in layout.labels() {
        let year: i64 = label.text.parse().unwrap();
        if (20..=25).contains(&year) && label.weight == FontWeight::Bold {
            assert_eq!(label.fill, Color::White);
        } else {
            assert_eq!(label.fill, Color::Black);
        }
    }
}

#[test]
fn invariant_center_text() {
    let cfg = SealConfig::default().with_center_text("ABC");
    let layout = layout_seal(&cfg);
    assert_eq!(layout.counts().labels, 19);

    let center: Vec<_> = layout.labels().filter(|l| l.placement.is_none()).collect();
    assert_eq!(center.len(), 1);
    assert_eq!(center[0].text, "ABC");
    assert_eq!(center[0].weight, FontWeight::Bold);

    // drawn last
    assert_eq!(layout.primitives.last().and_then(|p| p.as_label()), Some(center[0]));
}

#[test]
fn invariant_year_rotations_normalized() {
    for start in [-5, 0, 20, 2024] {
        let layout = layout_seal(&SealConfig::default().with_start_year(start));
        for label in layout.labels() {
            let rotate = label.placement.unwrap().rotate;
            assert!((0.0..360.0).contains(&rotate));
        }
    }
}

#[test]
fn invariant_labels_within_ring() {
    let cfg = SealConfig::with_radii(42.0, 31.0);
    for label in layout_seal(&cfg).labels() {
        let r = label.placement.unwrap().translate.length();
        assert!(r > cfg.inner_radius && r < cfg.outer_radius, "label {} at {r}", label.text);
    }
}

#[test]
fn invariant_invalid_radii_rejected() {
    let pipeline = SealPipeline::new();
    let result = pipeline.render(&SealConfig::with_radii(20.0, 30.0));

    let err = result.unwrap_err();
    assert!(matches!(err, SealError::InvalidConfig(_)));
    assert!(err.to_string().contains("Invalid configuration"));
}

#[test]
fn invariant_write_creates_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seal.svg");
    let cfg = SealConfig::default().with_year_inverse(true).with_center_text("TÜV");

    let seal = SealPipeline::new().write(&cfg, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, seal.document);
    assert!(written.contains("<path "));
    assert!(written.contains("TÜV"));

    let summary = seal.summary(&path);
    assert_eq!(summary.width_mm, 70.0);
    assert_eq!(summary.primitives.lines, 16);
    assert_eq!(summary.primitives.labels, 19);
    assert_eq!(summary.document_sha256.len(), 64);
}

#[test]
fn invariant_output_deterministic() {
    let pipeline = SealPipeline::new();
    let cfg = SealConfig::default().with_start_year(24);

    let a = pipeline.render(&cfg).unwrap();
    let b = pipeline.render(&cfg).unwrap();
    assert_eq!(a.document, b.document);
    assert_eq!(a.document_sha256, b.document_sha256);
    assert_eq!(a.layout_sha256, b.layout_sha256);
}

#[test]
fn invariant_unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("seal.svg");

    let err = SealPipeline::new().write(&SealConfig::default(), &path).unwrap_err();
    match err {
        SealError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io error, got {other}"),
    }
}

#[test]
fn invariant_whitespace_center_text_is_drawn() {
    let layout = layout_seal(&SealConfig::default().with_center_text("   "));
    assert_eq!(layout.counts().labels, 19);

    let layout = layout_seal(&SealConfig::default().with_center_text(""));
    assert_eq!(layout.counts().labels, 18);
}

#[test]
fn invariant_numeric_edges_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = SealPipeline::new();

    for cfg in [
        SealConfig::default().with_start_year(i64::MAX),
        SealConfig::with_radii(1e305, 1.0),
        SealConfig::with_radii(f64::INFINITY, 20.0),
    ] {
        let path = dir.path().join("edge.svg");
        let err = pipeline.write(&cfg, &path).unwrap_err();
        assert!(matches!(err, SealError::InvalidConfig(_)), "{cfg:?}: {err}");
        assert!(!path.exists());
    }

    // the layout alone never overflows on extreme years
    let layout = layout_seal(&SealConfig::default().with_start_year(i64::MAX));
    assert!(layout.labels().any(|l| l.text == "9223372036854775812"));
}

#[test]
fn invariant_large_valid_seal_is_finite() {
    let seal = SealPipeline::new()
        .render(&SealConfig::with_radii(10_000.0, 9_000.0))
        .unwrap();
    assert!(!seal.document.contains("inf"));
    assert!(!seal.document.contains("NaN"));
}
