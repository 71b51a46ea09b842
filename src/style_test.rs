#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// StrokeStyle
// =============================================================

#[test]
fn default_style_is_solid() {
    assert_eq!(StrokeStyle::default(), StrokeStyle::Solid);
}

#[test]
fn solid_has_no_dash_and_full_width() {
    assert!(StrokeStyle::Solid.dash_pattern(4.0).is_empty());
    assert_eq!(StrokeStyle::Solid.width_factor(), 1.0);
}

#[test]
fn dashed_is_three_on_two_off() {
    assert_eq!(StrokeStyle::Dashed.dash_pattern(4.0), vec![12.0, 8.0]);
    assert_eq!(StrokeStyle::Dashed.width_factor(), 1.0);
}

#[test]
fn dotted_is_one_on_one_off() {
    assert_eq!(StrokeStyle::Dotted.dash_pattern(3.0), vec![3.0, 3.0]);
    assert_eq!(StrokeStyle::Dotted.width_factor(), 1.0);
}

#[test]
fn double_is_half_width_without_dash() {
    assert!(StrokeStyle::Double.dash_pattern(4.0).is_empty());
    assert_eq!(StrokeStyle::Double.width_factor(), 0.5);
}

#[test]
fn parse_known_names() {
    assert_eq!("solid".parse::<StrokeStyle>(), Ok(StrokeStyle::Solid));
    assert_eq!("dashed".parse::<StrokeStyle>(), Ok(StrokeStyle::Dashed));
    assert_eq!("dotted".parse::<StrokeStyle>(), Ok(StrokeStyle::Dotted));
    assert_eq!("double".parse::<StrokeStyle>(), Ok(StrokeStyle::Double));
}

#[test]
fn parse_ignores_case_and_whitespace() {
    assert_eq!(" Dashed ".parse::<StrokeStyle>(), Ok(StrokeStyle::Dashed));
}

#[test]
fn parse_unknown_name_is_error() {
    assert_eq!(
        "wavy".parse::<StrokeStyle>(),
        Err(StyleError::UnknownStrokeStyle("wavy".into()))
    );
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&StrokeStyle::Double).unwrap(), "\"double\"");
    let parsed: StrokeStyle = serde_json::from_str("\"dotted\"").unwrap();
    assert_eq!(parsed, StrokeStyle::Dotted);
}

// =============================================================
// StyleParams
// =============================================================

#[test]
fn default_params_use_defaults() {
    let params = StyleParams::default();
    assert_eq!(params.color, DEFAULT_COLOR);
    assert_eq!(params.brush_size, DEFAULT_BRUSH_SIZE_PX);
    assert_eq!(params.stroke_style, StrokeStyle::Solid);
}

#[test]
fn line_width_applies_width_factor() {
    let mut params = StyleParams { brush_size: 6.0, ..StyleParams::default() };
    assert_eq!(params.line_width(), 6.0);
    params.stroke_style = StrokeStyle::Double;
    assert_eq!(params.line_width(), 3.0);
}

#[test]
fn params_dash_pattern_follows_brush_size() {
    let params = StyleParams {
        brush_size: 2.0,
        stroke_style: StrokeStyle::Dashed,
        ..StyleParams::default()
    };
    assert_eq!(params.dash_pattern(), vec![6.0, 4.0]);
}

#[test]
fn set_brush_size_accepts_positive() {
    let mut params = StyleParams::default();
    params.set_brush_size(7.5).unwrap();
    assert_eq!(params.brush_size, 7.5);
}

#[test]
fn set_brush_size_rejects_zero_negative_and_nan() {
    let mut params = StyleParams::default();
    assert_eq!(params.set_brush_size(0.0), Err(StyleError::InvalidBrushSize(0.0)));
    assert!(params.set_brush_size(-1.0).is_err());
    assert!(params.set_brush_size(f64::NAN).is_err());
    assert!(params.set_brush_size(f64::INFINITY).is_err());
    assert_eq!(params.brush_size, DEFAULT_BRUSH_SIZE_PX);
}
