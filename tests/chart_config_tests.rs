use line_profile::ProfileError;
use line_profile::api::{PlotMargins, ProfileChartConfig};
use line_profile::core::Viewport;

#[test]
fn defaults_match_chart_layout_constants() {
    let config = ProfileChartConfig::default();
    assert_eq!(
        config.margins,
        PlotMargins {
            left: 44.0,
            right: 10.0,
            top: 10.0,
            bottom: 28.0,
        }
    );
    assert_eq!(config.min_canvas, Viewport::new(400, 240));
    assert_eq!(config.y_ticks, vec![0, 64, 128, 192, 255]);
    assert_eq!(config.x_target_ticks, 10);
    assert_eq!(config.series_stroke_width, 1.5);
    config.validate().expect("defaults are valid");
}

#[test]
fn json_round_trip_preserves_config() {
    let config = ProfileChartConfig::default()
        .with_y_ticks(vec![0, 100, 200])
        .with_series_stroke_width(2.0);
    let json = config.to_json_pretty().expect("serialize");
    let restored = ProfileChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let restored = ProfileChartConfig::from_json_str(r#"{"x_target_ticks": 5}"#).expect("parse");
    assert_eq!(restored.x_target_ticks, 5);
    assert_eq!(restored.margins, ProfileChartConfig::default().margins);
    assert_eq!(restored.min_canvas, Viewport::new(400, 240));
}

#[test]
fn invalid_json_config_is_rejected() {
    assert!(matches!(
        ProfileChartConfig::from_json_str("{not json"),
        Err(ProfileError::InvalidData(_))
    ));
    assert!(ProfileChartConfig::from_json_str(r#"{"x_target_ticks": 0}"#).is_err());
    assert!(ProfileChartConfig::from_json_str(r#"{"y_ticks": []}"#).is_err());
}

#[test]
fn minimum_canvas_must_exceed_margins() {
    let config = ProfileChartConfig::default().with_min_canvas(Viewport::new(54, 240));
    assert!(matches!(
        config.validate(),
        Err(ProfileError::InvalidViewport {
            width: 54,
            height: 240
        })
    ));

    let config = ProfileChartConfig::default().with_margins(PlotMargins {
        left: -1.0,
        right: 10.0,
        top: 10.0,
        bottom: 28.0,
    });
    assert!(config.validate().is_err());
}

#[test]
fn non_positive_stroke_is_rejected() {
    let config = ProfileChartConfig::default().with_series_stroke_width(0.0);
    assert!(config.validate().is_err());
    let config = ProfileChartConfig::default().with_series_stroke_width(f64::NAN);
    assert!(config.validate().is_err());
}

#[test]
fn maximum_canvas_must_cover_minimum() {
    let config = ProfileChartConfig::default();
    assert_eq!(config.max_canvas, Viewport::new(8192, 8192));

    let config = config.with_max_canvas(Viewport::new(300, 4000));
    assert!(matches!(
        config.validate(),
        Err(ProfileError::InvalidViewport {
            width: 300,
            height: 4000
        })
    ));
}
