use barchart_rs::anim::{AnimationSpec, Easing};
use barchart_rs::api::BarChartConfig;
use barchart_rs::core::{ChartStyle, Viewport};
use barchart_rs::render::Color;

#[test]
fn config_json_round_trip() {
    let config = BarChartConfig::new(Viewport::new(1024, 768))
        .with_style(ChartStyle {
            bar_area_height_px: 300.0,
            value_color: Color::rgb(0.2, 0.6, 0.3),
            ..ChartStyle::default()
        })
        .with_animation(AnimationSpec {
            stagger_ms: 150,
            duration_ms: 800,
            easing: Easing::SmoothStep,
        });

    let json = config.to_json_pretty().expect("config should serialize");
    let restored = BarChartConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn partial_config_json_falls_back_to_defaults() {
    let json = r#"{ "viewport": { "width": 800, "height": 600 } }"#;
    let config = BarChartConfig::from_json_str(json).expect("partial config");

    assert_eq!(config.style, ChartStyle::default());
    assert_eq!(config.animation, AnimationSpec::default());
    assert_eq!(config.animation.stagger_ms, 100);
    assert_eq!(config.animation.duration_ms, 1000);
}

#[test]
fn invalid_config_json_is_rejected_on_parse() {
    let json = r#"{ "viewport": { "width": 0, "height": 600 } }"#;
    BarChartConfig::from_json_str(json).expect_err("zero-width viewport must be rejected");
}

#[test]
fn config_validation_rejects_zero_duration() {
    let config = BarChartConfig::new(Viewport::new(800, 600)).with_animation(AnimationSpec {
        duration_ms: 0,
        ..AnimationSpec::default()
    });
    config.validate().expect_err("zero duration must be rejected");
}

#[test]
fn config_validation_rejects_bad_colors() {
    let config = BarChartConfig::new(Viewport::new(800, 600)).with_style(ChartStyle {
        track_color: Color::rgb(1.5, 0.0, 0.0),
        ..ChartStyle::default()
    });
    let err = config.validate().expect_err("out-of-range channel");
    assert!(format!("{err}").contains("color channel"));
}
