// File: crates/thermo-core/tests/chart.rs
// Purpose: End-to-end chart building: domain padding, bar geometry, validation and SVG output.

mod common;

use common::{approx, dataset, AVG, MAX, MIN};
use thermo_core::scene::{AxisOrient, DrawCommand};
use thermo_core::{
    BarFill, BarId, ChartBuilder, ChartConfig, ChartError, Layer, MonthSeries, Paint, SeriesKind, ShapeIssue,
    TemperatureDataset,
};

#[test]
fn vertical_domain_is_padded_by_one() {
    let chart = ChartBuilder::default().build(&dataset()).expect("build");
    let range = chart.value_range();
    assert_eq!((range.lo, range.hi), (-3.0, 19.0));
    assert_eq!(chart.y_scale().domain(), (-4.0, 20.0));
    assert_eq!(chart.y_scale().range(), (300.0, 0.0));
}

#[test]
fn builds_one_bar_per_series_and_month() {
    let chart = ChartBuilder::default().build(&dataset()).unwrap();
    let bars = chart.bars();
    assert_eq!(bars.len(), 36);

    // grouped by series (max, avg, min), months ascending inside each group
    for (g, kind) in [SeriesKind::Max, SeriesKind::Avg, SeriesKind::Min].into_iter().enumerate() {
        for month in 0..12 {
            assert_eq!(bars[g * 12 + month].id, BarId::new(kind, month));
        }
    }

    let x = chart.x_scale();
    for b in bars {
        let band = x.band(b.id.month).unwrap();
        assert!(approx(b.x, band.start));
        assert!(approx(b.width, band.bandwidth));
        assert!(approx(b.y, chart.y_scale().map(b.value)));
        assert!(approx(b.y + b.height, 300.0), "bars grow from the baseline");
    }
}

#[test]
fn bar_values_follow_their_series() {
    let chart = ChartBuilder::default().build(&dataset()).unwrap();
    for month in 0..12 {
        assert_eq!(chart.bar(BarId::new(SeriesKind::Min, month)).unwrap().value, MIN[month]);
        assert_eq!(chart.bar(BarId::new(SeriesKind::Avg, month)).unwrap().value, AVG[month]);
        assert_eq!(chart.bar(BarId::new(SeriesKind::Max, month)).unwrap().value, MAX[month]);
    }
}

#[test]
fn heights_never_negative_within_domain() {
    let chart = ChartBuilder::default().build(&dataset()).unwrap();
    assert!(chart.bars().iter().all(|b| b.height >= 0.0));

    // lowest mappable value sits exactly on the baseline
    let y = chart.y_scale();
    let mut v = y.domain().0;
    while v <= y.domain().1 {
        assert!(300.0 - y.map(v) >= -1e-9, "value {v}");
        v += 0.5;
    }
    // the coldest observed value still has a visible bar thanks to the pad
    let coldest = chart.bar(BarId::new(SeriesKind::Min, 1)).unwrap();
    assert!(approx(coldest.height, 12.5));
}

#[test]
fn mismatched_lengths_fail_before_layout() {
    let short = &AVG[..11];
    let err = TemperatureDataset::try_new(&MIN, short, &MAX).unwrap_err();
    assert_eq!(
        err,
        ChartError::DataShape { series: "all", issue: ShapeIssue::Mismatched { min: 12, avg: 11, max: 12 } }
    );
    assert!(err.is_data_shape());

    let err = TemperatureDataset::try_new(&MIN[..11], &AVG[..11], &MAX[..11]).unwrap_err();
    assert_eq!(err, ChartError::DataShape { series: "min", issue: ShapeIssue::Length { expected: 12, found: 11 } });
    assert!(err.is_data_shape());
}

#[test]
fn non_finite_values_are_rejected_with_series_and_month() {
    let mut min = MIN;
    min[3] = f64::NAN;
    let err = TemperatureDataset::try_new(&min, &AVG, &MAX).unwrap_err();
    assert!(
        matches!(err, ChartError::DataShape { series: "min", issue: ShapeIssue::NonFinite { month: 3, value } } if value.is_nan()),
        "{err:?}"
    );

    let mut max = MAX;
    max[0] = f64::INFINITY;
    let err = TemperatureDataset::try_new(&MIN, &AVG, &max).unwrap_err();
    assert_eq!(
        err,
        ChartError::DataShape { series: "max", issue: ShapeIssue::NonFinite { month: 0, value: f64::INFINITY } }
    );
    assert!(err.to_string().contains("month 0"));

    // unchecked arrays are caught when the chart is built
    let mut avg = AVG;
    avg[11] = f64::NEG_INFINITY;
    let data = TemperatureDataset::from_series(MonthSeries::new(MIN), MonthSeries::new(avg), MonthSeries::new(MAX));
    let err = ChartBuilder::default().build(&data).unwrap_err();
    assert_eq!(
        err,
        ChartError::DataShape { series: "avg", issue: ShapeIssue::NonFinite { month: 11, value: f64::NEG_INFINITY } }
    );
}

#[test]
fn out_of_bounds_config_is_rejected() {
    let cases = [
        ChartConfig { domain_pad: -1.0, ..ChartConfig::default() },
        ChartConfig { width: 0.0, ..ChartConfig::default() },
        ChartConfig { height: f64::NAN, ..ChartConfig::default() },
        ChartConfig { padding: -5.0, ..ChartConfig::default() },
        ChartConfig { inner_padding: 1.0, ..ChartConfig::default() },
        ChartConfig { inner_padding: -0.1, ..ChartConfig::default() },
    ];
    for config in cases {
        let err = ChartBuilder::new(config.clone()).build(&dataset()).unwrap_err();
        assert!(matches!(err, ChartError::InvalidConfig(_)), "{config:?} -> {err:?}");
    }
    assert!(ChartConfig::default().validate().is_ok());
}

#[test]
fn flat_data_only_degenerates_without_pad() {
    let flat = [7.0; 12];
    let data = TemperatureDataset::try_new(&flat, &flat, &flat).unwrap();

    let padded = ChartBuilder::default().build(&data).expect("pad keeps the domain open");
    assert_eq!(padded.y_scale().domain(), (6.0, 8.0));

    let no_pad = ChartConfig { domain_pad: 0.0, ..ChartConfig::default() };
    let err = ChartBuilder::new(no_pad).build(&data).unwrap_err();
    assert_eq!(err, ChartError::DegenerateDomain { lo: 7.0, hi: 7.0 });
}

#[test]
fn bars_share_one_gradient_by_default() {
    let chart = ChartBuilder::default().build(&dataset()).unwrap();
    let scene = chart.scene();
    assert_eq!(scene.gradient.id, "barGradient");
    let fills: Vec<&Paint> = scene
        .layer(Layer::Bars)
        .filter_map(|c| match c {
            DrawCommand::Rect(r) => Some(&r.fill),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 36);
    assert!(fills.iter().all(|p| **p == Paint::Gradient("barGradient".into())));
}

#[test]
fn per_value_fill_uses_palette() {
    let config = ChartConfig { bar_fill: BarFill::PerValue, ..ChartConfig::default() };
    let chart = ChartBuilder::new(config).build(&dataset()).unwrap();
    let hottest = thermo_core::color_at(0.0);
    let rects: Vec<_> = chart
        .scene()
        .layer(Layer::Bars)
        .filter_map(|c| match c {
            DrawCommand::Rect(r) => Some(r),
            _ => None,
        })
        .collect();
    let july_max = rects.iter().find(|r| r.bar.map(|(id, _)| id) == Some(BarId::new(SeriesKind::Max, 6))).unwrap();
    assert_eq!(july_max.fill, Paint::Solid(hottest));
}

#[test]
fn axes_titles_and_legend_are_emitted() {
    let chart = ChartBuilder::default().build(&dataset()).unwrap();
    let scene = chart.scene();

    let axes: Vec<_> = scene
        .layer(Layer::Axes)
        .filter_map(|c| match c {
            DrawCommand::Axis(a) => Some(a),
            _ => None,
        })
        .collect();
    assert_eq!(axes.len(), 2);
    let months = axes.iter().find(|a| a.orient == AxisOrient::Bottom).unwrap();
    let labels: Vec<&str> = months.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["Jan.", "Feb.", "Mar.", "Apr.", "May", "Jun.", "Jul.", "Aug.", "Sep.", "Oct.", "Nov.", "Dec."]);
    assert_eq!(months.offset, 300.0);

    let texts: Vec<&str> = scene.texts().map(|t| t.text.as_str()).collect();
    for want in ["Months", "Temperatures", "Hot", "Cold"] {
        assert!(texts.contains(&want), "missing {want}");
    }

    assert_eq!(scene.legend_origin, (440.0, 0.0));
    let swatches: Vec<_> = scene
        .layer(Layer::Legend)
        .filter_map(|c| match c {
            DrawCommand::Rect(r) => Some(r),
            _ => None,
        })
        .collect();
    assert_eq!(swatches.len(), 2);
    assert_eq!((swatches[0].width, swatches[0].height, swatches[0].y), (65.0, 20.0, 0.0));
    assert_eq!(swatches[1].y, 20.0);
    assert_eq!(swatches[0].fill, Paint::Solid(ChartConfig::default().gradient.hot));
    assert_eq!(swatches[1].fill, Paint::Solid(ChartConfig::default().gradient.cold));
}

#[test]
fn svg_document_carries_gradient_and_bar_bindings() {
    let chart = ChartBuilder::default().build(&dataset()).unwrap();
    let svg = chart.to_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="-50 -50 600 400""#));
    assert!(svg.contains(r#"<linearGradient id="barGradient" gradientUnits="userSpaceOnUse" x1="0" y1="300" x2="0" y2="0">"#));
    assert!(svg.contains(r##"<stop offset="0%" stop-color="#252850"/><stop offset="100%" stop-color="#fe0000"/>"##));
    assert_eq!(svg.matches(r#"fill="url(#barGradient)""#).count(), 36);
    assert!(svg.contains(r#"data-series="avg" data-month="5" data-value="14.3""#));
    assert!(svg.contains(r#"<g class="legend" transform="translate(440,0)" stroke="rgb(255, 255, 255)" stroke-width="0.5px">"#));
    assert!(svg.contains(">Temperatures</text>"));
    assert!(svg.contains(">Dec.</text>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn render_to_svg_writes_file() {
    let chart = ChartBuilder::default().build(&dataset()).unwrap();
    let out = std::path::PathBuf::from("target/test_out/chart.svg");
    chart.render_to_svg(&out).expect("write svg");
    let written = std::fs::read_to_string(&out).expect("read back");
    assert_eq!(written, chart.to_svg());
}
