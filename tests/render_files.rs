use aqi_dash::{BandScale, Chart, InputEvent, Rgb8, Sample, Series};

use std::fs;
use std::path::Path;

fn write_and_check(chart: &Chart, path: &Path) {
    chart
        .render_to_file(640, 360, path)
        .unwrap_or_else(|e| panic!("render {path:?} failed: {e}"));
    let meta = fs::metadata(path).expect("output file missing");
    assert!(meta.len() > 0, "output file {path:?} is empty");
}

#[test]
fn all_chart_kinds_render_to_svg_and_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let charts = [
        ("single", Chart::single(aqi_dash::demo::single_series())),
        ("compare", Chart::compare(aqi_dash::demo::compare_series())),
        (
            "bands",
            Chart::bands_only(aqi_dash::demo::single_series())
                .with_scale(BandScale::Extended),
        ),
    ];
    for (name, mut chart) in charts {
        chart.handle(InputEvent::PointerEnter);
        write_and_check(&chart, &dir.path().join(format!("{name}.svg")));
        write_and_check(&chart, &dir.path().join(format!("{name}.png")));
    }
}

#[test]
fn degenerate_inputs_render_without_error() {
    let dir = tempfile::tempdir().expect("tempdir");

    let empty = Chart::compare(Vec::new());
    write_and_check(&empty, &dir.path().join("empty.svg"));

    let lonely = Chart::single(vec![Series::new(
        "one sample",
        Rgb8::new(0x60, 0xa5, 0xfa),
        vec![Sample::new(12.0, 80.0)],
    )]);
    write_and_check(&lonely, &dir.path().join("lonely.png"));

    let flat = Chart::single(vec![Series::new(
        "flat",
        Rgb8::new(0x34, 0xd3, 0x99),
        (0..=24).map(|h| Sample::new(h as f64, 42.0)).collect(),
    )]);
    write_and_check(&flat, &dir.path().join("flat.svg"));
}

#[test]
fn zoomed_chart_renders_clipped_window() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut chart = Chart::compare(aqi_dash::demo::compare_series());
    chart.handle(InputEvent::GestureStart);
    chart.handle(InputEvent::ZoomWindow {
        x: aqi_dash::Domain::new(8.0, 18.0),
        y: aqi_dash::Domain::new(50.0, 200.0),
    });
    chart.handle(InputEvent::GestureEnd);
    write_and_check(&chart, &dir.path().join("zoomed.svg"));
}
