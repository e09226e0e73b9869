//! Renders the three dashboard charts to SVG and PNG in the current
//! directory, exercising a few interaction states along the way.

use anyhow::Context;
use aqi_dash::{BandScale, Chart, InputEvent};
use log::info;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 480;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Single monitor, resting state: clean line, no chrome.
    let single = Chart::single(aqi_dash::demo::single_series());
    write(&single, "aqi-single")?;

    // Comparison chart with the pointer over it and one station focused.
    let mut compare = Chart::compare(aqi_dash::demo::compare_series());
    compare.handle(InputEvent::PointerEnter);
    compare.handle(InputEvent::LegendActivate(1));
    write(&compare, "aqi-compare")?;

    // Band overlay chart on the extended 0-500 scale.
    let bands = Chart::bands_only(aqi_dash::demo::single_series()).with_scale(BandScale::Extended);
    write(&bands, "aqi-bands")?;

    Ok(())
}

fn write(chart: &Chart, stem: &str) -> anyhow::Result<()> {
    for ext in ["svg", "png"] {
        let path = format!("{stem}.{ext}");
        chart
            .render_to_file(WIDTH, HEIGHT, &path)
            .with_context(|| format!("rendering {path}"))?;
        info!("wrote {path}");
    }
    Ok(())
}
