//! Scene assembly and file rendering.
//!
//! `build_scene` turns series data plus interaction state into an ordered
//! command list with a fixed layer order: bands, grid, series lines, point
//! markers, end labels, axis text, legend. The plotters adapter then plays
//! a scene onto an **SVG** or **PNG** surface; the builder itself never
//! assumes which.

pub mod legend;
pub mod plotters_adapter;
pub mod scene;
pub mod text;

pub use scene::{DrawCmd, HAlign, Scene, Stroke, VAlign};

use crate::chart::ChartKind;
use crate::domain::{self, Viewport};
use crate::layout::{
    self, LABEL_FONT_PX, LABEL_HEIGHT, LEADER_GAP, LayoutBounds, MIN_LABEL_GAP,
};
use crate::models::{BandScale, Rgb8, Series};
use crate::state::ChartState;
use crate::style::style_for;

use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use thiserror::Error;

/// Outer margin around the plot, px.
const MARGIN: f64 = 16.0;
/// Width reserved on the left for y tick labels, px.
const LEFT_GUTTER: f64 = 48.0;
/// Height reserved below the plot for x tick labels, px.
const X_AXIS_HEIGHT: f64 = 36.0;
/// Height of the legend strip under the compare chart, px.
const LEGEND_STRIP_H: f64 = 30.0;

/// Hours that get a vertical gridline and a tick label.
const X_TICKS: [f64; 7] = [0.0, 4.0, 8.0, 12.0, 16.0, 20.0, 24.0];

const AXIS_COLOR: Rgb8 = Rgb8::new(0x94, 0xa3, 0xb8);
const TICK_COLOR: Rgb8 = Rgb8::new(0x33, 0x41, 0x55);
const GRID_COLOR: Rgb8 = Rgb8::new(0x33, 0x41, 0x55);
const LEADER_COLOR: Rgb8 = Rgb8::new(0x33, 0x41, 0x55);
const PILL_BG: Rgb8 = Rgb8::new(0x11, 0x18, 0x27);
const WHITE_TEXT: Rgb8 = Rgb8::new(0xff, 0xff, 0xff);
const BLACK: Rgb8 = Rgb8::new(0x00, 0x00, 0x00);

const BAND_FILL_ALPHA: f64 = 0.20;
const X_GRID_ALPHA: f64 = 0.10;
const Y_GRID_ALPHA: f64 = 0.18;
/// On/off pattern for y gridlines.
const Y_GRID_DASH: [u32; 2] = [3, 5];

const TICK_FONT_PX: u32 = 12;
const BAND_FONT_PX: u32 = 12;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing backend error: {0}")]
    Backend(String),
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

/// Plot area and optional legend strip for a surface size.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub plot: Rect,
    pub legend: Option<Rect>,
}

/// Split the surface into plot, axis gutters, and (compare only) a legend
/// strip along the bottom.
pub fn compute_frame(width: u32, height: u32, kind: ChartKind) -> Frame {
    let w = width as f64;
    let h = height as f64;
    let legend_h = if kind == ChartKind::Compare {
        LEGEND_STRIP_H
    } else {
        0.0
    };
    let plot = Rect {
        x: MARGIN + LEFT_GUTTER,
        y: MARGIN,
        width: (w - MARGIN * 2.0 - LEFT_GUTTER).max(10.0),
        height: (h - MARGIN * 2.0 - X_AXIS_HEIGHT - legend_h).max(10.0),
    };
    let legend = (legend_h > 0.0).then(|| Rect {
        x: plot.x,
        y: h - MARGIN - LEGEND_STRIP_H,
        width: plot.width,
        height: LEGEND_STRIP_H,
    });
    Frame { plot, legend }
}

/// Build the frame description for one chart render pass.
///
/// Pure with respect to its inputs; per-series styling is resolved once up
/// front and the layers only read the resolved records.
pub fn build_scene(
    series: &[Series],
    state: &ChartState,
    viewport: Viewport,
    scale: BandScale,
    kind: ChartKind,
    width: u32,
    height: u32,
) -> Scene {
    let frame = compute_frame(width, height, kind);
    let plot = frame.plot;
    let mut sc = Scene::new(width, height);

    let vx = viewport.x;
    let vy = viewport.y;
    let project = |hour: f64, value: f64| -> (f64, f64) {
        let tx = (hour - vx.min) / vx.span().max(1e-9);
        let ty = (value - vy.min) / vy.span().max(1e-9);
        (plot.x + tx * plot.width, plot.y + (1.0 - ty) * plot.height)
    };

    let records: Vec<_> = series
        .iter()
        .enumerate()
        .map(|(id, s)| style_for(id, s, state))
        .collect();

    let aux = state.aux_layers_visible();

    // Layer 1: AQI bands.
    if aux {
        let mut lower: f64 = 0.0;
        for band in scale.bands() {
            let lo = lower.max(vy.min);
            let hi = band.max.min(vy.max);
            lower = band.max;
            if hi <= lo {
                continue;
            }
            let (_, y_top) = project(vx.min, hi);
            let (_, y_bot) = project(vx.min, lo);
            sc.push(DrawCmd::FillRect {
                x: plot.x,
                y: y_top,
                width: plot.width,
                height: y_bot - y_top,
                color: band.color,
                alpha: BAND_FILL_ALPHA,
            });
            if y_bot - y_top >= BAND_FONT_PX as f64 + 2.0 {
                sc.push(DrawCmd::Text {
                    text: scale.caption_for(band).to_string(),
                    x: plot.x + 8.0,
                    y: (y_top + y_bot) / 2.0,
                    size_px: BAND_FONT_PX,
                    color: BLACK,
                    alpha: 0.75,
                    h_align: HAlign::Left,
                    v_align: VAlign::Middle,
                });
            }
        }
    }

    // Layer 2: gridlines. Grid visibility is purely an interaction concern;
    // it never feeds back into the domain bounds.
    if aux {
        for t in X_TICKS {
            if !vx.contains(t) {
                continue;
            }
            let (gx, _) = project(t, vy.min);
            sc.push(DrawCmd::Line {
                x0: gx,
                y0: plot.y,
                x1: gx,
                y1: plot.bottom(),
                stroke: Stroke::new(GRID_COLOR, 1.0).with_alpha(X_GRID_ALPHA),
            });
        }
        for v in domain::grid_values(vy) {
            let (_, gy) = project(vx.min, v);
            let row = [(plot.x, gy), (plot.right(), gy)];
            for ((x0, y0), (x1, y1)) in dash_segments(&row, &Y_GRID_DASH) {
                sc.push(DrawCmd::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    stroke: Stroke::new(GRID_COLOR, 1.0).with_alpha(Y_GRID_ALPHA),
                });
            }
        }
    }

    // Layer 3: series lines.
    for (s, rec) in series.iter().zip(&records) {
        if !s.is_drawable() || !rec.line_visible() {
            continue;
        }
        let pixels: Vec<(f64, f64)> = s
            .samples
            .iter()
            .map(|p| project(p.hour, p.value))
            .collect();

        if kind == ChartKind::Single {
            // The single monitor colors each segment by the severity of its
            // right endpoint, approximating an AQI gradient along the line.
            for (i, w) in pixels.windows(2).enumerate() {
                let Some((a, b)) = clip_segment(w[0], w[1], plot) else {
                    continue;
                };
                let color = scale.color_for(s.samples[i + 1].value);
                sc.push(DrawCmd::Line {
                    x0: a.0,
                    y0: a.1,
                    x1: b.0,
                    y1: b.1,
                    stroke: Stroke::new(color, rec.line_width).with_alpha(rec.line_alpha),
                });
            }
        } else {
            let stroke = Stroke::new(rec.color, rec.line_width).with_alpha(rec.line_alpha);
            for run in clipped_runs(&pixels, plot) {
                if rec.dash.is_empty() {
                    sc.push(DrawCmd::Polyline {
                        points: run,
                        stroke,
                    });
                } else {
                    for ((x0, y0), (x1, y1)) in dash_segments(&run, &rec.dash) {
                        sc.push(DrawCmd::Line {
                            x0,
                            y0,
                            x1,
                            y1,
                            stroke,
                        });
                    }
                }
            }
        }
    }

    // Layer 4: point markers.
    for (s, rec) in series.iter().zip(&records) {
        if rec.point_radius <= 0.0 || !s.is_drawable() {
            continue;
        }
        for p in &s.samples {
            if !vx.contains(p.hour) || !vy.contains(p.value) {
                continue;
            }
            let (mx, my) = project(p.hour, p.value);
            sc.push(DrawCmd::Marker {
                x: mx,
                y: my,
                radius: rec.point_radius,
                shape: rec.marker,
                color: rec.color,
            });
        }
    }

    // Layer 5: end-of-line labels.
    let anchors = layout::anchors_from_series(series, state, &viewport, project);
    let bounds = LayoutBounds {
        top: plot.y + 12.0,
        bottom: plot.bottom() - 12.0,
        right_edge: plot.right(),
    };
    for label in layout::layout(&anchors, bounds, MIN_LABEL_GAP) {
        sc.push(DrawCmd::Line {
            x0: label.anchor_x,
            y0: label.y,
            x1: label.x - LEADER_GAP,
            y1: label.y,
            stroke: Stroke::new(LEADER_COLOR, 1.0).with_alpha(0.65),
        });
        sc.push(DrawCmd::FillRect {
            x: label.x,
            y: label.y - LABEL_HEIGHT / 2.0,
            width: label.width,
            height: LABEL_HEIGHT,
            color: PILL_BG,
            alpha: 0.90,
        });
        sc.push(DrawCmd::StrokeRect {
            x: label.x,
            y: label.y - LABEL_HEIGHT / 2.0,
            width: label.width,
            height: LABEL_HEIGHT,
            stroke: Stroke::new(BLACK, 1.0).with_alpha(0.15),
        });
        sc.push(DrawCmd::Text {
            text: label.text,
            x: label.x + 8.0,
            y: label.y,
            size_px: LABEL_FONT_PX,
            color: WHITE_TEXT,
            alpha: 1.0,
            h_align: HAlign::Left,
            v_align: VAlign::Middle,
        });
    }

    // Layer 6: axis frame and tick text (always drawn, independent of the
    // grid toggle).
    sc.push(DrawCmd::Line {
        x0: plot.x,
        y0: plot.y,
        x1: plot.x,
        y1: plot.bottom(),
        stroke: Stroke::new(AXIS_COLOR, 1.0),
    });
    sc.push(DrawCmd::Line {
        x0: plot.x,
        y0: plot.bottom(),
        x1: plot.right(),
        y1: plot.bottom(),
        stroke: Stroke::new(AXIS_COLOR, 1.0),
    });
    for t in X_TICKS {
        if !vx.contains(t) {
            continue;
        }
        let (tx, _) = project(t, vy.min);
        sc.push(DrawCmd::Text {
            text: format!("{:02}:00", t as i64),
            x: tx,
            y: plot.bottom() + 6.0,
            size_px: TICK_FONT_PX,
            color: TICK_COLOR,
            alpha: 1.0,
            h_align: HAlign::Center,
            v_align: VAlign::Top,
        });
    }
    for v in domain::grid_values(vy) {
        let (_, ty) = project(vx.min, v);
        sc.push(DrawCmd::Text {
            text: format!("{v:.0}"),
            x: plot.x - 6.0,
            y: ty,
            size_px: TICK_FONT_PX,
            color: TICK_COLOR,
            alpha: 1.0,
            h_align: HAlign::Right,
            v_align: VAlign::Middle,
        });
    }

    // Layer 7: legend strip (compare chart only).
    if let Some(strip) = frame.legend {
        if !series.is_empty() {
            legend::draw_legend(&mut sc, series, state, strip);
        }
    }

    sc
}

/// Split a projected polyline into runs of segments clipped to `rect`.
/// Gaps introduced by clipping start a new run.
fn clipped_runs(points: &[(f64, f64)], rect: Rect) -> Vec<Vec<(f64, f64)>> {
    let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for w in points.windows(2) {
        match clip_segment(w[0], w[1], rect) {
            Some((a, b)) => {
                match current.last() {
                    Some(&last) if (last.0 - a.0).abs() < 1e-6 && (last.1 - a.1).abs() < 1e-6 => {}
                    Some(_) => {
                        runs.push(std::mem::take(&mut current));
                        current.push(a);
                    }
                    None => current.push(a),
                }
                current.push(b);
            }
            None => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }
    runs
}

/// Liang-Barsky segment clip against a rectangle.
fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    rect: Rect,
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    let checks = [
        (-dx, a.0 - rect.x),
        (dx, rect.right() - a.0),
        (-dy, a.1 - rect.y),
        (dy, rect.bottom() - a.1),
    ];
    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            if r > t0 {
                t0 = r;
            }
        } else {
            if r < t0 {
                return None;
            }
            if r < t1 {
                t1 = r;
            }
        }
    }
    Some((
        (a.0 + t0 * dx, a.1 + t0 * dy),
        (a.0 + t1 * dx, a.1 + t1 * dy),
    ))
}

/// Slice a polyline into on-phase segments of a dash pattern. Odd-length
/// patterns repeat doubled, matching SVG stroke-dasharray semantics. The
/// phase carries across vertices so corners do not reset the pattern.
pub(crate) fn dash_segments(
    points: &[(f64, f64)],
    pattern: &[u32],
) -> Vec<((f64, f64), (f64, f64))> {
    if pattern.is_empty() || points.len() < 2 {
        return Vec::new();
    }
    let mut cycle: Vec<f64> = pattern.iter().map(|p| *p as f64).collect();
    if cycle.len() % 2 == 1 {
        cycle.extend(pattern.iter().map(|p| *p as f64));
    }
    let mut out = Vec::new();
    let mut idx = 0usize;
    let mut remaining = cycle[0];
    for w in points.windows(2) {
        let (x0, y0) = w[0];
        let (x1, y1) = w[1];
        let (dx, dy) = (x1 - x0, y1 - y0);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f64::EPSILON {
            continue;
        }
        let (ux, uy) = (dx / len, dy / len);
        let mut pos = 0.0;
        while pos < len - 1e-9 {
            let take = remaining.min(len - pos);
            if idx % 2 == 0 {
                out.push((
                    (x0 + ux * pos, y0 + uy * pos),
                    (x0 + ux * (pos + take), y0 + uy * (pos + take)),
                ));
            }
            pos += take;
            remaining -= take;
            if remaining <= 1e-9 {
                idx = (idx + 1) % cycle.len();
                remaining = cycle[idx];
            }
        }
    }
    out
}

/// One-time registration of the bundled fallback font for the `ab_glyph`
/// text path, which does not discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Render a scene to `path`: `.svg` uses the SVG backend, anything else
/// the bitmap backend.
pub fn render_scene_to_file<P: AsRef<Path>>(sc: &Scene, out_path: P) -> Result<(), RenderError> {
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let dims = (sc.width, sc.height);

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), dims).into_drawing_area();
        plotters_adapter::play(&root, sc)?;
        root.present()
            .map_err(|e| RenderError::Backend(format!("{e:?}")))?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), dims).into_drawing_area();
        plotters_adapter::play(&root, sc)?;
        root.present()
            .map_err(|e| RenderError::Backend(format!("{e:?}")))?;
    }
    Ok(())
}
