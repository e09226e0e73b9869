//! Adapter that plays a retained [`Scene`](super::Scene) onto a plotters
//! drawing area. Generic over the backend, so the same scene renders to
//! SVG or bitmap surfaces unchanged.

use super::scene::{DrawCmd, HAlign, Scene, Stroke, VAlign};
use super::RenderError;
use crate::models::{MarkerShape, Rgb8};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

fn color(c: Rgb8, alpha: f64) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, alpha.clamp(0.0, 1.0))
}

fn stroke_style(s: Stroke) -> ShapeStyle {
    ShapeStyle {
        color: color(s.color, s.alpha),
        filled: false,
        stroke_width: (s.width.round() as u32).max(1),
    }
}

fn text_style(size_px: u32, c: Rgb8, alpha: f64, h: HAlign, v: VAlign) -> TextStyle<'static> {
    let h_pos = match h {
        HAlign::Left => HPos::Left,
        HAlign::Center => HPos::Center,
        HAlign::Right => HPos::Right,
    };
    let v_pos = match v {
        VAlign::Top => VPos::Top,
        VAlign::Middle => VPos::Center,
        VAlign::Bottom => VPos::Bottom,
    };
    TextStyle {
        font: ("sans-serif", size_px as i32).into_font(),
        color: color(c, alpha).to_backend_color(),
        pos: Pos::new(h_pos, v_pos),
    }
}

/// Draw every command of `scene`, in order, onto `area`.
pub fn play<DB>(area: &DrawingArea<DB, Shift>, scene: &Scene) -> Result<(), RenderError>
where
    DB: DrawingBackend,
{
    area.fill(&WHITE)
        .map_err(|e| RenderError::Backend(format!("{e:?}")))?;

    for cmd in &scene.cmds {
        match cmd {
            DrawCmd::FillRect {
                x,
                y,
                width,
                height,
                color: c,
                alpha,
            } => {
                let rect = Rectangle::new(
                    [
                        (*x as i32, *y as i32),
                        ((*x + *width) as i32, (*y + *height) as i32),
                    ],
                    color(*c, *alpha).filled(),
                );
                area.draw(&rect)
                    .map_err(|e| RenderError::Backend(format!("{e:?}")))?;
            }
            DrawCmd::StrokeRect {
                x,
                y,
                width,
                height,
                stroke,
            } => {
                let rect = Rectangle::new(
                    [
                        (*x as i32, *y as i32),
                        ((*x + *width) as i32, (*y + *height) as i32),
                    ],
                    stroke_style(*stroke),
                );
                area.draw(&rect)
                    .map_err(|e| RenderError::Backend(format!("{e:?}")))?;
            }
            DrawCmd::Line {
                x0,
                y0,
                x1,
                y1,
                stroke,
            } => {
                let path = PathElement::new(
                    vec![(*x0 as i32, *y0 as i32), (*x1 as i32, *y1 as i32)],
                    stroke_style(*stroke),
                );
                area.draw(&path)
                    .map_err(|e| RenderError::Backend(format!("{e:?}")))?;
            }
            DrawCmd::Polyline { points, stroke } => {
                let pts: Vec<(i32, i32)> = points
                    .iter()
                    .map(|(x, y)| (*x as i32, *y as i32))
                    .collect();
                area.draw(&PathElement::new(pts, stroke_style(*stroke)))
                    .map_err(|e| RenderError::Backend(format!("{e:?}")))?;
            }
            DrawCmd::Marker {
                x,
                y,
                radius,
                shape,
                color: c,
            } => {
                draw_marker(area, (*x as i32, *y as i32), radius.round() as i32, *shape, *c)?;
            }
            DrawCmd::Text {
                text,
                x,
                y,
                size_px,
                color: c,
                alpha,
                h_align,
                v_align,
            } => {
                let style = text_style(*size_px, *c, *alpha, *h_align, *v_align);
                area.draw(&Text::new(text.clone(), (*x as i32, *y as i32), style))
                    .map_err(|e| RenderError::Backend(format!("{e:?}")))?;
            }
        }
    }
    Ok(())
}

/// Marker shapes as filled plotters elements at an anchor coordinate.
fn draw_marker<DB>(
    area: &DrawingArea<DB, Shift>,
    c: (i32, i32),
    s: i32,
    shape: MarkerShape,
    rgb: Rgb8,
) -> Result<(), RenderError>
where
    DB: DrawingBackend,
{
    let fill = color(rgb, 1.0).filled();
    let err = |e| RenderError::Backend(format!("{e:?}"));
    match shape {
        MarkerShape::Circle => area.draw(&Circle::new(c, s, fill)).map_err(err),
        MarkerShape::Square => area
            .draw(&Rectangle::new(
                [(c.0 - s, c.1 - s), (c.0 + s, c.1 + s)],
                fill,
            ))
            .map_err(err),
        MarkerShape::Triangle => area
            .draw(&Polygon::new(
                vec![(c.0, c.1 - s), (c.0 - s, c.1 + s), (c.0 + s, c.1 + s)],
                fill,
            ))
            .map_err(err),
        MarkerShape::Diamond => area
            .draw(&Polygon::new(
                vec![
                    (c.0, c.1 - s),
                    (c.0 + s, c.1),
                    (c.0, c.1 + s),
                    (c.0 - s, c.1),
                ],
                fill,
            ))
            .map_err(err),
    }
}
