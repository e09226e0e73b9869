//! Retained draw-command list emitted by the scene builder.
//!
//! The core describes a frame as an ordered list of primitives; adapters
//! play the list onto a concrete surface. Nothing here names a backend.

use crate::models::{MarkerShape, Rgb8};

/// Stroke attributes for lines and outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb8,
    pub width: f64,
    pub alpha: f64,
}

impl Stroke {
    pub fn new(color: Rgb8, width: f64) -> Self {
        Self {
            color,
            width,
            alpha: 1.0,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Horizontal anchoring of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchoring of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// One drawing primitive, in surface pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb8,
        alpha: f64,
    },
    /// Rectangle outline (legend pills, label pill borders).
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stroke: Stroke,
    },
    /// Straight segment; dashed strokes are pre-segmented into these.
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stroke: Stroke,
    },
    /// Solid connected path.
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: Stroke,
    },
    Marker {
        x: f64,
        y: f64,
        radius: f64,
        shape: MarkerShape,
        color: Rgb8,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        size_px: u32,
        color: Rgb8,
        alpha: f64,
        h_align: HAlign,
        v_align: VAlign,
    },
}

/// An ordered frame description plus the surface size it was built for.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub cmds: Vec<DrawCmd>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cmds: Vec::new(),
        }
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    /// Count of a command kind, mostly useful in tests.
    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.cmds.iter().filter(|c| pred(c)).count()
    }
}
