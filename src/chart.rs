//! Chart orchestrator: owns the series list, interaction state, and the
//! visible window, routes input events, and re-fits the value axis when
//! the data in focus changes.

use crate::domain::{self, Domain, Viewport, HOUR_MAX, HOUR_MIN};
use crate::models::{BandScale, Series, SeriesId};
use crate::render::{self, legend::LegendHit, RenderError, Scene};
use crate::state::ChartState;

use std::path::Path;

use log::debug;

/// Which of the dashboard charts this instance is.
///
/// The kinds share one scene builder; they differ in line coloring
/// (`Single` colors each segment by band severity), whether a legend strip
/// is laid out (`Compare`), and whether bands start latched on
/// (`BandsOnly`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Single,
    Compare,
    BandsOnly,
}

/// Input events a host forwards to a chart. Pointer coordinates are
/// resolved by the host (e.g. via [`Chart::legend_hit`]) before they
/// arrive here; the chart itself never sees raw pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerEnter,
    PointerLeave,
    /// Plain click on the plot area: toggles the bands latch.
    ToggleClick,
    /// Click on a series' legend pill: toggles it in the selection set.
    LegendActivate(SeriesId),
    /// Click on the legend's reset pill, or any other reset affordance.
    Reset,
    GestureStart,
    GestureEnd,
    GestureCancel,
    /// A completed zoom/pan gesture reporting the new visible window. The
    /// host's gesture engine computes the window; the chart clamps and
    /// stores it.
    ZoomWindow { x: Domain, y: Domain },
}

/// One chart instance: data, state, and the window it is viewed through.
#[derive(Debug, Clone)]
pub struct Chart {
    series: Vec<Series>,
    pub state: ChartState,
    viewport: Viewport,
    scale: BandScale,
    kind: ChartKind,
}

impl Chart {
    fn new(series: Vec<Series>, scale: BandScale, kind: ChartKind) -> Self {
        let mut chart = Self {
            series,
            state: ChartState::new(),
            viewport: Viewport::full(scale),
            scale,
            kind,
        };
        if kind == ChartKind::BandsOnly {
            chart.state.bands_visible = true;
        }
        chart.refit();
        chart
    }

    /// Single-monitor chart with segment colors following band severity.
    pub fn single(series: Vec<Series>) -> Self {
        Self::new(series, BandScale::default(), ChartKind::Single)
    }

    /// Multi-series comparison chart with a legend strip.
    pub fn compare(series: Vec<Series>) -> Self {
        Self::new(series, BandScale::default(), ChartKind::Compare)
    }

    /// Chart that mounts with the band overlay latched on.
    pub fn bands_only(series: Vec<Series>) -> Self {
        Self::new(series, BandScale::default(), ChartKind::BandsOnly)
    }

    /// Switch the band scale (e.g. to the extended 0-500 tiers) and re-fit.
    pub fn with_scale(mut self, scale: BandScale) -> Self {
        self.scale = scale;
        self.viewport = Viewport::full(scale);
        self.refit();
        self
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scale(&self) -> BandScale {
        self.scale
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Route one input event. Selection changes and resets re-fit the value
    /// axis; a held manual zoom suppresses the re-fit until reset.
    pub fn handle(&mut self, event: InputEvent) {
        debug!("chart event: {event:?}");
        match event {
            InputEvent::PointerEnter => self.state.on_pointer_enter(),
            InputEvent::PointerLeave => self.state.on_pointer_leave(),
            InputEvent::ToggleClick => self.state.on_toggle_click(),
            InputEvent::LegendActivate(id) => {
                self.state.on_select_series(id);
                self.refit();
            }
            InputEvent::Reset => {
                self.state.on_reset();
                self.viewport = Viewport::full(self.scale);
                self.refit();
            }
            InputEvent::GestureStart => self.state.on_gesture_start(),
            InputEvent::GestureEnd => self.state.on_gesture_end(),
            InputEvent::GestureCancel => self.state.on_gesture_cancel(),
            InputEvent::ZoomWindow { x, y } => {
                self.viewport = clamp_window(x, y, self.scale);
            }
        }
    }

    /// Re-fit the value axis to the readings of the active series. No-op
    /// while the user holds a manual zoom; keeps the prior domain when no
    /// finite readings remain.
    fn refit(&mut self) {
        if self.state.user_zoomed {
            return;
        }
        let values = self
            .series
            .iter()
            .enumerate()
            .filter(|(id, _)| self.state.is_active(*id))
            .flat_map(|(_, s)| s.samples.iter().map(|p| p.value));
        if let Some(y) = domain::fit(values, self.scale) {
            self.viewport.y = y;
        }
    }

    /// Build the frame description for the given surface size.
    pub fn scene(&self, width: u32, height: u32) -> Scene {
        render::build_scene(
            &self.series,
            &self.state,
            self.viewport,
            self.scale,
            self.kind,
            width,
            height,
        )
    }

    /// Render straight to a file; the extension picks the backend.
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        width: u32,
        height: u32,
        path: P,
    ) -> Result<(), RenderError> {
        let sc = self.scene(width, height);
        render::render_scene_to_file(&sc, path)
    }

    /// Resolve a pointer position on a `width` x `height` surface to a
    /// legend action, if the chart has a legend strip and the point lands
    /// on a pill.
    pub fn legend_hit(&self, width: u32, height: u32, px: f64, py: f64) -> Option<LegendHit> {
        let frame = render::compute_frame(width, height, self.kind);
        let strip = frame.legend?;
        render::legend::hit(&self.series, strip, px, py)
    }
}

/// Clamp a requested zoom window into the full data ranges and keep both
/// axes non-degenerate.
fn clamp_window(x: Domain, y: Domain, scale: BandScale) -> Viewport {
    let x_min = x.min.clamp(HOUR_MIN, HOUR_MAX);
    let x_max = x.max.clamp(HOUR_MIN, HOUR_MAX);
    let y_min = y.min.clamp(0.0, scale.cap());
    let y_max = y.max.clamp(0.0, scale.cap());
    let x = if x_max - x_min < 0.25 {
        Domain::new(HOUR_MIN, HOUR_MAX)
    } else {
        Domain::new(x_min, x_max)
    };
    let y = if y_max - y_min < 1.0 {
        Domain::new(0.0, scale.cap())
    } else {
        Domain::new(y_min, y_max)
    };
    Viewport { x, y }
}
