//! Per-chart interaction state: hover, band toggle, selection, zoom flags.
//!
//! One `ChartState` exists per chart instance. It is mutated only by that
//! chart's input handlers and read by its render pass, so there is no
//! locking; the host event loop guarantees handlers run to completion
//! before the next render reads state.

use crate::models::SeriesId;
use ahash::AHashSet;
use log::debug;

/// Interaction state machine for one chart.
///
/// `is_interacting` is transient (true only between gesture start and
/// gesture end/cancel) and is never persisted across renders.
/// `user_zoomed` latches on gesture completion and is cleared only by an
/// explicit reset.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    pub hovering: bool,
    pub bands_visible: bool,
    /// Series focused via the legend; empty means "all active".
    pub selection: AHashSet<SeriesId>,
    pub user_zoomed: bool,
    pub is_interacting: bool,
}

impl ChartState {
    /// Resting state at mount: clean-line rendering, zero auxiliary chrome.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_enter(&mut self) {
        self.hovering = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.hovering = false;
    }

    /// Toggle the bands latch. A click that terminates a drag gesture
    /// (`is_interacting` still set) must not toggle; this is the guard
    /// against accidental toggles after pan/zoom.
    pub fn on_toggle_click(&mut self) {
        if self.is_interacting {
            debug!("ignoring toggle click that ends a drag");
            return;
        }
        self.bands_visible = !self.bands_visible;
        debug!("bands_visible = {}", self.bands_visible);
    }

    /// Toggle membership of `id` in the selection set. Leaves `hovering`
    /// and `bands_visible` untouched. Returns whether `id` is now selected.
    pub fn on_select_series(&mut self, id: SeriesId) -> bool {
        let selected = if self.selection.remove(&id) {
            false
        } else {
            self.selection.insert(id);
            true
        };
        debug!("series {id} selected = {selected}");
        selected
    }

    /// Clear the selection and the zoom latch; the caller re-fits the
    /// value domain afterwards.
    pub fn on_reset(&mut self) {
        self.selection.clear();
        self.user_zoomed = false;
        debug!("selection and zoom reset");
    }

    pub fn on_gesture_start(&mut self) {
        self.is_interacting = true;
    }

    /// A completed gesture always latches `user_zoomed`, regardless of
    /// prior state.
    pub fn on_gesture_end(&mut self) {
        self.is_interacting = false;
        self.user_zoomed = true;
        debug!("gesture complete; auto-fit suppressed until reset");
    }

    /// Aborted gesture (e.g. pointer left the canvas mid-drag): clears the
    /// transient flag without latching `user_zoomed`, so no "ghost
    /// interacting" state survives.
    pub fn on_gesture_cancel(&mut self) {
        self.is_interacting = false;
    }

    /// Auxiliary layers (bands, gridlines, all-series point markers) show
    /// whenever the user is engaged with the chart.
    pub fn aux_layers_visible(&self) -> bool {
        self.hovering || self.bands_visible || !self.selection.is_empty()
    }

    /// Whether `id` participates in the current focus. Empty selection
    /// means every series is active.
    pub fn is_active(&self, id: SeriesId) -> bool {
        self.selection.is_empty() || self.selection.contains(&id)
    }

    /// Point-marker visibility for one series. A non-empty selection takes
    /// precedence over hover: only selected series show points. With no
    /// selection, all series follow the hover/bands predicate uniformly.
    pub fn points_visible(&self, id: SeriesId) -> bool {
        if !self.selection.is_empty() {
            self.selection.contains(&id)
        } else {
            self.hovering || self.bands_visible
        }
    }
}
