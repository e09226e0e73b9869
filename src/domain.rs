//! Value-axis fitting and the visible data window.
//!
//! The fitter snaps the observed value range outward to fixed gridline
//! boundaries so bands and ticks stay aligned. It is never consulted while
//! the user holds a manual zoom; the chart orchestrator enforces that.

use crate::models::BandScale;
use log::debug;

/// Snap step shared by the fitter and the y gridlines.
pub const DOMAIN_STEP: f64 = 50.0;

/// Hour range of the dashboards.
pub const HOUR_MIN: f64 = 0.0;
pub const HOUR_MAX: f64 = 24.0;

/// Inclusive axis range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Current visible window of a chart, in data coordinates. Starts at the
/// full hour range and the full band scale; a zoom gesture replaces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: Domain,
    pub y: Domain,
}

impl Viewport {
    pub fn full(scale: BandScale) -> Self {
        Self {
            x: Domain::new(HOUR_MIN, HOUR_MAX),
            y: Domain::new(0.0, scale.cap()),
        }
    }
}

/// Fit the value axis to the given readings.
///
/// Snaps `min` down and `max` up to the nearest `DOMAIN_STEP` boundary,
/// clamps into `[0, scale.cap()]`, and widens to at least one step so a
/// band height always fits. Non-finite readings are ignored. Returns
/// `None` when nothing remains to fit; the caller keeps its prior domain.
pub fn fit(values: impl IntoIterator<Item = f64>, scale: BandScale) -> Option<Domain> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        any = true;
        min = min.min(v);
        max = max.max(v);
    }
    if !any {
        return None;
    }

    let cap = scale.cap();
    let snapped_min = snap_down(min).clamp(0.0, cap - DOMAIN_STEP);
    let mut snapped_max = (snap_up(max)).min(cap);
    if snapped_max - snapped_min < DOMAIN_STEP {
        snapped_max = (snapped_min + DOMAIN_STEP).min(cap);
    }
    let domain = Domain::new(snapped_min, snapped_max);
    debug!("fitted value domain to [{}, {}]", domain.min, domain.max);
    Some(domain)
}

fn snap_down(v: f64) -> f64 {
    (v / DOMAIN_STEP).floor() * DOMAIN_STEP
}

fn snap_up(v: f64) -> f64 {
    (v / DOMAIN_STEP).ceil() * DOMAIN_STEP
}

/// Y gridline positions inside `domain`, every `DOMAIN_STEP` units.
pub fn grid_values(domain: Domain) -> Vec<f64> {
    let mut out = Vec::new();
    let mut v = snap_up(domain.min);
    while v <= domain.max + 1e-9 {
        out.push(v);
        v += DOMAIN_STEP;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_values_cover_domain() {
        let g = grid_values(Domain::new(0.0, 300.0));
        assert_eq!(g, vec![0.0, 50.0, 100.0, 150.0, 200.0, 250.0, 300.0]);
        let g = grid_values(Domain::new(100.0, 150.0));
        assert_eq!(g, vec![100.0, 150.0]);
    }
}
