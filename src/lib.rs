//! aqi-dash
//!
//! Core of an AQI (air-quality index) time-series dashboard: interaction
//! state tracking, end-of-line label layout, value-axis auto-fitting, and
//! backend-agnostic rendering of hourly monitor charts.
//!
//! ### Features
//! - Three chart kinds: single monitor, multi-station comparison, band overlay
//! - Severity bands, gridlines, and point markers that follow hover/selection
//! - End-of-line labels fanned out to stay readable when lines converge
//! - Renders the same scene to SVG or PNG via plotters
//!
//! ### Example
//! ```no_run
//! use aqi_dash::{Chart, InputEvent};
//!
//! let mut chart = Chart::compare(aqi_dash::demo::compare_series());
//! chart.handle(InputEvent::PointerEnter);
//! chart.handle(InputEvent::LegendActivate(1));
//! chart.render_to_file(960, 480, "compare.svg")?;
//! # Ok::<(), aqi_dash::render::RenderError>(())
//! ```

pub mod chart;
pub mod demo;
pub mod domain;
pub mod layout;
pub mod models;
pub mod provider;
pub mod render;
pub mod state;
pub mod style;

pub use chart::{Chart, ChartKind, InputEvent};
pub use domain::{Domain, Viewport};
pub use models::{Band, BandScale, MarkerShape, Rgb8, Sample, Series, SeriesId};
pub use provider::{DataProvider, JsonProvider, ProviderError, StaticProvider};
pub use state::ChartState;
