//! time-range-slider: headless dual-handle time-window selection.
//!
//! The crate owns the numeric side of a two-handle time slider: pixel and
//! percentage mapping over the current bounds, the per-handle drag state
//! machine, grid snapping, axis labels and the auto-refresh schedule. Hosts
//! render the track themselves and feed pointer, tick and mode inputs in.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{TimeSlider, TimeSliderConfig};
pub use error::{SliderError, SliderResult};
