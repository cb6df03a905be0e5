//! Observer hooks for hosts and tooling.
//!
//! Extensions only read slider state; they never sit on the core drag path.

pub mod plugins;

pub use plugins::{SliderContext, SliderEvent, SliderPlugin};
