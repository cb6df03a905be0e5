mod drag_coordinator;
mod json_contract;
mod mode_controller;
mod plugin_dispatch;
mod plugin_registry;
mod refresh_controller;
mod slider;
mod slider_config;
mod slider_snapshot;
mod validation;

pub use json_contract::{SLIDER_SNAPSHOT_JSON_SCHEMA_V1, SliderSnapshotJsonContractV1};
pub use slider::TimeSlider;
pub use slider_config::{AutoRefreshBehavior, TimeSliderConfig};
pub use slider_snapshot::SliderSnapshot;
