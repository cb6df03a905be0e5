use serde::{Deserialize, Serialize};

use crate::core::{Clock, HandleKind, MIN_WINDOW_MS};
use crate::error::{SliderError, SliderResult};

use super::{SliderSnapshot, TimeSlider};

pub const SLIDER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SliderSnapshot,
}

impl SliderSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> SliderResult<String> {
        let payload = SliderSnapshotJsonContractV1 {
            schema_version: SLIDER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SliderError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    ///
    /// Parsed snapshots must describe a state the slider can reach: both
    /// handles inside the bounds, at least the minimum window apart, and one
    /// label per tick of the view.
    pub fn from_json_compat_str(input: &str) -> SliderResult<Self> {
        let snapshot = match serde_json::from_str::<SliderSnapshot>(input) {
            Ok(snapshot) => snapshot,
            Err(_) => parse_contract_v1(input)?,
        };
        ensure_consistent(&snapshot)?;
        Ok(snapshot)
    }
}

fn parse_contract_v1(input: &str) -> SliderResult<SliderSnapshot> {
    let payload: SliderSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
        SliderError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
    })?;
    if payload.schema_version != SLIDER_SNAPSHOT_JSON_SCHEMA_V1 {
        return Err(SliderError::InvalidData(format!(
            "unsupported snapshot schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.snapshot)
}

fn ensure_consistent(snapshot: &SliderSnapshot) -> SliderResult<()> {
    let bounds = snapshot.bounds;
    for (kind, handle) in [(HandleKind::Min, snapshot.min), (HandleKind::Max, snapshot.max)] {
        if !bounds.contains(handle.time) {
            return Err(SliderError::InvalidData(format!(
                "snapshot {kind:?} handle time {} is outside bounds",
                handle.time
            )));
        }
        if !(0.0..=100.0).contains(&handle.percentage) {
            return Err(SliderError::InvalidData(format!(
                "snapshot {kind:?} handle percentage {} is off the track",
                handle.percentage
            )));
        }
    }

    let window = snapshot.max.time - snapshot.min.time;
    if window < MIN_WINDOW_MS {
        return Err(SliderError::InvalidData(format!(
            "snapshot window {window} ms is below the {MIN_WINDOW_MS} ms minimum"
        )));
    }

    let expected = snapshot.mode.label_count();
    if snapshot.labels.len() != expected {
        return Err(SliderError::InvalidData(format!(
            "snapshot has {} labels, `{}` expects {expected}",
            snapshot.labels.len(),
            snapshot.mode
        )));
    }
    Ok(())
}

impl<C: Clock> TimeSlider<C> {
    pub fn snapshot_json_pretty(&self) -> SliderResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
