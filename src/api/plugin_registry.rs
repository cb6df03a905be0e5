use crate::core::Clock;
use crate::error::{SliderError, SliderResult};
use crate::extensions::SliderPlugin;

use super::TimeSlider;

impl<C: Clock> TimeSlider<C> {
    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn SliderPlugin>) -> SliderResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(SliderError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.plugins.contains_key(&plugin_id) {
            return Err(SliderError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.insert(plugin_id, plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.plugins.shift_remove(plugin_id).is_some()
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.contains_key(plugin_id)
    }

    /// Registered plugin ids in registration order.
    pub fn plugin_ids(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }
}
