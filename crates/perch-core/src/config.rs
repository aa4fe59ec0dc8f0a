//! Tooltip props as supplied by the host.
//!
//! Keys follow the host's camelCase prop names so a props object can be passed through verbatim.

use crate::error::Result;
use crate::placement::PlacementOptions;
use crate::position::{Position, TooltipVariant, TriggerMode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 200;

fn default_animation_duration() -> u32 {
    DEFAULT_ANIMATION_DURATION_MS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipProps {
    #[serde(rename = "type", default)]
    pub variant: TooltipVariant,
    #[serde(default)]
    pub content: String,
    /// Initially requested position.
    pub position: Position,
    /// Transition duration hint for the overlay, in milliseconds.
    #[serde(default = "default_animation_duration")]
    pub animation_duration: u32,
    #[serde(default)]
    pub trigger: TriggerMode,
    #[serde(default)]
    pub is_automatic_position_detection_disabled: bool,
}

impl TooltipProps {
    pub fn new(position: Position) -> Self {
        Self {
            variant: TooltipVariant::Default,
            content: String::new(),
            position,
            animation_duration: DEFAULT_ANIMATION_DURATION_MS,
            trigger: TriggerMode::Hover,
            is_automatic_position_detection_disabled: false,
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn variant(mut self, variant: TooltipVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn animation_duration(mut self, ms: u32) -> Self {
        self.animation_duration = ms;
        self
    }

    pub fn trigger(mut self, trigger: TriggerMode) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn disable_automatic_position_detection(mut self, disabled: bool) -> Self {
        self.is_automatic_position_detection_disabled = disabled;
        self
    }

    pub fn placement_options(&self) -> PlacementOptions {
        PlacementOptions {
            auto_position: !self.is_automatic_position_detection_disabled,
        }
    }
}
