use perch_core::{AnchorRect, TriggerMode, Viewport};
use serde::Deserialize;

/// Anchor interactions, carrying geometry captured synchronously inside the host event handler.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnchorEvent {
    PointerOver {
        anchor: AnchorRect,
        viewport: Viewport,
    },
    Click {
        anchor: AnchorRect,
        viewport: Viewport,
    },
    PointerLeave,
    /// A click that landed outside both the anchor and the overlay.
    OutsideClick,
}

impl AnchorEvent {
    /// The trigger mode this event opens the tooltip in, if any.
    pub fn trigger_mode(&self) -> Option<TriggerMode> {
        match self {
            AnchorEvent::PointerOver { .. } => Some(TriggerMode::Hover),
            AnchorEvent::Click { .. } => Some(TriggerMode::Click),
            AnchorEvent::PointerLeave | AnchorEvent::OutsideClick => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnchorEvent::PointerOver { .. } => "pointerOver",
            AnchorEvent::Click { .. } => "click",
            AnchorEvent::PointerLeave => "pointerLeave",
            AnchorEvent::OutsideClick => "outsideClick",
        }
    }
}
