//! The effectful edge: the live overlay node the controller measures and writes to.

use perch_core::{PlacementResult, Size, Transform};
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Inline style the controller owns on the overlay node. Nothing else may write these properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    #[serde(serialize_with = "serialize_px")]
    pub top: f64,
    #[serde(serialize_with = "serialize_px")]
    pub left: f64,
    pub transform: Transform,
    pub opacity: f64,
    pub transition_duration_ms: u32,
}

fn serialize_px<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{value}px"))
}

impl OverlayStyle {
    /// Style for a painted overlay at `result`.
    pub fn painted(result: &PlacementResult, transition_duration_ms: u32) -> Self {
        Self {
            top: result.top,
            left: result.left,
            transform: result.transform,
            opacity: 1.0,
            transition_duration_ms,
        }
    }

    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("top", format!("{}px", self.top)),
            ("left", format!("{}px", self.left)),
            ("transform", self.transform.to_string()),
            ("opacity", self.opacity.to_string()),
            (
                "transition-duration",
                format!("{}ms", self.transition_duration_ms),
            ),
        ]
    }

    pub fn to_css(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Host adapter around the overlay node rendered into the portal root.
pub trait OverlaySurface {
    /// Renders the overlay into the portal root. Returns `false` when the host has no portal root.
    fn mount(&mut self, class_name: &str) -> bool;

    fn unmount(&mut self);

    fn is_mounted(&self) -> bool;

    /// Swaps the presentation class. The overlay's box may change size as a result.
    fn set_class(&mut self, class_name: &str);

    /// Current `clientWidth`/`clientHeight` of the overlay, `None` while unmounted.
    fn measure(&self) -> Option<Size>;

    fn commit(&mut self, style: &OverlayStyle);
}

/// In-memory surface for headless hosts and tests.
///
/// Box sizes are looked up by class name so a presentation that differs per position can be
/// modelled; unknown classes fall back to the default size.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    has_portal: bool,
    default_size: Size,
    class_sizes: HashMap<String, Size>,
    mounted: bool,
    class_name: Option<String>,
    style: Option<OverlayStyle>,
    commits: Vec<OverlayStyle>,
    mounts: usize,
}

impl RecordingSurface {
    pub fn new(default_size: Size) -> Self {
        Self {
            has_portal: true,
            default_size,
            class_sizes: HashMap::new(),
            mounted: false,
            class_name: None,
            style: None,
            commits: Vec::new(),
            mounts: 0,
        }
    }

    /// A host without a portal root: mounting always fails.
    pub fn without_portal(mut self) -> Self {
        self.has_portal = false;
        self
    }

    pub fn with_class_size(mut self, class_name: impl Into<String>, size: Size) -> Self {
        self.class_sizes.insert(class_name.into(), size);
        self
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Live style, cleared on unmount.
    pub fn style(&self) -> Option<&OverlayStyle> {
        self.style.as_ref()
    }

    pub fn commits(&self) -> &[OverlayStyle] {
        &self.commits
    }

    pub fn mount_count(&self) -> usize {
        self.mounts
    }
}

impl OverlaySurface for RecordingSurface {
    fn mount(&mut self, class_name: &str) -> bool {
        if !self.has_portal {
            return false;
        }
        if !self.mounted {
            self.mounted = true;
            self.mounts += 1;
        }
        self.class_name = Some(class_name.to_string());
        true
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.class_name = None;
        self.style = None;
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn set_class(&mut self, class_name: &str) {
        if self.mounted {
            self.class_name = Some(class_name.to_string());
        }
    }

    fn measure(&self) -> Option<Size> {
        if !self.mounted {
            return None;
        }
        let size = self
            .class_name
            .as_ref()
            .and_then(|c| self.class_sizes.get(c))
            .copied()
            .unwrap_or(self.default_size);
        Some(size)
    }

    fn commit(&mut self, style: &OverlayStyle) {
        if !self.mounted {
            return;
        }
        self.style = Some(*style);
        self.commits.push(*style);
    }
}
