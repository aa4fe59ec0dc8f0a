#![forbid(unsafe_code)]

//! Geometry snapshots consumed by the placement engine.
//!
//! `AnchorRect` mirrors a DOM `getBoundingClientRect()` result: viewport coordinates captured at a
//! single instant. `Viewport` carries the scroll offset and the visible area, which the engine
//! takes as explicit input instead of reading ambient window state.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub type Unit = euclid::UnknownUnit;

pub type Size = euclid::Size2D<f64, Unit>;

pub fn size(width: f64, height: f64) -> Size {
    euclid::size2(width, height)
}

/// Read-only snapshot of the anchor's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl AnchorRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            right: left + width,
            width,
            height,
            x: left,
            y: top,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("top", self.top),
            ("left", self.left),
            ("bottom", self.bottom),
            ("right", self.right),
            ("width", self.width),
            ("height", self.height),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidGeometry {
                    field: "anchor",
                    message: format!("{name} is not finite ({value})"),
                });
            }
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(Error::InvalidGeometry {
                field: "anchor",
                message: format!("negative size {}x{}", self.width, self.height),
            });
        }
        Ok(())
    }
}

impl Default for AnchorRect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

// DOM rects carry redundant fields. Hosts often send only a subset, so derived fields are filled
// in from `left/top/width/height` when absent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnchorRect {
    #[serde(default)]
    top: Option<f64>,
    #[serde(default)]
    left: Option<f64>,
    #[serde(default)]
    bottom: Option<f64>,
    #[serde(default)]
    right: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
}

impl<'de> Deserialize<'de> for AnchorRect {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawAnchorRect::deserialize(deserializer)?;

        let left = raw.left.or(raw.x).unwrap_or(0.0);
        let top = raw.top.or(raw.y).unwrap_or(0.0);
        let width = raw
            .width
            .or_else(|| raw.right.map(|r| r - left))
            .unwrap_or(0.0);
        let height = raw
            .height
            .or_else(|| raw.bottom.map(|b| b - top))
            .unwrap_or(0.0);

        Ok(Self {
            top,
            left,
            bottom: raw.bottom.unwrap_or(top + height),
            right: raw.right.unwrap_or(left + width),
            width,
            height,
            x: raw.x.unwrap_or(left),
            y: raw.y.unwrap_or(top),
        })
    }
}

/// Scroll offset and visible area of the page at the time of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    #[serde(default)]
    pub scroll_x: f64,
    #[serde(default)]
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    pub fn with_scroll(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("scrollX", self.scroll_x),
            ("scrollY", self.scroll_y),
            ("width", self.width),
            ("height", self.height),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidGeometry {
                    field: "viewport",
                    message: format!("{name} is not finite ({value})"),
                });
            }
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(Error::InvalidGeometry {
                field: "viewport",
                message: format!("negative size {}x{}", self.width, self.height),
            });
        }
        Ok(())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}

/// Overlay box dimensions as measured from the live overlay (`clientWidth`/`clientHeight`).
pub fn validate_overlay(overlay: &Size) -> Result<()> {
    if !(overlay.width.is_finite() && overlay.height.is_finite()) {
        return Err(Error::InvalidGeometry {
            field: "overlay",
            message: format!("size is not finite ({}x{})", overlay.width, overlay.height),
        });
    }
    if overlay.width < 0.0 || overlay.height < 0.0 {
        return Err(Error::InvalidGeometry {
            field: "overlay",
            message: format!("negative size {}x{}", overlay.width, overlay.height),
        });
    }
    Ok(())
}
