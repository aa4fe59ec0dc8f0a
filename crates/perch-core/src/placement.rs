//! Final overlay placement.
//!
//! The overlay's top-left corner is put on (or, for positions above/left of the anchor, one box
//! length before) the offset point; a CSS translate then centers or edge-aligns the box and pushes
//! it `GAP` pixels away from the anchor.

use crate::collision::{FlipBudget, detect_boundary_collision, detect_within_budget};
use crate::geom::{AnchorRect, Size, Viewport};
use crate::offset::{Offset, compute_offset};
use crate::position::{FlipAxis, Position};
use serde::{Serialize, Serializer};
use std::convert::Infallible;

/// Clearance between the anchor edge and the overlay edge, in pixels.
pub const GAP: f64 = 15.0;

/// One axis of a translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shift {
    Zero,
    Px(f64),
    /// Percentage of the overlay's own box along that axis.
    Percent(f64),
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shift::Zero => f.write_str("0"),
            Shift::Px(v) => write!(f, "{v}px"),
            Shift::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// `translate(x, y) scale(1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: Shift,
    pub y: Shift,
}

impl Transform {
    pub fn translate(x: Shift, y: Shift) -> Self {
        Self { x, y }
    }

    /// Resolves percentages against the overlay box, yielding a pixel displacement.
    pub fn to_pixels(&self, overlay: Size) -> (f64, f64) {
        let resolve = |shift: Shift, extent: f64| match shift {
            Shift::Zero => 0.0,
            Shift::Px(v) => v,
            Shift::Percent(p) => extent * p / 100.0,
        };
        (resolve(self.x, overlay.width), resolve(self.y, overlay.height))
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "translate({}, {}) scale(1)", self.x, self.y)
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementResult {
    pub top: f64,
    pub left: f64,
    pub transform: Transform,
}

impl PlacementResult {
    pub fn css_top(&self) -> String {
        format!("{}px", self.top)
    }

    pub fn css_left(&self) -> String {
        format!("{}px", self.left)
    }

    pub fn css_transform(&self) -> String {
        self.transform.to_string()
    }
}

pub fn resolve_placement(position: Position, overlay: Size, offset: &Offset) -> PlacementResult {
    use Shift::{Percent, Px, Zero};

    let above = offset.top - overlay.height;
    let before = offset.left - overlay.width;

    let (top, left, x, y) = match position {
        Position::Top => (above, offset.left, Percent(-50.0), Px(-GAP)),
        Position::Bottom => (offset.top, offset.left, Percent(-50.0), Px(GAP)),
        Position::Left => (offset.top, before, Px(-GAP), Percent(-50.0)),
        Position::Right => (offset.top, offset.left, Px(GAP), Percent(-50.0)),
        Position::TopLeft => (above, offset.left, Zero, Px(-GAP)),
        Position::TopRight => (above, offset.left, Percent(-100.0), Px(-GAP)),
        Position::BottomLeft => (offset.top, offset.left, Zero, Px(GAP)),
        Position::BottomRight => (offset.top, offset.left, Percent(-100.0), Px(GAP)),
        Position::LeftTop => (offset.top, before, Px(-GAP), Zero),
        Position::LeftBottom => (offset.top, before, Px(-GAP), Percent(-100.0)),
        Position::RightTop => (offset.top, offset.left, Px(GAP), Zero),
        Position::RightBottom => (offset.top, offset.left, Px(GAP), Percent(-100.0)),
    };

    PlacementResult {
        top,
        left,
        transform: Transform::translate(x, y),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementOptions {
    /// Consult collision detection and flip to a fallback position on overflow.
    pub auto_position: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            auto_position: true,
        }
    }
}

impl PlacementOptions {
    pub fn fixed() -> Self {
        Self {
            auto_position: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flip {
    pub from: Position,
    pub to: Position,
    pub axis: FlipAxis,
}

/// Outcome of one settle pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub requested: Position,
    /// The position actually used; differs from `requested` after a flip.
    pub position: Position,
    pub offset: Offset,
    #[serde(serialize_with = "serialize_size")]
    pub overlay: Size,
    pub result: PlacementResult,
    pub flips: Vec<Flip>,
}

impl Placement {
    pub fn flipped(&self) -> bool {
        !self.flips.is_empty()
    }
}

fn serialize_size<S: Serializer>(size: &Size, serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut st = serializer.serialize_struct("Size", 2)?;
    st.serialize_field("width", &size.width)?;
    st.serialize_field("height", &size.height)?;
    st.end()
}

/// Runs the bounded flip iteration for `requested`.
///
/// `measure` is asked for the overlay box each time the candidate position changes (the overlay's
/// presentation may depend on it). Returning `None` means the overlay cannot be measured yet, and
/// the pass produces nothing.
pub fn settle<M>(
    requested: Position,
    anchor: &AnchorRect,
    viewport: &Viewport,
    options: PlacementOptions,
    mut measure: M,
) -> Option<Placement>
where
    M: FnMut(Position) -> Option<Size>,
{
    run_flips(requested, anchor, viewport, options, |p| measure(p).ok_or(())).ok()
}

/// Pure placement against a fixed overlay box.
pub fn place(
    requested: Position,
    anchor: &AnchorRect,
    overlay: Size,
    viewport: &Viewport,
    options: PlacementOptions,
) -> Placement {
    let Ok(placement) = run_flips(requested, anchor, viewport, options, |_| {
        Ok::<_, Infallible>(overlay)
    });
    placement
}

fn run_flips<M, E>(
    requested: Position,
    anchor: &AnchorRect,
    viewport: &Viewport,
    options: PlacementOptions,
    mut measure: M,
) -> Result<Placement, E>
where
    M: FnMut(Position) -> Result<Size, E>,
{
    let mut budget = FlipBudget::new();
    let mut flips = Vec::new();
    let mut position = requested;

    loop {
        let offset = compute_offset(position, anchor, viewport);
        let overlay = measure(position)?;

        if options.auto_position {
            if let Some(fallback) =
                detect_within_budget(position, overlay, &offset, anchor, viewport, &budget)
            {
                budget.admit(fallback);
                tracing::debug!(from = %position, to = %fallback, "overlay overflows viewport, flipping");
                flips.push(Flip {
                    from: position,
                    to: fallback,
                    axis: fallback.flip_axis(),
                });
                position = fallback;
                continue;
            }
            if let Some(refused) =
                detect_boundary_collision(position, overlay, &offset, anchor, viewport)
            {
                tracing::debug!(
                    position = %position,
                    fallback = %refused,
                    "flip budget exhausted for axis, keeping overflowing position"
                );
            }
        }

        let result = resolve_placement(position, overlay, &offset);
        return Ok(Placement {
            requested,
            position,
            offset,
            overlay,
            result,
            flips,
        });
    }
}
