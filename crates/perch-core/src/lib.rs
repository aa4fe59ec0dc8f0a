#![forbid(unsafe_code)]

//! Headless tooltip placement engine.
//!
//! Given a snapshot of the anchor's bounding box, the viewport context and the overlay's measured
//! size, the engine computes where a detached overlay should sit next to the anchor, flipping to
//! the opposite side when the requested position would overflow the viewport. Everything here is
//! a pure function of its inputs; applying the result to a live overlay is the job of the
//! `perch` crate.

pub mod collision;
pub mod config;
pub mod error;
pub mod geom;
pub mod offset;
pub mod placement;
pub mod position;

pub use collision::{FlipBudget, detect_boundary_collision, detect_within_budget};
pub use config::{DEFAULT_ANIMATION_DURATION_MS, TooltipProps};
pub use error::{Error, Result};
pub use geom::{AnchorRect, Size, Viewport};
pub use offset::{Offset, compute_offset, compute_offset_named};
pub use placement::{
    Flip, GAP, Placement, PlacementOptions, PlacementResult, Shift, Transform, place,
    resolve_placement, settle,
};
pub use position::{FlipAxis, Position, Side, TooltipVariant, TriggerMode};
