#![forbid(unsafe_code)]

//! `perch` positions a detached tooltip overlay next to its anchor.
//!
//! The placement math lives in `perch-core` (re-exported here). This crate adds the controller
//! that reacts to anchor interactions, owns the show/hide state and writes the resolved placement
//! to the overlay through a host-provided [`OverlaySurface`].

pub use perch_core::*;

pub mod class;
pub mod controller;
pub mod event;
pub mod surface;

pub use class::{ClassResolver, ModuleClassResolver};
pub use controller::{OverlayController, Visibility};
pub use event::AnchorEvent;
pub use surface::{OverlayStyle, OverlaySurface, RecordingSurface};
