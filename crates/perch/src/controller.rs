//! Show/hide/reposition state machine.
//!
//! ```text
//! Hidden --(trigger in configured mode, rect captured, offset computed)--> Visible
//! Visible --(pointer leave | repeat click | outside click)--> Hidden
//! Visible --(new trigger)--> Visible (fresh geometry, placement re-resolved)
//! ```
//!
//! Each trigger captures a new anchor snapshot and starts from the configured position; the
//! settle pass that follows measures the mounted overlay, flips on viewport collision (bounded,
//! see [`perch_core::FlipBudget`]) and commits the resolved style.

use crate::class::{ClassResolver, ModuleClassResolver};
use crate::event::AnchorEvent;
use crate::surface::{OverlayStyle, OverlaySurface};
use perch_core::{
    AnchorRect, Offset, Placement, Position, Result, TooltipProps, TriggerMode, Viewport,
    compute_offset,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone)]
pub struct OverlayController<R = ModuleClassResolver> {
    props: TooltipProps,
    resolver: R,
    visibility: Visibility,
    requested: Position,
    resolved: Position,
    anchor: Option<AnchorRect>,
    viewport: Viewport,
    offset: Option<Offset>,
    placement: Option<Placement>,
    painted: bool,
}

impl OverlayController<ModuleClassResolver> {
    pub fn new(props: TooltipProps) -> Self {
        Self::with_resolver(props, ModuleClassResolver)
    }

    pub fn from_json_str(props: &str) -> Result<Self> {
        Ok(Self::new(TooltipProps::from_json_str(props)?))
    }
}

impl<R: ClassResolver> OverlayController<R> {
    pub fn with_resolver(props: TooltipProps, resolver: R) -> Self {
        let position = props.position;
        Self {
            props,
            resolver,
            visibility: Visibility::Hidden,
            requested: position,
            resolved: position,
            anchor: None,
            viewport: Viewport::default(),
            offset: None,
            placement: None,
            painted: false,
        }
    }

    pub fn props(&self) -> &TooltipProps {
        &self.props
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Whether the last settle pass committed a style (the overlay has faded in).
    pub fn is_painted(&self) -> bool {
        self.painted
    }

    pub fn requested_position(&self) -> Position {
        self.requested
    }

    pub fn resolved_position(&self) -> Position {
        self.resolved
    }

    pub fn anchor(&self) -> Option<&AnchorRect> {
        self.anchor.as_ref()
    }

    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    pub fn class_name(&self) -> String {
        self.resolver.class_for(self.props.variant, self.resolved)
    }

    pub fn handle<S: OverlaySurface>(&mut self, event: AnchorEvent, surface: &mut S) -> Visibility {
        match event {
            AnchorEvent::PointerOver { anchor, viewport } => {
                self.on_trigger(TriggerMode::Hover, anchor, viewport, surface);
            }
            AnchorEvent::Click { anchor, viewport } => {
                self.on_trigger(TriggerMode::Click, anchor, viewport, surface);
            }
            AnchorEvent::PointerLeave => self.on_anchor_leave(surface),
            AnchorEvent::OutsideClick => {
                if self.props.trigger == TriggerMode::Click {
                    self.dismiss(surface);
                }
            }
        }
        self.visibility
    }

    /// Handles an opening interaction. Returns `false` when `mode` is not the configured trigger.
    pub fn on_trigger<S: OverlaySurface>(
        &mut self,
        mode: TriggerMode,
        anchor: AnchorRect,
        viewport: Viewport,
        surface: &mut S,
    ) -> bool {
        if mode != self.props.trigger {
            tracing::trace!(%mode, configured = %self.props.trigger, "ignoring trigger");
            return false;
        }

        if mode == TriggerMode::Click && self.is_visible() {
            self.hide(surface);
            return true;
        }

        self.apply_placement(self.props.position, anchor, viewport, surface);
        true
    }

    /// Stores the snapshot and the requested position, computes the offset and shows the overlay.
    ///
    /// This is the only path to `Visible`.
    pub fn apply_placement<S: OverlaySurface>(
        &mut self,
        position: Position,
        anchor: AnchorRect,
        viewport: Viewport,
        surface: &mut S,
    ) {
        self.anchor = Some(anchor);
        self.viewport = viewport;
        self.requested = position;
        self.resolved = position;
        self.offset = Some(compute_offset(position, &anchor, &viewport));

        if !self.is_visible() {
            tracing::trace!(%position, "tooltip hidden -> visible");
            self.visibility = Visibility::Visible;
        }

        if !surface.is_mounted() && !surface.mount(&self.class_name()) {
            tracing::warn!("no portal root to mount the tooltip overlay into");
        }

        self.settle(surface);
    }

    /// Reacts to a freshly committed offset: measures the overlay, resolves collisions and writes
    /// the final style.
    pub fn settle<S: OverlaySurface>(&mut self, surface: &mut S) -> Option<&Placement> {
        if !self.is_visible() {
            return None;
        }
        let anchor = self.anchor?;
        self.painted = false;
        self.placement = None;
        if !surface.is_mounted() {
            return None;
        }

        let variant = self.props.variant;
        let resolver = &self.resolver;
        let placement = perch_core::settle(
            self.requested,
            &anchor,
            &self.viewport,
            self.props.placement_options(),
            |position| {
                surface.set_class(&resolver.class_for(variant, position));
                surface.measure()
            },
        );

        let Some(placement) = placement else {
            tracing::warn!("tooltip overlay is mounted but could not be measured");
            return None;
        };

        if placement.flipped() {
            tracing::debug!(
                requested = %placement.requested,
                resolved = %placement.position,
                "tooltip position adjusted to fit the viewport"
            );
        }

        surface.commit(&OverlayStyle::painted(
            &placement.result,
            self.props.animation_duration,
        ));
        self.resolved = placement.position;
        self.offset = Some(placement.offset);
        self.painted = true;
        self.placement = Some(placement);
        self.placement.as_ref()
    }

    pub fn on_anchor_leave<S: OverlaySurface>(&mut self, surface: &mut S) {
        if self.is_visible() {
            self.hide(surface);
        }
    }

    /// Closes the tooltip regardless of trigger mode.
    pub fn dismiss<S: OverlaySurface>(&mut self, surface: &mut S) {
        if self.is_visible() {
            self.hide(surface);
        }
    }

    fn hide<S: OverlaySurface>(&mut self, surface: &mut S) {
        tracing::trace!("tooltip visible -> hidden");
        self.visibility = Visibility::Hidden;
        self.painted = false;
        surface.unmount();
    }
}
