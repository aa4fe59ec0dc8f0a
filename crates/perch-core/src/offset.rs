//! Anchor reference points.
//!
//! Every position maps to one page-absolute point on (or at the corner of) the anchor box. The
//! scroll offset is folded in so the point stays put when the page scrolls after capture.

use crate::geom::{AnchorRect, Viewport};
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Page-absolute reference point the overlay is aligned against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}

impl Offset {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

pub fn compute_offset(position: Position, anchor: &AnchorRect, viewport: &Viewport) -> Offset {
    let center_x = anchor.left + anchor.width / 2.0;
    let center_y = anchor.top + anchor.height / 2.0;
    let right = anchor.left + anchor.width;

    let (top, left) = match position {
        Position::Top => (anchor.top, center_x),
        Position::Bottom => (anchor.bottom, center_x),
        Position::Left => (center_y, anchor.left),
        Position::Right => (center_y, right),
        Position::TopLeft | Position::LeftTop => (anchor.top, anchor.left),
        Position::TopRight | Position::RightTop => (anchor.top, right),
        Position::BottomLeft => (anchor.top + anchor.height, anchor.left),
        Position::BottomRight => (anchor.top + anchor.height, right),
        Position::LeftBottom => (anchor.bottom, anchor.left),
        Position::RightBottom => (anchor.bottom, right),
    };

    Offset {
        top: top + viewport.scroll_y,
        left: left + viewport.scroll_x,
    }
}

/// By-name variant for hosts holding raw position strings; `None` for names outside the
/// enumeration.
pub fn compute_offset_named(name: &str, anchor: &AnchorRect, viewport: &Viewport) -> Option<Offset> {
    let position = name.parse::<Position>().ok()?;
    Some(compute_offset(position, anchor, viewport))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_is_added_to_both_axes() {
        let anchor = AnchorRect::new(10.0, 20.0, 40.0, 10.0);
        let vp = Viewport::new(800.0, 600.0).with_scroll(5.0, 300.0);
        let off = compute_offset(Position::TopLeft, &anchor, &vp);
        assert_eq!(off, Offset::new(320.0, 15.0));
    }

    #[test]
    fn bottom_uses_the_rect_bottom_field_as_captured() {
        // BottomLeft derives from top + height while Bottom/LeftBottom read `bottom` directly.
        let mut anchor = AnchorRect::new(0.0, 100.0, 10.0, 20.0);
        anchor.bottom = 125.0;
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(compute_offset(Position::Bottom, &anchor, &vp).top, 125.0);
        assert_eq!(compute_offset(Position::LeftBottom, &anchor, &vp).top, 125.0);
        assert_eq!(compute_offset(Position::BottomLeft, &anchor, &vp).top, 120.0);
    }

    #[test]
    fn named_lookup_returns_none_for_unknown_names() {
        let anchor = AnchorRect::new(0.0, 0.0, 10.0, 10.0);
        let vp = Viewport::default();
        assert!(compute_offset_named("Center", &anchor, &vp).is_none());
        assert_eq!(
            compute_offset_named("Right", &anchor, &vp),
            Some(Offset::new(5.0, 10.0))
        );
    }
}
