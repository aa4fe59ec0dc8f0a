//! Viewport collision rules.
//!
//! Rules are checked in order and the first match wins, so a vertical flip always takes
//! precedence over a horizontal one for the same input.

use crate::geom::{AnchorRect, Size, Viewport};
use crate::offset::Offset;
use crate::placement::GAP;
use crate::position::{FlipAxis, Position};

/// Returns the fallback position when `position` would overflow the viewport, `None` when it fits.
pub fn detect_boundary_collision(
    position: Position,
    overlay: Size,
    offset: &Offset,
    anchor: &AnchorRect,
    viewport: &Viewport,
) -> Option<Position> {
    detect_filtered(position, overlay, offset, anchor, viewport, |_| true)
}

/// Like [`detect_boundary_collision`], but skips rules whose fallback lands in an axis group the
/// budget has already spent, so the remaining group still gets a say.
pub fn detect_within_budget(
    position: Position,
    overlay: Size,
    offset: &Offset,
    anchor: &AnchorRect,
    viewport: &Viewport,
    budget: &FlipBudget,
) -> Option<Position> {
    detect_filtered(position, overlay, offset, anchor, viewport, |axis| {
        !budget.used(axis)
    })
}

fn detect_filtered<F>(
    position: Position,
    overlay: Size,
    offset: &Offset,
    anchor: &AnchorRect,
    viewport: &Viewport,
    allow: F,
) -> Option<Position>
where
    F: Fn(FlipAxis) -> bool,
{
    use Position::*;

    let half_width = (overlay.width / 2.0).floor();
    let vertical = allow(FlipAxis::Vertical);
    let horizontal = allow(FlipAxis::Horizontal);

    if vertical
        && matches!(position, Top | TopLeft | TopRight)
        && anchor.top - overlay.height - GAP <= 0.0
    {
        return Some(Bottom);
    }

    if vertical
        && matches!(position, Bottom | BottomLeft | BottomRight)
        && anchor.bottom + overlay.height > viewport.height
    {
        return Some(Top);
    }

    if horizontal && matches!(position, Top | TopLeft) && offset.left + half_width > viewport.width
    {
        return Some(Left);
    }

    if horizontal && matches!(position, Top | TopRight) && offset.left < half_width {
        return Some(Right);
    }

    None
}

/// Caps a settle pass at one flip per axis group.
///
/// No rule's fallback re-triggers the rule that produced it, so one flip per group is enough to
/// reach a fixed point; the cap guarantees termination when two groups would ping-pong.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipBudget {
    vertical: bool,
    horizontal: bool,
}

impl FlipBudget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the budget for `fallback`'s group. Returns `false` if that group already flipped.
    pub fn admit(&mut self, fallback: Position) -> bool {
        let slot = match fallback.flip_axis() {
            FlipAxis::Vertical => &mut self.vertical,
            FlipAxis::Horizontal => &mut self.horizontal,
        };
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    pub fn used(&self, axis: FlipAxis) -> bool {
        match axis {
            FlipAxis::Vertical => self.vertical,
            FlipAxis::Horizontal => self.horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::size;
    use crate::offset::compute_offset;

    fn check(position: Position, anchor: AnchorRect, overlay: Size, vp: Viewport) -> Option<Position> {
        let off = compute_offset(position, &anchor, &vp);
        detect_boundary_collision(position, overlay, &off, &anchor, &vp)
    }

    #[test]
    fn no_room_above_flips_to_bottom() {
        let anchor = AnchorRect::new(300.0, 40.0, 50.0, 20.0);
        let vp = Viewport::new(800.0, 600.0);
        // 40 - 25 - 15 == 0 counts as a collision.
        assert_eq!(check(Position::Top, anchor, size(80.0, 25.0), vp), Some(Position::Bottom));
        assert_eq!(check(Position::TopLeft, anchor, size(80.0, 25.0), vp), Some(Position::Bottom));
        assert_eq!(check(Position::Top, anchor, size(80.0, 24.0), vp), None);
    }

    #[test]
    fn no_room_below_flips_to_top() {
        let anchor = AnchorRect::new(300.0, 120.0, 50.0, 20.0);
        let vp = Viewport::new(800.0, 150.0);
        assert_eq!(check(Position::Bottom, anchor, size(80.0, 30.0), vp), Some(Position::Top));
        assert_eq!(check(Position::BottomRight, anchor, size(80.0, 30.0), vp), Some(Position::Top));
        assert_eq!(check(Position::Bottom, anchor, size(80.0, 10.0), vp), None);
    }

    #[test]
    fn right_edge_overflow_flips_to_left() {
        let anchor = AnchorRect::new(760.0, 300.0, 20.0, 20.0);
        let vp = Viewport::new(800.0, 600.0);
        // Top offset.left = 770; 770 + 50 > 800.
        assert_eq!(check(Position::Top, anchor, size(100.0, 20.0), vp), Some(Position::Left));
        // TopRight is exempt from the right-edge rule.
        assert_eq!(check(Position::TopRight, anchor, size(100.0, 20.0), vp), None);
    }

    #[test]
    fn left_edge_overflow_flips_to_right() {
        let anchor = AnchorRect::new(0.0, 300.0, 20.0, 20.0);
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(check(Position::Top, anchor, size(100.0, 20.0), vp), Some(Position::Right));
        assert_eq!(check(Position::TopRight, anchor, size(100.0, 20.0), vp), Some(Position::Right));
        assert_eq!(check(Position::TopLeft, anchor, size(100.0, 20.0), vp), None);
    }

    #[test]
    fn half_width_is_floored() {
        let anchor = AnchorRect::new(40.0, 300.0, 20.0, 20.0);
        let vp = Viewport::new(800.0, 600.0);
        // offset.left = 50, floor(101 / 2) = 50 -> not strictly less.
        assert_eq!(check(Position::Top, anchor, size(100.0, 20.0), vp), None);
        assert_eq!(check(Position::Top, anchor, size(101.0, 20.0), vp), None);
        assert_eq!(check(Position::Top, anchor, size(102.0, 20.0), vp), Some(Position::Right));
    }

    #[test]
    fn vertical_rule_wins_over_horizontal() {
        let anchor = AnchorRect::new(0.0, 10.0, 20.0, 20.0);
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(check(Position::Top, anchor, size(100.0, 20.0), vp), Some(Position::Bottom));
    }

    #[test]
    fn side_positions_never_flip() {
        let anchor = AnchorRect::new(0.0, 0.0, 20.0, 20.0);
        let vp = Viewport::new(10.0, 10.0);
        for p in [Position::Left, Position::Right, Position::LeftTop, Position::RightBottom] {
            assert_eq!(check(p, anchor, size(500.0, 500.0), vp), None);
        }
    }

    #[test]
    fn spent_vertical_budget_lets_horizontal_rules_through() {
        // No room above and too close to the left edge.
        let anchor = AnchorRect::new(0.0, 20.0, 20.0, 20.0);
        let vp = Viewport::new(800.0, 600.0);
        let overlay = size(100.0, 30.0);
        let off = compute_offset(Position::Top, &anchor, &vp);

        let mut budget = FlipBudget::new();
        assert_eq!(
            detect_within_budget(Position::Top, overlay, &off, &anchor, &vp, &budget),
            Some(Position::Bottom)
        );
        assert!(budget.admit(Position::Bottom));
        assert_eq!(
            detect_within_budget(Position::Top, overlay, &off, &anchor, &vp, &budget),
            Some(Position::Right)
        );
    }

    #[test]
    fn budget_allows_one_flip_per_group() {
        let mut budget = FlipBudget::new();
        assert!(budget.admit(Position::Bottom));
        assert!(!budget.admit(Position::Top));
        assert!(budget.admit(Position::Left));
        assert!(!budget.admit(Position::Right));
        assert!(budget.used(FlipAxis::Vertical) && budget.used(FlipAxis::Horizontal));
    }
}
