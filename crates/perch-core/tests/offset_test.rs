use perch_core::{AnchorRect, Offset, Position, Viewport, compute_offset};

fn anchor() -> AnchorRect {
    // top:100, left:200, width:50, height:20, bottom:120, right:250
    AnchorRect::new(200.0, 100.0, 50.0, 20.0)
}

fn no_scroll() -> Viewport {
    Viewport::new(1024.0, 768.0)
}

#[test]
fn offset_for_top_is_centered_on_the_top_edge() {
    assert_eq!(
        compute_offset(Position::Top, &anchor(), &no_scroll()),
        Offset::new(100.0, 225.0)
    );
}

#[test]
fn offset_for_bottom_is_centered_on_the_bottom_edge() {
    assert_eq!(
        compute_offset(Position::Bottom, &anchor(), &no_scroll()),
        Offset::new(120.0, 225.0)
    );
}

#[test]
fn offset_table_covers_all_positions() {
    let expected = [
        (Position::Top, 100.0, 225.0),
        (Position::Bottom, 120.0, 225.0),
        (Position::Left, 110.0, 200.0),
        (Position::Right, 110.0, 250.0),
        (Position::TopLeft, 100.0, 200.0),
        (Position::LeftTop, 100.0, 200.0),
        (Position::TopRight, 100.0, 250.0),
        (Position::RightTop, 100.0, 250.0),
        (Position::BottomLeft, 120.0, 200.0),
        (Position::BottomRight, 120.0, 250.0),
        (Position::LeftBottom, 120.0, 200.0),
        (Position::RightBottom, 120.0, 250.0),
    ];
    assert_eq!(expected.len(), Position::ALL.len());

    for (position, top, left) in expected {
        assert_eq!(
            compute_offset(position, &anchor(), &no_scroll()),
            Offset::new(top, left),
            "{position}"
        );
    }
}

#[test]
fn offsets_are_page_absolute() {
    let vp = Viewport::new(1024.0, 768.0).with_scroll(30.0, 500.0);
    for position in Position::ALL {
        let base = compute_offset(position, &anchor(), &no_scroll());
        let scrolled = compute_offset(position, &anchor(), &vp);
        assert_eq!(scrolled, Offset::new(base.top + 500.0, base.left + 30.0));
    }
}

#[test]
fn left_and_right_mirror_each_other() {
    let a = anchor();
    let vp = no_scroll();
    let left = compute_offset(Position::Left, &a, &vp);
    let right = compute_offset(Position::Right, &a, &vp);
    assert_eq!(left.top, right.top);
    assert_eq!(left.left, a.left);
    assert_eq!(right.left, a.right);
}

#[test]
fn top_and_bottom_mirror_each_other() {
    let a = anchor();
    let vp = no_scroll();
    let top = compute_offset(Position::Top, &a, &vp);
    let bottom = compute_offset(Position::Bottom, &a, &vp);
    assert_eq!(top.left, bottom.left);
    assert_eq!(top.top, a.top);
    assert_eq!(bottom.top, a.bottom);
}

#[test]
fn unknown_position_name_yields_no_offset() {
    assert!(perch_core::compute_offset_named("Middle", &anchor(), &no_scroll()).is_none());
    assert!(perch_core::compute_offset_named("", &anchor(), &no_scroll()).is_none());
}
