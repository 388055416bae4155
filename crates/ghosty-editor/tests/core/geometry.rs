use ghosty_core::IPoint;
use ghosty_editor::geometry::{
    constrain_to_axis, hit_test_doors, hit_test_strokes, mirror_points, orthogonalize,
    snap_to_grid,
};
use ghosty_editor::{Direction, Door, DrawMode, Stroke};
use proptest::prelude::*;

fn pts(raw: &[(i32, i32)]) -> Vec<IPoint> {
    raw.iter().map(|&(x, y)| IPoint::new(x, y)).collect()
}

#[test]
fn test_orthogonalize_zigzag_alternates() {
    let out = orthogonalize(&pts(&[(0, 0), (10, 10), (20, 0)]));
    // Horizontal-first corner on the tie, then vertical-first.
    assert_eq!(out, pts(&[(0, 0), (10, 0), (10, 10), (10, 0), (20, 0)]));
}

#[test]
fn test_orthogonalize_dominant_vertical() {
    let out = orthogonalize(&pts(&[(0, 0), (3, 20)]));
    assert_eq!(out, pts(&[(0, 0), (0, 20), (3, 20)]));
}

#[test]
fn test_orthogonalize_empty_and_single() {
    assert!(orthogonalize(&[]).is_empty());
    assert_eq!(orthogonalize(&pts(&[(4, 4)])), pts(&[(4, 4)]));
}

#[test]
fn test_mirror_disabled_is_empty() {
    assert!(mirror_points(&pts(&[(1, 2), (3, 4)]), 100, 100, false, false).is_empty());
}

#[test]
fn test_mirror_both_axes_order() {
    let out = mirror_points(&pts(&[(10, 20)]), 100, 60, true, true);
    assert_eq!(out, pts(&[(90, 20), (10, 40)]));
}

#[test]
fn test_mirror_odd_width_uses_integer_centre() {
    let out = mirror_points(&pts(&[(10, 0)]), 101, 10, true, false);
    assert_eq!(out, pts(&[(90, 0)]));
}

#[test]
fn test_hit_test_top_most_wins() {
    let a = Stroke::new(DrawMode::Polyline, pts(&[(0, 10), (50, 10)]), 3, "a");
    let b = Stroke::new(DrawMode::Polyline, pts(&[(20, 0), (20, 40)]), 3, "b");
    let strokes = vec![a, b];
    assert_eq!(hit_test_strokes(&strokes, 20.0, 10.0), Some(1));
    assert_eq!(hit_test_strokes(&strokes, 45.0, 10.0), Some(0));
    assert_eq!(hit_test_strokes(&strokes, 90.0, 90.0), None);
}

#[test]
fn test_hit_test_ignores_hidden() {
    let mut door = Door::new(Direction::Next, pts(&[(0, 0), (10, 0), (10, 10)]), 3, "d");
    door.visible = false;
    assert_eq!(hit_test_doors(&[door], 5.0, 5.0), None);
}

#[test]
fn test_snap_and_constrain() {
    assert_eq!(snap_to_grid(13.0, 3.9, 8), (16.0, 0.0));
    assert_eq!(snap_to_grid(13.0, 3.9, 0), (13.0, 3.9));
    assert_eq!(constrain_to_axis(IPoint::new(0, 0), 5.0, 9.0), (0.0, 9.0));
    assert_eq!(constrain_to_axis(IPoint::new(0, 0), -9.0, 5.0), (-9.0, 0.0));
}

fn axis_aligned_path() -> impl Strategy<Value = Vec<IPoint>> {
    (
        (-500i32..500, -500i32..500),
        prop::collection::vec((any::<bool>(), -200i32..200), 0..12),
    )
        .prop_map(|((x, y), steps)| {
            let mut p = IPoint::new(x, y);
            let mut out = vec![p];
            for (horizontal, d) in steps {
                p = if horizontal { p.offset(d, 0) } else { p.offset(0, d) };
                out.push(p);
            }
            out
        })
}

proptest! {
    #[test]
    fn prop_orthogonalize_keeps_axis_aligned_input(path in axis_aligned_path()) {
        let mut expected = path.clone();
        expected.dedup();
        prop_assert_eq!(orthogonalize(&path), expected);
    }

    #[test]
    fn prop_orthogonalize_output_is_axis_aligned(
        raw in prop::collection::vec((-300i32..300, -300i32..300), 1..16)
    ) {
        let input = pts(&raw);
        let out = orthogonalize(&input);
        for pair in out.windows(2) {
            prop_assert!(pair[0].is_axis_aligned_with(pair[1]));
        }
        prop_assert_eq!(out.first(), input.first());
        prop_assert_eq!(out.last(), input.last());
    }

    #[test]
    fn prop_mirror_x_twice_is_identity(
        half_w in 1u32..1000,
        x in -2000i32..2000,
        y in -2000i32..2000,
    ) {
        let w = half_w * 2;
        let once = mirror_points(&[IPoint::new(x, y)], w, 10, true, false);
        prop_assert_eq!(once[0], IPoint::new(w as i32 - x, y));
        let twice = mirror_points(&once, w, 10, true, false);
        prop_assert_eq!(twice[0], IPoint::new(x, y));
    }
}
