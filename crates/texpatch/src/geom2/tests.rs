use super::*;
use nalgebra::{vector, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn square10() -> Rect2 {
    Rect2::from_corners(vector![10.0, 10.0], vector![0.0, 0.0])
}

#[test]
fn rect_from_corners_any_order() {
    let a = Rect2::from_corners(vector![5.0, -1.0], vector![-2.0, 3.0]);
    let b = Rect2::from_corners(vector![-2.0, 3.0], vector![5.0, -1.0]);
    let c = Rect2::from_corners(vector![-2.0, -1.0], vector![5.0, 3.0]);
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(a.min, vector![-2.0, -1.0]);
    assert_eq!(a.max, vector![5.0, 3.0]);
    assert!((a.width() - 7.0).abs() < 1e-12);
    assert!((a.height() - 4.0).abs() < 1e-12);
    assert_eq!(a.center(), vector![1.5, 1.0]);
}

#[test]
fn rect_edges_run_bottom_right_top_left() {
    let r = square10();
    let e = r.edges();
    assert_eq!(e[0], (vector![0.0, 0.0], vector![10.0, 0.0]));
    assert_eq!(e[1], (vector![10.0, 0.0], vector![10.0, 10.0]));
    assert_eq!(e[2], (vector![10.0, 10.0], vector![0.0, 10.0]));
    assert_eq!(e[3], (vector![0.0, 10.0], vector![0.0, 0.0]));
}

#[test]
fn horizontal_line_crosses_right_then_left() {
    let seg = line_rect_crossings(vector![0.0, 5.0], vector![1.0, 0.0], &square10())
        .expect("two crossings");
    // bottom/top are parallel and skipped; right is found before left
    assert_eq!(seg.pt1, vector![10.0, 5.0]);
    assert_eq!(seg.pt2, vector![0.0, 5.0]);
}

#[test]
fn vertical_line_crosses_bottom_then_top() {
    let seg = line_rect_crossings(vector![3.0, 0.0], vector![0.0, 1.0], &square10())
        .expect("two crossings");
    assert_eq!(seg.pt1, vector![3.0, 0.0]);
    assert_eq!(seg.pt2, vector![3.0, 10.0]);
}

#[test]
fn slanted_line_crossings_lie_on_boundary() {
    let r = square10();
    let dir = vector![2.0, 1.0].normalize();
    let seg = line_rect_crossings(vector![0.0, 2.0], dir, &r).expect("two crossings");
    assert!(r.on_boundary_eps(seg.pt1, 1e-9));
    assert!(r.on_boundary_eps(seg.pt2, 1e-9));
    let chord = Vector2::<f64>::new(10.0, 7.0) - Vector2::<f64>::new(0.0, 2.0);
    assert!((seg.length() - chord.norm()).abs() < 1e-9);
    assert!((seg.pt1 - Vector2::new(10.0, 7.0)).norm() < 1e-9);
}

#[test]
fn diagonal_through_corners_is_discarded() {
    // every edge reports a shared corner: four hits
    assert!(line_rect_crossings(vector![0.0, 0.0], vector![1.0, 1.0], &square10()).is_none());
}

#[test]
fn corner_with_third_crossing_is_discarded() {
    // through (10,0) and (0,5): bottom (s=1), right (s=0) and left all report
    let r = square10();
    assert!(line_rect_crossings(vector![10.0, 0.0], vector![-2.0, 1.0], &r).is_none());
}

#[test]
fn slanted_corner_line_follows_lu_rounding() {
    // the 8° sweep line through (87.5, 37.5): pivoted LU puts the bottom edge
    // at s = 1 + ulp and the right edge at s = -0, so only one edge reports
    let r = Rect2::from_corners(vector![37.5, 37.5], vector![87.5, 87.5]);
    let th = 8.0f64.to_radians();
    let dir = Vector2::new(th.cos(), th.sin());
    let normal = Vector2::new(-dir.y, dir.x);
    let p0 = normal * vector![87.5, 37.5].dot(&normal);
    assert!(line_rect_crossings(p0, dir, &r).is_none());
}

#[test]
fn outer_corner_touch_reports_the_corner_twice() {
    // x + y = 20 touches only (10,10); right (s=1) and top (s=0) both report it
    let seg = line_rect_crossings(vector![0.0, 20.0], vector![1.0, -1.0], &square10())
        .expect("two reports of the same corner");
    assert_eq!(seg.pt1, vector![10.0, 10.0]);
    assert_eq!(seg.pt2, vector![10.0, 10.0]);
    assert_eq!(seg.length(), 0.0);
}

#[test]
fn line_missing_rect_is_discarded() {
    assert!(line_rect_crossings(vector![0.0, 20.0], vector![1.0, 0.0], &square10()).is_none());
    assert!(line_rect_crossings(vector![-5.0, 0.0], vector![0.0, 1.0], &square10()).is_none());
}

#[test]
fn line_on_bottom_edge_is_reported_by_side_edges() {
    // bottom and top are parallel and skipped; right hits at s=0 and left at s=1
    let seg = line_rect_crossings(vector![0.0, 0.0], vector![1.0, 0.0], &square10())
        .expect("side edges report both ends");
    assert_eq!(seg.pt1, vector![10.0, 0.0]);
    assert_eq!(seg.pt2, vector![0.0, 0.0]);
}

#[test]
fn eps_det_skips_near_parallel_edges() {
    let r = square10();
    let dir = vector![1.0, 1e-14];
    let exact = line_rect_crossings(vector![0.0, 5.0], dir, &r).expect("exact solve");
    assert!(r.on_boundary_eps(exact.pt1, 1e-9));
    let cfg = GeomCfg {
        eps_det: 1e-9,
        ..GeomCfg::default()
    };
    let loose = line_rect_crossings_cfg(vector![0.0, 5.0], dir, &r, cfg).expect("side edges");
    assert!((loose.pt1 - exact.pt1).norm() < 1e-9);
    assert!((loose.pt2 - exact.pt2).norm() < 1e-9);
}

#[test]
fn segment_left_to_right_and_reverse() {
    let s = Segment::new(vector![4.0, 1.0], vector![-1.0, 2.0]);
    let c = s.left_to_right();
    assert_eq!(c.pt1, vector![-1.0, 2.0]);
    assert_eq!(c.pt2, vector![4.0, 1.0]);
    assert_eq!(c.left_to_right(), c);
    assert_eq!(c.reversed(), s);
    // equal x keeps the found order
    let v = Segment::new(vector![1.0, 5.0], vector![1.0, 0.0]);
    assert_eq!(v.left_to_right(), v);
}

#[test]
fn crossings_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    let r = Rect2::from_corners(vector![-3.0, 1.0], vector![4.0, 6.5]);
    for _ in 0..200 {
        let th: f64 = rng.gen_range(0.0..std::f64::consts::PI);
        let dir = Vector2::new(th.cos(), th.sin());
        let p0 = Vector2::new(rng.gen_range(-3.0..4.0), rng.gen_range(1.0..6.5));
        // a line through an interior point always crosses the boundary twice
        // unless it passes a corner exactly, which random draws avoid
        let seg = line_rect_crossings(p0, dir, &r).expect("interior line");
        assert!(r.on_boundary_eps(seg.pt1, 1e-9));
        assert!(r.on_boundary_eps(seg.pt2, 1e-9));
        let mid = (seg.pt1 + seg.pt2) * 0.5;
        assert!(mid.x >= r.min.x - 1e-9 && mid.x <= r.max.x + 1e-9);
    }
}
