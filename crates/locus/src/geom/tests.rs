use super::*;
use crate::ids::ObjectId;
use proptest::prelude::*;

fn pt(x: f64, y: f64) -> Shape {
    Shape::Point(Point::new(x, y))
}

fn circ(x: f64, y: f64, r: f64) -> Shape {
    Shape::Circle(Circle::new(x, y, r))
}

#[test]
fn point_arithmetic_drops_identity() {
    let a = Point::new(1.0, 2.0).with_id(ObjectId(7));
    let b = Point::new(3.0, -1.0).with_id(ObjectId(8));
    let sum = a + b;
    assert!(sum.is_congruent(&Point::new(4.0, 1.0)));
    assert!(sum.id.is_none());
    assert!((a - b).is_congruent(&Point::new(-2.0, 3.0)));
    assert!((a * 2.0).is_congruent(&Point::new(2.0, 4.0)));
    assert!((a / 2.0).is_congruent(&Point::new(0.5, 1.0)));
    assert!((Point::new(3.0, 4.0).magnitude() - 5.0).abs() < 1e-12);
}

#[test]
fn translate_keeps_movers_identity() {
    let mover = Point::new(1.0, 1.0).with_id(ObjectId(3));
    let by = Point::new(20.0, 20.0).with_id(ObjectId(9));
    let moved = mover.translate(by);
    assert_eq!(moved.id, Some(ObjectId(3)));
    assert!(moved.is_congruent(&Point::new(21.0, 21.0)));

    let line = Line::new(0.0, 0.0, 1.0, 0.0).translate(Point::new(0.0, 2.0));
    assert!(line.p1.is_congruent(&Point::new(0.0, 2.0)));
    assert!(line.p2.is_congruent(&Point::new(1.0, 2.0)));
}

#[test]
fn congruence_is_exact_but_approx_eq_is_tolerant() {
    let a = Point::new(1.0, 1.0);
    let b = Point::new(1.0 + 1e-7, 1.0);
    assert!(!a.is_congruent(&b));
    assert!(a.approx_eq(&b));
}

#[test]
fn locus_filters_absent_and_empty_members() {
    let l = Locus::new([
        None,
        Some(pt(1.0, 0.0)),
        Some(Shape::Locus(Locus::empty())),
        None,
    ]);
    assert_eq!(l.len(), 1);
    assert!(Locus::new([None, None]).is_empty());
    assert!(Locus::empty().non_empty().is_none());
}

#[test]
fn circle_radius_precondition() {
    assert!(matches!(
        Circle::try_new(0.0, 0.0, -1.0),
        Err(GeomError::NegativeRadius(_))
    ));
    assert!(Circle::try_new(0.0, 0.0, f64::NAN).is_err());
    let result = std::panic::catch_unwind(|| Circle::new(0.0, 0.0, -2.0));
    assert!(result.is_err());
}

#[test]
fn distances() {
    assert!((distance(&pt(0.0, 0.0), &pt(3.0, 4.0)).unwrap() - 5.0).abs() < 1e-12);
    // point to circle boundary, both orders
    let c = circ(3.0, 4.0, 2.0);
    assert!((distance(&pt(0.0, 0.0), &c).unwrap() - 3.0).abs() < 1e-12);
    assert!((distance(&c, &pt(0.0, 0.0)).unwrap() - 3.0).abs() < 1e-12);
    // separated, touching, overlapping, nested circles
    let sep = distance(&circ(0.0, 0.0, 1.0), &circ(5.0, 0.0, 1.0)).unwrap();
    assert!((sep - 3.0).abs() < 1e-12);
    let touch = distance(&circ(0.0, 0.0, 2.0), &circ(4.0, 0.0, 2.0)).unwrap();
    assert!(touch.abs() < 1e-12);
    let overlap = distance(&circ(0.0, 0.0, 3.0), &circ(4.0, 0.0, 3.0)).unwrap();
    assert_eq!(overlap, 0.0);
    let nested = distance(&circ(0.0, 0.0, 10.0), &circ(2.0, 0.0, 1.0)).unwrap();
    assert!((nested - 7.0).abs() < 1e-12);
}

#[test]
fn unsupported_pairs_are_signalled() {
    let line = Shape::Line(Line::new(0.0, 0.0, 1.0, 1.0));
    let locus = Shape::Locus(Locus::of([pt(0.0, 0.0)]));
    assert_eq!(
        distance(&line, &pt(0.0, 0.0)),
        Err(GeomError::UnsupportedOperandPair {
            op: "distance",
            left: "line",
            right: "point"
        })
    );
    assert!(distance(&pt(0.0, 0.0), &locus).is_err());
    assert!(intersect(&circ(0.0, 0.0, 1.0), &line).is_err());
    assert!(inflate(&line, 1.0).is_err());
    // a line buried inside a locus still surfaces
    let mixed = Shape::Locus(Locus::of([pt(0.0, 0.0), line]));
    assert!(intersect(&mixed, &pt(0.0, 0.0)).is_err());
    assert!(inflate(&mixed, 1.0).is_err());
}

#[test]
fn point_point_intersection_is_exact() {
    let hit = intersect(&pt(1.0, 2.0), &pt(1.0, 2.0)).unwrap().unwrap();
    assert!(hit.approx_eq(&pt(1.0, 2.0)));
    assert!(intersect(&pt(1.0, 2.0), &pt(1.0, 2.0 + 1e-9)).unwrap().is_none());
}

#[test]
fn point_circle_intersection() {
    let on = intersect(&pt(3.0, 4.0), &circ(0.0, 0.0, 5.0)).unwrap().unwrap();
    assert!(on.approx_eq(&pt(3.0, 4.0)));
    let on_rev = intersect(&circ(0.0, 0.0, 5.0), &pt(3.0, 4.0)).unwrap().unwrap();
    assert!(on_rev.approx_eq(&pt(3.0, 4.0)));
    assert!(intersect(&pt(0.0, 0.0), &circ(0.0, 0.0, 5.0)).unwrap().is_none());
}

#[test]
fn concentric_equal_circles_coincide() {
    let a = circ(0.0, 0.0, 5.0);
    let b = circ(0.0, 0.0, 5.0);
    let hit = intersect(&a, &b).unwrap().unwrap();
    assert!(hit.approx_eq(&a));
    assert!(intersect(&a, &circ(0.0, 0.0, 4.0)).unwrap().is_none());
}

#[test]
fn external_tangency_is_single_point() {
    let hit = intersect(&circ(0.0, 0.0, 5.0), &circ(10.0, 0.0, 5.0))
        .unwrap()
        .unwrap();
    assert!(hit.approx_eq(&pt(5.0, 0.0)));
    assert!(intersect(&circ(0.0, 0.0, 5.0), &circ(10.1, 0.0, 5.0))
        .unwrap()
        .is_none());
}

#[test]
fn internal_tangency_both_orders() {
    let a = circ(0.0, 0.0, 1.0);
    let b = circ(2.0, 0.0, 3.0);
    let ab = intersect(&a, &b).unwrap().unwrap();
    let ba = intersect(&b, &a).unwrap().unwrap();
    assert!(ab.approx_eq(&pt(-1.0, 0.0)));
    assert!(ba.approx_eq(&pt(-1.0, 0.0)));
}

#[test]
fn nested_circles_do_not_meet() {
    let big = circ(0.0, 0.0, 10.0);
    let small = circ(2.0, 0.0, 1.0);
    assert!(intersect(&big, &small).unwrap().is_none());
    assert!(intersect(&small, &big).unwrap().is_none());
}

#[test]
fn crossing_circles_give_two_points() {
    let hit = intersect(&circ(0.0, 0.0, 5.0), &circ(6.0, 0.0, 5.0))
        .unwrap()
        .unwrap();
    let Shape::Locus(l) = &hit else {
        panic!("expected a locus, got {hit:?}");
    };
    assert_eq!(l.len(), 2);
    let pts: Vec<Point> = l
        .iter()
        .map(|s| match s {
            Shape::Point(p) => *p,
            other => panic!("expected points, got {other:?}"),
        })
        .collect();
    for p in &pts {
        assert!((p.magnitude() - 5.0).abs() < 1e-9);
        assert!(((*p - Point::new(6.0, 0.0)).magnitude() - 5.0).abs() < 1e-9);
    }
    let mid = (pts[0] + pts[1]) / 2.0;
    assert!(mid.approx_eq(&Point::new(3.0, 0.0)));
    assert!(hit.same_set(&Shape::Locus(Locus::of([pt(3.0, -4.0), pt(3.0, 4.0)]))));
}

#[test]
fn locus_intersections_recurse() {
    let two = Shape::Locus(Locus::of([pt(3.0, 4.0), pt(3.0, -4.0), pt(9.0, 9.0)]));
    let ring = Shape::Locus(Locus::of([circ(0.0, 0.0, 5.0)]));
    let hit = intersect(&two, &ring).unwrap().unwrap();
    assert!(hit.same_set(&Shape::Locus(Locus::of([pt(3.0, 4.0), pt(3.0, -4.0)]))));
    let rev = intersect(&ring, &two).unwrap().unwrap();
    assert!(rev.same_set(&hit));

    let miss = Shape::Locus(Locus::of([pt(1.0, 1.0)]));
    assert!(intersect(&miss, &ring).unwrap().is_none());
    assert!(intersect(&miss, &circ(0.0, 0.0, 5.0)).unwrap().is_none());
}

#[test]
fn inflate_point_is_circle() {
    let c = inflate(&pt(0.0, 0.0), 5.0).unwrap();
    assert!(c.approx_eq(&circ(0.0, 0.0, 5.0)));
    assert!(matches!(
        inflate(&pt(0.0, 0.0), -1.0),
        Err(GeomError::NegativeRadius(_))
    ));
}

#[test]
fn inflate_circle_cases() {
    let c = circ(1.0, 1.0, 10.0);
    let wide = inflate(&c, 12.0).unwrap();
    assert!(wide.approx_eq(&circ(1.0, 1.0, 22.0)));

    let equal = inflate(&c, 10.0).unwrap();
    assert!(equal.approx_eq(&Shape::Locus(Locus::of([circ(1.0, 1.0, 20.0), pt(1.0, 1.0)]))));

    let narrow = inflate(&c, 4.0).unwrap();
    assert!(narrow.approx_eq(&Shape::Locus(Locus::of([
        circ(1.0, 1.0, 14.0),
        circ(1.0, 1.0, 6.0)
    ]))));
}

#[test]
fn inflate_locus_is_elementwise() {
    let l = Shape::Locus(Locus::of([pt(0.0, 0.0), circ(5.0, 0.0, 1.0)]));
    let out = inflate(&l, 2.0).unwrap();
    let expect = Shape::Locus(Locus::of([circ(0.0, 0.0, 2.0), circ(5.0, 0.0, 3.0)]));
    assert!(out.approx_eq(&expect));
    // empty stays empty
    assert!(inflate(&Shape::Locus(Locus::empty()), 3.0).unwrap().is_empty());
}

#[test]
fn double_inflation_is_not_additive_for_circles() {
    let origin = pt(0.0, 0.0);
    let once = inflate(&origin, 15.0).unwrap();
    let twice = inflate(&inflate(&origin, 10.0).unwrap(), 5.0).unwrap();
    assert!(once.approx_eq(&circ(0.0, 0.0, 15.0)));
    assert!(!twice.same_set(&once));
    assert!(twice.same_set(&Shape::Locus(Locus::of([circ(0.0, 0.0, 15.0), circ(0.0, 0.0, 5.0)]))));
}

#[test]
fn shape_helpers() {
    let l = Shape::Locus(Locus::of([
        Shape::Locus(Locus::of([pt(1.0, 0.0)])),
        circ(0.0, 0.0, 2.0),
    ]));
    assert_eq!(l.leaves().len(), 2);
    assert!(l.contains(&Point::new(0.0, -2.0)));
    assert!(l.contains(&Point::new(1.0, 0.0)));
    assert!(!l.contains(&Point::new(0.5, 0.0)));
    assert!(l.representative().unwrap().approx_eq(&Point::new(1.0, 0.0)));
    assert!(circ(1.0, 0.0, 2.0)
        .representative()
        .unwrap()
        .approx_eq(&Point::new(3.0, 0.0)));
    assert!(Shape::Locus(Locus::empty()).representative().is_none());
    assert_eq!(l.kind(), "locus");
}

proptest! {
    #[test]
    fn circle_intersection_is_symmetric(
        x1 in -10.0f64..10.0, y1 in -10.0f64..10.0, r1 in 0.5f64..8.0,
        x2 in -10.0f64..10.0, y2 in -10.0f64..10.0, r2 in 0.5f64..8.0,
    ) {
        // keep away from tangency, where the two orders may classify differently
        let d = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
        prop_assume!((d - (r1 + r2)).abs() > 1e-3 && (d - (r1 - r2).abs()).abs() > 1e-3);
        let a = circ(x1, y1, r1);
        let b = circ(x2, y2, r2);
        let ab = intersect(&a, &b).unwrap();
        let ba = intersect(&b, &a).unwrap();
        match (ab, ba) {
            (None, None) => {}
            (Some(p), Some(q)) => prop_assert!(p.same_set(&q), "{p:?} vs {q:?}"),
            (p, q) => prop_assert!(false, "asymmetric: {p:?} vs {q:?}"),
        }
    }

    #[test]
    fn crossing_points_lie_on_both_circles(
        x2 in -6.0f64..6.0, y2 in -6.0f64..6.0, r1 in 1.0f64..6.0, r2 in 1.0f64..6.0,
    ) {
        let a = circ(0.0, 0.0, r1);
        let b = circ(x2, y2, r2);
        let c2 = Point::new(x2, y2);
        if let Some(hit) = intersect(&a, &b).unwrap() {
            for leaf in hit.leaves() {
                if let Shape::Point(p) = leaf {
                    prop_assert!((p.magnitude() - r1).abs() < 1e-3);
                    prop_assert!(((*p - c2).magnitude() - r2).abs() < 1e-3);
                }
            }
        }
    }

    #[test]
    fn point_inflation_is_additive(
        x in -50.0f64..50.0, y in -50.0f64..50.0, r1 in 0.0f64..20.0, r2 in 0.0f64..20.0,
    ) {
        let direct = inflate(&pt(x, y), r1 + r2).unwrap();
        prop_assert!(direct.approx_eq(&circ(x, y, r1 + r2)));
    }

    #[test]
    fn locus_intersection_is_symmetric(
        left in locus_members(),
        right in locus_members(),
        probe in member(),
    ) {
        let l = Shape::Locus(Locus::of(left));
        let r = Shape::Locus(Locus::of(right));
        for (a, b) in [(&l, &probe), (&l, &r)] {
            let ab = intersect(a, b).unwrap();
            let ba = intersect(b, a).unwrap();
            match (ab, ba) {
                (None, None) => {}
                (Some(p), Some(q)) => prop_assert!(p.same_set(&q), "{p:?} vs {q:?}"),
                (p, q) => prop_assert!(false, "asymmetric: {p:?} vs {q:?}"),
            }
        }
    }
}

/// Points on the circle of radius 4 around the origin (so they hit circle members
/// of that radius), free points, or circles from a small radius palette.
fn member() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (0.0f64..std::f64::consts::TAU).prop_map(|t| pt(4.0 * t.cos(), 4.0 * t.sin())),
        (-6.0f64..6.0, -6.0f64..6.0).prop_map(|(x, y)| pt(x, y)),
        (-6i32..=6, -6i32..=6, prop::sample::select(vec![1.0, 2.5, 4.0]))
            .prop_map(|(x, y, r)| circ(f64::from(x), f64::from(y), r)),
    ]
}

fn locus_members() -> impl Strategy<Value = Vec<Shape>> {
    prop::collection::vec(member(), 1..5)
}
