use super::*;
use crate::geom::{Circle, LineSegment};
use nalgebra::vector;

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
    LineSegment::from_coords(x1, y1, x2, y2).unwrap()
}

fn circle(x: f64, y: f64, r: f64) -> Circle {
    Circle::from_coords(x, y, r).unwrap()
}

fn equilateral_sides() -> [LineSegment; 3] {
    [
        seg(10.0, 0.0, 0.0, 0.0),
        seg(10.0, 0.0, 5.0, 8.66),
        seg(0.0, 0.0, 5.0, 8.66),
    ]
}

fn right_sides() -> [LineSegment; 3] {
    [
        seg(0.0, 0.0, 10.0, 0.0),
        seg(10.0, 0.0, 0.0, 10.0),
        seg(0.0, 10.0, 0.0, 0.0),
    ]
}

#[test]
fn equilateral_triangle_is_classified() {
    let t = Triangle::new(&equilateral_sides()).unwrap();
    assert!(t.is_equilateral());
    assert_eq!(t.kind(), SymbolKind::EquilateralTriangle);
    assert_eq!(Symbol::from(t).kind(), SymbolKind::EquilateralTriangle);
}

#[test]
fn right_triangle_is_plain() {
    let t = Triangle::new(&right_sides()).unwrap();
    assert!(!t.is_equilateral());
    assert_eq!(t.kind(), SymbolKind::Triangle);
}

#[test]
fn triangle_equality_ignores_side_order() {
    let [a, b, c] = equilateral_sides();
    let t1 = Triangle::new(&[a, b, c]).unwrap();
    let t2 = Triangle::new(&[c, a, b]).unwrap();
    assert_eq!(t1, t2);
    assert_ne!(t1, Triangle::new(&right_sides()).unwrap());
}

#[test]
fn triangle_rejections() {
    let [a, b, _] = equilateral_sides();
    assert_eq!(
        Triangle::new(&[a, b]).unwrap_err(),
        ShapeError::WrongCount { expected: 3, found: 2 }
    );

    let far = [seg(0.0, 0.0, 10.0, 0.0), seg(0.0, 50.0, 10.0, 60.0), seg(90.0, 0.0, 95.0, 40.0)];
    assert_eq!(Triangle::new(&far).unwrap_err(), ShapeError::Disconnected);

    // Flat obtuse triangle with 7.5° base angles: pairwise angles 7.5 + 15 + 7.5.
    let h = 10.0 * 7.5f64.to_radians().tan();
    let flat = [seg(0.0, 0.0, 20.0, 0.0), seg(20.0, 0.0, 10.0, h), seg(10.0, h, 0.0, 0.0)];
    match Triangle::new(&flat) {
        Err(ShapeError::AngleSum { degrees }) => assert!((degrees - 30.0).abs() < 1e-6),
        other => panic!("expected angle sum rejection, got {other:?}"),
    }
}

#[test]
fn rectangle_accepts_axis_aligned_box() {
    let sides = [
        seg(0.0, 0.0, 20.0, 0.0),
        seg(20.0, 0.0, 20.0, 10.0),
        seg(20.0, 10.0, 0.0, 10.0),
        seg(0.0, 10.0, 0.0, 0.0),
    ];
    let r = Rectangle::new(&sides).unwrap();
    let [s0, s1, s2, s3] = sides;
    assert_eq!(r, Rectangle::new(&[s2, s0, s3, s1]).unwrap());
}

#[test]
fn rectangle_rejects_parallelogram_and_wrong_count() {
    let sides = [
        seg(0.0, 0.0, 20.0, 0.0),
        seg(20.0, 0.0, 25.0, 10.0),
        seg(25.0, 10.0, 5.0, 10.0),
        seg(5.0, 10.0, 0.0, 0.0),
    ];
    assert_eq!(Rectangle::new(&sides).unwrap_err(), ShapeError::NotRectangular);
    assert_eq!(
        Rectangle::new(&sides[..3]).unwrap_err(),
        ShapeError::WrongCount { expected: 4, found: 3 }
    );
}

#[test]
fn snowman_on_a_horizontal_axis() {
    let parts = [circle(0.0, 0.0, 0.5), circle(2.0, 0.0, 1.5), circle(6.0, 0.0, 2.5)];
    let s = Snowman::new(&parts).unwrap();
    let radii: Vec<f64> = s.circles().iter().map(|c| c.radius()).collect();
    assert_eq!(radii, vec![0.5, 1.5, 2.5]);
}

#[test]
fn snowman_sorts_by_radius_and_ignores_input_order() {
    let big = circle(0.0, 0.0, 3.0);
    let mid = circle(3.0, 4.0, 2.0);
    let small = circle(5.0, 6.0, 1.0);
    let s1 = Snowman::new(&[big, mid, small]).unwrap();
    let s2 = Snowman::new(&[mid, small, big]).unwrap();
    assert_eq!(s1, s2);
    assert_eq!(s1.circles(), &[small, mid, big]);
}

#[test]
fn snowman_rejections() {
    let gaps = [circle(0.0, 0.0, 1.0), circle(100.0, 0.0, 2.0), circle(200.0, 0.0, 3.0)];
    assert_eq!(Snowman::new(&gaps).unwrap_err(), ShapeError::NotTangent);

    let bent = [circle(0.0, 0.0, 1.0), circle(3.0, 0.0, 2.0), circle(3.0, 5.0, 3.0)];
    assert_eq!(Snowman::new(&bent).unwrap_err(), ShapeError::NotCollinear);

    assert!(matches!(
        Snowman::new(&gaps[..2]),
        Err(ShapeError::WrongCount { expected: 3, found: 2 })
    ));
}

fn hallow_parts(radius: f64) -> [Symbol; 3] {
    let [a, b, c] = equilateral_sides();
    let triangle = Triangle::new(&[c, b, a]).unwrap();
    [
        Symbol::Circle(circle(0.0, 0.0, radius)),
        Symbol::Line(seg(5.0, 8.66, 5.0, 0.0)),
        Symbol::Triangle(triangle),
    ]
}

#[test]
fn hallow_accepts_inscribed_configuration() {
    let [c, l, t] = hallow_parts(5.0);
    let h = Hallow::new(&[c.clone(), l.clone(), t.clone()]).unwrap();
    assert_eq!(h.circle().radius(), 5.0);
    assert_eq!(Symbol::Line(*h.line()), l);
    // Part order does not matter.
    assert_eq!(Hallow::new(&[t, c, l]).unwrap(), h);
}

#[test]
fn hallow_rejections() {
    let [_, l, t] = hallow_parts(5.0);
    let two_circles = [Symbol::Circle(circle(0.0, 0.0, 5.0)), Symbol::Circle(circle(1.0, 0.0, 5.0)), t.clone()];
    assert_eq!(Hallow::new(&two_circles).unwrap_err(), ShapeError::MissingPart);

    let [c_big, _, _] = hallow_parts(20.0);
    assert_eq!(Hallow::new(&[c_big, l.clone(), t.clone()]).unwrap_err(), ShapeError::NotInscribed);

    // A line clear of every side.
    let stub = Symbol::Line(seg(100.0, 100.0, 110.0, 100.0));
    let [c, _, _] = hallow_parts(5.0);
    assert_eq!(Hallow::new(&[c, stub, t]).unwrap_err(), ShapeError::Disconnected);

    assert!(matches!(
        Hallow::new(&[l]),
        Err(ShapeError::WrongCount { expected: 3, found: 1 })
    ));
}

#[test]
fn kinds_and_labels() {
    assert_eq!(SymbolKind::EquilateralTriangle.to_string(), "Equilateral Triangle");
    assert_eq!(SymbolKind::LineSegment.label(), "LineSegment");
    assert!(SymbolKind::Circle.is_basic());
    assert!(!SymbolKind::Hallow.is_basic());
    let triangles: Vec<_> = SymbolKind::ALL.iter().filter(|k| k.is_triangle()).collect();
    assert_eq!(triangles.len(), 2);

    let basic = BasicSymbol::Circle(circle(1.0, 2.0, 3.0));
    assert_eq!(basic.kind(), SymbolKind::Circle);
    assert_eq!(Symbol::from(basic).as_circle(), Some(circle(1.0, 2.0, 3.0)));
    assert_eq!(Symbol::from(basic).as_line(), None);
}

#[test]
fn draw_list_per_variant() {
    let line = Symbol::Line(seg(1.0, 2.0, 3.0, 4.0));
    assert_eq!(line.strokes().len(), 1);
    assert_eq!(line.palette(), Palette::Basic);
    assert_eq!(line.label(), Label { text: "LineSegment", anchor: vector![1.0, 2.0] });

    let t = Symbol::from(Triangle::new(&equilateral_sides()).unwrap());
    assert_eq!(t.strokes().len(), 3);
    assert_eq!(t.palette(), Palette::Composite);
    assert_eq!(t.label().text, "Equilateral Triangle");
    assert_eq!(t.label().anchor, vector![10.0, 0.0]);

    let snow = Symbol::from(
        Snowman::new(&[circle(6.0, 0.0, 2.5), circle(0.0, 0.0, 0.5), circle(2.0, 0.0, 1.5)]).unwrap(),
    );
    assert!(snow.strokes().iter().all(|s| matches!(s, Stroke::Circle(_))));
    assert_eq!(snow.label().anchor, vector![0.0, 0.0]);

    let [c, l, tri] = hallow_parts(5.0);
    let h = Symbol::from(Hallow::new(&[c, l, tri]).unwrap());
    let strokes = h.strokes();
    assert_eq!(strokes.len(), 5);
    assert!(matches!(strokes[0], Stroke::Circle(_)));
    assert_eq!(h.label(), Label { text: "Hallow", anchor: vector![0.0, 0.0] });
}

#[test]
fn rectangle_palette_is_distinct() {
    let r = Symbol::from(
        Rectangle::new(&[
            seg(0.0, 0.0, 20.0, 0.0),
            seg(20.0, 0.0, 20.0, 10.0),
            seg(20.0, 10.0, 0.0, 10.0),
            seg(0.0, 10.0, 0.0, 0.0),
        ])
        .unwrap(),
    );
    assert_eq!(r.palette(), Palette::Rectangle);
    assert_eq!(r.label(), Label { text: "Rectangle", anchor: vector![0.0, 0.0] });
    assert_eq!(r.strokes().len(), 4);
}
