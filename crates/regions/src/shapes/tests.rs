//! Cross-variant checks through `Region` and randomized properties.

use super::*;
use crate::rand::{draw_ellipse, draw_polygon_radial, draw_rectangle, draw_region, RadialCfg, ReplayToken};
use crate::surface::{DrawCmd, Recorder};
use proptest::prelude::*;

fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

#[test]
fn region_dispatches_to_variant() {
    let regions: Vec<Region> = vec![
        FreePolygon::new(vec![c(0.0, 0.0), c(1.0, 0.0), c(0.0, 1.0)]).into(),
        Ellipse::new(c(0.5, 0.5), 0.3, 0.2).into(),
        Rectangle::new(0.2, 0.8, 0.1, 0.9).into(),
    ];
    let areas = [0.5, std::f64::consts::PI * 0.06, 0.48];
    for (r, a) in regions.iter().zip(areas) {
        assert!((r.area() - a).abs() < 1e-12, "{}", r.kind());
        assert!(r.contains(r.center()));
        assert_eq!(r.border(), r.vertices());
    }
    assert_eq!(regions[2].vertices().len(), 4);
}

#[test]
fn region_json_round_trip_keeps_geometry() {
    let json = r#"[
        {"kind":"free_polygon","vertices":[{"x":0.1,"y":0.1},{"x":0.9,"y":0.1},{"x":0.5,"y":0.8}]},
        {"kind":"ellipse","center":{"x":0.5,"y":0.5},"radius_x":0.2,"radius_y":0.1},
        {"kind":"rectangle","left":0.7,"right":0.3,"bottom":0.2,"top":0.6}
    ]"#;
    let regions: Vec<Region> = serde_json::from_str(json).unwrap();
    assert_eq!(regions[0].kind(), RegionKind::FreePolygon);
    assert_eq!(regions[1].kind(), RegionKind::Ellipse);
    assert_eq!(regions[2].kind(), RegionKind::Rectangle);
    let again: Vec<Region> =
        serde_json::from_str(&serde_json::to_string(&regions).unwrap()).unwrap();
    assert_eq!(again, regions);
}

#[test]
fn persisted_border_reloads_as_polygon() {
    let e = Region::from(Ellipse::circle(c(0.5, 0.5), 0.25));
    let border = e.border();
    let reloaded = Region::from_border(border.clone());
    assert_eq!(reloaded.kind(), RegionKind::FreePolygon);
    assert_eq!(reloaded.vertices(), border);
    // Inscribed polygon loses a little area, never gains.
    assert!(reloaded.area() < e.area());
    assert!(e.area() - reloaded.area() < 1e-3);
}

#[test]
fn border_with_controls_ellipse_density() {
    let e = Region::from(Ellipse::circle(c(0.5, 0.5), 0.25));
    let coarse = e.border_with(TessCfg::with_max_chord(0.1));
    let fine = e.border_with(TessCfg::with_max_chord(0.001));
    assert!(coarse.len() < fine.len());
    let r = Region::from(Rectangle::new(0.0, 1.0, 0.0, 1.0));
    assert_eq!(r.border_with(TessCfg::with_max_chord(0.1)).len(), 4);
}

#[test]
fn replacing_vertices_with_disjoint_shape() {
    let mut p = FreePolygon::new(vec![c(0.0, 0.0), c(0.4, 0.0), c(0.4, 0.4), c(0.0, 0.4)]);
    let query = c(0.2, 0.2);
    assert!(p.contains(query));
    p.set_vertices(vec![c(0.6, 0.6), c(1.0, 0.6), c(1.0, 1.0), c(0.6, 1.0)]);
    assert!(!p.contains(query));
    assert!(p.contains(c(0.8, 0.8)));
    assert!((p.area() - 0.16).abs() < 1e-12);
}

#[test]
fn polygon_and_rectangle_draw_the_same_path() {
    let rect = Rectangle::new(0.1, 0.6, 0.2, 0.7);
    let poly = FreePolygon::new(rect.vertices());
    let mut a = Recorder::new();
    let mut b = Recorder::new();
    Region::from(rect).draw(640.0, 480.0, &mut a);
    Region::from(poly).draw(640.0, 480.0, &mut b);
    assert_eq!(a.cmds, b.cmds);
    assert_eq!(a.cmds.first(), Some(&DrawCmd::BeginPath));
}

#[test]
fn bounds_cover_every_vertex() {
    for i in 0..30 {
        let r = draw_region(ReplayToken::new(11, i));
        let b = r.bounds().unwrap();
        assert!(r.vertices().iter().all(|v| b.contains_eps(*v, 1e-12)));
    }
}

fn token() -> impl Strategy<Value = ReplayToken> {
    (any::<u64>(), 0u64..1_000).prop_map(|(seed, index)| ReplayToken::new(seed, index))
}

proptest! {
    #[test]
    fn area_is_non_negative(tok in token()) {
        prop_assert!(draw_region(tok).area() >= 0.0);
    }

    #[test]
    fn center_lies_inside(tok in token()) {
        let r = draw_region(tok);
        prop_assume!(r.area() > 1e-9);
        prop_assert!(r.contains(r.center()));
    }

    #[test]
    fn polygon_area_ignores_winding_and_start(tok in token(), shift in 0usize..32) {
        let p = draw_polygon_radial(RadialCfg::default(), tok);
        let mut vs = p.vertices();
        vs.reverse();
        let k = shift % vs.len();
        vs.rotate_left(k);
        let q = FreePolygon::new(vs);
        prop_assert!((p.area() - q.area()).abs() < 1e-12);
        prop_assert!((p.signed_area() + q.signed_area()).abs() < 1e-12);
    }

    #[test]
    fn tessellation_is_inscribed(tok in token()) {
        let e = draw_ellipse(tok);
        let poly = FreePolygon::new(e.vertices());
        prop_assert!(poly.area() <= e.area() + 1e-12);
        let grown = Ellipse::new(e.center(), e.radius_x() * (1.0 + 1e-9), e.radius_y() * (1.0 + 1e-9));
        let on_or_inside = e.vertices().iter().all(|v| grown.contains(*v));
        prop_assert!(on_or_inside);
    }

    #[test]
    fn rectangle_queries_agree_with_normalized(tok in token(), px in 0.0f64..1.0, py in 0.0f64..1.0) {
        let r = draw_rectangle(tok);
        let n = r.normalized();
        let p = Coordinate::new(px, py);
        prop_assert_eq!(r.contains(p), n.contains(p));
        prop_assert!((r.area() - n.area()).abs() < 1e-15);
        prop_assert_eq!(r.vertices(), n.vertices());
    }

    #[test]
    fn polygon_from_rectangle_agrees_on_membership(tok in token(), px in 0.0f64..1.0, py in 0.0f64..1.0) {
        let r = draw_rectangle(tok);
        prop_assume!(r.area() > 1e-6);
        let poly = FreePolygon::new(r.vertices());
        let p = Coordinate::new(px, py);
        prop_assert_eq!(r.contains(p), poly.contains(p));
    }
}
