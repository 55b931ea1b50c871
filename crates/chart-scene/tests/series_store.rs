// File: crates/chart-scene/tests/series_store.rs
// Purpose: Series store contract: unique names, extrema under any append order, per-point rejection.

use chart_scene::{ChartError, InvalidPointKind, Point, SeriesStore, SeriesStyle, StyleHint};

#[test]
fn duplicate_names_are_refused() {
    let mut store = SeriesStore::new();
    store.create_series("Total revenue").unwrap();
    let err = store.create_series("Total revenue").unwrap_err();
    assert_eq!(err, ChartError::DuplicateName("Total revenue".to_string()));
    assert_eq!(store.len(), 1);
}

#[test]
fn extrema_bound_every_point_regardless_of_order() {
    let mut store = SeriesStore::new();
    let h = store.create_series("s").unwrap();
    store.append(h, &[Point::new(5.0, 1.0), Point::new(1.0, 7.0)]).unwrap();
    store.append(h, &[Point::new(9.0, -3.0), Point::new(3.0, 2.0), Point::new(0.5, 0.0)]).unwrap();

    let e = store.extrema(h).unwrap().expect("non-empty series");
    assert_eq!((e.x_min, e.x_max, e.y_min, e.y_max), (0.5, 9.0, -3.0, 7.0));
    for p in store.get(h).unwrap().points() {
        assert!(e.x_min <= p.x && p.x <= e.x_max, "x {} outside extrema", p.x);
        assert!(e.y_min <= p.y && p.y <= e.y_max, "y {} outside extrema", p.y);
    }
}

#[test]
fn empty_series_has_no_extrema() {
    let mut store = SeriesStore::new();
    let h = store.create_series("empty").unwrap();
    assert_eq!(store.extrema(h).unwrap(), None);
    assert!(store.get(h).unwrap().is_empty());
}

#[test]
fn nan_point_is_rejected_without_losing_the_series() {
    let mut store = SeriesStore::new();
    let h = store.create_series("s").unwrap();
    let valid = [Point::new(0.0, 1.0), Point::new(1.0, 2.0), Point::new(2.0, 3.0)];
    assert!(store.append(h, &valid).unwrap().is_clean());

    let report = store.append(h, &[Point::new(3.0, f64::NAN)]).unwrap();
    assert_eq!(report.accepted, 0);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].kind, InvalidPointKind::NonFiniteY);
    assert_eq!(store.get(h).unwrap().points(), &valid);
}

#[test]
fn mixed_batch_keeps_good_points_and_lists_bad_indices() {
    let mut store = SeriesStore::new();
    let h = store.create_series("s").unwrap();
    let report = store
        .append(
            h,
            &[
                Point::new(0.0, 1.0),
                Point::new(1.0, f64::INFINITY),
                Point::new(2.0, 4.0),
                Point::new(f64::NAN, 5.0),
            ],
        )
        .unwrap();

    assert_eq!(report.accepted, 2);
    let indices: Vec<usize> = report.rejected.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![1, 3]);
    assert_eq!(report.rejected[1].kind, InvalidPointKind::NonFiniteX);

    let e = store.extrema(h).unwrap().unwrap();
    assert_eq!((e.y_min, e.y_max), (1.0, 4.0));
}

#[test]
fn rejections_can_be_escalated() {
    let mut store = SeriesStore::new();
    let h = store.create_series("s").unwrap();
    let report = store.append(h, &[Point::new(0.0, 1.0), Point::new(1.0, f64::NAN)]).unwrap();
    match report.into_result() {
        Err(ChartError::InvalidPoint(e)) => assert_eq!(e.index, 1),
        other => panic!("expected InvalidPoint, got {other:?}"),
    }

    let clean = store.append(h, &[Point::new(2.0, 2.0)]).unwrap();
    assert_eq!(clean.into_result(), Ok(1));
}

#[test]
fn handles_from_another_store_are_unknown() {
    let mut a = SeriesStore::new();
    let mut b = SeriesStore::new();
    let ha = a.create_series("s").unwrap();
    b.create_series("s").unwrap();

    assert_eq!(b.append(ha, &[Point::new(0.0, 0.0)]), Err(ChartError::UnknownSeries(ha)));
    assert!(b.extrema(ha).is_err());
}

#[test]
fn lookup_by_name_and_creation_order() {
    let mut store = SeriesStore::new();
    let a = store.create_series("a").unwrap();
    let b = store.create_series_with("b", SeriesStyle::dashed(2.0)).unwrap();

    assert_eq!(store.handle_of("b"), Some(b));
    assert_eq!(store.handle_of("missing"), None);
    assert_eq!(store.handles(), vec![a, b]);
    assert_eq!(store.get(b).unwrap().style().hint, StyleHint::Dashed);
    assert_eq!(store.get(a).unwrap().name(), "a");
}
