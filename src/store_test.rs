use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn store_with_active(points: &[Point]) -> CurveStore {
    let mut store = CurveStore::new();
    store.begin_active();
    for &p in points {
        store.append_point_to_active(p).unwrap();
    }
    store
}

// =============================================================
// Active curve
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = CurveStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.active().is_none());
}

#[test]
fn append_without_active_is_refused() {
    let mut store = CurveStore::new();
    assert_eq!(store.append_point_to_active(pt(1.0, 1.0)), Err(StoreError::NotDrawing));
}

#[test]
fn begin_active_discards_previous_active() {
    let mut store = store_with_active(&[pt(1.0, 1.0)]);
    store.begin_active();
    assert!(store.active().unwrap().is_empty());
}

#[test]
fn abandon_returns_active_and_clears_it() {
    let mut store = store_with_active(&[pt(1.0, 1.0), pt(2.0, 2.0)]);
    let dropped = store.abandon_active().unwrap();
    assert_eq!(dropped.len(), 2);
    assert!(store.active().is_none());
    assert!(store.is_empty());
}

// =============================================================
// Commit
// =============================================================

#[test]
fn commit_moves_active_into_committed() {
    let points = [pt(10.0, 10.0), pt(50.0, 10.0), pt(80.0, 40.0)];
    let mut store = store_with_active(&points);

    let curve = store.commit_active().unwrap();

    assert_eq!(curve.points(), &points);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).unwrap().points(), &points);
    assert!(store.active().is_none());
}

#[test]
fn commit_appends_in_order() {
    let mut store = store_with_active(&[pt(0.0, 0.0), pt(1.0, 0.0)]);
    store.commit_active().unwrap();
    store.begin_active();
    store.append_point_to_active(pt(5.0, 5.0)).unwrap();
    store.append_point_to_active(pt(6.0, 5.0)).unwrap();
    store.commit_active().unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.committed()[0].get(0), Some(pt(0.0, 0.0)));
    assert_eq!(store.committed()[1].get(0), Some(pt(5.0, 5.0)));
}

#[test]
fn commit_empty_active_is_refused() {
    let mut store = store_with_active(&[]);
    assert_eq!(store.commit_active(), Err(StoreError::DegenerateCurve { len: 0 }));
    assert!(store.is_empty());
    assert!(store.active().unwrap().is_empty());
}

#[test]
fn commit_single_point_is_refused_and_kept() {
    let mut store = store_with_active(&[pt(3.0, 4.0)]);
    assert_eq!(store.commit_active(), Err(StoreError::DegenerateCurve { len: 1 }));
    assert!(store.is_empty());
    assert_eq!(store.active().unwrap().points(), &[pt(3.0, 4.0)]);
}

#[test]
fn commit_without_active_is_refused() {
    let mut store = CurveStore::new();
    assert_eq!(store.commit_active(), Err(StoreError::NotDrawing));
}

// =============================================================
// Replace
// =============================================================

#[test]
fn replace_touches_only_target_point() {
    let mut store = store_with_active(&[pt(0.0, 0.0), pt(10.0, 0.0), pt(20.0, 0.0)]);
    store.commit_active().unwrap();

    store.replace_point_in_committed(0, 1, pt(10.0, 40.0)).unwrap();

    assert_eq!(store.get(0).unwrap().points(), &[pt(0.0, 0.0), pt(10.0, 40.0), pt(20.0, 0.0)]);
}

#[test]
fn replace_stale_curve_index_is_refused() {
    let mut store = CurveStore::new();
    assert_eq!(
        store.replace_point_in_committed(2, 0, pt(1.0, 1.0)),
        Err(StoreError::CurveNotFound(2))
    );
}

#[test]
fn replace_stale_point_index_is_refused() {
    let mut store = store_with_active(&[pt(0.0, 0.0), pt(10.0, 0.0)]);
    store.commit_active().unwrap();
    assert_eq!(
        store.replace_point_in_committed(0, 5, pt(1.0, 1.0)),
        Err(StoreError::PointNotFound { curve: 0, point: 5 })
    );
    assert_eq!(store.get(0).unwrap().points(), &[pt(0.0, 0.0), pt(10.0, 0.0)]);
}

#[test]
fn store_error_messages_name_the_problem() {
    assert!(StoreError::DegenerateCurve { len: 1 }.to_string().contains("1 point"));
    assert_eq!(StoreError::CurveNotFound(3).to_string(), "curve not found: 3");
}
