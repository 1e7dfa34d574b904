// End-to-end flow over the boundary subsystem:
//   hydrate -> filter -> focus -> edit -> commit -> refresh -> render.

use farmbound::{
    BoundaryEditor, BoundaryError, BoundaryFilter, Catalog, FarmId, FarmRecord, Focus,
    FocusController, MemoryStore, render_set, render_set_to_geojson,
};
use geo::Point;
use serde_json::json;

fn record(value: serde_json::Value) -> FarmRecord {
    serde_json::from_value(value).unwrap()
}

fn seeded_store() -> MemoryStore {
    MemoryStore::new(vec![
        record(json!({
            "id": "farm-1",
            "approved": true,
            "farmName": "River plot",
            "farmerName": "Kofi Mensah",
            "region": "Ashanti",
            "district": "Ejisu",
            "cropType": "Cocoa",
            "boundaryCoordinates": [[6.0, -1.5], [6.0, -1.4], [6.1, -1.4], [6.1, -1.5]]
        })),
        record(json!({
            "id": "farm-2",
            "approved": false,
            "farmName": "Hilltop",
            "farmerName": "Ama Serwaa",
            "region": "Volta",
            "district": "Ho West",
            "cropType": "Maize",
            "boundaryCoordinates": null
        })),
        record(json!({
            "id": "farm-3",
            "approved": true,
            "farmName": "Old survey",
            "farmerName": "Yaw Boateng",
            "region": "Ashanti",
            "cropType": "Cocoa",
            "boundaryCoordinates": "not coordinates"
        })),
    ])
}

#[test]
fn hydrate_edit_commit_refresh_round_trip() {
    let store = seeded_store();
    let mut catalog = Catalog::load_all(&store).unwrap();
    let mut controller = FocusController::new();
    let mut editor = BoundaryEditor::new();

    // Every farm is listed; only the parsable ring renders.
    assert_eq!(catalog.len(), 3);
    let initial = controller.clear_focus(&catalog);
    assert_eq!(initial.len(), 1);
    assert_eq!(initial[0].farm_id, "farm-1");

    // Draw a boundary for the farm that has none.
    editor.begin(FarmId::new("farm-2"), None).unwrap();
    editor.add_point(Point::new(0.0, 7.0)).unwrap();
    editor.add_point(Point::new(0.1, 7.0)).unwrap();

    let err = editor.commit(&store, &mut catalog).unwrap_err();
    assert!(matches!(err, BoundaryError::InsufficientPoints { got: 2 }));

    editor.add_point(Point::new(0.1, 7.1)).unwrap();
    editor.commit(&store, &mut catalog).unwrap();

    // The commit flowed through the store and back via full re-hydration.
    let features = controller.catalog_refreshed(&catalog);
    assert_eq!(features.len(), 2);
    assert!(catalog.get(&FarmId::new("farm-2")).unwrap().has_shape());

    // Focus isolates the fresh boundary; the GeoJSON export closes its ring.
    let focused = controller.select(FarmId::new("farm-2"), &catalog);
    assert_eq!(focused.len(), 1);
    let doc = render_set_to_geojson(&focused);
    let ring = doc["features"][0]["geometry"]["coordinates"][0].as_array().unwrap();
    assert_eq!(ring.len(), 4); // 3 vertices + closing point
    assert_eq!(ring.first(), ring.last());

    // Clearing focus restores the full render set.
    let cleared = controller.clear_focus(&catalog);
    assert_eq!(cleared.len(), 2);
}

#[test]
fn failed_write_keeps_the_session_and_the_catalog_consistent() {
    let store = seeded_store();
    let mut catalog = Catalog::load_all(&store).unwrap();
    let mut editor = BoundaryEditor::new();

    editor.begin(FarmId::new("farm-2"), None).unwrap();
    for p in [Point::new(0.0, 7.0), Point::new(0.1, 7.0), Point::new(0.1, 7.1)] {
        editor.add_point(p).unwrap();
    }

    store.set_fail_writes(true);
    let err = editor.commit(&store, &mut catalog).unwrap_err();
    assert!(matches!(err, BoundaryError::PersistenceFailure(_)));

    // Nothing was lost and nothing leaked into the catalog.
    assert!(editor.is_editing());
    assert_eq!(editor.working_ring().unwrap().len(), 3);
    assert!(!catalog.get(&FarmId::new("farm-2")).unwrap().has_shape());
}

#[test]
fn filters_compose_over_the_hydrated_catalog() {
    let store = seeded_store();
    let catalog = Catalog::load_all(&store).unwrap();

    let ashanti = catalog.filter(&BoundaryFilter {
        region: Some("ashanti".into()),
        ..Default::default()
    });
    assert_eq!(ashanti.len(), 2);

    let hits = catalog.filter(&BoundaryFilter {
        text: Some("mensah".into()),
        region: Some("Ashanti".into()),
        ..Default::default()
    });
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].farm_id, FarmId::new("farm-1"));
}

#[test]
fn focus_state_is_a_pure_projection_over_refreshes() {
    let store = seeded_store();
    let mut catalog = Catalog::load_all(&store).unwrap();
    let mut controller = FocusController::new();
    let mut editor = BoundaryEditor::new();

    controller.select(FarmId::new("farm-2"), &catalog);
    assert_eq!(render_set(&catalog, controller.focus()).len(), 0);

    // Committing a ring for the focused farm makes it appear without any
    // focus mutation.
    editor.begin(FarmId::new("farm-2"), None).unwrap();
    for p in [Point::new(0.0, 7.0), Point::new(0.1, 7.0), Point::new(0.1, 7.1)] {
        editor.add_point(p).unwrap();
    }
    editor.commit(&store, &mut catalog).unwrap();

    assert_eq!(controller.focus(), &Focus::Focused(FarmId::new("farm-2")));
    assert_eq!(render_set(&catalog, controller.focus()).len(), 1);
}
