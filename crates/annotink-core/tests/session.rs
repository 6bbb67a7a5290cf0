//! End-to-end editing sessions driven through the public API.

use annotink_core::{
    Ids, InitOptions, LastShapePolicy, RecordingMarker, SelectionConfigStore, ShapeSnapshot,
    StoreConfig, ToolKind, ToolRegistry,
};
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_select_shape_then_feature_point() {
    init_logging();
    let mut store = SelectionConfigStore::new();

    store.add_selected_element(Some("sh1"), None);
    store.add_selected_element(None, Some("fp1"));

    assert_eq!(store.selected_shapes(), vec!["sh1".to_string()]);
    assert_eq!(store.selected_feature_points(), vec!["fp1".to_string()]);
    assert_eq!(store.selected_shape(), Some("sh1"));
}

#[test]
fn test_shortcut_driven_tool_switching() {
    init_logging();
    let mut store = SelectionConfigStore::with_marker(RecordingMarker::new());

    for key in ["r", "o", "f"] {
        let descriptor = ToolRegistry::by_shortcut(key).unwrap();
        store.set_selected_tool(Some(annotink_core::SelectedTool::from_descriptor(descriptor)));
        // Exactly one toolbar element carries the marker at a time.
        assert_eq!(store.marker().len(), 1);
    }

    assert_eq!(store.selected_tool().map(|tool| tool.kind), Some(ToolKind::Point));

    store.clear_selected_tool();
    assert!(store.marker().is_empty());
}

#[test]
fn test_copy_selection_then_reselect_pasted() {
    init_logging();
    let mut store = SelectionConfigStore::new();
    store.set_selected_elements(["a", "b"], Ids::None);

    let copied: Vec<ShapeSnapshot> = store
        .selected_shapes()
        .into_iter()
        .map(|id| ShapeSnapshot::new(json!({"id": id, "type": "rect"})))
        .collect();
    store.set_copied_elements(copied);

    // Pasting creates new shapes; the renderer reports their ids back.
    let pasted: Vec<String> = store
        .copied_elements()
        .iter()
        .filter_map(|snapshot| snapshot.id())
        .map(|id| format!("{id}-copy"))
        .collect();
    store.set_selected_elements(pasted, Ids::None);

    assert!(store.is_shape_selected("a-copy"));
    assert!(store.is_shape_selected("b-copy"));
    assert!(!store.is_shape_selected("a"));
    assert_eq!(store.copied_elements().len(), 2);
}

#[test]
fn test_remove_primary_under_each_policy() {
    init_logging();
    let mut retain = SelectionConfigStore::new();
    retain.set_selected_elements(["a", "b"], Ids::None);
    retain.remove_selected_element(Some("b"), None);
    assert_eq!(retain.selected_shape(), Some("b"));
    assert!(!retain.is_shape_selected("b"));

    let config = StoreConfig::from_json(r#"{"last_shape_policy": "repair"}"#).unwrap();
    assert_eq!(config.last_shape_policy, LastShapePolicy::Repair);
    let mut repair = SelectionConfigStore::with_config(config, RecordingMarker::new());
    repair.set_selected_elements(["a", "b"], Ids::None);
    repair.remove_selected_element(Some("b"), None);
    assert_eq!(repair.selected_shape(), Some("a"));
}

#[test]
fn test_init_after_session() {
    init_logging();
    let mut store = SelectionConfigStore::with_marker(RecordingMarker::new());
    store.set_selected_tool(Some(ToolRegistry::selected(ToolKind::Polygon)));
    store.set_selected_elements(["a"], ["fp"]);
    let before = store.config();

    store.init(InitOptions {
        shapes: vec!["z".to_string()],
        ..Default::default()
    });

    let after = store.config();
    assert_ne!(before, after);
    assert!(after.selected_tool.is_none());
    assert_eq!(after.selected.last_shape(), Some("z"));
    assert_eq!(after.selected.feature_point_count(), 0);
    assert!(store.marker().is_empty());
}
