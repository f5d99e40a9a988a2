//! Assertions over canonical scene collections.

use sceneimport::{Fields, SceneCollection, Value};

/// Source names in document order.
pub fn source_names(collection: &SceneCollection) -> Vec<String> {
    collection
        .sources()
        .iter()
        .map(|s| s.get_str("name").to_string())
        .collect()
}

/// Items of the scene named `scene`, panicking when it is missing.
pub fn scene_items(collection: &SceneCollection, scene: &str) -> Vec<Value> {
    let scene = collection
        .source(scene)
        .unwrap_or_else(|| panic!("scene {scene} not found"));
    assert_eq!(scene.get_str("id"), "scene");
    scene
        .get_object("settings")
        .map(|s| s.get_array("items").to_vec())
        .unwrap_or_default()
}

/// Names of the sources placed in `scene`, in document order.
pub fn item_names(collection: &SceneCollection, scene: &str) -> Vec<String> {
    scene_items(collection, scene)
        .iter()
        .map(|i| i.get_str("name").to_string())
        .collect()
}

/// `(x, y)` of a vector member of an item.
pub fn vec2(item: &Value, key: &str) -> (f64, f64) {
    let v = item
        .get_object(key)
        .unwrap_or_else(|| panic!("item has no {key}"));
    (v.get_double("x"), v.get_double("y"))
}
