//! The canonical scene-collection document and the records translators emit
//! into it.
//!
//! ```text
//! SceneCollection
//! ├── name, current_scene, current_program_scene
//! └── sources: [SourceDescriptor]
//!         └── id == "scene" ⇒ settings.items: [SceneItem], settings.id_counter
//! ```
//!
//! Translators build typed records and convert them into the generic tree
//! with `into_value`; the document itself stays a [`Value`] object so keys
//! it does not know about (from OBS Studio files) survive untouched.

use serde::{Deserialize, Serialize};

use crate::base::{Fields, Object, Value};

use super::ImportError;

/// Source id of scenes.
pub const SCENE_ID: &str = "scene";

/// A point or size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn into_value(self) -> Value {
        let mut object = Object::new();
        object.insert("x".to_string(), Value::Double(self.x));
        object.insert("y".to_string(), Value::Double(self.y));
        Value::Object(object)
    }
}

/// Pixels cut from each edge of a scene item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crop {
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
}

impl Crop {
    /// Read `top`, `bottom`, `left` and `right` members.
    pub fn from_fields(fields: &(impl Fields + ?Sized)) -> Self {
        Self {
            top: fields.get_int("top"),
            bottom: fields.get_int("bottom"),
            left: fields.get_int("left"),
            right: fields.get_int("right"),
        }
    }
}

/// How an item's size is expressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extent {
    /// Fit into a bounding box.
    Bounds { size: Vec2, bounds_type: i64 },
    /// Scale the source's native size.
    Scale(Vec2),
}

/// Bounding box stretched to fill, used for boxes given in pixels.
pub const BOUNDS_STRETCH: i64 = 2;

/// Placement of a source inside a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneItem {
    pub id: i64,
    /// Name of the placed source. `None` when the reference did not resolve.
    pub name: Option<String>,
    pub pos: Vec2,
    pub extent: Extent,
    pub rotation: Option<f64>,
    pub crop: Option<Crop>,
    pub visible: bool,
}

impl SceneItem {
    pub fn into_value(self) -> Value {
        let mut object = Object::new();
        if let Some(name) = self.name {
            object.insert("name".to_string(), Value::String(name));
        }
        object.insert("id".to_string(), Value::Integer(self.id));
        object.insert("pos".to_string(), self.pos.into_value());

        match self.extent {
            Extent::Bounds { size, bounds_type } => {
                object.insert("bounds".to_string(), size.into_value());
                object.insert("bounds_type".to_string(), Value::Integer(bounds_type));
            }
            Extent::Scale(scale) => {
                object.insert("scale".to_string(), scale.into_value());
            }
        }

        if let Some(rotation) = self.rotation {
            object.insert("rot".to_string(), Value::Double(rotation));
        }
        if let Some(crop) = self.crop {
            object.insert("crop_top".to_string(), Value::Integer(crop.top));
            object.insert("crop_bottom".to_string(), Value::Integer(crop.bottom));
            object.insert("crop_left".to_string(), Value::Integer(crop.left));
            object.insert("crop_right".to_string(), Value::Integer(crop.right));
        }
        object.insert("visible".to_string(), Value::Boolean(self.visible));
        Value::Object(object)
    }
}

/// One key combination bound to a hotkey action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Binding {
    pub control: bool,
    pub shift: bool,
    pub command: bool,
    pub alt: bool,
    pub key: String,
}

impl Binding {
    pub fn into_value(self) -> Value {
        let mut object = Object::new();
        object.insert("control".to_string(), Value::Boolean(self.control));
        object.insert("shift".to_string(), Value::Boolean(self.shift));
        object.insert("command".to_string(), Value::Boolean(self.command));
        object.insert("alt".to_string(), Value::Boolean(self.alt));
        object.insert("key".to_string(), Value::String(self.key));
        Value::Object(object)
    }
}

/// A source (or scene) record of the canonical document.
///
/// Optional members are only emitted when a format supplies them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceDescriptor {
    pub name: String,
    pub id: String,
    pub settings: Object,
    pub filters: Option<Vec<Value>>,
    pub hotkeys: Option<Object>,
    /// Audio sync offset in nanoseconds.
    pub sync: Option<i64>,
    pub volume: Option<f64>,
    pub muted: Option<bool>,
    pub monitoring_type: Option<i64>,
    pub private_settings: Option<Object>,
}

impl SourceDescriptor {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    /// An empty scene.
    pub fn scene(name: impl Into<String>) -> Self {
        Self::new(name, SCENE_ID)
    }

    pub fn with_settings(mut self, settings: Object) -> Self {
        self.settings = settings;
        self
    }

    pub fn is_scene(&self) -> bool {
        self.id == SCENE_ID
    }

    /// Store scene items and the next free item id.
    pub fn set_items(&mut self, items: Vec<SceneItem>) {
        let count = items.len() as i64;
        let items = items.into_iter().map(SceneItem::into_value).collect();
        self.settings.insert("items".to_string(), Value::Array(items));
        self.settings.insert("id_counter".to_string(), Value::Integer(count));
    }

    pub fn into_value(self) -> Value {
        let mut object = Object::new();
        object.insert("name".to_string(), Value::String(self.name));
        object.insert("id".to_string(), Value::String(self.id));
        object.insert("settings".to_string(), Value::Object(self.settings));

        if let Some(filters) = self.filters {
            object.insert("filters".to_string(), Value::Array(filters));
        }
        if let Some(hotkeys) = self.hotkeys {
            object.insert("hotkeys".to_string(), Value::Object(hotkeys));
        }
        if let Some(sync) = self.sync {
            object.insert("sync".to_string(), Value::Integer(sync));
        }
        if let Some(volume) = self.volume {
            object.insert("volume".to_string(), Value::Double(volume));
        }
        if let Some(muted) = self.muted {
            object.insert("muted".to_string(), Value::Boolean(muted));
        }
        if let Some(monitoring_type) = self.monitoring_type {
            object.insert("monitoring_type".to_string(), Value::Integer(monitoring_type));
        }
        if let Some(private_settings) = self.private_settings {
            object.insert("private_settings".to_string(), Value::Object(private_settings));
        }
        Value::Object(object)
    }
}

// ============================================================================
// SCENE COLLECTION
// ============================================================================

/// The canonical, versioned project document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneCollection {
    root: Object,
}

impl SceneCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing tree. Returns `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(root) => Some(Self { root }),
            _ => None,
        }
    }

    /// Parse a serialized document.
    pub fn parse_json(input: &str) -> Result<Self, ImportError> {
        Self::from_value(Value::parse_json(input)?)
            .ok_or_else(|| ImportError::invalid("scene collection", "top level is not an object"))
    }

    pub fn name(&self) -> &str {
        self.root.get_str("name")
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.root.insert("name".to_string(), Value::String(name.into()));
    }

    pub fn current_scene(&self) -> &str {
        self.root.get_str("current_scene")
    }

    /// Select `name` for both preview and program.
    pub fn set_current_scene(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.root
            .insert("current_scene".to_string(), Value::String(name.clone()));
        self.root
            .insert("current_program_scene".to_string(), Value::String(name));
    }

    pub fn sources(&self) -> &[Value] {
        self.root.get_array("sources")
    }

    /// The `sources` array, created when missing or not an array.
    pub fn sources_mut(&mut self) -> &mut Vec<Value> {
        self.root
            .entry("sources".to_string())
            .or_insert_with(|| Value::Array(Vec::new()))
            .make_array()
    }

    pub fn push_source(&mut self, source: SourceDescriptor) {
        self.sources_mut().push(source.into_value());
    }

    /// The source record named `name`.
    pub fn source(&self, name: &str) -> Option<&Value> {
        self.sources().iter().find(|s| s.get_str("name") == name)
    }

    pub fn contains_source(&self, name: &str) -> bool {
        self.source(name).is_some()
    }

    /// Source records whose id is `scene`, in document order.
    pub fn scenes(&self) -> impl Iterator<Item = &Value> {
        self.sources()
            .iter()
            .filter(|s| s.get_str("id") == SCENE_ID)
    }

    pub fn root(&self) -> &Object {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Object {
        &mut self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    pub fn to_json(&self) -> Result<String, ImportError> {
        Ok(serde_json::to_string(&self.root)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ImportError> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}
