//! Scene-collection files shared by the integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Minimal OBS Classic collection with one scene and one source.
pub const CLASSIC_MINIMAL: &str = "scenes : {\r\n\
MyScene : {\r\n\
sources : {\r\n\
Cam : {\r\n\
class : \"GlobalSource\"\r\n\
x : 10\r\n\
y : 20\r\n\
cx : 100\r\n\
cy : 50\r\n\
}\r\n\
}\r\n\
}\r\n\
}\r\n";

/// Two scenes, each with a device named `Camera`.
pub const CLASSIC_DUPLICATE_NAMES: &str = "scenes : {\r\n\
  Intro : {\r\n\
    sources : {\r\n\
      Camera : {\r\n\
        class : DeviceCapture\r\n\
      }\r\n\
    }\r\n\
  }\r\n\
  Outro : {\r\n\
    sources : {\r\n\
      Camera : {\r\n\
        class : DeviceCapture\r\n\
      }\r\n\
      Game : {\r\n\
        class : GraphicsCapture\r\n\
      }\r\n\
    }\r\n\
  }\r\n\
}\r\n";

/// A classic text source whose colour has no alpha bits.
pub const CLASSIC_TEXT_COLOR: &str = "scenes : {\r\n\
  Main : {\r\n\
    sources : {\r\n\
      Title : {\r\n\
        class : TextSource\r\n\
        data : {\r\n\
          text : Live\r\n\
          color : 1122867\r\n\
          outlineColor : -16777216\r\n\
        }\r\n\
      }\r\n\
    }\r\n\
  }\r\n\
}\r\n";

/// A classic scene placing a source from the `global sources` block.
pub const CLASSIC_WITH_GLOBALS: &str = "scenes : {\r\n\
  MyScene : {\r\n\
    sources : {\r\n\
      Cam : {\r\n\
        class : GlobalSource\r\n\
      }\r\n\
    }\r\n\
  }\r\n\
}\r\n\
global sources : {\r\n\
  Cam : {\r\n\
    class : DeviceCapture\r\n\
  }\r\n\
}\r\n";

/// A classic file that stops inside an open block.
pub const CLASSIC_TRUNCATED: &str = "scenes : {\r\n  Main : {\r\n    sources : {\r\n";

/// XSplit presentation whose first scene places the second one.
pub const XSPLIT_FORWARD_REFERENCE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n\
<configuration version=\"2\">\r\n\
<placement name=\"Main\" id=\"{MAIN}\">\r\n\
<item type=\"11\" name=\"Nested\" item=\"{BREAK}\" pos_left=\"0\" pos_top=\"0\" pos_right=\"0.5\" pos_bottom=\"0.5\" visible=\"1\"/>\r\n\
<item type=\"4\" name=\"Logo\" srcid=\"{LOGO}\" item=\"C:\\logo.png\" pos_left=\"0.5\" pos_top=\"0.5\" pos_right=\"1\" pos_bottom=\"1\" visible=\"1\" volume=\"100\"/>\r\n\
</placement>\r\n\
<placement name=\"Break\" id=\"{BREAK}\">\r\n\
<item type=\"4\" name=\"Logo\" srcid=\"{LOGO}\" item=\"C:\\logo.png\" pos_left=\"0\" pos_top=\"0\" pos_right=\"1\" pos_bottom=\"1\" visible=\"0\"/>\r\n\
</placement>\r\n\
</configuration>\r\n";

/// Streamlabs collection whose scene item points at a later scene.
pub const STREAMLABS_FORWARD_REFERENCE: &str = r#"{
    "nodeType": "RootNode",
    "sources": {"items": [
        {"id": "src_cam", "name": "Camera", "type": "dshow_input", "settings": {}}
    ]},
    "scenes": {"items": [
        {"id": "scene_a", "name": "Live", "sceneItems": {"items": [
            {"sourceId": "scene_b", "x": 0, "y": 0, "scaleX": 1, "scaleY": 1, "visible": true},
            {"sourceId": "src_cam", "x": 5, "y": 5, "scaleX": 1, "scaleY": 1, "visible": true}
        ]}},
        {"id": "scene_b", "name": "Be Right Back", "sceneItems": {"items": []}}
    ]}
}"#;

/// OBS Studio collection with a Windows display capture.
pub const STUDIO_WINDOWS: &str = r#"{
    "name": "Main Show",
    "current_scene": "Scene",
    "sources": [
        {"name": "Scene", "id": "scene", "settings": {"items": []}},
        {"name": "Display", "id": "monitor_capture", "settings": {"monitor": 1, "capture_cursor": true}}
    ]
}"#;

/// Write `contents` to `name` inside a fresh temporary directory.
pub fn write_temp(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}
