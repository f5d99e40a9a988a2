//! Hotkey translation from web-style key names.
//!
//! Input hotkeys look like
//! `{actionName, bindings: [{key: "KeyA", modifiers: {ctrl, shift, meta, alt}}]}`;
//! output hotkeys map a host action name to an array of [`Binding`]s.

use crate::base::{Fields, Object, Value};

use super::Binding;

/// Host action name for a legacy action.
///
/// Visibility actions are per scene item and get the owning source's name
/// appended. Unmapped actions become the empty string.
pub fn translate_action(action: &str, owner: Option<&str>) -> String {
    let (base, per_owner) = match action {
        "TOGGLE_SOURCE_VISIBILITY_SHOW" => ("libobs.show_scene_item.", true),
        "TOGGLE_SOURCE_VISIBILITY_HIDE" => ("libobs.hide_scene_item.", true),
        "SWITCH_TO_SCENE" => ("OBSBasic.SelectScene", false),
        "TOGGLE_MUTE" => ("libobs.mute", false),
        "TOGGLE_UNMUTE" => ("libobs.unmute", false),
        "PUSH_TO_MUTE" => ("libobs.push-to-mute", false),
        "PUSH_TO_TALK" => ("libobs.push-to-talk", false),
        "GAME_CAPTURE_HOTKEY_START" => ("hotkey_start", false),
        "GAME_CAPTURE_HOTKEY_STOP" => ("hotkey_stop", false),
        _ => return String::new(),
    };

    match owner {
        Some(owner) if per_owner => format!("{base}{owner}"),
        _ => base.to_string(),
    }
}

/// Host key name for a web-style key code.
pub fn translate_key(key: &str) -> Option<String> {
    if let Some(digit) = key.strip_prefix("Numpad").filter(|_| key.len() == 7) {
        return Some(format!("OBS_KEY_NUM{digit}"));
    }
    if let Some(letter) = key.strip_prefix("Key") {
        return Some(format!("OBS_KEY_{letter}"));
    }
    if let Some(digit) = key.strip_prefix("Digit") {
        return Some(format!("OBS_KEY_{digit}"));
    }
    if key.starts_with('F') && key.len() < 4 {
        return Some(format!("OBS_KEY_{key}"));
    }

    let named = match key {
        "Backquote" => "OBS_KEY_ASCIITILDE",
        "Backspace" => "OBS_KEY_BACKSPACE",
        "Tab" => "OBS_KEY_TAB",
        "Space" => "OBS_KEY_SPACE",
        "Period" => "OBS_KEY_PERIOD",
        "Slash" => "OBS_KEY_SLASH",
        "Backslash" => "OBS_KEY_BACKSLASH",
        "Minus" => "OBS_KEY_MINUS",
        "Comma" => "OBS_KEY_COMMA",
        "Plus" => "OBS_KEY_PLUS",
        "Quote" => "OBS_KEY_APOSTROPHE",
        "Semicolon" => "OBS_KEY_SEMICOLON",
        "NumpadSubtract" => "OBS_KEY_NUMMINUS",
        "NumpadAdd" => "OBS_KEY_NUMPLUS",
        "NumpadDecimal" => "OBS_KEY_NUMPERIOD",
        "NumpadDivide" => "OBS_KEY_NUMSLASH",
        "NumpadMultiply" => "OBS_KEY_NUMASTERISK",
        "Enter" => "OBS_KEY_RETURN",
        "CapsLock" => "OBS_KEY_CAPSLOCK",
        "NumLock" => "OBS_KEY_NUMLOCK",
        "ScrollLock" => "OBS_KEY_SCROLLLOCK",
        "Pause" => "OBS_KEY_PAUSE",
        "Insert" => "OBS_KEY_INSERT",
        "Home" => "OBS_KEY_HOME",
        "End" => "OBS_KEY_END",
        "Escape" => "OBS_KEY_ESCAPE",
        "Delete" => "OBS_KEY_DELETE",
        "ArrowUp" => "OBS_KEY_UP",
        "ArrowDown" => "OBS_KEY_DOWN",
        "ArrowLeft" => "OBS_KEY_LEFT",
        "ArrowRight" => "OBS_KEY_RIGHT",
        "PageUp" => "OBS_KEY_PAGEUP",
        "PageDown" => "OBS_KEY_PAGEDOWN",
        "BracketLeft" => "OBS_KEY_BRACKETLEFT",
        "BracketRight" => "OBS_KEY_BRACKETRIGHT",
        _ => return None,
    };
    Some(named.to_string())
}

pub fn translate_binding(raw: &Value) -> Binding {
    let modifiers = raw.get_object("modifiers");
    let modifier = |name: &str| modifiers.is_some_and(|m| m.get_bool(name));
    let code = raw.get_str("key");

    let key = translate_key(code).unwrap_or_else(|| {
        if !code.is_empty() {
            tracing::trace!(key = code, "no host key for binding");
        }
        String::new()
    });

    Binding {
        control: modifier("ctrl"),
        shift: modifier("shift"),
        command: modifier("meta"),
        alt: modifier("alt"),
        key,
    }
}

/// Translate every hotkey in `hotkeys` into `out`.
///
/// Bindings of one action come out in reverse input order.
pub fn translate_into(out: &mut Object, hotkeys: &[Value], owner: Option<&str>) {
    for hotkey in hotkeys {
        let action = translate_action(hotkey.get_str("actionName"), owner);
        let bindings: Vec<Value> = hotkey
            .get_array("bindings")
            .iter()
            .rev()
            .map(|b| translate_binding(b).into_value())
            .collect();
        out.insert(action, Value::Array(bindings));
    }
}

/// Translate a `{items: [...]}` hotkey container into a new object.
pub fn translate_hotkeys(container: Option<&Object>, owner: Option<&str>) -> Object {
    let mut out = Object::new();
    if let Some(container) = container {
        translate_into(&mut out, container.get_array("items"), owner);
    }
    out
}
