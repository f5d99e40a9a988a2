//! Markup parser behaviour visible to importers.

use sceneimport::parser::markup;
use sceneimport::{Fields, Value};

#[test]
fn test_attribute_typing() {
    let node = markup::parse("<item a=\"7\" b=\"0.5\" c=\"1.2.3\" d=\"\" e=\"1920x1080\"/>")
        .unwrap()
        .unwrap();

    assert_eq!(node.attr.get("a"), Some(&Value::Integer(7)));
    assert_eq!(node.attr.get("b"), Some(&Value::Double(0.5)));
    assert_eq!(node.attr.get_str("c"), "1.2.3");
    assert_eq!(node.attr.get("d"), Some(&Value::String(String::new())));
    assert_eq!(node.attr.get_str("e"), "1920x1080");
}

#[test]
fn test_children_by_kind() {
    let text = "<configuration>\n<placement name=\"A\">\n</placement>\n<extra/>\n<placement name=\"B\">\n</placement>\n</configuration>\n";
    let root = markup::parse(text).unwrap().unwrap();

    let names: Vec<&str> = root
        .children_of_kind("placement")
        .map(|p| p.attr.get_str("name"))
        .collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(root.children.len(), 3);
}
