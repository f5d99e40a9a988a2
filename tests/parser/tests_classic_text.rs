//! Line-oriented parser behaviour visible to importers.

use rstest::rstest;
use sceneimport::parser::classic;
use sceneimport::parser::ParseError;
use sceneimport::{Fields, Value};

fn scene_with(lines: &[&str]) -> String {
    let mut text = String::from("scenes : {\r\n  S : {\r\n");
    for line in lines {
        text.push_str(line);
        text.push_str("\r\n");
    }
    text.push_str("  }\r\n}\r\n");
    text
}

fn member(lines: &[&str], key: &str) -> Value {
    let root = classic::parse(&scene_with(lines)).unwrap();
    root.get_array("scenes")[0]
        .get(key)
        .cloned()
        .unwrap_or_else(|| panic!("{key} missing"))
}

#[rstest]
#[case("    v : 42", Value::Integer(42))]
#[case("    v : 4.5", Value::Double(4.5))]
#[case("    v : hello", Value::String("hello".to_string()))]
#[case("    v : \"42\"", Value::String("42".to_string()))]
#[case("    v : 1920x1080", Value::Integer(1920))]
fn test_value_typing(#[case] line: &str, #[case] expected: Value) {
    assert_eq!(member(&["    a : first", line, "    z : last"], "v"), expected);
}

#[test]
fn test_repeated_key_keeps_every_value() {
    let colors = member(&["    color : red", "    color : blue"], "color");
    assert_eq!(
        colors,
        Value::Array(vec![Value::from("red"), Value::from("blue")])
    );
}

#[test]
fn test_errors_carry_line_numbers() {
    let err = classic::parse(&scene_with(&["    a : 1", "    oops"])).unwrap_err();
    assert_eq!(err.line(), 4);
    assert!(err.to_string().contains("oops"));

    let err = classic::parse("scenes : {\r\n  S : {\r\n").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
}
