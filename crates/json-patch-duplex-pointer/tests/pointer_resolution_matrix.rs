use json_patch_duplex_pointer::{
    append_component, format_json_pointer, get, parse_json_pointer, resolve, resolve_mut,
    JsonPointerError, Target, TargetMut,
};
use serde_json::json;

#[test]
fn pointer_parse_format_roundtrip_matrix() {
    let cases = ["", "/", "/foo", "/foo/bar", "/a~0b/c~1d", "/arr/0", "/~0/~1"];

    for pointer in cases {
        let path = parse_json_pointer(pointer).expect("valid pointer");
        assert_eq!(format_json_pointer(&path), pointer);
    }
}

#[test]
fn append_component_builds_diff_paths() {
    let mut pointer = String::new();
    for key in ["users", "a/b~c", "0"] {
        pointer = append_component(&pointer, key);
    }
    assert_eq!(pointer, "/users/a~1b~0c/0");
    assert_eq!(
        parse_json_pointer(&pointer).unwrap(),
        vec!["users", "a/b~c", "0"]
    );
}

#[test]
fn pointer_get_matrix() {
    let doc = json!({"foo": {"bar": [10, 20, null]}, "": {"": "empty"}});

    assert_eq!(get(&doc, ""), Some(&doc));
    assert_eq!(get(&doc, "/foo/bar/0"), Some(&json!(10)));
    assert_eq!(get(&doc, "/foo/bar/2"), Some(&json!(null)));
    assert_eq!(get(&doc, "/foo/bar/3"), None);
    assert_eq!(get(&doc, "/foo/bar/-"), None);
    assert_eq!(get(&doc, "/foo/bar/x"), None);
    assert_eq!(get(&doc, "//"), Some(&json!("empty")));
    assert_eq!(get(&doc, "/missing/deeper"), None);
}

#[test]
fn resolution_classifies_by_container() {
    let doc = json!({"obj": {"k": 1}, "arr": [1, 2, 3]});

    assert!(matches!(resolve(&doc, ""), Ok(Target::Root(_))));
    assert!(matches!(resolve(&doc, "/obj/k"), Ok(Target::Entry(_, ref k)) if k == "k"));
    assert!(matches!(resolve(&doc, "/obj/new"), Ok(Target::Entry(_, ref k)) if k == "new"));
    assert!(matches!(resolve(&doc, "/arr/1"), Ok(Target::Slot(_, 1))));
    assert!(matches!(resolve(&doc, "/arr/-"), Ok(Target::Slot(_, 3))));
    assert!(matches!(resolve(&doc, "/arr/7"), Ok(Target::Slot(_, 7))));
}

#[test]
fn resolution_errors() {
    let doc = json!({"arr": [1, 2, 3], "n": 5});

    assert!(matches!(
        resolve(&doc, "/arr/-1"),
        Err(JsonPointerError::InvalidIndex(_))
    ));
    assert_eq!(resolve(&doc, "/arr/9/x"), Err(JsonPointerError::NotFound));
    assert_eq!(resolve(&doc, "/arr/-/x"), Err(JsonPointerError::NotFound));
    assert_eq!(resolve(&doc, "/n/x"), Err(JsonPointerError::NotFound));
    assert_eq!(resolve(&doc, "arr"), Err(JsonPointerError::PointerInvalid));
}

#[test]
fn mutable_resolution_inserts_into_absent_key() {
    let mut doc = json!({"a": {}});
    match resolve_mut(&mut doc, "/a/b").unwrap() {
        TargetMut::Entry(map, key) => {
            map.insert(key, json!(true));
        }
        other => panic!("unexpected target {other:?}"),
    }
    assert_eq!(doc, json!({"a": {"b": true}}));
}
