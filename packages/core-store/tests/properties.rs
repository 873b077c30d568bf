use dotstore_core::{Error, Map, PathStore, Policy, Value};

fn nested() -> Map {
    let mut inner = Map::new();
    inner.insert("zeta".to_string(), Value::from(true));
    inner.insert("alpha".to_string(), Value::from(vec![1, 2, 3]));

    let mut tree = Map::new();
    tree.insert("second".to_string(), Value::from("s"));
    tree.insert("first".to_string(), Value::Map(inner));
    tree.insert("none".to_string(), Value::Null);
    tree
}

#[test]
fn construct_then_serialize_is_identity() {
    let tree = nested();
    let store = PathStore::new(tree.clone());
    assert_eq!(store.tree(), &tree);

    let keys: Vec<_> = store.tree().keys().cloned().collect();
    assert_eq!(keys, vec!["second", "first", "none"]);
    let inner: Vec<_> = store.get("first").unwrap().as_map().unwrap().keys().cloned().collect();
    assert_eq!(inner, vec!["zeta", "alpha"]);
}

#[test]
fn set_get_inverse() {
    let mut store = PathStore::new(nested());
    for (path, value) in [
        ("first.zeta", Value::from(false)),
        ("brand.new.deep.key", Value::from(42)),
        ("second", Value::from(1.5)),
        ("none", Value::from("filled")),
    ] {
        store.set(path, value.clone()).unwrap();
        assert_eq!(store.get(path).unwrap(), &value);
    }
}

#[test]
fn protect_silent_is_a_no_op_on_existing() {
    let mut store = PathStore::new(nested());
    let before = store.get("first.zeta").unwrap().clone();
    store
        .set_with_policy("first.zeta", "changed", Policy::ProtectSilent)
        .unwrap();
    assert_eq!(store.get("first.zeta").unwrap(), &before);
}

#[test]
fn scalar_validation_rejects_nested_empty_object() {
    let mut store = PathStore::default();
    let value: Value = [("b", Value::Array(vec![Value::from(1), Value::map()]))]
        .into_iter()
        .collect();
    assert!(matches!(
        store.set("a", value),
        Err(Error::InvalidProperty { path, .. }) if path == "a"
    ));
}

#[test]
fn missing_intermediate_path() {
    let store = PathStore::default();
    assert!(matches!(
        store.get("a.b.c"),
        Err(Error::PropertyNotExist { path }) if path == "a.b.c"
    ));
    assert!(!store.exists("a.b.c"));
}

#[test]
fn count_and_iterate_in_order() {
    let mut tree = Map::new();
    tree.insert("a".to_string(), Value::from(1));
    tree.insert("b".to_string(), Value::from(2));
    tree.insert("c".to_string(), Value::from(3));
    let store = PathStore::from(tree);

    assert_eq!(store.len(), 3);
    let pairs: Vec<(String, Value)> = store.into_iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), Value::from(1)),
            ("b".to_string(), Value::from(2)),
            ("c".to_string(), Value::from(3)),
        ]
    );
}

#[test]
fn deserialized_store_uses_default_options() {
    let store: PathStore = serde_json::from_str(r#"{"x": {"y": 1}}"#).unwrap();
    assert_eq!(store.get("x.y").unwrap(), &Value::from(1));
    assert_eq!(store.options(), &Default::default());
}
