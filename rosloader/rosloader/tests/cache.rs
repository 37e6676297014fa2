use rosloader::{
    TypeCache,
    core::{MessageType, TypeHandle},
};

fn handle(name: &str) -> TypeHandle {
    MessageType::<String>::handle(name)
}

#[test]
fn empty_cache_misses() {
    let cache = TypeCache::new();
    assert!(cache.is_empty());
    assert!(cache.get("std_msgs/String").is_none());
}

#[test]
fn insert_then_get() {
    let cache = TypeCache::new();
    cache.insert("std_msgs/String", handle("std_msgs.msg.String"));

    let got = cache.get("std_msgs/String").unwrap();
    assert_eq!(got.qualified_name(), "std_msgs.msg.String");
    assert_eq!(cache.len(), 1);
}

#[test]
fn later_insert_overwrites() {
    let cache = TypeCache::new();
    cache.insert("pkg/Cls", handle("first"));
    cache.insert("pkg/Cls", handle("second"));

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("pkg/Cls").unwrap().qualified_name(), "second");
}

#[test]
fn keys_are_sorted() {
    let cache = TypeCache::new();
    cache.insert("b/Two", handle("b.msg.Two"));
    cache.insert("a/One", handle("a.msg.One"));
    cache.insert("a/msg/One", handle("a.msg.One"));

    assert_eq!(cache.keys(), vec!["a/One", "a/msg/One", "b/Two"]);
}
