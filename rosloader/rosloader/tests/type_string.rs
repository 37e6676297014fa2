use rosloader::{LoaderError, ParsedPath, TypeKind, TypeString, split_segments};

#[test]
fn split_drops_empty_segments() {
    assert_eq!(split_segments("pkg//Cls"), vec!["pkg", "Cls"]);
    assert_eq!(split_segments("/pkg/msg/Cls/"), vec!["pkg", "msg", "Cls"]);
    assert!(split_segments("///").is_empty());
}

#[test]
fn parses_two_segment_form_with_kind_default() {
    let ts = TypeString::parse("std_msgs/String").unwrap();
    assert_eq!(ts.package(), "std_msgs");
    assert_eq!(ts.class_name(), "String");
    assert!(ts.middle().is_empty());
    assert_eq!(ts.inferred_subpath(TypeKind::Message).unwrap(), "msg");
    assert_eq!(ts.inferred_subpath(TypeKind::Service).unwrap(), "srv");
}

#[test]
fn parses_three_segment_form_with_explicit_subpath() {
    let ts = TypeString::parse("geometry_msgs/msg/Point").unwrap();
    assert_eq!(ts.middle(), &["msg"]);
    assert_eq!(ts.normalized(), "geometry_msgs/Point");
    assert_eq!(ts.inferred_subpath(TypeKind::Message).unwrap(), "msg");
    assert_eq!(ts.inferred_subpath(TypeKind::Service).unwrap(), "msg");
}

#[test]
fn parses_four_segment_action_form() {
    let ts = TypeString::parse("pkg/action/_fibonacci/Fibonacci_SendGoal").unwrap();
    assert!(ts.is_action());
    assert_eq!(ts.class_name(), "Fibonacci_SendGoal");
    assert_eq!(ts.normalized(), "pkg/Fibonacci_SendGoal");
    assert_eq!(
        ts.inferred_subpath(TypeKind::Message).unwrap(),
        "action._fibonacci"
    );
    assert_eq!(
        ts.inferred_subpath(TypeKind::Service).unwrap(),
        "action._fibonacci"
    );
}

#[test]
fn three_segment_action_service_gets_hidden_submodule() {
    let ts = TypeString::parse("pkg/action/Fibonacci_GetResult").unwrap();
    assert_eq!(
        ts.inferred_subpath(TypeKind::Service).unwrap(),
        "action._fibonacci"
    );
    assert_eq!(ts.inferred_subpath(TypeKind::Message).unwrap(), "action");
}

#[test]
fn action_service_without_suffix_fails_subpath_inference() {
    let ts = TypeString::parse("pkg/action/Fibonacci").unwrap();
    let err = ts.inferred_subpath(TypeKind::Service).unwrap_err();
    assert!(matches!(err, LoaderError::InvalidActionInterface { .. }));
}

#[test]
fn rejects_unrecognized_shapes() {
    for bad in ["", "pkg", "/pkg/", "a/b/c/d", "a/b/c/d/e", "a/action/b/c/d"] {
        let err = TypeString::parse(bad).unwrap_err();
        assert!(
            matches!(err, LoaderError::InvalidTypeString { .. }),
            "{bad:?} gave {err:?}"
        );
    }
}

#[test]
fn invalid_type_string_message_names_input() {
    let err = TypeString::parse("a/b/c/d").unwrap_err();
    assert_eq!(err.to_string(), "a/b/c/d is not a valid type string");
}

#[test]
fn with_subpath_builds_module_path() {
    let ts = TypeString::parse("pkg/Sub/Cls").unwrap();
    let path = ts.with_subpath("srv");
    assert_eq!(
        path,
        ParsedPath {
            package: "pkg".into(),
            subpath: "srv".into(),
            class_name: "Cls".into(),
        }
    );
    assert_eq!(path.module_path(), "pkg.srv");
    assert_eq!(path.normalized(), "pkg/Cls");
    assert_eq!(path.to_string(), "pkg.srv.Cls");
}

#[test]
fn kind_defaults_and_display() {
    assert_eq!(TypeKind::Message.default_subpath(), "msg");
    assert_eq!(TypeKind::Service.default_subpath(), "srv");
    assert_eq!(TypeKind::Service.to_string(), "service");
}
