use rosloader::{LoaderError, camel_to_snake, hidden_action_subpath};

#[test]
fn camel_to_snake_cases() {
    assert_eq!(camel_to_snake("NavigateToPose"), "navigate_to_pose");
    assert_eq!(camel_to_snake("Fibonacci"), "fibonacci");
    assert_eq!(camel_to_snake("HTTPServer"), "http_server");
    assert_eq!(camel_to_snake("FollowJointTrajectory"), "follow_joint_trajectory");
    assert_eq!(camel_to_snake("Move2Goal"), "move2_goal");
    assert_eq!(camel_to_snake("already_snake"), "already_snake");
    assert_eq!(camel_to_snake(""), "");
}

#[test]
fn send_goal_suffix_maps_to_hidden_submodule() {
    assert_eq!(
        hidden_action_subpath("action", "NavigateToPose_SendGoal").unwrap(),
        "action._navigate_to_pose"
    );
}

#[test]
fn get_result_suffix_maps_to_hidden_submodule() {
    assert_eq!(
        hidden_action_subpath("action", "Fibonacci_GetResult").unwrap(),
        "action._fibonacci"
    );
}

#[test]
fn existing_hidden_submodule_is_kept() {
    assert_eq!(
        hidden_action_subpath("action._fibonacci", "Fibonacci_SendGoal").unwrap(),
        "action._fibonacci"
    );
    // Already normalized, so the class name is not inspected.
    assert_eq!(
        hidden_action_subpath("action._fibonacci", "Fibonacci").unwrap(),
        "action._fibonacci"
    );
}

#[test]
fn unrecognized_suffix_is_rejected() {
    for class in ["NavigateToPose", "NavigateToPose_Feedback", "NavigateToPose_SendGoalX"] {
        let err = hidden_action_subpath("action", class).unwrap_err();
        match &err {
            LoaderError::InvalidActionInterface { class_name } => {
                assert_eq!(class_name, class)
            }
            other => panic!("unexpected error for {class}: {other:?}"),
        }
        assert!(err.to_string().contains("_SendGoal"));
    }
}
