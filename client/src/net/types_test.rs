use super::*;

#[test]
fn task_status_uses_backend_enum_values() {
    assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), serde_json::json!("IN_PROGRESS"));
    let status: TaskStatus = serde_json::from_value(serde_json::json!("COMPLETED")).unwrap();
    assert_eq!(status, TaskStatus::Completed);
}

#[test]
fn task_status_rejects_unknown_value() {
    assert!(serde_json::from_value::<TaskStatus>(serde_json::json!("ARCHIVED")).is_err());
}

#[test]
fn task_status_labels() {
    assert_eq!(TaskStatus::InProgress.badge_label(), "in progress");
    assert_eq!(TaskStatus::InProgress.display_name(), "In Progress");
    assert_eq!(TaskStatus::InProgress.css_modifier(), "in-progress");
    assert_eq!(TaskStatus::Pending.to_string(), "PENDING");
}

#[test]
fn task_status_parses_select_values() {
    assert_eq!("IN_PROGRESS".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
    assert_eq!(" completed ".parse::<TaskStatus>(), Ok(TaskStatus::Completed));
    assert!("done".parse::<TaskStatus>().is_err());
}

#[test]
fn task_status_defaults_to_pending() {
    assert_eq!(TaskStatus::default(), TaskStatus::Pending);
}

#[test]
fn task_deserializes_my_tasks_entry() {
    let json = serde_json::json!({
        "id": "t1",
        "title": "Write report",
        "description": "Quarterly numbers",
        "status": "PENDING",
        "createdAt": "2024-03-01T10:00:00Z",
        "user": { "id": "u1", "name": "Ada", "email": "ada@example.com" }
    });
    let task: Task = serde_json::from_value(json).unwrap();
    assert_eq!(task.id, "t1");
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.created_at.as_deref(), Some("2024-03-01T10:00:00Z"));
    assert_eq!(task.user.map(|u| u.email), Some("ada@example.com".to_owned()));
}

#[test]
fn task_tolerates_null_or_missing_description() {
    let with_null: Task = serde_json::from_value(serde_json::json!({
        "id": "t1", "title": "A", "description": null, "status": "COMPLETED"
    }))
    .unwrap();
    assert_eq!(with_null.description, "");

    let missing: Task =
        serde_json::from_value(serde_json::json!({ "id": "t2", "title": "B", "status": "PENDING" })).unwrap();
    assert_eq!(missing.description, "");
    assert!(missing.user.is_none());
}

#[test]
fn session_status_parses_body() {
    let status: SessionStatus = serde_json::from_str(r#"{"authenticated":true}"#).unwrap();
    assert!(status.authenticated);
}
