use super::*;

fn draft(title: &str) -> TaskDraft {
    TaskDraft { title: title.to_owned(), description: "  notes  ".to_owned(), status: TaskStatus::InProgress }
}

#[test]
fn empty_title_is_required() {
    assert_eq!(draft("").title_error(), Some("Title is required"));
    assert_eq!(draft("   ").title_error(), Some("Title is required"));
}

#[test]
fn short_title_is_rejected() {
    assert_eq!(draft("ab").title_error(), Some("Title must be at least 3 characters"));
    assert_eq!(draft(" ab ").title_error(), Some("Title must be at least 3 characters"));
    assert_eq!(draft("abc").title_error(), None);
}

#[test]
fn into_variables_trims_fields() {
    let vars = draft("  Write report ").into_variables(None).unwrap();
    assert_eq!(vars.id, None);
    assert_eq!(vars.title, "Write report");
    assert_eq!(vars.description, "notes");
    assert_eq!(vars.status, TaskStatus::InProgress);
}

#[test]
fn into_variables_keeps_id_for_update() {
    let vars = draft("Write report").into_variables(Some("t-9".to_owned())).unwrap();
    assert_eq!(vars.id.as_deref(), Some("t-9"));
}

#[test]
fn into_variables_reports_title_error() {
    assert_eq!(draft("x").into_variables(None), Err("Title must be at least 3 characters"));
}

#[test]
fn draft_from_task_copies_fields() {
    let task = Task {
        id: "t-1".to_owned(),
        title: "Ship it".to_owned(),
        description: "today".to_owned(),
        status: TaskStatus::Completed,
        created_at: None,
        user: None,
    };
    let d = TaskDraft::from_task(Some(&task));
    assert_eq!(d.title, "Ship it");
    assert_eq!(d.description, "today");
    assert_eq!(d.status, TaskStatus::Completed);
    assert_eq!(TaskDraft::from_task(None), TaskDraft::default());
}

#[test]
fn mode_labels() {
    let task = Task {
        id: "t-1".to_owned(),
        title: "Ship it".to_owned(),
        description: String::new(),
        status: TaskStatus::Pending,
        created_at: None,
        user: None,
    };
    assert_eq!(FormMode::for_task(None), FormMode::Create);
    assert_eq!(FormMode::for_task(Some(&task)), FormMode::Edit);
    assert_eq!(FormMode::Create.heading(), "Create New Task");
    assert_eq!(FormMode::Edit.heading(), "Edit Task");
    assert_eq!(FormMode::Create.submit_label(), "Create Task");
    assert_eq!(FormMode::Edit.pending_label(), "Updating...");
    assert_eq!(FormMode::Edit.success_message(), "Task updated successfully!");
}
