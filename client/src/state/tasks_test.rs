use super::*;

fn task(id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_owned(),
        title: format!("Task {id}"),
        description: String::new(),
        status,
        created_at: None,
        user: None,
    }
}

fn sample() -> Vec<Task> {
    vec![
        task("1", TaskStatus::Pending),
        task("2", TaskStatus::Completed),
        task("3", TaskStatus::InProgress),
        task("4", TaskStatus::Pending),
    ]
}

#[test]
fn active_view_hides_completed() {
    let ids: Vec<_> = visible_tasks(&sample(), false).into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["1", "3", "4"]);
}

#[test]
fn all_view_keeps_order() {
    let ids: Vec<_> = visible_tasks(&sample(), true).into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

#[test]
fn remaining_label_pluralizes() {
    assert_eq!(remaining_label(0), "0 tasks to complete");
    assert_eq!(remaining_label(1), "1 task to complete");
    assert_eq!(remaining_label(3), "3 tasks to complete");
}

#[test]
fn stats_count_each_status() {
    assert_eq!(
        TaskStats::from_tasks(&sample()),
        TaskStats { total: 4, pending: 2, in_progress: 1, completed: 1 }
    );
    assert_eq!(TaskStats::from_tasks(&[]), TaskStats::default());
}

#[test]
fn dashboard_labels_follow_filter() {
    let mut state = DashboardState::default();
    assert_eq!(state.heading(), "Active Tasks");
    assert_eq!(state.toggle_label(), "Show Completed");
    state.show_completed = true;
    assert_eq!(state.heading(), "All Tasks");
    assert_eq!(state.toggle_label(), "Hide Completed");
}

#[test]
fn editor_modes() {
    assert!(!TaskEditor::Closed.is_open());
    assert!(TaskEditor::Create.is_open());
    assert!(TaskEditor::Create.task().is_none());
    let edit = TaskEditor::Edit(task("7", TaskStatus::Pending));
    assert_eq!(edit.task().map(|t| t.id.as_str()), Some("7"));
}
