use super::*;

#[test]
fn item_class_uses_status_modifier() {
    assert_eq!(item_class(TaskStatus::Pending), "task-item task-item--pending");
    assert_eq!(item_class(TaskStatus::InProgress), "task-item task-item--in-progress");
    assert_eq!(item_class(TaskStatus::Completed), "task-item task-item--completed");
}
