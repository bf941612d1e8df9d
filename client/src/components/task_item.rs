//! One task row with status badge and edit/delete actions.

#[cfg(test)]
#[path = "task_item_test.rs"]
mod task_item_test;

use leptos::prelude::*;

use crate::net::types::{Task, TaskStatus};

fn item_class(status: TaskStatus) -> String {
    format!("task-item task-item--{}", status.css_modifier())
}

#[component]
pub fn TaskItem(task: Task, on_edit: Callback<Task>, on_delete: Callback<String>) -> impl IntoView {
    let status = task.status;
    let id = task.id.clone();
    let title = task.title.clone();
    let description = (!task.description.trim().is_empty()).then(|| {
        let text = task.description.clone();
        view! { <p class="task-item__description">{text}</p> }
    });

    view! {
        <div class=item_class(status)>
            <div class="task-item__body">
                <h3 class="task-item__title">{title}</h3>
                {description}
                <span class="task-item__badge">{status.badge_label()}</span>
            </div>
            <div class="task-item__actions">
                <button
                    class="task-item__action"
                    aria-label="Edit task"
                    on:click=move |_| on_edit.run(task.clone())
                >
                    "Edit"
                </button>
                <button
                    class="task-item__action task-item__action--danger"
                    aria-label="Delete task"
                    on:click=move |_| on_delete.run(id.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
