//! List of task rows for the dashboard.

use leptos::prelude::*;

use crate::components::task_item::TaskItem;
use crate::net::types::Task;

#[component]
pub fn TaskList(tasks: Vec<Task>, on_edit: Callback<Task>, on_delete: Callback<String>) -> impl IntoView {
    let empty = tasks.is_empty().then(|| view! { <p class="task-list__empty">"No tasks yet."</p> });

    view! {
        <div class="task-list">
            <h3 class="task-list__heading">"Your Tasks"</h3>
            {empty}
            {tasks
                .into_iter()
                .map(|task| view! { <TaskItem task=task on_edit=on_edit on_delete=on_delete/> })
                .collect_view()}
        </div>
    }
}
