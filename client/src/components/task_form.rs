//! Create/edit task dialog body.
//!
//! DESIGN
//! ======
//! Field state lives in local signals; `TaskDraft` holds the validation and
//! turns the fields into `createTask`/`updateTask` variables so it can be
//! tested without a DOM.

#[cfg(test)]
#[path = "task_form_test.rs"]
mod task_form_test;

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::net::api;
use crate::net::graphql::TaskVariables;
use crate::net::types::{Task, TaskStatus};
use crate::state::toast::{ToastKind, ToastState};

const MIN_TITLE_CHARS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn for_task(task: Option<&Task>) -> Self {
        if task.is_some() { Self::Edit } else { Self::Create }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Create => "Create New Task",
            Self::Edit => "Edit Task",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Create Task",
            Self::Edit => "Update Task",
        }
    }

    pub fn pending_label(self) -> &'static str {
        match self {
            Self::Create => "Creating...",
            Self::Edit => "Updating...",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Create => "Task created successfully!",
            Self::Edit => "Task updated successfully!",
        }
    }
}

/// Raw form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    pub fn from_task(task: Option<&Task>) -> Self {
        task.map_or_else(Self::default, |t| Self {
            title: t.title.clone(),
            description: t.description.clone(),
            status: t.status,
        })
    }

    /// Title problem to show under the field, if any.
    pub fn title_error(&self) -> Option<&'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            Some("Title is required")
        } else if title.chars().count() < MIN_TITLE_CHARS {
            Some("Title must be at least 3 characters")
        } else {
            None
        }
    }

    /// Validated variables; `id` selects update over create.
    ///
    /// # Errors
    ///
    /// Returns the title validation message.
    pub fn into_variables(self, id: Option<String>) -> Result<TaskVariables, &'static str> {
        if let Some(err) = self.title_error() {
            return Err(err);
        }
        Ok(TaskVariables {
            id,
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            status: self.status,
        })
    }
}

#[component]
pub fn TaskForm(task: Option<Task>, on_close: Callback<()>, on_success: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let mode = FormMode::for_task(task.as_ref());
    let initial = TaskDraft::from_task(task.as_ref());
    let task_id = task.map(|t| t.id);

    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let status = RwSignal::new(initial.status);
    let title_error = RwSignal::new(None::<&'static str>);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let draft = TaskDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            status: status.get_untracked(),
        };
        let variables = match draft.into_variables(task_id.clone()) {
            Ok(v) => v,
            Err(msg) => {
                title_error.set(Some(msg));
                return;
            }
        };
        title_error.set(None);
        saving.set(true);

        leptos::task::spawn_local(async move {
            match api::save_task(variables).await {
                Ok(_) => {
                    notify(toasts, ToastKind::Success, mode.success_message());
                    on_success.run(());
                    on_close.run(());
                }
                Err(e) => {
                    saving.set(false);
                    notify(toasts, ToastKind::Error, format!("Error: {e}"));
                }
            }
        });
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <h2 class="task-form__heading">{mode.heading()}</h2>

            <label class="field">
                <span class="field__label">"Title"</span>
                <input
                    class="field__input"
                    type="text"
                    placeholder="Enter task title"
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        title.set(event_target_value(&ev));
                        title_error.set(None);
                    }
                />
                {move || title_error.get().map(|msg| view! { <span class="field__error">{msg}</span> })}
            </label>

            <label class="field">
                <span class="field__label">"Description"</span>
                <textarea
                    class="field__input"
                    rows="3"
                    placeholder="Enter task description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <label class="field">
                <span class="field__label">"Status"</span>
                <select
                    class="field__input"
                    prop:value=move || status.get().as_str()
                    on:change=move |ev| {
                        if let Ok(s) = event_target_value(&ev).parse::<TaskStatus>() {
                            status.set(s);
                        }
                    }
                >
                    {TaskStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.display_name()}</option> })
                        .collect_view()}
                </select>
            </label>

            <div class="task-form__actions">
                <button type="button" class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { mode.pending_label() } else { mode.submit_label() }}
                </button>
            </div>
        </form>
    }
}
