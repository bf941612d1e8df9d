//! Task dashboard: list, filters, stats and the task form dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only rendered once the session gate has confirmed the user. Tasks are
//! loaded through a `LocalResource` that also tracks the refresh epoch, so a
//! navigator `refresh()` reloads the list along with the session check.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::stat_card::StatCard;
use crate::components::task_form::TaskForm;
use crate::components::task_list::TaskList;
use crate::components::toaster::notify;
use crate::config;
use crate::net::api;
use crate::net::types::{Task, User};
use crate::state::tasks::{DashboardState, TaskEditor, TaskStats, remaining_label, visible_tasks};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::RefreshEpoch;

fn user_line(user: &User) -> String {
    if user.name.trim().is_empty() { format!("Signed in as {}", user.email) } else { format!("Signed in as {}", user.name) }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let refresh = expect_context::<RefreshEpoch>();
    let navigate = use_navigate();
    let state = RwSignal::new(DashboardState::default());

    let tasks = LocalResource::new(move || {
        refresh.track();
        api::fetch_my_tasks()
    });
    let me = LocalResource::new(api::fetch_me);

    let editor = Memo::new(move |_| state.with(|s| s.editor.clone()));
    let show_completed = Memo::new(move |_| state.with(|s| s.show_completed));

    let on_new = move |_| state.update(|s| s.editor = TaskEditor::Create);
    let on_toggle = move |_| state.update(|s| s.show_completed = !s.show_completed);
    let on_edit = Callback::new(move |task: Task| state.update(|s| s.editor = TaskEditor::Edit(task)));
    let on_close = Callback::new(move |()| state.update(|s| s.editor = TaskEditor::Closed));
    let on_saved = Callback::new(move |()| tasks.refetch());
    let on_delete = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            match api::delete_task(&id).await {
                Ok(()) => tasks.refetch(),
                Err(e) => notify(toasts, ToastKind::Error, format!("Error: {e}")),
            }
        });
    });

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::logout().await {
                Ok(()) => notify(toasts, ToastKind::Success, "Logged out successfully"),
                Err(e) => {
                    leptos::logging::warn!("logout failed: {e}");
                    notify(toasts, ToastKind::Error, format!("Error: {e}"));
                }
            }
            navigate(config::SIGN_IN, NavigateOptions::default());
        });
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <div>
                    <h1 class="dashboard__title">"Task Dashboard"</h1>
                    {move || {
                        me.get()
                            .and_then(Result::ok)
                            .flatten()
                            .map(|user| view! { <p class="dashboard__user">{user_line(&user)}</p> })
                    }}
                </div>
                <div class="dashboard__actions">
                    <button class="btn btn--primary" on:click=on_new>"New Task"</button>
                    <button class="btn" on:click=on_logout>"Logout"</button>
                </div>
            </header>

            <Suspense fallback=|| view! { <p class="dashboard__status">"Loading tasks..."</p> }>
                {move || {
                    tasks
                        .get()
                        .map(|result| match result {
                            Ok(all) => {
                                let stats = TaskStats::from_tasks(&all);
                                let visible = visible_tasks(&all, show_completed.get());
                                let filter = state.with(|s| (s.heading(), s.toggle_label()));
                                view! {
                                    <p class="dashboard__remaining">{remaining_label(visible.len())}</p>
                                    <section class="dashboard__stats">
                                        <StatCard label="Total" value=stats.total/>
                                        <StatCard label="Pending" value=stats.pending modifier="pending"/>
                                        <StatCard label="In Progress" value=stats.in_progress modifier="in-progress"/>
                                        <StatCard label="Completed" value=stats.completed modifier="completed"/>
                                    </section>
                                    <section class="dashboard__tasks">
                                        <div class="dashboard__filter">
                                            <h2>{filter.0}</h2>
                                            <button class="btn" on:click=on_toggle>{filter.1}</button>
                                        </div>
                                        <TaskList tasks=visible on_edit=on_edit on_delete=on_delete/>
                                    </section>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="dashboard__status dashboard__status--error">{format!("Error: {e}")}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            {move || {
                let editor = editor.get();
                editor
                    .is_open()
                    .then(|| {
                        let task = editor.task().cloned();
                        view! {
                            <div class="dialog-backdrop">
                                <div class="dialog" role="dialog" aria-modal="true">
                                    <TaskForm task=task on_close=on_close on_success=on_saved/>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
