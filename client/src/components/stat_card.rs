//! Single dashboard counter.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: usize, #[prop(optional)] modifier: &'static str) -> impl IntoView {
    let class = if modifier.is_empty() { "stat-card".to_owned() } else { format!("stat-card stat-card--{modifier}") };
    view! {
        <div class=class>
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
