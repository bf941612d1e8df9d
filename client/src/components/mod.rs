//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render task and session chrome while reading/writing shared
//! state from Leptos context providers.

pub mod session_shell;
pub mod stat_card;
pub mod task_form;
pub mod task_item;
pub mod task_list;
pub mod toaster;
