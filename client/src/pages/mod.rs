//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is not a page concern: the session gate
//! and `SessionShell` decide whether a page is shown at all.

pub mod dashboard;
pub mod home;
pub mod sign_in;
pub mod sign_up;
pub mod test_connection;
