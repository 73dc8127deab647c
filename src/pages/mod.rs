//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it resolves its inputs from the
//! route, subscribes to the queries it needs, and maps their status to markup.

pub mod auth;
pub mod home;
pub mod legal;
