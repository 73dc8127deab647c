//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the identity query and logout; `auth` is the flattened view
//! of it that guards and components render from.

pub mod auth;
pub mod session;
