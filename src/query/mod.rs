//! Cache-aware resource reads.
//!
//! DESIGN
//! ======
//! `cache` owns stored values and their freshness, `status` is the tri-state
//! every reader renders from, and `hook` adapts both to Leptos signals.
//! Nothing here knows about specific endpoints.

pub mod cache;
pub mod clock;
pub mod hook;
pub mod key;
pub mod options;
pub mod status;
