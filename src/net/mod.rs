//! Networking modules for the portal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the injectable request primitive, `api` maps endpoints onto it,
//! and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
