//! HTTP handler modules.

pub mod auth;
